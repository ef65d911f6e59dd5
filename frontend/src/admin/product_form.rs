use sarhad_shared::protocol::{CreateProduct, DeleteProduct, UPLOAD_PRODUCT_IMAGES, UpdateProduct};
use sarhad_shared::{FIELD_PRODUCT_IMAGES, Product, ProductPayload, SpecList, UploadedImages};

use super::Draft;
use crate::client::{MultipartForm, StagedFile};
use crate::error::ApiError;

/// 产品编辑表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub specifications: SpecList,
    pub applications: Vec<String>,
    /// 已上传的图片 URL
    pub images: Vec<String>,
    pub is_featured: bool,
    /// 已选择但尚未上传的文件
    pub staged: Vec<StagedFile>,
}

impl ProductDraft {
    pub fn add_spec(&mut self, label: &str, value: &str) -> bool {
        self.specifications.insert(label, value)
    }

    pub fn remove_spec(&mut self, label: &str) {
        self.specifications.remove(label);
    }

    /// 空白或重复的用途会被忽略
    pub fn add_application(&mut self, application: &str) -> bool {
        let application = application.trim();
        if application.is_empty() || self.applications.iter().any(|a| a == application) {
            return false;
        }
        self.applications.push(application.to_string());
        true
    }

    pub fn remove_application(&mut self, application: &str) {
        self.applications.retain(|a| a != application);
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// 暂存选中的文件；任何一个为空文件则整批拒绝
    pub fn stage(&mut self, files: Vec<StagedFile>) -> Result<(), ApiError> {
        if let Some(empty) = files.iter().find(|f| f.is_empty()) {
            return Err(ApiError::validation(format!("{} is empty", empty.name)));
        }
        self.staged.extend(files);
        Ok(())
    }

    pub fn unstage(&mut self, index: usize) {
        if index < self.staged.len() {
            self.staged.remove(index);
        }
    }

    pub fn to_payload(&self) -> ProductPayload {
        let category = self.category.trim();
        ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
            specifications: self.specifications.clone(),
            applications: self.applications.clone(),
            images: self.images.clone(),
            is_featured: self.is_featured,
        }
    }
}

impl Draft for ProductDraft {
    type Record = Product;
    type Uploaded = UploadedImages;
    type Create = CreateProduct;
    type Update = UpdateProduct;
    type Delete = DeleteProduct;

    const NOUN: &'static str = "Product";
    const UPLOAD_PATH: &'static [&'static str] = &UPLOAD_PRODUCT_IMAGES;
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this product?";

    fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone().unwrap_or_default(),
            specifications: product.specifications.clone(),
            applications: product.applications.clone(),
            images: product.images.clone(),
            is_featured: product.is_featured,
            staged: Vec::new(),
        }
    }

    fn blank(_existing_len: usize) -> Self {
        Self::default()
    }

    fn record_id(product: &Product) -> &str {
        &product.id
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Product name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::validation("Description is required"));
        }
        if let Some(empty) = self.staged.iter().find(|f| f.is_empty()) {
            return Err(ApiError::validation(format!("{} is empty", empty.name)));
        }
        Ok(())
    }

    fn upload_form(&self) -> Option<MultipartForm> {
        if self.staged.is_empty() {
            return None;
        }
        let form = self
            .staged
            .iter()
            .cloned()
            .fold(MultipartForm::new(), |form, file| {
                form.file(FIELD_PRODUCT_IMAGES, file)
            });
        Some(form)
    }

    fn apply_upload(&mut self, uploaded: UploadedImages) -> Result<(), ApiError> {
        if uploaded.urls.is_empty() {
            return Err(ApiError::Decode(
                "No images were returned from the server.".to_string(),
            ));
        }
        self.images.extend(uploaded.urls);
        self.staged.clear();
        Ok(())
    }

    fn create_request(&self) -> CreateProduct {
        CreateProduct(self.to_payload())
    }

    fn update_request(&self, id: &str) -> UpdateProduct {
        UpdateProduct {
            id: id.to_string(),
            payload: self.to_payload(),
        }
    }

    fn delete_request(id: &str) -> DeleteProduct {
        DeleteProduct { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDraft {
        ProductDraft {
            name: "Barite".into(),
            description: "Drilling grade".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        let mut draft = ProductDraft::default();
        assert!(draft.validate().is_err());

        draft.name = "Barite".into();
        draft.description = "   ".into();
        assert!(draft.validate().is_err());

        draft.description = "Drilling grade".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_applications_skip_blank_and_duplicates() {
        let mut draft = filled();
        assert!(draft.add_application("Oil drilling"));
        assert!(!draft.add_application(" Oil drilling "));
        assert!(!draft.add_application("  "));
        assert!(draft.add_application("Paints"));
        assert_eq!(draft.applications, ["Oil drilling", "Paints"]);

        draft.remove_application("Oil drilling");
        assert_eq!(draft.applications, ["Paints"]);
    }

    #[test]
    fn test_specs_editing() {
        let mut draft = filled();
        assert!(draft.add_spec("SG", "4.2"));
        assert!(!draft.add_spec("", "x"));
        draft.remove_spec("SG");
        assert!(draft.specifications.is_empty());
    }

    #[test]
    fn test_remove_image_by_index() {
        let mut draft = filled();
        draft.images = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(draft.remove_image(1).as_deref(), Some("b"));
        assert_eq!(draft.remove_image(7), None);
        assert_eq!(draft.images, ["a", "c"]);
    }

    #[test]
    fn test_stage_rejects_empty_file() {
        let mut draft = filled();
        let err = draft
            .stage(vec![
                StagedFile::new("ok.jpg", "image/jpeg", vec![1]),
                StagedFile::new("blank.jpg", "image/jpeg", vec![]),
            ])
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("blank.jpg")));
        assert!(draft.staged.is_empty());
    }

    #[test]
    fn test_upload_form_uses_images_field() {
        let mut draft = filled();
        assert!(draft.upload_form().is_none());

        draft
            .stage(vec![
                StagedFile::new("a.jpg", "image/jpeg", vec![1]),
                StagedFile::new("b.png", "image/png", vec![2]),
            ])
            .unwrap();
        let form = draft.upload_form().unwrap();
        assert_eq!(form.parts().len(), 2);
        assert!(form.parts().iter().all(|(field, _)| field == "images"));
    }

    #[test]
    fn test_apply_upload_appends_and_clears_staged() {
        let mut draft = filled();
        draft.images = vec!["old".into()];
        draft
            .stage(vec![StagedFile::new("a.jpg", "image/jpeg", vec![1])])
            .unwrap();

        draft
            .apply_upload(UploadedImages {
                urls: vec!["new".into()],
            })
            .unwrap();
        assert_eq!(draft.images, ["old", "new"]);
        assert!(draft.staged.is_empty());
    }

    #[test]
    fn test_empty_upload_result_is_error() {
        let mut draft = filled();
        draft
            .stage(vec![StagedFile::new("a.jpg", "image/jpeg", vec![1])])
            .unwrap();
        assert!(draft.apply_upload(UploadedImages::default()).is_err());
        assert_eq!(draft.staged.len(), 1);
    }

    #[test]
    fn test_payload_trims_and_drops_blank_category() {
        let mut draft = filled();
        draft.name = "  Barite ".into();
        draft.category = "  ".into();
        let payload = draft.to_payload();
        assert_eq!(payload.name, "Barite");
        assert_eq!(payload.category, None);

        draft.category = "Sulfates".into();
        assert_eq!(draft.to_payload().category.as_deref(), Some("Sulfates"));
    }
}
