use sarhad_shared::protocol::{
    CreateHeroSlide, DeleteHeroSlide, UPLOAD_HERO_IMAGE, UpdateHeroSlide,
};
use sarhad_shared::{FIELD_HERO_IMAGE, HeroPayload, HeroSlide, UploadedImage};

use super::Draft;
use crate::client::{MultipartForm, StagedFile};
use crate::error::ApiError;

/// 轮播图编辑表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroDraft {
    /// 已上传的图片 URL
    pub image: String,
    pub label: String,
    /// 越小越靠前
    pub order: i32,
    /// 新选择的图片，提交时上传并替换 `image`
    pub staged: Option<StagedFile>,
}

impl HeroDraft {
    pub fn stage(&mut self, file: StagedFile) -> Result<(), ApiError> {
        if file.is_empty() {
            return Err(ApiError::validation(format!("{} is empty", file.name)));
        }
        self.staged = Some(file);
        Ok(())
    }

    /// 解析输入框内容，非法输入按 0 处理
    pub fn set_order(&mut self, raw: &str) {
        self.order = raw.trim().parse().unwrap_or(0);
    }

    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty() || self.staged.is_some()
    }

    pub fn to_payload(&self) -> HeroPayload {
        let label = self.label.trim();
        HeroPayload {
            image: self.image.trim().to_string(),
            label: (!label.is_empty()).then(|| label.to_string()),
            order: self.order,
        }
    }
}

impl Draft for HeroDraft {
    type Record = HeroSlide;
    type Uploaded = UploadedImage;
    type Create = CreateHeroSlide;
    type Update = UpdateHeroSlide;
    type Delete = DeleteHeroSlide;

    const NOUN: &'static str = "Hero slide";
    const UPLOAD_PATH: &'static [&'static str] = &UPLOAD_HERO_IMAGE;
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this hero slide?";

    fn from_record(slide: &HeroSlide) -> Self {
        Self {
            image: slide.image.clone(),
            label: slide.label.clone().unwrap_or_default(),
            order: slide.order,
            staged: None,
        }
    }

    /// 新轮播图默认排在最后
    fn blank(existing_len: usize) -> Self {
        Self {
            order: i32::try_from(existing_len).unwrap_or(i32::MAX),
            ..Self::default()
        }
    }

    fn record_id(slide: &HeroSlide) -> &str {
        &slide.id
    }

    fn validate(&self) -> Result<(), ApiError> {
        if !self.has_image() {
            return Err(ApiError::validation("Please select an image"));
        }
        if let Some(file) = self.staged.as_ref().filter(|f| f.is_empty()) {
            return Err(ApiError::validation(format!("{} is empty", file.name)));
        }
        Ok(())
    }

    fn upload_form(&self) -> Option<MultipartForm> {
        self.staged
            .clone()
            .map(|file| MultipartForm::new().file(FIELD_HERO_IMAGE, file))
    }

    fn apply_upload(&mut self, uploaded: UploadedImage) -> Result<(), ApiError> {
        if uploaded.url.trim().is_empty() {
            return Err(ApiError::Decode(
                "No image URL was returned from the server.".to_string(),
            ));
        }
        self.image = uploaded.url;
        self.staged = None;
        Ok(())
    }

    fn create_request(&self) -> CreateHeroSlide {
        CreateHeroSlide(self.to_payload())
    }

    fn update_request(&self, id: &str) -> UpdateHeroSlide {
        UpdateHeroSlide {
            id: id.to_string(),
            payload: self.to_payload(),
        }
    }

    fn delete_request(id: &str) -> DeleteHeroSlide {
        DeleteHeroSlide { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_or_staged_file_required() {
        let mut draft = HeroDraft::default();
        assert!(draft.validate().is_err());

        draft
            .stage(StagedFile::new("h.jpg", "image/jpeg", vec![1, 2]))
            .unwrap();
        assert!(draft.validate().is_ok());

        let existing = HeroDraft {
            image: "https://cdn.test/h.jpg".into(),
            ..Default::default()
        };
        assert!(existing.validate().is_ok());
    }

    #[test]
    fn test_blank_orders_after_existing_slides() {
        assert_eq!(HeroDraft::blank(4).order, 4);
        assert_eq!(HeroDraft::blank(0).order, 0);
    }

    #[test]
    fn test_order_input_parsing() {
        let mut draft = HeroDraft::default();
        draft.set_order(" 7 ");
        assert_eq!(draft.order, 7);
        draft.set_order("abc");
        assert_eq!(draft.order, 0);
    }

    #[test]
    fn test_stage_rejects_empty_file() {
        let mut draft = HeroDraft::default();
        assert!(draft.stage(StagedFile::new("h.jpg", "image/jpeg", vec![])).is_err());
        assert!(draft.staged.is_none());
    }

    #[test]
    fn test_upload_replaces_image() {
        let mut draft = HeroDraft {
            image: "old".into(),
            ..Default::default()
        };
        draft
            .stage(StagedFile::new("h.jpg", "image/jpeg", vec![1]))
            .unwrap();

        let form = draft.upload_form().unwrap();
        assert_eq!(form.parts()[0].0, "image");

        draft
            .apply_upload(UploadedImage { url: "new".into() })
            .unwrap();
        assert_eq!(draft.image, "new");
        assert!(draft.staged.is_none());
    }

    #[test]
    fn test_payload_omits_blank_label() {
        let draft = HeroDraft {
            image: "a.jpg".into(),
            label: " ".into(),
            order: 2,
            staged: None,
        };
        let payload = draft.to_payload();
        assert_eq!(payload.label, None);
        assert_eq!(payload.order, 2);
    }
}
