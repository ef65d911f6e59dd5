//! 读取 `<input type="file">` 选中的文件

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::client::StagedFile;
use crate::error::ApiError;

async fn read(file: &File) -> Result<StagedFile, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::validation(format!("Could not read {}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(StagedFile::new(file.name(), file.type_(), bytes))
}

/// 读取全部选中文件并清空输入框，便于再次选择同一文件
pub async fn take_selected(input: &HtmlInputElement) -> Result<Vec<StagedFile>, ApiError> {
    let mut staged = Vec::new();
    if let Some(list) = input.files() {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                staged.push(read(&file).await?);
            }
        }
    }
    input.set_value("");
    Ok(staged)
}
