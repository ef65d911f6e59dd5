//! 管理端写入流程
//!
//! 产品和轮播图共用同一套流程：编辑草稿 -> 校验 -> 上传暂存文件 ->
//! 创建/更新 -> 成功后刷新列表一次。失败时保留草稿，便于用户直接重试。
//!
//! 本模块不依赖 Leptos，组件只负责把信号里的 `MutationFlow` 取出、
//! 执行、再通过 `settle` 写回。

mod hero_form;
mod product_form;


pub use hero_form::HeroDraft;
pub use product_form::ProductDraft;

use sarhad_shared::protocol::ApiRequest;
use serde::de::DeserializeOwned;

use crate::client::{ApiClient, MultipartForm, Transport};
use crate::error::ApiError;

/// 可编辑记录的本地草稿
pub trait Draft: Clone + Default + PartialEq {
    /// 后端返回的记录类型
    type Record;
    /// 上传接口的响应体
    type Uploaded: DeserializeOwned;
    type Create: ApiRequest;
    type Update: ApiRequest;
    type Delete: ApiRequest;

    /// 用于提示文案，如 "Product"
    const NOUN: &'static str;
    const UPLOAD_PATH: &'static [&'static str];
    const DELETE_PROMPT: &'static str;

    fn from_record(record: &Self::Record) -> Self;
    /// 新建记录时的初始草稿，`existing_len` 为当前列表长度
    fn blank(existing_len: usize) -> Self;
    fn record_id(record: &Self::Record) -> &str;

    /// 只检查必填项，不做格式校验
    fn validate(&self) -> Result<(), ApiError>;

    /// 暂存文件组成的上传表单；没有暂存文件时返回 `None`
    fn upload_form(&self) -> Option<MultipartForm>;
    /// 合并上传结果并清空暂存
    fn apply_upload(&mut self, uploaded: Self::Uploaded) -> Result<(), ApiError>;

    fn create_request(&self) -> Self::Create;
    fn update_request(&self, id: &str) -> Self::Update;
    fn delete_request(id: &str) -> Self::Delete;
}

/// 短暂显示的操作结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationFlow<D> {
    pub draft: D,
    editing: Option<String>,
    notice: Option<Notice>,
}

impl<D: Draft> MutationFlow<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开编辑对话框：传入记录则编辑，否则新建
    pub fn open_for_edit(&mut self, record: Option<&D::Record>, existing_len: usize) {
        match record {
            Some(record) => {
                self.draft = D::from_record(record);
                self.editing = Some(D::record_id(record).to_string());
            }
            None => {
                self.draft = D::blank(existing_len);
                self.editing = None;
            }
        }
        self.notice = None;
    }

    /// 关闭对话框后回到空白状态（保留列表级提示）
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.editing = None;
    }

    /// 写回一次异步操作的结果
    ///
    /// `started` 是操作开始时的快照。期间流程未被改动才整体采用 `finished`，
    /// 否则保留当前的草稿和编辑目标，只取结果提示。
    pub fn settle(&mut self, started: &Self, finished: Self) {
        if *self == *started {
            *self = finished;
        } else {
            self.notice = finished.notice;
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// 保存草稿，成功后调用一次 `refetch`
    pub async fn submit<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        refetch: impl FnOnce(),
    ) -> Result<(), ApiError> {
        self.notice = None;

        match self.save(client).await {
            Ok(action) => {
                tracing::info!(record = D::NOUN, action, "record saved");
                refetch();
                self.notice = Some(Notice::Success(format!(
                    "{} {} successfully",
                    D::NOUN,
                    action
                )));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(record = D::NOUN, error = %e, "save failed, draft kept");
                self.notice = Some(Notice::Error(e.to_string()));
                Err(e)
            }
        }
    }

    async fn save<T: Transport>(&mut self, client: &ApiClient<T>) -> Result<&'static str, ApiError> {
        self.draft.validate()?;

        // 先上传，上传失败时不会创建任何记录
        if let Some(form) = self.draft.upload_form() {
            let uploaded: D::Uploaded = client.upload(D::UPLOAD_PATH, form).await?;
            self.draft.apply_upload(uploaded)?;
        }

        match &self.editing {
            Some(id) => {
                client.call(&self.draft.update_request(id)).await?;
                Ok("updated")
            }
            None => {
                client.call(&self.draft.create_request()).await?;
                Ok("created")
            }
        }
    }

    /// 删除记录；`confirm` 返回 `false` 时不发请求并返回 `Ok(false)`
    pub async fn delete<T: Transport>(
        &mut self,
        id: &str,
        confirm: impl FnOnce(&str) -> bool,
        client: &ApiClient<T>,
        refetch: impl FnOnce(),
    ) -> Result<bool, ApiError> {
        if !confirm(D::DELETE_PROMPT) {
            return Ok(false);
        }
        self.notice = None;

        match client.call(&D::delete_request(id)).await {
            Ok(_) => {
                tracing::info!(record = D::NOUN, id, "record deleted");
                refetch();
                self.notice = Some(Notice::Success(format!("{} deleted successfully", D::NOUN)));
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(record = D::NOUN, id, error = %e, "delete failed");
                self.notice = Some(Notice::Error(e.to_string()));
                Err(e)
            }
        }
    }
}
