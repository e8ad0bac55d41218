use crate::base::{APIResponse, BaseClient};
use kinderhub_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ClassGroupSubjectClient {
    base: Arc<BaseClient>,
}

impl ClassGroupSubjectClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_class_group_subjects::APIResponse> {
        self.base
            .get("class-group-subjects/list".into(), StatusCode::OK)
            .await
    }
}
