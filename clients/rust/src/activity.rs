use crate::base::{APIResponse, BaseClient};
use chrono::NaiveDate;
use kinderhub_api_structs::*;
use kinderhub_domain::{format_submission_date, Attachment, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ActivityClient {
    base: Arc<BaseClient>,
}

pub struct CreateActivityInput {
    pub title: String,
    pub description: String,
    pub activity_name: String,
    pub due_date: NaiveDate,
    pub class_group_id: ID,
    pub teacher_id: ID,
    pub weightage_percent: i64,
    pub subject_id: Option<ID>,
    pub attachment: Option<Attachment>,
}

impl ActivityClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateActivityInput,
    ) -> APIResponse<create_activity::APIResponse> {
        let (file_base64, file_name) = match input.attachment {
            Some(attachment) => (Some(attachment.file_base64), Some(attachment.file_name)),
            None => (None, None),
        };
        let body = create_activity::RequestBody {
            title: input.title,
            description: input.description,
            activity_name: input.activity_name,
            due_date: format_submission_date(input.due_date),
            class_group_id: input.class_group_id,
            teacher_id: input.teacher_id,
            weightage_percent: input.weightage_percent,
            subject_id: input.subject_id,
            file_base64,
            file_name,
        };
        self.base
            .post(body, "activities/create".into(), StatusCode::CREATED)
            .await
    }
}
