use crate::base::{APIResponse, BaseClient};
use kinderhub_api_structs::*;
use kinderhub_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct ActivityNotificationsInput {
    pub activity_id: ID,
    pub student_id: ID,
}

pub struct MarkNotificationReadInput {
    pub activity_id: ID,
    pub student_id: ID,
    pub class_group_subject_id: ID,
    pub student_activity_id: ID,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn query(
        &self,
        input: ActivityNotificationsInput,
    ) -> APIResponse<activity_notifications::APIResponse> {
        let body = activity_notifications::RequestBody {
            activity_id: input.activity_id,
            student_id: input.student_id,
        };
        self.base
            .post(body, "notifications/query".into(), StatusCode::OK)
            .await
    }

    pub async fn mark_read(
        &self,
        input: MarkNotificationReadInput,
    ) -> APIResponse<mark_notification_read::APIResponse> {
        let body = mark_notification_read::RequestBody {
            activity_id: input.activity_id,
            student_id: input.student_id,
            class_group_subject_id: input.class_group_subject_id,
            student_activity_id: input.student_activity_id,
        };
        self.base
            .post(body, "notifications/mark-read".into(), StatusCode::OK)
            .await
    }
}
