mod activity;
mod base;
mod class_group;
mod form;
mod grade;
mod notification;
mod reconciler;
mod student;

use activity::ActivityClient;
pub use activity::CreateActivityInput;
use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use class_group::ClassGroupSubjectClient;
pub use form::{ActivityForm, AttachError, SubmitError};
use grade::GradeClient;
use notification::NotificationClient;
pub use notification::{ActivityNotificationsInput, MarkNotificationReadInput};
pub use reconciler::{DismissError, NotificationReconciler};
use std::sync::Arc;
use student::StudentClient;

pub use kinderhub_api_structs::dtos::*;

// Domain
pub use kinderhub_domain::{
    clamp_weightage, class_group_choices, format_submission_date, parse_due_date,
    subjects_for_class_group, ActivityDraft, Attachment, ClassGroupChoice,
    ClassGroupSubjectOption, FieldError, NotificationRecord, SubjectOption, ValidatedActivity,
    ValidationErrors, DEFAULT_WEIGHTAGE_PERCENT, DUE_DATE_FORMAT, ID,
};

/// Kinderhub client SDK
///
/// The SDK contains methods for interacting with the Kinderhub server API,
/// plus the two stateful view components built on top of them:
/// [`NotificationReconciler`] and [`ActivityForm`].
#[derive(Clone)]
pub struct KinderhubSDK {
    pub student: StudentClient,
    pub notification: NotificationClient,
    pub class_group_subject: ClassGroupSubjectClient,
    pub activity: ActivityClient,
    pub grade: GradeClient,
}

impl KinderhubSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let student = StudentClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let class_group_subject = ClassGroupSubjectClient::new(base.clone());
        let activity = ActivityClient::new(base.clone());
        let grade = GradeClient::new(base);

        Self {
            student,
            notification,
            class_group_subject,
            activity,
            grade,
        }
    }
}
