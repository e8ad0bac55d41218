use crate::activity::{ActivityClient, CreateActivityInput};
use crate::base::{APIError, APIResponse};
use crate::class_group::ClassGroupSubjectClient;
use crate::KinderhubSDK;
use chrono::{NaiveDate, Utc};
use kinderhub_domain::{
    clamp_weightage, class_group_choices, subjects_for_class_group, ActivityDraft, Attachment,
    ClassGroupChoice, ClassGroupSubjectOption, SubjectOption, ValidatedActivity, ValidationErrors,
    ID,
};
use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, error, warn};

/// The activity-creation workflow: a class-group selection narrows the
/// subject choices, structured input is validated per field, an optional
/// file is inlined as base64 and the whole draft goes out as one request.
pub struct ActivityForm {
    class_group_subject: ClassGroupSubjectClient,
    activity: ActivityClient,
    options: Vec<ClassGroupSubjectOption>,
    draft: ActivityDraft,
    attachment: Arc<Mutex<AttachmentSlot>>,
}

/// Shared attachment state. The generation counter makes file selection
/// last-write-wins: a conversion that finishes after a newer selection has
/// bumped the generation discards its result.
struct AttachmentSlot {
    generation: u64,
    attachment: Option<Attachment>,
}

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("Failed to read attachment: {0}")]
    Read(#[from] std::io::Error),
    #[error("A newer file selection replaced this one")]
    Superseded,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Activity draft failed validation")]
    Validation(#[from] ValidationErrors),
    #[error("Failed to create activity: {0}")]
    Api(#[from] APIError),
}

impl ActivityForm {
    pub fn new(sdk: &KinderhubSDK, teacher_id: ID) -> Self {
        Self {
            class_group_subject: sdk.class_group_subject.clone(),
            activity: sdk.activity.clone(),
            options: Vec::new(),
            draft: ActivityDraft::new(teacher_id),
            attachment: Arc::new(Mutex::new(AttachmentSlot {
                generation: 0,
                attachment: None,
            })),
        }
    }

    /// Fetches the class-group/subject lookup table. On failure the option
    /// set is empty and the error is returned so the view can show a notice;
    /// text-field entry keeps working either way.
    pub async fn load_options(&mut self) -> APIResponse<()> {
        match self.class_group_subject.list().await {
            Ok(list) => {
                self.options = list.into_iter().map(ClassGroupSubjectOption::from).collect();
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load class group subjects: {}", e);
                self.options = Vec::new();
                Err(e)
            }
        }
    }

    pub fn class_group_choices(&self) -> Vec<ClassGroupChoice> {
        class_group_choices(&self.options)
    }

    /// The dependent option set for the current class-group selection.
    pub fn available_subjects(&self) -> Vec<SubjectOption> {
        match &self.draft.class_group_id {
            Some(class_group_id) => subjects_for_class_group(&self.options, class_group_id),
            None => Vec::new(),
        }
    }

    /// Changing the class group always clears the chosen subject, even when
    /// the old subject would still be valid under the new group.
    pub fn set_class_group(&mut self, class_group_id: Option<ID>) {
        self.draft.class_group_id = class_group_id;
        self.draft.subject_id = None;
    }

    /// Accepts the subject only if it belongs to the current dependent set.
    pub fn set_subject(&mut self, subject_id: Option<ID>) -> bool {
        match subject_id {
            None => {
                self.draft.subject_id = None;
                true
            }
            Some(subject_id) => {
                if self.available_subjects().iter().any(|s| s.id == subject_id) {
                    self.draft.subject_id = Some(subject_id);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
    }

    pub fn set_activity_name(&mut self, activity_name: &str) {
        self.draft.activity_name = activity_name.to_string();
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.draft.due_date = due_date;
    }

    /// Raw weightage input: clamped into `[1, 100]`, non-numeric input
    /// resolves to unset rather than keeping a stale number.
    pub fn set_weightage(&mut self, raw: &str) {
        self.draft.weightage_percent = clamp_weightage(raw);
    }

    /// The draft as it would be submitted right now.
    pub fn draft(&self) -> ActivityDraft {
        let mut draft = self.draft.clone();
        draft.attachment = self.attachment();
        draft
    }

    pub fn attachment(&self) -> Option<Attachment> {
        self.slot().attachment.clone()
    }

    pub fn clear_attachment(&self) {
        let mut slot = self.slot();
        // Bumping the generation also invalidates in-flight conversions.
        slot.generation += 1;
        slot.attachment = None;
    }

    /// Converts `data` to a base64 attachment. Selecting another file while
    /// a conversion is in flight wins: the older conversion discards its
    /// result when it completes. A failed read clears the attachment (both
    /// fields together) instead of leaving a half-set payload.
    pub async fn attach<F>(&self, file_name: &str, data: F) -> Result<(), AttachError>
    where
        F: Future<Output = std::io::Result<Vec<u8>>>,
    {
        let ticket = {
            let mut slot = self.slot();
            slot.generation += 1;
            slot.generation
        };

        let bytes = match data.await {
            Ok(bytes) => bytes,
            Err(e) => {
                let mut slot = self.slot();
                if slot.generation == ticket {
                    slot.attachment = None;
                }
                error!("Failed to read attachment {}: {}", file_name, e);
                return Err(AttachError::Read(e));
            }
        };
        let file_base64 = base64::encode(&bytes);

        let mut slot = self.slot();
        if slot.generation != ticket {
            debug!("Discarding stale attachment conversion for {}", file_name);
            return Err(AttachError::Superseded);
        }
        slot.attachment = Some(Attachment {
            file_base64,
            file_name: file_name.to_string(),
        });
        Ok(())
    }

    pub async fn attach_file(&self, path: &Path) -> Result<(), AttachError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.attach(&file_name, tokio::fs::read(path.to_path_buf())).await
    }

    pub fn validate(&self) -> Result<ValidatedActivity, ValidationErrors> {
        self.draft()
            .validate(&self.options, Utc::now().naive_utc().date())
    }

    /// Validates and submits the draft as a single creation request. The form
    /// does not clear itself on success; the caller owns navigation/reset.
    pub async fn submit(&self) -> Result<ID, SubmitError> {
        let valid = self.validate()?;
        let input = CreateActivityInput {
            title: valid.title,
            description: valid.description,
            activity_name: valid.activity_name,
            due_date: valid.due_date,
            class_group_id: valid.class_group_id,
            teacher_id: valid.teacher_id,
            weightage_percent: valid.weightage_percent,
            subject_id: valid.subject_id,
            attachment: valid.attachment,
        };
        match self.activity.create(input).await {
            Ok(res) => Ok(res.activity_id),
            Err(e) => {
                error!("Failed to create activity: {}", e);
                Err(e.into())
            }
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, AttachmentSlot> {
        match self.attachment.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    fn form_with_options(options: Vec<ClassGroupSubjectOption>) -> ActivityForm {
        let sdk = KinderhubSDK::new("http://localhost:0");
        let mut form = ActivityForm::new(&sdk, ID::new());
        form.options = options;
        form
    }

    fn option_row(class_group_id: &ID, subject_id: &ID, subject_name: &str) -> ClassGroupSubjectOption {
        ClassGroupSubjectOption {
            class_group_id: class_group_id.clone(),
            class_group_name: "Grade 1".into(),
            subject_id: subject_id.clone(),
            subject_name: subject_name.into(),
        }
    }

    #[test]
    fn changing_class_group_always_resets_subject() {
        let class_a = ID::new();
        let class_b = ID::new();
        let s1 = ID::new();
        let form_options = vec![
            option_row(&class_a, &s1, "Maths"),
            option_row(&class_b, &s1, "Maths"),
        ];
        let mut form = form_with_options(form_options);

        form.set_class_group(Some(class_a));
        assert!(form.set_subject(Some(s1.clone())));
        assert_eq!(form.draft().subject_id, Some(s1.clone()));

        // S1 is also valid under class B, the reset still happens.
        form.set_class_group(Some(class_b));
        assert_eq!(form.draft().subject_id, None);
        assert_eq!(form.available_subjects(), vec![SubjectOption { id: s1, name: "Maths".into() }]);
    }

    #[test]
    fn a_subject_outside_the_dependent_set_is_rejected() {
        let class_a = ID::new();
        let s1 = ID::new();
        let mut form = form_with_options(vec![option_row(&class_a, &s1, "Maths")]);

        form.set_class_group(Some(class_a));
        assert!(!form.set_subject(Some(ID::new())));
        assert_eq!(form.draft().subject_id, None);
    }

    #[test]
    fn no_class_group_means_no_subject_choices() {
        let class_a = ID::new();
        let form = form_with_options(vec![option_row(&class_a, &ID::new(), "Maths")]);
        assert!(form.available_subjects().is_empty());
    }

    #[test]
    fn weightage_input_is_clamped_or_cleared() {
        let mut form = form_with_options(Vec::new());
        form.set_weightage("0");
        assert_eq!(form.draft().weightage_percent, Some(1));
        form.set_weightage("150");
        assert_eq!(form.draft().weightage_percent, Some(100));
        form.set_weightage("abc");
        assert_eq!(form.draft().weightage_percent, None);
    }

    #[test]
    fn the_latest_file_selection_wins() {
        let form = form_with_options(Vec::new());
        let (tx, rx) = oneshot::channel::<()>();

        let first = form.attach("first.pdf", async move {
            // Held back until the second selection has landed.
            let _ = rx.await;
            Ok(b"first".to_vec())
        });
        let second = async {
            form.attach("second.pdf", async { Ok(b"second".to_vec()) })
                .await
                .expect("Expected second attachment to be stored");
            tx.send(()).expect("Expected first conversion to be waiting");
        };

        let (first_res, _) = block_on(async { futures::join!(first, second) });
        assert!(matches!(first_res, Err(AttachError::Superseded)));

        let attachment = form.attachment().expect("Expected an attachment");
        assert_eq!(attachment.file_name, "second.pdf");
        assert_eq!(attachment.file_base64, base64::encode(b"second"));
    }

    #[test]
    fn a_failed_conversion_clears_the_attachment() {
        let form = form_with_options(Vec::new());
        block_on(form.attach("first.pdf", async { Ok(b"first".to_vec()) }))
            .expect("Expected first attachment to be stored");
        assert!(form.attachment().is_some());

        let res = block_on(form.attach("broken.pdf", async {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk error"))
        }));
        assert!(matches!(res, Err(AttachError::Read(_))));
        assert!(form.attachment().is_none());
    }

    #[test]
    fn clearing_the_attachment_invalidates_inflight_conversions() {
        let form = form_with_options(Vec::new());
        let (tx, rx) = oneshot::channel::<()>();

        let slow = form.attach("slow.pdf", async move {
            let _ = rx.await;
            Ok(b"slow".to_vec())
        });
        let clear = async {
            form.clear_attachment();
            tx.send(()).expect("Expected conversion to be waiting");
        };

        let (res, _) = block_on(async { futures::join!(slow, clear) });
        assert!(matches!(res, Err(AttachError::Superseded)));
        assert!(form.attachment().is_none());
    }

    #[test]
    fn validation_requires_the_class_group_to_be_known() {
        let mut form = form_with_options(Vec::new());
        form.set_title("Kindness Tree Project");
        form.set_description("Build a kindness tree together.");
        form.set_activity_name("DIY Kindness Tree");
        form.set_due_date(Some(Utc::now().naive_utc().date()));
        form.set_class_group(Some(ID::new()));

        let errors = form.validate().unwrap_err();
        assert!(errors.field("classGroupId").is_some());
    }
}
