use crate::class_group::{subjects_for_class_group, ClassGroupSubjectOption};
use crate::shared::entity::ID;
use chrono::NaiveDate;
use thiserror::Error;

pub const DEFAULT_WEIGHTAGE_PERCENT: i64 = 50;

const TITLE_MIN_LEN: usize = 2;
const TITLE_MAX_LEN: usize = 100;
const DESCRIPTION_MIN_LEN: usize = 10;
const DESCRIPTION_MAX_LEN: usize = 1000;
const ACTIVITY_NAME_MIN_LEN: usize = 2;
const ACTIVITY_NAME_MAX_LEN: usize = 50;

const WEIGHTAGE_MIN: i64 = 1;
const WEIGHTAGE_MAX: i64 = 100;

/// An optional binary payload for an activity. The two fields travel
/// together: an attachment either has both or the draft has none.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_base64: String,
    pub file_name: String,
}

/// An in-progress activity creation payload, mutated field by field and
/// submitted as an immutable snapshot once [`ActivityDraft::validate`]
/// passes.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub activity_name: String,
    pub due_date: Option<NaiveDate>,
    pub class_group_id: Option<ID>,
    pub subject_id: Option<ID>,
    pub weightage_percent: Option<i64>,
    pub teacher_id: ID,
    pub attachment: Option<Attachment>,
}

/// The outcome of a successful validation pass: every required field is
/// present, so submission does not have to re-check optionals.
#[derive(Debug, Clone)]
pub struct ValidatedActivity {
    pub title: String,
    pub description: String,
    pub activity_name: String,
    pub due_date: NaiveDate,
    pub class_group_id: ID,
    pub subject_id: Option<ID>,
    pub weightage_percent: i64,
    pub teacher_id: ID,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("Activity draft failed validation ({} field errors)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Weightage input handling: numeric input is clamped into `[1, 100]`,
/// anything non-numeric resolves to the explicit empty state.
pub fn clamp_weightage(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|value| value.max(WEIGHTAGE_MIN).min(WEIGHTAGE_MAX))
}

impl ActivityDraft {
    pub fn new(teacher_id: ID) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            activity_name: String::new(),
            due_date: None,
            class_group_id: None,
            subject_id: None,
            weightage_percent: Some(DEFAULT_WEIGHTAGE_PERCENT),
            teacher_id,
            attachment: None,
        }
    }

    /// Runs every field constraint against the class-group/subject lookup
    /// table and `today`. Either all constraints hold and a
    /// [`ValidatedActivity`] snapshot comes back, or the full error set does.
    pub fn validate(
        &self,
        options: &[ClassGroupSubjectOption],
        today: NaiveDate,
    ) -> Result<ValidatedActivity, ValidationErrors> {
        let mut errors = Vec::new();

        check_text_field(
            &mut errors,
            "title",
            "Title",
            &self.title,
            TITLE_MIN_LEN,
            TITLE_MAX_LEN,
        );
        check_text_field(
            &mut errors,
            "description",
            "Description",
            &self.description,
            DESCRIPTION_MIN_LEN,
            DESCRIPTION_MAX_LEN,
        );
        check_text_field(
            &mut errors,
            "activityName",
            "Activity name",
            &self.activity_name,
            ACTIVITY_NAME_MIN_LEN,
            ACTIVITY_NAME_MAX_LEN,
        );

        match self.due_date {
            None => errors.push(FieldError {
                field: "dueDate",
                message: "Due date is required".into(),
            }),
            Some(due_date) if due_date < today => errors.push(FieldError {
                field: "dueDate",
                message: "Due date cannot be in the past".into(),
            }),
            Some(_) => {}
        }

        match &self.class_group_id {
            None => errors.push(FieldError {
                field: "classGroupId",
                message: "Please select a class level".into(),
            }),
            Some(class_group_id) => {
                if !options.iter().any(|o| &o.class_group_id == class_group_id) {
                    errors.push(FieldError {
                        field: "classGroupId",
                        message: "The selected class level is unknown".into(),
                    });
                } else if let Some(subject_id) = &self.subject_id {
                    let subjects = subjects_for_class_group(options, class_group_id);
                    if !subjects.iter().any(|s| &s.id == subject_id) {
                        errors.push(FieldError {
                            field: "subjectId",
                            message: "The selected subject does not belong to the selected class level"
                                .into(),
                        });
                    }
                }
            }
        }
        if self.class_group_id.is_none() && self.subject_id.is_some() {
            errors.push(FieldError {
                field: "subjectId",
                message: "A subject requires a class level".into(),
            });
        }

        match self.weightage_percent {
            None => errors.push(FieldError {
                field: "weightagePercent",
                message: "Weightage is required".into(),
            }),
            Some(weightage) if weightage < WEIGHTAGE_MIN => errors.push(FieldError {
                field: "weightagePercent",
                message: "Weightage must be at least 1".into(),
            }),
            Some(weightage) if weightage > WEIGHTAGE_MAX => errors.push(FieldError {
                field: "weightagePercent",
                message: "Weightage must be at most 100".into(),
            }),
            Some(_) => {}
        }

        match (
            self.due_date,
            self.class_group_id.clone(),
            self.weightage_percent,
        ) {
            (Some(due_date), Some(class_group_id), Some(weightage_percent))
                if errors.is_empty() =>
            {
                Ok(ValidatedActivity {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    activity_name: self.activity_name.clone(),
                    due_date,
                    class_group_id,
                    subject_id: self.subject_id.clone(),
                    weightage_percent,
                    teacher_id: self.teacher_id.clone(),
                    attachment: self.attachment.clone(),
                })
            }
            _ => Err(ValidationErrors { errors }),
        }
    }
}

fn check_text_field(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        errors.push(FieldError {
            field,
            message: format!("{} must be at least {} characters long", label, min),
        });
    } else if len > max {
        errors.push(FieldError {
            field,
            message: format!("{} must be less than {} characters", label, max),
        });
    }
}
