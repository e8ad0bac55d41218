mod activity;
mod class_group;
mod date;
mod notification;
mod shared;

pub use activity::{
    clamp_weightage, ActivityDraft, Attachment, FieldError, ValidatedActivity, ValidationErrors,
    DEFAULT_WEIGHTAGE_PERCENT,
};
pub use class_group::{
    class_group_choices, subjects_for_class_group, ClassGroupChoice, ClassGroupSubjectOption,
    SubjectOption,
};
pub use date::{format_submission_date, parse_due_date, DUE_DATE_FORMAT};
pub use notification::NotificationRecord;
pub use shared::entity::{InvalidIDError, ID};
