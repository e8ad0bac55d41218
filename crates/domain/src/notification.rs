use crate::date::parse_due_date;
use crate::shared::entity::ID;
use chrono::NaiveDateTime;

/// A pending activity notification.
///
/// Records only exist for activities whose due date is still in the future:
/// [`NotificationRecord::new_if_pending`] is the only constructor and it
/// refuses anything else. `is_read` starts out `false` and is flipped by the
/// reconciler once the backend has confirmed the read receipt.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub activity_id: ID,
    pub student_id: ID,
    pub class_group_subject_id: ID,
    pub student_activity_id: ID,
    pub activity_name: String,
    pub due_date: NaiveDateTime,
    pub is_read: bool,
}

impl NotificationRecord {
    /// Builds a record from a raw server row, or `None` when the due date is
    /// not strictly after `now`. Due-date text that fails to parse counts as
    /// already past.
    pub fn new_if_pending(
        activity_id: ID,
        student_id: ID,
        class_group_subject_id: ID,
        student_activity_id: ID,
        activity_name: String,
        due_date: &str,
        now: NaiveDateTime,
    ) -> Option<Self> {
        let due_date = match parse_due_date(due_date) {
            Ok(due_date) if due_date > now => due_date,
            _ => return None,
        };
        Some(Self {
            activity_id,
            student_id,
            class_group_subject_id,
            student_activity_id,
            activity_name,
            due_date,
            is_read: false,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn pending(due_date: &str, now: NaiveDateTime) -> Option<NotificationRecord> {
        NotificationRecord::new_if_pending(
            ID::new(),
            ID::new(),
            ID::new(),
            ID::new(),
            "Kindness Tree Project".into(),
            due_date,
            now,
        )
    }

    fn now_2024() -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 6, 1).and_hms(12, 0, 0)
    }

    #[test]
    fn it_keeps_only_strictly_future_due_dates() {
        let record = pending("01/01/2099 10:00:00 am", now_2024()).unwrap();
        assert!(!record.is_read);
        assert_eq!(record.due_date, NaiveDate::from_ymd(2099, 1, 1).and_hms(10, 0, 0));

        assert!(pending("01/01/2000 10:00:00 am", now_2024()).is_none());
    }

    #[test]
    fn a_due_date_equal_to_now_is_not_pending() {
        assert!(pending("01/06/2024 12:00:00 pm", now_2024()).is_none());
    }

    #[test]
    fn malformed_due_dates_never_become_records() {
        assert!(pending("not a date", now_2024()).is_none());
        assert!(pending("2099-01-01T10:00:00Z", now_2024()).is_none());
        assert!(pending("", now_2024()).is_none());
    }
}
