use chrono::prelude::*;

/// Wire format for activity due dates, e.g. `17/05/2026 09:30:00 PM`.
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

pub fn parse_due_date(datestr: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(datestr.trim(), DUE_DATE_FORMAT)
        .map_err(|_| anyhow::Error::msg(String::from(datestr)))
}

/// Canonical absolute-time representation submitted to the backend: the
/// picked calendar day at UTC midnight, RFC 3339.
pub fn format_submission_date(date: NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_hms(0, 0, 0)).to_rfc3339()
}
