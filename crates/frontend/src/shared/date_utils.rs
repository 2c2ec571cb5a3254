/// Utilities for date and time formatting
///
/// Same patterns as the case list display types, so dates look alike
/// everywhere in the dossier.
use chrono::{DateTime, Local, Utc};
use contracts::domain::a002_case_list_column::{DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};

/// Example: 2024-03-15T14:02:26Z -> "15-03-2024 14:02" (UTC)
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format(DEFAULT_DATETIME_FORMAT).to_string()
}

/// Example: 2024-03-15T14:02:26Z -> "15-03-2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format(DEFAULT_DATE_FORMAT).to_string()
}

pub fn format_optional(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Browser-local rendering for timestamps the user just produced (notes).
pub fn format_local(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format(DEFAULT_DATETIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15-03-2024 14:02");
        assert_eq!(format_date(&dt), "15-03-2024");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "-");
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_optional(Some(&dt)), "31-12-2023 23:59");
    }
}
