//! Date and Duration Formatting
//!
//! Sample data carries ISO-8601 dates (`2024-01-15`) and RFC 3339
//! timestamps (`2024-01-15T09:30:00Z`). Values that fail to parse are
//! shown verbatim rather than dropped.

use chrono::{DateTime, NaiveDate};

/// Render a date (or the date part of a timestamp) as `dd/mm/yyyy`
pub fn format_date(value: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    value.to_string()
}

/// Render a timestamp as `dd/mm/yyyy hh:mm`
pub fn format_date_time(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => timestamp.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Whole minutes between request and response, if both are present and parse
pub fn response_minutes(request: &str, response: Option<&str>) -> Option<i64> {
    let response = response?;
    let requested = DateTime::parse_from_rfc3339(request).ok()?;
    let responded = DateTime::parse_from_rfc3339(response).ok()?;
    Some((responded - requested).num_minutes())
}

/// Response-time column text: `"45 mins"`, or `"N/A"` when still pending
pub fn response_time_label(request: &str, response: Option<&str>) -> String {
    match response_minutes(request, response) {
        Some(minutes) => format!("{minutes} mins"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-01-15"), "15/01/2024");
    }

    #[test]
    fn formats_the_date_part_of_timestamps() {
        assert_eq!(format_date("2024-01-15T09:30:00Z"), "15/01/2024");
        assert_eq!(format_date_time("2024-01-15T09:30:00Z"), "15/01/2024 09:30");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_date("tomorrow"), "tomorrow");
        assert_eq!(format_date_time(""), "");
    }

    #[test]
    fn computes_response_minutes() {
        assert_eq!(
            response_minutes("2024-01-15T09:30:00Z", Some("2024-01-15T10:15:00Z")),
            Some(45)
        );
    }

    #[test]
    fn missing_response_time_is_not_applicable() {
        assert_eq!(response_time_label("2024-01-15T09:30:00Z", None), "N/A");
        assert_eq!(
            response_time_label("2024-01-15T09:30:00Z", Some("2024-01-15T09:45:00Z")),
            "15 mins"
        );
    }
}
