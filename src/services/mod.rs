use chrono::{NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult};

pub mod order_service;
pub mod reservation_service;

/// A required field is rejected when it is absent or blank.
pub(crate) fn required(value: &Option<String>) -> AppResult<&str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest("Missing required fields".into())),
    }
}

pub(crate) fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date, expected YYYY-MM-DD".into()))
}

pub(crate) fn parse_time(value: &str) -> AppResult<NaiveTime> {
    let value = value.trim();
    // Time pickers hand over "18:30:00", "18:30" or "6:30 pm".
    for format in ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"] {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Ok(time);
        }
    }
    Err(AppError::BadRequest("Invalid time, expected HH:MM".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(required(&None).is_err());
        assert!(required(&Some("   ".into())).is_err());
        assert_eq!(required(&Some("Ann".into())).unwrap(), "Ann");
    }

    #[test]
    fn parse_time_accepts_picker_formats() {
        assert_eq!(
            parse_time("6:30 pm").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert!(parse_time("soonish").is_err());
    }
}
