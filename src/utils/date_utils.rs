//! 날짜 유틸리티
//!
//! 고정 픽스처 날짜는 `YYYY-MM-DD` 형식이며 UTC 자정으로 해석합니다.

use chrono::{Duration, NaiveDate};
use mongodb::bson::DateTime;

use crate::errors::{AppError, AppResult};

/// `YYYY-MM-DD` 문자열을 UTC 자정의 BSON 날짜로 변환합니다.
pub fn utc_date(value: &str) -> AppResult<DateTime> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::ValidationError(format!("invalid date '{}': {}", value, e)))?;
    midnight(date)
}

/// 기준 날짜로부터 `days`일 뒤의 UTC 자정
pub fn days_after(value: &str, days: i64) -> AppResult<DateTime> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::ValidationError(format!("invalid date '{}': {}", value, e)))?;
    let shifted = date
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| AppError::InternalError(format!("date overflow: {} + {} days", value, days)))?;
    midnight(shifted)
}

fn midnight(date: NaiveDate) -> AppResult<DateTime> {
    let datetime = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InternalError(format!("invalid midnight for {}", date)))?;
    Ok(DateTime::from_millis(datetime.and_utc().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_date_is_midnight() {
        let date = utc_date("2025-10-15").unwrap();
        assert_eq!(date.try_to_rfc3339_string().unwrap(), "2025-10-15T00:00:00Z");
    }

    #[test]
    fn test_days_after_crosses_month() {
        let date = days_after("2025-10-30", 3).unwrap();
        assert_eq!(date.try_to_rfc3339_string().unwrap(), "2025-11-02T00:00:00Z");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(matches!(utc_date("2025-13-01"), Err(AppError::ValidationError(_))));
    }
}
