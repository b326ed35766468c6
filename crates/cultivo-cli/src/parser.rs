use anyhow::Result;
use chrono::NaiveDate;

/// Dates cross the CLI boundary in the fixed `YYYY-MM-DD` form.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}': expected YYYY-MM-DD", date_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_calendar_dates() {
        let date = parse_date("2024-01-08").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(parse_date(" 2024-12-31 ").unwrap().to_string(), "2024-12-31");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("08/01/2024").is_err());
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
