use chrono::{DateTime, NaiveDate, Utc};

/// Accepts full RFC3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_accept_rfc3339_and_plain_dates() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01"), Some(expected));
        assert_eq!(parse_timestamp("March 1st"), None);
    }
}
