use chrono::NaiveDate;

pub const DATE_KEY_FMT: &str = "%Y-%m-%d";

/// Local calendar day.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_KEY_FMT).ok()
}

/// `YYYY-MM-DD` key used by the history log.
pub fn date_key(d: NaiveDate) -> String {
    d.format(DATE_KEY_FMT).to_string()
}

/// e.g. `Wed 2024-01-03`
pub fn with_weekday(d: NaiveDate) -> String {
    d.format("%a %Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        let d = parse_date(" 2024-02-29 ").unwrap();
        assert_eq!(date_key(d), "2024-02-29");
        assert_eq!(with_weekday(d), "Thu 2024-02-29");
        assert_eq!(parse_date("2024-02-30"), None);
    }
}
