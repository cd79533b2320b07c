use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local timezone. Read from the clock on every call.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, local_today};
    use chrono::{Local, NaiveDate};

    #[test]
    fn format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
        let date = NaiveDate::from_ymd_opt(987, 12, 31).unwrap();
        assert_eq!(format_date(date), "0987-12-31");
    }

    #[test]
    fn local_today_tracks_clock() {
        let before = Local::now().date_naive();
        let today = local_today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }
}
