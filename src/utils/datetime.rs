use chrono::{Days, NaiveDateTime, NaiveTime};

/// First moment strictly after `now` whose wall-clock time is `at`.
pub fn next_daily_occurrence(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if today > now {
        return today;
    }
    match now.date().checked_add_days(Days::new(1)) {
        Some(tomorrow) => tomorrow.and_time(at),
        None => today,
    }
}

pub fn format_time_of_day(at: &NaiveTime) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_later_today() {
        let target = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        assert_eq!(next_daily_occurrence(at(2024, 3, 1, 9, 0, 0), target), at(2024, 3, 1, 18, 30, 0));
    }

    #[test]
    fn test_already_past_rolls_to_tomorrow() {
        let target = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(next_daily_occurrence(at(2024, 3, 1, 9, 0, 0), target), at(2024, 3, 2, 7, 0, 0));
    }

    #[test]
    fn test_exactly_now_is_not_strictly_future() {
        let target = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(next_daily_occurrence(at(2024, 3, 1, 7, 0, 0), target), at(2024, 3, 2, 7, 0, 0));
    }

    #[test]
    fn test_rolls_over_month_and_year() {
        let target = NaiveTime::from_hms_opt(0, 15, 0).unwrap();
        assert_eq!(next_daily_occurrence(at(2024, 2, 29, 23, 0, 0), target), at(2024, 3, 1, 0, 15, 0));
        assert_eq!(next_daily_occurrence(at(2023, 12, 31, 12, 0, 0), target), at(2024, 1, 1, 0, 15, 0));
    }

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day(&NaiveTime::from_hms_opt(7, 5, 0).unwrap()), "07:05");
    }
}
