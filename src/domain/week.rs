//! Weekly window calculation.

use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `today` (ISO week, Monday start).
///
/// Monday maps to itself, Sunday to six days back.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let offset = today.weekday().number_from_monday() as i64 - 1;
    today - Duration::days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_midweek_maps_to_monday() {
        // 2019-10-11 is a Friday
        assert_eq!(week_start(d(2019, 10, 11)), d(2019, 10, 7));
    }

    #[test]
    fn test_monday_maps_to_itself() {
        assert_eq!(week_start(d(2019, 10, 7)), d(2019, 10, 7));
    }

    #[test]
    fn test_sunday_maps_to_preceding_monday() {
        assert_eq!(week_start(d(2019, 10, 13)), d(2019, 10, 7));
    }

    #[test]
    fn test_result_is_monday_within_seven_days() {
        let start = d(2024, 1, 1);
        for i in 0..30 {
            let today = start + Duration::days(i);
            let monday = week_start(today);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= today);
            assert!(monday > today - Duration::days(7));
        }
    }
}
