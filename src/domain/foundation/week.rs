//! Week-of-year computation for course start times.

use chrono::{Datelike, NaiveDateTime};

/// Returns the ISO-8601 week number (1..=53) of a naive local date-time.
///
/// Days at the turn of the year belong to the week of the year that owns
/// their Thursday, so 2015-12-31 is in week 53 and 2016-01-03 is in week 53
/// of 2015 as well.
pub fn week_of_year(at: &NaiveDateTime) -> u32 {
    at.date().iso_week().week()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn first_days_of_2015_are_week_one() {
        assert_eq!(week_of_year(&at(2015, 1, 1)), 1);
        assert_eq!(week_of_year(&at(2015, 1, 2)), 1);
        assert_eq!(week_of_year(&at(2015, 1, 4)), 1);
        assert_eq!(week_of_year(&at(2015, 1, 5)), 2);
    }

    #[test]
    fn year_boundary_follows_iso_rules() {
        assert_eq!(week_of_year(&at(2015, 12, 31)), 53);
        assert_eq!(week_of_year(&at(2016, 1, 3)), 53);
        assert_eq!(week_of_year(&at(2016, 1, 4)), 1);
        assert_eq!(week_of_year(&at(2018, 12, 31)), 1);
    }

    #[test]
    fn time_of_day_does_not_change_the_week() {
        let late = NaiveDate::from_ymd_opt(2015, 1, 4)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(week_of_year(&late), 1);
    }
}
