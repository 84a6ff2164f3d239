use chrono::{Datelike, NaiveDate};
use semana_weekday::{Month, Weekday, compute, days_in_month};

/// Walks every real date in range and checks the weekday advances by one
/// day at a time, across month, year and century boundaries.
#[test]
fn weekday_advances_one_day_at_a_time() {
    let mut previous: Option<Weekday> = None;
    for year in 1800..=2199 {
        for month in Month::ALL {
            for day in 1..=days_in_month(year, month) {
                let weekday =
                    compute(year, i32::from(month.number()), i32::from(day)).unwrap();
                if let Some(prev) = previous {
                    assert_eq!(
                        weekday,
                        prev.succ(),
                        "{year}-{:02}-{day:02}",
                        month.number()
                    );
                }
                previous = Some(weekday);
            }
        }
    }
}

#[test]
fn agrees_with_chrono() {
    for year in 1800..=2199 {
        for month in Month::ALL {
            for day in 1..=days_in_month(year, month) {
                let reference =
                    NaiveDate::from_ymd_opt(year, u32::from(month.number()), u32::from(day))
                        .unwrap()
                        .weekday()
                        .num_days_from_sunday();
                let ours = compute(year, i32::from(month.number()), i32::from(day))
                    .unwrap()
                    .index();
                assert_eq!(
                    ours,
                    (reference + 1) % 7,
                    "{year}-{:02}-{day:02}",
                    month.number()
                );
            }
        }
    }
}
