use semana_weekday::{DayPolicy, ValidationError, WeekdayCalculator, compute};

#[test]
fn years_outside_range_rejected() {
    for year in [i32::MIN, -1, 0, 1, 1582, 1799, 2200, 2201, 9999, i32::MAX] {
        assert_eq!(
            compute(year, 1, 1),
            Err(ValidationError::YearOutOfRange(year)),
            "year {year}"
        );
    }
}

#[test]
fn every_year_in_range_accepted() {
    for year in 1800..=2199 {
        assert!(compute(year, 6, 15).is_ok(), "year {year}");
    }
}

#[test]
fn months_outside_range_rejected() {
    for month in [i32::MIN, -12, -1, 0, 13, 100, i32::MAX] {
        assert_eq!(
            compute(2000, month, 1),
            Err(ValidationError::MonthOutOfRange(month)),
            "month {month}"
        );
    }
}

#[test]
fn days_outside_range_rejected() {
    for day in [i32::MIN, -1, 0, 32, 256, i32::MAX] {
        assert_eq!(
            compute(2000, 1, day),
            Err(ValidationError::DayOutOfRange(day)),
            "day {day}"
        );
    }
}

#[test]
fn first_failure_wins() {
    assert!(matches!(
        compute(1700, 0, 0),
        Err(ValidationError::YearOutOfRange(1700))
    ));
    assert!(matches!(
        compute(1900, 0, 0),
        Err(ValidationError::MonthOutOfRange(0))
    ));
    assert!(matches!(
        compute(1900, 1, 0),
        Err(ValidationError::DayOutOfRange(0))
    ));
}

#[test]
fn permissive_accepts_day_31_in_every_month() {
    for month in 1..=12 {
        assert!(compute(2023, month, 31).is_ok(), "month {month}");
    }
}

#[test]
fn strict_rejects_only_nonexistent_days() {
    let strict = WeekdayCalculator::new().with_day_policy(DayPolicy::Strict);
    let cases: &[(i32, i32, i32, Option<u8>)] = &[
        (2023, 4, 30, None),
        (2023, 4, 31, Some(30)),
        (2023, 2, 28, None),
        (2023, 2, 29, Some(28)),
        (2024, 2, 29, None),
        (2024, 2, 30, Some(29)),
        (1900, 2, 29, Some(28)),
        (2000, 2, 29, None),
        (2023, 12, 31, None),
    ];
    for &(y, m, d, max_day) in cases {
        let result = strict.compute(y, m, d);
        match max_day {
            None => assert!(result.is_ok(), "{y}-{m}-{d} should be accepted"),
            Some(max_day) => assert_eq!(
                result,
                Err(ValidationError::DayExceedsMonth {
                    day: d as u8,
                    month: m as u8,
                    max_day,
                }),
                "{y}-{m}-{d}"
            ),
        }
    }
}
