#[cfg(test)]
mod tests {
    use chrono::{Days, Local, NaiveDate};

    use crate::{
        app::dates::{date_range, date_range_from},
        error::FetchError,
        models::DateKey,
    };

    fn keys(dates: &[DateKey]) -> Vec<&str> {
        dates.iter().map(DateKey::as_str).collect()
    }

    #[test]
    fn date_range_counts_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates = date_range_from(today, 3).unwrap();

        assert_eq!(keys(&dates), vec!["01.03.2024", "29.02.2024", "28.02.2024"]);
    }

    #[test]
    fn date_range_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let dates = date_range_from(today, 4).unwrap();

        assert_eq!(
            keys(&dates),
            vec!["02.01.2025", "01.01.2025", "31.12.2024", "30.12.2024"]
        );
    }

    #[test]
    fn date_range_has_requested_length() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 14).unwrap();
        for days in 1..=10 {
            let dates = date_range_from(today, days).unwrap();
            assert_eq!(dates.len(), days as usize);
            assert_eq!(dates[0].as_str(), "14.10.2024");
        }
    }

    #[test]
    fn date_range_rejects_out_of_range_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 14).unwrap();
        for days in [-1, 0, 11, 100] {
            let result = date_range_from(today, days);
            assert!(matches!(result, Err(FetchError::Validation(d)) if d == days));
        }
    }

    #[test]
    fn date_range_fails_instead_of_shortening_at_calendar_start() {
        let result = date_range_from(NaiveDate::MIN, 2);
        assert!(matches!(result, Err(FetchError::Validation(2))));

        let dates = date_range_from(NaiveDate::MIN, 1).unwrap();
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn date_range_starts_at_local_today() {
        let dates = date_range(2).unwrap();
        let today = Local::now().date_naive();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

        // Tolerate the clock crossing midnight between the two calls.
        let starts_today = dates[0] == DateKey::from(today);
        let starts_yesterday = dates[0] == DateKey::from(yesterday);
        assert!(starts_today || starts_yesterday);
    }
}
