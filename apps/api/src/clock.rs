use chrono::{NaiveDate, Utc};

/// Source of the evaluation date that ongoing roles are measured up to.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date. Set through `EVALUATION_DATE` for reproducible output.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_fixed_clock_behind_trait_object() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(date));
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_system_clock_is_utc_today() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
