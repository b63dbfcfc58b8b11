//! Report date windows.

use chrono::NaiveDate;

use super::error::ReportError;

/// Inclusive date window a report covers, matched against transport end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    /// First day included.
    pub from: NaiveDate,
    /// Last day included.
    pub to: NaiveDate,
}

impl ReportWindow {
    /// Resolves optional query bounds into a window.
    ///
    /// A missing `from` means the Unix epoch, a missing `to` means `today`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if the resolved start is after the end.
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, ReportError> {
        let from = from.unwrap_or_else(Self::earliest);
        let to = to.unwrap_or(today);

        if from > to {
            return Err(ReportError::InvalidDateRange {
                start: from,
                end: to,
            });
        }

        Ok(Self { from, to })
    }

    /// The default start of a window.
    #[must_use]
    pub fn earliest() -> NaiveDate {
        // 1970-01-01
        NaiveDate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_epoch_and_today() {
        let today = date(2024, 6, 30);
        let window = ReportWindow::resolve(None, None, today).unwrap();
        assert_eq!(window.from, date(1970, 1, 1));
        assert_eq!(window.to, today);
    }

    #[test]
    fn test_explicit_bounds_are_kept() {
        let window =
            ReportWindow::resolve(Some(date(2024, 1, 1)), Some(date(2024, 3, 31)), date(2025, 1, 1))
                .unwrap();
        assert_eq!(window.from, date(2024, 1, 1));
        assert_eq!(window.to, date(2024, 3, 31));
    }

    #[test]
    fn test_single_day_window() {
        let day = date(2024, 2, 29);
        let window = ReportWindow::resolve(Some(day), Some(day), day).unwrap();
        assert_eq!(window.from, day);
        assert_eq!(window.to, day);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = ReportWindow::resolve(Some(date(2024, 5, 2)), Some(date(2024, 5, 1)), date(2025, 1, 1));
        assert_eq!(
            result,
            Err(ReportError::InvalidDateRange {
                start: date(2024, 5, 2),
                end: date(2024, 5, 1),
            })
        );
    }

    #[test]
    fn test_future_start_without_end_is_rejected() {
        let today = date(2024, 1, 1);
        assert!(ReportWindow::resolve(Some(date(2024, 1, 2)), None, today).is_err());
    }
}
