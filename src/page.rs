//! Fixed-size pagination window shared by every paged route.

use crate::error::AppError;

/// Rows per page, identical for all routes.
pub const PAGE_SIZE: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u32,
    pub offset: i64,
}

impl PageWindow {
    /// `None` when `page * PAGE_SIZE` does not fit a bigint OFFSET.
    pub fn new(page: u64) -> Option<Self> {
        let offset = page.checked_mul(u64::from(PAGE_SIZE))?;
        let offset = i64::try_from(offset).ok()?;
        Some(PageWindow {
            page,
            limit: PAGE_SIZE,
            offset,
        })
    }

    /// Parse a raw path segment. Only plain ASCII digits are accepted.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::BadRequest(format!(
                "page must be a non-negative integer, got '{}'",
                raw
            )));
        }
        raw.parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| AppError::BadRequest(format!("page {} is out of range", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(PageWindow::parse("0").unwrap().offset, 0);
        assert_eq!(PageWindow::parse("1").unwrap().offset, 50);
        assert_eq!(PageWindow::parse("7").unwrap().offset, 350);
        assert_eq!(PageWindow::parse("3").unwrap().limit, PAGE_SIZE);
    }

    #[test]
    fn large_pages_are_valid() {
        let w = PageWindow::parse("99999999999").unwrap();
        assert_eq!(w.page, 99_999_999_999);
        assert_eq!(w.offset, 4_999_999_999_950);

        let last = (i64::MAX as u64) / u64::from(PAGE_SIZE);
        let w = PageWindow::parse(&last.to_string()).unwrap();
        assert_eq!(w.offset, last as i64 * 50);
    }

    #[test]
    fn offset_past_bigint_is_rejected() {
        let first_bad = (i64::MAX as u64) / u64::from(PAGE_SIZE) + 1;
        for raw in [first_bad.to_string(), u64::MAX.to_string(), "99999999999999999999999".to_string()] {
            let err = PageWindow::parse(&raw).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(m) if m.contains("out of range")), "{raw}");
        }
        assert_eq!(PageWindow::new(u64::MAX), None);
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        for raw in ["abc", "-1", "1.5", "", "1e3"] {
            assert!(matches!(PageWindow::parse(raw), Err(AppError::BadRequest(_))), "{raw}");
        }
    }

    #[test]
    fn rejects_sign_and_whitespace() {
        for raw in ["+1", " 1", "1 ", " +1", "\t2"] {
            assert!(matches!(PageWindow::parse(raw), Err(AppError::BadRequest(_))), "{raw:?}");
        }
    }
}
