//! List window parameters
//!
//! Callers page through todos with `limit` and `offset`. An explicit limit
//! above the maximum is rejected, never clamped.

use serde::Deserialize;

use super::ValidationError;

/// Maximum rows a caller may request in one page
const MAX_LIMIT: u32 = 50;

/// Rows returned when no limit is given
const DEFAULT_LIMIT: u32 = 20;

/// Validated list window
#[derive(Debug, Clone, Copy)]
pub struct Page {
    limit: u32,
    offset: u64,
}

impl Page {
    /// Build a page from optional raw parameters.
    ///
    /// An explicit `limit` above 50 fails validation. An absent `limit`
    /// defaults to 20, which is always within bounds. `offset` defaults
    /// to 0 and has no upper bound.
    pub fn new(limit: Option<u32>, offset: Option<u64>) -> Result<Self, ValidationError> {
        let limit = match limit {
            Some(got) if got > MAX_LIMIT => {
                return Err(ValidationError::OutOfRange {
                    field: "limit",
                    max: MAX_LIMIT,
                    got,
                })
            }
            Some(got) => got,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    /// Get the SQL LIMIT value.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Get the SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl TryFrom<PageParams> for Page {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        Self::new(params.limit, params.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page.limit(), 20);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn accepts_limit_at_max() {
        let page = Page::new(Some(50), None).unwrap();
        assert_eq!(page.limit(), 50);
    }

    #[test]
    fn rejects_limit_above_max() {
        let err = Page::new(Some(51), None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "limit",
                max: 50,
                got: 51
            }
        ));
    }

    #[test]
    fn zero_limit_is_allowed() {
        let page = Page::new(Some(0), None).unwrap();
        assert_eq!(page.limit(), 0);
    }

    #[test]
    fn offset_has_no_upper_bound() {
        let page = Page::new(None, Some(1_000_000)).unwrap();
        assert_eq!(page.offset(), 1_000_000);
    }

    #[test]
    fn from_query_params() {
        let params = PageParams {
            limit: Some(10),
            offset: Some(5),
        };
        let page = Page::try_from(params).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 5);
    }
}
