//! Report listing query parameters

use std::collections::HashMap;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    criteria::ReportCriteria,
    db::predicate::Sort,
    error::{AppError, AppResult},
};

/// Everything a list request carries: filter criteria, ordering, and an
/// optional page. Listing is unpaginated unless `page` or `size` is given.
#[derive(Debug, Clone)]
pub struct ReportListParams {
    pub criteria: ReportCriteria,
    pub sort: Sort,
    pub page: Option<PageRequest>,
}

/// A requested result page (zero-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub size: i64,
}

impl PageRequest {
    /// Row offset of the page's first element
    pub fn offset(&self) -> i64 {
        self.number * self.size
    }
}

impl ReportListParams {
    /// Parse list parameters from the raw query map. Filter keys go to the
    /// criteria parser; `page`, `size`, and `sort` are handled here.
    pub fn from_query(params: &HashMap<String, String>) -> AppResult<Self> {
        let criteria = ReportCriteria::from_params(params)?;
        let sort = Sort::from_param(params.get("sort").map(String::as_str));

        let number = parse_param(params, "page")?;
        let size = parse_param(params, "size")?;
        let page = if number.is_some() || size.is_some() {
            Some(PageRequest {
                number: number.unwrap_or(0).max(0),
                size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            })
        } else {
            None
        };

        Ok(Self {
            criteria,
            sort,
            page,
        })
    }
}

fn parse_param(params: &HashMap<String, String>, name: &str) -> AppResult<Option<i64>> {
    params
        .get(name)
        .map(|raw| {
            raw.parse()
                .map_err(|_| AppError::InvalidInput(format!("Invalid value '{raw}' for '{name}'")))
        })
        .transpose()
}
