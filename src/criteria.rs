//! Filter criteria for report queries
//!
//! Callers describe a query as `<field>.<operator>=<value>` request
//! parameters. This module parses those parameters into a typed
//! [`ReportCriteria`] over a closed set of fields. Every field is
//! independently optional; an absent field imposes no constraint.
//!
//! Operator names follow the transport contract exactly: `equals`,
//! `notEquals`, `in`, `specified`, `greaterThan`, `greaterThanOrEqual`,
//! `lessThan`, `lessThanOrEqual`, and for string fields additionally
//! `contains` and `doesNotContain`.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Comparison filter for an ordered field.
///
/// All operator slots are independent; several may be set at once and each
/// contributes its own constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeFilter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    pub r#in: Option<Vec<T>>,
    pub specified: Option<bool>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T: FromStr> RangeFilter<T> {
    /// Apply one operator to this filter. Returns `false` when the operator
    /// is not part of the range set, leaving the filter untouched.
    fn apply(&mut self, op: &str, raw: &str, key: &str) -> AppResult<bool> {
        match op {
            "equals" => self.equals = Some(parse_value(key, raw)?),
            "notEquals" => self.not_equals = Some(parse_value(key, raw)?),
            "in" => {
                self.r#in = Some(
                    raw.split(',')
                        .map(|part| parse_value(key, part))
                        .collect::<AppResult<Vec<T>>>()?,
                )
            }
            "specified" => self.specified = Some(parse_value::<bool>(key, raw)?),
            "greaterThan" => self.greater_than = Some(parse_value(key, raw)?),
            "greaterThanOrEqual" => self.greater_than_or_equal = Some(parse_value(key, raw)?),
            "lessThan" => self.less_than = Some(parse_value(key, raw)?),
            "lessThanOrEqual" => self.less_than_or_equal = Some(parse_value(key, raw)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Filter for a text field: the full range operator set (lexicographic,
/// exactly as stored) plus case-sensitive substring matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringFilter {
    pub base: RangeFilter<String>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    fn apply(&mut self, op: &str, raw: &str, key: &str) -> AppResult<bool> {
        match op {
            "contains" => self.contains = Some(raw.to_string()),
            "doesNotContain" => self.does_not_contain = Some(raw.to_string()),
            _ => return self.base.apply(op, raw, key),
        }
        Ok(true)
    }
}

/// The caller-supplied filter set for one report query.
///
/// Constructed per request, immutable afterwards. `user_id` is compared
/// against the owning user's id through an outer join, so reports without
/// an owner are only excluded when the filter demands a match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportCriteria {
    pub id: Option<RangeFilter<i64>>,
    pub title: Option<StringFilter>,
    pub description: Option<StringFilter>,
    pub ip_address: Option<StringFilter>,
    pub user_id: Option<RangeFilter<i64>>,
    pub distinct: Option<bool>,
}

impl ReportCriteria {
    /// Parse criteria from raw request parameters.
    ///
    /// Parameters that are not filter keys (pagination, sorting, anything
    /// unrecognized) are ignored here; malformed filter values are rejected
    /// before any query is built.
    pub fn from_params(params: &HashMap<String, String>) -> AppResult<Self> {
        let mut criteria = Self::default();

        for (key, raw) in params {
            if key == "distinct" {
                criteria.distinct = Some(parse_value::<bool>(key, raw)?);
                continue;
            }
            let Some((field, op)) = key.split_once('.') else {
                continue;
            };
            match field {
                "id" => apply_range(&mut criteria.id, op, raw, key)?,
                "title" => apply_string(&mut criteria.title, op, raw, key)?,
                "description" => apply_string(&mut criteria.description, op, raw, key)?,
                "ipAddress" => apply_string(&mut criteria.ip_address, op, raw, key)?,
                "userId" => apply_range(&mut criteria.user_id, op, raw, key)?,
                _ => {}
            }
        }

        Ok(criteria)
    }
}

fn apply_range<T: FromStr + PartialEq>(
    slot: &mut Option<RangeFilter<T>>,
    op: &str,
    raw: &str,
    key: &str,
) -> AppResult<()> {
    let mut filter = slot.take().unwrap_or_default();
    let matched = filter.apply(op, raw, key)?;
    if matched || filter != RangeFilter::default() {
        *slot = Some(filter);
    }
    Ok(())
}

fn apply_string(
    slot: &mut Option<StringFilter>,
    op: &str,
    raw: &str,
    key: &str,
) -> AppResult<()> {
    let mut filter = slot.take().unwrap_or_default();
    let matched = filter.apply(op, raw, key)?;
    if matched || filter != StringFilter::default() {
        *slot = Some(filter);
    }
    Ok(())
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid value '{raw}' for filter '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_range_operators() {
        let criteria = ReportCriteria::from_params(&params(&[
            ("id.equals", "5"),
            ("id.greaterThan", "1"),
            ("id.lessThanOrEqual", "10"),
        ]))
        .unwrap();

        let id = criteria.id.unwrap();
        assert_eq!(id.equals, Some(5));
        assert_eq!(id.greater_than, Some(1));
        assert_eq!(id.less_than_or_equal, Some(10));
        assert_eq!(id.not_equals, None);
    }

    #[test]
    fn test_parse_in_list() {
        let criteria =
            ReportCriteria::from_params(&params(&[("title.in", "alpha,beta")])).unwrap();
        let title = criteria.title.unwrap();
        assert_eq!(
            title.base.r#in,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
    }

    #[test]
    fn test_parse_contains_operators() {
        let criteria = ReportCriteria::from_params(&params(&[
            ("ipAddress.contains", "192.168"),
            ("description.doesNotContain", "spam"),
        ]))
        .unwrap();

        assert_eq!(
            criteria.ip_address.unwrap().contains,
            Some("192.168".to_string())
        );
        assert_eq!(
            criteria.description.unwrap().does_not_contain,
            Some("spam".to_string())
        );
    }

    #[test]
    fn test_parse_specified_and_distinct() {
        let criteria = ReportCriteria::from_params(&params(&[
            ("title.specified", "true"),
            ("distinct", "true"),
        ]))
        .unwrap();

        assert_eq!(criteria.title.unwrap().base.specified, Some(true));
        assert_eq!(criteria.distinct, Some(true));
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert!(ReportCriteria::from_params(&params(&[("id.equals", "abc")])).is_err());
        assert!(ReportCriteria::from_params(&params(&[("userId.in", "1,x")])).is_err());
        assert!(ReportCriteria::from_params(&params(&[("distinct", "maybe")])).is_err());
    }

    #[test]
    fn test_non_filter_params_are_ignored() {
        let criteria = ReportCriteria::from_params(&params(&[
            ("page", "0"),
            ("size", "20"),
            ("sort", "id,desc"),
            ("color.equals", "red"),
            ("id.bogus", "7"),
        ]))
        .unwrap();

        assert_eq!(criteria, ReportCriteria::default());
    }

    #[test]
    fn test_empty_params_mean_no_constraint() {
        let criteria = ReportCriteria::from_params(&HashMap::new()).unwrap();
        assert_eq!(criteria, ReportCriteria::default());
    }
}
