//! Composite query predicates
//!
//! [`Predicate::from_criteria`] compiles a [`ReportCriteria`] into a single
//! composite predicate: the logical AND of every present sub-filter. The
//! result is opaque to callers; repositories render it into the WHERE
//! clause of a `QueryBuilder` with every value bound, never interpolated.
//!
//! Translation walks an enumerated list of (column, filter-kind) pairs in a
//! fixed order: distinct first (a result-shape modifier, not a row filter),
//! then id, title, description, ipAddress, userId. Column names come from a
//! closed compile-time set; the userId column targets the outer-joined
//! `users` table.

use sqlx::{Postgres, QueryBuilder};

use crate::criteria::{RangeFilter, ReportCriteria, StringFilter};

mod columns {
    pub const ID: &str = "r.id";
    pub const TITLE: &str = "r.title";
    pub const DESCRIPTION: &str = "r.description";
    pub const IP_ADDRESS: &str = "r.ip_address";
    pub const USER_ID: &str = "u.id";
}

/// Comparison operators shared by all ordered conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    fn sql(self) -> &'static str {
        match self {
            Self::Eq => " = ",
            Self::Ne => " <> ",
            Self::Gt => " > ",
            Self::Gte => " >= ",
            Self::Lt => " < ",
            Self::Lte => " <= ",
        }
    }
}

/// One conjunct of a composite predicate
#[derive(Debug, Clone, PartialEq)]
enum Condition {
    CompareInt {
        column: &'static str,
        op: Comparison,
        value: i64,
    },
    CompareText {
        column: &'static str,
        op: Comparison,
        value: String,
    },
    InInt {
        column: &'static str,
        values: Vec<i64>,
    },
    InText {
        column: &'static str,
        values: Vec<String>,
    },
    Specified {
        column: &'static str,
        present: bool,
    },
    Contains {
        column: &'static str,
        value: String,
        negated: bool,
    },
}

/// The closed set of filter kinds a criteria field can dispatch to
enum FieldFilter<'a> {
    Range(&'static str, &'a RangeFilter<i64>),
    Text(&'static str, &'a StringFilter),
    Relation(&'static str, &'a RangeFilter<i64>),
}

/// Composite filter over report rows, combined with logical AND.
///
/// An empty predicate matches all rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    distinct: bool,
    conditions: Vec<Condition>,
}

impl Predicate {
    /// Compile criteria into a composite predicate. Pure function of its
    /// input; absent criteria fields contribute nothing.
    pub fn from_criteria(criteria: &ReportCriteria) -> Self {
        let mut predicate = Self {
            distinct: criteria.distinct.unwrap_or(false),
            conditions: Vec::new(),
        };

        let fields = [
            criteria.id.as_ref().map(|f| FieldFilter::Range(columns::ID, f)),
            criteria
                .title
                .as_ref()
                .map(|f| FieldFilter::Text(columns::TITLE, f)),
            criteria
                .description
                .as_ref()
                .map(|f| FieldFilter::Text(columns::DESCRIPTION, f)),
            criteria
                .ip_address
                .as_ref()
                .map(|f| FieldFilter::Text(columns::IP_ADDRESS, f)),
            criteria
                .user_id
                .as_ref()
                .map(|f| FieldFilter::Relation(columns::USER_ID, f)),
        ];

        for field in fields.into_iter().flatten() {
            match field {
                FieldFilter::Range(column, filter) | FieldFilter::Relation(column, filter) => {
                    predicate.push_range(column, filter)
                }
                FieldFilter::Text(column, filter) => predicate.push_text(column, filter),
            }
        }

        predicate
    }

    /// Whether the caller asked for distinct results
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Whether the predicate constrains rows at all
    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    fn push_range(&mut self, column: &'static str, filter: &RangeFilter<i64>) {
        let ops = [
            (Comparison::Eq, filter.equals),
            (Comparison::Ne, filter.not_equals),
            (Comparison::Gt, filter.greater_than),
            (Comparison::Gte, filter.greater_than_or_equal),
            (Comparison::Lt, filter.less_than),
            (Comparison::Lte, filter.less_than_or_equal),
        ];
        for (op, value) in ops {
            if let Some(value) = value {
                self.conditions.push(Condition::CompareInt { column, op, value });
            }
        }
        if let Some(values) = &filter.r#in {
            self.conditions.push(Condition::InInt {
                column,
                values: values.clone(),
            });
        }
        if let Some(present) = filter.specified {
            self.conditions.push(Condition::Specified { column, present });
        }
    }

    fn push_text(&mut self, column: &'static str, filter: &StringFilter) {
        let ops = [
            (Comparison::Eq, &filter.base.equals),
            (Comparison::Ne, &filter.base.not_equals),
            (Comparison::Gt, &filter.base.greater_than),
            (Comparison::Gte, &filter.base.greater_than_or_equal),
            (Comparison::Lt, &filter.base.less_than),
            (Comparison::Lte, &filter.base.less_than_or_equal),
        ];
        for (op, value) in ops {
            if let Some(value) = value {
                self.conditions.push(Condition::CompareText {
                    column,
                    op,
                    value: value.clone(),
                });
            }
        }
        if let Some(values) = &filter.base.r#in {
            self.conditions.push(Condition::InText {
                column,
                values: values.clone(),
            });
        }
        if let Some(present) = filter.base.specified {
            self.conditions.push(Condition::Specified { column, present });
        }
        if let Some(value) = &filter.contains {
            self.conditions.push(Condition::Contains {
                column,
                value: value.clone(),
                negated: false,
            });
        }
        if let Some(value) = &filter.does_not_contain {
            self.conditions.push(Condition::Contains {
                column,
                value: value.clone(),
                negated: true,
            });
        }
    }

    /// Render the WHERE clause onto a query. Does nothing for a match-all
    /// predicate.
    pub fn push_where<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>) {
        if self.conditions.is_empty() {
            return;
        }

        qb.push(" WHERE ");
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                qb.push(" AND ");
            }
            match condition {
                Condition::CompareInt { column, op, value } => {
                    qb.push(*column).push(op.sql()).push_bind(*value);
                }
                Condition::CompareText { column, op, value } => {
                    qb.push(*column).push(op.sql()).push_bind(value.clone());
                }
                Condition::InInt { column, values } => {
                    qb.push(*column)
                        .push(" = ANY(")
                        .push_bind(values.clone())
                        .push(")");
                }
                Condition::InText { column, values } => {
                    qb.push(*column)
                        .push(" = ANY(")
                        .push_bind(values.clone())
                        .push(")");
                }
                Condition::Specified { column, present } => {
                    qb.push(*column)
                        .push(if *present { " IS NOT NULL" } else { " IS NULL" });
                }
                Condition::Contains {
                    column,
                    value,
                    negated,
                } => {
                    qb.push(*column)
                        .push(if *negated { " NOT LIKE " } else { " LIKE " })
                        .push_bind(format!("%{value}%"));
                }
            }
        }
    }
}

/// Sortable report columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Title,
    IpAddress,
}

impl SortField {
    fn column(self) -> &'static str {
        match self {
            Self::Id => columns::ID,
            Self::Title => columns::TITLE,
            Self::IpAddress => columns::IP_ADDRESS,
        }
    }
}

/// Result ordering, parsed from a `sort=<field>,<direction>` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub descending: bool,
}

impl Sort {
    /// Parse a sort parameter. Unrecognized fields fall back to the default
    /// ordering (id ascending) rather than erroring.
    pub fn from_param(param: Option<&str>) -> Self {
        let Some(param) = param else {
            return Self::default();
        };
        let (field, direction) = param.split_once(',').unwrap_or((param, "asc"));
        let field = match field {
            "title" => SortField::Title,
            "ipAddress" => SortField::IpAddress,
            _ => SortField::Id,
        };
        Self {
            field,
            descending: direction.eq_ignore_ascii_case("desc"),
        }
    }

    /// Render the ORDER BY clause onto a query
    pub fn push_order_by(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" ORDER BY ")
            .push(self.field.column())
            .push(if self.descending { " DESC" } else { " ASC" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::ReportCriteria;
    use std::collections::HashMap;

    fn criteria(pairs: &[(&str, &str)]) -> ReportCriteria {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ReportCriteria::from_params(&params).unwrap()
    }

    fn rendered(predicate: &Predicate) -> String {
        let mut qb = QueryBuilder::new("SELECT r.* FROM reports r LEFT JOIN users u ON u.id = r.user_id");
        predicate.push_where(&mut qb);
        qb.sql().to_string()
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let predicate = Predicate::from_criteria(&ReportCriteria::default());
        assert!(predicate.is_match_all());
        assert!(!rendered(&predicate).contains("WHERE"));
    }

    #[test]
    fn test_single_equals_condition() {
        let predicate = Predicate::from_criteria(&criteria(&[("title.equals", "weekly")]));
        assert_eq!(
            rendered(&predicate),
            "SELECT r.* FROM reports r LEFT JOIN users u ON u.id = r.user_id WHERE r.title = $1"
        );
    }

    #[test]
    fn test_conditions_are_and_composed_in_field_order() {
        let predicate = Predicate::from_criteria(&criteria(&[
            ("ipAddress.contains", "10."),
            ("id.greaterThan", "5"),
        ]));
        // id is processed before ipAddress regardless of parameter order
        assert_eq!(
            rendered(&predicate),
            "SELECT r.* FROM reports r LEFT JOIN users u ON u.id = r.user_id \
             WHERE r.id > $1 AND r.ip_address LIKE $2"
        );
    }

    #[test]
    fn test_in_and_specified_render() {
        let predicate = Predicate::from_criteria(&criteria(&[
            ("title.in", "a,b"),
            ("description.specified", "false"),
        ]));
        let sql = rendered(&predicate);
        assert!(sql.contains("r.title = ANY($1)"));
        assert!(sql.contains("r.description IS NULL"));
    }

    #[test]
    fn test_not_contains_renders_not_like() {
        let predicate =
            Predicate::from_criteria(&criteria(&[("description.doesNotContain", "noise")]));
        assert!(rendered(&predicate).contains("r.description NOT LIKE $1"));
    }

    #[test]
    fn test_user_filter_targets_joined_column() {
        let predicate = Predicate::from_criteria(&criteria(&[("userId.equals", "3")]));
        assert!(rendered(&predicate).contains("u.id = $1"));
    }

    #[test]
    fn test_distinct_flag_is_carried() {
        let predicate = Predicate::from_criteria(&criteria(&[("distinct", "true")]));
        assert!(predicate.is_distinct());
        assert!(predicate.is_match_all());
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(Sort::from_param(None), Sort::default());
        let sort = Sort::from_param(Some("id,desc"));
        assert_eq!(sort.field, SortField::Id);
        assert!(sort.descending);
        // Unknown fields fall back to the default column
        assert_eq!(Sort::from_param(Some("nope,desc")).field, SortField::Id);

        let mut qb = QueryBuilder::<Postgres>::new("SELECT 1");
        Sort::from_param(Some("title")).push_order_by(&mut qb);
        assert_eq!(qb.sql(), "SELECT 1 ORDER BY r.title ASC");
    }
}
