//! Report model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Report database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ip_address: String,
    pub user_id: Option<i64>,
}

/// Report row as returned by read queries: report columns joined with the
/// owning user's login. `user_login` is `None` when the report has no owner.
#[derive(Debug, Clone, FromRow)]
pub struct ReportRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ip_address: String,
    pub user_id: Option<i64>,
    pub user_login: Option<String>,
}

/// Field values for inserting or fully replacing a report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: Option<String>,
    pub ip_address: String,
    pub user_id: Option<i64>,
}

/// Field values for a partial update; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub user_id: Option<i64>,
}

impl Report {
    /// Whether the report carries an owning user reference
    pub fn has_owner(&self) -> bool {
        self.user_id.is_some()
    }
}
