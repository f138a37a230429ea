//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Field values for creating a user
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub login: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}
