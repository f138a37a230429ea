//! Report transport objects
//!
//! `ReportDto` is the wire representation of a report, used for both
//! inbound payloads and responses. The owning user appears only as a
//! [`UserRef`] carrying id and login; no other user attribute ever
//! crosses this boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    MAX_REPORT_DESCRIPTION_LENGTH, MAX_REPORT_IP_ADDRESS_LENGTH, MAX_REPORT_TITLE_LENGTH,
};

/// Report transport object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub id: Option<i64>,

    #[validate(required, length(min = 1, max = MAX_REPORT_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_REPORT_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(required, length(min = 1, max = MAX_REPORT_IP_ADDRESS_LENGTH))]
    pub ip_address: Option<String>,

    pub user: Option<UserRef>,
}

/// Minimal projection of the owning user: id and login, nothing else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Option<i64>,
    pub login: Option<String>,
}
