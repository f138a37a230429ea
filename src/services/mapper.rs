//! Mapping between report models and transport objects
//!
//! Hand-written projections so the wire contract stays auditable. The
//! owning user is deliberately narrowed to `{id, login}` on the way out
//! and reduced to an id reference on the way in; whether that id exists
//! is the storage layer's concern at write time.

use crate::{
    handlers::reports::response::{ReportDto, UserRef},
    models::{NewReport, ReportPatch, ReportRecord},
};

/// Mapper between report rows and `ReportDto`
pub struct ReportMapper;

impl ReportMapper {
    /// Project a stored report into its transport object
    pub fn to_dto(record: &ReportRecord) -> ReportDto {
        ReportDto {
            id: Some(record.id),
            title: Some(record.title.clone()),
            description: record.description.clone(),
            ip_address: Some(record.ip_address.clone()),
            user: record.user_id.map(|id| UserRef {
                id: Some(id),
                login: record.user_login.clone(),
            }),
        }
    }

    /// Turn a transport object into insertable field values
    pub fn to_entity(dto: &ReportDto) -> NewReport {
        NewReport {
            title: dto.title.clone().unwrap_or_default(),
            description: dto.description.clone(),
            ip_address: dto.ip_address.clone().unwrap_or_default(),
            user_id: dto.user.as_ref().and_then(|user| user.id),
        }
    }

    /// Turn a transport object into a partial update, keeping only the
    /// fields the caller actually provided
    pub fn to_patch(dto: &ReportDto) -> ReportPatch {
        ReportPatch {
            title: dto.title.clone(),
            description: dto.description.clone(),
            ip_address: dto.ip_address.clone(),
            user_id: dto.user.as_ref().and_then(|user| user.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ReportRecord {
        ReportRecord {
            id: 7,
            title: "Port scan".to_string(),
            description: Some("Repeated probes".to_string()),
            ip_address: "203.0.113.9".to_string(),
            user_id: Some(3),
            user_login: Some("analyst".to_string()),
        }
    }

    #[test]
    fn test_to_dto_projects_owner_as_id_and_login_only() {
        let dto = ReportMapper::to_dto(&record());
        let user = serde_json::to_value(dto.user.unwrap()).unwrap();

        let keys: Vec<&str> = user.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "login"]);
        assert_eq!(user["id"], 3);
        assert_eq!(user["login"], "analyst");
    }

    #[test]
    fn test_round_trip_preserves_scalars() {
        let record = record();
        let entity = ReportMapper::to_entity(&ReportMapper::to_dto(&record));

        assert_eq!(
            entity,
            NewReport {
                title: record.title,
                description: record.description,
                ip_address: record.ip_address,
                user_id: record.user_id,
            }
        );
    }

    #[test]
    fn test_to_dto_without_owner_has_no_user() {
        let mut record = record();
        record.user_id = None;
        record.user_login = None;

        assert_eq!(ReportMapper::to_dto(&record).user, None);
    }

    #[test]
    fn test_to_entity_keeps_user_by_id_reference_only() {
        let mut dto = ReportMapper::to_dto(&record());
        dto.user = Some(UserRef {
            id: Some(42),
            login: Some("ignored".to_string()),
        });

        assert_eq!(ReportMapper::to_entity(&dto).user_id, Some(42));
    }
}
