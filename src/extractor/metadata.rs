//! Object-metadata derivation for business-unit/team attribution
//!
//! Alongside the usage events, the ingestion side can receive synthetic
//! objects describing the attribution hierarchy (team under business unit).
//! Each object becomes one "object_metadata_event" whose dimensions are the
//! object's own fields.

use crate::core::types::Dimensions;
use crate::core::types::log_record::RecordMetadata;

/// Derive the attribution objects for a call from its raw metadata.
///
/// Works on the undefaulted ids: an empty-string id counts as absent, same
/// as a missing one.
pub(super) fn object_metadata(metadata: &RecordMetadata) -> Vec<Dimensions> {
    let business_unit_id = metadata
        .user_api_key_auth_metadata
        .as_ref()
        .and_then(|auth| auth.business_unit_id.as_deref())
        .filter(|id| !id.is_empty());
    let team_id = metadata
        .user_api_key_team_id
        .as_deref()
        .filter(|id| !id.is_empty());
    let team_alias = metadata.user_api_key_team_alias.as_deref();

    match (business_unit_id, team_id) {
        (Some(bu_id), Some(team_id)) => {
            vec![virtual_tag(team_id, team_alias, bu_id)]
        }
        (Some(bu_id), None) => vec![business_unit(bu_id, Some(bu_id))],
        // Without an explicit business unit the team stands in for one; the
        // virtual tag then parents the team to itself.
        (None, Some(team_id)) => vec![
            business_unit(team_id, team_alias),
            virtual_tag(team_id, team_alias, team_id),
        ],
        (None, None) => Vec::new(),
    }
}

fn virtual_tag(team_id: &str, team_alias: Option<&str>, parent_value: &str) -> Dimensions {
    let mut object = Dimensions::new();
    object.insert("type".to_string(), "virtual_tag".to_string());
    object.insert("name".to_string(), "team".to_string());
    object.insert("value".to_string(), team_id.to_string());
    if let Some(alias) = team_alias {
        object.insert("label".to_string(), alias.to_string());
    }
    object.insert("parentName".to_string(), "businessUnitId".to_string());
    object.insert("parentValue".to_string(), parent_value.to_string());
    object
}

fn business_unit(id: &str, name: Option<&str>) -> Dimensions {
    let mut object = Dimensions::new();
    object.insert("type".to_string(), "business_unit".to_string());
    object.insert("id".to_string(), id.to_string());
    if let Some(name) = name {
        object.insert("name".to_string(), name.to_string());
    }
    object
}
