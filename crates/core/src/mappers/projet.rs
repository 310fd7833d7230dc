//! Projet mapper: raw record ↔ domain, create field-set, sparse patch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendar::WeekCalendar;
use crate::collaborators;
use crate::documents::{self, Document};
use crate::error::CoreError;
use crate::linked;
use crate::patch::double_option;
use crate::record::{Fields, Record};
use crate::scalar;
use crate::status::Statut;

/// A unit of strategic work scheduled over a week range inside one
/// chantier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projet {
    pub id: String,
    pub name: String,
    pub chantier_id: String,
    pub week_start: i64,
    pub week_end: i64,
    pub collaborateurs: Vec<String>,
    pub status: Statut,
    pub commentaire: String,
    pub avancement: i64,
    pub objectif: String,
    pub referent_comite_ia: String,
    pub referent_conformite: String,
    pub meneur: String,
    pub date_comite: Option<String>,
    pub sprint_names: String,
    pub documents: Vec<Document>,
}

/// Create payload. Every field beyond name/chantier has a default, applied
/// here rather than left to the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProjet {
    pub name: String,
    pub chantier_id: String,
    #[serde(default = "default_week")]
    pub week_start: i64,
    #[serde(default)]
    pub week_end: i64,
    #[serde(default)]
    pub collaborateurs: Vec<String>,
    #[serde(default)]
    pub status: Statut,
    #[serde(default)]
    pub commentaire: String,
    #[serde(default)]
    pub avancement: i64,
    #[serde(default)]
    pub objectif: String,
    #[serde(default)]
    pub referent_comite_ia: String,
    #[serde(default)]
    pub referent_conformite: String,
    #[serde(default)]
    pub meneur: String,
    #[serde(default)]
    pub date_comite: Option<String>,
    #[serde(default)]
    pub sprint_names: String,
}

/// Partial update payload. Absent keys leave the stored field untouched;
/// `date_comite` additionally distinguishes an explicit null (clear the
/// date) from absence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjetPatch {
    pub name: Option<String>,
    pub chantier_id: Option<String>,
    pub week_start: Option<i64>,
    pub week_end: Option<i64>,
    pub collaborateurs: Option<Vec<String>>,
    pub status: Option<Statut>,
    pub commentaire: Option<String>,
    pub avancement: Option<i64>,
    pub objectif: Option<String>,
    pub referent_comite_ia: Option<String>,
    pub referent_conformite: Option<String>,
    pub meneur: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_comite: Option<Option<String>>,
    pub sprint_names: Option<String>,
}

fn default_week() -> i64 {
    1
}

/// Decode a raw projet record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Projet {
    let f = |name: &str| record.field(name);

    let week_start = scalar::int_or(f("WeekStart"), 1);
    let mut documents = documents::decode_links(f("Documents"));
    documents.extend(documents::decode_attachments(f("Fichiers")));

    Projet {
        id: record.id.clone(),
        name: scalar::text(f("Name")),
        chantier_id: linked::linked_id(f("ChantierId")),
        week_start,
        week_end: scalar::int_or(f("WeekEnd"), week_start),
        collaborateurs: collaborators::decode_set(f("CollaborateursParRole")),
        status: crate::status::decode(&scalar::text(f("Status"))),
        commentaire: scalar::text(f("Commentaire")),
        avancement: scalar::int_or(f("Avancement"), 0),
        objectif: scalar::text(f("Objectif")),
        referent_comite_ia: linked::linked_id(f("ReferentComiteIA")),
        referent_conformite: linked::linked_id(f("ReferentConformite")),
        meneur: linked::linked_id(f("Meneur")),
        date_comite: scalar::opt_text(f("DateComite")),
        sprint_names: scalar::text(f("SprintNames")),
        documents,
    }
}

/// Validate a create payload before any external call.
pub fn validate_new(input: &NewProjet, calendar: &WeekCalendar) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("le nom du projet est requis"));
    }
    if input.chantier_id.trim().is_empty() {
        return Err(CoreError::validation("le chantier est requis"));
    }
    if !calendar.contains_week(input.week_start) {
        return Err(CoreError::validation(format!(
            "semaine de début invalide: {}",
            input.week_start
        )));
    }
    let week_end = effective_week_end(input);
    if !calendar.contains_week(week_end) {
        return Err(CoreError::validation(format!(
            "semaine de fin invalide: {week_end}"
        )));
    }
    if week_end < input.week_start {
        return Err(CoreError::validation(
            "la semaine de fin doit être postérieure à la semaine de début",
        ));
    }
    Ok(())
}

/// Validate a patch payload. Week bounds are checked for whichever week
/// fields are supplied; the start/end ordering only when both are.
pub fn validate_patch(patch: &ProjetPatch, calendar: &WeekCalendar) -> Result<(), CoreError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(CoreError::validation("le nom du projet ne peut pas être vide"));
        }
    }
    for week in [patch.week_start, patch.week_end].into_iter().flatten() {
        if !calendar.contains_week(week) {
            return Err(CoreError::validation(format!("semaine invalide: {week}")));
        }
    }
    if let (Some(start), Some(end)) = (patch.week_start, patch.week_end) {
        if end < start {
            return Err(CoreError::validation(
                "la semaine de fin doit être postérieure à la semaine de début",
            ));
        }
    }
    Ok(())
}

/// Build the full outbound field-set for a create.
pub fn encode_new(input: &NewProjet) -> Fields {
    let mut fields = Fields::new();
    fields.insert("Name".into(), Value::String(input.name.clone()));
    fields.insert("ChantierId".into(), linked::encode_link(&input.chantier_id));
    fields.insert("WeekStart".into(), Value::from(input.week_start));
    fields.insert("WeekEnd".into(), Value::from(effective_week_end(input)));
    fields.insert(
        "CollaborateursParRole".into(),
        Value::String(collaborators::encode_set(&input.collaborateurs)),
    );
    fields.insert("Status".into(), Value::String(input.status.as_str().into()));
    fields.insert("Commentaire".into(), Value::String(input.commentaire.clone()));
    fields.insert("Avancement".into(), Value::from(input.avancement));
    fields.insert("Objectif".into(), Value::String(input.objectif.clone()));
    fields.insert(
        "ReferentComiteIA".into(),
        linked::encode_link(&input.referent_comite_ia),
    );
    fields.insert(
        "ReferentConformite".into(),
        linked::encode_link(&input.referent_conformite),
    );
    fields.insert("Meneur".into(), linked::encode_link(&input.meneur));
    if let Some(date) = &input.date_comite {
        fields.insert("DateComite".into(), Value::String(date.clone()));
    }
    if !input.sprint_names.is_empty() {
        fields.insert("SprintNames".into(), Value::String(input.sprint_names.clone()));
    }
    fields
}

/// Build the sparse outbound field-set for a patch: only supplied keys.
pub fn encode_patch(patch: &ProjetPatch) -> Fields {
    let mut fields = Fields::new();
    if let Some(name) = &patch.name {
        fields.insert("Name".into(), Value::String(name.clone()));
    }
    if let Some(chantier_id) = &patch.chantier_id {
        fields.insert("ChantierId".into(), linked::encode_link(chantier_id));
    }
    if let Some(week_start) = patch.week_start {
        fields.insert("WeekStart".into(), Value::from(week_start));
    }
    if let Some(week_end) = patch.week_end {
        fields.insert("WeekEnd".into(), Value::from(week_end));
    }
    if let Some(collaborateurs) = &patch.collaborateurs {
        fields.insert(
            "CollaborateursParRole".into(),
            Value::String(collaborators::encode_set(collaborateurs)),
        );
    }
    if let Some(status) = patch.status {
        fields.insert("Status".into(), Value::String(status.as_str().into()));
    }
    if let Some(commentaire) = &patch.commentaire {
        fields.insert("Commentaire".into(), Value::String(commentaire.clone()));
    }
    if let Some(avancement) = patch.avancement {
        fields.insert("Avancement".into(), Value::from(avancement));
    }
    if let Some(objectif) = &patch.objectif {
        fields.insert("Objectif".into(), Value::String(objectif.clone()));
    }
    if let Some(referent) = &patch.referent_comite_ia {
        fields.insert("ReferentComiteIA".into(), linked::encode_link(referent));
    }
    if let Some(referent) = &patch.referent_conformite {
        fields.insert("ReferentConformite".into(), linked::encode_link(referent));
    }
    if let Some(meneur) = &patch.meneur {
        fields.insert("Meneur".into(), linked::encode_link(meneur));
    }
    match &patch.date_comite {
        Some(Some(date)) => {
            fields.insert("DateComite".into(), Value::String(date.clone()));
        }
        // Explicit clear: the store wants null, not an empty string.
        Some(None) => {
            fields.insert("DateComite".into(), Value::Null);
        }
        None => {}
    }
    if let Some(sprint_names) = &patch.sprint_names {
        fields.insert("SprintNames".into(), Value::String(sprint_names.clone()));
    }
    fields
}

fn effective_week_end(input: &NewProjet) -> i64 {
    if input.week_end == 0 {
        input.week_start
    } else {
        input.week_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with(fields: Value) -> Record {
        Record::new(
            "recProj1",
            fields.as_object().cloned().unwrap_or_default(),
        )
    }

    #[test]
    fn decode_id_only_record_uses_defaults() {
        let projet = decode(&Record::new("recProj1", Fields::new()));
        assert_eq!(projet.id, "recProj1");
        assert_eq!(projet.week_start, 1);
        assert_eq!(projet.week_end, 1);
        assert_eq!(projet.status, Statut::Todo);
        assert_eq!(projet.avancement, 0);
        assert!(projet.collaborateurs.is_empty());
        assert!(projet.documents.is_empty());
        assert_eq!(projet.date_comite, None);
    }

    #[test]
    fn decode_full_record() {
        let projet = decode(&record_with(json!({
            "Name": "Migration SI",
            "ChantierId": ["recChant1"],
            "WeekStart": 3,
            "WeekEnd": 7,
            "CollaborateursParRole": r#"{"gouvernance":["remi"],"equipe":["celine","remi"]}"#,
            "Status": "in_progress",
            "Commentaire": "en bonne voie",
            "Avancement": 40,
            "Meneur": "recCollab9",
            "DateComite": "2026-04-02",
            "SprintNames": "Sprint 1: Cadrage",
            "Documents": r#"[{"id":"doc1","name":"Note","url":"https://x","type":"notion"}]"#
        })));

        assert_eq!(projet.chantier_id, "recChant1");
        assert_eq!(projet.week_end, 7);
        assert_eq!(projet.collaborateurs, vec!["remi", "celine"]);
        assert_eq!(projet.status, Statut::InProgress);
        assert_eq!(projet.meneur, "recCollab9");
        assert_eq!(projet.date_comite.as_deref(), Some("2026-04-02"));
        assert_eq!(projet.documents.len(), 1);
    }

    #[test]
    fn week_end_falls_back_to_week_start() {
        let projet = decode(&record_with(json!({"WeekStart": 9})));
        assert_eq!(projet.week_end, 9);
    }

    #[test]
    fn encode_new_applies_defaults() {
        let input: NewProjet =
            serde_json::from_value(json!({"name": "P", "chantierId": "recChant1"})).unwrap();
        let fields = encode_new(&input);

        assert_eq!(fields["WeekStart"], json!(1));
        assert_eq!(fields["WeekEnd"], json!(1));
        assert_eq!(fields["Status"], json!("todo"));
        assert_eq!(fields["CollaborateursParRole"], json!("[]"));
        assert_eq!(fields["ChantierId"], json!(["recChant1"]));
        assert_eq!(fields["Avancement"], json!(0));
        assert!(!fields.contains_key("DateComite"));
    }

    #[test]
    fn encode_new_legacy_chantier_key_stays_scalar() {
        let input: NewProjet =
            serde_json::from_value(json!({"name": "P", "chantierId": "ia-generative"})).unwrap();
        assert_eq!(encode_new(&input)["ChantierId"], json!("ia-generative"));
    }

    #[test]
    fn encode_patch_is_sparse() {
        let patch: ProjetPatch = serde_json::from_value(json!({"status": "done"})).unwrap();
        let fields = encode_patch(&patch);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["Status"], json!("done"));
    }

    #[test]
    fn encode_patch_clears_date_with_null() {
        let patch: ProjetPatch = serde_json::from_value(json!({"dateComite": null})).unwrap();
        let fields = encode_patch(&patch);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["DateComite"], Value::Null);

        let untouched: ProjetPatch = serde_json::from_value(json!({})).unwrap();
        assert!(encode_patch(&untouched).is_empty());
    }

    #[test]
    fn encode_patch_clears_meneur_with_empty_array() {
        let patch: ProjetPatch = serde_json::from_value(json!({"meneur": ""})).unwrap();
        assert_eq!(encode_patch(&patch)["Meneur"], json!([]));
    }

    #[test]
    fn validation_rejects_missing_required_fields() {
        let calendar = WeekCalendar::new(2026);
        let missing_name: NewProjet =
            serde_json::from_value(json!({"name": "  ", "chantierId": "recChant1"})).unwrap();
        assert!(validate_new(&missing_name, &calendar).is_err());

        let missing_chantier: NewProjet =
            serde_json::from_value(json!({"name": "P", "chantierId": ""})).unwrap();
        assert!(validate_new(&missing_chantier, &calendar).is_err());
    }

    #[test]
    fn validation_rejects_bad_week_ranges() {
        let calendar = WeekCalendar::new(2026);
        let inverted: NewProjet = serde_json::from_value(
            json!({"name": "P", "chantierId": "recChant1", "weekStart": 10, "weekEnd": 3}),
        )
        .unwrap();
        assert!(validate_new(&inverted, &calendar).is_err());

        let out_of_grid: NewProjet = serde_json::from_value(
            json!({"name": "P", "chantierId": "recChant1", "weekStart": 60}),
        )
        .unwrap();
        assert!(validate_new(&out_of_grid, &calendar).is_err());

        let patch: ProjetPatch =
            serde_json::from_value(json!({"weekStart": 10, "weekEnd": 3})).unwrap();
        assert!(validate_patch(&patch, &calendar).is_err());

        let end_only: ProjetPatch = serde_json::from_value(json!({"weekEnd": 12})).unwrap();
        assert!(validate_patch(&end_only, &calendar).is_ok());
    }
}
