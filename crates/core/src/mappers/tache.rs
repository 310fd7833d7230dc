//! Tâche mapper: raw record ↔ domain, create field-set, sparse patch.
//!
//! The tâches table holds the localized status vocabulary, so encode
//! translates; decode accepts both vocabularies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::linked;
use crate::patch::double_option;
use crate::record::{Fields, Record};
use crate::scalar;
use crate::sprint;
use crate::status::{self, Statut};

/// A unit of work under a project, assigned to one sprint slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tache {
    pub id: String,
    pub name: String,
    pub projet_id: String,
    pub sprint: String,
    pub assignee: String,
    pub heures_estimees: f64,
    pub heures_reelles: f64,
    pub status: Statut,
    pub commentaire: String,
    pub ordre: i64,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
}

/// Create payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTache {
    pub name: String,
    pub projet_id: String,
    #[serde(default = "default_sprint")]
    pub sprint: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub heures_estimees: f64,
    #[serde(default)]
    pub heures_reelles: f64,
    #[serde(default)]
    pub status: Statut,
    #[serde(default)]
    pub commentaire: String,
    #[serde(default)]
    pub ordre: i64,
    #[serde(default)]
    pub date_debut: Option<String>,
    #[serde(default)]
    pub date_fin: Option<String>,
}

/// Partial update payload. Drag-and-drop reassignment patches only
/// `sprint`; both dates are clearable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TachePatch {
    pub name: Option<String>,
    pub projet_id: Option<String>,
    pub sprint: Option<String>,
    pub assignee: Option<String>,
    pub heures_estimees: Option<f64>,
    pub heures_reelles: Option<f64>,
    pub status: Option<Statut>,
    pub commentaire: Option<String>,
    pub ordre: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_debut: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub date_fin: Option<Option<String>>,
}

fn default_sprint() -> String {
    sprint::BACKLOG.to_string()
}

/// Decode a raw tâche record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Tache {
    let f = |name: &str| record.field(name);

    Tache {
        id: record.id.clone(),
        name: scalar::text(f("Name")),
        projet_id: linked::linked_id(f("Projet")),
        sprint: scalar::text_or(f("Sprint"), sprint::BACKLOG),
        assignee: linked::linked_id(f("Assignee")),
        heures_estimees: scalar::number_or(f("HeuresEstimees"), 0.0),
        heures_reelles: scalar::number_or(f("HeuresReelles"), 0.0),
        status: status::decode(&scalar::text(f("Statut"))),
        commentaire: scalar::text(f("Commentaire")),
        ordre: scalar::int_or(f("Ordre"), 0),
        date_debut: scalar::opt_text(f("DateDebut")),
        date_fin: scalar::opt_text(f("DateFin")),
    }
}

/// Validate a create payload before any external call.
pub fn validate_new(input: &NewTache) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("le nom de la tâche est requis"));
    }
    if input.projet_id.trim().is_empty() {
        return Err(CoreError::validation("le projet est requis"));
    }
    if input.heures_estimees < 0.0 || input.heures_reelles < 0.0 {
        return Err(CoreError::validation("les heures ne peuvent pas être négatives"));
    }
    validate_date_range(input.date_debut.as_deref(), input.date_fin.as_deref())
}

/// Validate a patch payload. The date-range ordering is checked whenever
/// both dates are supplied in the same patch.
pub fn validate_patch(patch: &TachePatch) -> Result<(), CoreError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(CoreError::validation("le nom de la tâche ne peut pas être vide"));
        }
    }
    for heures in [patch.heures_estimees, patch.heures_reelles].into_iter().flatten() {
        if heures < 0.0 {
            return Err(CoreError::validation("les heures ne peuvent pas être négatives"));
        }
    }
    let debut = patch.date_debut.as_ref().and_then(|d| d.as_deref());
    let fin = patch.date_fin.as_ref().and_then(|d| d.as_deref());
    validate_date_range(debut, fin)
}

/// Reject malformed ISO dates, and an inverted range when both are given.
fn validate_date_range(debut: Option<&str>, fin: Option<&str>) -> Result<(), CoreError> {
    let parse = |value: &str| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| CoreError::validation(format!("date invalide: {value}")))
    };
    let debut = debut.map(parse).transpose()?;
    let fin = fin.map(parse).transpose()?;
    if let (Some(debut), Some(fin)) = (debut, fin) {
        if fin < debut {
            return Err(CoreError::validation(
                "la date de fin doit être postérieure à la date de début",
            ));
        }
    }
    Ok(())
}

/// Build the full outbound field-set for a create.
pub fn encode_new(input: &NewTache) -> Fields {
    let mut fields = Fields::new();
    fields.insert("Name".into(), Value::String(input.name.clone()));
    fields.insert("Projet".into(), linked::encode_link(&input.projet_id));
    fields.insert("Sprint".into(), Value::String(input.sprint.clone()));
    fields.insert("Assignee".into(), linked::encode_link(&input.assignee));
    fields.insert("HeuresEstimees".into(), Value::from(input.heures_estimees));
    fields.insert("HeuresReelles".into(), Value::from(input.heures_reelles));
    fields.insert(
        "Statut".into(),
        Value::String(status::encode_localise(input.status).into()),
    );
    fields.insert("Commentaire".into(), Value::String(input.commentaire.clone()));
    fields.insert("Ordre".into(), Value::from(input.ordre));
    if let Some(date) = &input.date_debut {
        fields.insert("DateDebut".into(), Value::String(date.clone()));
    }
    if let Some(date) = &input.date_fin {
        fields.insert("DateFin".into(), Value::String(date.clone()));
    }
    fields
}

/// Build the sparse outbound field-set for a patch: only supplied keys.
pub fn encode_patch(patch: &TachePatch) -> Fields {
    let mut fields = Fields::new();
    if let Some(name) = &patch.name {
        fields.insert("Name".into(), Value::String(name.clone()));
    }
    if let Some(projet_id) = &patch.projet_id {
        fields.insert("Projet".into(), linked::encode_link(projet_id));
    }
    if let Some(sprint) = &patch.sprint {
        fields.insert("Sprint".into(), Value::String(sprint.clone()));
    }
    if let Some(assignee) = &patch.assignee {
        fields.insert("Assignee".into(), linked::encode_link(assignee));
    }
    if let Some(heures) = patch.heures_estimees {
        fields.insert("HeuresEstimees".into(), Value::from(heures));
    }
    if let Some(heures) = patch.heures_reelles {
        fields.insert("HeuresReelles".into(), Value::from(heures));
    }
    if let Some(status) = patch.status {
        fields.insert(
            "Statut".into(),
            Value::String(status::encode_localise(status).into()),
        );
    }
    if let Some(commentaire) = &patch.commentaire {
        fields.insert("Commentaire".into(), Value::String(commentaire.clone()));
    }
    if let Some(ordre) = patch.ordre {
        fields.insert("Ordre".into(), Value::from(ordre));
    }
    encode_date(&mut fields, "DateDebut", &patch.date_debut);
    encode_date(&mut fields, "DateFin", &patch.date_fin);
    fields
}

fn encode_date(fields: &mut Fields, name: &str, value: &Option<Option<String>>) {
    match value {
        Some(Some(date)) => {
            fields.insert(name.into(), Value::String(date.clone()));
        }
        Some(None) => {
            fields.insert(name.into(), Value::Null);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_id_only_record_uses_defaults() {
        let tache = decode(&Record::new("recTask1", Fields::new()));
        assert_eq!(tache.sprint, "Backlog");
        assert_eq!(tache.status, Statut::Todo);
        assert_eq!(tache.heures_estimees, 0.0);
        assert_eq!(tache.ordre, 0);
        assert_eq!(tache.date_debut, None);
    }

    #[test]
    fn decode_translates_localized_status() {
        let fields = json!({
            "Name": "Rédiger le cadrage",
            "Projet": ["recProj1"],
            "Sprint": "Sprint 2",
            "Statut": "En cours",
            "HeuresEstimees": 6.5
        });
        let tache = decode(&Record::new("recTask1", fields.as_object().cloned().unwrap()));
        assert_eq!(tache.projet_id, "recProj1");
        assert_eq!(tache.status, Statut::InProgress);
        assert_eq!(tache.heures_estimees, 6.5);
    }

    #[test]
    fn encode_writes_localized_status() {
        let input: NewTache = serde_json::from_value(
            json!({"name": "T", "projetId": "recProj1", "status": "done"}),
        )
        .unwrap();
        let fields = encode_new(&input);
        assert_eq!(fields["Statut"], json!("Terminé"));
        assert_eq!(fields["Projet"], json!(["recProj1"]));
        assert_eq!(fields["Sprint"], json!("Backlog"));
    }

    #[test]
    fn sprint_reassignment_patch_is_single_field() {
        let patch: TachePatch = serde_json::from_value(json!({"sprint": "Sprint 3"})).unwrap();
        let fields = encode_patch(&patch);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["Sprint"], json!("Sprint 3"));
    }

    #[test]
    fn patch_clears_dates_with_null() {
        let patch: TachePatch =
            serde_json::from_value(json!({"dateDebut": null, "dateFin": null})).unwrap();
        let fields = encode_patch(&patch);
        assert_eq!(fields["DateDebut"], Value::Null);
        assert_eq!(fields["DateFin"], Value::Null);
    }

    #[test]
    fn validation_rejects_inverted_date_range() {
        let input: NewTache = serde_json::from_value(json!({
            "name": "T", "projetId": "recProj1",
            "dateDebut": "2026-03-10", "dateFin": "2026-03-01"
        }))
        .unwrap();
        assert!(validate_new(&input).is_err());

        let patch: TachePatch = serde_json::from_value(
            json!({"dateDebut": "2026-03-10", "dateFin": "2026-03-01"}),
        )
        .unwrap();
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn validation_rejects_malformed_dates_and_negative_hours() {
        let bad_date: NewTache = serde_json::from_value(
            json!({"name": "T", "projetId": "recProj1", "dateDebut": "10/03/2026"}),
        )
        .unwrap();
        assert!(validate_new(&bad_date).is_err());

        let negative: NewTache = serde_json::from_value(
            json!({"name": "T", "projetId": "recProj1", "heuresEstimees": -1.0}),
        )
        .unwrap();
        assert!(validate_new(&negative).is_err());
    }
}
