//! Editable-but-not-yet-submitted state of one record.
//!
//! Fields stay string-typed while the user edits (so partial numeric or
//! date entry is representable) and only convert to the typed
//! submission shape in `to_payload`.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::descriptor::{FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone)]
pub struct FormState {
    descriptor: &'static ResourceDescriptor,
    values: Vec<(&'static str, FieldValue)>,
    editing_id: Option<i64>,
}

impl FormState {
    /// Fresh form for "add new": every field at its empty default.
    pub fn empty(descriptor: &'static ResourceDescriptor) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|f| (f.name, empty_value(f)))
            .collect();
        Self {
            descriptor,
            values,
            editing_id: None,
        }
    }

    /// Form pre-filled from an existing record, for "edit".
    ///
    /// Sensitive fields are never pre-filled; the identity is captured
    /// so the submission becomes a full-record replace.
    pub fn for_record<R: Record>(record: &R) -> Self {
        let descriptor = R::descriptor();
        let value = serde_json::to_value(record).unwrap_or(Value::Null);
        let editing_id = value.get(descriptor.id_field).and_then(Value::as_i64);
        let values = descriptor
            .fields
            .iter()
            .map(|f| {
                let raw = value.get(f.name);
                let fv = if f.sensitive {
                    FieldValue::Text(String::new())
                } else {
                    match f.kind {
                        FieldKind::Flag => {
                            FieldValue::Flag(raw.and_then(Value::as_bool).unwrap_or(false))
                        }
                        _ => FieldValue::Text(display_string(raw)),
                    }
                };
                (f.name, fv)
            })
            .collect();
        Self {
            descriptor,
            values,
            editing_id,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        self.descriptor
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn text(&self, name: &str) -> String {
        match self.value_of(name) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.value_of(name), Some(FieldValue::Flag(true)))
    }

    pub fn set_text(&mut self, name: &str, value: String) {
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = FieldValue::Text(value);
        }
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        if let Some(slot) = self.values.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = FieldValue::Flag(value);
        }
    }

    /// Convert to the typed JSON shape the backend expects.
    ///
    /// Required numerics default to `0` when empty or unparseable,
    /// optional ones to `null`. Blank dates become `null`; non-blank
    /// dates must parse as `YYYY-MM-DD`. Required text must be
    /// non-empty. The identity is included only when editing.
    pub fn to_payload(&self) -> Result<Value, Error> {
        let mut map = Map::new();
        if let Some(id) = self.editing_id {
            map.insert(self.descriptor.id_field.to_string(), json!(id));
        }
        for spec in self.descriptor.fields {
            let value = self
                .value_of(spec.name)
                .cloned()
                .unwrap_or_else(|| empty_value(spec));
            map.insert(spec.name.to_string(), convert(spec, &value)?);
        }
        Ok(Value::Object(map))
    }

    fn value_of(&self, name: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

fn empty_value(spec: &FieldSpec) -> FieldValue {
    match spec.kind {
        FieldKind::Flag => FieldValue::Flag(false),
        _ => FieldValue::Text(String::new()),
    }
}

fn display_string(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

fn convert(spec: &FieldSpec, value: &FieldValue) -> Result<Value, Error> {
    let s = match value {
        FieldValue::Flag(b) => return Ok(Value::Bool(*b)),
        FieldValue::Text(s) => s.trim(),
    };
    match spec.kind {
        FieldKind::Text => {
            if s.is_empty() {
                if spec.required {
                    Err(Error::validation(format!("{} is required", spec.name)))
                } else {
                    Ok(Value::Null)
                }
            } else {
                Ok(Value::String(s.to_string()))
            }
        }
        FieldKind::Decimal => Ok(match s.parse::<f64>() {
            Ok(n) => json!(n),
            Err(_) if spec.required => json!(0.0),
            Err(_) => Value::Null,
        }),
        FieldKind::Integer => Ok(match s.parse::<i64>() {
            Ok(n) => json!(n),
            Err(_) if spec.required => json!(0),
            Err(_) => Value::Null,
        }),
        FieldKind::Date => {
            if s.is_empty() {
                Ok(Value::Null)
            } else if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
                Ok(Value::String(s.to_string()))
            } else {
                Err(Error::validation(format!(
                    "{} must be a YYYY-MM-DD date",
                    spec.name
                )))
            }
        }
        // Flag fields carry FieldValue::Flag; a text value here means a
        // caller bypassed set_flag.
        FieldKind::Flag => Err(Error::validation(format!(
            "{} expects a flag value",
            spec.name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::facture::{Facture, FACTURE};
    use crate::domain::operateur::Operateur;
    use crate::domain::produit::{Produit, PRODUIT};

    fn produit(id: Option<i64>) -> Produit {
        Produit {
            id_produit: id,
            code_produit: "P1".into(),
            libelle_produit: "Widget".into(),
            prix: 9.99,
            date_creation: Some("2025-01-15".into()),
            date_derniere_modification: None,
        }
    }

    #[test]
    fn empty_form_has_empty_defaults() {
        let form = FormState::empty(&FACTURE);
        assert!(form.editing_id().is_none());
        assert_eq!(form.text("montantRemise"), "");
        assert!(!form.flag("archivee"));
    }

    #[test]
    fn for_record_round_trips_through_payload() {
        let form = FormState::for_record(&produit(Some(4)));
        assert_eq!(form.editing_id(), Some(4));
        assert_eq!(form.text("prix"), "9.99");

        let payload = form.to_payload().unwrap();
        assert_eq!(payload["idProduit"], 4);
        assert_eq!(payload["codeProduit"], "P1");
        assert_eq!(payload["libelleProduit"], "Widget");
        assert_eq!(payload["prix"], 9.99);
        assert_eq!(payload["dateCreation"], "2025-01-15");
        assert_eq!(payload["dateDerniereModification"], Value::Null);
    }

    #[test]
    fn new_record_payload_has_no_id() {
        let mut form = FormState::empty(&PRODUIT);
        form.set_text("codeProduit", "P1".into());
        form.set_text("libelleProduit", "Widget".into());
        form.set_text("prix", "9.99".into());
        let payload = form.to_payload().unwrap();
        assert!(payload.get("idProduit").is_none());
        assert_eq!(payload["prix"], 9.99);
    }

    #[test]
    fn sensitive_field_is_never_prefilled() {
        let op = Operateur {
            id_operateur: Some(2),
            nom: "Ben Ali".into(),
            prenom: "Ahmed".into(),
            password: "password123".into(),
        };
        let form = FormState::for_record(&op);
        assert_eq!(form.text("nom"), "Ben Ali");
        assert_eq!(form.text("password"), "");
    }

    #[test]
    fn required_numeric_defaults_to_zero() {
        let mut form = FormState::empty(&FACTURE);
        form.set_text("montantFacture", "1500".into());
        // montantRemise left empty; garbage parses to zero as well.
        let payload = form.to_payload().unwrap();
        assert_eq!(payload["montantRemise"], 0.0);

        form.set_text("montantRemise", "abc".into());
        let payload = form.to_payload().unwrap();
        assert_eq!(payload["montantRemise"], 0.0);
        assert_eq!(payload["montantFacture"], 1500.0);
    }

    #[test]
    fn blank_date_is_null_and_garbage_date_is_rejected() {
        let mut form = FormState::empty(&FACTURE);
        form.set_text("montantRemise", "0".into());
        form.set_text("montantFacture", "100".into());
        let payload = form.to_payload().unwrap();
        assert_eq!(payload["dateCreationFacture"], Value::Null);

        form.set_text("dateCreationFacture", "15/01/2025".into());
        let err = form.to_payload().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn required_text_must_be_present() {
        let mut form = FormState::empty(&PRODUIT);
        form.set_text("libelleProduit", "Widget".into());
        form.set_text("prix", "1".into());
        let err = form.to_payload().unwrap_err();
        assert_eq!(
            err,
            Error::Validation("codeProduit is required".to_string())
        );
    }

    #[test]
    fn text_written_into_a_flag_field_is_rejected() {
        let mut form = FormState::empty(&FACTURE);
        form.set_text("montantRemise", "0".into());
        form.set_text("montantFacture", "100".into());
        // Flags go through set_flag; routing text into one is a bug in
        // the caller and must not serialize silently.
        form.set_text("archivee", "true".into());
        let err = form.to_payload().unwrap_err();
        assert_eq!(
            err,
            Error::Validation("archivee expects a flag value".to_string())
        );
    }

    #[test]
    fn flags_are_copied_from_the_record() {
        let f = Facture {
            id_facture: Some(7),
            montant_remise: 10.0,
            montant_facture: 100.0,
            date_creation_facture: None,
            date_derniere_modification_facture: None,
            archivee: true,
        };
        let form = FormState::for_record(&f);
        assert!(form.flag("archivee"));
        let payload = form.to_payload().unwrap();
        assert_eq!(payload["archivee"], true);
    }
}
