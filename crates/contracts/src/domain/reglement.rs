use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;

/// Payment against an invoice. Append-only in the UI: the backend
/// exposes create and query endpoints, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reglement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_reglement: Option<i64>,
    pub montant_paye: f64,
    pub montant_restant: f64,
    #[serde(default)]
    pub payee: bool,
    #[serde(default)]
    pub date_reglement: Option<String>,
}

pub static REGLEMENT: ResourceDescriptor = ResourceDescriptor {
    name: "reglement",
    singular: "reglement",
    plural: "reglements",
    base_path: "/reglement",
    collection_path: "reglements",
    id_field: "idReglement",
    fields: &[
        FieldSpec::required("montantPaye", FieldKind::Decimal),
        FieldSpec::required("montantRestant", FieldKind::Decimal),
        FieldSpec::optional("payee", FieldKind::Flag),
        FieldSpec::optional("dateReglement", FieldKind::Date),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: None,
};

impl Record for Reglement {
    fn descriptor() -> &'static ResourceDescriptor {
        &REGLEMENT
    }

    fn id(&self) -> Option<i64> {
        self.id_reglement
    }
}
