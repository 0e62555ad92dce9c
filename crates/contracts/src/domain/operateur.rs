use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;

/// Back-office operator. The password is write-only on the form side:
/// it is never pre-filled when editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operateur {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_operateur: Option<i64>,
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub password: String,
}

pub static OPERATEUR: ResourceDescriptor = ResourceDescriptor {
    name: "operateur",
    singular: "operateur",
    plural: "operateurs",
    base_path: "/operateur",
    collection_path: "operateurs",
    id_field: "idOperateur",
    fields: &[
        FieldSpec::required("nom", FieldKind::Text),
        FieldSpec::required("prenom", FieldKind::Text),
        FieldSpec::required("password", FieldKind::Text).sensitive(),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: None,
};

impl Record for Operateur {
    fn descriptor() -> &'static ResourceDescriptor {
        &OPERATEUR
    }

    fn id(&self) -> Option<i64> {
        self.id_operateur
    }
}
