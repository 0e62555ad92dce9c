use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, RelationEndpoint, ResourceDescriptor};
use crate::domain::common::Record;

/// Invoice. Immutable once issued: the backend archives (`archivee`)
/// instead of deleting, and exposes no modify endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_facture: Option<i64>,
    pub montant_remise: f64,
    pub montant_facture: f64,
    #[serde(default)]
    pub date_creation_facture: Option<String>,
    #[serde(default)]
    pub date_derniere_modification_facture: Option<String>,
    #[serde(default)]
    pub archivee: bool,
}

pub static FACTURE: ResourceDescriptor = ResourceDescriptor {
    name: "facture",
    singular: "facture",
    plural: "factures",
    base_path: "/facture",
    collection_path: "factures",
    id_field: "idFacture",
    fields: &[
        FieldSpec::required("montantRemise", FieldKind::Decimal),
        FieldSpec::required("montantFacture", FieldKind::Decimal),
        FieldSpec::optional("dateCreationFacture", FieldKind::Date),
        FieldSpec::optional("dateDerniereModificationFacture", FieldKind::Date),
        FieldSpec::optional("archivee", FieldKind::Flag),
    ],
    delete_mode: DeleteMode::CancelOnly,
    relation: Some(RelationEndpoint {
        verb: "assignOperateurToFacture",
        label: "operateur",
        row_first: false,
    }),
};

impl Record for Facture {
    fn descriptor() -> &'static ResourceDescriptor {
        &FACTURE
    }

    fn id(&self) -> Option<i64> {
        self.id_facture
    }
}
