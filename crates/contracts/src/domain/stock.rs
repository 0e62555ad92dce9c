use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;

/// Warehouse stock with its reorder threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_stock: Option<i64>,
    pub libelle_stock: String,
    pub qte: i64,
    pub qte_min: i64,
}

pub static STOCK: ResourceDescriptor = ResourceDescriptor {
    name: "stock",
    singular: "stock",
    plural: "stocks",
    base_path: "/stock",
    collection_path: "stocks",
    id_field: "idStock",
    fields: &[
        FieldSpec::required("libelleStock", FieldKind::Text),
        FieldSpec::required("qte", FieldKind::Integer),
        FieldSpec::required("qteMin", FieldKind::Integer),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: None,
};

impl Record for Stock {
    fn descriptor() -> &'static ResourceDescriptor {
        &STOCK
    }

    fn id(&self) -> Option<i64> {
        self.id_stock
    }
}
