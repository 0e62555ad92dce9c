use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;

/// Product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorieProduit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_categorie_produit: Option<i64>,
    pub code_categorie: String,
    pub libelle_categorie: String,
}

pub static CATEGORIE_PRODUIT: ResourceDescriptor = ResourceDescriptor {
    name: "categorieProduit",
    singular: "category",
    plural: "categories",
    base_path: "/categorieProduit",
    // The backend controller keeps this segment singular.
    collection_path: "categorieProduit",
    id_field: "idCategorieProduit",
    fields: &[
        FieldSpec::required("codeCategorie", FieldKind::Text),
        FieldSpec::required("libelleCategorie", FieldKind::Text),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: None,
};

impl Record for CategorieProduit {
    fn descriptor() -> &'static ResourceDescriptor {
        &CATEGORIE_PRODUIT
    }

    fn id(&self) -> Option<i64> {
        self.id_categorie_produit
    }
}
