use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, RelationEndpoint, ResourceDescriptor};
use crate::domain::common::Record;
use crate::enums::categorie_fournisseur::CategorieFournisseur;

/// Supplier. Activity sectors are assigned through a dedicated
/// endpoint, not carried on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fournisseur {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_fournisseur: Option<i64>,
    pub code: String,
    pub libelle: String,
    pub categorie_fournisseur: CategorieFournisseur,
}

pub static FOURNISSEUR: ResourceDescriptor = ResourceDescriptor {
    name: "fournisseur",
    singular: "fournisseur",
    plural: "fournisseurs",
    base_path: "/fournisseur",
    collection_path: "fournisseurs",
    id_field: "idFournisseur",
    fields: &[
        FieldSpec::required("code", FieldKind::Text),
        FieldSpec::required("libelle", FieldKind::Text),
        FieldSpec::required("categorieFournisseur", FieldKind::Text),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: Some(RelationEndpoint {
        verb: "assignSecteurActiviteToFournisseur",
        label: "secteur activite",
        row_first: false,
    }),
};

impl Record for Fournisseur {
    fn descriptor() -> &'static ResourceDescriptor {
        &FOURNISSEUR
    }

    fn id(&self) -> Option<i64> {
        self.id_fournisseur
    }
}
