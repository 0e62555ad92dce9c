use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, ResourceDescriptor};
use crate::domain::common::Record;

/// Supplier activity sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecteurActivite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_secteur_activite: Option<i64>,
    pub code_secteur_activite: String,
    pub libelle_secteur_activite: String,
}

pub static SECTEUR_ACTIVITE: ResourceDescriptor = ResourceDescriptor {
    name: "secteurActivite",
    singular: "secteur activite",
    plural: "secteur activites",
    base_path: "/secteurActivite",
    // Same singular retrieve-all quirk as categorieProduit.
    collection_path: "secteurActivite",
    id_field: "idSecteurActivite",
    fields: &[
        FieldSpec::required("codeSecteurActivite", FieldKind::Text),
        FieldSpec::required("libelleSecteurActivite", FieldKind::Text),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: None,
};

impl Record for SecteurActivite {
    fn descriptor() -> &'static ResourceDescriptor {
        &SECTEUR_ACTIVITE
    }

    fn id(&self) -> Option<i64> {
        self.id_secteur_activite
    }
}
