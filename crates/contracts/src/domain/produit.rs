use serde::{Deserialize, Serialize};

use crate::descriptor::{DeleteMode, FieldKind, FieldSpec, RelationEndpoint, ResourceDescriptor};
use crate::domain::common::Record;

/// Catalogue product. Dates travel as opaque backend strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_produit: Option<i64>,
    pub code_produit: String,
    pub libelle_produit: String,
    pub prix: f64,
    #[serde(default)]
    pub date_creation: Option<String>,
    #[serde(default)]
    pub date_derniere_modification: Option<String>,
}

pub static PRODUIT: ResourceDescriptor = ResourceDescriptor {
    name: "produit",
    singular: "product",
    plural: "products",
    base_path: "/produit",
    collection_path: "produits",
    id_field: "idProduit",
    fields: &[
        FieldSpec::required("codeProduit", FieldKind::Text),
        FieldSpec::required("libelleProduit", FieldKind::Text),
        FieldSpec::required("prix", FieldKind::Decimal),
        FieldSpec::optional("dateCreation", FieldKind::Date),
        FieldSpec::optional("dateDerniereModification", FieldKind::Date),
    ],
    delete_mode: DeleteMode::HardDelete,
    relation: Some(RelationEndpoint {
        verb: "assignProduitToStock",
        label: "stock",
        row_first: true,
    }),
};

impl Record for Produit {
    fn descriptor() -> &'static ResourceDescriptor {
        &PRODUIT
    }

    fn id(&self) -> Option<i64> {
        self.id_produit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names_match_backend() {
        let p = Produit {
            id_produit: Some(1),
            code_produit: "PROD001".into(),
            libelle_produit: "Laptop Dell XPS 15".into(),
            prix: 3500.0,
            date_creation: Some("2025-01-15".into()),
            date_derniere_modification: None,
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["idProduit"], 1);
        assert_eq!(v["codeProduit"], "PROD001");
        assert_eq!(v["libelleProduit"], "Laptop Dell XPS 15");
        assert_eq!(v["prix"], 3500.0);
        assert_eq!(v["dateCreation"], "2025-01-15");
    }

    #[test]
    fn unsaved_record_serializes_without_id() {
        let p = Produit {
            id_produit: None,
            code_produit: "P1".into(),
            libelle_produit: "Widget".into(),
            prix: 9.99,
            date_creation: None,
            date_derniere_modification: None,
        };
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("idProduit").is_none());
    }
}
