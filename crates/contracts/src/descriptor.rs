//! Static per-resource configuration.
//!
//! One `ResourceDescriptor` per backend entity collapses the eight
//! near-identical view/service pairs into a single parameterized
//! implementation: endpoint paths, field typing for form conversion,
//! and the delete policy all come from here.

/// How form input for a field is typed at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Fractional amount (`prix`, `montantFacture`, ...).
    Decimal,
    /// Whole quantity (`qte`, `qteMin`).
    Integer,
    /// `YYYY-MM-DD` string, `null` when blank.
    Date,
    /// Checkbox-backed boolean.
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// JSON name in the backend contract, e.g. `codeProduit`.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Never pre-filled when editing an existing record (passwords).
    pub sensitive: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            sensitive: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            sensitive: false,
        }
    }

    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Deletion policy of a resource.
///
/// Factures are immutable once issued: the backend only archives them
/// (`cancel-facture`), it never removes them from the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    HardDelete,
    CancelOnly,
}

/// Cross-entity assignment endpoint (`assignProduitToStock`, ...).
///
/// The backend takes the assigned entity first, then the target:
/// `/{verb}/{assigned}/{target}`. `row_first` records whether the table
/// row supplies the first path argument (produit→stock) or the second
/// (operateur→facture, secteurActivite→fournisseur).
#[derive(Debug, Clone, Copy)]
pub struct RelationEndpoint {
    pub verb: &'static str,
    /// Human label for error messages ("Failed to assign {label}: ...").
    pub label: &'static str,
    pub row_first: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// Endpoint segment: `retrieve-{name}/{id}`, `add-{name}`, ...
    pub name: &'static str,
    /// Display labels used in error messages.
    pub singular: &'static str,
    pub plural: &'static str,
    /// Controller prefix, e.g. `/produit`.
    pub base_path: &'static str,
    /// Suffix of the retrieve-all endpoint. Usually the plural segment
    /// (`produits`) but some controllers keep it singular
    /// (`retrieve-all-categorieProduit`).
    pub collection_path: &'static str,
    /// JSON name of the backend-assigned identity (`idProduit`).
    pub id_field: &'static str,
    pub fields: &'static [FieldSpec],
    pub delete_mode: DeleteMode,
    pub relation: Option<RelationEndpoint>,
}

impl ResourceDescriptor {
    pub fn retrieve_all_path(&self) -> String {
        format!("{}/retrieve-all-{}", self.base_path, self.collection_path)
    }

    pub fn retrieve_path(&self, id: i64) -> String {
        format!("{}/retrieve-{}/{}", self.base_path, self.name, id)
    }

    pub fn add_path(&self) -> String {
        format!("{}/add-{}", self.base_path, self.name)
    }

    pub fn modify_path(&self) -> String {
        format!("{}/modify-{}", self.base_path, self.name)
    }

    pub fn remove_path(&self, id: i64) -> String {
        format!("{}/remove-{}/{}", self.base_path, self.name, id)
    }

    pub fn cancel_path(&self, id: i64) -> String {
        format!("{}/cancel-{}/{}", self.base_path, self.name, id)
    }

    /// Path of the relation-assignment endpoint, `None` when the
    /// resource has no such endpoint.
    pub fn assign_path(&self, first: i64, second: i64) -> Option<String> {
        self.relation
            .map(|rel| format!("{}/{}/{}/{}", self.base_path, rel.verb, first, second))
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::categorie_produit::CATEGORIE_PRODUIT;
    use crate::domain::facture::FACTURE;
    use crate::domain::produit::PRODUIT;

    #[test]
    fn produit_paths_match_backend_contract() {
        assert_eq!(PRODUIT.retrieve_all_path(), "/produit/retrieve-all-produits");
        assert_eq!(PRODUIT.retrieve_path(4), "/produit/retrieve-produit/4");
        assert_eq!(PRODUIT.add_path(), "/produit/add-produit");
        assert_eq!(PRODUIT.modify_path(), "/produit/modify-produit");
        assert_eq!(PRODUIT.remove_path(4), "/produit/remove-produit/4");
        assert_eq!(
            PRODUIT.assign_path(4, 2).as_deref(),
            Some("/produit/assignProduitToStock/4/2")
        );
    }

    #[test]
    fn facture_cancel_path() {
        assert_eq!(FACTURE.cancel_path(7), "/facture/cancel-facture/7");
        assert_eq!(
            FACTURE.assign_path(3, 7).as_deref(),
            Some("/facture/assignOperateurToFacture/3/7")
        );
    }

    #[test]
    fn singular_collection_segment_is_kept() {
        // This controller never pluralized its retrieve-all segment.
        assert_eq!(
            CATEGORIE_PRODUIT.retrieve_all_path(),
            "/categorieProduit/retrieve-all-categorieProduit"
        );
    }
}
