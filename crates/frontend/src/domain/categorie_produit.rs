use leptos::prelude::*;

use contracts::domain::categorie_produit::CategorieProduit;

use crate::shared::resource_page::{
    Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<CategorieProduit>] = &[
    Column {
        title: "Code",
        cell: |c| c.code_categorie.clone(),
    },
    Column {
        title: "Libellé",
        cell: |c| c.libelle_categorie.clone(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "codeCategorie",
        label: "Code",
        input: InputKind::Text,
    },
    FormField {
        name: "libelleCategorie",
        label: "Libellé",
        input: InputKind::Text,
    },
];

static CONFIG: ResourcePageConfig<CategorieProduit> = ResourcePageConfig {
    title: "Catégories de produits",
    add_label: "Ajouter une catégorie",
    form_title_new: "Nouvelle catégorie",
    form_title_edit: "Modifier la catégorie",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: None,
};

#[component]
pub fn CategoriesView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
