use leptos::prelude::*;

use contracts::domain::fournisseur::Fournisseur;

use crate::shared::resource_page::{
    AssignAction, Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static CATEGORIE_OPTIONS: &[(&str, &str)] = &[
    ("ORDINAIRE", "Ordinaire"),
    ("CONVENTIONNE", "Conventionné"),
];

static COLUMNS: &[Column<Fournisseur>] = &[
    Column {
        title: "Code",
        cell: |f| f.code.clone(),
    },
    Column {
        title: "Libellé",
        cell: |f| f.libelle.clone(),
    },
    Column {
        title: "Catégorie",
        cell: |f| f.categorie_fournisseur.display_name().to_string(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "code",
        label: "Code",
        input: InputKind::Text,
    },
    FormField {
        name: "libelle",
        label: "Libellé",
        input: InputKind::Text,
    },
    FormField {
        name: "categorieFournisseur",
        label: "Catégorie",
        input: InputKind::Select(CATEGORIE_OPTIONS),
    },
];

static CONFIG: ResourcePageConfig<Fournisseur> = ResourcePageConfig {
    title: "Fournisseurs",
    add_label: "Ajouter un fournisseur",
    form_title_new: "Nouveau fournisseur",
    form_title_edit: "Modifier le fournisseur",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: Some(AssignAction {
        button_label: "Assigner Secteur",
        prompt: "Enter Secteur Activite ID:",
    }),
};

#[component]
pub fn FournisseursView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
