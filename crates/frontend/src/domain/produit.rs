use leptos::prelude::*;

use contracts::domain::produit::Produit;

use crate::shared::date_utils::format_date_opt;
use crate::shared::resource_page::{
    AssignAction, Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<Produit>] = &[
    Column {
        title: "Code",
        cell: |p| p.code_produit.clone(),
    },
    Column {
        title: "Libellé",
        cell: |p| p.libelle_produit.clone(),
    },
    Column {
        title: "Prix",
        cell: |p| format!("{:.2}", p.prix),
    },
    Column {
        title: "Créé le",
        cell: |p| format_date_opt(p.date_creation.as_deref()),
    },
    Column {
        title: "Modifié le",
        cell: |p| format_date_opt(p.date_derniere_modification.as_deref()),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "codeProduit",
        label: "Code",
        input: InputKind::Text,
    },
    FormField {
        name: "libelleProduit",
        label: "Libellé",
        input: InputKind::Text,
    },
    FormField {
        name: "prix",
        label: "Prix",
        input: InputKind::Number { step: "0.01" },
    },
    FormField {
        name: "dateCreation",
        label: "Date de création",
        input: InputKind::Date,
    },
    FormField {
        name: "dateDerniereModification",
        label: "Dernière modification",
        input: InputKind::Date,
    },
];

static CONFIG: ResourcePageConfig<Produit> = ResourcePageConfig {
    title: "Produits",
    add_label: "Ajouter un produit",
    form_title_new: "Nouveau produit",
    form_title_edit: "Modifier le produit",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: Some(AssignAction {
        button_label: "Assigner Stock",
        prompt: "Enter Stock ID:",
    }),
};

#[component]
pub fn ProduitsView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
