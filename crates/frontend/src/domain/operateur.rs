use leptos::prelude::*;

use contracts::domain::operateur::Operateur;

use crate::shared::resource_page::{
    Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<Operateur>] = &[
    Column {
        title: "Nom",
        cell: |o| o.nom.clone(),
    },
    Column {
        title: "Prénom",
        cell: |o| o.prenom.clone(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "nom",
        label: "Nom",
        input: InputKind::Text,
    },
    FormField {
        name: "prenom",
        label: "Prénom",
        input: InputKind::Text,
    },
    FormField {
        name: "password",
        label: "Mot de passe",
        input: InputKind::Password,
    },
];

static CONFIG: ResourcePageConfig<Operateur> = ResourcePageConfig {
    title: "Opérateurs",
    add_label: "Ajouter un opérateur",
    form_title_new: "Nouvel opérateur",
    form_title_edit: "Modifier l'opérateur",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: None,
};

#[component]
pub fn OperateursView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
