use leptos::prelude::*;

use contracts::domain::secteur_activite::SecteurActivite;

use crate::shared::resource_page::{
    Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<SecteurActivite>] = &[
    Column {
        title: "Code",
        cell: |s| s.code_secteur_activite.clone(),
    },
    Column {
        title: "Libellé",
        cell: |s| s.libelle_secteur_activite.clone(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "codeSecteurActivite",
        label: "Code",
        input: InputKind::Text,
    },
    FormField {
        name: "libelleSecteurActivite",
        label: "Libellé",
        input: InputKind::Text,
    },
];

static CONFIG: ResourcePageConfig<SecteurActivite> = ResourcePageConfig {
    title: "Secteurs d'activité",
    add_label: "Ajouter un secteur",
    form_title_new: "Nouveau secteur",
    form_title_edit: "Modifier le secteur",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: None,
};

#[component]
pub fn SecteursView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
