use leptos::prelude::*;

use contracts::domain::stock::Stock;

use crate::shared::resource_page::{
    Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<Stock>] = &[
    Column {
        title: "Libellé",
        cell: |s| s.libelle_stock.clone(),
    },
    Column {
        title: "Quantité",
        cell: |s| s.qte.to_string(),
    },
    Column {
        title: "Quantité min",
        cell: |s| s.qte_min.to_string(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "libelleStock",
        label: "Libellé",
        input: InputKind::Text,
    },
    FormField {
        name: "qte",
        label: "Quantité",
        input: InputKind::Number { step: "1" },
    },
    FormField {
        name: "qteMin",
        label: "Quantité minimale",
        input: InputKind::Number { step: "1" },
    },
];

static CONFIG: ResourcePageConfig<Stock> = ResourcePageConfig {
    title: "Stocks",
    add_label: "Ajouter un stock",
    form_title_new: "Nouveau stock",
    form_title_edit: "Modifier le stock",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: true,
    can_delete: true,
    assign: None,
};

#[component]
pub fn StocksView() -> impl IntoView {
    view! { <ResourcePage config=CONFIG /> }
}
