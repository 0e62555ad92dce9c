use chrono::NaiveDate;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::facture::Facture;

use crate::shared::api_utils::api_url;
use crate::shared::date_utils::{format_date_opt, parse_range};
use crate::shared::resource_page::{
    AssignAction, Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<Facture>] = &[
    Column {
        title: "Montant",
        cell: |f| format!("{:.2}", f.montant_facture),
    },
    Column {
        title: "Remise",
        cell: |f| format!("{:.2}", f.montant_remise),
    },
    Column {
        title: "Créée le",
        cell: |f| format_date_opt(f.date_creation_facture.as_deref()),
    },
    Column {
        title: "Statut",
        cell: |f| if f.archivee { "Annulée" } else { "Active" }.to_string(),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "montantFacture",
        label: "Montant",
        input: InputKind::Number { step: "0.01" },
    },
    FormField {
        name: "montantRemise",
        label: "Remise",
        input: InputKind::Number { step: "0.01" },
    },
    FormField {
        name: "dateCreationFacture",
        label: "Date de création",
        input: InputKind::Date,
    },
    FormField {
        name: "dateDerniereModificationFacture",
        label: "Dernière modification",
        input: InputKind::Date,
    },
];

// Factures are immutable once issued: no edit, and "delete" archives
// through the cancel endpoint.
static CONFIG: ResourcePageConfig<Facture> = ResourcePageConfig {
    title: "Factures",
    add_label: "Ajouter une facture",
    form_title_new: "Nouvelle facture",
    form_title_edit: "Modifier la facture",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: false,
    can_delete: true,
    assign: Some(AssignAction {
        button_label: "Assigner Opérateur",
        prompt: "Enter Operateur ID:",
    }),
};

async fn pourcentage_recouvrement(start: NaiveDate, end: NaiveDate) -> Result<f64, String> {
    let url = api_url(&format!(
        "/facture/pourcentageRecouvrement/{}/{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ));
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json::<f64>().await.map_err(|e| e.to_string())
}

/// Share of the invoiced amount recovered over a date range.
#[component]
fn RecouvrementPanel() -> impl IntoView {
    let expanded = RwSignal::new(false);
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let result = RwSignal::new(None::<f64>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let calculate = move |_| {
        let Some((s, e)) = parse_range(&start.get_untracked(), &end.get_untracked()) else {
            result.set(None);
            error.set(Some(
                "Failed to calculate recouvrement: enter a valid YYYY-MM-DD range".to_string(),
            ));
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match pourcentage_recouvrement(s, e).await {
                Ok(v) => {
                    result.set(Some(v));
                    error.set(None);
                }
                Err(msg) => {
                    result.set(None);
                    error.set(Some(format!("Failed to calculate recouvrement: {}", msg)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="panel">
            <button class="panel__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() {
                    "▼ Pourcentage de recouvrement"
                } else {
                    "► Pourcentage de recouvrement"
                }}
            </button>
            <Show when=move || expanded.get()>
                <div class="panel__body">
                    <label class="form-field">
                        <span class="form-field__label">"Du"</span>
                        <input
                            type="date"
                            prop:value=move || start.get()
                            on:input=move |ev| start.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Au"</span>
                        <input
                            type="date"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" disabled=move || loading.get() on:click=calculate>
                        {move || if loading.get() { "Calcul..." } else { "Calculer" }}
                    </button>
                    {move || error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })}
                    {move || result.get().map(|v| view! {
                        <p class="panel__result">{format!("Recouvrement : {:.2} %", v)}</p>
                    })}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn FacturesView() -> impl IntoView {
    view! {
        <ResourcePage config=CONFIG>
            <RecouvrementPanel />
        </ResourcePage>
    }
}
