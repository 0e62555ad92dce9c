use chrono::NaiveDate;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::reglement::Reglement;

use crate::shared::api_utils::api_url;
use crate::shared::date_utils::{format_date_opt, parse_range};
use crate::shared::resource_page::{
    Column, FormField, InputKind, ResourcePage, ResourcePageConfig,
};

static COLUMNS: &[Column<Reglement>] = &[
    Column {
        title: "Montant payé",
        cell: |r| format!("{:.2}", r.montant_paye),
    },
    Column {
        title: "Montant restant",
        cell: |r| format!("{:.2}", r.montant_restant),
    },
    Column {
        title: "Payée",
        cell: |r| if r.payee { "Oui" } else { "Non" }.to_string(),
    },
    Column {
        title: "Date",
        cell: |r| format_date_opt(r.date_reglement.as_deref()),
    },
];

static FIELDS: &[FormField] = &[
    FormField {
        name: "montantPaye",
        label: "Montant payé",
        input: InputKind::Number { step: "0.01" },
    },
    FormField {
        name: "montantRestant",
        label: "Montant restant",
        input: InputKind::Number { step: "0.01" },
    },
    FormField {
        name: "payee",
        label: "Payée",
        input: InputKind::Checkbox,
    },
    FormField {
        name: "dateReglement",
        label: "Date de règlement",
        input: InputKind::Date,
    },
];

// Payments are an append-only ledger: records are created, never
// edited or removed.
static CONFIG: ResourcePageConfig<Reglement> = ResourcePageConfig {
    title: "Règlements",
    add_label: "Ajouter un règlement",
    form_title_new: "Nouveau règlement",
    form_title_edit: "Modifier le règlement",
    columns: COLUMNS,
    form_fields: FIELDS,
    can_edit: false,
    can_delete: false,
    assign: None,
};

async fn chiffre_affaire(start: NaiveDate, end: NaiveDate) -> Result<f64, String> {
    let url = api_url(&format!(
        "/reglement/getChiffreAffaireEntreDeuxDate/{}/{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    ));
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json::<f64>().await.map_err(|e| e.to_string())
}

async fn reglements_by_facture(facture_id: i64) -> Result<Vec<Reglement>, String> {
    let url = api_url(&format!("/reglement/retrieveReglementByFacture/{}", facture_id));
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Total revenue collected over a date range.
#[component]
fn ChiffreAffairePanel() -> impl IntoView {
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
                "Failed to calculate chiffre affaire: enter a valid YYYY-MM-DD range".to_string(),
            ));
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match chiffre_affaire(s, e).await {
                Ok(v) => {
                    result.set(Some(v));
                    error.set(None);
                }
                Err(msg) => {
                    result.set(None);
                    error.set(Some(format!("Failed to calculate chiffre affaire: {}", msg)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="panel">
            <button class="panel__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() {
                    "▼ Chiffre d'affaires"
                } else {
                    "► Chiffre d'affaires"
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
                        <p class="panel__result">{format!("Chiffre d'affaires : {:.2}", v)}</p>
                    })}
                </div>
            </Show>
        </div>
    }
}

/// Payments filtered down to one invoice.
#[component]
fn ByFacturePanel() -> impl IntoView {
    let expanded = RwSignal::new(false);
    let facture_id = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Vec<Reglement>>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let search = move |_| {
        let Ok(id) = facture_id.get_untracked().trim().parse::<i64>() else {
            results.set(None);
            error.set(Some("Failed to fetch reglements: enter a facture ID".to_string()));
            return;
        };
        loading.set(true);
        spawn_local(async move {
            match reglements_by_facture(id).await {
                Ok(items) => {
                    results.set(Some(items));
                    error.set(None);
                }
                Err(msg) => {
                    results.set(None);
                    error.set(Some(format!("Failed to fetch reglements: {}", msg)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="panel">
            <button class="panel__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() {
                    "▼ Règlements par facture"
                } else {
                    "► Règlements par facture"
                }}
            </button>
            <Show when=move || expanded.get()>
                <div class="panel__body">
                    <label class="form-field">
                        <span class="form-field__label">"Facture ID"</span>
                        <input
                            type="number"
                            step="1"
                            prop:value=move || facture_id.get()
                            on:input=move |ev| facture_id.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" disabled=move || loading.get() on:click=search>
                        {move || if loading.get() { "Recherche..." } else { "Rechercher" }}
                    </button>
                    <button
                        class="btn btn--secondary"
                        on:click=move |_| {
                            facture_id.set(String::new());
                            results.set(None);
                            error.set(None);
                        }
                    >
                        "Effacer"
                    </button>
                    {move || error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })}
                    {move || results.get().map(|items| {
                        if items.is_empty() {
                            view! { <p class="table-empty">"Aucun règlement pour cette facture"</p> }.into_any()
                        } else {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Montant payé"</th>
                                            <th>"Montant restant"</th>
                                            <th>"Payée"</th>
                                            <th>"Date"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .iter()
                                            .map(|r| view! {
                                                <tr>
                                                    <td>{r.id_reglement.unwrap_or_default()}</td>
                                                    <td>{format!("{:.2}", r.montant_paye)}</td>
                                                    <td>{format!("{:.2}", r.montant_restant)}</td>
                                                    <td>{if r.payee { "Oui" } else { "Non" }}</td>
                                                    <td>{format_date_opt(r.date_reglement.as_deref())}</td>
                                                </tr>
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                    })}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ReglementsView() -> impl IntoView {
    view! {
        <ResourcePage config=CONFIG>
            <ChiffreAffairePanel />
            <ByFacturePanel />
        </ResourcePage>
    }
}
