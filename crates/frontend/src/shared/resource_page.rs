//! Generic CRUD page: one component renders all eight resource views.
//!
//! Each domain module supplies a static `ResourcePageConfig` (columns,
//! form fields, capabilities) and the page wires it to a
//! `ListViewModel` over the HTTP client. Signal updates follow a
//! clone-run-replace discipline: the view-model is taken out of the
//! signal, awaited on, and written back whole, with a separate `busy`
//! flag suppressing overlapping submissions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::descriptor::DeleteMode;
use contracts::domain::common::Record;
use contracts::{FormState, ListViewModel, ResourceClient};

use crate::shared::http::HttpResourceClient;
use crate::shared::list_utils::{compare_cells, get_sort_indicator};

pub struct Column<R> {
    pub title: &'static str,
    pub cell: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for Column<R> {}

#[derive(Clone, Copy)]
pub enum InputKind {
    Text,
    Password,
    Number { step: &'static str },
    Date,
    Checkbox,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
}

/// Relation-assignment button on each row, e.g. "Assigner Stock".
#[derive(Clone, Copy)]
pub struct AssignAction {
    pub button_label: &'static str,
    pub prompt: &'static str,
}

pub struct ResourcePageConfig<R: 'static> {
    pub title: &'static str,
    pub add_label: &'static str,
    pub form_title_new: &'static str,
    pub form_title_edit: &'static str,
    pub columns: &'static [Column<R>],
    pub form_fields: &'static [FormField],
    pub can_edit: bool,
    pub can_delete: bool,
    pub assign: Option<AssignAction>,
}

impl<R> Clone for ResourcePageConfig<R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<R> Copy for ResourcePageConfig<R> {}

#[component]
pub fn ResourcePage<R>(
    config: ResourcePageConfig<R>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView
where
    R: Record + Send + Sync,
{
    let vm = RwSignal::new(ListViewModel::new(HttpResourceClient::<R>::new()));
    let form = RwSignal::new(None::<FormState>);
    let busy = RwSignal::new(false);
    // (column index, ascending); None keeps the backend's order.
    let sort = RwSignal::new(None::<(usize, bool)>);

    let reload = move || {
        spawn_local(async move {
            let mut m = vm.get_untracked();
            m.load().await;
            vm.set(m);
        });
    };
    reload();

    let open_new = move |_| {
        form.set(Some(FormState::empty(R::descriptor())));
    };

    // Edit always re-fetches the record so the form starts from fresh
    // backend state, not from the possibly stale table row.
    let open_edit = move |id: i64| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let client = vm.get_untracked().client().clone();
            match client.fetch_by_id(id).await {
                Ok(record) => form.set(Some(FormState::for_record(&record))),
                Err(e) => {
                    let d = R::descriptor();
                    vm.update(|m| m.set_error(format!("Failed to fetch {}: {}", d.singular, e)));
                }
            }
            busy.set(false);
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(f) = form.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let mut m = vm.get_untracked();
            let ok = if f.is_editing() {
                m.update(&f).await
            } else {
                m.create(&f).await
            };
            vm.set(m);
            busy.set(false);
            if ok {
                form.set(None);
            }
        });
    };

    let delete_or_cancel = move |id: i64| {
        if busy.get_untracked() {
            return;
        }
        let cancel_only = R::descriptor().delete_mode == DeleteMode::CancelOnly;
        let message = if cancel_only {
            "Annuler cette facture ?"
        } else {
            "Supprimer cet élément ?"
        };
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let mut m = vm.get_untracked();
            if cancel_only {
                m.cancel(id).await;
            } else {
                m.remove(id).await;
            }
            vm.set(m);
            busy.set(false);
        });
    };

    let assign = move |id: i64| {
        let Some(action) = config.assign else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(input)) = window.prompt_with_message(action.prompt) else {
            return;
        };
        let Ok(other_id) = input.trim().parse::<i64>() else {
            if let Some(rel) = R::descriptor().relation {
                vm.update(|m| {
                    m.set_error(format!("Failed to assign {}: '{}' is not an ID", rel.label, input))
                });
            }
            return;
        };
        busy.set(true);
        spawn_local(async move {
            let mut m = vm.get_untracked();
            m.assign_relation(id, other_id).await;
            vm.set(m);
            busy.set(false);
        });
    };

    let toggle_sort = move |index: usize| {
        sort.update(|s| {
            *s = match *s {
                Some((i, asc)) if i == index => Some((index, !asc)),
                _ => Some((index, true)),
            };
        });
    };

    let rows = move || {
        let mut items = vm.with(|m| m.items().to_vec());
        if let Some((index, ascending)) = sort.get() {
            let cell = config.columns[index].cell;
            items.sort_by(|a, b| {
                let ord = compare_cells(&cell(a), &cell(b));
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }
        items
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">{config.title}</h2>
                <div class="page__toolbar">
                    <button
                        class="btn btn--secondary"
                        disabled=move || vm.with(|m| m.is_loading())
                        on:click=move |_| reload()
                    >
                        {move || if vm.with(|m| m.is_loading()) { "Chargement..." } else { "Actualiser" }}
                    </button>
                    <button class="btn btn--primary" on:click=open_new>
                        {config.add_label}
                    </button>
                </div>
            </div>

            {move || {
                vm.with(|m| m.error().map(str::to_string)).map(|err| view! {
                    <div class="alert alert--error">
                        <span>{err}</span>
                        <button class="alert__dismiss" on:click=move |_| vm.update(|m| m.clear_error())>
                            "×"
                        </button>
                    </div>
                })
            }}

            <div class="table-wrapper">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            {config
                                .columns
                                .iter()
                                .enumerate()
                                .map(|(index, column)| {
                                    let title = column.title;
                                    view! {
                                        <th class="data-table__sortable" on:click=move |_| toggle_sort(index)>
                                            {title}
                                            {move || {
                                                let (current, ascending) = match sort.get() {
                                                    Some((i, asc)) => (Some(i), asc),
                                                    None => (None, true),
                                                };
                                                get_sort_indicator(current, index, ascending)
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|record| record.id()
                            children=move |record| {
                                let id = record.id().unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        {config
                                            .columns
                                            .iter()
                                            .map(|column| view! { <td>{(column.cell)(&record)}</td> })
                                            .collect_view()}
                                        <td class="data-table__actions">
                                            {config.can_edit.then(|| view! {
                                                <button class="btn btn--small" on:click=move |_| open_edit(id)>
                                                    "Modifier"
                                                </button>
                                            })}
                                            {config.can_delete.then(|| {
                                                let label = if R::descriptor().delete_mode == DeleteMode::CancelOnly {
                                                    "Annuler"
                                                } else {
                                                    "Supprimer"
                                                };
                                                view! {
                                                    <button class="btn btn--small btn--danger" on:click=move |_| delete_or_cancel(id)>
                                                        {label}
                                                    </button>
                                                }
                                            })}
                                            {config.assign.map(|action| view! {
                                                <button class="btn btn--small" on:click=move |_| assign(id)>
                                                    {action.button_label}
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || {
                    (!vm.with(|m| m.is_loading()) && vm.with(|m| m.items().is_empty())).then(|| view! {
                        <p class="table-empty">"Aucun élément"</p>
                    })
                }}
            </div>

            {children.map(|extra| extra())}

            <Show when=move || form.with(Option::is_some)>
                <div class="modal-overlay" on:click=move |_| form.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3 class="modal__title">
                            {move || {
                                if form.with(|f| f.as_ref().is_some_and(FormState::is_editing)) {
                                    config.form_title_edit
                                } else {
                                    config.form_title_new
                                }
                            }}
                        </h3>
                        <form on:submit=submit>
                            {config
                                .form_fields
                                .iter()
                                .map(|field| {
                                    let required = R::descriptor()
                                        .field(field.name)
                                        .is_some_and(|spec| spec.required);
                                    render_field(*field, required, form)
                                })
                                .collect_view()}
                            <div class="modal__actions">
                                <button type="button" class="btn btn--secondary" on:click=move |_| form.set(None)>
                                    "Annuler"
                                </button>
                                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                                    {move || if busy.get() { "Enregistrement..." } else { "Enregistrer" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn render_field(field: FormField, required: bool, form: RwSignal<Option<FormState>>) -> AnyView {
    let name = field.name;
    let text_value = move || form.with(|f| f.as_ref().map(|f| f.text(name)).unwrap_or_default());
    let set_text = move |value: String| {
        form.update(|f| {
            if let Some(f) = f {
                f.set_text(name, value);
            }
        });
    };

    let input = match field.input {
        InputKind::Text => view! {
            <input
                type="text"
                required=required
                prop:value=text_value
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Password => view! {
            <input
                type="password"
                required=required
                prop:value=text_value
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Number { step } => view! {
            <input
                type="number"
                step=step
                required=required
                prop:value=text_value
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Date => view! {
            <input
                type="date"
                required=required
                prop:value=text_value
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Checkbox => view! {
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.flag(name)))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| {
                        if let Some(f) = f {
                            f.set_flag(name, checked);
                        }
                    });
                }
            />
        }
        .into_any(),
        InputKind::Select(options) => view! {
            <select
                required=required
                prop:value=text_value
                on:change=move |ev| set_text(event_target_value(&ev))
            >
                {(!required).then(|| view! { <option value="">"-"</option> })}
                {options
                    .iter()
                    .copied()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{field.label}</span>
            {input}
        </label>
    }
    .into_any()
}
