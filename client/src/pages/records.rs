//! Generic list/create/edit/delete screen shared by every record resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Patients, appointments, medical records, prescriptions, progress reports,
//! the medication log, and notifications all render through `RecordsPage`;
//! the per-resource columns, form fields, and API paths come from
//! `net::resources`.
//!
//! Rows are fetched once per mount into a local signal. Creates append the
//! stored record, edits replace the row in place, and deletes remove it
//! locally, so mock mode (which keeps no server state) behaves the same as
//! remote mode.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::resources::{Field, FieldError, FieldKind, Resource, cell_text, prefill_values, record_id};
use crate::net::types::Record;
use crate::state::auth::SessionContext;

/// Drop the row with `id`; returns whether one was removed.
pub fn remove_by_id(rows: &mut Vec<Record>, id: &str) -> bool {
    let before = rows.len();
    rows.retain(|row| record_id(row).as_deref() != Some(id));
    rows.len() != before
}

/// Replace the row sharing `record`'s id, or append it when none does.
pub fn upsert_by_id(rows: &mut Vec<Record>, record: Record) {
    let existing = record_id(&record).and_then(|id| rows.iter().position(|row| record_id(row).as_deref() == Some(&id)));
    match existing {
        Some(index) => rows[index] = record,
        None => rows.push(record),
    }
}

/// What the record dialog submits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit { id: String },
}

impl DialogMode {
    pub fn heading(&self, resource: Resource) -> String {
        match self {
            DialogMode::Add => format!("Add {}", resource.noun()),
            DialogMode::Edit { .. } => format!("Edit {}", resource.noun()),
        }
    }
}

/// Dialog state for editing `row`, or `None` when it has no id to update.
pub fn edit_dialog(resource: Resource, row: &Record) -> Option<(DialogMode, HashMap<String, String>)> {
    let id = record_id(row)?;
    Some((DialogMode::Edit { id }, prefill_values(resource, row)))
}

/// First validation message for `key`, if any.
pub fn error_for(errors: &[FieldError], key: &str) -> Option<String> {
    errors.iter().find(|e| e.key == key).map(|e| e.message.clone())
}

/// Label of the per-row remove button.
pub fn delete_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Notifications => "Dismiss",
        _ => "Delete",
    }
}

/// One resource table. `title` is shown when a page stacks several.
#[component]
pub fn RecordsPage(resource: Resource, #[prop(optional)] title: Option<&'static str>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<SessionContext>().state();

    let rows = RwSignal::new(Vec::<Record>::new());
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let dialog = RwSignal::new(None::<(DialogMode, HashMap<String, String>)>);

    let fetch_config = config.clone();
    let fetched = LocalResource::new(move || {
        let config = fetch_config.clone();
        let session = auth.get().session;
        async move { crate::net::api::fetch_records(&config, &session, resource).await }
    });

    Effect::new(move || {
        if let Some(result) = fetched.get() {
            match result {
                Ok(list) => {
                    rows.set(list);
                    error.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("loading {} failed: {e}", resource.noun());
                    error.set(e.to_string());
                }
            }
            loaded.set(true);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let config = config.clone();
        let session = auth.get_untracked().session;
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_record(&config, &session, resource, &id).await {
                Ok(()) => {
                    rows.update(|list| {
                        remove_by_id(list, &id);
                    });
                }
                Err(e) => error.set(e.to_string()),
            }
        });
    });

    let on_cancel = Callback::new(move |()| dialog.set(None));
    let on_saved = Callback::new(move |record: Record| {
        rows.update(|list| upsert_by_id(list, record));
        dialog.set(None);
    });
    let has_actions = resource.can_edit() || resource.can_delete();

    let columns = resource.columns();

    view! {
        <div class="records-page">
            <header class="records-page__header">
                {title.map(|t| view! { <h2 class="records-page__title">{t}</h2> })}
                <Show when=move || resource.can_create()>
                    <button class="btn btn--primary" on:click=move |_| dialog.set(Some((DialogMode::Add, HashMap::new())))>
                        "+ Add " {resource.noun()}
                    </button>
                </Show>
            </header>

            <Show when=move || !error.get().is_empty()>
                <p class="records-page__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || loaded.get()
                fallback=move || view! { <p class="records-page__loading">"Loading..."</p> }
            >
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=move || view! { <p class="records-page__empty">"No records yet."</p> }
                >
                    <table class="records-table">
                        <thead>
                            <tr>
                                {columns.iter().map(|c| view! { <th>{c.label}</th> }).collect_view()}
                                <Show when=move || has_actions>
                                    <th></th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let id = record_id(&row);
                                        view! {
                                            <tr>
                                                {columns
                                                    .iter()
                                                    .map(|c| view! { <td>{cell_text(&row, c.key)}</td> })
                                                    .collect_view()}
                                                {has_actions
                                                    .then(|| {
                                                        let id = id.clone();
                                                        let edit = resource
                                                            .can_edit()
                                                            .then(|| edit_dialog(resource, &row))
                                                            .flatten();
                                                        view! {
                                                            <td class="records-table__actions">
                                                                {edit
                                                                    .map(|state| {
                                                                        view! {
                                                                            <button
                                                                                class="btn"
                                                                                on:click=move |_| dialog.set(Some(state.clone()))
                                                                            >
                                                                                "Edit"
                                                                            </button>
                                                                        }
                                                                    })}
                                                                {resource
                                                                    .can_delete()
                                                                    .then(|| {
                                                                        view! {
                                                                            <button
                                                                                class="btn btn--danger"
                                                                                disabled=id.is_none()
                                                                                on:click=move |_| {
                                                                                    if let Some(id) = id.clone() {
                                                                                        on_delete.run(id);
                                                                                    }
                                                                                }
                                                                            >
                                                                                {delete_label(resource)}
                                                                            </button>
                                                                        }
                                                                    })}
                                                            </td>
                                                        }
                                                    })}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|(mode, initial)| {
                        view! {
                            <RecordDialog
                                resource=resource
                                mode=mode
                                initial=initial
                                on_cancel=on_cancel
                                on_saved=on_saved
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Modal form for creating one record or editing an existing one.
#[component]
fn RecordDialog(
    resource: Resource,
    mode: DialogMode,
    initial: HashMap<String, String>,
    on_cancel: Callback<()>,
    on_saved: Callback<Record>,
) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<SessionContext>().state();

    let heading = mode.heading(resource);
    let values = RwSignal::new(initial);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let record = match resource.build_record(&values.get()) {
            Ok(record) => record,
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        let config = config.clone();
        let session = auth.get_untracked().session;
        let mode = mode.clone();
        leptos::task::spawn_local(async move {
            let saved = match mode {
                DialogMode::Add => crate::net::api::create_record(&config, &session, resource, record).await,
                DialogMode::Edit { id } => {
                    crate::net::api::update_record(&config, &session, resource, &id, record).await
                }
            };
            match saved {
                Ok(stored) => {
                    busy.set(false);
                    on_saved.run(stored);
                }
                Err(e) => {
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <form class="dialog__form" on:submit=on_submit novalidate>
                    {resource
                        .fields()
                        .iter()
                        .map(|field| view! { <FormField field=*field values=values errors=errors/> })
                        .collect_view()}
                    <Show when=move || !info.get().is_empty()>
                        <p class="dialog__error">{move || info.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    field: Field,
    values: RwSignal<HashMap<String, String>>,
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView {
    let key = field.key;
    let value = move || values.get().get(key).cloned().unwrap_or_default();
    let set_value = move |raw: String| {
        values.update(|m| {
            m.insert(key.to_owned(), raw);
        });
    };
    let label = if field.required { format!("{} *", field.label) } else { field.label.to_owned() };

    let input = match field.kind {
        FieldKind::Multiline => view! {
            <textarea
                class="dialog__input"
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                class="dialog__input"
                type=kind.input_type()
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <label class="dialog__field">
            <span class="dialog__label">{label}</span>
            {input}
            {move || error_for(&errors.get(), key).map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}
