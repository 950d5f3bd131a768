//! Caregiver reminders kept in the browser.
//!
//! Reminders never reach the API. The list lives under [`REMINDERS_KEY`] in
//! `localStorage` and starts from two presets the first time it is read.

#[cfg(test)]
#[path = "reminders_test.rs"]
mod reminders_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::ui_persistence::{load_json, save_json};

/// Storage key for the reminder list.
pub const REMINDERS_KEY: &str = "eldercare.reminders";

pub const MISSING_REMINDER_FIELDS: &str = "Please provide both a reminder message and time";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub message: String,
    /// Local date-time as entered, e.g. `2024-12-01T10:00`.
    pub date: String,
}

pub fn preset_reminders() -> Vec<Reminder> {
    vec![
        Reminder { id: 1, message: "Administer medication".to_owned(), date: "2024-12-01T10:00:00".to_owned() },
        Reminder { id: 2, message: "Blood pressure check".to_owned(), date: "2024-12-02T14:00:00".to_owned() },
    ]
}

/// Trimmed message and time, or the message shown when either is blank.
///
/// # Errors
///
/// Returns [`MISSING_REMINDER_FIELDS`] when either input is blank.
pub fn validate_reminder(message: &str, time: &str) -> Result<(String, String), &'static str> {
    let (message, time) = (message.trim(), time.trim());
    if message.is_empty() || time.is_empty() {
        return Err(MISSING_REMINDER_FIELDS);
    }
    Ok((message.to_owned(), time.to_owned()))
}

/// Append a reminder with the next free id and return that id.
pub fn add_reminder(list: &mut Vec<Reminder>, message: String, date: String) -> u64 {
    let id = list.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    list.push(Reminder { id, message, date });
    id
}

/// `2024-12-01T10:00:00` as `2024-12-01 10:00`.
pub fn display_time(raw: &str) -> String {
    raw.get(..16).unwrap_or(raw).replacen('T', " ", 1)
}

/// Stored reminders; presets are saved on first use.
fn load_reminders() -> Vec<Reminder> {
    if let Some(saved) = load_json(REMINDERS_KEY) {
        return saved;
    }
    let presets = preset_reminders();
    save_json(REMINDERS_KEY, &presets);
    presets
}

#[component]
pub fn RemindersPanel() -> impl IntoView {
    let reminders = RwSignal::new(preset_reminders());
    let show_add = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    Effect::new(move || reminders.set(load_reminders()));

    let close = move || {
        message.set(String::new());
        time.set(String::new());
        error.set(String::new());
        show_add.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_reminder(&message.get(), &time.get()) {
            Ok((text, when)) => {
                reminders.update(|list| {
                    add_reminder(list, text, when);
                });
                save_json(REMINDERS_KEY, &reminders.get_untracked());
                leptos::logging::log!("reminder added");
                close();
            }
            Err(msg) => error.set(msg.to_owned()),
        }
    };

    view! {
        <section class="reminders">
            <header class="reminders__header">
                <h3>"Reminders"</h3>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "Add Reminder"
                </button>
            </header>
            <Show
                when=move || !reminders.get().is_empty()
                fallback=move || view! { <p class="reminders__empty">"No reminders set yet."</p> }
            >
                <ul class="reminders__list">
                    {move || {
                        reminders
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <li class="reminders__item">
                                        <span class="reminders__message">{r.message}</span>
                                        <span class="reminders__date">"Date: " {display_time(&r.date)}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <Show when=move || show_add.get()>
                <div class="dialog-backdrop" on:click=move |_| close()>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Add Reminder"</h2>
                        <form class="dialog__form" on:submit=on_submit novalidate>
                            <label class="dialog__field">
                                <span class="dialog__label">"Reminder Message"</span>
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="dialog__field">
                                <span class="dialog__label">"Reminder Time"</span>
                                <input
                                    class="dialog__input"
                                    type="datetime-local"
                                    prop:value=move || time.get()
                                    on:input=move |ev| time.set(event_target_value(&ev))
                                />
                            </label>
                            <Show when=move || !error.get().is_empty()>
                                <p class="dialog__error">{move || error.get()}</p>
                            </Show>
                            <div class="dialog__actions">
                                <button class="btn" type="button" on:click=move |_| close()>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit">
                                    "Add"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </section>
    }
}
