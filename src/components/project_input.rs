use dioxus::prelude::*;

use crate::components::alert::Alert;
use crate::config::{BoardConfig, InputRules, Labels};
use crate::error::InputError;
use crate::models::ProjectDraft;
use crate::page::USER_INPUT_ID;
use crate::state::ProjectStore;
use crate::validation::{validate, Validatable};

/// Raw values of the three form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub manday: String,
}

impl FormFields {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.manday.clear();
    }
}

/// Checks the raw fields against `rules` and returns the draft to store.
///
/// The manday field must be non-blank and parse as a number before the
/// numeric range applies.
pub fn gather_user_input(fields: &FormFields, rules: &InputRules) -> Result<ProjectDraft, InputError> {
    if !validate(&Validatable::text(fields.title.as_str()).required()) {
        return Err(InputError::Title);
    }
    let description = Validatable::text(fields.description.as_str())
        .required()
        .min_length(rules.description_min_length);
    if !validate(&description) {
        return Err(InputError::Description);
    }
    if !validate(&Validatable::text(fields.manday.as_str()).required()) {
        return Err(InputError::Manday);
    }
    let manday: f64 = fields.manday.trim().parse().map_err(|_| InputError::Manday)?;
    let range = Validatable::number(manday)
        .required()
        .min(rules.manday_min)
        .max(rules.manday_max);
    if !validate(&range) {
        return Err(InputError::Manday);
    }
    Ok(ProjectDraft {
        title: fields.title.clone(),
        description: fields.description.clone(),
        manday,
    })
}

/// Validates `fields` and, on success, adds the project and clears the form.
/// On failure the fields are left untouched.
pub fn submit(
    fields: &mut FormFields,
    rules: &InputRules,
    store: &ProjectStore,
) -> Result<(), InputError> {
    let draft = gather_user_input(fields, rules).inspect_err(|e| {
        tracing::warn!(field = ?e, "project input rejected: {e}");
    })?;
    store.add_project(draft.title, draft.description, draft.manday);
    fields.clear();
    Ok(())
}

/// Runs one form submission and returns the alert to show, if any.
///
/// The form carries `novalidate`, so every submit lands here and the
/// webview never pre-empts these rules with its own constraint checks.
pub fn handle_submit(
    fields: &mut FormFields,
    rules: &InputRules,
    store: &ProjectStore,
    labels: &Labels,
) -> Option<&'static str> {
    submit(fields, rules, store).err().map(|_| labels.invalid_input)
}

#[component]
pub fn ProjectInput() -> Element {
    let config = use_context::<BoardConfig>();
    let store = use_context::<ProjectStore>();
    let labels = config.labels();
    let mut fields = use_signal(FormFields::default);
    let mut alert = use_signal(|| Option::<&'static str>::None);

    let rules = config.rules.clone();
    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if let Some(message) = handle_submit(&mut fields.write(), &rules, &store, labels) {
            alert.set(Some(message));
        }
    };

    let FormFields { title, description, manday } = fields.read().clone();
    let alert_message = *alert.read();

    rsx! {
        form { id: USER_INPUT_ID, novalidate: true, onsubmit: on_submit,
            div { class: "form-control",
                label { r#for: "title", "{labels.title}" }
                input {
                    id: "title",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |e| fields.write().title = e.value(),
                }
            }
            div { class: "form-control",
                label { r#for: "description", "{labels.description}" }
                textarea {
                    id: "description",
                    rows: "3",
                    value: "{description}",
                    oninput: move |e| fields.write().description = e.value(),
                }
            }
            div { class: "form-control",
                label { r#for: "manday", "{labels.manday}" }
                input {
                    id: "manday",
                    r#type: "number",
                    value: "{manday}",
                    oninput: move |e| fields.write().manday = e.value(),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{labels.submit}" }
        }
        {alert_message.map(move |message| rsx! {
            Alert { message: message, dismiss: labels.dismiss, on_close: move |_| alert.set(None) }
        })}
    }
}
