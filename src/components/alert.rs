use dioxus::events::Key;
use dioxus::prelude::*;

/// Blocking message dialog. The overlay swallows input until dismissed.
#[component]
pub fn Alert(message: &'static str, dismiss: &'static str, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            tabindex: 0,
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape || e.key() == Key::Enter {
                    on_close.call(());
                }
            },
            div { class: "modal", role: "alertdialog",
                p { class: "meta", "{message}" }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        autofocus: "true",
                        onclick: move |_| on_close.call(()),
                        "{dismiss}"
                    }
                }
            }
        }
    }
}
