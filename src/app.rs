use dioxus::prelude::*;

use crate::app_assets::head_nodes;
use crate::components::{project_input::ProjectInput, project_list::ProjectList};
use crate::models::ListKind;
use crate::page::{Mounted, Page, TemplateId, APP_HOST};
use crate::state::ProjectStore;

/// Root component. Expects a [`Page`] and a [`crate::config::BoardConfig`]
/// in context and provides the shared [`ProjectStore`].
#[component]
pub fn App() -> Element {
    let page = use_context::<Page>();
    use_context_provider(ProjectStore::new);

    rsx! {
        { head_nodes() }
        div { id: APP_HOST, class: "app",
            for mounted in page.children(APP_HOST).iter().cloned() {
                { render_mounted(mounted) }
            }
        }
    }
}

fn render_mounted(mounted: Mounted) -> Element {
    let element_id = mounted.element_id.unwrap_or_default();
    match mounted.template {
        TemplateId::ProjectInput => rsx! { ProjectInput { key: "{element_id}" } },
        TemplateId::ProjectList => match ListKind::from_element_id(&element_id) {
            Some(kind) => rsx! { ProjectList { key: "{element_id}", kind: kind } },
            None => {
                tracing::error!(element_id = %element_id, "project list mounted without a known status bucket");
                rsx! {}
            }
        },
        TemplateId::SingleProject => {
            tracing::error!("single-project must be mounted inside a project list");
            rsx! {}
        }
    }
}
