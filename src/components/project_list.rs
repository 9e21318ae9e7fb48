use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::project_item::ProjectItem;
use crate::config::{BoardConfig, Labels};
use crate::drag::{DragPhase, DragRole, DragTarget};
use crate::models::{ListKind, Project};
use crate::page::Page;
use crate::state::ProjectStore;

/// Contents of one status bucket plus its drop affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListView {
    pub kind: ListKind,
    pub assigned: Vec<Project>,
    pub droppable: bool,
}

impl ProjectListView {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            assigned: Vec::new(),
            droppable: false,
        }
    }

    /// Replaces the assigned projects with the ones in `snapshot` that
    /// belong to this bucket. Always a full replacement.
    pub fn assign(&mut self, snapshot: &[Project]) {
        self.assigned = snapshot
            .iter()
            .filter(|p| self.kind.accepts(p.status))
            .cloned()
            .collect();
        tracing::debug!(list = self.kind.as_str(), count = self.assigned.len(), "list redrawn");
    }

    pub fn heading(&self, labels: &Labels) -> &'static str {
        match self.kind {
            ListKind::Active => labels.active_heading,
            ListKind::Finished => labels.finished_heading,
        }
    }

    /// Drag-over fires continuously; only the first one changes anything.
    pub fn wants_drag_over(&self) -> bool {
        !self.droppable
    }

    pub fn list_class(&self) -> &'static str {
        if self.droppable {
            "droppable"
        } else {
            ""
        }
    }
}

impl DragTarget for ProjectListView {
    fn drag_over_handler(&mut self) {
        self.droppable = true;
    }

    // Moving a project between lists is not supported yet; the drop is
    // acknowledged and nothing changes.
    fn drop_handler(&mut self) {
        tracing::info!(list = self.kind.as_str(), "drop received, no move performed");
    }

    fn drag_leave_handler(&mut self) {
        self.droppable = false;
    }
}

#[component]
pub fn ProjectList(kind: ListKind) -> Element {
    let config = use_context::<BoardConfig>();
    let store = use_context::<ProjectStore>();
    let page = use_context::<Page>();
    let mut view = use_signal(|| ProjectListView::new(kind));
    let items_mountable = use_hook(move || match page.item_template(kind) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(list = kind.as_str(), "project items cannot be mounted: {e}");
            false
        }
    });

    // Held for the component's lifetime; dropping it on unmount unsubscribes.
    use_hook(move || {
        let subscription = store.subscribe(move |snapshot| {
            let mut view = view;
            view.write().assign(snapshot);
        });
        Rc::new(subscription)
    });

    let current = view.read().clone();
    let heading = current.heading(config.labels());
    let list_class = current.list_class();
    let element_id = kind.element_id();
    let list_id = kind.list_id();
    let items = if items_mountable { current.assigned } else { Vec::new() };

    rsx! {
        section {
            id: "{element_id}",
            class: "projects",
            ondragover: move |e: DragEvent| {
                e.prevent_default();
                let wants = view.read().wants_drag_over();
                if wants {
                    DragRole::Target(&mut *view.write()).dispatch(DragPhase::Over);
                }
            },
            ondragleave: move |_| {
                DragRole::Target(&mut *view.write()).dispatch(DragPhase::Leave);
            },
            ondrop: move |e: DragEvent| {
                e.prevent_default();
                DragRole::Target(&mut *view.write()).dispatch(DragPhase::Drop);
            },
            header {
                h2 { "{heading}" }
            }
            ul { id: "{list_id}", class: "{list_class}",
                for project in items {
                    ProjectItem { key: "{project.id}", project: project.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::models::ProjectStatus;

    fn project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.into(),
            title: format!("project {id}"),
            description: "some description".into(),
            manday: 5.0,
            status,
        }
    }

    #[test]
    fn assign_keeps_matching_status_in_order() {
        let snapshot = vec![
            project("a", ProjectStatus::Active),
            project("b", ProjectStatus::Finished),
            project("c", ProjectStatus::Active),
        ];
        let mut active = ProjectListView::new(ListKind::Active);
        let mut finished = ProjectListView::new(ListKind::Finished);
        active.assign(&snapshot);
        finished.assign(&snapshot);

        let ids: Vec<_> = active.assigned.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(finished.assigned.len(), 1);
        assert_eq!(finished.assigned[0].id, "b");
    }

    #[test]
    fn assign_replaces_previous_contents() {
        let mut view = ProjectListView::new(ListKind::Active);
        view.assign(&[project("a", ProjectStatus::Active)]);
        view.assign(&[project("b", ProjectStatus::Active)]);
        assert_eq!(view.assigned.len(), 1);
        assert_eq!(view.assigned[0].id, "b");
    }

    #[test]
    fn drag_over_and_leave_toggle_affordance() {
        let mut view = ProjectListView::new(ListKind::Active);
        assert_eq!(view.list_class(), "");
        view.drag_over_handler();
        assert_eq!(view.list_class(), "droppable");
        view.drag_leave_handler();
        assert!(!view.droppable);
    }

    #[test]
    fn repeated_drag_over_is_only_handled_once() {
        let mut view = ProjectListView::new(ListKind::Active);
        let mut handled = 0;
        for _ in 0..5 {
            if view.wants_drag_over() {
                DragRole::Target(&mut view).dispatch(DragPhase::Over);
                handled += 1;
            }
        }
        assert_eq!(handled, 1);
        assert!(view.droppable);

        DragRole::Target(&mut view).dispatch(DragPhase::Leave);
        assert!(view.wants_drag_over());
    }

    #[test]
    fn drop_changes_nothing() {
        let mut view = ProjectListView::new(ListKind::Finished);
        view.assign(&[project("a", ProjectStatus::Finished)]);
        view.drag_over_handler();
        let before = view.clone();
        view.drop_handler();
        assert_eq!(view, before);
    }

    #[test]
    fn heading_follows_kind_and_locale() {
        let labels = Locale::Ja.labels();
        assert_eq!(ProjectListView::new(ListKind::Active).heading(labels), "実行中プロジェクト");
        assert_eq!(
            ProjectListView::new(ListKind::Finished).heading(Locale::En.labels()),
            "Finished Projects"
        );
    }
}
