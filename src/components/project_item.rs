use dioxus::prelude::*;

use crate::config::{BoardConfig, Labels};
use crate::drag::{DragPhase, DragRole, Draggable};
use crate::models::Project;

/// Effort text for `manday`: days below `month_threshold`, otherwise the
/// fractional number of months (`manday / month_threshold`).
pub fn effort_label(manday: f64, month_threshold: f64, labels: &Labels) -> String {
    if manday < month_threshold {
        format!("{manday}{}", labels.day_unit)
    } else {
        format!("{}{}", manday / month_threshold, labels.month_unit)
    }
}

/// One rendered project. Drag source only; nothing is attached to the drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItemView {
    pub project: Project,
}

impl ProjectItemView {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn effort(&self, config: &BoardConfig) -> String {
        effort_label(self.project.manday, config.month_threshold, config.labels())
    }
}

impl Draggable for ProjectItemView {
    fn drag_start_handler(&self) {
        tracing::info!(id = %self.project.id, title = %self.project.title, "drag started");
    }

    fn drag_end_handler(&self) {
        tracing::info!(id = %self.project.id, "drag ended");
    }
}

#[component]
pub fn ProjectItem(project: Project) -> Element {
    let config = use_context::<BoardConfig>();
    let view = ProjectItemView::new(project);
    let effort = view.effort(&config);
    let Project { id, title, description, .. } = view.project.clone();
    let on_start = view.clone();
    let on_end = view;

    rsx! {
        li {
            id: "{id}",
            class: "project-item",
            draggable: "true",
            ondragstart: move |_| {
                DragRole::Source(&on_start).dispatch(DragPhase::Start);
            },
            ondragend: move |_| {
                DragRole::Source(&on_end).dispatch(DragPhase::End);
            },
            h2 { "{title}" }
            h3 { "{effort}" }
            p { "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::models::ProjectStatus;

    fn project(manday: f64) -> Project {
        Project {
            id: "p".into(),
            title: "Billing".into(),
            description: "invoice export".into(),
            manday,
            status: ProjectStatus::Active,
        }
    }

    #[test]
    fn below_threshold_shows_days() {
        let en = Locale::En.labels();
        assert_eq!(effort_label(10.0, 20.0, en), "10person-days");
        assert_eq!(effort_label(19.5, 20.0, en), "19.5person-days");
        assert_eq!(effort_label(1.0, 20.0, Locale::Ja.labels()), "1人日");
    }

    #[test]
    fn threshold_and_above_show_fractional_months() {
        let en = Locale::En.labels();
        assert_eq!(effort_label(20.0, 20.0, en), "1person-months");
        assert_eq!(effort_label(25.0, 20.0, en), "1.25person-months");
        assert_eq!(effort_label(100.0, 20.0, en), "5person-months");
        assert_eq!(effort_label(30.0, 20.0, Locale::Ja.labels()), "1.5人月");
    }

    #[test]
    fn view_uses_configured_threshold() {
        let config = BoardConfig {
            locale: Locale::En,
            month_threshold: 22.0,
            ..BoardConfig::default()
        };
        assert_eq!(ProjectItemView::new(project(21.0)).effort(&config), "21person-days");
        assert_eq!(ProjectItemView::new(project(33.0)).effort(&config), "1.5person-months");
    }
}
