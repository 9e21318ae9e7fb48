use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

/// One tracked project. Only the store creates these; nothing edits them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Effort estimate in person-days.
    pub manday: f64,
    pub status: ProjectStatus,
}

/// A validated form submission, ready to become a [`Project`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub manday: f64,
}

/// Status bucket rendered by one project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Id of the list section element, e.g. `active-projects`.
    pub fn element_id(self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Id of the inner `ul` that hosts the project items.
    pub fn list_id(self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "active-projects" => Some(Self::Active),
            "finished-projects" => Some(Self::Finished),
            _ => None,
        }
    }

    pub fn accepts(self, status: ProjectStatus) -> bool {
        matches!(
            (self, status),
            (Self::Active, ProjectStatus::Active) | (Self::Finished, ProjectStatus::Finished)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_ids_follow_kind() {
        assert_eq!(ListKind::Active.element_id(), "active-projects");
        assert_eq!(ListKind::Finished.list_id(), "finished-projects-list");
        assert_eq!(ListKind::from_element_id("finished-projects"), Some(ListKind::Finished));
        assert_eq!(ListKind::from_element_id("user-input"), None);
    }

    #[test]
    fn kinds_accept_only_their_status() {
        assert!(ListKind::Active.accepts(ProjectStatus::Active));
        assert!(!ListKind::Active.accepts(ProjectStatus::Finished));
        assert!(ListKind::Finished.accepts(ProjectStatus::Finished));
        assert!(!ListKind::Finished.accepts(ProjectStatus::Active));
    }

    #[test]
    fn status_serializes_lowercase() {
        let project = Project {
            id: "p1".into(),
            title: "Board".into(),
            description: "kanban rewrite".into(),
            manday: 12.0,
            status: ProjectStatus::Active,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["manday"], 12.0);
    }
}
