//! Mount layer: which template goes into which host element, and where.
//!
//! Templates and hosts are static page fixtures, so a lookup failure is a
//! setup error that stops the app before it renders anything. Each mounted
//! component then runs its own `configure` step (subscriptions and handlers,
//! done in hooks) and `render_content` step (its `rsx!` body).

use crate::error::SetupError;
use crate::models::ListKind;

pub const APP_HOST: &str = "app";
pub const USER_INPUT_ID: &str = "user-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    ProjectInput,
    ProjectList,
    SingleProject,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [
        TemplateId::ProjectInput,
        TemplateId::ProjectList,
        TemplateId::SingleProject,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectInput => "project-input",
            Self::ProjectList => "project-list",
            Self::SingleProject => "single-project",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Becomes the host's first child.
    AfterBegin,
    /// Becomes the host's last child.
    BeforeEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounted {
    pub template: TemplateId,
    pub element_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Host {
    id: String,
    children: Vec<Mounted>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    templates: Vec<TemplateId>,
    hosts: Vec<Host>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three templates and the `app` mount point, nothing attached yet.
    pub fn with_fixtures() -> Self {
        let mut page = Self::new();
        for template in TemplateId::ALL {
            page.register_template(template);
        }
        page.register_host(APP_HOST);
        page
    }

    /// The full board: the form first, then the active and finished lists.
    pub fn standard() -> Result<Self, SetupError> {
        let mut page = Self::with_fixtures();
        page.attach(
            TemplateId::ProjectInput.as_str(),
            APP_HOST,
            InsertPosition::AfterBegin,
            Some(USER_INPUT_ID),
        )?;
        for kind in [ListKind::Active, ListKind::Finished] {
            let element_id = kind.element_id();
            page.attach(
                TemplateId::ProjectList.as_str(),
                APP_HOST,
                InsertPosition::BeforeEnd,
                Some(&element_id),
            )?;
            page.register_host(&kind.list_id());
            page.item_template(kind)?;
        }
        Ok(page)
    }

    /// Checks that `template_id` can be mounted into `host_id` without
    /// attaching anything. Used for children a component renders itself.
    pub fn resolve(&self, template_id: &str, host_id: &str) -> Result<TemplateId, SetupError> {
        let template = self.template(template_id)?;
        if !self.has_host(host_id) {
            return Err(SetupError::HostNotFound(host_id.to_string()));
        }
        Ok(template)
    }

    /// Resolves the `single-project` template against the `ul` of `kind`.
    pub fn item_template(&self, kind: ListKind) -> Result<TemplateId, SetupError> {
        self.resolve(TemplateId::SingleProject.as_str(), &kind.list_id())
    }

    pub fn register_template(&mut self, template: TemplateId) {
        if !self.templates.contains(&template) {
            self.templates.push(template);
        }
    }

    pub fn register_host(&mut self, id: &str) {
        if self.host(id).is_none() {
            self.hosts.push(Host {
                id: id.to_string(),
                children: Vec::new(),
            });
        }
    }

    pub fn template(&self, id: &str) -> Result<TemplateId, SetupError> {
        self.templates
            .iter()
            .copied()
            .find(|t| t.as_str() == id)
            .ok_or_else(|| SetupError::TemplateNotFound(id.to_string()))
    }

    pub fn has_host(&self, id: &str) -> bool {
        self.host(id).is_some()
    }

    /// Resolves `template_id` and `host_id` and inserts a new element into
    /// the host. An element given an id becomes a host itself.
    pub fn attach(
        &mut self,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        element_id: Option<&str>,
    ) -> Result<Mounted, SetupError> {
        let template = self.template(template_id)?;
        let mounted = Mounted {
            template,
            element_id: element_id.map(str::to_string),
        };
        let host = self
            .hosts
            .iter_mut()
            .find(|h| h.id == host_id)
            .ok_or_else(|| SetupError::HostNotFound(host_id.to_string()))?;
        match position {
            InsertPosition::AfterBegin => host.children.insert(0, mounted.clone()),
            InsertPosition::BeforeEnd => host.children.push(mounted.clone()),
        }
        if let Some(id) = element_id {
            self.register_host(id);
        }
        tracing::debug!(template = template_id, host = host_id, ?position, "mounted");
        Ok(mounted)
    }

    /// Children of `host_id` in document order; empty for unknown hosts.
    pub fn children(&self, host_id: &str) -> &[Mounted] {
        self.host(host_id).map(|h| h.children.as_slice()).unwrap_or(&[])
    }

    fn host(&self, id: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.id == id)
    }
}
