pub mod app;
pub mod app_assets;
pub mod components;
pub mod config;
pub mod drag;
pub mod error;
pub mod logging;
pub mod models;
pub mod page;
pub mod state;
pub mod validation;

pub use app::App;
pub use config::BoardConfig;
pub use error::{ConfigError, InputError, SetupError};
pub use models::{ListKind, Project, ProjectDraft, ProjectStatus};
pub use page::Page;
pub use state::{ProjectStore, Subscription};
