use thiserror::Error;

/// Page fixture problems. These are static, so there is no recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("template `{0}` not found")]
    TemplateNotFound(String),
    #[error("host element `{0}` not found")]
    HostNotFound(String),
}

/// The form field that failed validation. Only used for logging; the user
/// always gets the same generic alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("title is required")]
    Title,
    #[error("description is missing or too short")]
    Description,
    #[error("manday is missing, not a number, or out of range")]
    Manday,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("month threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),
    #[error("manday range is inverted: min {min} > max {max}")]
    InvertedMandayRange { min: f64, max: f64 },
}
