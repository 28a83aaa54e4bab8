use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {detail}")]
    InvalidConfiguration { field: &'static str, detail: String },
    #[error("Required environment variable '{0}' is not set")]
    MissingRequiredField(&'static str),
    #[error("The value of {field} is \"changethis\"; for security, please change it, at least for deployments")]
    WeakSecret { field: &'static str },
}

impl ConfigError {
    pub fn invalid(field: &'static str, detail: impl std::fmt::Display) -> Self {
        Self::InvalidConfiguration {
            field,
            detail: detail.to_string(),
        }
    }
}
