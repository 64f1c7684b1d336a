use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("input `{name}` = {value} is outside [{min}, {max}]")]
    OutOfRangeInput {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("scenario YAML error")]
    Config(#[from] serde_yaml::Error),

    #[error("failed to write frame")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
