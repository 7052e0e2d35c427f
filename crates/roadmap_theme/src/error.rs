use thiserror::Error;

/// Errors raised while loading theme configuration
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("unknown color role {0:?}")]
    UnknownRole(String),
}
