//! Error type for settings loading and validation.
//!
//! Only configuration can fail; the render path itself never returns an
//! error (see `flighthud-render`). This type covers reading a settings
//! file, parsing its YAML, and rejecting color tokens the markup layer
//! would not recognize.

use std::fmt;

/// Error raised while loading or validating overlay settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    IoError(std::io::Error),

    /// The settings document failed to parse.
    ParseError(String),

    /// A color field holds a token the markup layer cannot interpret.
    InvalidColor {
        /// Which settings field held the token.
        field: &'static str,
        /// The rejected token.
        token: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(err) => write!(f, "I/O error: {}", err),
            SettingsError::ParseError(msg) => write!(f, "settings parse error: {}", msg),
            SettingsError::InvalidColor { field, token } => {
                write!(f, "invalid color token for {}: {:?}", field, token)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_yaml::Error> for SettingsError {
    fn from(err: serde_yaml::Error) -> Self {
        SettingsError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = SettingsError::InvalidColor {
            field: "role_colors.pilot",
            token: "mauve-ish".into(),
        };
        let text = err.to_string();
        assert!(text.contains("role_colors.pilot"));
        assert!(text.contains("mauve-ish"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;
        let err: SettingsError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
    }
}
