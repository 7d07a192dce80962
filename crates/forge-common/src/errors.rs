use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("capture error: {0}")]
    Capture(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("capture.width = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: capture.width = 0 is out of range"
        );
    }

    #[test]
    fn forge_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ForgeError = config_err.into();
        assert!(matches!(err, ForgeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn forge_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ForgeError = io_err.into();
        assert!(matches!(err, ForgeError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn forge_error_string_variants() {
        let err = ForgeError::Renderer("no adapter".into());
        assert_eq!(err.to_string(), "renderer error: no adapter");

        let err = ForgeError::Capture("not ready".into());
        assert_eq!(err.to_string(), "capture error: not ready");

        let err = ForgeError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
