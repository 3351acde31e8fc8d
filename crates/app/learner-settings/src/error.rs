use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse settings file")]
    ParseLenient(#[from] serde_json_lenient::Error),

    #[error("no platform config directory available")]
    MissingConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = Error::Read {
            path: PathBuf::from("/tmp/settings.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read settings from /tmp/settings.json"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
