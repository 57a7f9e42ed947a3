//! Error types shared by both command-line tools.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // User input errors
    #[error("{0}")]
    Input(String),

    // Remote data errors
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request to {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // IO errors
    #[error("{0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Input(_) => exit_codes::USAGE_ERROR,
            Error::Http(_) | Error::HttpStatus { .. } => exit_codes::NETWORK_ERROR,
            Error::InvalidResponse(_) | Error::Json(_) => exit_codes::DATA_ERROR,
            Error::Io(_) => exit_codes::IO_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DATA_ERROR: i32 = 4;
    pub const IO_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), exit_codes::IO_ERROR);

        let status = Error::HttpStatus {
            url: "https://example.com".into(),
            status: 404,
        };
        assert_eq!(status.exit_code(), exit_codes::NETWORK_ERROR);

        assert_eq!(
            Error::InvalidResponse("no message".into()).exit_code(),
            exit_codes::DATA_ERROR
        );
        assert_eq!(
            Error::Config("bad".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
    }

    #[test]
    fn test_no_error_maps_to_success() {
        let errors = [
            Error::Input("missing filename".into()),
            Error::Config("bad".into()),
            Error::InvalidResponse("no message".into()),
            Error::HttpStatus {
                url: "https://example.com".into(),
                status: 500,
            },
            Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), exit_codes::SUCCESS, "{}", err);
        }
    }

    #[test]
    fn test_io_error_message_is_passed_through() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert_eq!(err.to_string(), "No such file or directory");
    }
}
