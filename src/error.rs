use miette::Diagnostic;
use thiserror::Error;

/// Main error type for huekit operations
#[derive(Error, Diagnostic, Debug)]
pub enum HueError {
    #[error("Invalid colour format: {message}")]
    #[diagnostic(code(huekit::format))]
    InvalidFormat {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported conversion: {message}")]
    #[diagnostic(code(huekit::conversion))]
    UnsupportedConversion { message: String },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(huekit::argument))]
    InvalidArgument { message: String },

    #[error("Unknown operation: {op}")]
    #[diagnostic(code(huekit::query))]
    UnknownOperation {
        op: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed query token: {token}")]
    #[diagnostic(code(huekit::query))]
    MalformedQuery {
        token: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, HueError>;
