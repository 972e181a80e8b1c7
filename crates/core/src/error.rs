use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Two entries share the same name
    DuplicateName { name: String },
    /// Empty, absolute, or out-of-root path
    InvalidPath {
        field: String,
        path: String,
        reason: String,
    },
    InvalidName { name: String },
    ConfigParse(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateName { name } => {
                write!(f, "Duplicate entry name: '{}' is already registered", name)
            }
            Error::InvalidPath {
                field,
                path,
                reason,
            } => write!(f, "Invalid path in '{}': '{}' ({})", field, path, reason),
            Error::InvalidName { name } => write!(f, "Invalid entry name: '{}'", name),
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
