// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Session(SessionError),
}

/// Reasons a viewing session cannot be opened.
///
/// Once a session is running nothing inside it fails: invalid calls are
/// ignored and media errors are surfaced as playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The story sequence handed to the viewer is empty.
    EmptyStories,

    /// The caller-supplied starting index does not address a story.
    StartIndexOutOfRange { index: usize, len: usize },

    /// The coordinator already has a viewer open.
    ViewerAlreadyOpen,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyStories => write!(f, "No stories to view"),
            SessionError::StartIndexOutOfRange { index, len } => {
                write!(f, "Start index {} out of range for {} stories", index, len)
            }
            SessionError::ViewerAlreadyOpen => write!(f, "A viewer is already open"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Error::Session(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn session_error_display_includes_bounds() {
        let err: Error = SessionError::StartIndexOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(
            format!("{}", err),
            "Session Error: Start index 7 out of range for 3 stories"
        );
    }

    #[test]
    fn empty_stories_display() {
        assert_eq!(SessionError::EmptyStories.to_string(), "No stories to view");
    }
}
