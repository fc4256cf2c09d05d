use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{kind} : {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize,
)]
pub enum ErrorKind {
    /// api error
    #[error("Not Found")]
    NotFound,
    #[error("Rate limited")]
    RateLimit,
    #[error("Invalid Argument")]
    InvalidArgument,
    #[error("Invalid State")]
    InvalidState,

    /// runtime error
    #[error("Network Error")]
    Network,
    #[error("Browser Error")]
    Browser,
    #[error("Internal Error")]
    Internal,
    #[error("Cannot read response, please check API version")]
    InvalidResponse,

    /// User error
    #[error("Malformed Url")]
    MalformedUrl,
}

impl ErrorKind {
    /// Map the `reason` field of the backend error envelope.
    pub fn from_reason(reason: &str) -> Option<Self> {
        Some(match reason {
            "ERR_NOT_FOUND" => ErrorKind::NotFound,
            "ERR_RATE_LIMIT" => ErrorKind::RateLimit,
            "ERR_INVALID_ARGUMENT" => ErrorKind::InvalidArgument,
            "ERR_INVALID_STATE" => ErrorKind::InvalidState,
            "ERR_EXTERNAL" | "ERR_INTERNAL" => ErrorKind::Internal,
            _ => return None,
        })
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimit,
            400..=499 => ErrorKind::InvalidArgument,
            _ => ErrorKind::Internal,
        }
    }

    /// Asking again will give the same answer.
    pub fn is_permanent(self) -> bool {
        matches!(
            self,
            ErrorKind::NotFound | ErrorKind::InvalidArgument | ErrorKind::MalformedUrl
        )
    }
}

impl From<gloo::net::Error> for Error {
    fn from(value: gloo::net::Error) -> Self {
        Self {
            kind: ErrorKind::Network,
            context: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidResponse,
            context: value.to_string(),
        }
    }
}

impl From<serde_qs::Error> for Error {
    fn from(value: serde_qs::Error) -> Self {
        Self {
            kind: ErrorKind::MalformedUrl,
            context: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self {
            kind: ErrorKind::Internal,
            context: value.to_string(),
        }
    }
}

pub trait Context {
    type Output;
    fn context(self, c: impl AsRef<str>) -> Self::Output;
}

impl<E> Context for E
where
    E: Into<Error>,
{
    type Output = Error;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        let mut err: Error = self.into();
        err.context.push_str("\n  >");
        err.context.push_str(c.as_ref());
        err
    }
}

impl<T, E> Context for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Result<T>;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        self.map_err(|err| err.context(c))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reason_maps_to_kind() {
        assert_eq!(
            ErrorKind::from_reason("ERR_NOT_FOUND"),
            Some(ErrorKind::NotFound)
        );
        assert_eq!(
            ErrorKind::from_reason("ERR_EXTERNAL"),
            Some(ErrorKind::Internal)
        );
        assert_eq!(ErrorKind::from_reason("ERR_SOMETHING_NEW"), None);
    }

    #[test]
    fn context_appends_line() {
        let err: Result<()> =
            Err(Error::new(ErrorKind::Network, "connection reset"));
        let err = err.context("fetching /jobs/1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.context, "connection reset\n  >fetching /jobs/1");
    }

    #[test]
    fn permanent_kinds() {
        assert!(ErrorKind::NotFound.is_permanent());
        assert!(ErrorKind::InvalidArgument.is_permanent());
        assert!(!ErrorKind::Network.is_permanent());
        assert!(!ErrorKind::RateLimit.is_permanent());
        assert!(!ErrorKind::Internal.is_permanent());
    }
}
