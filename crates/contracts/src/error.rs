use thiserror::Error as ThisError;

/// Failure taxonomy for every backend interaction.
///
/// `Transport` covers network unreachability and undecodable bodies,
/// `Status` any non-2xx response, `NotFound` an unknown id on a by-id
/// fetch, and `Validation` client-side rejection before any request is
/// sent. All four are recovered at the `ListViewModel` boundary and
/// turned into a displayable message.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),
}

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
