use thiserror::Error;

/// Errors returned by the Imghoard and leaderboards clients.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-success status.
    #[error("response was not successful; reason: \"{0}\"")]
    Response(String),

    /// Upload bytes did not match any supported image header.
    #[error("incorrect image format, currently supported formats are: png, jpeg, gif")]
    UnsupportedFormat,

    /// The operation needs a feature that is not enabled.
    #[error("{0}")]
    NotSupported(String),

    /// A required construction parameter was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request could not be sent or its body could not be decoded.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// Reading upload bytes failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
