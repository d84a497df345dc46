/// Errors that can occur while mutating a URL.
///
/// Parsing itself never fails: malformed input degrades to a best-effort
/// decomposition instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A query update received an extra argument that is not a query parser
    InvalidArgument,
    /// The name does not match any settable URL part
    UnknownPart,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidArgument => "Invalid argument: query parser override is not a parser",
            Self::UnknownPart => "Unknown URL part",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

/// Result type for URL mutation operations
pub type Result<T> = core::result::Result<T, Error>;
