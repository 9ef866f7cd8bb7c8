use bump_scan::ScanError;

/// Why a configuration line could not be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LineError {
    /// The line does not match the grammar.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The grammar matched but did not capture a required token.
    #[error("missing {0}")]
    MissingCapture(&'static str),
}
