#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The forecast endpoint answered with a non-success status.
    /// The display text is shown to the user verbatim.
    #[error("communication error")]
    Communication,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed forecast document: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown area code: {0}")]
    UnknownArea(String),
}
