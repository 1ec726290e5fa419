use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextlabError {
    /// The find pattern (or its flags) is not a valid regular expression.
    #[error("Invalid pattern: {0}")]
    Pattern(String),

    /// Input is not valid Base64, or the decoded bytes are not UTF-8.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TextlabError>;
