use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("missing Notion {0}; paste the content into Notion manually or provide it")]
    MissingCredentials(&'static str),

    #[error("Notion API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, NotionError>;
