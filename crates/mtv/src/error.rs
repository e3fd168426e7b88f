use thiserror::Error;

pub type Result<T> = std::result::Result<T, MtvError>;

#[derive(Debug, Error)]
pub enum MtvError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unsuccessful response ({status}): {body}")]
    UnsuccessfulStatus { status: u16, body: String },

    #[error("failed to parse url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url cannot take a path: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to parse xml: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("malformed feed: {0}")]
    MalformedFeed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("artist has no uid")]
    MissingUid,

    #[error("failed to load config: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for MtvError {
    fn from(value: figment::Error) -> Self {
        Self::Config(Box::new(value))
    }
}
