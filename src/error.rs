use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("attempted to normalize a zero-length vector")]
    DegenerateVector,
    #[error("{kind} `{name}` references undefined {target} `{reference}`")]
    ConfigReference {
        kind: &'static str,
        name: String,
        target: &'static str,
        reference: String,
    },
    #[error("unsupported {category} type `{kind}` for `{name}`")]
    UnsupportedKind {
        category: &'static str,
        kind: String,
        name: String,
    },
    #[error("{category} `{name}` is defined more than once")]
    DuplicateName { category: &'static str, name: String },
    #[error("invalid parameter for `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("failed to parse scene description: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
