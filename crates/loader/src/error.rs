use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid content root: {0}")]
    InvalidRoot(String),

    #[error("Unterminated front-matter block")]
    UnterminatedFrontMatter,

    #[error("Invalid front-matter YAML: {0}")]
    FrontMatterError(#[from] serde_yaml::Error),
}
