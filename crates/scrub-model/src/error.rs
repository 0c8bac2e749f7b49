use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("missing required column `{0}`")]
    MissingColumn(String),
}
