use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeKillerError {
    #[error("empty prompt")] EmptyPrompt,
    #[error("a generation is already in progress")] Busy,
    #[error("nothing has been generated yet")] NothingGenerated,
    #[error("unsafe file extension: {0:?}")] UnsafeExtension(String),
    #[error("config error: {0}")] Config(String),
}
