#[derive(Debug, thiserror::Error)]
pub enum MoodBoardError {
    #[error("not an allowed image url: {0:?}")]
    InvalidImageUrl(String),

    #[error("text is empty")]
    BlankText,

    #[error("a placement is already in progress")]
    PlacementInProgress,

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("failed to encode layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MoodBoardError>;
