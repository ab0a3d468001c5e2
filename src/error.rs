use crate::handle::HandleId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    #[error("can't center on {0}: not part of this carousel")]
    HandleNotFound(HandleId),
    #[error("slot {index} is out of range for {count} handles")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("carousel has not been initialized")]
    NotInitialized,
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
}
