use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating the room graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The requested room does not exist in the graph.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(RoomId),
}
