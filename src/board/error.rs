use thiserror::Error;

use super::alliance::Alliance;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("{alliance} king could not be established, found {count} kings")]
    KingNotEstablished { alliance: Alliance, count: usize },
    #[error("Cannot execute the null move")]
    NullMoveExecution,
    #[error("Invalid board diagram: {msg}")]
    InvalidDiagram { msg: String },
}
