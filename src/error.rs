use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("No content to parse: the input document is empty")]
    EmptyDocument,

    #[error("Node '{id}' not found in the component tree")]
    MissingNode { id: String },

    #[error("Node '{id}' references missing child '{child}'")]
    DanglingChild { id: String, child: String },

    #[error("Cycle detected in component tree at node '{id}'")]
    CycleDetected { id: String },

    #[error("Cannot remove the root node")]
    RootImmutable,

    #[error("Cannot move node '{id}': {reason}")]
    InvalidMove { id: String, reason: String },
}
