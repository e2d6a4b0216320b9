use thiserror::Error;

/// Fatal errors raised while bringing the engine up.
///
/// Runtime code wraps these in `anyhow::Error` with step context; callers that
/// need to branch on the kind can `downcast_ref::<EngineError>()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Window, surface, adapter or device could not be created.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// A shader module reported error-level compilation messages.
    #[error("shader `{label}` failed to compile:\n{log}")]
    ShaderCompile { label: String, log: String },
}
