use thiserror::Error;

#[derive(Debug, Error)]
pub enum CursorAgentError {
    /// The external tool exited non-zero. `message` is the captured stderr,
    /// or stdout when stderr was empty, unmodified.
    #[error("{message}")]
    Process { message: String, code: Option<i32> },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("create-chat output contained no chat id: {output:?}")]
    MissingChatId { output: String },
}
