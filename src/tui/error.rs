/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The request dispatcher stopped while the UI was still running.
    #[error("request dispatcher is no longer running")]
    DispatcherGone,
}
