use crate::shared::Result;

/// OutputPresenter port for the final rendered graph
///
/// Implementations decide where the formatted graph ends up (stdout, a file).
pub trait OutputPresenter {
    /// Presents the formatted graph
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
