use crate::application::read_models::GraphReadModel;
use crate::shared::Result;

/// GraphFormatter port for rendering the dependency graph
///
/// This port abstracts the output syntax (JSON, Markdown, ...) so the use
/// case only produces a [`GraphReadModel`].
pub trait GraphFormatter {
    /// Formats the graph read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &GraphReadModel) -> Result<String>;
}
