/// Data Transfer Objects crossing the use case boundary
///
/// Requests come in from the CLI, responses go out to the read model
/// builder; neither leaks adapter types into the domain.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::{GraphRequest, GraphRequestBuilder};
pub use graph_response::{GraphMetadata, GraphResponse};
pub use output_format::OutputFormat;
