mod chain_tracer;
mod framework_selector;
mod graph_builder;

pub use chain_tracer::{ChainTracer, DependencyChain};
pub use framework_selector::{FrameworkSelection, FrameworkSelector};
pub use graph_builder::GraphBuilder;
