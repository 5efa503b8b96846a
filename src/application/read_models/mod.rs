//! Read models for CQRS-lite pattern
//!
//! View-optimized, denormalized structs that formatters render without
//! touching the domain graph.

pub mod graph_read_model;
pub mod graph_read_model_builder;

pub use graph_read_model::{
    ChainsView, DirectDependencyView, GraphMetadataView, GraphReadModel, PackageView,
    ReferenceView, RootView,
};
pub use graph_read_model_builder::GraphReadModelBuilder;
