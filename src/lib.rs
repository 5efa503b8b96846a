//! nuget-graph - dependency graph tool for NuGet restore snapshots
//!
//! This library turns a `project.assets.json` lock file into an in-memory
//! package graph with forward ("depends on") and reverse ("referenced by")
//! edges, and answers "why is this package in my project?" by tracing
//! reference chains back to the project root. It follows a hexagonal
//! architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_graph`): graph model, version ranges and
//!   the pure builder/tracer services
//! - **Application Layer** (`application`): use case, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and output formats
//! - **Shared** (`shared`): error types, security checks, result alias
//!
//! # Example
//!
//! ```no_run
//! use nuget_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = GraphRequest::builder()
//!     .project_path("src/App")
//!     .why(vec!["Newtonsoft.Json/13.0.1".to_string()])
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let model = GraphReadModelBuilder::build(&response, PLACEHOLDER_VERSION);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::read_models::{GraphReadModel, GraphReadModelBuilder};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::dependency_graph::domain::{
        normalize_version_range, PackageGraph, PackageId, PackageNode, PackageReference,
        PackageVersion, ProjectAssets, VersionRange, PLACEHOLDER_VERSION, ROOT_PACKAGE_ID,
    };
    pub use crate::dependency_graph::services::{ChainTracer, DependencyChain, GraphBuilder};
    pub use crate::ports::outbound::{
        AssetsReader, GraphFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
