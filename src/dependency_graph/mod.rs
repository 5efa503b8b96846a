//! Domain layer: the snapshot model, the package graph and the pure services
//! that build and query it. Nothing in here performs I/O.
pub mod domain;
pub mod services;
