/// Application layer - use case, DTOs, read models and factories
///
/// Orchestrates the dependency_graph services and talks to infrastructure
/// only through the outbound ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
