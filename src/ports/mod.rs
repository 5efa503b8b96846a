/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the use case itself is the
/// application's inbound API.
pub mod outbound;
