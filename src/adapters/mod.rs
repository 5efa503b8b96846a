/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// filesystem access, console progress and output formats.
pub mod outbound;
