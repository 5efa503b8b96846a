/// Result alias used by the application and adapter layers.
///
/// Typed failures (`GraphError`, `RangeError`) are wrapped in
/// `anyhow::Error` and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
