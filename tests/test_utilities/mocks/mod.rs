/// Mock implementations for testing
mod mock_assets_reader;
mod mock_progress_reporter;

pub use mock_assets_reader::MockAssetsReader;
pub use mock_progress_reporter::MockProgressReporter;
