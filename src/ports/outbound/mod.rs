/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the console and output formats.
pub mod assets_reader;
pub mod graph_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use assets_reader::AssetsReader;
pub use graph_formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
