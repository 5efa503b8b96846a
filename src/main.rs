mod cli;

use cli::Args;
use nuget_graph::adapters::outbound::console::StderrProgressReporter;
use nuget_graph::adapters::outbound::filesystem::FileSystemReader;
use nuget_graph::application::dto::GraphRequest;
use nuget_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nuget_graph::application::read_models::GraphReadModelBuilder;
use nuget_graph::application::use_cases::BuildGraphUseCase;
use nuget_graph::config::{self, CliOverrides, ConfigFile};
use nuget_graph::ports::outbound::{GraphFormatter, OutputPresenter};
use nuget_graph::shared::error::{ExitCode, GraphError};
use nuget_graph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config_file = load_config(&args, &project_path)?;
    let merged = config::merge_config(
        CliOverrides {
            format: args.format,
            target_framework: args.target_framework,
            unresolved_label: args.unresolved_label,
            why: args.why,
        },
        config_file,
    )?;

    // Create adapters (Dependency Injection)
    let use_case = BuildGraphUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let request = GraphRequest::builder()
        .project_path(project_path)
        .target_framework(merged.target_framework)
        .root_id(merged.root_id)
        .why(merged.why)
        .build()?;

    let response = use_case.execute(request)?;
    let model = GraphReadModelBuilder::build(&response, &merged.unresolved_label);

    eprintln!("{}", FormatterFactory::progress_message(merged.format));
    let formatter: Box<dyn GraphFormatter> = FormatterFactory::create(merged.format);
    let formatted_output = formatter.format(&model)?;

    let presenter: Box<dyn OutputPresenter> =
        PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or auto-discovers one next to the project
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(config_path) = &args.config {
        eprintln!("⚙️  Using config file: {}", config_path.display());
        return config::load_config_from_path(config_path).map(Some);
    }

    let project_dir = if project_path.is_dir() {
        project_path
    } else {
        project_path.parent().unwrap_or(Path::new("."))
    };
    let project_dir = if project_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        project_dir
    };

    let discovered = config::discover_config(project_dir)?;
    if discovered.is_some() {
        eprintln!(
            "⚙️  Auto-discovered config file: {}",
            project_dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

fn validate_project_path(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Path does not exist or cannot be read: {}", e),
    })?;

    // Security check: Reject symbolic links for project paths
    if metadata.is_symlink() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() && !metadata.is_file() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Neither a directory nor a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
