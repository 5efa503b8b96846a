use crate::application::dto::{GraphMetadata, GraphRequest, GraphResponse};
use crate::dependency_graph::domain::{PackageGraph, ProjectAssets};
use crate::dependency_graph::services::{
    ChainTracer, DependencyChain, FrameworkSelector, GraphBuilder,
};
use crate::ports::outbound::{AssetsReader, ProgressReporter};
use crate::shared::Result;
use indexmap::IndexMap;

/// BuildGraphUseCase - Core use case turning a restore snapshot into a graph
///
/// Reads and parses `project.assets.json`, builds the package graph for one
/// target framework and traces the requested packages back to the root.
///
/// # Type Parameters
/// * `AR` - AssetsReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<AR, PR> {
    assets_reader: AR,
    progress_reporter: PR,
}

impl<AR, PR> BuildGraphUseCase<AR, PR>
where
    AR: AssetsReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(assets_reader: AR, progress_reporter: PR) -> Self {
        Self {
            assets_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails when the snapshot cannot be read or parsed, lacks required
    /// sections, does not contain the requested framework, or when a
    /// requested package is unknown or sits on a reference cycle.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Read and parse the snapshot
        let assets = self.read_and_report_assets(&request)?;

        // Step 2: Build the graph for the selected framework
        let (graph, target_framework) = self.build_graph(&assets, &request)?;

        // Step 3: Surface packages that never resolved
        self.warn_unresolved(&graph);

        // Step 4: Trace requested packages
        let chains = self.trace_chains(&graph, &request)?;

        Ok(GraphResponse::new(
            graph,
            target_framework,
            chains,
            GraphMetadata::current(),
        ))
    }

    fn read_and_report_assets(&self, request: &GraphRequest) -> Result<ProjectAssets> {
        self.progress_reporter.report(&format!(
            "📖 Loading project.assets.json from: {}",
            request.project_path.display()
        ));

        let assets = self
            .assets_reader
            .read_and_parse_assets(&request.project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} target(s)", assets.targets.len()));

        Ok(assets)
    }

    fn build_graph(
        &self,
        assets: &ProjectAssets,
        request: &GraphRequest,
    ) -> Result<(PackageGraph, String)> {
        let selection = FrameworkSelector::select(assets, request.target_framework.as_deref())?;
        let target_framework = selection.target_key.to_string();
        self.progress_reporter
            .report(&format!("🎯 Target framework: {}", target_framework));

        let root_name = assets.project_name().unwrap_or("project");
        let graph =
            GraphBuilder::build_for_selection(&request.root_id, root_name, assets, &selection);

        let direct_count = graph.root().map_or(0, |root| root.dependencies().len());
        self.progress_reporter.report("📊 Dependency graph built:");
        self.progress_reporter
            .report(&format!("   - Packages: {}", graph.len().saturating_sub(1)));
        self.progress_reporter
            .report(&format!("   - Direct dependencies: {}", direct_count));

        Ok((graph, target_framework))
    }

    fn warn_unresolved(&self, graph: &PackageGraph) {
        for (_, node) in graph.unresolved_packages() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' is referenced but has no resolved entry in the snapshot.",
                node.name()
            ));
        }
    }

    fn trace_chains(
        &self,
        graph: &PackageGraph,
        request: &GraphRequest,
    ) -> Result<IndexMap<String, Vec<DependencyChain>>> {
        let mut chains = IndexMap::new();
        if !request.includes_chains() {
            return Ok(chains);
        }

        self.progress_reporter.report("🔍 Tracing dependency chains...");
        let total = request.why.len();
        for (index, key) in request.why.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(key.as_str()));
            chains.insert(key.clone(), ChainTracer::trace(graph, key)?);
        }

        let chain_count: usize = chains.values().map(Vec::len).sum();
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} chain(s) for {} package(s)",
            chain_count, total
        ));

        Ok(chains)
    }
}
