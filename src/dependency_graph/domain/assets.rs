//! Resolved snapshot model (`project.assets.json`)
//!
//! Only the sections the graph needs are modelled; unknown fields are
//! ignored. All maps keep the snapshot's own ordering, which is significant
//! for edge order in the resulting graph.

use indexmap::IndexMap;
use serde::Deserialize;

/// Resolved entries of one target framework, keyed by `"<name>/<version>"`
pub type ResolvedPackages = IndexMap<String, ResolvedPackage>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssets {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub targets: IndexMap<String, ResolvedPackages>,
    #[serde(default)]
    pub project_file_dependency_groups: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub project: Option<ProjectSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub restore: Option<RestoreSection>,
    #[serde(default)]
    pub frameworks: IndexMap<String, FrameworkSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreSection {
    #[serde(default)]
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSection {
    #[serde(default)]
    pub target_alias: Option<String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, DeclaredDependency>,
}

/// Direct dependency as declared by the project
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclaredDependency {
    /// Raw interval range, absent for some project-to-project references
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    #[default]
    Package,
    Project,
    #[serde(other)]
    Other,
}

/// Entry of a target's resolved package listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolvedPackage {
    #[serde(rename = "type", default)]
    pub kind: PackageKind,
    /// Transitive dependencies: name -> raw range
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

impl ProjectAssets {
    /// Project name from the restore section, if any
    pub fn project_name(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|p| p.restore.as_ref())
            .and_then(|r| r.project_name.as_deref())
    }

    pub fn project_version(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.version.as_deref())
    }

    /// Target framework keys in snapshot order
    pub fn target_frameworks(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}
