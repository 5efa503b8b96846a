use crate::dependency_graph::domain::{FrameworkSection, ProjectAssets, ResolvedPackages};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// The slices of a snapshot that belong to one target framework
#[derive(Debug, Clone, Copy)]
pub struct FrameworkSelection<'a> {
    /// Key of the selected entry in `targets`
    pub target_key: &'a str,
    pub target: &'a ResolvedPackages,
    /// Key of the selected entry in `project.frameworks`
    pub framework_key: &'a str,
    pub framework: &'a FrameworkSection,
    /// Matching `projectFileDependencyGroups` entry, if any
    pub dependency_group: Option<&'a [String]>,
}

/// Picks the target framework a graph is built for
///
/// Matching is by name only: no moniker parsing or compatibility rules.
/// Without a requested framework the first target without a runtime
/// identifier suffix wins.
pub struct FrameworkSelector;

impl FrameworkSelector {
    pub fn select<'a>(
        assets: &'a ProjectAssets,
        requested: Option<&str>,
    ) -> Result<FrameworkSelection<'a>> {
        let project = assets
            .project
            .as_ref()
            .ok_or_else(|| missing("'project'"))?;
        if project.frameworks.is_empty() {
            return Err(missing("'project.frameworks'").into());
        }
        if assets.targets.is_empty() {
            return Err(missing("'targets'").into());
        }

        let framework_position = |name: &str| {
            project.frameworks.iter().position(|(key, section)| {
                key.eq_ignore_ascii_case(name)
                    || section
                        .target_alias
                        .as_deref()
                        .is_some_and(|alias| alias.eq_ignore_ascii_case(name))
            })
        };

        let target_index = match requested {
            Some(name) => assets
                .targets
                .keys()
                .position(|key| key.eq_ignore_ascii_case(name))
                .or_else(|| framework_position(name).filter(|&i| i < assets.targets.len()))
                .ok_or_else(|| GraphError::TargetFrameworkNotFound {
                    requested: name.to_string(),
                    available: assets
                        .target_frameworks()
                        .collect::<Vec<_>>()
                        .join(", "),
                })?,
            None => assets
                .targets
                .keys()
                .position(|key| !key.contains('/'))
                .unwrap_or(0),
        };

        let (target_key, target) = assets
            .targets
            .get_index(target_index)
            .ok_or_else(|| missing("'targets'"))?;

        let base_key = target_key.split('/').next().unwrap_or(target_key);
        // Old-style target keys (".NETStandard,Version=v2.0") never match a
        // framework key, so fall back to the target's position among the
        // runtime-independent targets.
        let base_position = assets
            .targets
            .keys()
            .filter(|key| !key.contains('/'))
            .position(|key| key.eq_ignore_ascii_case(base_key));
        let framework_index = framework_position(base_key)
            .or_else(|| requested.and_then(framework_position))
            .or_else(|| base_position.filter(|&i| i < project.frameworks.len()))
            .unwrap_or(0);
        let (framework_key, framework) = project
            .frameworks
            .get_index(framework_index)
            .ok_or_else(|| missing("'project.frameworks'"))?;

        let groups = &assets.project_file_dependency_groups;
        let dependency_group = groups
            .get(target_key.as_str())
            .or_else(|| groups.get(base_key))
            .map(Vec::as_slice);

        Ok(FrameworkSelection {
            target_key,
            target,
            framework_key,
            framework,
            dependency_group,
        })
    }
}

fn missing(section: &str) -> GraphError {
    GraphError::MissingStructure {
        section: section.to_string(),
    }
}
