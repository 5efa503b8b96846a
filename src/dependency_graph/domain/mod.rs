pub mod assets;
pub mod package_graph;
pub mod package_id;
pub mod package_node;
pub mod package_version;
pub mod version_range;

pub use assets::{
    DeclaredDependency, FrameworkSection, PackageKind, ProjectAssets, ProjectSection,
    ResolvedPackage, ResolvedPackages, RestoreSection,
};
pub use package_graph::{NodeHandle, PackageGraph};
pub use package_id::{split_package_key, PackageId, ROOT_PACKAGE_ID};
pub use package_node::{PackageNode, PackageReference, PLACEHOLDER_VERSION};
pub use package_version::{PackageVersion, VersionParseError};
pub use version_range::{normalize_version_range, Bound, RangeError, VersionRange};
