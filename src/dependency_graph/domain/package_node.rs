use super::PackageId;

/// Version a node carries until its resolved entry has been seen
pub const PLACEHOLDER_VERSION: &str = "0.0.0";

/// Edge descriptor: the package on the other end and the normalized range
/// declared by the edge's source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub id: PackageId,
    pub version_range: String,
}

impl PackageReference {
    pub fn new(id: PackageId, version_range: impl Into<String>) -> Self {
        Self {
            id,
            version_range: version_range.into(),
        }
    }
}

/// One node per distinct package identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    name: String,
    version: String,
    resolved: bool,
    dependencies: Vec<PackageReference>,
    references: Vec<PackageReference>,
}

impl PackageNode {
    /// Creates an unresolved node carrying the placeholder version
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: PLACEHOLDER_VERSION.to_string(),
            resolved: false,
            dependencies: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the version came from a resolved entry rather than the placeholder
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Outgoing "depends-on" edges, in declaration order
    pub fn dependencies(&self) -> &[PackageReference] {
        &self.dependencies
    }

    /// Incoming "referenced-by" edges, in declaration order
    pub fn references(&self) -> &[PackageReference] {
        &self.references
    }

    pub fn depends_on(&self, id: &str) -> Option<&PackageReference> {
        self.dependencies.iter().find(|d| d.id.as_str() == id)
    }

    pub(crate) fn set_resolved_version(&mut self, version: &str) {
        self.version = version.to_string();
        self.resolved = true;
    }

    pub(crate) fn push_dependency(&mut self, reference: PackageReference) {
        self.dependencies.push(reference);
    }

    pub(crate) fn push_reference(&mut self, reference: PackageReference) {
        self.references.push(reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_placeholder() {
        let node = PackageNode::new("Serilog");

        assert_eq!(node.name(), "Serilog");
        assert_eq!(node.version(), PLACEHOLDER_VERSION);
        assert!(!node.is_resolved());
        assert!(node.dependencies().is_empty());
        assert!(node.references().is_empty());
    }

    #[test]
    fn test_set_resolved_version_overrides_placeholder() {
        let mut node = PackageNode::new("Serilog");
        node.set_resolved_version("3.1.1");

        assert_eq!(node.version(), "3.1.1");
        assert!(node.is_resolved());
    }

    #[test]
    fn test_depends_on_uses_canonical_id() {
        let mut node = PackageNode::new("App");
        node.push_dependency(PackageReference::new(PackageId::new("Polly"), ">= 7.0"));

        assert!(node.depends_on("polly").is_some());
        assert!(node.depends_on("Polly").is_none());
        assert!(node.depends_on("serilog").is_none());
    }
}
