use super::{PackageId, PackageNode, ROOT_PACKAGE_ID};
use indexmap::IndexMap;

/// Stable handle of a node inside a [`PackageGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

/// PackageGraph aggregate: canonical package id -> node
///
/// Nodes are stored arena-style in creation order and addressed through
/// [`NodeHandle`]s. A node is created on first reference and may be enriched
/// (resolved version, edges) in place afterwards.
#[derive(Debug, Clone)]
pub struct PackageGraph {
    root_id: PackageId,
    nodes: IndexMap<PackageId, PackageNode>,
}

impl PackageGraph {
    pub fn new(root_id: PackageId) -> Self {
        Self {
            root_id,
            nodes: IndexMap::new(),
        }
    }

    pub fn root_id(&self) -> &PackageId {
        &self.root_id
    }

    pub fn root(&self) -> Option<&PackageNode> {
        self.nodes.get(self.root_id.as_str())
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root_id.as_str() == id
    }

    /// Fetches the node for `name`, creating a placeholder on first encounter
    pub fn get_or_insert(&mut self, name: &str) -> NodeHandle {
        let id = PackageId::new(name);
        let entry = self.nodes.entry(id);
        let handle = NodeHandle(entry.index());
        entry.or_insert_with(|| PackageNode::new(name));
        handle
    }

    /// Fetches the root node, creating it with `display_name` on first call
    pub fn get_or_insert_root(&mut self, display_name: &str) -> NodeHandle {
        let entry = self.nodes.entry(self.root_id.clone());
        let handle = NodeHandle(entry.index());
        entry.or_insert_with(|| PackageNode::new(display_name));
        handle
    }

    pub fn node(&self, handle: NodeHandle) -> &PackageNode {
        &self.nodes[handle.0]
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> &mut PackageNode {
        // Handles are only minted by `get_or_insert` and nodes are never removed.
        &mut self.nodes[handle.0]
    }

    /// Looks a node up by name, case-insensitively
    pub fn get(&self, name: &str) -> Option<&PackageNode> {
        self.nodes.get(name.to_lowercase().as_str())
    }

    /// Key identifying a node in dependency chains: bare id for the root,
    /// `"<id>/<version>"` for every other node
    pub fn node_key(&self, id: &PackageId) -> String {
        match self.nodes.get(id.as_str()) {
            Some(node) if !self.is_root(id.as_str()) => format!("{}/{}", id, node.version()),
            _ => id.to_string(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &PackageNode)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes other than the root that never received a resolved version
    pub fn unresolved_packages(&self) -> impl Iterator<Item = (&PackageId, &PackageNode)> {
        self.nodes
            .iter()
            .filter(|(id, node)| !node.is_resolved() && !self.is_root(id.as_str()))
    }
}

impl Default for PackageGraph {
    fn default() -> Self {
        Self::new(PackageId::new(ROOT_PACKAGE_ID))
    }
}
