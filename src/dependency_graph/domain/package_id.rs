use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// Sentinel id of the synthetic root node representing the project itself
pub const ROOT_PACKAGE_ID: &str = ".root";

/// Case-insensitive package identity
///
/// Pairs the canonical (lower-cased) identifier used for every graph lookup
/// with the original-case display name. Equality, ordering and hashing only
/// consider the canonical form, so `Newtonsoft.Json` and `newtonsoft.json`
/// are the same package.
#[derive(Debug, Clone)]
pub struct PackageId {
    canonical: String,
    display: String,
}

impl PackageId {
    pub fn new(name: &str) -> Self {
        Self {
            canonical: name.to_lowercase(),
            display: name.to_string(),
        }
    }

    /// Canonical lower-cased identifier
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Name as it was first spelled in the snapshot
    pub fn display_name(&self) -> &str {
        &self.display
    }
}

impl PartialEq for PackageId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for PackageId {}

impl Hash for PackageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly like `str` for the `Borrow<str>` lookups below.
        self.canonical.hash(state);
    }
}

impl Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.canonical
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// Splits a `"<name>/<version>"` key into its name and version parts
///
/// Keys without a separator yield the whole key as name and `None` as version.
pub fn split_package_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('/') {
        Some((name, version)) => (name, Some(version)),
        None => (key, None),
    }
}
