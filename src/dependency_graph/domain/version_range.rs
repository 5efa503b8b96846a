use super::package_version::{PackageVersion, VersionParseError};
use thiserror::Error;

/// Rejection reasons of [`VersionRange::parse_strict`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Version range '{raw}' has unbalanced or misplaced brackets")]
    UnbalancedBrackets { raw: String },

    #[error("Version range '{raw}' has more than two bounds")]
    TooManyBounds { raw: String },

    #[error("Version range '{raw}' has an invalid bound")]
    InvalidBound {
        raw: String,
        #[source]
        source: VersionParseError,
    },
}

/// One side of an interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub version: String,
    pub inclusive: bool,
}

impl Bound {
    fn new(version: &str, inclusive: bool) -> Self {
        Self {
            version: version.to_string(),
            inclusive,
        }
    }
}

/// Version range in interval bracket notation, e.g. `[1.0, 2.0)`
///
/// `parse` is total: malformed tokens are sliced best-effort instead of
/// rejected. `Display` renders the canonical clause form (`>= 1.0, < 2.0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    Exact(String),
    Interval {
        lower: Option<Bound>,
        upper: Option<Bound>,
    },
}

impl VersionRange {
    pub fn parse(raw: &str) -> Self {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        let (lower, upper) = match stripped.split_once(',') {
            Some((lower, upper)) => (lower, Some(upper)),
            None => (stripped.as_str(), None),
        };

        if upper.is_none() && lower.starts_with('[') && lower.ends_with(']') && lower.len() >= 2 {
            return VersionRange::Exact(lower[1..lower.len() - 1].to_string());
        }

        let lower = if lower.chars().count() > 1 {
            Some(match lower.as_bytes()[0] {
                b'(' => Bound::new(&lower[1..], false),
                b'[' => Bound::new(&lower[1..], true),
                _ => Bound::new(lower, true),
            })
        } else {
            None
        };

        let upper = upper.filter(|u| u.chars().count() > 1).map(|upper| {
            match upper.as_bytes()[upper.len() - 1] {
                b')' => Bound::new(&upper[..upper.len() - 1], false),
                b']' => Bound::new(&upper[..upper.len() - 1], true),
                _ => Bound::new(upper, true),
            }
        });

        VersionRange::Interval { lower, upper }
    }

    /// Like [`VersionRange::parse`] but rejects tokens the permissive parser
    /// would only slice best-effort.
    ///
    /// ```
    /// use nuget_graph::prelude::VersionRange;
    ///
    /// assert!(VersionRange::parse_strict("[1.0,2.0)").is_ok());
    /// assert!(VersionRange::parse_strict("1.0,2.0").is_err());
    /// ```
    pub fn parse_strict(raw: &str) -> Result<Self, RangeError> {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let is_bracket = |c: char| matches!(c, '[' | ']' | '(' | ')');
        let unbalanced = || RangeError::UnbalancedBrackets {
            raw: raw.to_string(),
        };

        if stripped.matches(',').count() > 1 {
            return Err(RangeError::TooManyBounds {
                raw: raw.to_string(),
            });
        }

        match stripped.split_once(',') {
            Some((lower, upper)) => {
                if !(lower.starts_with('[') || lower.starts_with('('))
                    || !(upper.ends_with(']') || upper.ends_with(')'))
                {
                    return Err(unbalanced());
                }
                if lower[1..].contains(is_bracket) || upper[..upper.len() - 1].contains(is_bracket)
                {
                    return Err(unbalanced());
                }
            }
            None => {
                let exact = stripped.starts_with('[') && stripped.ends_with(']');
                let inner = if exact {
                    &stripped[1..stripped.len().saturating_sub(1).max(1)]
                } else {
                    stripped.as_str()
                };
                if inner.contains(is_bracket) {
                    return Err(unbalanced());
                }
            }
        }

        let range = Self::parse(raw);
        for version in range.bound_versions() {
            PackageVersion::parse(version).map_err(|source| RangeError::InvalidBound {
                raw: raw.to_string(),
                source,
            })?;
        }
        Ok(range)
    }

    /// Parses the canonical clause form produced by `Display`
    /// (`">= 1.0, < 2.0"`, `"= 1.2.3"`, `""`)
    ///
    /// Returns `None` for anything else, including clauses out of order.
    pub fn parse_canonical(canonical: &str) -> Option<Self> {
        let canonical = canonical.trim();
        if let Some(exact) = canonical.strip_prefix("= ") {
            return Some(VersionRange::Exact(exact.trim().to_string()));
        }

        let mut lower = None;
        let mut upper = None;
        for clause in canonical.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let (op, version) = clause.split_once(' ')?;
            let version = version.trim();
            match op {
                ">=" | ">" if lower.is_none() && upper.is_none() => {
                    lower = Some(Bound::new(version, op == ">="));
                }
                "<=" | "<" if upper.is_none() => {
                    upper = Some(Bound::new(version, op == "<="));
                }
                _ => return None,
            }
        }
        Some(VersionRange::Interval { lower, upper })
    }

    fn bound_versions(&self) -> Vec<&str> {
        match self {
            VersionRange::Exact(version) => vec![version.as_str()],
            VersionRange::Interval { lower, upper } => lower
                .iter()
                .chain(upper.iter())
                .map(|bound| bound.version.as_str())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            VersionRange::Interval {
                lower: None,
                upper: None
            }
        )
    }

    /// Whether `version` satisfies this range
    ///
    /// Returns `None` when a bound is not a parseable version.
    pub fn allows(&self, version: &PackageVersion) -> Option<bool> {
        match self {
            VersionRange::Exact(exact) => {
                let exact = PackageVersion::parse(exact).ok()?;
                Some(*version == exact)
            }
            VersionRange::Interval { lower, upper } => {
                if let Some(bound) = lower {
                    let min = PackageVersion::parse(&bound.version).ok()?;
                    if version < &min || (!bound.inclusive && version == &min) {
                        return Some(false);
                    }
                }
                if let Some(bound) = upper {
                    let max = PackageVersion::parse(&bound.version).ok()?;
                    if version > &max || (!bound.inclusive && version == &max) {
                        return Some(false);
                    }
                }
                Some(true)
            }
        }
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionRange::Exact(version) => write!(f, "= {}", version),
            VersionRange::Interval { lower, upper } => {
                let mut clauses = Vec::with_capacity(2);
                if let Some(bound) = lower {
                    let op = if bound.inclusive { ">=" } else { ">" };
                    clauses.push(format!("{} {}", op, bound.version));
                }
                if let Some(bound) = upper {
                    let op = if bound.inclusive { "<=" } else { "<" };
                    clauses.push(format!("{} {}", op, bound.version));
                }
                write!(f, "{}", clauses.join(", "))
            }
        }
    }
}

/// Converts a raw interval range into its canonical clause form
///
/// Never fails; unparseable input degrades to partial or empty output.
pub fn normalize_version_range(raw: &str) -> String {
    VersionRange::parse(raw).to_string()
}
