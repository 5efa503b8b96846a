use std::cmp::Ordering;
use thiserror::Error;

/// Error returned when a version string is not
/// `major[.minor[.patch[.revision][suffix]]]`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid package version '{value}': {reason}")]
pub struct VersionParseError {
    pub value: String,
    pub reason: String,
}

/// Comparable package version
///
/// Up to four dotted components are numeric; a missing component is zero, so
/// `4.0.0.0` equals `4.0.0`. Anything after them (a `-beta.1` pre-release
/// tag, `+build` metadata) is kept verbatim as the suffix and compared as
/// text, except that a `-` pre-release suffix sorts before the release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    suffix: String,
}

impl PackageVersion {
    pub fn parse(value: &str) -> Result<Self, VersionParseError> {
        let invalid = |reason: &str| VersionParseError {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("version is empty"));
        }

        let mut parts = trimmed.splitn(3, '.');
        let major = parse_component(parts.next().unwrap_or_default())
            .ok_or_else(|| invalid("major component is not a number"))?;
        let minor = match parts.next() {
            Some(part) => {
                parse_component(part).ok_or_else(|| invalid("minor component is not a number"))?
            }
            None => 0,
        };

        let (patch, revision, suffix) = match parts.next() {
            Some(rest) => {
                let (patch, rest) = split_leading_digits(rest);
                let patch =
                    parse_component(patch).ok_or_else(|| invalid("patch component is not a number"))?;
                match rest.strip_prefix('.') {
                    Some(rest) => {
                        let (revision, rest) = split_leading_digits(rest);
                        let revision = parse_component(revision)
                            .ok_or_else(|| invalid("revision component is not a number"))?;
                        (patch, revision, rest.to_string())
                    }
                    None => (patch, 0, rest.to_string()),
                }
            }
            None => (0, 0, String::new()),
        };

        Ok(Self {
            major,
            minor,
            patch,
            revision,
            suffix,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_prerelease(&self) -> bool {
        self.suffix.starts_with('-')
    }
}

fn split_leading_digits(part: &str) -> (&str, &str) {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part.split_at(end)
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch, self.revision)
            .cmp(&(other.major, other.minor, other.patch, other.revision))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => self.suffix.cmp(&other.suffix),
            })
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.revision != 0 {
            write!(f, ".{}", self.revision)?;
        }
        f.write_str(&self.suffix)
    }
}
