//! Project anchor tokens.

use serde::Serialize;

/// Directory names that mark where a project begins inside a host path.
///
/// When a host path contains an anchor segment, everything after the first
/// such segment (scanning from the root) is re-homed under the container
/// project root. Matching is whole-segment and ASCII case-insensitive.
///
/// # Examples
///
/// ```
/// use pathmode::path::ProjectAnchor;
///
/// let anchor = ProjectAnchor::default();
/// let segments: Vec<String> = ["Users", "G", "Zen-MCP-Server", "tools", "a.py"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(anchor.find_in(&segments), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectAnchor {
    tokens: Vec<String>,
}

impl ProjectAnchor {
    /// Tokens used when none are configured.
    pub const DEFAULT_TOKENS: [&'static str; 3] = ["zen-mcp-server", "mcp-server", "project"];

    /// Creates an anchor set, dropping blank and duplicate tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() || unique.iter().any(|t| t.eq_ignore_ascii_case(token)) {
                continue;
            }
            unique.push(token.to_string());
        }
        Self { tokens: unique }
    }

    /// The configured tokens, in priority-free order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `segment` equals any token.
    #[must_use]
    pub fn matches(&self, segment: &str) -> bool {
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(segment))
    }

    /// Index of the first anchor segment, scanning from the root.
    #[must_use]
    pub fn find_in(&self, segments: &[String]) -> Option<usize> {
        segments.iter().position(|segment| self.matches(segment))
    }
}

impl Default for ProjectAnchor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKENS)
    }
}
