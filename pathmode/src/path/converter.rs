//! Host-to-container path conversion.

use std::fmt;

use serde::Serialize;

use super::anchor::ProjectAnchor;
use super::context::ConversionContext;
use super::syntax::{
    classify, has_parent_segment, is_under_root, join_onto, split_segments, HostPath, PathSyntax,
};
use crate::detect::ExecutionMode;

/// Which rewrite rule produced a [`ConvertedPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionRule {
    /// Host mode: the input passed through unchanged.
    Identity,
    /// Input was already under a container root.
    Canonical,
    /// Input was under the host workspace root.
    Workspace,
    /// Input contained a project anchor segment.
    Anchor,
    /// No root or anchor matched; only the file name was kept.
    BasenameFallback,
    /// Relative input joined onto the project root.
    Relative,
    /// Nothing usable in the input: `.` on the host, the project root in a container.
    EmptyFallback,
}

impl fmt::Display for ConversionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identity => "identity",
            Self::Canonical => "canonical",
            Self::Workspace => "workspace",
            Self::Anchor => "anchor",
            Self::BasenameFallback => "basename_fallback",
            Self::Relative => "relative",
            Self::EmptyFallback => "empty_fallback",
        };
        f.write_str(name)
    }
}

/// A conversion result with the classification and rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedPath {
    /// The converted path.
    pub path: String,
    /// How the input was classified.
    pub syntax: PathSyntax,
    /// Which rule produced `path`.
    pub rule: ConversionRule,
}

impl fmt::Display for ConvertedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Translates host-originated path strings into the active mode's namespace.
///
/// Conversion is purely lexical and never fails: every input yields a path.
/// In host mode it is the identity. In containerized mode rules are tried in
/// this order:
///
/// 1. Already canonical: returned unchanged.
/// 2. Under the host workspace root: re-homed under the container workspace.
/// 3. Contains a project anchor: the part after the anchor goes under the
///    container project root.
/// 4. Anything else absolute: the file name under the project root.
/// 5. Relative: joined onto the project root.
///
/// # Examples
///
/// ```
/// use pathmode::path::{ConversionContext, PathConverter, ProjectAnchor};
/// use pathmode::ExecutionMode;
///
/// let ctx = ConversionContext::new(ExecutionMode::Containerized, "/app/project", "/workspace");
/// let converter = PathConverter::new(ctx, ProjectAnchor::default());
///
/// assert_eq!(
///     converter.convert(r"C:\Users\G\zen-mcp-server\tools\chat.py"),
///     "/app/project/tools/chat.py"
/// );
/// assert_eq!(converter.convert("src/main.py"), "/app/project/src/main.py");
/// ```
#[derive(Debug, Clone)]
pub struct PathConverter {
    context: ConversionContext,
    anchor: ProjectAnchor,
    host_workspace: Option<HostPath>,
    debug: bool,
}

impl PathConverter {
    /// Creates a converter for a fixed context.
    #[must_use]
    pub fn new(context: ConversionContext, anchor: ProjectAnchor) -> Self {
        let host_workspace = context.host_workspace_root().and_then(parse_host_root);
        if context.host_workspace_root().is_some() && host_workspace.is_none() {
            log::warn!(
                "Host workspace root {:?} is not an absolute path; workspace mapping disabled",
                context.host_workspace_root().unwrap_or_default()
            );
        }
        Self {
            context,
            anchor,
            host_workspace,
            debug: false,
        }
    }

    /// Enables debug logging of basename fallbacks.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The context conversions run against.
    #[must_use]
    pub fn context(&self) -> &ConversionContext {
        &self.context
    }

    /// The anchor tokens in use.
    #[must_use]
    pub fn anchor(&self) -> &ProjectAnchor {
        &self.anchor
    }

    /// Classifies `input` against this converter's container roots.
    #[must_use]
    pub fn classify(&self, input: &str) -> PathSyntax {
        classify(input, &self.context.canonical_roots())
    }

    /// Converts `input` in the context's mode.
    #[must_use]
    pub fn convert(&self, input: &str) -> String {
        self.convert_detailed(input).path
    }

    /// Converts `input` in the context's mode, reporting how.
    #[must_use]
    pub fn convert_detailed(&self, input: &str) -> ConvertedPath {
        self.convert_for_mode(input, self.context.mode())
    }

    /// Converts `input` as if running in `mode`, keeping every other setting.
    #[must_use]
    pub fn convert_for_mode(&self, input: &str, mode: ExecutionMode) -> ConvertedPath {
        let syntax = self.classify(input);
        match mode {
            ExecutionMode::Host => Self::to_host(input, syntax),
            ExecutionMode::Containerized => self.to_container(input, syntax),
        }
    }

    fn to_host(input: &str, syntax: PathSyntax) -> ConvertedPath {
        if input.is_empty() {
            return ConvertedPath {
                path: ".".to_string(),
                syntax,
                rule: ConversionRule::EmptyFallback,
            };
        }
        ConvertedPath {
            path: input.to_string(),
            syntax,
            rule: ConversionRule::Identity,
        }
    }

    fn to_container(&self, input: &str, syntax: PathSyntax) -> ConvertedPath {
        let project_root = self.context.container_project_root();
        let (path, rule) = match syntax {
            _ if input.trim().is_empty() => {
                (project_root.to_string(), ConversionRule::EmptyFallback)
            }
            PathSyntax::AlreadyCanonical => {
                (self.resolve_canonical(input), ConversionRule::Canonical)
            }
            PathSyntax::Relative => {
                let segments = split_segments(input);
                if segments.is_empty() {
                    (project_root.to_string(), ConversionRule::EmptyFallback)
                } else {
                    (join_onto(project_root, &segments), ConversionRule::Relative)
                }
            }
            PathSyntax::WindowsAbsolute
            | PathSyntax::WindowsUnc
            | PathSyntax::PosixAbsolute
            | PathSyntax::WslMount => match HostPath::parse(input, syntax) {
                Some(host) => self.rehome(input, &host),
                None => (project_root.to_string(), ConversionRule::EmptyFallback),
            },
        };
        ConvertedPath { path, syntax, rule }
    }

    /// Canonical paths pass through unless `..` could climb out of their root.
    fn resolve_canonical(&self, input: &str) -> String {
        if !has_parent_segment(input) {
            return input.to_string();
        }
        let root = self
            .context
            .canonical_roots()
            .into_iter()
            .filter(|root| is_under_root(input, root))
            .max_by_key(|root| root.len())
            .unwrap_or(self.context.container_project_root());
        let rest = input.strip_prefix(root).unwrap_or_default();
        join_onto(root, &split_segments(rest))
    }

    fn rehome(&self, input: &str, host: &HostPath) -> (String, ConversionRule) {
        let project_root = self.context.container_project_root();

        if let Some(rest) = self
            .host_workspace
            .as_ref()
            .and_then(|root| host.strip_root(root))
        {
            let workspace = join_onto(self.context.container_workspace_root(), rest);
            return (workspace, ConversionRule::Workspace);
        }

        let segments = host.segments();
        if let Some(index) = self.anchor.find_in(segments) {
            return (
                join_onto(project_root, &segments[index + 1..]),
                ConversionRule::Anchor,
            );
        }

        match segments.last() {
            Some(name) => {
                let path = join_onto(project_root, std::slice::from_ref(name));
                if self.debug {
                    log::debug!("No workspace or anchor match for {input:?}; using basename -> {path}");
                }
                (path, ConversionRule::BasenameFallback)
            }
            None => (project_root.to_string(), ConversionRule::EmptyFallback),
        }
    }
}

fn parse_host_root(root: &str) -> Option<HostPath> {
    // The root is host-side, so container roots never make it canonical.
    let syntax = classify(root, &[]);
    HostPath::parse(root, syntax)
}
