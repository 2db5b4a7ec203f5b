//! Lexical classification of path strings.
//!
//! Nothing in this module touches the filesystem: a path's syntax is decided
//! from its characters alone. Both `\` and `/` are accepted as separators
//! regardless of the platform the process runs on.

use std::fmt;

use serde::Serialize;

/// The syntax family of an input path string.
///
/// # Examples
///
/// ```
/// use pathmode::path::{classify, PathSyntax};
///
/// let roots = ["/app/project", "/workspace"];
/// assert_eq!(classify(r"C:\Users\G\x.py", &roots), PathSyntax::WindowsAbsolute);
/// assert_eq!(classify(r"\\server\share\x", &roots), PathSyntax::WindowsUnc);
/// assert_eq!(classify("/mnt/c/Users/G", &roots), PathSyntax::WslMount);
/// assert_eq!(classify("/home/g/x.py", &roots), PathSyntax::PosixAbsolute);
/// assert_eq!(classify("/app/project/x.py", &roots), PathSyntax::AlreadyCanonical);
/// assert_eq!(classify("src/main.py", &roots), PathSyntax::Relative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSyntax {
    /// `C:\...` or `C:/...`.
    WindowsAbsolute,
    /// `\\server\share\...`.
    WindowsUnc,
    /// `/...` outside the container's own roots.
    PosixAbsolute,
    /// `/mnt/<drive>/...` as seen from WSL.
    WslMount,
    /// No recognized absolute prefix.
    Relative,
    /// Already rooted at a container mount point.
    AlreadyCanonical,
}

impl PathSyntax {
    /// Returns true for the classes that carry a host-side absolute path.
    #[must_use]
    pub const fn is_host_absolute(self) -> bool {
        matches!(
            self,
            Self::WindowsAbsolute | Self::WindowsUnc | Self::PosixAbsolute | Self::WslMount
        )
    }
}

impl fmt::Display for PathSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WindowsAbsolute => "windows_absolute",
            Self::WindowsUnc => "windows_unc",
            Self::PosixAbsolute => "posix_absolute",
            Self::WslMount => "wsl_mount",
            Self::Relative => "relative",
            Self::AlreadyCanonical => "already_canonical",
        };
        f.write_str(name)
    }
}

/// Classifies `input` given the container's canonical roots.
///
/// Canonical roots are compared at a segment boundary, so `/app/projects`
/// is not under `/app/project`.
#[must_use]
pub fn classify(input: &str, canonical_roots: &[&str]) -> PathSyntax {
    if has_drive_prefix(input) {
        PathSyntax::WindowsAbsolute
    } else if input.starts_with(r"\\") {
        PathSyntax::WindowsUnc
    } else if canonical_roots.iter().any(|root| is_under_root(input, root)) {
        PathSyntax::AlreadyCanonical
    } else if wsl_drive(input).is_some() {
        PathSyntax::WslMount
    } else if input.starts_with('/') {
        PathSyntax::PosixAbsolute
    } else {
        PathSyntax::Relative
    }
}

/// `<letter>:` followed by either separator.
fn has_drive_prefix(input: &str) -> bool {
    matches!(
        input.as_bytes(),
        [letter, b':', b'\\' | b'/', ..] if letter.is_ascii_alphabetic()
    )
}

/// The drive letter of a `/mnt/<letter>` or `/mnt/<letter>/...` path.
fn wsl_drive(input: &str) -> Option<char> {
    let rest = input.strip_prefix("/mnt/")?;
    match rest.as_bytes() {
        [letter] | [letter, b'/', ..] if letter.is_ascii_alphabetic() => {
            Some(char::from(*letter).to_ascii_lowercase())
        }
        _ => None,
    }
}

/// Whether `input` equals `root` or continues it with a `/`.
#[must_use]
pub fn is_under_root(input: &str, root: &str) -> bool {
    let root = trim_root(root);
    if root == "/" {
        return input.starts_with('/');
    }
    match input.strip_prefix(root) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Strips trailing `/` from a container root, keeping a lone `/`.
#[must_use]
pub fn trim_root(root: &str) -> &str {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() && root.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Splits on either separator and resolves `.` and `..` lexically.
///
/// A `..` with nothing left to remove is dropped, so the segments never
/// climb above the path's root.
///
/// # Examples
///
/// ```
/// use pathmode::path::syntax::split_segments;
///
/// assert_eq!(split_segments(r"a\b/./../c"), vec!["a", "c"]);
/// assert_eq!(split_segments("../../etc"), vec!["etc"]);
/// ```
#[must_use]
pub fn split_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment.to_string()),
        }
    }
    segments
}

/// Whether any segment of `path` is `..`.
#[must_use]
pub fn has_parent_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(|segment| segment == "..")
}

/// Joins segments onto a container root with `/`.
///
/// An empty segment list yields the root itself, without a trailing slash.
#[must_use]
pub fn join_onto(root: &str, segments: &[String]) -> String {
    let base = trim_root(root);
    if segments.is_empty() {
        return base.to_string();
    }
    let mut joined = base.trim_end_matches('/').to_string();
    for segment in segments {
        joined.push('/');
        joined.push_str(segment);
    }
    joined
}

/// A host-side absolute path broken into comparable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostPath {
    /// Lowercased drive letter for Windows and WSL mount paths.
    drive: Option<char>,
    /// Whether this is a UNC path (`server` and `share` lead the segments).
    unc: bool,
    /// Path segments below the drive or root.
    segments: Vec<String>,
}

impl HostPath {
    /// Parses a path of one of the host-absolute syntaxes.
    pub(crate) fn parse(input: &str, syntax: PathSyntax) -> Option<Self> {
        let (drive, unc, rest) = match syntax {
            PathSyntax::WindowsAbsolute => {
                let drive = input.chars().next()?.to_ascii_lowercase();
                (Some(drive), false, input.get(2..)?)
            }
            PathSyntax::WindowsUnc => (None, true, input),
            PathSyntax::WslMount => (wsl_drive(input), false, input.get("/mnt/c".len()..)?),
            PathSyntax::PosixAbsolute => (None, false, input),
            PathSyntax::Relative | PathSyntax::AlreadyCanonical => return None,
        };
        Some(Self {
            drive,
            unc,
            segments: split_segments(rest),
        })
    }

    pub(crate) fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Windows-side paths compare case-insensitively.
    fn case_insensitive(&self) -> bool {
        self.drive.is_some() || self.unc
    }

    /// The segments of `self` below `root`, if `self` lies at or under it.
    pub(crate) fn strip_root(&self, root: &HostPath) -> Option<&[String]> {
        if self.drive != root.drive || self.unc != root.unc {
            return None;
        }
        if root.segments.len() > self.segments.len() {
            return None;
        }
        let fold = self.case_insensitive() || root.case_insensitive();
        let matches = self
            .segments
            .iter()
            .zip(&root.segments)
            .all(|(ours, theirs)| {
                if fold {
                    ours.eq_ignore_ascii_case(theirs)
                } else {
                    ours == theirs
                }
            });
        matches.then(|| &self.segments[root.segments.len()..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOTS: [&str; 2] = ["/app/project", "/workspace"];

    #[test]
    fn test_classify_windows_forms() {
        assert_eq!(classify(r"C:\x", &ROOTS), PathSyntax::WindowsAbsolute);
        assert_eq!(classify("d:/x", &ROOTS), PathSyntax::WindowsAbsolute);
        assert_eq!(classify(r"\\nas\share\x", &ROOTS), PathSyntax::WindowsUnc);
        // Drive-relative forms carry no root.
        assert_eq!(classify("C:x", &ROOTS), PathSyntax::Relative);
        assert_eq!(classify("C:", &ROOTS), PathSyntax::Relative);
    }

    #[test]
    fn test_classify_wsl_requires_single_letter_drive() {
        assert_eq!(classify("/mnt/c", &ROOTS), PathSyntax::WslMount);
        assert_eq!(classify("/mnt/c/", &ROOTS), PathSyntax::WslMount);
        assert_eq!(classify("/mnt/data/x", &ROOTS), PathSyntax::PosixAbsolute);
        assert_eq!(classify("/mnt/", &ROOTS), PathSyntax::PosixAbsolute);
    }

    #[test]
    fn test_classify_canonical_boundary() {
        assert_eq!(classify("/app/project", &ROOTS), PathSyntax::AlreadyCanonical);
        assert_eq!(classify("/workspace/a", &ROOTS), PathSyntax::AlreadyCanonical);
        assert_eq!(classify("/app/projects/a", &ROOTS), PathSyntax::PosixAbsolute);
        assert_eq!(classify("/workspace2", &ROOTS), PathSyntax::PosixAbsolute);
    }

    #[test]
    fn test_classify_non_ascii_input() {
        assert_eq!(classify("é:/x", &ROOTS), PathSyntax::Relative);
        assert_eq!(classify("/mnt/é/x", &ROOTS), PathSyntax::PosixAbsolute);
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments(r"a\b//c/./d/"), vec!["a", "b", "c", "d"]);
        assert!(split_segments("/").is_empty());
        assert_eq!(split_segments("../x"), vec!["x"]);
    }

    #[test]
    fn test_split_segments_resolves_parents_within_root() {
        assert_eq!(split_segments("/a/b/../c"), vec!["a", "c"]);
        assert_eq!(split_segments(r"Users\G\..\..\..\etc\passwd"), vec!["etc", "passwd"]);
        assert!(split_segments("a/..").is_empty());
        assert!(has_parent_segment(r"a\..\b"));
        assert!(!has_parent_segment("a/..b/c.."));
    }

    #[test]
    fn test_host_path_parent_segments_stay_below_drive() {
        let win = HostPath::parse(r"C:\x\..\..\etc", PathSyntax::WindowsAbsolute).unwrap();
        assert_eq!(win.drive, Some('c'));
        assert_eq!(win.segments(), ["etc"]);
    }

    #[test]
    fn test_join_onto() {
        let segs = vec!["a".to_string(), "b.py".to_string()];
        assert_eq!(join_onto("/app/project", &segs), "/app/project/a/b.py");
        assert_eq!(join_onto("/app/project/", &segs), "/app/project/a/b.py");
        assert_eq!(join_onto("/app/project/", &[]), "/app/project");
        assert_eq!(join_onto("/", &segs), "/a/b.py");
        assert_eq!(join_onto("/", &[]), "/");
    }

    #[test]
    fn test_trim_root() {
        assert_eq!(trim_root("/workspace//"), "/workspace");
        assert_eq!(trim_root("///"), "/");
    }

    #[test]
    fn test_host_path_parse() {
        let win = HostPath::parse(r"C:\Users\G\x.py", PathSyntax::WindowsAbsolute).unwrap();
        assert_eq!(win.drive, Some('c'));
        assert_eq!(win.segments(), ["Users", "G", "x.py"]);

        let wsl = HostPath::parse("/mnt/C/Users/G", PathSyntax::WslMount).unwrap();
        assert_eq!(wsl.drive, Some('c'));
        assert_eq!(wsl.segments(), ["Users", "G"]);

        let unc = HostPath::parse(r"\\nas\share\x", PathSyntax::WindowsUnc).unwrap();
        assert!(unc.unc);
        assert_eq!(unc.segments(), ["nas", "share", "x"]);

        assert!(HostPath::parse("x", PathSyntax::Relative).is_none());
    }

    #[test]
    fn test_strip_root_matches_wsl_against_windows_root() {
        let root = HostPath::parse(r"C:\Users\G\ext", PathSyntax::WindowsAbsolute).unwrap();
        let input = HostPath::parse("/mnt/c/users/g/ext/data/a.csv", PathSyntax::WslMount).unwrap();
        assert_eq!(input.strip_root(&root).unwrap(), ["data", "a.csv"]);
    }

    #[test]
    fn test_strip_root_posix_is_case_sensitive() {
        let root = HostPath::parse("/home/u/ext", PathSyntax::PosixAbsolute).unwrap();
        let upper = HostPath::parse("/home/U/ext/a", PathSyntax::PosixAbsolute).unwrap();
        let exact = HostPath::parse("/home/u/ext", PathSyntax::PosixAbsolute).unwrap();
        assert!(upper.strip_root(&root).is_none());
        assert!(exact.strip_root(&root).unwrap().is_empty());
    }

    #[test]
    fn test_strip_root_requires_same_drive() {
        let root = HostPath::parse("D:/ext", PathSyntax::WindowsAbsolute).unwrap();
        let input = HostPath::parse("C:/ext/a", PathSyntax::WindowsAbsolute).unwrap();
        assert!(input.strip_root(&root).is_none());
    }
}
