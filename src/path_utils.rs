//! Pure, filesystem-free helpers for manipulating Solidity source names.
//!
//! Source names are always `/`-separated regardless of host platform; these
//! helpers never touch `std::path` separators directly, mirroring how the
//! teacher repo keeps `source_name` strings distinct from on-disk paths.

use std::path::Path;

use path_slash::PathExt as _;

/// Returns the directory portion of a source name, or `""` for a root-level
/// file. `"contracts/Token.sol"` -> `"contracts"`, `"Token.sol"` -> `""`.
pub fn dirname(source_name: &str) -> &str {
    match source_name.rfind('/') {
        Some(idx) => &source_name[..idx],
        None => "",
    }
}

enum Segment {
    Normal(String),
    Parent,
}

/// Joins a base directory (as returned by [`dirname`]) with a relative import
/// path, collapsing `.`/`..` components lexically.
///
/// Unmatched `..` components (those with no preceding normal component to
/// cancel) are left in place at the front of the result rather than silently
/// dropped, so callers can detect an import that climbed past its root by
/// checking whether the result starts with `../` or equals `".."`.
pub fn join_source(base_dir: &str, relative: &str) -> String {
    let mut stack = Vec::new();
    if !base_dir.is_empty() {
        stack.extend(base_dir.split('/').map(|s| Segment::Normal(s.to_string())));
    }

    for part in relative.split('/') {
        match part {
            "" | "." => {}
            ".." => match stack.last() {
                Some(Segment::Normal(_)) => {
                    stack.pop();
                }
                _ => stack.push(Segment::Parent),
            },
            segment => stack.push(Segment::Normal(segment.to_string())),
        }
    }

    stack
        .iter()
        .map(|s| match s {
            Segment::Normal(n) => n.as_str(),
            Segment::Parent => "..",
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Converts a host path to a forward-slash string, lossily.
pub fn to_forward_slash(path: &Path) -> String {
    path.to_slash_lossy().into_owned()
}

/// Formats an absolute path for diagnostics, relative to `working_directory`
/// when one was configured, falling back to the absolute path otherwise.
pub fn shorten(working_directory: Option<&Path>, absolute: &Path) -> String {
    let Some(wd) = working_directory else {
        return to_forward_slash(absolute);
    };
    match absolute.strip_prefix(wd) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => format!("./{}", to_forward_slash(rel)),
        Err(_) => to_forward_slash(absolute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirname_of_root_file_is_empty() {
        assert_eq!(dirname("Token.sol"), "");
        assert_eq!(dirname("contracts/Token.sol"), "contracts");
        assert_eq!(dirname("contracts/utils/Math.sol"), "contracts/utils");
    }

    #[test]
    fn join_source_collapses_dot_and_dotdot() {
        assert_eq!(join_source("contracts", "./Token.sol"), "contracts/Token.sol");
        assert_eq!(join_source("contracts/utils", "../Token.sol"), "contracts/Token.sol");
        assert_eq!(join_source("contracts", "../Token.sol"), "Token.sol");
    }

    #[test]
    fn join_source_keeps_unmatched_parent_markers() {
        assert_eq!(join_source("contracts", "../../Outside.sol"), "../Outside.sol");
        assert_eq!(join_source("", "../Outside.sol"), "../Outside.sol");
    }

    #[test]
    fn join_source_within_a_package_root() {
        assert_eq!(join_source("npm/dep@1.2.3", "./Y.sol"), "npm/dep@1.2.3/Y.sol");
        assert_eq!(join_source("npm/dep@1.2.3", "../outside"), "npm/outside");
    }

    #[test]
    fn shorten_relativizes_under_working_directory() {
        let wd = Path::new("/home/user/project");
        assert_eq!(shorten(Some(wd), Path::new("/home/user/project/contracts/Token.sol")), "./contracts/Token.sol");
        assert_eq!(shorten(Some(wd), Path::new("/home/user/project")), ".");
        assert_eq!(shorten(Some(wd), Path::new("/elsewhere/Token.sol")), "/elsewhere/Token.sol");
        assert_eq!(shorten(None, Path::new("/elsewhere/Token.sol")), "/elsewhere/Token.sol");
    }
}
