//! Parses a non-npm-rooted direct import into its leading package name and
//! the path within that package, for the cross-package (npm) resolution
//! technique.

use once_cell::sync::Lazy;
use regex::Regex;

static DIRECT_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<pkg>(?:@[a-z0-9\-~._]+/)?[a-z0-9\-~][a-z0-9\-~._]*)/(?P<path>.*)$")
        .expect("DIRECT_IMPORT_RE is a valid regex")
});

/// `"dep/contracts/Token.sol"` -> `("dep", "contracts/Token.sol")`,
/// `"@scope/dep/Token.sol"` -> `("@scope/dep", "Token.sol")`.
pub fn parse_direct_import(direct: &str) -> Option<(String, String)> {
    let caps = DIRECT_IMPORT_RE.captures(direct)?;
    Some((caps["pkg"].to_string(), caps["path"].to_string()))
}
