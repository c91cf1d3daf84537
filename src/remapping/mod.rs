//! User-declared remapping grammar and selection.

mod select;

pub use select::select;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::ResolverError, package::Package};

/// A syntactically valid remapping before its `npm/` target (if any) has been
/// resolved against installed packages.
#[derive(Debug, Clone)]
pub struct ParsedRemapping {
    pub raw_text: String,
    pub context: String,
    pub prefix: String,
    pub target: String,
}

/// Splits `context:prefix=target`, with `context` optional, per the grammar
/// handed down from the front end's remapping configuration.
pub fn parse(raw: &str) -> Result<ParsedRemapping, ResolverError> {
    let (left, target) =
        raw.split_once('=').ok_or_else(|| ResolverError::InvalidUserRemapping(raw.to_string()))?;
    let (context, prefix) = match left.split_once(':') {
        Some((context, prefix)) => (context.to_string(), prefix.to_string()),
        None => (String::new(), left.to_string()),
    };
    if context.starts_with("npm/") {
        return Err(ResolverError::InvalidUserRemapping(raw.to_string()));
    }
    Ok(ParsedRemapping { raw_text: raw.to_string(), context, prefix, target: target.to_string() })
}

static NPM_TARGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^npm/(?P<name>(?:@[a-z0-9\-~._]+/)?[a-z0-9\-~][a-z0-9\-~._]*)@(?P<version>local|\d+\.\d+\.\d+)/(?P<rest>.*)$")
        .expect("NPM_TARGET_RE is a valid regex")
});

pub struct NpmTarget {
    pub name: String,
    pub version: String,
}

pub fn parse_npm_target(target: &str) -> Option<NpmTarget> {
    let caps = NPM_TARGET_RE.captures(target)?;
    Some(NpmTarget { name: caps["name"].to_string(), version: caps["version"].to_string() })
}

/// A fully validated user remapping, with its npm target resolved to a
/// concrete [`Package`] when `target` names one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRemapping {
    pub raw_text: String,
    pub context: String,
    pub prefix: String,
    pub target: String,
    pub target_package: Option<Package>,
}

impl UserRemapping {
    pub fn to_entry(&self) -> RemappingEntry {
        RemappingEntry { context: self.context.clone(), prefix: self.prefix.clone(), target: self.target.clone() }
    }
}

/// A `{context, prefix, target}` triple as emitted by
/// [`Resolver::get_remappings`](crate::resolver::Resolver::get_remappings),
/// whether user-declared or derived from the dependency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappingEntry {
    pub context: String,
    pub prefix: String,
    pub target: String,
}
