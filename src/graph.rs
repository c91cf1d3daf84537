//! A minimal traversal driver over [`Resolver`], wiring together
//! `resolve_project_file`/`resolve_import` and an [`ImportExtractor`] to walk
//! an entire project's import graph, mirroring the role the teacher's own
//! `Graph` (`pub use resolver::Graph;` in `src/lib.rs`) plays for its full
//! dependency graph.
//!
//! This driver is deliberately thin: it owns no state beyond the traversal's
//! visited set, leaving every resolution decision to [`Resolver`] itself.

use std::{collections::VecDeque, path::Path};

use crate::{
    error::Result, fs::Filesystem, import_extractor::ImportExtractor, package::NodeResolver,
    resolved_file::ResolvedFile, resolver::Resolver,
};

/// Resolves the transitive import graph reachable from `entries`, returning
/// every distinct [`ResolvedFile`] in the order first discovered.
///
/// Entries are resolved with [`Resolver::resolve_project_file`]; every import
/// string `extractor` finds in a file's content is then resolved with
/// [`Resolver::resolve_import`], breadth-first, deduplicated on source name so
/// a file imported from multiple places is only ever queued once.
pub async fn resolve_project<F: Filesystem, N: NodeResolver, E: ImportExtractor>(
    resolver: &mut Resolver<F, N>,
    extractor: &E,
    entries: &[impl AsRef<Path>],
) -> Result<Vec<ResolvedFile>> {
    let mut seen = std::collections::HashSet::new();
    let mut queue = VecDeque::new();
    let mut ordered = Vec::new();

    for entry in entries {
        let file = resolver.resolve_project_file(entry.as_ref()).await?;
        if seen.insert(file.source_name().to_string()) {
            queue.push_back(file.clone());
            ordered.push(file);
        }
    }

    while let Some(from) = queue.pop_front() {
        for import_string in extractor.extract(from.content()) {
            let resolved = resolver.resolve_import(&from, &import_string).await?;
            if seen.insert(resolved.source_name().to_string()) {
                queue.push_back(resolved.clone());
                ordered.push(resolved);
            }
        }
    }

    Ok(ordered)
}
