use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Normalize extensions to their `.ext` form.
fn normalize_exts(graphql_file_exts: &[String]) -> HashSet<String> {
    graphql_file_exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// Recursively find files with one of `graphql_file_exts` at or under each of
/// `file_or_dir_paths`.
///
/// Files are visited in file-name order so that generation is reproducible.
/// A file reachable through more than one input path is only returned once.
pub(crate) fn discover_graphql_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> DiscoveredFiles {
    let graphql_file_exts = normalize_exts(graphql_file_exts);
    let mut discovered = DiscoveredFiles::default();
    let mut seen = HashSet::new();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    for path in file_or_dir_paths {
        let walker =
            WalkDir::new(path.as_path())
                .follow_links(true)
                .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    discovered.errors.push(e);
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }
            if !has_graphql_ext(entry_path, &graphql_file_exts) {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                discovered.num_skipped += 1;
                continue
            }

            let identity =
                std::fs::canonicalize(entry_path)
                    .unwrap_or_else(|_| entry_path.to_path_buf());
            if seen.insert(identity) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                discovered.file_paths.push(entry_path.to_path_buf());
            }
        }
    }

    // A single file passed explicitly is loaded even if its extension doesn't
    // match `graphql_file_exts`.
    if discovered.file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to load {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_skipped = discovered.num_skipped.saturating_sub(1);
        discovered.file_paths.push(first_arg_path.to_owned());
    }

    log::debug!("Found {} GraphQL files.", discovered.file_paths.len());
    discovered
}
