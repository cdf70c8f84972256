use indexmap::IndexMap;
use std::collections::HashSet;

/// One `import { .. } from '<path>';` statement for fragments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FragmentImport {
    pub names: Vec<String>,
    pub path: String,
}

impl FragmentImport {
    pub fn render(&self, type_only: bool) -> String {
        let import_kw = if type_only { "import type" } else { "import" };
        format!(
            "{import_kw} {{ {} }} from '{}';",
            self.names.join(", "),
            self.path,
        )
    }
}

/// Groups used fragments by the file they are imported from.
#[derive(Clone, Debug)]
pub struct FragmentImportResolver<'a> {
    local_fragments: HashSet<&'a str>,
    source_map: &'a IndexMap<String, String>,
}

impl<'a> FragmentImportResolver<'a> {
    pub fn new(source_map: &'a IndexMap<String, String>) -> Self {
        Self {
            local_fragments: HashSet::new(),
            source_map,
        }
    }

    /// Names defined in the documents being generated. These are never
    /// imported, even when `source_map` lists them.
    pub fn with_local_fragments(
        mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.local_fragments.extend(names);
        self
    }

    /// Resolve `used_fragments` into one import per source path.
    ///
    /// Paths appear in the order their first fragment appears in
    /// `used_fragments`, and names keep their relative order within a path.
    /// Names missing from the source map are skipped. `rename` maps each
    /// fragment name to the symbol that is imported.
    pub fn resolve(
        &self,
        used_fragments: &[String],
        rename: impl Fn(&str) -> String,
    ) -> Vec<FragmentImport> {
        let mut by_path: IndexMap<&str, Vec<String>> = IndexMap::new();
        for name in used_fragments {
            if self.local_fragments.contains(name.as_str()) {
                log::trace!("Fragment `{name}` is defined locally; not importing it.");
                continue;
            }

            let Some(path) = self.source_map.get(name) else {
                log::trace!(
                    "Fragment `{name}` has no entry in the fragment imports \
                    source map; assuming it is available locally.",
                );
                continue;
            };

            let names = by_path.entry(path.as_str()).or_default();
            let renamed = rename(name);
            if !names.contains(&renamed) {
                names.push(renamed);
            }
        }

        by_path.into_iter()
            .map(|(path, names)| FragmentImport {
                names,
                path: path.to_string(),
            })
            .collect()
    }
}
