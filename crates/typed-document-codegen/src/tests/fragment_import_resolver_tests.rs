use crate::FragmentImport;
use crate::FragmentImportResolver;
use indexmap::IndexMap;

fn source_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries.iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect()
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn single_mapped_fragment() {
    let map = source_map(&[("JobFragment", "./_fragment.graphql")]);

    let imports =
        FragmentImportResolver::new(&map)
            .resolve(&names(&["JobFragment"]), |name| name.to_string());

    assert_eq!(imports, vec![FragmentImport {
        names: names(&["JobFragment"]),
        path: "./_fragment.graphql".to_string(),
    }]);
    assert_eq!(
        imports[0].render(false),
        "import { JobFragment } from './_fragment.graphql';",
    );
}

#[test]
fn groups_by_path_in_first_seen_order() {
    let map = source_map(&[
        ("A", "./a.graphql"),
        ("B", "./b.graphql"),
        ("C", "./a.graphql"),
    ]);

    let imports =
        FragmentImportResolver::new(&map)
            .resolve(&names(&["C", "B", "A"]), |name| name.to_string());

    let rendered: Vec<_> = imports.iter().map(|import| import.render(false)).collect();
    assert_eq!(rendered, vec![
        "import { C, A } from './a.graphql';",
        "import { B } from './b.graphql';",
    ]);
}

#[test]
fn unmapped_fragments_are_skipped() {
    let map = source_map(&[("A", "./a.graphql")]);

    let imports =
        FragmentImportResolver::new(&map)
            .resolve(&names(&["Unknown", "A"]), |name| name.to_string());

    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].names, names(&["A"]));
}

#[test]
fn no_used_fragments_means_no_imports() {
    let map = source_map(&[("A", "./a.graphql")]);
    let imports = FragmentImportResolver::new(&map).resolve(&[], |name| name.to_string());
    assert!(imports.is_empty());
}

#[test]
fn local_fragments_are_never_imported() {
    let map = source_map(&[("A", "./a.graphql"), ("B", "./b.graphql")]);

    let imports =
        FragmentImportResolver::new(&map)
            .with_local_fragments(["A"])
            .resolve(&names(&["A", "B"]), |name| name.to_string());

    assert_eq!(imports, vec![FragmentImport {
        names: names(&["B"]),
        path: "./b.graphql".to_string(),
    }]);
}

#[test]
fn rename_is_applied_to_each_imported_name() {
    let map = source_map(&[("A", "./a.graphql"), ("B", "./a.graphql")]);

    let imports =
        FragmentImportResolver::new(&map)
            .resolve(&names(&["A", "B"]), |name| format!("{name}Fragment"));

    assert_eq!(
        imports[0].render(true),
        "import type { AFragment, BFragment } from './a.graphql';",
    );
}

#[test]
fn resolution_is_deterministic() {
    let map = source_map(&[("A", "./a.graphql"), ("B", "./b.graphql")]);
    let resolver = FragmentImportResolver::new(&map);
    let used = names(&["B", "A", "B"]);

    let first = resolver.resolve(&used, |name| name.to_string());
    let second = resolver.resolve(&used, |name| name.to_string());

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
