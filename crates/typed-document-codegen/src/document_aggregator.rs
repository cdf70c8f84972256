use crate::ast;
use crate::DocumentFile;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Stable identifier of an input document: its index in the input list.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DocumentId(pub(crate) usize);

impl DocumentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A fragment available for resolution, either defined in one of the input
/// documents or supplied externally through configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedFragment {
    pub name: String,
    pub on_type: String,
    #[serde(default)]
    pub is_external: bool,
}

/// Side table from [`DocumentId`] to the document's originating location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentLocations(Vec<Option<String>>);

impl DocumentLocations {
    pub fn get(&self, id: DocumentId) -> Option<&str> {
        self.0.get(id.0).and_then(|location| location.as_deref())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AggregatedDefinition<'doc> {
    definition: &'doc ast::operation::Definition,
    document_id: DocumentId,
}

impl<'doc> AggregatedDefinition<'doc> {
    pub fn definition(&self) -> &'doc ast::operation::Definition {
        self.definition
    }

    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }
}

/// All definitions of a set of documents, concatenated in input order, along
/// with the fragments available to them.
#[derive(Clone, Debug)]
pub struct AggregatedDocuments<'doc> {
    definitions: Vec<AggregatedDefinition<'doc>>,
    fragments: Vec<LoadedFragment>,
    locations: DocumentLocations,
}

impl<'doc> AggregatedDocuments<'doc> {
    /// Concatenate `documents` and build the fragment registry: local
    /// fragments first (in definition order), then `external_fragments`.
    ///
    /// Fragment names are not deduplicated.
    pub fn aggregate(
        documents: &'doc [DocumentFile],
        external_fragments: &[LoadedFragment],
    ) -> Self {
        let mut definitions = vec![];
        let mut locations = vec![];
        for (idx, doc) in documents.iter().enumerate() {
            let document_id = DocumentId(idx);
            locations.push(doc.location().map(|l| l.to_string()));
            definitions.extend(
                doc.document()
                    .definitions
                    .iter()
                    .map(|definition| AggregatedDefinition {
                        definition,
                        document_id,
                    }),
            );
        }

        let mut fragments: Vec<LoadedFragment> =
            definitions.iter()
                .filter_map(|def| match def.definition {
                    ast::operation::Definition::Fragment(frag) => {
                        let ast::operation::TypeCondition::On(on_type) =
                            &frag.type_condition;
                        Some(LoadedFragment {
                            name: frag.name.clone(),
                            on_type: on_type.clone(),
                            is_external: false,
                        })
                    },
                    ast::operation::Definition::Operation(_) => None,
                })
                .collect();
        fragments.extend(external_fragments.iter().map(|frag| LoadedFragment {
            is_external: true,
            ..frag.clone()
        }));

        log::debug!(
            "Aggregated {} definitions ({} fragments) from {} documents.",
            definitions.len(),
            fragments.len(),
            documents.len(),
        );

        Self {
            definitions,
            fragments,
            locations: DocumentLocations(locations),
        }
    }

    pub fn definitions(&self) -> &[AggregatedDefinition<'doc>] {
        &self.definitions
    }

    pub fn fragments(&self) -> &[LoadedFragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn location_of(&self, id: DocumentId) -> Option<&str> {
        self.locations.get(id)
    }

    pub fn locations(&self) -> &DocumentLocations {
        &self.locations
    }

    /// Fragment definitions found in the input documents, keyed by name. When
    /// a name is defined more than once the first definition wins.
    pub fn local_fragment_definitions(
        &self,
    ) -> IndexMap<&'doc str, &'doc ast::operation::FragmentDefinition> {
        let mut local = IndexMap::new();
        for def in &self.definitions {
            if let ast::operation::Definition::Fragment(frag) = def.definition {
                local.entry(frag.name.as_str()).or_insert(frag);
            }
        }
        local
    }

    /// Whether `name` is available without an import: defined locally or
    /// supplied as an external fragment.
    pub fn has_fragment(&self, name: &str) -> bool {
        self.fragments.iter().any(|frag| frag.name == name)
    }
}
