use crate::document_handle_import::DEFAULT_DOCUMENT_TYPE_IMPORT;
use crate::LoadedFragment;
use crate::NamingConvention;
use crate::OperationKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Configuration for [`TypedDocumentGenerator`](crate::TypedDocumentGenerator)
/// and [`validate()`](crate::validate).
///
/// Keys deserialize from camelCase (e.g. `documentTypeImportDirective`) and
/// every key is optional.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypedDocumentConfig {
    /// `module#Symbol` selecting the document handle type to import. Without
    /// a `#Symbol` part the whole module is imported as a namespace.
    pub document_type_import_directive: String,

    /// Maps a fragment name to the file its runtime definition is imported
    /// from.
    pub fragment_imports_source_map: IndexMap<String, String>,

    /// Fragments made available by other documents or plugins.
    pub external_fragments: Vec<LoadedFragment>,

    pub document_mode: DocumentMode,
    pub document_policy: DocumentPolicy,
    pub anonymous_operations: AnonymousOperationPolicy,
    pub unresolved_fragments: UnresolvedFragmentPolicy,
    pub fragment_import_names: FragmentImportNames,

    /// Attach each named operation's handle type to its originating file via
    /// `declare module` when the file is known.
    pub module_augmentation: bool,

    /// Emit `import type { .. }` instead of `import { .. }`.
    pub use_type_imports: bool,

    pub naming_convention: NamingConvention,

    /// Drop underscores when converting names to PascalCase
    /// (`get_jobs` → `GetJobs` instead of `Get_Jobs`).
    pub transform_underscore: bool,

    pub document_variable_prefix: String,
    pub document_variable_suffix: String,
    pub operation_result_suffix: String,
    pub omit_operation_suffix: bool,
    pub dedupe_operation_suffix: bool,
    pub operation_suffixes: OperationSuffixes,

    pub add_typename_to_selection_sets: bool,
    pub flatten_generated_types: bool,
}

impl Default for TypedDocumentConfig {
    fn default() -> Self {
        Self {
            document_type_import_directive: DEFAULT_DOCUMENT_TYPE_IMPORT.to_string(),
            fragment_imports_source_map: IndexMap::new(),
            external_fragments: vec![],
            document_mode: DocumentMode::default(),
            document_policy: DocumentPolicy::default(),
            anonymous_operations: AnonymousOperationPolicy::default(),
            unresolved_fragments: UnresolvedFragmentPolicy::default(),
            fragment_import_names: FragmentImportNames::default(),
            module_augmentation: true,
            use_type_imports: false,
            naming_convention: NamingConvention::default(),
            transform_underscore: false,
            document_variable_prefix: String::new(),
            document_variable_suffix: "Document".to_string(),
            operation_result_suffix: String::new(),
            omit_operation_suffix: false,
            dedupe_operation_suffix: false,
            operation_suffixes: OperationSuffixes::default(),
            add_typename_to_selection_sets: false,
            flatten_generated_types: false,
        }
    }
}

/// How documents are represented in generated code. Only `string` is
/// incompatible with type-level handles.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentMode {
    DocumentNode,
    #[default]
    DocumentNodeImportFragments,
    External,
    #[serde(rename = "graphQLTag")]
    GraphQLTag,
    String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentPolicy {
    #[default]
    Multi,
    /// At most one input document per generation.
    Single,
}

/// What to do with an operation that has no declared name.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnonymousOperationPolicy {
    #[default]
    Reject,
    /// Attach the handle type as the default export of the originating file.
    ModuleAugmentation,
}

/// What to do with a fragment spread that resolves neither to a local or
/// external fragment nor to a `fragmentImportsSourceMap` entry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnresolvedFragmentPolicy {
    #[default]
    Error,
    AssumeLocal,
}

/// Which symbol an imported fragment is referred to by.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentImportNames {
    /// The runtime fragment name (`JobFields`).
    #[default]
    Value,
    /// The generated fragment type name (`JobFieldsFragment`).
    Type,
}

/// Per-kind overrides of the operation suffix appended to result and
/// variables type names.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationSuffixes {
    pub mutation: Option<String>,
    pub query: Option<String>,
    pub subscription: Option<String>,
}

impl OperationSuffixes {
    pub fn for_kind(&self, kind: OperationKind) -> &str {
        let configured = match kind {
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        };
        configured.unwrap_or_else(|| kind.type_suffix())
    }
}
