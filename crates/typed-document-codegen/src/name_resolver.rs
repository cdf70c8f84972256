use crate::OperationKind;
use crate::OperationSuffixes;
use crate::TypedDocumentConfig;
use heck::ToUpperCamelCase;
use serde::Deserialize;
use serde::Serialize;

const FRAGMENT_TYPE_SUFFIX: &str = "Fragment";
const VARIABLES_TYPE_SUFFIX: &str = "Variables";

/// How declared operation and fragment names are converted into TypeScript
/// identifiers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    #[default]
    PascalCase,
    Keep,
}

impl NamingConvention {
    /// Convert `name` into an identifier.
    ///
    /// Unless `transform_underscore` is set, `PascalCase` converts each
    /// `_`-separated segment on its own and keeps the underscores
    /// (`get_jobs` → `Get_Jobs`), matching the names declared by the
    /// operation types plugin.
    pub fn convert(&self, name: &str, transform_underscore: bool) -> String {
        match self {
            Self::PascalCase if transform_underscore => name.to_upper_camel_case(),
            Self::PascalCase => {
                name.split('_')
                    .map(|segment| segment.to_upper_camel_case())
                    .collect::<Vec<_>>()
                    .join("_")
            },
            Self::Keep => name.to_string(),
        }
    }
}

/// The name an operation is known by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationName<'a> {
    Declared(&'a str),
    /// The n-th (1-based) anonymous operation of a generation.
    Anonymous(usize),
}

/// The three identifiers generated for one operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationNames {
    pub handle: String,
    pub result_type: String,
    pub variables_type: String,
}

/// Derives handle, result and variables type names from an operation's kind
/// and name.
///
/// Resolution is a pure function of its inputs and the configuration. Two
/// operations that resolve to the same names are not disambiguated here.
#[derive(Clone, Debug, PartialEq)]
pub struct NameResolver {
    convention: NamingConvention,
    dedupe_operation_suffix: bool,
    document_variable_prefix: String,
    document_variable_suffix: String,
    omit_operation_suffix: bool,
    operation_result_suffix: String,
    operation_suffixes: OperationSuffixes,
    transform_underscore: bool,
}

impl NameResolver {
    pub fn from_config(config: &TypedDocumentConfig) -> Self {
        Self {
            convention: config.naming_convention,
            dedupe_operation_suffix: config.dedupe_operation_suffix,
            document_variable_prefix: config.document_variable_prefix.clone(),
            document_variable_suffix: config.document_variable_suffix.clone(),
            omit_operation_suffix: config.omit_operation_suffix,
            operation_result_suffix: config.operation_result_suffix.clone(),
            operation_suffixes: config.operation_suffixes.clone(),
            transform_underscore: config.transform_underscore,
        }
    }

    fn base_name(&self, name: OperationName<'_>) -> String {
        match name {
            OperationName::Declared(name) => {
                self.convention.convert(name, self.transform_underscore)
            },
            // Synthetic names bypass the naming convention.
            OperationName::Anonymous(n) => format!("Unnamed_{n}_"),
        }
    }

    /// The suffix appended to result and variables type names for an
    /// operation of `kind` named `name`.
    pub fn operation_suffix(
        &self,
        kind: OperationKind,
        name: OperationName<'_>,
    ) -> String {
        if self.omit_operation_suffix {
            return String::new();
        }

        let suffix = self.operation_suffixes.for_kind(kind);
        if self.dedupe_operation_suffix
            && let OperationName::Declared(name) = name
            && name.to_lowercase().ends_with(&suffix.to_lowercase()) {
            return String::new();
        }
        suffix.to_string()
    }

    pub fn resolve(
        &self,
        kind: OperationKind,
        name: OperationName<'_>,
    ) -> OperationNames {
        let base = self.base_name(name);
        let operation_suffix = self.operation_suffix(kind, name);

        OperationNames {
            handle: format!(
                "{}{base}{}",
                self.document_variable_prefix,
                self.document_variable_suffix,
            ),
            result_type: format!(
                "{base}{operation_suffix}{}",
                self.operation_result_suffix,
            ),
            variables_type: format!(
                "{base}{operation_suffix}{VARIABLES_TYPE_SUFFIX}",
            ),
        }
    }

    pub fn fragment_type_name(&self, fragment_name: &str) -> String {
        let base = self.convention.convert(fragment_name, self.transform_underscore);
        if self.dedupe_operation_suffix
            && fragment_name.to_lowercase().ends_with(&FRAGMENT_TYPE_SUFFIX.to_lowercase()) {
            base
        } else {
            format!("{base}{FRAGMENT_TYPE_SUFFIX}")
        }
    }
}
