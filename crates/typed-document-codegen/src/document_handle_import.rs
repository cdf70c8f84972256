use crate::ConfigurationError;

pub const DEFAULT_DOCUMENT_TYPE_IMPORT: &str =
    "@graphql-typed-document-node/core#TypedDocumentNode";

/// The local name the handle type is imported under and referenced by in
/// generated aliases.
pub const DOCUMENT_NODE_LOCAL_NAME: &str = "DocumentNode";

/// The import of the document handle type, parsed from a `module#Symbol`
/// directive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentHandleImport {
    module: String,
    symbol: Option<String>,
}

impl DocumentHandleImport {
    pub fn parse(directive: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidImportDirective {
            directive: directive.to_string(),
        };

        let (module, symbol) = match directive.split_once('#') {
            Some((module, symbol)) => {
                if symbol.is_empty() || symbol.contains('#') {
                    return Err(invalid());
                }
                (module, Some(symbol.to_string()))
            },
            None => (directive, None),
        };

        if module.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            module: module.to_string(),
            symbol,
        })
    }

    pub fn module(&self) -> &str {
        self.module.as_str()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn render(&self, type_only: bool) -> String {
        let import_kw = if type_only { "import type" } else { "import" };
        let module = &self.module;
        match self.symbol.as_deref() {
            Some(DOCUMENT_NODE_LOCAL_NAME) => format!(
                "{import_kw} {{ {DOCUMENT_NODE_LOCAL_NAME} }} from '{module}';",
            ),
            Some(symbol) => format!(
                "{import_kw} {{ {symbol} as {DOCUMENT_NODE_LOCAL_NAME} }} from '{module}';",
            ),
            None => format!(
                "{import_kw} * as {DOCUMENT_NODE_LOCAL_NAME} from '{module}';",
            ),
        }
    }
}
