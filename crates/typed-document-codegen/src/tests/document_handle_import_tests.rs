use crate::ConfigurationError;
use crate::DocumentHandleImport;
use crate::DEFAULT_DOCUMENT_TYPE_IMPORT;

#[test]
fn default_directive_renames_to_document_node() {
    let import = DocumentHandleImport::parse(DEFAULT_DOCUMENT_TYPE_IMPORT).unwrap();

    assert_eq!(import.module(), "@graphql-typed-document-node/core");
    assert_eq!(import.symbol(), Some("TypedDocumentNode"));
    assert_eq!(
        import.render(false),
        "import { TypedDocumentNode as DocumentNode } from '@graphql-typed-document-node/core';",
    );
}

#[test]
fn custom_named_import() {
    let import =
        DocumentHandleImport::parse("my-custom-type-module#CustomDocumentNamedImport")
            .unwrap();

    assert_eq!(
        import.render(false),
        "import { CustomDocumentNamedImport as DocumentNode } from 'my-custom-type-module';",
    );
}

#[test]
fn symbol_named_like_the_local_name_is_not_aliased() {
    let import = DocumentHandleImport::parse("graphql#DocumentNode").unwrap();
    assert_eq!(import.render(false), "import { DocumentNode } from 'graphql';");
}

#[test]
fn module_without_symbol_is_a_namespace_import() {
    let import = DocumentHandleImport::parse("./document-node").unwrap();

    assert_eq!(import.symbol(), None);
    assert_eq!(import.render(false), "import * as DocumentNode from './document-node';");
}

#[test]
fn type_only_import() {
    let import = DocumentHandleImport::parse(DEFAULT_DOCUMENT_TYPE_IMPORT).unwrap();
    assert_eq!(
        import.render(true),
        "import type { TypedDocumentNode as DocumentNode } from '@graphql-typed-document-node/core';",
    );
}

#[test]
fn malformed_directives_are_rejected() {
    for directive in ["", "#TypedDocumentNode", "module#", "a#b#c"] {
        assert_eq!(
            DocumentHandleImport::parse(directive),
            Err(ConfigurationError::InvalidImportDirective {
                directive: directive.to_string(),
            }),
            "directive: {directive:?}",
        );
    }
}
