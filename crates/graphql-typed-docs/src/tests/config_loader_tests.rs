use crate::config_loader::load_config;
use crate::config_loader::parse_config;
use crate::tests::test_utils::write_file;
use typed_document_codegen::AnonymousOperationPolicy;
use typed_document_codegen::LoadedFragment;
use typed_document_codegen::NamingConvention;
use typed_document_codegen::TypedDocumentConfig;

#[test]
fn empty_config_uses_defaults() {
    assert_eq!(parse_config("").unwrap(), TypedDocumentConfig::default());
}

#[test]
fn no_config_file_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), TypedDocumentConfig::default());
}

#[test]
fn camel_case_keys() {
    let config = parse_config(r#"
        documentTypeImportDirective = "my-custom-type-module#CustomDocumentNamedImport"
        anonymousOperations = "moduleAugmentation"
        namingConvention = "keep"
        transformUnderscore = true
        useTypeImports = true
        documentVariableSuffix = "Doc"

        [operationSuffixes]
        query = "Q"
    "#).unwrap();

    assert_eq!(
        config.document_type_import_directive,
        "my-custom-type-module#CustomDocumentNamedImport",
    );
    assert_eq!(config.anonymous_operations, AnonymousOperationPolicy::ModuleAugmentation);
    assert_eq!(config.naming_convention, NamingConvention::Keep);
    assert!(config.transform_underscore);
    assert!(config.use_type_imports);
    assert_eq!(config.document_variable_suffix, "Doc");
    assert_eq!(config.operation_suffixes.query.as_deref(), Some("Q"));
    assert_eq!(config.operation_suffixes.mutation, None);
    assert!(config.module_augmentation);
}

#[test]
fn fragment_source_map_keeps_configured_order() {
    let config = parse_config(r#"
        [fragmentImportsSourceMap]
        UserFields = "./users.graphql"
        JobFragment = "./_fragment.graphql"
        CompanyFields = "./companies.graphql"
    "#).unwrap();

    assert_eq!(
        config.fragment_imports_source_map.keys().collect::<Vec<_>>(),
        vec!["UserFields", "JobFragment", "CompanyFields"],
    );
}

#[test]
fn external_fragments() {
    let config = parse_config(r#"
        [[externalFragments]]
        name = "CompanyFields"
        onType = "Company"
    "#).unwrap();

    assert_eq!(config.external_fragments, vec![LoadedFragment {
        name: "CompanyFields".to_string(),
        on_type: "Company".to_string(),
        is_external: false,
    }]);
}

#[test]
fn unknown_enum_value_is_an_error() {
    assert!(parse_config(r#"documentPolicy = "sometimes""#).is_err());
}

#[test]
fn errors_name_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "codegen.toml", "useTypeImports = \"yes\"");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("codegen.toml"));

    let missing = dir.path().join("missing.toml");
    let err = load_config(Some(&missing)).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file"));
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "codegen.toml", "flattenGeneratedTypes = true\n");

    let config = load_config(Some(&path)).unwrap();

    assert!(config.flatten_generated_types);
}
