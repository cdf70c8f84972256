use crate::tests::test_utils::document;
use crate::validate;
use crate::validation::check_fragment_resolution;
use crate::AggregatedDocuments;
use crate::ConfigurationError;
use crate::DocumentMode;
use crate::DocumentPolicy;
use crate::GenerateError;
use crate::LoadedFragment;
use crate::TypedDocumentConfig;
use indexmap::IndexMap;
use std::path::PathBuf;

mod configuration {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let documents = vec![document(None, "query GetJobs { jobs { id } }")];
        assert_eq!(
            validate(&TypedDocumentConfig::default(), &documents, "src/graphql.d.ts"),
            Ok(()),
        );
        assert_eq!(
            validate(&TypedDocumentConfig::default(), &documents, "src/types.tsx"),
            Ok(()),
        );
    }

    #[test]
    fn string_document_mode_is_disallowed() {
        let config = TypedDocumentConfig {
            document_mode: DocumentMode::String,
            ..Default::default()
        };

        let err = validate(&config, &[], "out.ts").unwrap_err();

        assert_eq!(err, ConfigurationError::DisallowedDocumentMode {
            document_mode: DocumentMode::String,
        });
    }

    #[test]
    fn other_document_modes_are_allowed() {
        for document_mode in [
            DocumentMode::DocumentNode,
            DocumentMode::DocumentNodeImportFragments,
            DocumentMode::External,
            DocumentMode::GraphQLTag,
        ] {
            let config = TypedDocumentConfig {
                document_mode,
                ..Default::default()
            };
            assert_eq!(validate(&config, &[], "out.ts"), Ok(()));
        }
    }

    #[test]
    fn output_file_must_be_typescript() {
        let config = TypedDocumentConfig::default();

        assert_eq!(
            validate(&config, &[], "out.js").unwrap_err(),
            ConfigurationError::InvalidOutputExtension {
                output_file: PathBuf::from("out.js"),
            },
        );
        assert!(matches!(
            validate(&config, &[], "out"),
            Err(ConfigurationError::InvalidOutputExtension { .. }),
        ));
        assert!(matches!(
            validate(&config, &[], "out.ts.bak"),
            Err(ConfigurationError::InvalidOutputExtension { .. }),
        ));
    }

    #[test]
    fn single_document_policy() {
        let config = TypedDocumentConfig {
            document_policy: DocumentPolicy::Single,
            ..Default::default()
        };
        let one = vec![document(None, "query A { a }")];
        let two = vec![
            document(None, "query A { a }"),
            document(None, "query B { b }"),
        ];

        assert_eq!(validate(&config, &one, "out.ts"), Ok(()));
        assert_eq!(
            validate(&config, &two, "out.ts"),
            Err(ConfigurationError::TooManyDocuments { num_documents: 2 }),
        );
    }

    #[test]
    fn malformed_import_directive() {
        let config = TypedDocumentConfig {
            document_type_import_directive: "module#".to_string(),
            ..Default::default()
        };

        assert_eq!(
            validate(&config, &[], "out.ts"),
            Err(ConfigurationError::InvalidImportDirective {
                directive: "module#".to_string(),
            }),
        );
    }
}

mod fragment_resolution {
    use super::*;

    #[test]
    fn local_mapped_and_external_fragments_resolve() {
        let documents = vec![document(None, r#"
            query GetJobs { jobs { ...JobFields ...Mapped ...External } }
            fragment JobFields on Job { id }
        "#)];
        let external = vec![LoadedFragment {
            name: "External".to_string(),
            on_type: "Job".to_string(),
            is_external: true,
        }];
        let mut source_map = IndexMap::new();
        source_map.insert("Mapped".to_string(), "./mapped.graphql".to_string());

        let aggregated = AggregatedDocuments::aggregate(&documents, &external);

        assert_eq!(check_fragment_resolution(&aggregated, &source_map), Ok(()));
    }

    #[test]
    fn unknown_fragment_reports_the_spread_position() {
        let documents = vec![document(
            Some("src/jobs.graphql"),
            "query GetJobs {\n  jobs {\n    ...Missing\n  }\n}",
        )];

        let aggregated = AggregatedDocuments::aggregate(&documents, &[]);
        let err = check_fragment_resolution(&aggregated, &IndexMap::new()).unwrap_err();

        match err {
            GenerateError::UnresolvedFragment { fragment_name, location } => {
                assert_eq!(fragment_name, "Missing");
                assert_eq!(location.to_string(), "src/jobs.graphql:3:5");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn spreads_inside_fragments_are_checked() {
        let documents = vec![document(None, r#"
            fragment JobFields on Job { company { ...CompanyFields } }
        "#)];

        let aggregated = AggregatedDocuments::aggregate(&documents, &[]);

        assert!(matches!(
            check_fragment_resolution(&aggregated, &IndexMap::new()),
            Err(GenerateError::UnresolvedFragment { fragment_name, .. })
                if fragment_name == "CompanyFields",
        ));
    }
}
