use crate::ast;
use crate::tests::test_utils::document;
use crate::tests::test_utils::field_names;
use crate::tests::test_utils::first_operation;
use crate::FragmentInliner;
use crate::SelectionSetOptimizer;

fn root_selection_set(
    op: &ast::operation::OperationDefinition,
) -> &ast::operation::SelectionSet {
    crate::OperationInfo::from_ast(op).selection_set
}

fn only_field(selection_set: &ast::operation::SelectionSet) -> &ast::operation::Field {
    match selection_set.items.as_slice() {
        [ast::operation::Selection::Field(field)] => field,
        other => panic!("expected a single field, got {other:?}"),
    }
}

#[test]
fn spreads_become_inline_fragments_and_fragments_are_dropped() {
    let documents = vec![
        document(Some("jobs.graphql"), "query GetJobs { jobs { ...JobFields } }"),
        document(Some("fragments.graphql"), "fragment JobFields on Job { id title }"),
    ];

    let optimized = FragmentInliner.optimize(&documents);

    assert_eq!(optimized.len(), 2);
    assert_eq!(optimized[0].location(), Some("jobs.graphql"));
    assert!(optimized[1].document().definitions.is_empty());

    let jobs = only_field(root_selection_set(first_operation(&optimized[0])));
    match jobs.selection_set.items.as_slice() {
        [ast::operation::Selection::InlineFragment(inline)] => {
            assert_eq!(
                inline.type_condition,
                Some(ast::operation::TypeCondition::On("Job".to_string())),
            );
            assert_eq!(field_names(&inline.selection_set), vec!["id", "title"]);
        },
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}

#[test]
fn nested_spreads_are_inlined() {
    let documents = vec![document(None, r#"
        query GetJobs { jobs { ...JobFields } }
        fragment JobFields on Job { company { ...CompanyFields } }
        fragment CompanyFields on Company { name }
    "#)];

    let optimized = FragmentInliner.optimize(&documents);

    let jobs = only_field(root_selection_set(first_operation(&optimized[0])));
    let ast::operation::Selection::InlineFragment(job_fields) = &jobs.selection_set.items[0] else {
        panic!("expected an inline fragment");
    };
    let company = only_field(&job_fields.selection_set);
    let ast::operation::Selection::InlineFragment(company_fields) = &company.selection_set.items[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(field_names(&company_fields.selection_set), vec!["name"]);
}

#[test]
fn unknown_spreads_are_kept() {
    let documents = vec![document(None, "query GetJobs { jobs { ...ExternalFields } }")];

    let optimized = FragmentInliner.optimize(&documents);

    let jobs = only_field(root_selection_set(first_operation(&optimized[0])));
    assert!(matches!(
        jobs.selection_set.items.as_slice(),
        [ast::operation::Selection::FragmentSpread(spread)]
            if spread.fragment_name == "ExternalFields",
    ));
}

#[test]
fn cyclic_spreads_terminate() {
    let documents = vec![document(None, r#"
        query GetJobs { jobs { ...A } }
        fragment A on Job { id ...B }
        fragment B on Job { title ...A }
    "#)];

    let optimized = FragmentInliner.optimize(&documents);

    let jobs = only_field(root_selection_set(first_operation(&optimized[0])));
    let ast::operation::Selection::InlineFragment(a) = &jobs.selection_set.items[0] else {
        panic!("expected A to be inlined");
    };
    let ast::operation::Selection::InlineFragment(b) = &a.selection_set.items[1] else {
        panic!("expected B to be inlined");
    };
    assert!(matches!(
        &b.selection_set.items[1],
        ast::operation::Selection::FragmentSpread(spread) if spread.fragment_name == "A",
    ));
}
