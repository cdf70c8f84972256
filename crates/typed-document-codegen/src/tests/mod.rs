mod document_handle_import_tests;
mod fragment_import_resolver_tests;
mod selection_set_optimizer_tests;
mod validation_tests;
