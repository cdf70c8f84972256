mod config_loader_tests;
mod test_utils;
