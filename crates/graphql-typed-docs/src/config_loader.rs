use anyhow::Context;
use std::path::Path;
use typed_document_codegen::TypedDocumentConfig;

/// Load a [`TypedDocumentConfig`] from a TOML file whose keys use the same
/// camelCase names as the library's configuration. Without a file, every
/// option takes its default.
pub(crate) fn load_config(config_path: Option<&Path>) -> anyhow::Result<TypedDocumentConfig> {
    let Some(config_path) = config_path else {
        log::debug!("No config file given; using the default configuration.");
        return Ok(TypedDocumentConfig::default());
    };

    let content =
        std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {config_path:?}"))?;
    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file {config_path:?}"))?;

    log::debug!("Loaded configuration from {config_path:?}.");
    Ok(config)
}

pub(crate) fn parse_config(content: &str) -> anyhow::Result<TypedDocumentConfig> {
    Ok(toml::from_str(content)?)
}
