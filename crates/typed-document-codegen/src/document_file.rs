use crate::ast;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentLoadError>;

/// A parsed GraphQL executable document paired with the location it was
/// loaded from.
///
/// The location is a path-like string. It is used to attach module
/// augmentations to the originating file and to point diagnostics at it. An
/// empty location is treated the same as an unknown one.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFile {
    document: ast::operation::Document,
    location: Option<String>,
}

impl DocumentFile {
    pub fn new(
        location: Option<String>,
        document: ast::operation::Document,
    ) -> Self {
        Self {
            document,
            location,
        }
    }

    /// Parse `content` as an executable document.
    pub fn from_str(
        location: Option<&str>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let document = ast::operation::parse(content.as_ref())
            .map_err(|err| DocumentLoadError::ParseError {
                location: location.map(|l| l.to_string()),
                err: Arc::new(err),
            })?;

        Ok(Self::new(location.map(|l| l.to_string()), document))
    }

    /// Read and parse the document at `file_path`, recording the path (with
    /// `/` separators) as the document's location.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(DocumentLoadError::PathIsNotAFile(file_path.to_path_buf()));
        }

        let bytes = std::fs::read(file_path).map_err(|err| {
            DocumentLoadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err: Arc::new(err),
            }
        })?;
        let content = String::from_utf8(bytes).map_err(|err| {
            DocumentLoadError::FileDecodeError {
                file_path: file_path.to_path_buf(),
                err,
            }
        })?;
        log::trace!("Read {} bytes from {file_path:?}.", content.len());

        let location = file_path.to_string_lossy().replace('\\', "/");
        Self::from_str(Some(location.as_str()), content)
    }

    pub fn document(&self) -> &ast::operation::Document {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut ast::operation::Document {
        &mut self.document
    }

    /// The originating location, or `None` if it is unknown or empty.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|location| !location.is_empty())
    }
}

#[derive(Clone, Debug, Error)]
pub enum DocumentLoadError {
    #[error("GraphQL document at {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read GraphQL document at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: Arc<std::io::Error>,
    },

    #[error(
        "Error parsing GraphQL document{}: {err}",
        location.as_ref().map(|l| format!(" at {l}")).unwrap_or_default(),
    )]
    ParseError {
        location: Option<String>,
        err: Arc<ast::operation::ParseError>,
    },

    #[error("Expected a GraphQL document file but found something else at {0:?}")]
    PathIsNotAFile(PathBuf),
}
