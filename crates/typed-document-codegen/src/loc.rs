use crate::ast;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes the (possibly unknown) location of the document it points into.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<String>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&str>, pos: ast::AstPos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_string()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}:{}", self.line, self.col),
            None => write!(f, "<unknown document>:{}:{}", self.line, self.col),
        }
    }
}
