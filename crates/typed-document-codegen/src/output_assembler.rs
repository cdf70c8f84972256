use crate::EmittedDeclarations;

/// The generated artifact: lines to prepend to the output file (imports) and
/// the declarations themselves.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneratedOutput {
    pub content: String,
    pub prepend: Vec<String>,
}

impl GeneratedOutput {
    /// Handle imports come before fragment imports; fragment declarations
    /// come before operation declarations. Lines are not deduplicated.
    pub fn assemble(
        handle_imports: Vec<String>,
        fragment_imports: Vec<String>,
        declarations: EmittedDeclarations,
    ) -> Self {
        let mut prepend = handle_imports;
        prepend.extend(fragment_imports);

        let content =
            declarations.fragments
                .into_iter()
                .chain(declarations.operations)
                .collect::<Vec<_>>()
                .join("\n");

        Self {
            content,
            prepend,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prepend.is_empty() && self.content.is_empty()
    }

    /// The full text of the output file.
    pub fn to_file_contents(&self) -> String {
        match (self.prepend.is_empty(), self.content.is_empty()) {
            (true, true) => String::new(),
            (true, false) => format!("{}\n", self.content),
            (false, true) => format!("{}\n", self.prepend.join("\n")),
            (false, false) => {
                format!("{}\n\n{}\n", self.prepend.join("\n"), self.content)
            },
        }
    }
}
