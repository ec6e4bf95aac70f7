use dotgram_grammar::GrammarError;
use miette::{self, Diagnostic};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SchemaError {
    #[diagnostic(code(SchemaError::FileIO), help(""))]
    #[error("file I/O error")]
    FileIO(#[from] std::io::Error),

    #[diagnostic(code(SchemaError::FileNotFound), help(""))]
    #[error("Dotgram.toml is not found")]
    FileNotFound,

    #[diagnostic(code(SchemaError::Deserialize), help(""))]
    #[error("toml load failed")]
    Deserialize(#[from] toml::de::Error),

    #[diagnostic(
        code(SchemaError::UnknownBase),
        help("declare the base group earlier in the same module")
    )]
    #[error("group {group} extends undeclared group {base}")]
    UnknownBase { group: String, base: String },

    #[diagnostic(code(SchemaError::Grammar), help(""))]
    #[error("invalid group declaration in {}", .path.display())]
    Grammar {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: GrammarError,
    },
}
