pub mod declaration;
pub mod grammar_error;
pub mod grammar_table;
pub mod handler;
pub mod kind;
pub mod pattern;
pub use declaration::{AttrDeclaration, GroupDeclaration};
pub use grammar_error::{CheckError, GrammarError, GrammarWarning};
pub use grammar_table::GrammarTable;
pub use handler::{HandlerCategory, HandlerId};
pub use kind::{ComplexKind, HeaderKind, Kind, SimpleKind};
