mod manifest;
mod schema_error;
mod schema_module;
pub use manifest::{build_table, Grammar, Manifest};
pub use schema_error::SchemaError;
pub use schema_module::{AttrList, Extends, ModuleGroup, SchemaModule};
