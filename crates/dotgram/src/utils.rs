use dotgram_grammar::GrammarTable;
use dotgram_schema::{build_table, Manifest, SchemaError};
use log::warn;
use miette::Report;
use std::path::{Path, PathBuf};

/// Module paths given on the command line, or those of the nearest Dotgram.toml
pub fn module_paths(modules: &[PathBuf]) -> Result<Vec<PathBuf>, SchemaError> {
    if modules.is_empty() {
        let manifest_path = Manifest::search_from_current()?;
        let manifest = Manifest::load(manifest_path)?;
        Ok(manifest.module_paths())
    } else {
        Ok(modules.to_vec())
    }
}

/// Builds and merges the modules, surfacing collected warnings as log output
pub fn load_table<T: AsRef<Path>>(paths: &[T]) -> Result<GrammarTable, SchemaError> {
    let mut table = build_table(paths)?;
    for warning in table.take_warnings() {
        warn!("{:?}", Report::new(warning));
    }
    Ok(table)
}
