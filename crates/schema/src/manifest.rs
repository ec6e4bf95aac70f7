use crate::{SchemaError, SchemaModule};
use dotgram_grammar::GrammarTable;
use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const MANIFEST_NAME: &str = "Dotgram.toml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub grammar: Grammar,
    #[serde(skip)]
    pub manifest_path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Grammar {
    pub name: String,
    /// Schema modules in merge order, relative to the manifest
    #[serde(default)]
    pub modules: Vec<PathBuf>,
}

impl Manifest {
    pub fn search_from_current() -> Result<PathBuf, SchemaError> {
        Manifest::search_from(env::current_dir()?)
    }

    pub fn search_from<T: AsRef<Path>>(from: T) -> Result<PathBuf, SchemaError> {
        for path in from.as_ref().ancestors() {
            let path = path.join(MANIFEST_NAME);
            if path.is_file() {
                return Ok(path);
            }
        }

        Err(SchemaError::FileNotFound)
    }

    pub fn load<T: AsRef<Path>>(path: T) -> Result<Self, SchemaError> {
        let path = path.as_ref().canonicalize()?;
        let text = std::fs::read_to_string(&path)?;
        let mut manifest: Manifest = Self::from_str(&text)?;
        manifest.manifest_path = path;
        Ok(manifest)
    }

    pub fn module_paths(&self) -> Vec<PathBuf> {
        let base = self
            .manifest_path
            .parent()
            .map(|x| x.to_path_buf())
            .unwrap_or_default();
        self.grammar.modules.iter().map(|x| base.join(x)).collect()
    }

    pub fn build(&self) -> Result<GrammarTable, SchemaError> {
        build_table(&self.module_paths())
    }
}

impl FromStr for Manifest {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest = toml::from_str(s)?;
        Ok(manifest)
    }
}

/// Builds one table per module and merges them in the given order.
///
/// The merged table is returned unchecked with all collected warnings.
pub fn build_table<T: AsRef<Path>>(paths: &[T]) -> Result<GrammarTable, SchemaError> {
    let mut table = GrammarTable::new();

    for path in paths {
        info!("Loading module ({})", path.as_ref().to_string_lossy());
        let module = SchemaModule::load(path)?;
        table.merge(module.build()?);
    }

    Ok(table)
}
