use crate::SchemaError;
use dotgram_grammar::{AttrDeclaration, GrammarTable, GroupDeclaration};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Group declarations of one logical sub-grammar
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SchemaModule {
    #[serde(default, rename = "group")]
    pub groups: Vec<ModuleGroup>,
    #[serde(skip)]
    pub module_path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Extends>,
    #[serde(flatten)]
    pub declaration: GroupDeclaration,
}

/// Reuse of another group's attribute lists
///
/// `extends = { group = "cell", lists = ["simple", "complex"] }` prepends the
/// selected lists of `cell`, which must be declared earlier in the same
/// module. Without `lists` all three lists are reused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extends {
    pub group: String,
    #[serde(default = "AttrList::all")]
    pub lists: Vec<AttrList>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrList {
    Simple,
    Complex,
    Groups,
}

impl AttrList {
    fn all() -> Vec<AttrList> {
        vec![AttrList::Simple, AttrList::Complex, AttrList::Groups]
    }
}

impl Extends {
    fn inherit(&self, base: &GroupDeclaration, own: &GroupDeclaration) -> GroupDeclaration {
        let pick = |list: AttrList, base: &[AttrDeclaration], own: &[AttrDeclaration]| {
            if self.lists.contains(&list) {
                [base, own].concat()
            } else {
                own.to_vec()
            }
        };

        GroupDeclaration {
            name: own.name.clone(),
            header: own.header.clone(),
            simple: pick(AttrList::Simple, base.simple.as_slice(), own.simple.as_slice()),
            complex: pick(AttrList::Complex, base.complex.as_slice(), own.complex.as_slice()),
            groups: pick(AttrList::Groups, base.groups.as_slice(), own.groups.as_slice()),
        }
    }
}

impl SchemaModule {
    pub fn load<T: AsRef<Path>>(path: T) -> Result<Self, SchemaError> {
        let path = path.as_ref().canonicalize()?;
        let text = std::fs::read_to_string(&path)?;
        let mut module: SchemaModule = Self::from_str(&text)?;
        module.module_path = path;
        Ok(module)
    }

    /// Group declarations with `extends` resolved, in declaration order
    pub fn declarations(&self) -> Result<Vec<GroupDeclaration>, SchemaError> {
        let mut resolved: HashMap<&str, GroupDeclaration> = HashMap::new();
        let mut ret = Vec::new();

        for group in &self.groups {
            let decl = match &group.extends {
                Some(extends) => {
                    let base = resolved.get(extends.group.as_str()).ok_or_else(|| {
                        SchemaError::UnknownBase {
                            group: group.declaration.name.clone(),
                            base: extends.group.clone(),
                        }
                    })?;
                    extends.inherit(base, &group.declaration)
                }
                None => group.declaration.clone(),
            };

            resolved.insert(&group.declaration.name, decl.clone());
            ret.push(decl);
        }

        Ok(ret)
    }

    /// Builds the table of this module alone
    ///
    /// The first fatal declaration error aborts the build.
    pub fn build(&self) -> Result<GrammarTable, SchemaError> {
        let mut table = GrammarTable::new();

        for decl in self.declarations()? {
            table
                .add_group_data(&decl)
                .map_err(|source| SchemaError::Grammar {
                    path: self.module_path.clone(),
                    source,
                })?;
        }

        debug!(
            "Built module ({}, {} groups)",
            self.module_path.to_string_lossy(),
            self.groups.len()
        );

        Ok(table)
    }
}

impl FromStr for SchemaModule {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let module: SchemaModule = toml::from_str(s)?;
        Ok(module)
    }
}
