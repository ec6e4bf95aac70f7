use crate::declaration::GroupDeclaration;
use crate::grammar_error::{CheckError, GrammarError, GrammarWarning};
use crate::handler::HandlerId;
use crate::kind::{ComplexKind, HeaderKind, Kind, SimpleKind};
use crate::pattern::expand;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use std::collections::HashSet;
use std::fmt;

/// Key of an entry: `group:attribute`
pub fn compound_key(group: &str, key: &str) -> String {
    format!("{group}:{key}")
}

/// Flat keyword table of the group statement parser
///
/// Maps every group to its header kind and every `group:attribute` key to the
/// handler parsing it. Iteration follows registration order.
#[derive(Clone, Debug, Default)]
pub struct GrammarTable {
    groups: IndexMap<String, HeaderKind>,
    entries: IndexMap<String, HandlerId>,
    required: IndexSet<String>,
    warnings: Vec<GrammarWarning>,
}

impl GrammarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group and expands all of its attribute patterns.
    ///
    /// Nested group targets are not required to be defined yet; they are
    /// recorded and resolved by [`GrammarTable::check`]. On error the table is
    /// left untouched.
    pub fn add_group_data(&mut self, decl: &GroupDeclaration) -> Result<(), GrammarError> {
        let name = &decl.name;

        if self.groups.contains_key(name) {
            return Err(GrammarError::DuplicateGroup { name: name.clone() });
        }

        let header =
            HeaderKind::from_tag(&decl.header).ok_or_else(|| GrammarError::UnknownHeaderKind {
                group: name.clone(),
                kind: decl.header.clone(),
            })?;

        let mut expanded = Vec::new();

        for attr in &decl.simple {
            let kind = SimpleKind::from_tag(&attr.kind).ok_or_else(|| {
                GrammarError::UnknownSimpleKind {
                    group: name.clone(),
                    pattern: attr.pattern.clone(),
                    kind: attr.kind.clone(),
                }
            })?;
            push_keys(&mut expanded, &attr.pattern, HandlerId::simple(kind))?;
        }

        for attr in &decl.complex {
            let kind = ComplexKind::from_tag(&attr.kind).ok_or_else(|| {
                GrammarError::UnknownComplexKind {
                    group: name.clone(),
                    pattern: attr.pattern.clone(),
                    kind: attr.kind.clone(),
                }
            })?;
            push_keys(&mut expanded, &attr.pattern, HandlerId::complex(kind))?;
        }

        for attr in &decl.groups {
            push_keys(&mut expanded, &attr.pattern, HandlerId::group(&attr.kind))?;
        }

        debug!("Adding group ({name})");
        self.groups.insert(name.clone(), header);

        let mut keys = HashSet::new();
        for (key, handler) in expanded {
            if !keys.insert(key.clone()) {
                self.warnings.push(GrammarWarning::DuplicateKeyWithinGroup {
                    group: name.clone(),
                    key: key.clone(),
                });
            }
            let compound = compound_key(name, &key);
            trace!("Inserting entry ({compound} -> {handler})");
            self.entries.insert(compound, handler);
        }

        for attr in &decl.groups {
            self.required.insert(attr.kind.clone());
        }

        Ok(())
    }

    /// Merges `source` into this table.
    ///
    /// Definitions already registered here win; every collision is recorded
    /// as a warning. Nested group references are always carried over.
    pub fn merge(&mut self, source: GrammarTable) {
        self.warnings.extend(source.warnings);

        for (name, header) in source.groups {
            if self.groups.contains_key(&name) {
                self.warnings.push(GrammarWarning::DuplicateGroupOnMerge { name });
                continue;
            }
            self.groups.insert(name, header);
        }

        for (key, handler) in source.entries {
            if self.entries.contains_key(&key) {
                self.warnings.push(GrammarWarning::DuplicateKeyOnMerge { key });
                continue;
            }
            self.entries.insert(key, handler);
        }

        self.required.extend(source.required);
    }

    /// Checks that every referenced group kind is defined.
    ///
    /// All undefined references are reported at once.
    pub fn check(&self) -> Result<(), CheckError> {
        let mut check_error = CheckError::default();

        for name in &self.required {
            if !self.groups.contains_key(name) {
                check_error
                    .related
                    .push(GrammarError::UndefinedGroup { name: name.clone() });
            }
        }

        if check_error.related.is_empty() {
            Ok(())
        } else {
            Err(check_error)
        }
    }

    pub fn header(&self, group: &str) -> Option<HeaderKind> {
        self.groups.get(group).copied()
    }

    pub fn handler(&self, group: &str, key: &str) -> Option<&HandlerId> {
        self.entries.get(&compound_key(group, key))
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, HeaderKind)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &HandlerId)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(|x| x.as_str())
    }

    pub fn warnings(&self) -> &[GrammarWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<GrammarWarning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn dump_groups(&self) -> String {
        let mut ret = String::new();
        let width = self.groups.keys().map(|x| x.len()).max().unwrap_or(0);
        for (name, header) in &self.groups {
            ret.push_str(&format!(
                "{name:<width$} {header} ({})\n",
                header.header_name()
            ));
        }
        ret
    }

    pub fn dump_required(&self) -> String {
        let mut ret = String::new();
        for name in &self.required {
            let mark = if self.groups.contains_key(name) {
                ""
            } else {
                " (undefined)"
            };
            ret.push_str(&format!("{name}{mark}\n"));
        }
        ret
    }
}

fn push_keys(
    expanded: &mut Vec<(String, HandlerId)>,
    pattern: &str,
    handler: HandlerId,
) -> Result<(), GrammarError> {
    for key in expand(pattern)? {
        expanded.push((key, handler.clone()));
    }
    Ok(())
}

impl fmt::Display for GrammarTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, handler) in &self.entries {
            writeln!(f, "{key} {handler}")?;
        }
        Ok(())
    }
}
