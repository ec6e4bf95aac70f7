use miette::{self, Diagnostic};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternErrorCause {
    UnclosedGroup,
    UnopenedGroup,
    NestedGroup,
    StraySeparator,
}

impl fmt::Display for PatternErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            PatternErrorCause::UnclosedGroup => "\"(\" is not closed",
            PatternErrorCause::UnopenedGroup => "\")\" has no matching \"(\"",
            PatternErrorCause::NestedGroup => "alternation groups can't be nested",
            PatternErrorCause::StraySeparator => "\"|\" is placed outside of alternation group",
        };
        text.fmt(f)
    }
}

#[derive(Error, Diagnostic, Clone, Debug, PartialEq, Eq)]
pub enum GrammarError {
    #[diagnostic(
        severity(Error),
        code(duplicate_group),
        help("remove or rename one of the definitions")
    )]
    #[error("group {name} is already defined")]
    DuplicateGroup { name: String },

    #[diagnostic(
        severity(Error),
        code(unknown_header_kind),
        help("use one of empty, string, string_string, string_string_int, opt_string")
    )]
    #[error("{kind} is not a valid header kind ({group})")]
    UnknownHeaderKind { group: String, kind: String },

    #[diagnostic(severity(Error), code(unknown_simple_kind), help(""))]
    #[error("{kind} is not a valid simple attribute kind ({group}:{pattern})")]
    UnknownSimpleKind {
        group: String,
        pattern: String,
        kind: String,
    },

    #[diagnostic(severity(Error), code(unknown_complex_kind), help(""))]
    #[error("{kind} is not a valid complex attribute kind ({group}:{pattern})")]
    UnknownComplexKind {
        group: String,
        pattern: String,
        kind: String,
    },

    #[diagnostic(
        severity(Error),
        code(pattern_too_deep),
        help("split the pattern into several patterns with 3 or fewer alternation groups")
    )]
    #[error("pattern {pattern} has {groups} alternation groups")]
    PatternTooDeep { pattern: String, groups: usize },

    #[diagnostic(severity(Error), code(malformed_pattern), help(""))]
    #[error("pattern {pattern} is malformed: {cause}")]
    MalformedPattern {
        pattern: String,
        cause: PatternErrorCause,
    },

    #[diagnostic(
        severity(Error),
        code(undefined_group),
        help("declare the group in one of the merged modules")
    )]
    #[error("group {name} is referenced but undefined")]
    UndefinedGroup { name: String },
}

#[derive(Error, Diagnostic, Clone, Debug, PartialEq, Eq)]
pub enum GrammarWarning {
    #[diagnostic(
        severity(Warning),
        code(duplicate_key_within_group),
        help("the later declaration overwrites the earlier one")
    )]
    #[error("{key} appears more than once in group {group}")]
    DuplicateKeyWithinGroup { group: String, key: String },

    #[diagnostic(
        severity(Warning),
        code(duplicate_group_on_merge),
        help("the first registered definition is kept")
    )]
    #[error("group {name} is duplicated on merge")]
    DuplicateGroupOnMerge { name: String },

    #[diagnostic(
        severity(Warning),
        code(duplicate_key_on_merge),
        help("the first registered handler is kept")
    )]
    #[error("key {key} is duplicated on merge")]
    DuplicateKeyOnMerge { key: String },
}

#[derive(Error, Diagnostic, Debug, Default)]
#[error("Check error")]
pub struct CheckError {
    #[related]
    pub related: Vec<GrammarError>,
}

impl CheckError {
    /// Names of all undefined groups in reference order
    pub fn undefined(&self) -> Vec<&str> {
        self.related
            .iter()
            .filter_map(|x| match x {
                GrammarError::UndefinedGroup { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}
