use crate::kind::{ComplexKind, Kind, SimpleKind};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerCategory {
    Simple,
    Complex,
    Group,
}

impl HandlerCategory {
    pub fn prefix(&self) -> &'static str {
        match self {
            HandlerCategory::Simple => "simple",
            HandlerCategory::Complex => "complex",
            HandlerCategory::Group => "group",
        }
    }
}

/// Identifier of the routine parsing one attribute, e.g. `simple_float`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId {
    category: HandlerCategory,
    kind: String,
}

impl HandlerId {
    pub fn new(category: HandlerCategory, kind: &str) -> Self {
        Self {
            category,
            kind: kind.to_string(),
        }
    }

    pub fn simple(kind: SimpleKind) -> Self {
        Self::new(HandlerCategory::Simple, kind.as_str())
    }

    pub fn complex(kind: ComplexKind) -> Self {
        Self::new(HandlerCategory::Complex, kind.as_str())
    }

    pub fn group(kind: &str) -> Self {
        Self::new(HandlerCategory::Group, kind)
    }

    pub fn category(&self) -> HandlerCategory {
        self.category
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.category.prefix(), self.kind)
    }
}
