use serde::{Deserialize, Serialize};

/// One `(pattern, kind)` pair of a group declaration
///
/// Serialized as a two element array: `["(fall|rise)_capacitance", "float"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct AttrDeclaration {
    pub pattern: String,
    pub kind: String,
}

impl AttrDeclaration {
    pub fn new(pattern: &str, kind: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl From<(String, String)> for AttrDeclaration {
    fn from((pattern, kind): (String, String)) -> Self {
        Self { pattern, kind }
    }
}

impl From<AttrDeclaration> for (String, String) {
    fn from(value: AttrDeclaration) -> Self {
        (value.pattern, value.kind)
    }
}

impl From<(&str, &str)> for AttrDeclaration {
    fn from((pattern, kind): (&str, &str)) -> Self {
        Self::new(pattern, kind)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDeclaration {
    pub name: String,
    pub header: String,
    #[serde(default)]
    pub simple: Vec<AttrDeclaration>,
    #[serde(default)]
    pub complex: Vec<AttrDeclaration>,
    #[serde(default)]
    pub groups: Vec<AttrDeclaration>,
}

impl GroupDeclaration {
    pub fn new(name: &str, header: &str) -> Self {
        Self {
            name: name.to_string(),
            header: header.to_string(),
            ..Default::default()
        }
    }

    pub fn with_simple(mut self, attrs: &[(&str, &str)]) -> Self {
        self.simple
            .extend(attrs.iter().copied().map(AttrDeclaration::from));
        self
    }

    pub fn with_complex(mut self, attrs: &[(&str, &str)]) -> Self {
        self.complex
            .extend(attrs.iter().copied().map(AttrDeclaration::from));
        self
    }

    pub fn with_groups(mut self, attrs: &[(&str, &str)]) -> Self {
        self.groups
            .extend(attrs.iter().copied().map(AttrDeclaration::from));
        self
    }
}
