use std::fmt;

/// A fixed universe of kind tags
pub trait Kind: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|x| x.as_str() == tag)
    }
}

/// Value parser of a simple attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    Int,
    Float,
    String,
    Bool,
    DelayModel,
    Direction,
    Expr,
    Function,
    TimingSense,
    TimingType,
    VarType,
}

impl Kind for SimpleKind {
    const ALL: &'static [Self] = &[
        SimpleKind::Int,
        SimpleKind::Float,
        SimpleKind::String,
        SimpleKind::Bool,
        SimpleKind::DelayModel,
        SimpleKind::Direction,
        SimpleKind::Expr,
        SimpleKind::Function,
        SimpleKind::TimingSense,
        SimpleKind::TimingType,
        SimpleKind::VarType,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SimpleKind::Int => "int",
            SimpleKind::Float => "float",
            SimpleKind::String => "string",
            SimpleKind::Bool => "bool",
            SimpleKind::DelayModel => "delay_model",
            SimpleKind::Direction => "direction",
            SimpleKind::Expr => "expr",
            SimpleKind::Function => "function",
            SimpleKind::TimingSense => "timing_sense",
            SimpleKind::TimingType => "timing_type",
            SimpleKind::VarType => "vartype",
        }
    }
}

/// Value parser of a complex attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplexKind {
    FloatFloat,
    FloatFloatString,
    FloatString,
    FloatVector,
    IntFloat,
    IntFloatVector,
    IntString,
    IntVector,
    String,
    StringFloat,
    StringInt,
    StringString,
    StringStringString,
    FanoutLength,
    Technology,
    Values,
    IntList,
    StringList,
    VarTypeList,
}

impl Kind for ComplexKind {
    const ALL: &'static [Self] = &[
        ComplexKind::FloatFloat,
        ComplexKind::FloatFloatString,
        ComplexKind::FloatString,
        ComplexKind::FloatVector,
        ComplexKind::IntFloat,
        ComplexKind::IntFloatVector,
        ComplexKind::IntString,
        ComplexKind::IntVector,
        ComplexKind::String,
        ComplexKind::StringFloat,
        ComplexKind::StringInt,
        ComplexKind::StringString,
        ComplexKind::StringStringString,
        ComplexKind::FanoutLength,
        ComplexKind::Technology,
        ComplexKind::Values,
        ComplexKind::IntList,
        ComplexKind::StringList,
        ComplexKind::VarTypeList,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ComplexKind::FloatFloat => "float_float",
            ComplexKind::FloatFloatString => "float_float_string",
            ComplexKind::FloatString => "float_string",
            ComplexKind::FloatVector => "float_vector",
            ComplexKind::IntFloat => "int_float",
            ComplexKind::IntFloatVector => "int_float_vector",
            ComplexKind::IntString => "int_string",
            ComplexKind::IntVector => "int_vector",
            ComplexKind::String => "string",
            ComplexKind::StringFloat => "string_float",
            ComplexKind::StringInt => "string_int",
            ComplexKind::StringString => "string_string",
            ComplexKind::StringStringString => "string_string_string",
            ComplexKind::FanoutLength => "fanout_length",
            ComplexKind::Technology => "technology",
            ComplexKind::Values => "values",
            ComplexKind::IntList => "int_list",
            ComplexKind::StringList => "string_list",
            ComplexKind::VarTypeList => "vartype_list",
        }
    }
}

/// Shape of the argument list introducing a group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderKind {
    Empty,
    Str,
    StrStr,
    StrStrInt,
    OptStr,
}

impl HeaderKind {
    /// Name of the header parser used by generated group wrappers
    pub fn header_name(&self) -> &'static str {
        match self {
            HeaderKind::Empty => "Empty",
            HeaderKind::Str => "Str",
            HeaderKind::StrStr => "StrStr",
            HeaderKind::StrStrInt => "StrStrInt",
            HeaderKind::OptStr => "OptStr",
        }
    }
}

impl Kind for HeaderKind {
    const ALL: &'static [Self] = &[
        HeaderKind::Empty,
        HeaderKind::Str,
        HeaderKind::StrStr,
        HeaderKind::StrStrInt,
        HeaderKind::OptStr,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            HeaderKind::Empty => "empty",
            HeaderKind::Str => "string",
            HeaderKind::StrStr => "string_string",
            HeaderKind::StrStrInt => "string_string_int",
            HeaderKind::OptStr => "opt_string",
        }
    }
}

impl fmt::Display for SimpleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for ComplexKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for HeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}
