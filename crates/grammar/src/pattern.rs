use crate::grammar_error::{GrammarError, PatternErrorCause};

/// Maximum number of alternation groups in one pattern
pub const MAX_ALTERNATIONS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Choice(Vec<String>),
}

fn parse(pattern: &str) -> Result<Vec<Segment>, GrammarError> {
    let malformed = |cause| GrammarError::MalformedPattern {
        pattern: pattern.to_string(),
        cause,
    };

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut choice: Option<Vec<String>> = None;
    let mut alternative = String::new();

    for c in pattern.chars() {
        if let Some(alternatives) = &mut choice {
            match c {
                '(' => return Err(malformed(PatternErrorCause::NestedGroup)),
                '|' => alternatives.push(std::mem::take(&mut alternative)),
                ')' => {
                    alternatives.push(std::mem::take(&mut alternative));
                    segments.push(Segment::Choice(std::mem::take(alternatives)));
                    choice = None;
                }
                c => alternative.push(c),
            }
        } else {
            match c {
                '(' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    choice = Some(Vec::new());
                }
                ')' => return Err(malformed(PatternErrorCause::UnopenedGroup)),
                '|' => return Err(malformed(PatternErrorCause::StraySeparator)),
                c => literal.push(c),
            }
        }
    }

    if choice.is_some() {
        return Err(malformed(PatternErrorCause::UnclosedGroup));
    }
    if !literal.is_empty() || segments.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Expands an attribute name pattern into every literal key it denotes.
///
/// `(a|b)` is an alternation group. Groups are combined as a cartesian
/// product in order of appearance with the last group varying fastest, so
/// `(input|output)_pct_(fall|rise)` yields `input_pct_fall`, `input_pct_rise`,
/// `output_pct_fall`, `output_pct_rise`. Alternatives may be empty.
pub fn expand(pattern: &str) -> Result<Vec<String>, GrammarError> {
    let segments = parse(pattern)?;

    let groups = segments
        .iter()
        .filter(|x| matches!(x, Segment::Choice(_)))
        .count();
    if groups > MAX_ALTERNATIONS {
        return Err(GrammarError::PatternTooDeep {
            pattern: pattern.to_string(),
            groups,
        });
    }

    let mut ret = vec![String::new()];
    for segment in &segments {
        match segment {
            Segment::Literal(x) => {
                for key in &mut ret {
                    key.push_str(x);
                }
            }
            Segment::Choice(alternatives) => {
                let mut next = Vec::with_capacity(ret.len() * alternatives.len());
                for key in &ret {
                    for alternative in alternatives {
                        next.push(format!("{key}{alternative}"));
                    }
                }
                ret = next;
            }
        }
    }

    Ok(ret)
}
