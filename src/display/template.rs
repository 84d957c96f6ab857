//! Display template for the remaining time

use std::{fmt, str::FromStr};

use crate::error::TemplateError;

pub const DEFAULT_TEMPLATE: &str = "{minutes}:{seconds}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Minutes,
    Seconds,
}

/// A parsed display template such as `"{minutes}:{seconds}"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a format string taking `{minutes}` and `{seconds}`.
    ///
    /// `{m}` and `{s}` are accepted as short forms, and `{{` / `}}` produce
    /// literal braces.
    pub fn parse(format: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed { position });
                    }

                    let segment = match name.trim() {
                        "minutes" | "m" => Segment::Minutes,
                        "seconds" | "s" => Segment::Seconds,
                        _ => return Err(TemplateError::UnknownPlaceholder { name }),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(TemplateError::StrayClose { position }),
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: format.to_string(),
            segments,
        })
    }

    /// Render a number of seconds as minutes and zero-padded seconds
    pub fn render(&self, remaining_seconds: u64) -> String {
        let minutes = remaining_seconds / 60;
        let seconds = remaining_seconds % 60;

        let mut out = String::with_capacity(self.source.len() + 4);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Minutes => out.push_str(&minutes.to_string()),
                Segment::Seconds => out.push_str(&format!("{:02}", seconds)),
            }
        }
        out
    }

    /// The format string this template was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Minutes,
                Segment::Literal(":".to_string()),
                Segment::Seconds,
            ],
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
