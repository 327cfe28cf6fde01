//! Filename templates and their compiled matchers.
//!
//! A template is the literal text of a filename with placeholders in braces,
//! e.g. `{subject}_{date}_{vidnum:d}_{modality}.avi`. Placeholders accept a
//! short format spec after a colon: `d` for digits, `w` for word characters,
//! `l` for letters, and `s?` for an optional run that may be empty. A bare
//! `{}` consumes text without reporting it. Literal braces are written
//! doubled, `{{` and `}}`.
//!
//! Compilation turns a template into an anchored regular expression plus the
//! trailing file extension used to pre-filter directory listings.

use std::collections::BTreeMap;

use regex::Regex;

use aotag_model::{DataTag, FormatType};

use crate::error::{IngestError, Result};

/// Trailing characters searched for the extension dot. The final character
/// is excluded, so the shortest usable extension is one letter long.
const EXTENSION_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// `{name}`: any non-empty run, matched lazily.
    Any,
    /// `{name:d}`: decimal digits.
    Digits,
    /// `{name:w}`: word characters.
    Word,
    /// `{name:l}`: ASCII letters.
    Letters,
    /// `{name:s?}`: possibly-empty run; an absent value reads as `""`.
    OptionalString,
}

impl FieldKind {
    fn regex_body(self) -> &'static str {
        match self {
            FieldKind::Any => ".+?",
            FieldKind::Digits => r"\d+",
            FieldKind::Word => r"\w+",
            FieldKind::Letters => "[A-Za-z]+",
            FieldKind::OptionalString => ".*",
        }
    }
}

#[derive(Debug, Clone)]
enum Part {
    Literal(String),
    Placeholder { name: Option<String>, kind: FieldKind },
}

/// One named placeholder of a compiled template, in template order.
#[derive(Debug, Clone)]
pub struct TemplateField {
    name: String,
    kind: FieldKind,
}

impl TemplateField {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for `s?` fields, which match even when nothing is present.
    pub fn is_optional(&self) -> bool {
        self.kind == FieldKind::OptionalString
    }
}

/// A filename template compiled for one format type.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    format: FormatType,
    template: String,
    regex: Regex,
    fields: Vec<TemplateField>,
    extension: String,
}

impl FilenamePattern {
    /// Compiles `template` into a matcher for `format`.
    ///
    /// Fails when the template text is malformed, when two placeholders share
    /// a name, or when no extension can be derived from the template tail.
    pub fn compile(format: FormatType, template: &str) -> Result<FilenamePattern> {
        let parts = parse_parts(format, template)?;
        let fields = parts
            .iter()
            .filter_map(|part| match part {
                Part::Placeholder {
                    name: Some(name),
                    kind,
                } => Some(TemplateField {
                    name: name.clone(),
                    kind: *kind,
                }),
                _ => None,
            })
            .collect();
        let source = regex_source(&parts);
        let regex = Regex::new(&source).map_err(|err| IngestError::Template {
            format,
            template: template.to_string(),
            message: err.to_string(),
        })?;
        let extension = derive_extension(template)
            .ok_or_else(|| IngestError::TemplateExtension {
                format,
                template: template.to_string(),
            })?
            .to_string();
        Ok(FilenamePattern {
            format,
            template: template.to_string(),
            regex,
            fields,
            extension,
        })
    }

    pub fn format(&self) -> FormatType {
        self.format
    }

    /// The template text this matcher was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The trailing extension, dot included, e.g. `.avi`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Named placeholders in template order, vocabulary or not.
    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    /// Matches `filename` against the whole template.
    ///
    /// On a match, returns the captured values for every placeholder whose
    /// name is in the tag vocabulary, keyed by tag name. Optional fields that
    /// matched nothing come back as the empty string. Placeholders named
    /// outside the vocabulary are matched but not reported.
    pub fn matches(&self, filename: &str) -> Option<BTreeMap<String, String>> {
        let captures = self.regex.captures(filename)?;
        let mut values = BTreeMap::new();
        for field in &self.fields {
            let Some(tag) = DataTag::from_name(field.name()) else {
                continue;
            };
            let value = captures
                .name(field.name())
                .map(|m| m.as_str())
                .unwrap_or("");
            values.insert(tag.as_str().to_string(), value.to_string());
        }
        Some(values)
    }
}

fn template_error(format: FormatType, template: &str, message: impl Into<String>) -> IngestError {
    IngestError::Template {
        format,
        template: template.to_string(),
        message: message.into(),
    }
}

fn parse_parts(format: FormatType, template: &str) -> Result<Vec<Part>> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(template_error(format, template, "unclosed '{' placeholder"));
                }
                if !literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut literal)));
                }
                parts.push(parse_placeholder(format, template, &body)?);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(template_error(format, template, "unmatched '}'"));
                }
            }
            _ => literal.push(ch),
        }
    }
    if !literal.is_empty() {
        parts.push(Part::Literal(literal));
    }
    Ok(parts)
}

fn parse_placeholder(format: FormatType, template: &str, body: &str) -> Result<Part> {
    let (name, spec) = match body.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (body, None),
    };
    let kind = match spec {
        None => FieldKind::Any,
        Some("d") => FieldKind::Digits,
        Some("w") => FieldKind::Word,
        Some("l") => FieldKind::Letters,
        Some("s?") => FieldKind::OptionalString,
        Some(other) => {
            return Err(template_error(
                format,
                template,
                format!("unsupported format spec ':{other}'"),
            ));
        }
    };
    if name.is_empty() {
        return Ok(Part::Placeholder { name: None, kind });
    }
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !(head_ok && tail_ok) {
        return Err(template_error(
            format,
            template,
            format!("invalid placeholder name '{name}'"),
        ));
    }
    Ok(Part::Placeholder {
        name: Some(name.to_string()),
        kind,
    })
}

fn regex_source(parts: &[Part]) -> String {
    let mut source = String::from("^");
    for part in parts {
        match part {
            Part::Literal(text) => source.push_str(&regex::escape(text)),
            Part::Placeholder { name, kind } => {
                match name {
                    Some(name) => {
                        source.push_str("(?P<");
                        source.push_str(name);
                        source.push('>');
                    }
                    None => source.push_str("(?:"),
                }
                source.push_str(kind.regex_body());
                source.push(')');
            }
        }
    }
    source.push('$');
    source
}

/// Finds the extension dot in the template tail.
///
/// Only the last [`EXTENSION_WINDOW`] characters are searched, the final one
/// excluded. Returns the template text from the dot onward.
fn derive_extension(template: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = template.char_indices().collect();
    if chars.len() < 2 {
        return None;
    }
    let start = chars.len().saturating_sub(EXTENSION_WINDOW);
    let window = &chars[start..chars.len() - 1];
    window
        .iter()
        .rev()
        .find(|(_, c)| *c == '.')
        .map(|&(idx, _)| &template[idx..])
}
