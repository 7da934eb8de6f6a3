//! `{name}` placeholder substitution.
//!
//! Used for prompt templates and for the backend command line. `{{` and `}}`
//! render literal braces, so JSON examples inside prompts must be escaped.
//! Referencing a variable that was not supplied is an error rather than an
//! empty substitution.

use crate::error::ProdgenError;
use std::collections::HashMap;
use thiserror::Error;

/// Variables available to a template.
pub type TemplateVars = HashMap<String, String>;

/// Why a template could not be rendered. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

impl From<TemplateError> for ProdgenError {
    fn from(err: TemplateError) -> Self {
        ProdgenError::ConfigError(err.to_string())
    }
}

/// Render `template`, replacing each `{name}` with its value from `variables`.
///
/// ```
/// use prodgen::prompt::{render_template, vars};
///
/// let rendered = render_template(
///     "PRODUCT: {name}\nExample: {{\"category\": \"...\"}}",
///     &vars([("name", "Trail Pack")]),
/// )
/// .unwrap();
/// assert_eq!(rendered, "PRODUCT: Trail Pack\nExample: {\"category\": \"...\"}");
/// ```
pub fn render_template(template: &str, variables: &TemplateVars) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position });
                }

                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    })?;
                out.push_str(value);
            }
            '}' => {
                // `}}` and a lone `}` both render as `}`.
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

/// Build template variables from key/value pairs.
pub fn vars<I, K, V>(pairs: I) -> TemplateVars
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
