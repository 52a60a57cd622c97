//! Minimal template engine with field substitution and filter pipes.
//!
//! # Syntax
//!
//! - `{field}` - Substitutes the value of `field`
//! - `{field | filter}` - Substitutes the value after passing it through a
//!   registered filter; pipes chain left to right
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! # Error Handling
//!
//! The engine is fail-safe: an undefined field or unknown filter causes an
//! error rather than silent substitution with empty strings. This prevents
//! subtle bugs from typos in templates.

use std::collections::HashMap;
use thiserror::Error;

/// A value transform referenced by a `| name` pipe in a template.
pub type Filter = fn(&str) -> String;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A field was referenced but not provided.
    #[error("undefined field '{name}' at position {position} in template")]
    UndefinedField { name: String, position: usize },

    /// A pipe referenced a filter that is not registered.
    #[error("unknown filter '{name}' at position {position} in template")]
    UnknownFilter { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty field name was found (e.g., `{}` or `{ | faint}`).
    #[error("empty field name at position {position} in template")]
    EmptyFieldName { position: usize },
}

/// Template engine holding the registered filter table.
///
/// The built-in filters (`faint`, `cyan`, `red`) are pass-through
/// identities: template documents carry styling directives for the
/// interactive detail view, and registering them as no-ops lets the same
/// document render to plain stdout without error.
pub struct Engine {
    filters: HashMap<String, Filter>,
}

fn identity(s: &str) -> String {
    s.to_string()
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the built-in identity filters registered.
    pub fn new() -> Self {
        let mut filters: HashMap<String, Filter> = HashMap::new();
        filters.insert("faint".to_string(), identity);
        filters.insert("cyan".to_string(), identity);
        filters.insert("red".to_string(), identity);
        Self { filters }
    }

    /// Register an additional filter under the given name.
    #[allow(dead_code)]
    pub fn register<S: Into<String>>(&mut self, name: S, filter: Filter) {
        self.filters.insert(name.into(), filter);
    }

    /// Render a template string by substituting fields.
    ///
    /// # Arguments
    ///
    /// * `template` - The template string containing `{field}` placeholders
    /// * `fields` - A map of field names to their values
    pub fn render(
        &self,
        template: &str,
        fields: &HashMap<String, String>,
    ) -> Result<String, EngineError> {
        let mut result = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    // Check for escape sequence {{
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        result.push('{');
                    } else {
                        let start_pos = pos;
                        let mut directive = String::new();

                        loop {
                            match chars.next() {
                                Some((_, '}')) => break,
                                Some((_, c)) => directive.push(c),
                                None => {
                                    return Err(EngineError::UnmatchedBrace {
                                        position: start_pos,
                                    });
                                }
                            }
                        }

                        result.push_str(&self.resolve(&directive, start_pos, fields)?);
                    }
                }
                '}' => {
                    // Check for escape sequence }}
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                        result.push('}');
                    } else {
                        // Lone } is just a regular character
                        result.push('}');
                    }
                }
                _ => result.push(ch),
            }
        }

        Ok(result)
    }

    /// Resolve a single `field | filter | ...` directive to its value.
    fn resolve(
        &self,
        directive: &str,
        position: usize,
        fields: &HashMap<String, String>,
    ) -> Result<String, EngineError> {
        let mut parts = directive.split('|');

        // split always yields at least one element
        let name = parts.next().unwrap_or("").trim();
        if name.is_empty() {
            return Err(EngineError::EmptyFieldName { position });
        }

        let mut value = match fields.get(name) {
            Some(value) => value.clone(),
            None => {
                return Err(EngineError::UndefinedField {
                    name: name.to_string(),
                    position,
                });
            }
        };

        for part in parts {
            let filter_name = part.trim();
            match self.filters.get(filter_name) {
                Some(filter) => value = filter(&value),
                None => {
                    return Err(EngineError::UnknownFilter {
                        name: filter_name.to_string(),
                        position,
                    });
                }
            }
        }

        Ok(value)
    }
}

/// Helper to create a fields map from a list of key-value pairs.
pub fn fields<I, K, V>(pairs: I) -> HashMap<String, String>
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
