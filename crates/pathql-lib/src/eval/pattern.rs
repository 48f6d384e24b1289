//! Destructuring of lambda parameters.

use indexmap::IndexMap;

use super::{EvalError, Value};
use crate::parser::Pattern;

/// Bind `value` against `pattern`, adding every named binding to `bindings`.
///
/// A tuple pattern matches only a tuple value of the same length; names and
/// `_` match anything.
pub fn bind(
    pattern: &Pattern,
    value: Value,
    bindings: &mut IndexMap<String, Value>,
) -> Result<(), EvalError> {
    match pattern {
        Pattern::Name(p) => {
            let Some(name) = p.name() else {
                return Err(EvalError::Incomplete {
                    range: p.text_range(),
                });
            };
            bindings.insert(name.text().to_string(), value);
            Ok(())
        }
        Pattern::Wildcard(_) => Ok(()),
        Pattern::Tuple(p) => {
            let elements: Vec<Pattern> = p.elements().collect();
            match value {
                Value::Tuple(items) if items.len() == elements.len() => {
                    for (element, item) in elements.iter().zip(items) {
                        bind(element, item, bindings)?;
                    }
                    Ok(())
                }
                other => Err(EvalError::PatternMismatch {
                    pattern: p.as_cst().text().to_string(),
                    value: other.to_string(),
                    range: p.text_range(),
                }),
            }
        }
    }
}
