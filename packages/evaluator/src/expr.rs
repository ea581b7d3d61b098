//! Expression evaluation against bound list items.
//!
//! Used by renderers that unroll `Repeat` nodes. Item data is plain
//! `serde_json::Value`; evaluation never fails (missing bindings and paths
//! read as `null`).

use crate::ir::Expr;
use serde_json::Value;
use tracing::warn;

/// Stack of `binding → item` frames, innermost last
#[derive(Debug, Default, Clone)]
pub struct Scope {
    frames: Vec<(String, Value)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, binding: &str, value: Value) {
        self.frames.push((binding.to_string(), value));
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn get(&self, binding: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find(|(name, _)| name == binding)
            .map(|(_, value)| value)
    }
}

pub fn evaluate(expr: &Expr, scope: &Scope) -> Value {
    match expr {
        Expr::Literal(text) => Value::String(text.clone()),

        Expr::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),

        Expr::Field { binding, path } => {
            let Some(mut value) = scope.get(binding) else {
                warn!(binding = %binding, "Binding not found in scope");
                return Value::Null;
            };

            for key in path {
                match value.get(key) {
                    Some(next) => value = next,
                    None => return Value::Null,
                }
            }
            value.clone()
        }

        Expr::Template(parts) => {
            let mut result = String::new();
            for part in parts {
                result.push_str(&to_display_string(&evaluate(part, scope)));
            }
            Value::String(result)
        }

        Expr::Or(left, right) => {
            let left = evaluate(left, scope);
            if is_truthy(&left) {
                left
            } else {
                evaluate(right, scope)
            }
        }

        Expr::Equals(left, right) => Value::Bool(evaluate(left, scope) == evaluate(right, scope)),

        Expr::LessThan(left, right) => {
            let left = evaluate(left, scope).as_f64();
            let right = evaluate(right, scope).as_f64();
            Value::Bool(matches!((left, right), (Some(a), Some(b)) if a < b))
        }

        Expr::Ternary {
            condition,
            then,
            otherwise,
        } => {
            if is_truthy(&evaluate(condition, scope)) {
                evaluate(then, scope)
            } else {
                evaluate(otherwise, scope)
            }
        }
    }
}

pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scope_with(binding: &str, value: Value) -> Scope {
        let mut scope = Scope::new();
        scope.push(binding, value);
        scope
    }

    #[test]
    fn test_field_lookup() {
        let scope = scope_with("plan", json!({ "name": "Pro", "meta": { "tier": 2 } }));

        assert_eq!(evaluate(&Expr::field("plan", "name"), &scope), json!("Pro"));
        assert_eq!(evaluate(&Expr::field("plan", "meta.tier"), &scope), json!(2));
        assert_eq!(evaluate(&Expr::field("plan", "missing"), &scope), Value::Null);
        assert_eq!(evaluate(&Expr::field("other", "name"), &scope), Value::Null);
    }

    #[test]
    fn test_inner_binding_shadows_outer() {
        let mut scope = scope_with("item", json!("outer"));
        scope.push("item", json!("inner"));
        assert_eq!(evaluate(&Expr::field("item", ""), &scope), json!("inner"));

        scope.pop();
        assert_eq!(evaluate(&Expr::field("item", ""), &scope), json!("outer"));
    }

    #[test]
    fn test_or_falls_back_on_falsy() {
        let scope = scope_with("t", json!({ "rating": 0, "badge": "Hot" }));

        let rating = Expr::field("t", "rating").or(Expr::Number(5.0));
        assert_eq!(evaluate(&rating, &scope).as_f64(), Some(5.0));

        let badge = Expr::field("t", "badge").or("Most Popular");
        assert_eq!(evaluate(&badge, &scope), json!("Hot"));
    }

    #[test]
    fn test_star_condition() {
        let mut scope = scope_with("item", json!({ "rating": 4 }));
        let filled = Expr::ternary(
            Expr::field("star", "").less_than(Expr::field("item", "rating").or(Expr::Number(5.0))),
            "star",
            "star_border",
        );

        let icons: Vec<String> = (0..5)
            .map(|k| {
                scope.push("star", json!(k));
                let icon = to_display_string(&evaluate(&filled, &scope));
                scope.pop();
                icon
            })
            .collect();

        assert_eq!(icons, vec!["star", "star", "star", "star", "star_border"]);
    }

    #[test]
    fn test_template_and_equals() {
        let scope = scope_with("f", json!({ "type": "textarea", "quote": "Hi" }));

        let quoted = Expr::Template(vec![
            Expr::from("\""),
            Expr::field("f", "quote"),
            Expr::from("\""),
        ]);
        assert_eq!(evaluate(&quoted, &scope), json!("\"Hi\""));

        let is_textarea = Expr::field("f", "type").equals("textarea");
        assert!(is_truthy(&evaluate(&is_textarea, &scope)));
    }
}
