//! # Safe Template Interpolation
//!
//! Templates use `${path}` placeholders, where `path` is a dotted lookup into a
//! JSON variables object (`${user.name}`, `${items.0}`).
//!
//! ## No Evaluation
//!
//! Placeholder contents are **never** evaluated. Only plain dotted paths are
//! resolved; anything else (`${1 + 1}`, `${alert()}`) renders as an empty string.
//!
//! ## Leniency
//!
//! - Malformed variables JSON, or JSON that is not an object, means "no variables".
//! - A path that does not resolve renders as an empty string.
//!
//! Neither case is an error; both are logged at debug level.
//!
//! ## Stringification
//!
//! Strings render raw, numbers and booleans in their JSON form, `null` renders
//! empty, arrays and objects render as compact JSON.

use super::linkify::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]*)\}").expect("static regex"));
static DOTTED_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z0-9_$]+)*$").expect("static regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TemplatePart {
    Literal(String),
    Expr(String),
}

/// Parses variables JSON, falling back to an empty object.
pub fn parse_variables(json: &str) -> Value {
    if json.trim().is_empty() {
        return Value::Object(Map::new());
    }
    match serde_json::from_str::<Value>(json) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            tracing::debug!("template variables are not an object, using none");
            Value::Object(Map::new())
        }
        Err(e) => {
            tracing::debug!(error = %e, "template variables are malformed, using none");
            Value::Object(Map::new())
        }
    }
}

pub fn is_dotted_path(expr: &str) -> bool {
    DOTTED_PATH.is_match(expr)
}

/// Walks `path` through nested objects (and arrays, by numeric segment).
pub fn resolve_path<'a>(vars: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(vars, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn lookup(vars: &Value, expr: &str) -> String {
    let expr = expr.trim();
    if !is_dotted_path(expr) {
        tracing::debug!(expr, "placeholder is not a plain path, rendering empty");
        return String::new();
    }
    resolve_path(vars, expr).map(stringify).unwrap_or_default()
}

pub fn interpolate(template: &str, vars_json: &str) -> String {
    let vars = parse_variables(vars_json);
    interpolate_with(template, &vars)
}

pub fn interpolate_with(template: &str, vars: &Value) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| lookup(vars, &caps[1]))
        .into_owned()
}

/// Splits a template into literal text and `${...}` expressions. An unterminated
/// `${` stays literal.
pub fn split_template(template: &str) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            parts.push(TemplatePart::Literal(template[last..whole.start()].to_string()));
        }
        parts.push(TemplatePart::Expr(caps[1].trim().to_string()));
        last = whole.end();
    }
    if last < template.len() {
        parts.push(TemplatePart::Literal(template[last..].to_string()));
    }

    parts
}

/// Interpolates with every substituted value HTML-escaped; literals pass through.
pub fn render_escaped(template: &str, vars: &Value) -> String {
    split_template(template)
        .into_iter()
        .map(|part| match part {
            TemplatePart::Literal(text) => text,
            TemplatePart::Expr(expr) => escape_html(&lookup(vars, &expr)),
        })
        .collect()
}
