//! Identifier to path-segment conversion.

use serde::{Deserialize, Serialize};

/// How identifier names become URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasingStyle {
    /// `FooBar` -> `fooBar`
    #[default]
    LowerCamel,
    /// `FooBar` -> `foo-bar`
    Kebab,
}

/// Convert `name` into a path segment under `style`.
pub fn to_path_segment(name: &str, style: CasingStyle) -> String {
    match style {
        CasingStyle::LowerCamel => lower_camel(name),
        CasingStyle::Kebab => kebab(name),
    }
}

fn lower_camel(name: &str) -> String {
    // blank input passes through untouched
    if name.trim().is_empty() {
        return name.to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }
    let out = out.to_lowercase();
    match out.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}
