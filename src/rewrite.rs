//! Selector rewriting passes
//!
//! A stylesheet is treated as opaque text. Two substitutions run over it, in
//! this order:
//!
//! 1. [`strip_scope_prefix`]: `.profile-page   .child` becomes `.child`.
//! 2. [`camelize_selectors`]: `.user-info-card {` becomes `.userInfoCard {`.
//!
//! The first pass can expose selectors that were nested under the scope class,
//! which is why it has to run first. [`rewrite_source`] chains both.
//!
//! Nothing here parses CSS. Property names such as `background-color` carry no
//! leading dot and are never candidates, and dotted tokens whose next
//! delimiter is a `:` (pseudo-classes, values) are left alone.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Scope class stripped when no other is configured.
pub const DEFAULT_SCOPE_CLASS: &str = "profile-page";

/// Candidate kebab-case class selectors: a dot and two or more lowercase
/// segments joined by hyphens.
static KEBAB_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-z]+(?:-[a-z]+)+)").expect("kebab selector pattern is valid"));

static DEFAULT_SCOPE_PREFIX: Lazy<Regex> = Lazy::new(|| scope_prefix_regex(DEFAULT_SCOPE_CLASS));

/// Build the pattern for `.<scope_class>` followed by whitespace and the dot
/// of a descendant selector.
fn scope_prefix_regex(scope_class: &str) -> Regex {
    let pattern = format!(r"\.{}\s+\.", regex::escape(scope_class));
    // An escaped literal always compiles.
    Regex::new(&pattern).expect("escaped scope prefix is a valid pattern")
}

/// Remove every `.<scope_class> <ws>+` occurring before a class selector.
///
/// Occurrences of the scope class that are not followed by whitespace and a
/// dot (for instance the rule for the scope class itself) stay untouched.
pub fn strip_scope_prefix<'a>(source: &'a str, scope_class: &str) -> Cow<'a, str> {
    if scope_class == DEFAULT_SCOPE_CLASS {
        DEFAULT_SCOPE_PREFIX.replace_all(source, ".")
    } else {
        scope_prefix_regex(scope_class).replace_all(source, ".")
    }
}

/// Convert kebab-case class selectors to camelCase.
///
/// A candidate is only rewritten when it sits in selector position: looking
/// at the text after it, one of `{`, whitespace, `,` or `.` must show up
/// before any `:`.
pub fn camelize_selectors(source: &str) -> Cow<'_, str> {
    KEBAB_SELECTOR.replace_all(source, |caps: &Captures<'_>| {
        let whole = caps.get(0).expect("group 0 always participates");
        if in_selector_position(&source[whole.end()..]) {
            format!(".{}", to_camel_case(&caps[1]))
        } else {
            whole.as_str().to_string()
        }
    })
}

/// Whether the text following a candidate makes it a selector.
fn in_selector_position(rest: &str) -> bool {
    for c in rest.chars() {
        match c {
            ':' => return false,
            '{' | ',' | '.' => return true,
            c if c.is_whitespace() => return true,
            _ => {}
        }
    }
    false
}

/// `foo-bar-baz` → `fooBarBaz`.
///
/// Only the first character of each later segment is uppercased; the rest is
/// kept verbatim, so `foo-BAR` becomes `fooBAR`. A name without hyphens is
/// returned as is.
pub fn to_camel_case(kebab: &str) -> String {
    let mut parts = kebab.split('-');
    let first = parts.next().unwrap_or_default();
    if !kebab.contains('-') {
        return first.to_string();
    }

    let mut camel = String::with_capacity(kebab.len());
    camel.push_str(first);
    for part in parts {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            camel.extend(head.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// Run both passes over `source`, stripping `scope_class` first.
pub fn rewrite_source(source: &str, scope_class: &str) -> String {
    let stripped = strip_scope_prefix(source, scope_class);
    camelize_selectors(&stripped).into_owned()
}
