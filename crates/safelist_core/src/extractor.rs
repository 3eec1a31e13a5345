//! Lexical extraction of Tailwind class candidates from source text.
//!
//! Source is never parsed. A fixed, ordered list of patterns is applied and
//! every capture is split into tokens. The patterns intentionally
//! over-approximate: any quoted string made only of class-like characters is
//! kept, so route paths or enum tags may end up in the safelist too.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    constants::SEGMENT_SEPARATORS,
    types::{ClassSet, is_token_whitespace},
};

/// `class="flex items-center"` style attributes. Whitespace follows
/// ECMAScript's `\s`: U+FEFF counts, U+0085 does not.
static CLASS_ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class[\s\x{FEFF}--\x{85}]*=[\s\x{FEFF}--\x{85}]*"([^"]+)""#).unwrap()
});

/// `classes!("btn", "btn-primary")` macro invocations
static CLASSES_MACRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"classes!\(([^)]+)\)").unwrap());

/// Any quoted string made only of ASCII class-name characters, either case
static QUOTED_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([a-zA-Z0-9:_/-]+)""#).unwrap());

/// Rules in the order they are applied
fn rules() -> [(&'static str, &'static Regex); 3] {
    [
        ("class-attribute", &*CLASS_ATTRIBUTE_RE),
        ("classes-macro", &*CLASSES_MACRO_RE),
        ("quoted-token", &*QUOTED_TOKEN_RE),
    ]
}

/// Extract the class candidates found in one file's content.
pub fn extract_classes(content: &str) -> ClassSet {
    let mut classes = ClassSet::new();
    extract_classes_into(content, &mut classes);
    classes
}

/// Extract class candidates from `content` straight into `classes`.
///
/// Returns how many tokens were new to the set.
pub fn extract_classes_into(content: &str, classes: &mut ClassSet) -> usize {
    let before = classes.len();
    for (name, rule) in rules() {
        for caps in rule.captures_iter(content) {
            let Some(segment) = caps.get(1) else {
                continue;
            };
            trace!("Rule {} captured segment: {:?}", name, segment.as_str());
            classes.extend(split_segment(segment.as_str()));
        }
    }
    classes.len() - before
}

/// Quotes and commas count as whitespace; runs of whitespace separate tokens.
fn split_segment(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split(|c: char| is_token_whitespace(c) || SEGMENT_SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(set: ClassSet) -> Vec<String> {
        set.into_sorted_vec()
    }

    #[test]
    fn test_all_rules_combined() {
        let content = r#"class="flex items-center" classes!("btn primary") "rounded-sm""#;
        assert_eq!(
            sorted(extract_classes(content)),
            vec!["btn", "flex", "items-center", "primary", "rounded-sm"]
        );
    }

    #[test]
    fn test_no_matches() {
        assert!(extract_classes("fn main() {}").is_empty());
        assert!(extract_classes("").is_empty());
    }

    #[test]
    fn test_class_attribute_with_spacing() {
        let content = r#"html! { <div class = "p-4  text-lg
            font-bold"></div> }"#;
        assert_eq!(sorted(extract_classes(content)), vec!["font-bold", "p-4", "text-lg"]);
    }

    #[test]
    fn test_empty_or_blank_class_attribute_contributes_nothing() {
        assert!(extract_classes(r#"<div class=""></div>"#).is_empty());
        assert!(extract_classes(r#"<div class="   "></div>"#).is_empty());
    }

    #[test]
    fn test_classes_macro_splits_on_quotes_and_commas() {
        let content = r#"let c = classes!("px-4", 'py-2',"shadow");"#;
        assert_eq!(sorted(extract_classes(content)), vec!["px-4", "py-2", "shadow"]);
    }

    #[test]
    fn test_classes_macro_over_captures_expressions() {
        // Bare identifiers inside the macro are kept as well
        let content = r#"classes!("btn", active.then_some("btn-active"))"#;
        let classes = extract_classes(content);
        assert!(classes.contains("btn"));
        assert!(classes.contains("btn-active"));
        assert!(classes.contains("active.then_some("));
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_classes_macro_spanning_lines() {
        let content = "classes!(\n    \"grid\",\n    \"grid-cols-3\",\n)";
        assert_eq!(sorted(extract_classes(content)), vec!["grid", "grid-cols-3"]);
    }

    #[test]
    fn test_fallback_accepts_variants_and_fractions() {
        let content = r#"let a = "hover:bg-blue-500"; let b = "w-1/2"; let c = "md:px_2";"#;
        assert_eq!(sorted(extract_classes(content)), vec!["hover:bg-blue-500", "md:px_2", "w-1/2"]);
    }

    #[test]
    fn test_fallback_is_case_insensitive() {
        let content = r#"let variant = "Primary";"#;
        assert_eq!(sorted(extract_classes(content)), vec!["Primary"]);
    }

    #[test]
    fn test_fallback_is_ascii_only() {
        // Kelvin sign and long s case-fold to ASCII letters under Unicode rules
        assert!(extract_classes("\"\u{212A}\" \"\u{17F}x\"").is_empty());
        assert!(extract_classes("\"caf\u{e9}\"").is_empty());
    }

    #[test]
    fn test_byte_order_mark_separates_tokens() {
        let classes = extract_classes("class=\"flex\u{feff}p-4\"");
        assert_eq!(sorted(classes), vec!["flex", "p-4"]);

        let classes = extract_classes("class\u{feff}=\u{feff}\"grid gap-2\"");
        assert_eq!(sorted(classes), vec!["gap-2", "grid"]);
    }

    #[test]
    fn test_next_line_does_not_separate_tokens() {
        let classes = extract_classes("class=\"flex\u{85}p-4\"");
        assert_eq!(sorted(classes), vec!["flex\u{85}p-4"]);

        // Not accepted around `=` either
        assert!(extract_classes("class\u{85}=\"grid gap-2\"").is_empty());
    }

    #[test]
    fn test_fallback_rejects_disallowed_characters() {
        let classes = extract_classes(r#"println!("Hello World!");"#);
        assert!(!classes.contains("Hello World!"));
        assert!(classes.is_empty());

        assert!(extract_classes(r#"let s = "a.b";"#).is_empty());
    }

    #[test]
    fn test_fallback_over_captures_route_paths() {
        let content = r#"Route::new("/dashboard/settings")"#;
        assert_eq!(sorted(extract_classes(content)), vec!["/dashboard/settings"]);
    }

    #[test]
    fn test_duplicates_across_rules_collapse() {
        let content = r#"class="flex gap-2" let x = "flex"; classes!("gap-2")"#;
        assert_eq!(sorted(extract_classes(content)), vec!["flex", "gap-2"]);
    }

    #[test]
    fn test_extract_into_accumulates() {
        let mut classes = ClassSet::new();
        assert_eq!(extract_classes_into(r#""a" "b""#, &mut classes), 2);
        assert_eq!(extract_classes_into(r#""b" "c""#, &mut classes), 1);
        assert_eq!(sorted(classes), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_segment() {
        let tokens: Vec<&str> = split_segment(" \"a\",'b' ,\t c\n").collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
        assert_eq!(split_segment(" , ' \" ").count(), 0);
    }
}
