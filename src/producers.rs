//! Producer list parsing.
//!
//! Attribution fields are free text such as `"Jane Doe and Big Studio, Another Co."`.
//! Commas and the standalone word `and` separate names; `and` inside a longer
//! word (`Anderson`, `Brand`) is part of the name.

use once_cell::sync::Lazy;
use regex::Regex;

/// The conjunction as a whole word. Whitespace on both sides is checked separately
/// so that adjacent conjunctions (`A and and B`) are each seen.
static CONJUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\band\b").expect("valid regex"));

/// `", and"` / `"and ,"` sequences, with any surrounding whitespace.
static COMPOUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*and\b\s*|\band\s*,\s*").expect("valid regex"));

/// Split an attribution field into trimmed producer names, in input order.
///
/// Never fails: malformed delimiter runs only produce fewer, longer names.
/// No case-folding and no deduplication are performed.
pub fn split(text: &str) -> Vec<String> {
    let isolated = isolate_conjunctions(text);
    let collapsed = COMPOUND.replace_all(&isolated, ",");

    collapsed
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrite every `and` with whitespace on both sides to a comma.
fn isolate_conjunctions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in CONJUNCTION.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();

        if before.is_some_and(char::is_whitespace) && after.is_some_and(char::is_whitespace) {
            out.push_str(&text[last..m.start()]);
            out.push(',');
            last = m.end();
        }
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_isolated_and() {
        assert_eq!(split("A and B"), vec!["A", "B"]);
    }

    #[test]
    fn test_comma_then_and() {
        assert_eq!(split("A, B and C"), vec!["A", "B", "C"]);
        assert_eq!(split("A, and B"), vec!["A", "B"]);
        assert_eq!(split("A,and B"), vec!["A", "B"]);
    }

    #[test]
    fn test_and_then_comma() {
        assert_eq!(split("A and, B"), vec!["A", "B"]);
        assert_eq!(split("A and , B"), vec!["A", "B"]);
    }

    #[test]
    fn test_and_inside_word_is_kept() {
        assert_eq!(split("Anderson and Bell"), vec!["Anderson", "Bell"]);
        assert_eq!(split("Andersson"), vec!["Andersson"]);
        assert_eq!(split("Brand, Sandy"), vec!["Brand", "Sandy"]);
        assert_eq!(split("Mel Brooks, andrew Bergman"), vec!["Mel Brooks", "andrew Bergman"]);
    }

    #[test]
    fn test_conjunction_is_case_sensitive() {
        assert_eq!(split("Law AND Order"), vec!["Law AND Order"]);
    }

    #[test]
    fn test_repeated_conjunction() {
        assert_eq!(split("A and and B"), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
        assert!(split(" , ,, ").is_empty());
        assert_eq!(split("  A  "), vec!["A"]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(split(", A, B,"), vec!["A", "B"]);
    }

    #[test]
    fn test_mixed_attribution() {
        assert_eq!(
            split("Jane Doe and Big Studio, Another Co."),
            vec!["Jane Doe", "Big Studio", "Another Co."]
        );
        assert_eq!(
            split("Producer A and Producer B, Producer C and Producer D"),
            vec!["Producer A", "Producer B", "Producer C", "Producer D"]
        );
    }

    #[test]
    fn test_no_dedup_no_case_folding() {
        assert_eq!(split("Bo Derek and bo derek and Bo Derek"), vec!["Bo Derek", "bo derek", "Bo Derek"]);
    }

    #[test]
    fn test_conjunction_at_edges_is_text() {
        assert_eq!(split("and Co"), vec!["and Co"]);
        assert_eq!(split("Smith and"), vec!["Smith and"]);
    }

    fn attribution() -> impl Strategy<Value = String> {
        let token = prop::sample::select(vec![
            "A", "Bell", "Anderson", "Brand", "and", ",", " ", "  ", "Co.",
        ]);
        prop::collection::vec(token, 0..14).prop_map(|tokens| tokens.concat())
    }

    proptest! {
        #[test]
        fn resplitting_joined_names_is_stable(text in attribution()) {
            let names = split(&text);
            prop_assert_eq!(split(&names.join(", ")), names.clone());
            for name in &names {
                prop_assert!(!name.trim().is_empty());
                prop_assert!(!name.contains(','));
            }
        }
    }
}
