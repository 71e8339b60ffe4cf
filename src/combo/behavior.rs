//! Deciding whether a combo category is charged per unit or per head.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::config::{CATEGORY_TYPOS, PROTEIN_KEYWORDS};
use crate::model::{CategorySelection, SelectionBehavior};

/// Policy for categories that carry no explicit behavior tag.
pub trait CategoryBehaviorResolver {
    /// Resolve the behavior of an untagged category.
    fn resolve(&self, category: &CategorySelection) -> SelectionBehavior;
}

/// Infers the protein behavior from the category name.
///
/// Names such as "Proteins", "Choose your meat" or "Entrées" are charged per
/// unit; everything else is a per-head choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordBehaviorResolver;

impl CategoryBehaviorResolver for KeywordBehaviorResolver {
    fn resolve(&self, category: &CategorySelection) -> SelectionBehavior {
        if is_protein_category_name(&category.category_name) {
            SelectionBehavior::Quantity
        } else {
            SelectionBehavior::Choice
        }
    }
}

/// Treats every untagged category as a per-head choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictBehaviorResolver;

impl CategoryBehaviorResolver for StrictBehaviorResolver {
    fn resolve(&self, _category: &CategorySelection) -> SelectionBehavior {
        SelectionBehavior::Choice
    }
}

/// The behavior a category is charged with: its tag if it has one,
/// otherwise whatever the resolver decides.
pub fn effective_behavior(
    resolver: &dyn CategoryBehaviorResolver,
    category: &CategorySelection,
) -> SelectionBehavior {
    category
        .selection_behavior
        .unwrap_or_else(|| resolver.resolve(category))
}

/// Fold a category name for matching: strip accents, lower-case, turn
/// punctuation into spaces and fix common misspellings.
pub fn normalize_category_name(name: &str) -> String {
    let folded: String = name
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    folded
        .split_whitespace()
        .map(|word| {
            CATEGORY_TYPOS
                .iter()
                .find(|(typo, _)| *typo == word)
                .map(|(_, fixed)| *fixed)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a normalized category name contains one of the protein
/// keywords anywhere, so "Meatballs" counts as well as "Meats".
pub fn is_protein_category_name(name: &str) -> bool {
    let normalized = normalize_category_name(name);
    PROTEIN_KEYWORDS.iter().any(|kw| normalized.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category_name() {
        assert_eq!(normalize_category_name("  Entrées  "), "entrees");
        assert_eq!(normalize_category_name("Choose your PROTIEN!"), "choose your protein");
        assert_eq!(normalize_category_name("Main-Dishes"), "main dishes");
        assert_eq!(normalize_category_name(""), "");
    }

    #[test]
    fn test_protein_names() {
        for name in [
            "Protein",
            "Proteins",
            "Meats",
            "Main",
            "Main Dish",
            "Main Dishes",
            "Entrée",
            "ENTREES",
            "Main Proteins",
            "Protien choice",
            "Choose your meat (pick 2)",
            "Meatballs",
            "Proteinbowls",
        ] {
            assert!(is_protein_category_name(name), "{}", name);
        }
    }

    #[test]
    fn test_choice_names() {
        for name in ["Sides", "Sauces", "Drinks", "Desserts", ""] {
            assert!(!is_protein_category_name(name), "{}", name);
        }
    }

    #[test]
    fn test_explicit_tag_wins() {
        let tagged = CategorySelection::new("c1", "Sides").with_behavior(SelectionBehavior::Quantity);
        assert_eq!(
            effective_behavior(&KeywordBehaviorResolver, &tagged),
            SelectionBehavior::Quantity
        );

        let tagged = CategorySelection::new("c2", "Proteins").with_behavior(SelectionBehavior::Choice);
        assert_eq!(
            effective_behavior(&KeywordBehaviorResolver, &tagged),
            SelectionBehavior::Choice
        );
    }

    #[test]
    fn test_untagged_uses_resolver() {
        let category = CategorySelection::new("c1", "Proteins");
        assert_eq!(
            effective_behavior(&KeywordBehaviorResolver, &category),
            SelectionBehavior::Quantity
        );
        assert_eq!(
            effective_behavior(&StrictBehaviorResolver, &category),
            SelectionBehavior::Choice
        );
    }
}
