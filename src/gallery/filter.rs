//! Visibility rule for catalog items.
//!
//! An item is visible when it belongs to the active category (or the category
//! is `all`) and its title or description contains the normalized query.
//! Results are catalog positions in original order, never ranked.

use crate::catalog::{Catalog, Item};

/// Category selection: the `all` sentinel or a single tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag == crate::catalog::ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => crate::catalog::ALL_CATEGORIES,
            CategoryFilter::Only(tag) => tag,
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => item.category == *tag,
        }
    }
}

/// Lowercase and trim raw search input.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `item` passes the text predicate for an already normalized query.
pub fn matches_query(item: &Item, query: &str) -> bool {
    query.is_empty()
        || item.title.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
}

/// Recompute the visible subset as catalog positions.
pub fn recompute(catalog: &Catalog, category: &CategoryFilter, query: &str) -> Vec<usize> {
    catalog
        .items()
        .iter()
        .filter(|item| category.matches(item) && matches_query(item, query))
        .map(|item| item.position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemEntry;
    use proptest::prelude::*;

    fn catalog(items: &[(&str, &str, &str)]) -> Catalog {
        Catalog::from_entries(
            items
                .iter()
                .map(|(category, title, description)| ItemEntry {
                    category: category.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    image: String::new(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn sample() -> Catalog {
        catalog(&[
            ("nature", "Mountain Lake", "Still water"),
            ("city", "Night Lights", "Downtown after dark"),
            ("nature", "Forest Path", "A trail under pines"),
        ])
    }

    #[test]
    fn test_category_only() {
        let catalog = sample();
        let visible = recompute(&catalog, &CategoryFilter::parse("nature"), "");
        assert_eq!(visible, vec![0, 2]);
    }

    #[test]
    fn test_query_across_all_categories() {
        let catalog = sample();
        let visible = recompute(&catalog, &CategoryFilter::All, "lake");
        assert_eq!(visible, vec![0]);
    }

    #[test]
    fn test_query_matches_description() {
        let catalog = sample();
        let visible = recompute(&catalog, &CategoryFilter::All, "dark");
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn test_category_and_query_combined() {
        let catalog = sample();
        assert_eq!(
            recompute(&catalog, &CategoryFilter::parse("city"), "lake"),
            Vec::<usize>::new()
        );
        assert_eq!(
            recompute(&catalog, &CategoryFilter::parse("nature"), "pa"),
            vec![2]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(recompute(&catalog, &CategoryFilter::All, "").is_empty());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Mountain LAKE "), "mountain lake");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_all_sentinel_round_trip() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.as_str(), "all");
        assert_eq!(CategoryFilter::parse("city").as_str(), "city");
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["a", "b", "c"]),
                "[a-zA-Z ]{0,8}",
                "[a-zA-Z ]{0,8}",
            ),
            0..24,
        )
        .prop_map(|rows| {
            Catalog::from_entries(
                rows.into_iter()
                    .map(|(category, title, description)| ItemEntry {
                        category: category.to_string(),
                        title,
                        description,
                        image: String::new(),
                    })
                    .collect(),
            )
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_visible_set_is_exact_ordered_subsequence(
            catalog in arb_catalog(),
            category in prop::sample::select(vec!["all", "a", "b", "c"]),
            raw_query in "[a-zA-Z ]{0,3}",
        ) {
            let category = CategoryFilter::parse(category);
            let query = normalize_query(&raw_query);
            let visible = recompute(&catalog, &category, &query);

            // Strictly increasing positions: original order, no duplicates
            prop_assert!(visible.windows(2).all(|w| w[0] < w[1]));

            for item in catalog.items() {
                let expected = category.matches(item) && matches_query(item, &query);
                prop_assert_eq!(visible.contains(&item.position), expected);
            }

            // Recomputing is stable
            prop_assert_eq!(recompute(&catalog, &category, &query), visible);
        }
    }
}
