//! Live text filter over the ordered category list.

use std::collections::BTreeMap;

use crate::model::Website;

/// Narrows `categories` (in display order) to those matching `query` as a
/// case-insensitive substring of the category name or of any contained
/// website's title, url, or description.
///
/// An empty query returns every category unchanged. Matching is
/// non-destructive: a matched category keeps all of its websites.
pub fn filter_categories<'a>(
    categories: &'a [String],
    library: &BTreeMap<String, Vec<Website>>,
    query: &str,
) -> Vec<&'a str> {
    if query.is_empty() {
        return categories.iter().map(String::as_str).collect();
    }
    let needle = query.to_lowercase();
    categories
        .iter()
        .filter(|category| {
            if category.to_lowercase().contains(&needle) {
                return true;
            }
            library
                .get(category.as_str())
                .is_some_and(|websites| websites.iter().any(|site| website_matches(site, &needle)))
        })
        .map(String::as_str)
        .collect()
}

fn website_matches(site: &Website, needle: &str) -> bool {
    site.title.to_lowercase().contains(needle)
        || site.url.to_lowercase().contains(needle)
        || site.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    #[test]
    fn empty_query_returns_all_categories_in_order() {
        let state = seed::seeded();

        let filtered = filter_categories(&state.categories, &state.library, "");

        assert_eq!(
            filtered,
            vec!["Development", "Design", "Productivity", "Learning"]
        );
    }

    #[test]
    fn website_field_match_selects_only_the_owning_category() {
        let state = seed::seeded();

        // "git" only hits the GitHub entry under Development.
        assert_eq!(
            filter_categories(&state.categories, &state.library, "git"),
            vec!["Development"]
        );
    }

    #[test]
    fn category_name_match_is_case_insensitive() {
        let state = seed::seeded();

        assert_eq!(
            filter_categories(&state.categories, &state.library, "dEsIgN"),
            vec!["Design"]
        );
    }

    #[test]
    fn description_and_url_fields_participate() {
        let state = seed::seeded();

        // "boards" only appears in Trello's description.
        assert_eq!(
            filter_categories(&state.categories, &state.library, "boards"),
            vec!["Productivity"]
        );
        assert_eq!(
            filter_categories(&state.categories, &state.library, "coursera.org"),
            vec!["Learning"]
        );
    }

    #[test]
    fn no_match_returns_empty() {
        let state = seed::seeded();

        let filtered = filter_categories(&state.categories, &state.library, "zzzz");

        assert!(filtered.is_empty());
    }
}
