//! Canonical session seed. State is in-memory only, so this is the whole of
//! "persistence": every session starts from the same library.

use crate::model::{LibraryState, Website};

const SEED: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Development",
        &[
            (
                "GitHub",
                "https://github.com",
                "Version control and collaboration platform for developers",
            ),
            (
                "Stack Overflow",
                "https://stackoverflow.com",
                "Q&A community for programmers",
            ),
            (
                "MDN Web Docs",
                "https://developer.mozilla.org",
                "Comprehensive web development documentation",
            ),
        ],
    ),
    (
        "Design",
        &[
            (
                "Figma",
                "https://figma.com",
                "Collaborative interface design tool",
            ),
            (
                "Dribbble",
                "https://dribbble.com",
                "Design inspiration and portfolio showcase",
            ),
        ],
    ),
    (
        "Productivity",
        &[
            (
                "Notion",
                "https://notion.so",
                "All-in-one workspace for notes and collaboration",
            ),
            (
                "Trello",
                "https://trello.com",
                "Visual project management boards",
            ),
        ],
    ),
    (
        "Learning",
        &[(
            "Coursera",
            "https://coursera.org",
            "Online courses from top universities",
        )],
    ),
];

/// Builds the seeded library shown on every boot.
pub fn seeded() -> LibraryState {
    let mut state = LibraryState::default();
    for (category, websites) in SEED {
        let mut list = Vec::with_capacity(websites.len());
        for (title, url, description) in *websites {
            let id = state.allocate_website_id();
            list.push(Website {
                id,
                title: (*title).to_string(),
                url: (*url).to_string(),
                description: (*description).to_string(),
            });
        }
        state.library.insert((*category).to_string(), list);
        state.categories.push((*category).to_string());
    }
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seed_is_consistent_and_ids_are_unique() {
        let state = seeded();

        assert!(state.categories_consistent());
        assert_eq!(
            state.categories,
            vec!["Development", "Design", "Productivity", "Learning"]
        );
        assert_eq!(state.websites_in("Development").len(), 3);
        assert_eq!(state.websites_in("Design").len(), 2);

        let mut ids: Vec<u64> = state
            .library
            .values()
            .flatten()
            .map(|site| site.id.0)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(state.next_website_id > ids.len() as u64);
    }
}
