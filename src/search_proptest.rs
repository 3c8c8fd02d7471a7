//! Property-based tests for the search and its path handling.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::path::Path;

    use crate::config::Rules;
    use crate::repository::{normalize, Repository};
    use crate::search::test_support::Tree;
    use crate::search::Search;
    use proptest::prelude::*;

    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z][a-z0-9_-]{0,8}", 1..5)
    }

    // ============================================================================
    // Repository path property tests
    // ============================================================================

    proptest! {
        /// Property: relativize undoes resolve for paths inside the repository
        #[test]
        fn resolve_then_relativize_round_trips(parts in segments()) {
            let tree = Tree::new(&[]);
            let repo = Repository::new(&tree.root).unwrap();
            let relative = parts.join("/");

            let resolved = repo.resolve(&relative).unwrap();
            prop_assert!(repo.contains(&resolved));
            prop_assert_eq!(repo.relativize(&resolved), relative);
        }

        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8)) {
            let path = format!("/{}", parts.join("/"));
            let once = normalize(Path::new(&path));
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }
    }

    // ============================================================================
    // Search property tests
    // ============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: a caller `depth` levels below the search start is found
        /// exactly when it writes `depth` parent markers
        #[test]
        fn descent_adds_one_parent_marker_per_level(parts in segments()) {
            let depth = parts.len();
            let caller = parts.join("/");
            let reference = format!("{}target", "../".repeat(depth));
            let tree = Tree::new(&[(
                format!("{caller}/main.tf").as_str(),
                format!("source = \"{reference}\"\n").as_str(),
            )]);
            let repo = Repository::new(&tree.root).unwrap();
            let rules = Rules::default();

            let found = Search::new(&repo, &rules).find_users(&tree.root, None, "target");
            prop_assert_eq!(found, vec![tree.path(&caller)]);
        }

        /// Property: wrapping a module in any number of non-root modules only
        /// ever reports the final root
        #[test]
        fn wrappers_are_never_reported(wrappers in 0usize..5) {
            let mut files = vec![("modules/m0/main.tf".to_string(), "resource \"x\" \"y\" {}\n".to_string())];
            for i in 1..=wrappers {
                files.push((
                    format!("modules/m{i}/main.tf"),
                    format!("source = \"../m{}\"\n", i - 1),
                ));
            }
            files.push((
                "envs/prod/main.tf".to_string(),
                format!("terraform {{\n}}\nsource = \"../../modules/m{wrappers}\"\n"),
            ));
            let borrowed: Vec<(&str, &str)> =
                files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
            let tree = Tree::new(&borrowed);
            let repo = Repository::new(&tree.root).unwrap();
            let rules = Rules::default();

            let roots = Search::new(&repo, &rules).find_roots_for(&tree.path("modules/m0/main.tf"));
            prop_assert_eq!(roots, vec!["envs/prod".to_string()]);
        }
    }
}
