//! Tier template catalogs
//!
//! Each tier hard-codes its catalog of relative paths. Content functions
//! interpolate the project name where the payload calls for it and are
//! otherwise constant text. Providers are pure: identical inputs always
//! yield an identical set.

pub mod backend;
pub mod frontend;

use crate::config::{ProjectConfig, Tier};
use crate::set::TemplateSet;

/// Template set for one tier of the configured project
pub fn template_set(tier: Tier, config: &ProjectConfig) -> TemplateSet {
    match tier {
        Tier::Backend => backend::template_set(&config.name),
        Tier::Frontend => frontend::template_set(&config.name, config.tailwind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sets() -> Vec<TemplateSet> {
        let mut config = ProjectConfig::new("sample");
        let mut sets = vec![
            template_set(Tier::Backend, &config),
            template_set(Tier::Frontend, &config),
        ];
        config.tailwind = false;
        sets.push(template_set(Tier::Frontend, &config));
        sets
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = ProjectConfig::new("sample");
        for tier in [Tier::Backend, Tier::Frontend] {
            let first = template_set(tier, &config);
            let second = template_set(tier, &config);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_paths_are_relative_without_traversal() {
        for set in all_sets() {
            for path in set.paths() {
                assert!(!path.starts_with('/'), "absolute path: {path}");
                assert!(
                    !path.split('/').any(|seg| seg == ".." || seg.is_empty()),
                    "bad path: {path}"
                );
            }
        }
    }

    #[test]
    fn test_no_empty_content() {
        for set in all_sets() {
            for (path, content) in set.iter() {
                assert!(!content.is_empty(), "empty content at {path}");
            }
        }
    }
}
