//! Project generation configuration

use serde::{Deserialize, Serialize};

/// One independently generatable output tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Backend,
    Frontend,
}

impl Tier {
    /// Directory the tier is materialized under, relative to the project root
    pub fn dir(&self) -> &'static str {
        match self {
            Tier::Backend => "backend",
            Tier::Frontend => "frontend",
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Validated project name
    pub name: String,
    /// Generate the backend tier
    pub backend: bool,
    /// Generate the frontend tier
    pub frontend: bool,
    /// Include Tailwind CSS in the frontend tier
    pub tailwind: bool,
}

impl ProjectConfig {
    /// Config with both tiers enabled and Tailwind included
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            backend: true,
            frontend: true,
            tailwind: true,
        }
    }

    /// Tiers enabled in this config, in generation order
    pub fn tiers(&self) -> Vec<Tier> {
        let mut tiers = Vec::new();
        if self.backend {
            tiers.push(Tier::Backend);
        }
        if self.frontend {
            tiers.push(Tier::Frontend);
        }
        tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_order() {
        let config = ProjectConfig::new("app");
        assert_eq!(config.tiers(), vec![Tier::Backend, Tier::Frontend]);
    }

    #[test]
    fn test_tiers_respect_toggles() {
        let mut config = ProjectConfig::new("app");
        config.backend = false;
        assert_eq!(config.tiers(), vec![Tier::Frontend]);

        config.backend = true;
        config.frontend = false;
        assert_eq!(config.tiers(), vec![Tier::Backend]);
    }

    #[test]
    fn test_tier_dirs() {
        assert_eq!(Tier::Backend.dir(), "backend");
        assert_eq!(Tier::Frontend.dir(), "frontend");
    }
}
