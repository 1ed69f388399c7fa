//! Whole-project generation
//!
//! Resolves the project root under a parent directory and materializes
//! every enabled tier beneath it. Single pass, no rollback on failure.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ProjectConfig, Tier};
use crate::materialize::materialize;
use crate::templates;

/// What one generation run produced
#[derive(Debug)]
pub struct GenerationReport {
    /// Root of the generated project
    pub project_path: PathBuf,
    /// Files written per enabled tier, in generation order
    pub tiers: Vec<(Tier, usize)>,
}

/// Generate the configured project under `parent_dir`
pub fn generate(config: &ProjectConfig, parent_dir: &Path) -> Result<GenerationReport> {
    let project_path = parent_dir.join(&config.name);

    fs::create_dir_all(&project_path).with_context(|| {
        format!(
            "Failed to create project directory: {}",
            project_path.display()
        )
    })?;

    let mut tiers = Vec::new();
    for tier in config.tiers() {
        let set = templates::template_set(tier, config);
        materialize(&project_path.join(tier.dir()), &set)?;
        tiers.push((tier, set.len()));
    }

    Ok(GenerationReport {
        project_path,
        tiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_generate_backend_only() {
        let parent = env::temp_dir().join("mernforge_test_backend_only");
        let _ = fs::remove_dir_all(&parent);
        fs::create_dir_all(&parent).unwrap();

        let config = ProjectConfig {
            name: "demo".to_string(),
            backend: true,
            frontend: false,
            tailwind: true,
        };

        let report = generate(&config, &parent).unwrap();
        assert_eq!(report.project_path, parent.join("demo"));
        assert_eq!(report.tiers.len(), 1);
        assert_eq!(report.tiers[0].0, Tier::Backend);

        let pkg = fs::read_to_string(report.project_path.join("backend/package.json")).unwrap();
        let pkg: serde_json::Value = serde_json::from_str(&pkg).unwrap();
        assert_eq!(pkg["name"], "demo-backend");

        assert!(!report.project_path.join("frontend").exists());

        let _ = fs::remove_dir_all(&parent);
    }

    #[test]
    fn test_generate_frontend_only() {
        let parent = env::temp_dir().join("mernforge_test_frontend_only");
        let _ = fs::remove_dir_all(&parent);
        fs::create_dir_all(&parent).unwrap();

        let config = ProjectConfig {
            name: "demo".to_string(),
            backend: false,
            frontend: true,
            tailwind: true,
        };

        let report = generate(&config, &parent).unwrap();
        assert!(!report.project_path.join("backend").exists());
        assert!(report.project_path.join("frontend/src/App.jsx").is_file());

        let _ = fs::remove_dir_all(&parent);
    }

    #[test]
    fn test_generate_both_tiers() {
        let parent = env::temp_dir().join("mernforge_test_both_tiers");
        let _ = fs::remove_dir_all(&parent);
        fs::create_dir_all(&parent).unwrap();

        let config = ProjectConfig::new("fullstack");
        let report = generate(&config, &parent).unwrap();

        assert_eq!(report.tiers.len(), 2);

        for file in [
            "backend/package.json",
            "backend/src/app.js",
            "backend/src/server.js",
            "frontend/package.json",
            "frontend/src/App.jsx",
            "frontend/vite.config.js",
        ] {
            assert!(
                report.project_path.join(file).is_file(),
                "missing file: {file}"
            );
        }

        let _ = fs::remove_dir_all(&parent);
    }

    #[test]
    fn test_generate_creates_nested_controller_dir() {
        let parent = env::temp_dir().join("mernforge_test_nested");
        let _ = fs::remove_dir_all(&parent);
        fs::create_dir_all(&parent).unwrap();

        let config = ProjectConfig {
            name: "nested".to_string(),
            backend: true,
            frontend: false,
            tailwind: false,
        };

        let report = generate(&config, &parent).unwrap();
        assert!(report
            .project_path
            .join("backend/src/controllers/auth.controller.js")
            .is_file());

        let _ = fs::remove_dir_all(&parent);
    }
}
