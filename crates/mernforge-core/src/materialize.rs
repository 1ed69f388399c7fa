//! File materialization
//!
//! Writes a template set under an output root. Missing directories are
//! created, existing files are replaced (no merge, no backup). A failed
//! write aborts the whole pass; files already written stay in place.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::set::TemplateSet;

/// Write every entry of `set` to `root/<relative path>`
pub fn materialize(root: &Path, set: &TemplateSet) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory: {}", root.display()))?;

    for (rel_path, content) in set.iter() {
        let dest = root.join(rel_path);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&dest, content)
            .with_context(|| format!("Failed to write: {}", dest.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn test_set() -> TemplateSet {
        let mut set = TemplateSet::new();
        set.insert("package.json", "{\n  \"name\": \"x\"\n}");
        set.insert("src/controllers/auth.controller.js", "export {};");
        set.insert(".gitignore", "node_modules/");
        set
    }

    #[test]
    fn test_materialize_writes_exact_content() {
        let root = env::temp_dir().join("mernforge_test_materialize");
        let _ = fs::remove_dir_all(&root);

        let set = test_set();
        materialize(&root, &set).unwrap();

        for (rel_path, content) in set.iter() {
            let on_disk = fs::read_to_string(root.join(rel_path)).unwrap();
            assert_eq!(on_disk, content, "mismatch at {rel_path}");
        }

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_materialize_creates_directory_chain() {
        let root = env::temp_dir().join("mernforge_test_dir_chain");
        let _ = fs::remove_dir_all(&root);

        materialize(&root, &test_set()).unwrap();

        assert!(root.join("src/controllers").is_dir());
        assert!(root.join("src/controllers/auth.controller.js").is_file());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_materialize_twice_is_idempotent() {
        let root = env::temp_dir().join("mernforge_test_idempotent");
        let _ = fs::remove_dir_all(&root);

        let set = test_set();
        materialize(&root, &set).unwrap();
        materialize(&root, &set).unwrap();

        for (rel_path, content) in set.iter() {
            let on_disk = fs::read_to_string(root.join(rel_path)).unwrap();
            assert_eq!(on_disk, content);
        }

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_materialize_overwrites_existing_file() {
        let root = env::temp_dir().join("mernforge_test_overwrite");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(".gitignore"), "stale content").unwrap();

        materialize(&root, &test_set()).unwrap();

        let on_disk = fs::read_to_string(root.join(".gitignore")).unwrap();
        assert_eq!(on_disk, "node_modules/");

        let _ = fs::remove_dir_all(&root);
    }
}
