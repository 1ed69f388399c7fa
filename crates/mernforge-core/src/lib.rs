//! mernforge-core - Template catalogs and file materialization for mernforge
//!
//! Scaffolding a MERN project is a mapping problem: a project configuration
//! goes in, a fixed set of (relative path -> content) pairs comes out, and
//! the pairs get written under the project directory. This crate holds that
//! whole pipeline; the `mernforge` binary is a thin CLI shell around it.

pub mod config;
pub mod materialize;
pub mod project;
pub mod set;
pub mod templates;
pub mod validate;

pub use config::{ProjectConfig, Tier};
pub use materialize::materialize;
pub use project::{generate, GenerationReport};
pub use set::TemplateSet;
pub use validate::{validate_project_name, NameError};
