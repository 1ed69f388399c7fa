//! mernforge - MERN project scaffolding
//!
//! Generates a two-tier MERN application skeleton: an Express + Mongoose
//! backend and a React + Vite frontend, wired for JWT auth out of the box.
//! The tool's job ends once the files are written; the generated project is
//! plain npm territory from there.
//!
//! Commands:
//! - create <NAME>: Generate a new project in the current directory
//! - manifest <NAME>: Show which files create would write

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, IsTerminal, Write};

use mernforge_core::{generate, templates, validate_project_name, ProjectConfig};

#[derive(Parser)]
#[command(name = "mernforge")]
#[command(about = "MERN project scaffolding - production-ready backend and frontend skeletons")]
#[command(version)]
#[command(after_help = r#"GENERATED TIERS:
    backend     Express + Mongoose API with JWT auth boilerplate
    frontend    React 18 + Vite app with auth pages and routing

EXAMPLES:
    mernforge create myapp                  # Both tiers, asks about Tailwind
    mernforge create api -b                 # Backend only
    mernforge create web -f --no-tailwind   # Frontend only, plain CSS
    mernforge manifest myapp --json         # List files without writing them
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new MERN project
    Create {
        /// Project name
        name: String,

        /// Generate only the frontend tier
        #[arg(short = 'f', long, conflicts_with = "backend_only")]
        frontend_only: bool,

        /// Generate only the backend tier
        #[arg(short = 'b', long)]
        backend_only: bool,

        /// Include Tailwind CSS without asking
        #[arg(long, conflicts_with = "no_tailwind")]
        tailwind: bool,

        /// Skip Tailwind CSS without asking
        #[arg(long)]
        no_tailwind: bool,

        /// Overwrite an existing project directory
        #[arg(long)]
        force: bool,
    },

    /// List the files create would write
    Manifest {
        /// Project name
        name: String,

        /// Only the frontend tier
        #[arg(short = 'f', long, conflicts_with = "backend_only")]
        frontend_only: bool,

        /// Only the backend tier
        #[arg(short = 'b', long)]
        backend_only: bool,

        /// Leave out the Tailwind CSS entries
        #[arg(long)]
        no_tailwind: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            name,
            frontend_only,
            backend_only,
            tailwind,
            no_tailwind,
            force,
        } => cmd_create(&name, frontend_only, backend_only, tailwind, no_tailwind, force),

        Commands::Manifest {
            name,
            frontend_only,
            backend_only,
            no_tailwind,
            json,
        } => cmd_manifest(&name, frontend_only, backend_only, no_tailwind, json),
    }
}

/// Generate a project under the current directory
fn cmd_create(
    name: &str,
    frontend_only: bool,
    backend_only: bool,
    tailwind: bool,
    no_tailwind: bool,
    force: bool,
) -> Result<()> {
    validate_project_name(name)?;

    let parent = std::env::current_dir().context("Failed to resolve current directory")?;
    let dest = parent.join(name);

    if dest.exists() {
        if force {
            std::fs::remove_dir_all(&dest).with_context(|| {
                format!("Failed to remove existing directory: {}", dest.display())
            })?;
        } else {
            bail!(
                "Directory already exists: {}\nUse --force to overwrite",
                dest.display()
            );
        }
    }

    let include_frontend = !backend_only;
    let tailwind = if !include_frontend {
        false
    } else if tailwind {
        true
    } else if no_tailwind {
        false
    } else {
        confirm_tailwind()?
    };

    let config = ProjectConfig {
        name: name.to_string(),
        backend: !frontend_only,
        frontend: include_frontend,
        tailwind,
    };

    println!("{}", format!("Creating MERN project: {name}").blue());

    let report = generate(&config, &parent)
        .with_context(|| format!("Failed to create project: {name}"))?;

    for (tier, files) in &report.tiers {
        println!("  {} ({files} files)", tier.dir().cyan());
    }

    println!();
    println!("{}", format!("Project {name} created successfully!").green());
    println!();
    println!("{}", "Next steps:".yellow());
    println!("  cd {name}");
    if config.backend {
        println!("  cd backend && npm install && npm run dev");
    }
    if config.frontend {
        println!("  cd frontend && npm install && npm run dev");
    }

    Ok(())
}

/// Ask about Tailwind when no flag decided it. Non-interactive runs keep it.
fn confirm_tailwind() -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(true);
    }

    print!("Include Tailwind CSS? (Y/n) ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

/// Print the relative paths create would write, without touching the disk
fn cmd_manifest(
    name: &str,
    frontend_only: bool,
    backend_only: bool,
    no_tailwind: bool,
    json: bool,
) -> Result<()> {
    validate_project_name(name)?;

    let config = ProjectConfig {
        name: name.to_string(),
        backend: !frontend_only,
        frontend: !backend_only,
        tailwind: !no_tailwind,
    };

    if json {
        let files: Vec<String> = config
            .tiers()
            .into_iter()
            .flat_map(|tier| {
                templates::template_set(tier, &config)
                    .paths()
                    .map(|path| format!("{}/{}", tier.dir(), path))
                    .collect::<Vec<_>>()
            })
            .collect();

        let output = serde_json::json!({
            "config": config,
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for tier in config.tiers() {
        let set = templates::template_set(tier, &config);
        println!("{}", format!("{}/ ({} files)", tier.dir(), set.len()).cyan());
        for path in set.paths() {
            println!("  {}/{}", tier.dir(), path);
        }
        println!();
    }

    Ok(())
}
