use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::project::{self, PROJECT_FILE};
use pagecraft_model::{IdGenerator, Project};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Force overwrite existing project
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let dir = PathBuf::from(cwd).join(&args.path);
    let project_path = dir.join(PROJECT_FILE);

    if project_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), PROJECT_FILE.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft project...".bright_blue().bold());

    let mut ids = IdGenerator::new(&project_path.to_string_lossy());
    let starter = Project::starter(&mut ids);
    project::save(&project_path, &starter)?;
    println!("  {} Created {}", "✓".green(), PROJECT_FILE);

    let config_path = dir.join(DEFAULT_CONFIG_NAME);
    if !config_path.exists() {
        fs::write(&config_path, serde_json::to_string_pretty(&Config::default())?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagecraft add pricing");
    println!("  2. Run: pagecraft export");
    println!("  3. Check output in dist/");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::BlockKind;

    #[test]
    fn test_init_writes_starter_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                path: ".".into(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let project = project::load(&dir.path().join(PROJECT_FILE)).unwrap();
        let kinds: Vec<_> = project.document.blocks().filter_map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![BlockKind::Navigation, BlockKind::Hero]);
        assert!(dir.path().join(DEFAULT_CONFIG_NAME).exists());
    }

    #[test]
    fn test_init_keeps_existing_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let project_path = dir.path().join(PROJECT_FILE);
        fs::write(&project_path, "{}").unwrap();

        init(
            InitArgs {
                path: ".".into(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&project_path).unwrap(), "{}");
    }
}
