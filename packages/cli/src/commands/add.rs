use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::project::PROJECT_FILE;
use pagecraft_editor::EditSession;
use pagecraft_model::BlockKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Block kind (see `pagecraft blocks`)
    pub kind: String,

    /// Project file or directory containing page.json
    #[arg(default_value = ".")]
    pub path: String,
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let kind: BlockKind = args.kind.parse()?;

    let mut path = PathBuf::from(cwd).join(&args.path);
    if path.is_dir() {
        path = path.join(PROJECT_FILE);
    }

    let mut session = EditSession::open(path.clone())?;
    let id = session
        .insert(kind)
        .ok_or_else(|| anyhow!("Could not insert {} block", kind))?;
    session.save()?;

    println!(
        "  {} Added {} block {} to {}",
        "✓".green(),
        kind.as_str().bright_white(),
        id.as_str().dimmed(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs};
    use pagecraft_editor::project;

    fn initialized() -> (tempfile::TempDir, String) {
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
        (dir, cwd)
    }

    #[test]
    fn test_add_appends_block() {
        let (dir, cwd) = initialized();

        add(
            AddArgs {
                kind: "faq".into(),
                path: ".".into(),
            },
            &cwd,
        )
        .unwrap();

        let project = project::load(&dir.path().join(PROJECT_FILE)).unwrap();
        let kinds: Vec<_> = project.document.blocks().filter_map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![BlockKind::Navigation, BlockKind::Hero, BlockKind::Faq]);
    }

    #[test]
    fn test_add_rejects_unknown_kind() {
        let (_dir, cwd) = initialized();

        let result = add(
            AddArgs {
                kind: "carousel".into(),
                path: ".".into(),
            },
            &cwd,
        );
        assert!(result.is_err());
    }
}
