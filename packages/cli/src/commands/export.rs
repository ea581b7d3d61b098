use crate::config::{Config, Target};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::html_artifact;
use pagecraft_compiler_react::{react_artifact, CompileOptions};
use pagecraft_editor::project::{self, PROJECT_FILE};
use pagecraft_evaluator::Artifact;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const PROJECT_SUFFIX: &str = ".page.json";

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project file or directory to export (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Target format (html, react, all); overrides config
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Emit Page.jsx instead of Page.tsx
    #[arg(long)]
    pub javascript: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    // With --stdout the artifacts own stdout; progress moves to stderr
    if args.stdout {
        export_to(args, cwd, &mut io::stdout(), &mut io::stderr())
    } else {
        export_to(args, cwd, &mut io::stdout(), &mut io::stdout())
    }
}

fn export_to(
    args: ExportArgs,
    cwd: &str,
    output: &mut dyn Write,
    progress: &mut dyn Write,
) -> Result<()> {
    let config = Config::load(cwd)?;
    let targets = match &args.target {
        Some(target) => Target::parse_list(target)?,
        None => config.targets.clone(),
    };
    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    let options = CompileOptions {
        use_typescript: config.typescript && !args.javascript,
    };

    let root = PathBuf::from(cwd).join(&args.path);
    if !root.exists() {
        return Err(anyhow!("Path does not exist: {}", root.display()));
    }

    writeln!(progress, "{}", "🔨 Exporting pages...".bright_blue().bold())?;

    let projects = find_project_files(&root, &out_dir);
    if projects.is_empty() {
        writeln!(progress, "{}", "⚠️  No project files found".yellow())?;
        return Ok(());
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for project_path in &projects {
        let relative_path = project_path.strip_prefix(&root).unwrap_or(project_path);
        let result = build_artifacts(project_path, &targets, &options).and_then(|artifacts| {
            if args.stdout {
                for artifact in &artifacts {
                    writeln!(output, "{}", artifact.contents)?;
                }
                Ok(vec!["stdout".to_string()])
            } else {
                write_artifacts(project_path, &root, &out_dir, artifacts)
            }
        });
        match result {
            Ok(written) => {
                success_count += 1;
                for target in written {
                    writeln!(
                        progress,
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        target
                    )?;
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    writeln!(progress)?;
    if error_count == 0 {
        writeln!(
            progress,
            "{} Exported {} projects successfully",
            "✅".green(),
            success_count
        )?;
    } else {
        writeln!(
            progress,
            "{} Exported {} projects, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        )?;
    }

    Ok(())
}

fn is_project_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name == PROJECT_FILE || name.ends_with(PROJECT_SUFFIX))
}

/// A single file, or every project file under a directory (skipping the output directory)
fn find_project_files(root: &Path, out_dir: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.path() != out_dir)
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && is_project_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// Output directory for one project: its directory relative to the export
/// root, plus the stem of `name.page.json` files
fn output_dir_for(project_path: &Path, root: &Path, out_dir: &Path) -> PathBuf {
    let relative = project_path.strip_prefix(root).unwrap_or(project_path);
    let mut dir = match relative.parent() {
        Some(parent) => out_dir.join(parent),
        None => out_dir.to_path_buf(),
    };

    if let Some(stem) = relative
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(PROJECT_SUFFIX))
    {
        dir = dir.join(stem);
    }
    dir
}

fn build_artifacts(
    project_path: &Path,
    targets: &[Target],
    options: &CompileOptions,
) -> Result<Vec<Artifact>> {
    let project = project::load(project_path)?;
    debug!(path = %project_path.display(), blocks = project.document.len(), "Exporting project");

    Ok(targets
        .iter()
        .map(|target| match target {
            Target::Html => html_artifact(&project.document),
            Target::React => react_artifact(&project.document, options.clone()),
        })
        .collect())
}

fn write_artifacts(
    project_path: &Path,
    root: &Path,
    out_dir: &Path,
    artifacts: Vec<Artifact>,
) -> Result<Vec<String>> {
    let dir = output_dir_for(project_path, root, out_dir);
    fs::create_dir_all(&dir)?;

    let mut written = Vec::new();
    for artifact in artifacts {
        let output_file = dir.join(&artifact.file_name);
        fs::write(&output_file, &artifact.contents)?;
        written.push(output_file.display().to_string());
    }
    Ok(written)
}
