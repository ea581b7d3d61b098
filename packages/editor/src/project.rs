//! # Project Files
//!
//! Load and save `Project` values as pretty-printed JSON.
//!
//! ```text
//! Load → Repair ids → Edit → Save
//!   ↓        ↓          ↓      ↓
//! File   Document   History  File
//! ```

use crate::EditorError;
use pagecraft_model::{IdGenerator, Project};
use std::path::Path;
use tracing::{debug, info};

/// Default project file name written by `init`
pub const PROJECT_FILE: &str = "page.json";

/// Read a project file
pub fn load(path: &Path) -> Result<Project, EditorError> {
    if !path.exists() {
        return Err(EditorError::NotFound(path.to_path_buf()));
    }

    let source = std::fs::read_to_string(path)?;
    let project = parse(&source)?;
    debug!(path = %path.display(), blocks = project.document.len(), "loaded project");
    Ok(project)
}

/// Parse project JSON
pub fn parse(source: &str) -> Result<Project, EditorError> {
    Ok(serde_json::from_str(source)?)
}

/// Serialize a project as pretty JSON
pub fn to_json(project: &Project) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Write a project file, creating parent directories as needed
pub fn save(path: &Path, project: &Project) -> Result<(), EditorError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, to_json(project)?)?;
    info!(path = %path.display(), "saved project");
    Ok(())
}

/// Id generator for a project stored at `path`, advanced past the ids
/// already in `project`
pub fn id_generator_for(path: &Path, project: &Project) -> IdGenerator {
    IdGenerator::new(&path.to_string_lossy()).resume(project.document.instance_ids())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::BlockKind;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join(PROJECT_FILE);

        let mut ids = IdGenerator::new("test");
        let project = Project::starter(&mut ids);
        save(&path, &project).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(EditorError::NotFound(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse("{ not json"), Err(EditorError::Json(_))));
    }

    #[test]
    fn test_generator_resumes_past_existing_ids() {
        let path = Path::new("/tmp/site/page.json");
        let mut ids = id_generator_for(path, &Project::default());
        let project = Project::starter(&mut ids);

        let mut resumed = id_generator_for(path, &project);
        let (doc, fresh) = project.document.insert(BlockKind::Faq, &mut resumed);
        assert_eq!(doc.len(), 3);
        assert!(project.document.get(&fresh).is_none());
    }
}
