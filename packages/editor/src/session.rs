//! # Edit Session Management
//!
//! An EditSession is one user's editing state for a project: the undo
//! history around the live document, the id generator, editor preferences
//! and the current block selection.

use crate::history::History;
use crate::mutations::Mutation;
use crate::{project, EditorError};
use pagecraft_model::{
    AppPreferences, Block, BlockKind, Direction, Document, GlobalSettings, IdGenerator, InstanceId,
    Project,
};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Single-user editing session
#[derive(Debug)]
pub struct EditSession {
    history: History,
    ids: IdGenerator,

    /// Editor-only preferences; not part of undo history
    pub preferences: AppPreferences,

    /// Currently selected block
    selected: Option<InstanceId>,

    /// Backing project file, if any
    path: Option<PathBuf>,
}

impl EditSession {
    /// Start a session over `project`. Unassigned or repeated instance ids in
    /// the loaded document are replaced first.
    pub fn new(project: Project, ids: IdGenerator) -> Self {
        let mut ids = ids.resume(project.document.instance_ids());
        let document = project.document.repair_ids(&mut ids);

        Self {
            history: History::new(document),
            ids,
            preferences: project.preferences,
            selected: None,
            path: None,
        }
    }

    /// In-memory session over an empty document
    pub fn in_memory() -> Self {
        Self::new(Project::default(), IdGenerator::new("memory://session"))
    }

    /// Open a project file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let path = path.into();
        let project = project::load(&path)?;
        let ids = project::id_generator_for(&path, &project);

        let mut session = Self::new(project, ids);
        session.path = Some(path);
        Ok(session)
    }

    /// Save to the file this session was opened from
    pub fn save(&self) -> Result<(), EditorError> {
        let path = self.path.as_deref().ok_or(EditorError::NotFileBacked)?;
        project::save(path, &self.project())
    }

    /// Save to `path` and make it the backing file
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), EditorError> {
        let path = path.into();
        project::save(&path, &self.project())?;
        self.path = Some(path);
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot of the live document plus preferences
    pub fn project(&self) -> Project {
        Project {
            document: self.document().clone(),
            preferences: self.preferences.clone(),
        }
    }

    /// Apply a mutation through the history. Returns `true` if the
    /// document changed.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        let current = self.history.current();
        if let Err(reason) = mutation.validate(current) {
            debug!(%reason, "mutation is a no-op");
        }

        let result = mutation.apply(current, &mut self.ids);
        let changed = self.history.commit(result.document);

        if let Some(inserted) = result.inserted {
            self.selected = Some(inserted);
        } else if let Mutation::RemoveBlock { instance_id } = &mutation {
            if self.selected.as_ref() == Some(instance_id) {
                self.selected = None;
            }
        }

        changed
    }

    /// Insert a block of `kind`; the new block becomes the selection
    pub fn insert(&mut self, kind: BlockKind) -> Option<InstanceId> {
        self.apply(Mutation::InsertBlock { kind });
        self.selected.clone()
    }

    pub fn update(&mut self, instance_id: &InstanceId, block: Block) -> bool {
        self.apply(Mutation::UpdateBlock {
            instance_id: instance_id.clone(),
            block,
        })
    }

    pub fn move_block(&mut self, instance_id: &InstanceId, direction: Direction) -> bool {
        self.apply(Mutation::MoveBlock {
            instance_id: instance_id.clone(),
            direction,
        })
    }

    pub fn remove(&mut self, instance_id: &InstanceId) -> bool {
        self.apply(Mutation::RemoveBlock {
            instance_id: instance_id.clone(),
        })
    }

    pub fn duplicate(&mut self, instance_id: &InstanceId) -> bool {
        self.apply(Mutation::DuplicateBlock {
            instance_id: instance_id.clone(),
        })
    }

    pub fn update_settings(&mut self, settings: GlobalSettings) -> bool {
        self.apply(Mutation::UpdateSettings { settings })
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        self.drop_stale_selection();
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        self.drop_stale_selection();
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Select a block. Unknown ids clear the selection.
    pub fn select(&mut self, instance_id: Option<InstanceId>) {
        self.selected = instance_id.filter(|id| self.document().get(id).is_some());
    }

    pub fn selected(&self) -> Option<&InstanceId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.document().get(id))
    }

    fn drop_stale_selection(&mut self) {
        if self.selected_block().is_none() {
            self.selected = None;
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = EditSession::in_memory();
        assert!(session.document().is_empty());
        assert!(session.selected().is_none());
        assert!(!session.can_undo());
        assert!(session.path().is_none());
    }

    #[test]
    fn test_insert_selects_new_block() {
        let mut session = EditSession::in_memory();
        let hero = session.insert(BlockKind::Hero).unwrap();

        assert_eq!(session.selected(), Some(&hero));
        assert_eq!(session.selected_block().and_then(|b| b.kind()), Some(BlockKind::Hero));
    }

    #[test]
    fn test_removing_selected_block_clears_selection() {
        let mut session = EditSession::in_memory();
        let nav = session.insert(BlockKind::Navigation).unwrap();
        let hero = session.insert(BlockKind::Hero).unwrap();

        session.select(Some(nav.clone()));
        session.remove(&hero);
        assert_eq!(session.selected(), Some(&nav));

        session.remove(&nav);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_undo_drops_selection_of_vanished_block() {
        let mut session = EditSession::in_memory();
        session.insert(BlockKind::Faq);
        session.undo();
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_noop_mutation_adds_no_history() {
        let mut session = EditSession::in_memory();
        let nav = session.insert(BlockKind::Navigation).unwrap();

        assert!(!session.move_block(&nav, Direction::Up));
        assert!(!session.remove(&InstanceId::new("ghost")));
        assert_eq!(session.history().undo_levels(), 1);
    }

    #[test]
    fn test_save_requires_backing_file() {
        let session = EditSession::in_memory();
        assert!(matches!(session.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_preferences_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");

        let mut session = EditSession::in_memory();
        session.preferences.dark_mode = true;
        session.insert(BlockKind::Team);
        session.save_as(&path).unwrap();

        let reopened = EditSession::open(&path).unwrap();
        assert!(reopened.preferences.dark_mode);
        assert_eq!(reopened.document().len(), 1);
        assert!(!reopened.can_undo());
    }
}
