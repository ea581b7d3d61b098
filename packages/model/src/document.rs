//! # Document
//!
//! Ordered block list plus page-level settings.
//!
//! A `Document` is a value: every operation borrows `self` and returns a new
//! document, leaving the receiver untouched. Blocks are held behind `Arc`, so
//! the copy made by an operation shares every block it did not touch. This is
//! what lets the history keep whole-document snapshots cheaply.
//!
//! ## Operation semantics
//!
//! - `insert` appends a catalog template with a fresh instance id
//! - `update` replaces a block wholesale; the instance id is preserved
//! - `move_block` swaps with the previous/next block; boundaries are no-ops
//! - `remove` drops the block
//! - `duplicate` clones the block with a fresh id, right after the original
//!
//! An absent instance id is never an error: the operation returns an
//! unchanged copy.

use crate::block::{Block, BlockKind};
use crate::catalog::template;
use crate::id_generator::{IdGenerator, InstanceId};
use crate::settings::{AppPreferences, GlobalSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Direction for `Document::move_block`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Page document: blocks in render order plus global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    blocks: Vec<Arc<Block>>,
    settings: GlobalSettings,
}

impl Document {
    /// Empty document with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: impl IntoIterator<Item = Block>, settings: GlobalSettings) -> Self {
        Self {
            blocks: blocks.into_iter().map(Arc::new).collect(),
            settings,
        }
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &Block> + '_ {
        self.blocks.iter().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, instance_id: &InstanceId) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|b| b.instance_id() == instance_id)
            .map(|b| b.as_ref())
    }

    pub fn position(&self, instance_id: &InstanceId) -> Option<usize> {
        self.blocks.iter().position(|b| b.instance_id() == instance_id)
    }

    pub fn instance_ids(&self) -> impl Iterator<Item = &InstanceId> + '_ {
        self.blocks.iter().map(|b| b.instance_id())
    }

    /// Append a new block of `kind`; returns the new document and its id
    pub fn insert(&self, kind: BlockKind, ids: &mut IdGenerator) -> (Document, InstanceId) {
        let instance_id = ids.new_id_excluding(&self.taken_ids());
        let block = template(kind).with_instance_id(instance_id.clone());

        let mut blocks = self.blocks.clone();
        blocks.push(Arc::new(block));

        debug!(%kind, %instance_id, "insert block");
        (self.with(blocks), instance_id)
    }

    /// Append an externally built block. No-op when its instance id is
    /// unassigned or already present.
    pub fn insert_block(&self, block: Block) -> Document {
        let instance_id = block.instance_id();
        if !instance_id.is_assigned() || self.position(instance_id).is_some() {
            debug!(%instance_id, "insert_block: id unassigned or taken");
            return self.clone();
        }

        let mut blocks = self.blocks.clone();
        blocks.push(Arc::new(block));
        self.with(blocks)
    }

    /// Replace the block with `instance_id` by `block`
    pub fn update(&self, instance_id: &InstanceId, block: Block) -> Document {
        let Some(index) = self.position(instance_id) else {
            debug!(%instance_id, "update: block not found");
            return self.clone();
        };

        let block = if block.instance_id() == instance_id {
            block
        } else {
            debug!(%instance_id, "update: keeping original instance id");
            block.with_instance_id(instance_id.clone())
        };

        let mut blocks = self.blocks.clone();
        blocks[index] = Arc::new(block);
        self.with(blocks)
    }

    /// Swap the block with its neighbour in `direction`
    pub fn move_block(&self, instance_id: &InstanceId, direction: Direction) -> Document {
        let Some(index) = self.position(instance_id) else {
            debug!(%instance_id, "move: block not found");
            return self.clone();
        };

        let target = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.blocks.len() => index + 1,
            _ => {
                debug!(%instance_id, ?direction, "move: at boundary");
                return self.clone();
            }
        };

        let mut blocks = self.blocks.clone();
        blocks.swap(index, target);
        self.with(blocks)
    }

    /// Delete the block with `instance_id`
    pub fn remove(&self, instance_id: &InstanceId) -> Document {
        if self.position(instance_id).is_none() {
            debug!(%instance_id, "remove: block not found");
            return self.clone();
        }

        let blocks = self
            .blocks
            .iter()
            .filter(|b| b.instance_id() != instance_id)
            .cloned()
            .collect();
        self.with(blocks)
    }

    /// Clone the block with `instance_id` and insert the copy right after it
    pub fn duplicate(&self, instance_id: &InstanceId, ids: &mut IdGenerator) -> Document {
        let Some(index) = self.position(instance_id) else {
            debug!(%instance_id, "duplicate: block not found");
            return self.clone();
        };

        let copy_id = ids.new_id_excluding(&self.taken_ids());
        let copy = self.blocks[index].with_instance_id(copy_id);

        let mut blocks = self.blocks.clone();
        blocks.insert(index + 1, Arc::new(copy));
        self.with(blocks)
    }

    /// Same blocks, new settings
    pub fn with_settings(&self, settings: GlobalSettings) -> Document {
        Document {
            blocks: self.blocks.clone(),
            settings,
        }
    }

    /// Give unassigned or repeated instance ids fresh values. Used when
    /// loading documents written by other tools.
    pub fn repair_ids(&self, ids: &mut IdGenerator) -> Document {
        let mut seen: HashSet<InstanceId> = HashSet::new();
        let mut repaired = false;

        let all: HashSet<&InstanceId> = self.instance_ids().collect();
        let mut blocks = Vec::with_capacity(self.blocks.len());

        for block in &self.blocks {
            let id = block.instance_id();
            if id.is_assigned() && !seen.contains(id) {
                seen.insert(id.clone());
                blocks.push(block.clone());
                continue;
            }

            let mut fresh = ids.new_id_excluding(&all);
            while seen.contains(&fresh) {
                fresh = ids.new_id_excluding(&all);
            }
            debug!(old = %id, new = %fresh, "repair: reassigned instance id");
            seen.insert(fresh.clone());
            blocks.push(Arc::new(block.with_instance_id(fresh)));
            repaired = true;
        }

        if repaired {
            self.with(blocks)
        } else {
            self.clone()
        }
    }

    fn taken_ids(&self) -> HashSet<&InstanceId> {
        self.instance_ids().collect()
    }

    fn with(&self, blocks: Vec<Arc<Block>>) -> Document {
        Document {
            blocks,
            settings: self.settings.clone(),
        }
    }
}

/// On-disk project: the document plus editor preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub document: Document,
    pub preferences: AppPreferences,
}

impl Project {
    /// Starter project: a top-bar navigation followed by a hero
    pub fn starter(ids: &mut IdGenerator) -> Self {
        let doc = Document::new();
        let (doc, _) = doc.insert(BlockKind::Navigation, ids);
        let (doc, _) = doc.insert(BlockKind::Hero, ids);
        Self {
            document: doc,
            preferences: AppPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockContent;

    fn ids() -> IdGenerator {
        IdGenerator::from_seed("t".to_string())
    }

    fn kinds(doc: &Document) -> Vec<BlockKind> {
        doc.blocks().filter_map(|b| b.kind()).collect()
    }

    #[test]
    fn test_insert_appends_with_fresh_id() {
        let mut ids = ids();
        let doc = Document::new();
        let (doc, nav) = doc.insert(BlockKind::Navigation, &mut ids);
        let (doc, hero) = doc.insert(BlockKind::Hero, &mut ids);

        assert_eq!(kinds(&doc), vec![BlockKind::Navigation, BlockKind::Hero]);
        assert_ne!(nav, hero);
        assert_eq!(doc.position(&hero), Some(1));
    }

    #[test]
    fn test_operations_do_not_touch_receiver() {
        let mut ids = ids();
        let (doc, nav) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let before = doc.clone();

        let _ = doc.remove(&nav);
        let _ = doc.duplicate(&nav, &mut ids);
        let _ = doc.insert(BlockKind::Faq, &mut ids);

        assert_eq!(doc, before);
    }

    #[test]
    fn test_update_replaces_block() {
        let mut ids = ids();
        let (doc, hero) = Document::new().insert(BlockKind::Hero, &mut ids);

        let mut edited = doc.get(&hero).unwrap().clone();
        if let BlockContent::Hero(content) = &mut edited.content {
            content.heading = "Hello".to_string();
        }

        let updated = doc.update(&hero, edited);
        match &updated.get(&hero).unwrap().content {
            BlockContent::Hero(content) => assert_eq!(content.heading, "Hello"),
            _ => panic!("Expected hero"),
        }
    }

    #[test]
    fn test_update_keeps_instance_id() {
        let mut ids = ids();
        let (doc, hero) = Document::new().insert(BlockKind::Hero, &mut ids);

        let replacement = template(BlockKind::Hero).with_instance_id(InstanceId::new("other"));
        let updated = doc.update(&hero, replacement);

        assert!(updated.get(&hero).is_some());
        assert!(updated.get(&InstanceId::new("other")).is_none());
    }

    #[test]
    fn test_missing_id_is_identity() {
        let mut ids = ids();
        let (doc, _) = Document::new().insert(BlockKind::Hero, &mut ids);
        let ghost = InstanceId::new("ghost");

        assert_eq!(doc.update(&ghost, template(BlockKind::Faq)), doc);
        assert_eq!(doc.move_block(&ghost, Direction::Up), doc);
        assert_eq!(doc.remove(&ghost), doc);
        assert_eq!(doc.duplicate(&ghost, &mut ids), doc);
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        let mut ids = ids();
        let (doc, first) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let (doc, last) = doc.insert(BlockKind::Footer, &mut ids);

        assert_eq!(doc.move_block(&first, Direction::Up), doc);
        assert_eq!(doc.move_block(&last, Direction::Down), doc);

        let moved = doc.move_block(&last, Direction::Up);
        assert_eq!(kinds(&moved), vec![BlockKind::Footer, BlockKind::Navigation]);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let mut ids = ids();
        let (doc, nav) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let (doc, _) = doc.insert(BlockKind::Footer, &mut ids);

        let doc = doc.duplicate(&nav, &mut ids);
        assert_eq!(
            kinds(&doc),
            vec![BlockKind::Navigation, BlockKind::Navigation, BlockKind::Footer]
        );

        let copy = doc.blocks().nth(1).unwrap();
        assert_ne!(copy.instance_id(), &nav);
        assert_eq!(copy.base.anchor_id, doc.get(&nav).unwrap().base.anchor_id);
    }

    #[test]
    fn test_remove() {
        let mut ids = ids();
        let (doc, nav) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let doc = doc.remove(&nav);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_unchanged_blocks_are_shared() {
        let mut ids = ids();
        let (doc, nav) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let (doc, _) = doc.insert(BlockKind::Hero, &mut ids);

        let next = doc.remove(&InstanceId::new("ghost"));
        assert!(Arc::ptr_eq(&doc.blocks[0], &next.blocks[0]));

        let next = doc.move_block(&nav, Direction::Down);
        assert!(Arc::ptr_eq(&doc.blocks[0], &next.blocks[1]));
    }

    #[test]
    fn test_repair_ids() {
        let block = template(BlockKind::Text).with_instance_id(InstanceId::new("dup"));
        let doc = Document::with_blocks(
            vec![block.clone(), block, template(BlockKind::Faq)],
            GlobalSettings::default(),
        );

        let repaired = doc.repair_ids(&mut ids());
        let all: HashSet<&InstanceId> = repaired.instance_ids().collect();
        assert_eq!(all.len(), 3);
        assert!(repaired.instance_ids().all(|id| id.is_assigned()));
        assert_eq!(repaired.blocks().next().unwrap().instance_id().as_str(), "dup");
    }

    #[test]
    fn test_document_serialization() {
        let mut ids = ids();
        let project = Project::starter(&mut ids);

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(back, project);
        assert_eq!(kinds(&back.document), vec![BlockKind::Navigation, BlockKind::Hero]);
    }
}
