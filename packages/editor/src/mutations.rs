//! # Document Mutations
//!
//! Serializable editing commands over a page document.
//!
//! ## Mutation Semantics
//!
//! ### InsertBlock
//! - Appends the catalog template for `kind` with a fresh instance id
//!
//! ### UpdateBlock
//! - Whole-block replacement; the caller supplies the merged record
//! - The instance id of the target is kept even if `block` carries another
//!
//! ### MoveBlock
//! - Swaps with the neighbour in `direction`
//! - No-op at either boundary
//!
//! ### RemoveBlock / DuplicateBlock
//! - Duplicates land directly after the original
//!
//! Every mutation is total: a missing target yields the input document.
//! `validate` reports why a mutation would be a no-op without applying it.

use pagecraft_model::{
    Block, BlockKind, Direction, Document, GlobalSettings, IdGenerator, InstanceId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

/// Structural edits to a page document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new block of `kind`
    InsertBlock { kind: BlockKind },

    /// Replace a block wholesale
    UpdateBlock {
        instance_id: InstanceId,
        block: Block,
    },

    /// Swap a block with its previous or next sibling
    MoveBlock {
        instance_id: InstanceId,
        direction: Direction,
    },

    RemoveBlock { instance_id: InstanceId },

    /// Clone a block right after itself
    DuplicateBlock { instance_id: InstanceId },

    /// Replace page-level settings
    UpdateSettings { settings: GlobalSettings },
}

/// Reasons a mutation would leave the document unchanged
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(InstanceId),

    #[error("Block {0} is already at the boundary")]
    AtBoundary(InstanceId),
}

/// Result of applying a mutation
#[derive(Debug, Clone)]
pub struct MutationResult {
    /// The new document (equal to the input for no-op mutations)
    pub document: Document,

    /// Instance id of a block created by `InsertBlock`
    pub inserted: Option<InstanceId>,
}

impl Mutation {
    /// Apply to `doc`, returning the new document
    #[instrument(skip_all, fields(mutation = self.name()))]
    pub fn apply(&self, doc: &Document, ids: &mut IdGenerator) -> MutationResult {
        let mut inserted = None;

        let document = match self {
            Mutation::InsertBlock { kind } => {
                let (document, instance_id) = doc.insert(*kind, ids);
                inserted = Some(instance_id);
                document
            }

            Mutation::UpdateBlock { instance_id, block } => doc.update(instance_id, block.clone()),

            Mutation::MoveBlock {
                instance_id,
                direction,
            } => doc.move_block(instance_id, *direction),

            Mutation::RemoveBlock { instance_id } => doc.remove(instance_id),

            Mutation::DuplicateBlock { instance_id } => doc.duplicate(instance_id, ids),

            Mutation::UpdateSettings { settings } => doc.with_settings(settings.clone()),
        };

        MutationResult { document, inserted }
    }

    /// Check whether the mutation would change `doc`, without applying it
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::InsertBlock { .. } | Mutation::UpdateSettings { .. } => Ok(()),

            Mutation::UpdateBlock { instance_id, .. }
            | Mutation::RemoveBlock { instance_id }
            | Mutation::DuplicateBlock { instance_id } => {
                doc.position(instance_id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::BlockNotFound(instance_id.clone()))
            }

            Mutation::MoveBlock {
                instance_id,
                direction,
            } => {
                let index = doc
                    .position(instance_id)
                    .ok_or_else(|| MutationError::BlockNotFound(instance_id.clone()))?;

                let at_boundary = match direction {
                    Direction::Up => index == 0,
                    Direction::Down => index + 1 == doc.len(),
                };

                if at_boundary {
                    Err(MutationError::AtBoundary(instance_id.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Block the mutation targets, if any
    pub fn target(&self) -> Option<&InstanceId> {
        match self {
            Mutation::UpdateBlock { instance_id, .. }
            | Mutation::MoveBlock { instance_id, .. }
            | Mutation::RemoveBlock { instance_id }
            | Mutation::DuplicateBlock { instance_id } => Some(instance_id),
            Mutation::InsertBlock { .. } | Mutation::UpdateSettings { .. } => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Mutation::InsertBlock { .. } => "insert",
            Mutation::UpdateBlock { .. } => "update",
            Mutation::MoveBlock { .. } => "move",
            Mutation::RemoveBlock { .. } => "remove",
            Mutation::DuplicateBlock { .. } => "duplicate",
            Mutation::UpdateSettings { .. } => "settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Document, IdGenerator, InstanceId, InstanceId) {
        let mut ids = IdGenerator::from_seed("m".to_string());
        let (doc, nav) = Document::new().insert(BlockKind::Navigation, &mut ids);
        let (doc, hero) = doc.insert(BlockKind::Hero, &mut ids);
        (doc, ids, nav, hero)
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::MoveBlock {
            instance_id: InstanceId::new("m-1"),
            direction: Direction::Down,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
        assert!(json.contains("\"down\""));
    }

    #[test]
    fn test_insert_reports_new_id() {
        let (doc, mut ids, _, _) = setup();
        let result = Mutation::InsertBlock {
            kind: BlockKind::Pricing,
        }
        .apply(&doc, &mut ids);

        let inserted = result.inserted.unwrap();
        assert_eq!(result.document.position(&inserted), Some(2));
    }

    #[test]
    fn test_validation_reports_noops() {
        let (doc, _, nav, hero) = setup();

        let up = Mutation::MoveBlock {
            instance_id: nav.clone(),
            direction: Direction::Up,
        };
        assert_eq!(up.validate(&doc), Err(MutationError::AtBoundary(nav.clone())));

        let down = Mutation::MoveBlock {
            instance_id: nav,
            direction: Direction::Down,
        };
        assert!(down.validate(&doc).is_ok());

        let ghost = InstanceId::new("ghost");
        let remove = Mutation::RemoveBlock {
            instance_id: ghost.clone(),
        };
        assert_eq!(remove.validate(&doc), Err(MutationError::BlockNotFound(ghost)));

        let dup = Mutation::DuplicateBlock { instance_id: hero };
        assert!(dup.validate(&doc).is_ok());
    }

    #[test]
    fn test_invalid_mutation_is_identity() {
        let (doc, mut ids, _, _) = setup();
        let result = Mutation::RemoveBlock {
            instance_id: InstanceId::new("ghost"),
        }
        .apply(&doc, &mut ids);
        assert_eq!(result.document, doc);
        assert!(result.inserted.is_none());
    }
}
