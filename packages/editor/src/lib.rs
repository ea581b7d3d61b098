//! # Pagecraft Editor
//!
//! Editing engine for Pagecraft pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document + structural operations     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Mutations (serializable commands)        │
//! │  - Linear undo/redo over snapshots          │
//! │  - Selection + preferences                  │
//! │  - Load/save project files                  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator → compiler-html / compiler-react  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Commit is the only write path**: every mutation goes through `History::commit`
//! 2. **Linear history**: committing after an undo discards the redo branch
//! 3. **No-ops leave no trace**: a mutation that changes nothing adds no undo step
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::EditSession;
//! use pagecraft_model::{BlockKind, Direction};
//!
//! let mut session = EditSession::in_memory();
//! session.insert(BlockKind::Navigation);
//! let hero = session.insert(BlockKind::Hero).unwrap();
//!
//! session.move_block(&hero, Direction::Up);
//! assert_eq!(session.document().position(&hero), Some(0));
//!
//! session.undo();
//! assert_eq!(session.document().position(&hero), Some(1));
//! ```

mod errors;
mod history;
mod mutations;
pub mod project;
mod session;

pub use errors::EditorError;
pub use history::History;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use session::EditSession;
