//! # Pagecraft Model
//!
//! Page document model for the Pagecraft builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: BlockKind → default Block          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered blocks + GlobalSettings   │
//! │  - insert / update / move / remove / dup    │
//! │  - every operation returns a new Document   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor (history) / evaluator (codegen IR)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Replace, never mutate**: a `Document` is a value; operations build a new one
//! 2. **instance_id is the only key**: lookups, moves and deletes go through it
//! 3. **Total operations**: an absent id or a boundary move returns the input unchanged
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_model::{BlockKind, Direction, Document, IdGenerator};
//!
//! let mut ids = IdGenerator::new("memory://example");
//! let doc = Document::new();
//! let (doc, nav) = doc.insert(BlockKind::Navigation, &mut ids);
//! let (doc, hero) = doc.insert(BlockKind::Hero, &mut ids);
//!
//! let doc = doc.move_block(&hero, Direction::Up);
//! assert_eq!(doc.position(&hero), Some(0));
//! assert_eq!(doc.position(&nav), Some(1));
//! ```

#[macro_use]
mod macros;

pub mod block;
pub mod catalog;
pub mod content;
pub mod document;
pub mod error;
pub mod id_generator;
pub mod options;
pub mod settings;
pub mod style;

pub use block::{BaseFields, Block, BlockContent, BlockKind};
pub use catalog::template;
pub use content::*;
pub use document::{Direction, Document, Project};
pub use error::ModelError;
pub use id_generator::{get_session_id, IdGenerator, InstanceId};
pub use options::*;
pub use settings::{AppPreferences, FontFamily, GlobalSettings, Language};
pub use style::{Animation, Background, Radius, Spacing};
