//! # Pagecraft Evaluator
//!
//! Lowers a `Document` into the page IR shared by the HTML and React
//! generators, and resolves abstract style fields to concrete classes and
//! declarations.
//!
//! ```text
//! Document ──lower──▶ PageIr ──▶ compiler-html  (unrolled markup)
//!                            └─▶ compiler-react (list expressions)
//! ```

pub mod artifact;
pub mod expr;
pub mod ir;
pub mod lower;
pub mod style;

pub use artifact::Artifact;
pub use expr::{evaluate, is_truthy, to_display_string, Scope};
pub use ir::{Element, Expr, Node, PageIr, RepeatSource, ResolvedStyle, SectionIr};
pub use lower::{lower_block, lower_document};
pub use style::{
    resolve_animation_class_name, resolve_background, resolve_gap, resolve_grid_columns,
    resolve_padding, resolve_padding_token, resolve_radius, spacing_value, Axis, Declaration,
};
