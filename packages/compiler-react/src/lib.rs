//! # Pagecraft React Compiler
//!
//! Renders a page document as a single default-exported `Page` component.
//! List fields become `.map()` calls over inline JSON, item conditionals
//! become ternaries, so the component stays editable by hand.

mod compiler;
mod context;

pub use compiler::{compile_page, compile_to_react, react_artifact, MIME_TYPE};
pub use context::{CompileOptions, CompilerContext};
