//! # Pagecraft HTML Compiler
//!
//! Renders a page document as one standalone HTML file: Tailwind classes,
//! palette custom properties in `:root`, one `<section>` per block. List
//! fields are unrolled and item conditionals resolved at compile time.

mod compiler;


pub use compiler::{
    compile_page, compile_to_html, font_url, html_artifact, CompileOptions, FILE_NAME, MIME_TYPE,
};
