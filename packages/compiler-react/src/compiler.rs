use crate::context::{CompileOptions, CompilerContext};
use pagecraft_evaluator::{
    lower_document, Artifact, Element, Expr, Node, PageIr, RepeatSource, SectionIr,
};
use pagecraft_model::{Document, GlobalSettings};
use tracing::{debug, info, instrument};

pub const MIME_TYPE: &str = "text/plain";

/// Compile a document to a React page component
#[instrument(
    skip(document, options),
    fields(blocks = document.len(), typescript = options.use_typescript)
)]
pub fn compile_to_react(document: &Document, options: CompileOptions) -> String {
    info!("Starting React compilation");
    let page = lower_document(document);
    let output = compile_page(&page, options);
    info!(bytes = output.len(), "React compilation complete");
    output
}

/// Compile a document into the `Page.tsx` / `Page.jsx` artifact
pub fn react_artifact(document: &Document, options: CompileOptions) -> Artifact {
    let file_name = options.file_name();
    Artifact::new(file_name, MIME_TYPE, compile_to_react(document, options))
}

/// Render an already lowered page
pub fn compile_page(page: &PageIr, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);

    ctx.add_line("import React from \"react\";");
    ctx.add("\n");

    if ctx.options.use_typescript {
        ctx.add_line("const Page: React.FC = () => {");
    } else {
        ctx.add_line("const Page = () => {");
    }
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();

    compile_root_open(&page.settings, &ctx);
    ctx.indent();
    for section in &page.sections {
        compile_section(section, &ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    ctx.add_line("};");
    ctx.add("\n");
    ctx.add_line("export default Page;");

    ctx.get_output()
}

fn compile_root_open(settings: &GlobalSettings, ctx: &CompilerContext) {
    let mut entries: Vec<String> = settings
        .palette()
        .iter()
        .map(|(name, value)| format!("{}: {}", string_literal(name), string_literal(value)))
        .collect();
    entries.push("backgroundColor: \"var(--color-bg)\"".to_string());
    entries.push("color: \"var(--color-text)\"".to_string());
    entries.push(format!(
        "fontFamily: {}",
        string_literal(&format!(
            "'{}', {}",
            settings.font_family.web_font(),
            settings.font_family.generic()
        ))
    ));

    let cast = if ctx.options.use_typescript {
        " as React.CSSProperties"
    } else {
        ""
    };
    ctx.add_line(&format!(
        "<div className=\"min-h-screen\" style={{{{ {} }}{}}}>",
        entries.join(", "),
        cast
    ));
}

fn compile_section(section: &SectionIr, ctx: &CompilerContext) {
    debug!(kind = %section.kind, instance_id = %section.instance_id, "Compiling section");

    ctx.add_line(&format!("{{/* {} */}}", section.kind.replace("*/", "")));

    let mut open = String::from("<section");
    if let Some(anchor) = &section.anchor {
        open.push_str(&format!(" id={}", attribute_literal(anchor)));
    }
    open.push_str(&format!(" className={}", attribute_literal(&section.style.class_name())));

    let declarations: Vec<String> = section
        .style
        .background
        .iter()
        .map(|(property, value)| format!("{}: {}", style_key(property), string_literal(value)))
        .collect();
    if !declarations.is_empty() {
        open.push_str(&format!(" style={{{{ {} }}}}", declarations.join(", ")));
    }
    open.push('>');

    ctx.add_line(&open);
    ctx.indent();
    compile_nodes(&section.body, ctx);
    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_nodes(nodes: &[Node], ctx: &CompilerContext) {
    for node in nodes {
        compile_node(node, ctx);
    }
}

fn compile_node(node: &Node, ctx: &CompilerContext) {
    match node {
        Node::Element(element) => compile_element(element, ctx),
        Node::Text(expr) => ctx.add_line(&text_content(expr)),
        Node::Repeat { binding, source, body } => compile_repeat(binding, source, body, ctx),
        Node::Conditional {
            condition,
            then,
            otherwise,
        } => compile_conditional(condition, then, otherwise, ctx),
    }
}

fn compile_element(element: &Element, ctx: &CompilerContext) {
    let mut open = format!("<{}", element.tag);

    for (name, expr) in &element.attributes {
        open.push(' ');
        open.push_str(&react_attribute(name));
        open.push('=');
        match expr {
            Expr::Literal(value) => open.push_str(&attribute_literal(value)),
            _ => open.push_str(&format!("{{{}}}", compile_expression(expr))),
        }
    }

    if !element.styles.is_empty() {
        let entries: Vec<String> = element
            .styles
            .iter()
            .map(|(property, expr)| {
                format!("{}: {}", style_key(property), compile_expression(expr))
            })
            .collect();
        open.push_str(&format!(" style={{{{ {} }}}}", entries.join(", ")));
    }

    if let Some(markup) = &element.inner_html {
        open.push_str(&format!(
            " dangerouslySetInnerHTML={{{{ __html: {} }}}} />",
            compile_expression(markup)
        ));
        ctx.add_line(&open);
        return;
    }

    if element.children.is_empty() {
        open.push_str(" />");
        ctx.add_line(&open);
        return;
    }

    open.push('>');

    if element.children.iter().all(|child| matches!(child, Node::Text(_))) {
        for child in &element.children {
            if let Node::Text(expr) = child {
                open.push_str(&text_content(expr));
            }
        }
        open.push_str(&format!("</{}>", element.tag));
        ctx.add_line(&open);
        return;
    }

    ctx.add_line(&open);
    ctx.indent();
    compile_nodes(&element.children, ctx);
    ctx.dedent();
    ctx.add_line(&format!("</{}>", element.tag));
}

fn compile_repeat(binding: &str, source: &RepeatSource, body: &[Node], ctx: &CompilerContext) {
    let collection = match source {
        RepeatSource::Items(items) => items.to_string(),
        RepeatSource::Field(expr) => format!("{}?", compile_expression(expr)),
        RepeatSource::Range(count) => format!("Array.from({{ length: {} }}, (_, i) => i)", count),
    };
    let index = format!("{}Index", binding);

    // An empty inline list is `never[]` to the type checker
    let params = if ctx.options.use_typescript {
        format!("{}: any, {}: number", binding, index)
    } else {
        format!("{}, {}", binding, index)
    };

    ctx.add_line(&format!("{{{}.map(({}) => (", collection, params));
    ctx.indent();
    ctx.add_line(&format!("<React.Fragment key={{{}}}>", index));
    ctx.indent();
    compile_nodes(body, ctx);
    ctx.dedent();
    ctx.add_line("</React.Fragment>");
    ctx.dedent();
    ctx.add_line("))}");
}

fn compile_conditional(condition: &Expr, then: &[Node], otherwise: &[Node], ctx: &CompilerContext) {
    ctx.add_line(&format!("{{{} ? (", compile_expression(condition)));
    compile_fragment(then, ctx);

    if otherwise.is_empty() {
        ctx.add_line(") : null}");
    } else {
        ctx.add_line(") : (");
        compile_fragment(otherwise, ctx);
        ctx.add_line(")}");
    }
}

fn compile_fragment(nodes: &[Node], ctx: &CompilerContext) {
    ctx.indent();
    ctx.add_line("<>");
    ctx.indent();
    compile_nodes(nodes, ctx);
    ctx.dedent();
    ctx.add_line("</>");
    ctx.dedent();
}

fn compile_expression(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => string_literal(value),
        Expr::Number(value) => number_literal(*value),
        Expr::Field { binding, path } => {
            let mut out = binding.clone();
            for segment in path {
                out.push('.');
                out.push_str(segment);
            }
            out
        }
        Expr::Template(parts) => {
            let mut out = String::from("`");
            for part in parts {
                match part {
                    Expr::Literal(text) => out.push_str(&escape_template(text)),
                    other => out.push_str(&format!("${{{}}}", compile_expression(other))),
                }
            }
            out.push('`');
            out
        }
        Expr::Or(left, right) => binary(left, "||", right),
        Expr::Equals(left, right) => binary(left, "===", right),
        Expr::LessThan(left, right) => binary(left, "<", right),
        Expr::Ternary {
            condition,
            then,
            otherwise,
        } => format!(
            "({} ? {} : {})",
            compile_expression(condition),
            compile_expression(then),
            compile_expression(otherwise)
        ),
    }
}

fn binary(left: &Expr, operator: &str, right: &Expr) -> String {
    format!(
        "({} {} {})",
        compile_expression(left),
        operator,
        compile_expression(right)
    )
}

fn text_content(expr: &Expr) -> String {
    format!("{{{}}}", compile_expression(expr))
}

/// HTML attribute name → React prop name
fn react_attribute(name: &str) -> &str {
    match name {
        "class" => "className",
        "for" => "htmlFor",
        "frameborder" => "frameBorder",
        "tabindex" => "tabIndex",
        _ => name,
    }
}

/// CSS property → style object key; custom properties stay quoted
fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        return string_literal(property);
    }

    let mut key = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            key.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            key.push(c);
        }
    }
    key
}

/// JS string literal
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Plain `"..."` JSX attribute when safe, otherwise an expression container
fn attribute_literal(value: &str) -> String {
    let plain = !value.contains(['"', '\\', '&', '{', '}', '\n']);
    if plain {
        format!("\"{}\"", value)
    } else {
        format!("{{{}}}", string_literal(value))
    }
}

fn number_literal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}
