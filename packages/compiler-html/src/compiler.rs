use pagecraft_evaluator::{
    evaluate, is_truthy, lower_document, to_display_string, Artifact, Element, Node, PageIr,
    RepeatSource, Scope, SectionIr,
};
use pagecraft_model::{Document, GlobalSettings};
use serde_json::Value;
use tracing::{debug, info, instrument};

pub const FILE_NAME: &str = "index.html";
pub const MIME_TYPE: &str = "text/html";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const MATERIAL_SYMBOLS: &str =
    "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@20..48,100..700,0..1,-50..200";
const ANIMATE_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/animate.css/4.1.1/animate.min.css";

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    /// Nesting of mixed text/element content, where layout whitespace would render
    inline: usize,
    buffer: String,
    scope: Scope,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            inline: 0,
            buffer: String::new(),
            scope: Scope::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.add(text);
        self.newline();
    }

    fn add_indent(&mut self) {
        if !self.layout() {
            return;
        }
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.layout() {
            self.add("\n");
        }
    }

    fn layout(&self) -> bool {
        self.options.pretty && self.inline == 0
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a document to a standalone HTML page
#[instrument(skip(document, options), fields(blocks = document.len()))]
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    info!("Starting HTML compilation");
    let page = lower_document(document);
    let output = compile_page(&page, options);
    info!(bytes = output.len(), "HTML compilation complete");
    output
}

/// Compile a document into the `index.html` artifact
pub fn html_artifact(document: &Document) -> Artifact {
    Artifact::new(FILE_NAME, MIME_TYPE, compile_to_html(document, CompileOptions::default()))
}

/// Render an already lowered page
pub fn compile_page(page: &PageIr, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&page.settings, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    for section in &page.sections {
        compile_section(section, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(settings: &GlobalSettings, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_text(&settings.title)));
    meta(ctx, "name", "description", &settings.description);

    let optional = [
        ("name", "keywords", &settings.keywords),
        ("name", "author", &settings.author),
        ("name", "robots", &settings.robots),
    ];
    for (key, name, value) in optional {
        if !value.is_empty() {
            meta(ctx, key, name, value);
        }
    }

    meta(ctx, "property", "og:title", &settings.title);
    meta(ctx, "property", "og:description", &settings.description);
    if !settings.og_image.is_empty() {
        meta(ctx, "property", "og:image", &settings.og_image);
    }

    ctx.add_line(&format!("<script src=\"{}\"></script>", TAILWIND_CDN));
    ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", MATERIAL_SYMBOLS));
    ctx.add_line(&format!("<link rel=\"stylesheet\" href=\"{}\">", ANIMATE_CSS));
    ctx.add_line(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_attribute(&font_url(settings))
    ));

    ctx.add_line("<style>");
    ctx.indent();
    ctx.add_line(":root {");
    ctx.indent();
    for (name, value) in settings.palette() {
        ctx.add_line(&format!("{}: {};", name, value));
    }
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line(&format!(
        "body {{ font-family: '{}', {}; background-color: var(--color-bg); color: var(--color-text); }}",
        settings.font_family.web_font(),
        settings.font_family.generic()
    ));
    ctx.add_line(
        ".material-symbols-outlined { font-variation-settings: 'FILL' 0, 'wght' 400, 'GRAD' 0, 'opsz' 24; }",
    );
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

fn meta(ctx: &mut Context, key: &str, name: &str, content: &str) {
    ctx.add_line(&format!(
        "<meta {}=\"{}\" content=\"{}\">",
        key,
        name,
        escape_attribute(content)
    ));
}

/// Google Fonts stylesheet for the configured family
pub fn font_url(settings: &GlobalSettings) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}:wght@300;400;500;600;700;800&display=swap",
        settings.font_family.web_font().replace(' ', "+")
    )
}

fn compile_section(section: &SectionIr, ctx: &mut Context) {
    debug!(kind = %section.kind, instance_id = %section.instance_id, "Compiling section");

    ctx.add_indent();
    ctx.add("<section");
    if let Some(anchor) = &section.anchor {
        ctx.add(&format!(" id=\"{}\"", escape_attribute(anchor)));
    }
    ctx.add(&format!(" class=\"{}\"", section.style.class_name()));

    let declarations: Vec<String> = section
        .style
        .background
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect();
    if !declarations.is_empty() {
        ctx.add(&format!(" style=\"{}\"", escape_attribute(&declarations.join(" "))));
    }
    ctx.add(">");
    ctx.newline();

    ctx.indent();
    compile_nodes(&section.body, ctx);
    ctx.dedent();

    ctx.add_line("</section>");
}

fn compile_nodes(nodes: &[Node], ctx: &mut Context) {
    for node in nodes {
        compile_node(node, ctx);
    }
}

fn compile_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Element(element) => compile_element(element, ctx),

        Node::Text(expr) => {
            let text = to_display_string(&evaluate(expr, &ctx.scope));
            ctx.add_line(&escape_text(&text));
        }

        Node::Repeat { binding, source, body } => {
            for item in repeat_items(source, &ctx.scope) {
                ctx.scope.push(binding, item);
                compile_nodes(body, ctx);
                ctx.scope.pop();
            }
        }

        Node::Conditional {
            condition,
            then,
            otherwise,
        } => {
            if is_truthy(&evaluate(condition, &ctx.scope)) {
                compile_nodes(then, ctx);
            } else {
                compile_nodes(otherwise, ctx);
            }
        }
    }
}

fn repeat_items(source: &RepeatSource, scope: &Scope) -> Vec<Value> {
    match source {
        RepeatSource::Items(Value::Array(items)) => items.clone(),
        RepeatSource::Items(_) => Vec::new(),
        RepeatSource::Field(expr) => match evaluate(expr, scope) {
            Value::Array(items) => items,
            _ => Vec::new(),
        },
        RepeatSource::Range(count) => (0..*count).map(Value::from).collect(),
    }
}

fn compile_element(element: &Element, ctx: &mut Context) {
    ctx.add_indent();
    ctx.add(&format!("<{}", element.tag));
    compile_attributes(element, ctx);
    ctx.add(">");

    if is_self_closing(element.tag) {
        ctx.newline();
        return;
    }

    if let Some(markup) = &element.inner_html {
        let markup = to_display_string(&evaluate(markup, &ctx.scope));
        ctx.add(&markup);
    } else if let Some(text) = inline_text(element, &ctx.scope) {
        ctx.add(&escape_text(&text));
    } else if has_mixed_content(element) {
        ctx.inline += 1;
        compile_nodes(&element.children, ctx);
        ctx.inline -= 1;
    } else if !element.children.is_empty() {
        ctx.newline();
        ctx.indent();
        compile_nodes(&element.children, ctx);
        ctx.dedent();
        ctx.add_indent();
    }

    ctx.add(&format!("</{}>", element.tag));
    ctx.newline();
}

/// Children that are all text render on the element's own line
fn inline_text(element: &Element, scope: &Scope) -> Option<String> {
    let mut text = String::new();
    for child in &element.children {
        match child {
            Node::Text(expr) => text.push_str(&to_display_string(&evaluate(expr, scope))),
            _ => return None,
        }
    }
    (!element.children.is_empty()).then_some(text)
}

/// Text next to element siblings; a line break between them would render as a space
fn has_mixed_content(element: &Element) -> bool {
    let text = element.children.iter().any(|child| matches!(child, Node::Text(_)));
    let other = element.children.iter().any(|child| !matches!(child, Node::Text(_)));
    text && other
}

fn compile_attributes(element: &Element, ctx: &mut Context) {
    for (name, expr) in &element.attributes {
        match evaluate(expr, &ctx.scope) {
            Value::Bool(true) => ctx.add(&format!(" {}", name)),
            Value::Bool(false) | Value::Null => {}
            value => ctx.add(&format!(
                " {}=\"{}\"",
                name,
                escape_attribute(&to_display_string(&value))
            )),
        }
    }

    let declarations: Vec<String> = element
        .styles
        .iter()
        .map(|(property, expr)| (property, to_display_string(&evaluate(expr, &ctx.scope))))
        .filter(|(_, value)| !value.is_empty())
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect();
    if !declarations.is_empty() {
        ctx.add(&format!(" style=\"{}\"", escape_attribute(&declarations.join(" "))));
    }
}

fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attribute(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "source"
            | "wbr"
    )
}
