//! # Lowering
//!
//! Document → `PageIr`. One fixed template per block kind; block-level
//! switches (`show_button`, layout style, image side...) are decided here,
//! item-level ones become `Conditional` nodes.

use crate::ir::{Element, Expr, Node, PageIr, RepeatSource, ResolvedStyle, SectionIr};
use crate::style::{resolve_gap, resolve_grid_columns, resolve_radius, spacing_value};
use pagecraft_model::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Lower every block of `document`, in order
#[instrument(skip(document), fields(blocks = document.len()))]
pub fn lower_document(document: &Document) -> PageIr {
    let sections: Vec<SectionIr> = document.blocks().map(lower_block).collect();
    info!(sections = sections.len(), "Lowered document");

    PageIr {
        settings: document.settings().clone(),
        sections,
    }
}

/// Lower a single block into its section
pub fn lower_block(block: &Block) -> SectionIr {
    let base = &block.base;
    debug!(kind = %block.content.tag(), instance_id = %base.instance_id, "Lowering block");

    let (radius, body) = match &block.content {
        BlockContent::Navigation(c) => (Some(c.button_radius), navigation(c)),
        BlockContent::Hero(c) => (Some(c.button_radius), hero(c)),
        BlockContent::Feature(c) => (Some(c.card_radius), feature(c)),
        BlockContent::Cta(c) => (Some(c.button_radius), cta(c)),
        BlockContent::Footer(c) => (None, footer(c)),
        BlockContent::Split(c) => (None, split(c)),
        BlockContent::Map(c) => (None, map(c)),
        BlockContent::Form(c) => (Some(c.button_radius), form(c, &base.background)),
        BlockContent::Image(c) => (Some(c.border_radius), image(c)),
        BlockContent::Text(c) => (None, text(c)),
        BlockContent::Button(c) => (Some(c.radius), button(c)),
        BlockContent::Divider(c) => (None, divider(c)),
        BlockContent::Pricing(c) => (Some(c.radius), pricing(c)),
        BlockContent::Testimonial(c) => (Some(c.radius), testimonial(c)),
        BlockContent::Team(c) => (Some(c.radius), team(c)),
        BlockContent::Faq(c) => (None, faq(c)),
        BlockContent::Unsupported { kind } => {
            warn!(kind = %kind, "Unsupported block kind, rendering placeholder");
            (None, placeholder(kind))
        }
    };

    let radius = radius.map(resolve_radius);

    SectionIr {
        kind: block.content.tag().to_string(),
        instance_id: base.instance_id.clone(),
        anchor: base.anchor().map(str::to_string),
        style: ResolvedStyle::from_base(base, radius),
        body: body.into_iter().map(Node::from).collect(),
    }
}

fn container(extra: &str) -> Element {
    Element::with_class("div", format!("container mx-auto px-4 {}", extra))
}

fn items<T: Serialize>(list: &[T]) -> RepeatSource {
    let value = serde_json::to_value(list).unwrap_or_else(|err| {
        warn!(error = %err, "Failed to serialize list field");
        Value::Array(Vec::new())
    });
    RepeatSource::Items(value)
}

fn justify(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "justify-start",
        Alignment::Center => "justify-center",
        Alignment::Right => "justify-end",
    }
}

fn when(flag: bool, class: &str) -> &str {
    if flag {
        class
    } else {
        ""
    }
}

// ---------------------------------------------------------------------------
// Layout blocks
// ---------------------------------------------------------------------------

fn navigation(c: &NavigationContent) -> Vec<Element> {
    let radius = resolve_radius(c.button_radius);

    let logo = match c.logo_type {
        LogoType::Image => Element::new("img")
            .attr("src", &c.logo_image)
            .attr("alt", &c.logo_text)
            .style("width", format!("{}px", c.logo_width)),
        LogoType::Text => Element::with_class("div", "text-2xl font-bold")
            .style("color", &c.text_color)
            .text(&c.logo_text),
    };

    let cta = c.show_button.then(|| {
        Element::with_class("a", format!("px-5 py-2 {} font-bold text-center", radius))
            .attr("href", &c.button_url)
            .style("background-color", &c.button_bg)
            .style("color", &c.button_text_color)
            .text(&c.button_text)
    });

    let root = match c.layout_style {
        LayoutStyle::Sidebar => {
            let links = Node::repeat(
                "link",
                items(&c.links),
                vec![Element::with_class("a", "block py-2 font-medium")
                    .attr("href", Expr::field("link", "href"))
                    .style("color", &c.link_color)
                    .text(Expr::field("link", "label"))
                    .into()],
            );

            Element::with_class("div", "flex flex-col h-full w-64 p-6 fixed left-0 top-0 bottom-0 shadow-lg z-50")
                .style("background-color", &c.menu_bg_color)
                .child(Element::with_class("div", "mb-10").child(logo))
                .child(Element::with_class("div", "flex flex-col gap-4 flex-1").child(links))
                .children(cta.map(Node::from))
        }
        LayoutStyle::Topbar => {
            let placement = match c.layout {
                Alignment::Left => "mr-auto",
                Alignment::Center => "mx-auto",
                Alignment::Right => "ml-auto",
            };

            let links = Node::repeat(
                "link",
                items(&c.links),
                vec![Element::with_class("a", "font-medium")
                    .attr("href", Expr::field("link", "href"))
                    .style("color", &c.link_color)
                    .text(Expr::field("link", "label"))
                    .into()],
            );

            container("flex items-center gap-8 h-16")
                .child(logo)
                .child(
                    Element::with_class("div", format!("hidden md:flex gap-8 {}", placement))
                        .child(links),
                )
                .children(cta.map(Node::from))
        }
    };

    vec![root]
}

fn hero(c: &HeroContent) -> Vec<Element> {
    let radius = resolve_radius(c.button_radius);
    let mut buttons = Element::with_class("div", format!("flex gap-4 {}", justify(c.alignment)));

    if c.show_button1 {
        buttons = buttons.child(
            Element::with_class("a", format!("px-8 py-3 {} font-bold shadow-lg", radius))
                .attr("href", &c.button1_url)
                .style("background-color", &c.button1_bg)
                .style("color", &c.button1_color)
                .text(&c.button1_text),
        );
    }
    if c.show_button2 {
        buttons = buttons.child(
            Element::with_class("a", format!("px-8 py-3 {} font-bold border", radius))
                .attr("href", &c.button2_url)
                .style("background-color", &c.button2_bg)
                .style("color", &c.button2_color)
                .style("border-color", &c.button2_color)
                .text(&c.button2_text),
        );
    }

    vec![container(&format!("text-{} py-20 relative z-10", c.alignment))
        .child(
            Element::with_class("h1", "text-4xl md:text-6xl font-bold mb-6")
                .style("color", &c.heading_color)
                .text(&c.heading),
        )
        .child(
            Element::with_class("p", "text-xl md:text-2xl mb-8")
                .style("color", &c.subheading_color)
                .text(&c.subheading),
        )
        .child(buttons)]
}

fn feature(c: &FeatureContent) -> Vec<Element> {
    let card = Element::with_class(
        "div",
        format!("p-6 {} {}", resolve_radius(c.card_radius), when(c.shadow, "shadow-sm")),
    )
    .style("background-color", &c.card_bg_color)
    .child(
        Element::with_class("div", "w-12 h-12 rounded-lg flex items-center justify-center mb-4")
            .style("background-color", &c.icon_bg_color)
            .style("color", &c.icon_color)
            .child(
                Element::with_class("span", "material-symbols-outlined")
                    .text(Expr::field("feature", "icon")),
            ),
    )
    .child(
        Element::with_class("h3", "text-xl font-bold mb-2")
            .style("color", &c.feature_title_color)
            .text(Expr::field("feature", "title")),
    )
    .child(
        Element::new("p")
            .style("color", &c.feature_desc_color)
            .text(Expr::field("feature", "description")),
    );

    vec![container("")
        .child(
            Element::with_class("div", "text-center mb-16 max-w-4xl mx-auto")
                .child(
                    Element::with_class("h2", "text-3xl font-bold mb-4")
                        .style("color", &c.title_color)
                        .text(&c.title),
                )
                .child(
                    Element::with_class("p", "text-lg")
                        .style("color", &c.description_color)
                        .text(&c.description),
                ),
        )
        .child(
            Element::with_class(
                "div",
                format!("grid {} {}", resolve_gap(c.gap), resolve_grid_columns(c.grid_cols)),
            )
            .child(Node::repeat("feature", items(&c.features), vec![card.into()])),
        )]
}

fn cta(c: &CtaContent) -> Vec<Element> {
    let mut content = container("text-center relative z-10")
        .child(
            Element::with_class("h2", "text-4xl font-bold mb-6")
                .style("color", &c.heading_color)
                .text(&c.heading),
        )
        .child(
            Element::with_class("p", "text-xl mb-8 max-w-2xl mx-auto")
                .style("color", &c.subtext_color)
                .text(&c.subtext),
        );

    if c.show_button {
        content = content.child(
            Element::with_class(
                "a",
                format!(
                    "inline-block px-8 py-4 font-bold {} shadow-lg transition-transform hover:-translate-y-1",
                    resolve_radius(c.button_radius)
                ),
            )
            .attr("href", &c.destination_url)
            .style("background-color", &c.button_bg)
            .style("color", &c.button_text_color)
            .text(&c.button_text),
        );
    }

    let mut wrapper = Element::with_class("div", "relative");
    if c.overlay_opacity > 0 {
        let opacity = f64::from(c.overlay_opacity.min(100)) / 100.0;
        wrapper = wrapper.child(
            Element::with_class("div", "absolute inset-0 bg-black pointer-events-none")
                .style("opacity", opacity.to_string()),
        );
    }

    vec![wrapper.child(content)]
}

fn footer(c: &FooterContent) -> Vec<Element> {
    vec![container("py-8 flex flex-col md:flex-row justify-between items-center gap-4")
        .child(
            Element::new("div")
                .style("color", &c.text_color)
                .text(&c.copyright_text),
        )
        .child(Element::with_class("div", "flex gap-4").child(Node::repeat(
            "social",
            items(&c.social_links),
            vec![Element::with_class("a", "capitalize")
                .attr("href", Expr::field("social", "url"))
                .style("color", &c.icon_color)
                .text(Expr::field("social", "platform"))
                .into()],
        )))]
}

fn split(c: &SplitContent) -> Vec<Element> {
    let direction = match c.image_side {
        ImageSide::Right => "md:flex-row",
        ImageSide::Left => "md:flex-row-reverse",
    };
    let (text_width, image_width) = match c.split_ratio {
        SplitRatio::Even => ("flex-1", "flex-1"),
        SplitRatio::TextNarrow => ("w-full md:w-2/5", "w-full md:w-3/5"),
        SplitRatio::TextWide => ("w-full md:w-3/5", "w-full md:w-2/5"),
    };

    vec![container("py-12").child(
        Element::with_class("div", format!("flex flex-col {} items-center gap-12", direction))
            .child(
                Element::with_class("div", text_width)
                    .child(
                        Element::with_class("h2", "text-3xl font-bold mb-4")
                            .style("color", &c.text_color)
                            .text(&c.title),
                    )
                    .child(Element::new("div").style("color", &c.text_color).html(&c.content)),
            )
            .child(
                Element::with_class("div", image_width).child(
                    Element::with_class("img", "rounded-lg shadow-xl w-full")
                        .attr("src", &c.image_url)
                        .attr("alt", &c.title),
                ),
            ),
    )]
}

fn map(c: &MapContent) -> Vec<Element> {
    let src = format!(
        "https://maps.google.com/maps?q={}&z={}&output=embed",
        urlencoding::encode(&c.address),
        c.zoom
    );

    vec![container("").child(
        Element::with_class("div", "w-full rounded-xl overflow-hidden shadow-md")
            .style("height", format!("{}px", c.height))
            .child(
                Element::new("iframe")
                    .attr("width", "100%")
                    .attr("height", "100%")
                    .attr("frameborder", "0")
                    .attr("loading", "lazy")
                    .attr("title", "Map")
                    .attr("src", src),
            ),
    )]
}

fn form(c: &FormContent, background: &Background) -> Vec<Element> {
    let card_bg = match background {
        Background::Solid { color } if color != "transparent" => color.as_str(),
        _ => "#ffffff",
    };

    let input = |tag: &'static str| {
        let element = Element::with_class(tag, "w-full p-3 rounded border");
        let element = if tag == "input" {
            element.attr("type", Expr::field("field", "type"))
        } else {
            element
        };
        element
            .attr("placeholder", Expr::field("field", "placeholder"))
            .attr("required", Expr::field("field", "required"))
            .style("background", &c.input_bg)
            .style("border-color", &c.input_border_color)
    };

    let field = Element::with_class("div", "flex flex-col gap-1")
        .child(
            Element::with_class("label", "font-semibold text-sm")
                .style("color", &c.text_color)
                .text(Expr::field("field", "label")),
        )
        .child(Node::if_else(
            Expr::field("field", "type").equals("textarea"),
            vec![input("textarea").into()],
            vec![input("input").into()],
        ));

    vec![container("").child(
        Element::with_class(
            "div",
            format!("max-w-2xl mx-auto p-8 rounded-xl {}", when(c.box_shadow, "shadow-2xl")),
        )
        .style("background-color", card_bg)
        .child(
            Element::with_class("div", "text-center mb-10")
                .child(
                    Element::with_class("h2", "text-3xl font-bold mb-2")
                        .style("color", &c.text_color)
                        .text(&c.title),
                )
                .child(Element::new("p").style("color", &c.text_color).text(&c.subtitle)),
        )
        .child(
            Element::with_class("form", "space-y-6")
                .child(Node::repeat("field", items(&c.fields), vec![field.into()]))
                .child(
                    Element::with_class(
                        "button",
                        format!(
                            "w-full py-4 font-bold {} shadow-lg hover:shadow-xl",
                            resolve_radius(c.button_radius)
                        ),
                    )
                    .attr("type", "submit")
                    .style("background-color", &c.button_bg)
                    .style("color", &c.button_text_color)
                    .text(&c.submit_text),
                ),
        ),
    )]
}

// ---------------------------------------------------------------------------
// Atomic blocks
// ---------------------------------------------------------------------------

fn image(c: &ImageContent) -> Vec<Element> {
    let width = match c.width {
        ImageWidth::Full => "w-full",
        ImageWidth::Auto => "max-w-5xl",
        ImageWidth::Half => "w-1/2",
        ImageWidth::ThreeQuarters => "w-3/4",
    };
    let fixed_ratio = c.aspect_ratio != AspectRatio::Auto;

    let mut img = Element::with_class(
        "img",
        format!(
            "w-full h-auto {} {} {}",
            resolve_radius(c.border_radius),
            when(c.shadow, "shadow-lg"),
            when(fixed_ratio, "object-cover")
        ),
    )
    .attr("src", &c.url)
    .attr("alt", &c.alt);
    if fixed_ratio {
        img = img.style("aspect-ratio", c.aspect_ratio.as_str());
    }

    let mut figure = Element::with_class("figure", format!("inline-block {}", width)).child(img);
    if !c.caption.is_empty() {
        figure = figure.child(
            Element::with_class("figcaption", "mt-2 text-center text-sm text-gray-500")
                .text(&c.caption),
        );
    }

    vec![container(&format!("text-{}", c.align)).child(figure)]
}

fn text(c: &TextContent) -> Vec<Element> {
    let weight = match c.font_weight {
        FontWeight::Normal => "400",
        FontWeight::Medium => "500",
        FontWeight::Bold => "700",
        FontWeight::Black => "900",
    };

    vec![container("").child(
        Element::with_class(c.tag.as_str(), format!("text-{}", c.font_size))
            .style("text-align", c.align.as_str())
            .style("font-weight", weight)
            .style("color", &c.color)
            .html(&c.content),
    )]
}

fn button(c: &ButtonContent) -> Vec<Element> {
    let (background, color, border) = match c.variant {
        ButtonVariant::Solid => (c.button_bg.clone(), c.button_color.clone(), "none".to_string()),
        ButtonVariant::Outline => (
            "transparent".to_string(),
            c.button_bg.clone(),
            format!("2px solid {}", c.button_bg),
        ),
        ButtonVariant::Ghost => (
            "transparent".to_string(),
            c.button_bg.clone(),
            "none".to_string(),
        ),
    };

    vec![container(&format!("flex {}", justify(c.align))).child(
        Element::with_class(
            "a",
            format!(
                "inline-block px-6 py-3 font-bold transition-opacity hover:opacity-80 {} {}",
                resolve_radius(c.radius),
                when(c.width == ButtonWidth::Full, "w-full text-center")
            ),
        )
        .attr("href", &c.url)
        .style("background-color", background)
        .style("color", color)
        .style("border", border)
        .text(&c.text),
    )]
}

fn divider(c: &DividerContent) -> Vec<Element> {
    let width = match c.line_width {
        LineWidth::Full => "100%",
        LineWidth::Short => "20%",
        LineWidth::Middle => "50%",
    };

    let mut root = container(&format!("py-{}", spacing_value(c.height)));
    if c.show_line {
        root = root.child(
            Element::new("div")
                .style("height", "1px")
                .style("background-color", &c.line_color)
                .style("width", width)
                .style("margin", "0 auto"),
        );
    }
    vec![root]
}

// ---------------------------------------------------------------------------
// Marketing blocks
// ---------------------------------------------------------------------------

fn pricing(c: &PricingContent) -> Vec<Element> {
    let radius = resolve_radius(c.radius);
    let popular = || Expr::field("plan", "isPopular");

    let badge = Element::with_class(
        "div",
        "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-1/2 px-3 py-1 text-xs font-bold text-white rounded-full uppercase tracking-wide",
    )
    .style("background-color", &c.accent_color)
    .text(Expr::field("plan", "badgeText").or("Most Popular"));

    let feature = Element::with_class("li", "flex items-center gap-2")
        .child(Element::new("span").style("color", &c.accent_color).text("✔"))
        .child(Node::text(" "))
        .child(
            Element::new("span")
                .style("color", &c.text_color)
                .text(Expr::field("feature", "")),
        );

    let card = Element::with_class("div", format!("relative p-8 border {} flex flex-col", radius))
        .style("background-color", &c.card_bg)
        .style("border-color", Expr::ternary(popular(), &c.accent_color, "#e5e7eb"))
        .child(Node::when(popular(), vec![badge.into()]))
        .child(
            Element::with_class("h3", "text-xl font-bold mb-4")
                .style("color", &c.text_color)
                .text(Expr::field("plan", "name")),
        )
        .child(
            Element::with_class("div", "text-4xl font-bold mb-6")
                .style("color", &c.text_color)
                .text(Expr::field("plan", "price"))
                .child(
                    Element::with_class("span", "text-lg opacity-70")
                        .text(Expr::field("plan", "period")),
                ),
        )
        .child(Element::with_class("ul", "mb-8 space-y-3 flex-1").child(Node::repeat(
            "feature",
            RepeatSource::Field(Expr::field("plan", "features")),
            vec![feature.into()],
        )))
        .child(
            Element::with_class(
                "a",
                format!(
                    "block text-center py-3 {} font-bold transition-opacity hover:opacity-90",
                    radius
                ),
            )
            .attr("href", "#")
            .style("background-color", Expr::ternary(popular(), &c.accent_color, "#f3f4f6"))
            .style("color", Expr::ternary(popular(), "#fff", "#1f2937"))
            .text(Expr::field("plan", "buttonText")),
        );

    vec![container("py-12").child(
        Element::with_class("div", "grid md:grid-cols-3 gap-8").child(Node::repeat(
            "plan",
            items(&c.plans),
            vec![card.into()],
        )),
    )]
}

fn testimonial(c: &TestimonialContent) -> Vec<Element> {
    let (list_class, card_extra) = match c.layout {
        TestimonialLayout::Grid => ("grid md:grid-cols-3 gap-8", ""),
        TestimonialLayout::Slider => (
            "flex gap-8 overflow-x-auto snap-x snap-mandatory pb-4",
            "min-w-[300px] snap-center",
        ),
    };

    let star = Element::with_class("span", "material-symbols-outlined text-sm").text(Expr::ternary(
        Expr::field("star", "").less_than(Expr::field("item", "rating").or(Expr::Number(5.0))),
        "star",
        "star_border",
    ));

    let avatar = Node::if_else(
        Expr::field("item", "avatar"),
        vec![Element::with_class("img", "w-12 h-12 rounded-full object-cover")
            .attr("src", Expr::field("item", "avatar"))
            .attr("alt", Expr::field("item", "name"))
            .into()],
        vec![
            Element::with_class("div", "w-12 h-12 rounded-full bg-gray-200 flex items-center justify-center")
                .child(
                    Element::with_class("span", "material-symbols-outlined text-gray-400")
                        .text("person"),
                )
                .into(),
        ],
    );

    let card = Element::with_class(
        "div",
        format!("p-8 {} shadow-sm border border-gray-100 {}", resolve_radius(c.radius), card_extra),
    )
    .style("background-color", &c.card_bg)
    .child(
        Element::with_class("div", "flex gap-1 mb-4")
            .style("color", &c.star_color)
            .child(Node::repeat("star", RepeatSource::Range(5), vec![star.into()])),
    )
    .child(
        Element::with_class("p", "text-lg italic mb-6 opacity-80")
            .style("color", &c.text_color)
            .text(Expr::Template(vec![
                Expr::from("\""),
                Expr::field("item", "quote"),
                Expr::from("\""),
            ])),
    )
    .child(
        Element::with_class("div", "flex items-center gap-4").child(avatar).child(
            Element::new("div")
                .child(
                    Element::with_class("p", "font-bold")
                        .style("color", &c.text_color)
                        .text(Expr::field("item", "name")),
                )
                .child(
                    Element::with_class("p", "text-sm opacity-60")
                        .style("color", &c.text_color)
                        .text(Expr::field("item", "role")),
                ),
        ),
    );

    vec![container("").child(
        Element::with_class("div", list_class).child(Node::repeat(
            "item",
            items(&c.items),
            vec![card.into()],
        )),
    )]
}

fn team(c: &TeamContent) -> Vec<Element> {
    let card = Element::with_class("div", format!("text-center p-6 {}", resolve_radius(c.radius)))
        .style("background-color", &c.card_bg)
        .child(
            Element::with_class("div", "w-40 h-40 mx-auto mb-6 overflow-hidden rounded-full bg-gray-200 shadow-md")
                .child(
                    Element::with_class("img", "w-full h-full object-cover")
                        .attr("src", Expr::field("member", "image"))
                        .attr("alt", Expr::field("member", "name")),
                ),
        )
        .child(
            Element::with_class("h3", "text-xl font-bold mb-1")
                .style("color", &c.text_color)
                .text(Expr::field("member", "name")),
        )
        .child(
            Element::with_class("p", "text-sm uppercase tracking-wide opacity-70 mb-4")
                .style("color", &c.text_color)
                .text(Expr::field("member", "role")),
        )
        .child(
            Element::with_class("p", "opacity-80 max-w-xs mx-auto")
                .style("color", &c.text_color)
                .text(Expr::field("member", "bio")),
        );

    vec![container("")
        .child(
            Element::with_class("h2", "text-4xl font-bold text-center mb-16")
                .style("color", &c.text_color)
                .text(&c.heading),
        )
        .child(
            Element::with_class("div", "grid sm:grid-cols-2 lg:grid-cols-3 gap-12")
                .child(Node::repeat("member", items(&c.members), vec![card.into()])),
        )]
}

fn faq(c: &FaqContent) -> Vec<Element> {
    let entry = Element::with_class("details", "group p-6 rounded-xl cursor-pointer")
        .style("background-color", &c.card_bg)
        .child(
            Element::with_class("summary", "flex justify-between items-center font-bold list-none")
                .child(
                    Element::new("span")
                        .style("color", &c.question_color)
                        .text(Expr::field("item", "question")),
                )
                .child(
                    Element::with_class("span", "material-symbols-outlined").text("expand_more"),
                ),
        )
        .child(
            Element::with_class("div", "mt-4 opacity-90 leading-relaxed")
                .style("color", &c.answer_color)
                .text(Expr::field("item", "answer")),
        );

    vec![container("max-w-3xl")
        .child(
            Element::with_class("h2", "text-3xl font-bold text-center mb-12")
                .style("color", &c.question_color)
                .text(&c.heading),
        )
        .child(Element::with_class("div", "space-y-4").child(Node::repeat(
            "item",
            items(&c.items),
            vec![entry.into()],
        )))]
}

fn placeholder(kind: &str) -> Vec<Element> {
    vec![container("py-12")
        .child(
            Element::with_class("h2", "text-2xl font-bold")
                .text(format!("Block Type: {}", kind)),
        )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(section: &SectionIr) -> &Element {
        match &section.body[0] {
            Node::Element(element) => element,
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_every_kind_lowers_to_one_root() {
        for kind in BlockKind::ALL {
            let section = lower_block(&template(kind));
            assert_eq!(section.kind, kind.as_str());
            assert_eq!(section.body.len(), 1, "{} should have a single root", kind);
        }
    }

    #[test]
    fn test_anchor_and_style() {
        let section = lower_block(&template(BlockKind::Hero));
        assert_eq!(section.anchor.as_deref(), Some("hero"));
        assert_eq!(section.style.padding_top, "pt-48");
        assert_eq!(section.style.radius, Some("rounded-lg"));

        let section = lower_block(&template(BlockKind::Text));
        assert_eq!(section.anchor, None);
        assert_eq!(section.style.radius, None);
    }

    #[test]
    fn test_unsupported_kind_renders_placeholder() {
        let block: Block = serde_json::from_value(serde_json::json!({
            "type": "carousel",
            "instanceId": "x-1"
        }))
        .unwrap();

        let section = lower_block(&block);
        assert_eq!(section.kind, "carousel");

        let heading = match &first_element(&section).children[0] {
            Node::Element(h2) => h2,
            other => panic!("Expected heading, got {:?}", other),
        };
        assert_eq!(heading.children, vec![Node::text("Block Type: carousel")]);
    }

    #[test]
    fn test_navigation_layouts_differ() {
        let mut block = template(BlockKind::Navigation);
        let topbar = lower_block(&block);

        if let BlockContent::Navigation(nav) = &mut block.content {
            nav.layout_style = LayoutStyle::Sidebar;
        }
        let sidebar = lower_block(&block);

        let class = |s: &SectionIr| {
            first_element(s)
                .literal_attr("class")
                .unwrap_or_default()
                .to_string()
        };
        assert!(class(&topbar).starts_with("container"));
        assert!(class(&sidebar).contains("fixed"));
    }

    #[test]
    fn test_hidden_buttons_are_dropped() {
        let mut block = template(BlockKind::Hero);
        if let BlockContent::Hero(hero) = &mut block.content {
            hero.show_button1 = false;
            hero.show_button2 = false;
        }

        let section = lower_block(&block);
        let buttons = match first_element(&section).children.last() {
            Some(Node::Element(div)) => div,
            other => panic!("Expected button row, got {:?}", other),
        };
        assert!(buttons.children.is_empty());
    }

    #[test]
    fn test_map_address_is_encoded() {
        let section = lower_block(&template(BlockKind::Map));
        let frame = match &first_element(&section).children[0] {
            Node::Element(frame) => match &frame.children[0] {
                Node::Element(iframe) => iframe.clone(),
                other => panic!("Expected iframe, got {:?}", other),
            },
            other => panic!("Expected frame, got {:?}", other),
        };

        assert_eq!(
            frame.literal_attr("src"),
            Some("https://maps.google.com/maps?q=New%20York%2C%20NY&z=12&output=embed")
        );
    }

    #[test]
    fn test_lower_document_keeps_order() {
        let mut ids = IdGenerator::new("lower");
        let (doc, _) = Document::new().insert(BlockKind::Footer, &mut ids);
        let (doc, _) = doc.insert(BlockKind::Navigation, &mut ids);

        let page = lower_document(&doc);
        let kinds: Vec<&str> = page.sections.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, vec!["footer", "navigation"]);
        assert_eq!(page.settings.title, "My Awesome Site");
    }
}
