//! Markup and component output must describe the same page

use pagecraft_compiler_html::compile_to_html;
use pagecraft_compiler_react::{compile_to_react, CompileOptions};
use pagecraft_evaluator::lower_document;
use pagecraft_model::{Animation, Background, BlockKind, Document, IdGenerator, Spacing};

fn every_kind() -> Document {
    let mut ids = IdGenerator::new("isomorphism");
    let doc = BlockKind::ALL
        .iter()
        .fold(Document::new(), |doc, kind| doc.insert(*kind, &mut ids).0);

    // Vary base fields so section classes differ between blocks
    let mut block = doc.blocks().nth(3).unwrap().clone();
    let id = block.instance_id().clone();
    block.base.animation = Animation::Bounce;
    block.base.padding_bottom = Spacing::Xs;
    doc.update(&id, block)
}

fn both(doc: &Document) -> (String, String) {
    (
        compile_to_html(doc, Default::default()),
        compile_to_react(doc, CompileOptions::default()),
    )
}

#[test]
fn test_same_number_of_sections() {
    let doc = every_kind();
    let (html, react) = both(&doc);

    assert_eq!(html.matches("<section").count(), doc.len());
    assert_eq!(react.matches("<section").count(), doc.len());
}

/// Opening `<section ...>` line of every section, in order
fn section_tags(output: &str) -> Vec<&str> {
    output
        .split("<section")
        .skip(1)
        .map(|chunk| chunk.lines().next().unwrap_or_default())
        .collect()
}

fn camel_case(property: &str) -> String {
    let mut parts = property.split('-');
    let mut key = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            key.push(first.to_ascii_uppercase());
            key.push_str(chars.as_str());
        }
    }
    key
}

fn restyle(doc: Document, index: usize, background: Background) -> Document {
    let mut block = doc.blocks().nth(index).unwrap().clone();
    let id = block.instance_id().clone();
    block.base.background = background;
    doc.update(&id, block)
}

#[test]
fn test_section_styles_agree_per_block() {
    let doc = restyle(
        every_kind(),
        0,
        Background::gradient("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    );
    let doc = restyle(doc, 1, Background::image("https://example.com/hero.jpg"));
    let (html, react) = both(&doc);

    let sections = lower_document(&doc).sections;
    let html_tags = section_tags(&html);
    let react_tags = section_tags(&react);
    assert_eq!(html_tags.len(), sections.len());
    assert_eq!(react_tags.len(), sections.len());

    for ((section, html_tag), react_tag) in sections.iter().zip(&html_tags).zip(&react_tags) {
        let style = &section.style;
        assert!(html_tag.contains(&format!("class=\"{}\"", style.class_name())), "{}", html_tag);
        assert!(
            react_tag.contains(&format!("className=\"{}\"", style.class_name())),
            "{}",
            react_tag
        );
        assert!(html_tag.contains(&style.padding_top) && html_tag.contains(&style.padding_bottom));
        assert!(
            react_tag.contains(&style.padding_top)
                && react_tag.contains(&style.padding_bottom)
        );

        for (property, value) in &style.background {
            assert!(html_tag.contains(&format!("{}: {};", property, value)), "{}", html_tag);
            assert!(
                react_tag.contains(&format!("{}: \"{}\"", camel_case(property), value)),
                "{}",
                react_tag
            );
        }
    }

    assert!(html_tags[0].contains("background-image: linear-gradient("));
    assert!(react_tags[0].contains("backgroundImage: \"linear-gradient("));
    assert!(!html_tags[0].contains("background-color"));
    assert!(
        html_tags[1].contains("background-image: url(https://example.com/hero.jpg); background-size: cover;")
    );
    assert!(react_tags[1].contains("backgroundSize: \"cover\", backgroundPosition: \"center\""));
}

#[test]
fn test_section_radius_agrees_per_block() {
    let doc = every_kind();
    let (html, react) = both(&doc);

    let html_sections: Vec<&str> = html.split("<section").skip(1).collect();
    let react_sections: Vec<&str> = react.split("<section").skip(1).collect();

    for (i, section) in lower_document(&doc).sections.iter().enumerate() {
        if let Some(radius) = section.style.radius {
            assert!(html_sections[i].contains(radius), "{} html", section.kind);
            assert!(react_sections[i].contains(radius), "{} react", section.kind);
        }
    }
    assert!(html.contains("animate__bounceIn"));
    assert!(react.contains("animate__bounceIn"));
}

#[test]
fn test_price_and_period_render_without_a_gap() {
    let doc = Document::new().insert(BlockKind::Pricing, &mut IdGenerator::new("price")).0;
    let (html, react) = both(&doc);

    assert!(html.contains(">$9<span class=\"text-lg opacity-70\">/mo</span>"));

    // JSX drops whitespace that contains a line break
    let price = react.find("{plan.price}").unwrap() + "{plan.price}".len();
    let gap_end = price + react[price..].find('<').unwrap();
    let gap = &react[price..gap_end];
    assert!(gap.trim().is_empty() && gap.contains('\n'));
    assert!(
        react[gap_end..].starts_with("<span className=\"text-lg opacity-70\">{plan.period}</span>")
    );
}

#[test]
fn test_palette_values_agree() {
    let doc = every_kind();
    let (html, react) = both(&doc);

    for (name, value) in doc.settings().palette() {
        assert!(html.contains(&format!("{}: {};", name, value)));
        assert!(react.contains(&format!("\"{}\": \"{}\"", name, value)));
    }
}

#[test]
fn test_anchors_agree() {
    let doc = every_kind();
    let (html, react) = both(&doc);

    for section in lower_document(&doc).sections {
        if let Some(anchor) = section.anchor {
            assert!(html.contains(&format!("<section id=\"{}\"", anchor)));
            assert!(react.contains(&format!("<section id=\"{}\"", anchor)));
        }
    }
}

#[test]
fn test_both_generators_are_deterministic() {
    let doc = every_kind();
    assert_eq!(both(&doc), both(&doc));
}

#[test]
fn test_empty_document() {
    let (html, react) = both(&Document::new());

    assert!(!html.contains("<section"));
    assert!(!react.contains("<section"));
    assert!(html.contains("<title>My Awesome Site</title>"));
    assert!(react.contains("export default Page;"));
}
