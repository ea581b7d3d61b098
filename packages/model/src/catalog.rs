//! # Block Catalog
//!
//! Canonical default instance for every block kind. `template` returns a
//! fresh value each call with no instance id assigned.

use crate::block::{BaseFields, Block, BlockContent, BlockKind};
use crate::style::{Background, Spacing, DEFAULT_GRADIENT};

/// Default block for a kind (no `instance_id` assigned)
pub fn template(kind: BlockKind) -> Block {
    Block::new(base_for(kind), BlockContent::default_for(kind))
}

/// Human readable label for block pickers
pub fn label(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Navigation => "Navigation",
        BlockKind::Hero => "Hero",
        BlockKind::Feature => "Features",
        BlockKind::Cta => "Call to Action",
        BlockKind::Footer => "Footer",
        BlockKind::Split => "Split Content",
        BlockKind::Map => "Map",
        BlockKind::Form => "Contact Form",
        BlockKind::Image => "Image",
        BlockKind::Text => "Text",
        BlockKind::Button => "Button",
        BlockKind::Divider => "Divider",
        BlockKind::Pricing => "Pricing",
        BlockKind::Testimonial => "Testimonials",
        BlockKind::Team => "Team",
        BlockKind::Faq => "FAQ",
    }
}

fn base_for(kind: BlockKind) -> BaseFields {
    let (id, anchor) = match kind {
        BlockKind::Navigation => ("nav", "nav"),
        BlockKind::Hero => ("hero", "hero"),
        BlockKind::Feature => ("feature", "features"),
        BlockKind::Cta => ("cta", "cta"),
        BlockKind::Footer => ("footer", "footer"),
        BlockKind::Split => ("split", "split"),
        BlockKind::Map => ("map", "location"),
        BlockKind::Form => ("form", "contact"),
        BlockKind::Image => ("img", ""),
        BlockKind::Text => ("txt", ""),
        BlockKind::Button => ("btn", ""),
        BlockKind::Divider => ("div", ""),
        BlockKind::Pricing => ("pricing", "pricing"),
        BlockKind::Testimonial => ("testimonial", "reviews"),
        BlockKind::Team => ("team", "team"),
        BlockKind::Faq => ("faq", "faq"),
    };

    let mut base = BaseFields {
        id: id.to_string(),
        anchor_id: (!anchor.is_empty()).then(|| anchor.to_string()),
        ..BaseFields::default()
    };

    match kind {
        BlockKind::Hero => {
            base.padding_top = Spacing::Xl;
            base.padding_bottom = Spacing::Xl;
        }
        BlockKind::Cta => {
            base.background = Background::gradient(DEFAULT_GRADIENT);
            base.padding_top = Spacing::Xl;
            base.padding_bottom = Spacing::Xl;
        }
        BlockKind::Footer => {
            base.background = Background::solid("#111827");
            base.padding_top = Spacing::Lg;
            base.padding_bottom = Spacing::Lg;
        }
        BlockKind::Navigation => {
            base.background = Background::solid("#FFFFFF");
            base.padding_top = Spacing::Sm;
            base.padding_bottom = Spacing::Sm;
        }
        BlockKind::Form => {
            base.background = Background::solid("var(--color-bg)");
        }
        BlockKind::Divider => {
            base.padding_top = Spacing::None;
            base.padding_bottom = Spacing::None;
        }
        _ => {}
    }

    base
}
