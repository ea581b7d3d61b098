//! # Style Resolution Rules
//!
//! Pure lookups from a block's abstract style fields to concrete values.
//! Both generators go through these functions, so markup and component
//! output always agree on every resolved value.
//!
//! Every function is total. Unknown tokens never reach this module: the
//! model parses them leniently into the documented fallback variant.

use pagecraft_model::{Animation, Background, Radius, Spacing};

/// A single CSS declaration (kebab-case property, value)
pub type Declaration = (&'static str, String);

/// Which side of a section a padding value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Top,
    Bottom,
}

/// Background descriptor → declarations. Exactly one branch fires.
pub fn resolve_background(background: &Background) -> Vec<Declaration> {
    match background {
        Background::Solid { color } => vec![("background-color", color.clone())],
        Background::Gradient { css } => vec![("background-image", css.clone())],
        Background::Image { url } => vec![
            ("background-image", format!("url({})", url)),
            ("background-size", "cover".to_string()),
            ("background-position", "center".to_string()),
        ],
    }
}

/// Spacing scale → spacing unit
pub fn spacing_value(spacing: Spacing) -> u32 {
    match spacing {
        Spacing::None => 0,
        Spacing::Xs => 8,
        Spacing::Sm => 12,
        Spacing::Md => 20,
        Spacing::Lg => 32,
        Spacing::Xl => 48,
        Spacing::Xxl => 64,
    }
}

/// Padding scale → class token (`pt-20`, `pb-48`, ...)
pub fn resolve_padding(spacing: Spacing, axis: Axis) -> String {
    let prefix = match axis {
        Axis::Top => "pt",
        Axis::Bottom => "pb",
    };
    format!("{}-{}", prefix, spacing_value(spacing))
}

/// Padding from a raw token; anything outside the scale resolves as `md`
pub fn resolve_padding_token(token: &str, axis: Axis) -> String {
    resolve_padding(Spacing::parse_lossy(token), axis)
}

/// Radius scale → corner class
pub fn resolve_radius(radius: Radius) -> &'static str {
    match radius {
        Radius::None => "rounded-none",
        Radius::Sm => "rounded",
        Radius::Md => "rounded-lg",
        Radius::Lg => "rounded-xl",
        Radius::Xl => "rounded-2xl",
        Radius::Full => "rounded-full",
    }
}

/// Animation → animate.css class name, `None` for no animation
pub fn resolve_animation_class_name(animation: Animation) -> Option<&'static str> {
    let name = match animation {
        Animation::None => return None,
        Animation::FadeIn => "fadeIn",
        Animation::SlideUp => "fadeInUp",
        Animation::SlideDown => "fadeInDown",
        Animation::SlideLeft => "fadeInLeft",
        Animation::SlideRight => "fadeInRight",
        Animation::ZoomIn => "zoomIn",
        Animation::Bounce => "bounceIn",
    };
    Some(name)
}

/// Spacing scale → grid gap class
pub fn resolve_gap(spacing: Spacing) -> &'static str {
    match spacing {
        Spacing::None => "gap-0",
        Spacing::Xs => "gap-2",
        Spacing::Sm => "gap-4",
        Spacing::Md => "gap-6",
        Spacing::Lg => "gap-8",
        Spacing::Xl => "gap-12",
        Spacing::Xxl => "gap-16",
    }
}

/// Feature grid column classes; any count other than 2 or 4 renders as 3
pub fn resolve_grid_columns(cols: u8) -> &'static str {
    match cols {
        2 => "md:grid-cols-2",
        4 => "md:grid-cols-2 lg:grid-cols-4",
        _ => "md:grid-cols-3",
    }
}
