//! Abstract style fields shared by every block.
//!
//! These are the inputs of the style resolution rules in
//! `pagecraft-evaluator`; the model only stores the abstract value.

use serde::{Deserialize, Serialize};

token_enum! {
    /// Seven-step vertical spacing scale
    pub enum Spacing {
        None => "none",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
    }
    fallback = Md;
}

token_enum! {
    /// Corner radius scale
    pub enum Radius {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
    fallback = Md;
}

token_enum! {
    /// Named entrance animation
    pub enum Animation {
        None => "none",
        FadeIn => "fade-in",
        SlideUp => "slide-up",
        SlideDown => "slide-down",
        SlideLeft => "slide-left",
        SlideRight => "slide-right",
        ZoomIn => "zoom-in",
        Bounce => "bounce",
    }
    fallback = None;
}

/// Block background. Exactly one mode is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Background {
    Solid { color: String },
    Gradient { css: String },
    Image { url: String },
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Self {
        Background::Solid {
            color: color.into(),
        }
    }

    pub fn gradient(css: impl Into<String>) -> Self {
        Background::Gradient { css: css.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Background::Image { url: url.into() }
    }

    /// Mode name (`solid`, `gradient`, `image`)
    pub fn mode(&self) -> &'static str {
        match self {
            Background::Solid { .. } => "solid",
            Background::Gradient { .. } => "gradient",
            Background::Image { .. } => "image",
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::solid("transparent")
    }
}

/// Gradient offered when a block switches to gradient mode
pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
