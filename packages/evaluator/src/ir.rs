//! # Page IR
//!
//! The single intermediate representation both generators render.
//!
//! A page is a list of sections, one per block, in document order. Each
//! section carries its resolved style and a small element tree. Values in
//! the tree are `Expr`s: block-level fields are already folded into
//! `Expr::Literal`, while item-level fields stay symbolic (`Expr::Field`) so
//! the component renderer can emit them as list-rendering expressions and
//! the markup renderer can unroll them.

use crate::style::{
    resolve_animation_class_name, resolve_background, resolve_padding, Axis, Declaration,
};
use pagecraft_model::{BaseFields, GlobalSettings, InstanceId};
use serde_json::Value;

/// Lowered page
#[derive(Debug, Clone, PartialEq)]
pub struct PageIr {
    pub settings: GlobalSettings,
    pub sections: Vec<SectionIr>,
}

/// One block, lowered
#[derive(Debug, Clone, PartialEq)]
pub struct SectionIr {
    /// Serialized kind tag; also the tag of unsupported blocks
    pub kind: String,
    pub instance_id: InstanceId,
    /// Section `id`, omitted when the block has no anchor
    pub anchor: Option<String>,
    pub style: ResolvedStyle,
    pub body: Vec<Node>,
}

/// Style values resolved from a block's base fields
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub padding_top: String,
    pub padding_bottom: String,
    pub animation: Option<&'static str>,
    pub background: Vec<Declaration>,
    /// Corner class applied to the block's primary surface (cards, buttons)
    pub radius: Option<&'static str>,
}

impl ResolvedStyle {
    pub fn from_base(base: &BaseFields, radius: Option<&'static str>) -> Self {
        Self {
            padding_top: resolve_padding(base.padding_top, Axis::Top),
            padding_bottom: resolve_padding(base.padding_bottom, Axis::Bottom),
            animation: resolve_animation_class_name(base.animation),
            background: resolve_background(&base.background),
            radius,
        }
    }

    /// Section class list
    pub fn class_name(&self) -> String {
        let mut class = format!("{} {}", self.padding_top, self.padding_bottom);
        if let Some(animation) = self.animation {
            class.push_str(" animate__animated animate__");
            class.push_str(animation);
        }
        class
    }
}

/// Element tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),

    /// Escaped text
    Text(Expr),

    /// Render `body` once per item of `source`, with the item bound to `binding`
    Repeat {
        binding: String,
        source: RepeatSource,
        body: Vec<Node>,
    },

    Conditional {
        condition: Expr,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
}

impl Node {
    pub fn text(expr: impl Into<Expr>) -> Self {
        Node::Text(expr.into())
    }

    pub fn repeat(binding: &str, source: RepeatSource, body: Vec<Node>) -> Self {
        Node::Repeat {
            binding: binding.to_string(),
            source,
            body,
        }
    }

    pub fn when(condition: Expr, then: Vec<Node>) -> Self {
        Node::Conditional {
            condition,
            then,
            otherwise: Vec::new(),
        }
    }

    pub fn if_else(condition: Expr, then: Vec<Node>, otherwise: Vec<Node>) -> Self {
        Node::Conditional {
            condition,
            then,
            otherwise,
        }
    }
}

/// Where a `Repeat` gets its items
#[derive(Debug, Clone, PartialEq)]
pub enum RepeatSource {
    /// Inline JSON array (a block's list field)
    Items(Value),
    /// A list reached through an enclosing binding
    Field(Expr),
    /// The integers `0..n`
    Range(usize),
}

/// HTML element. Attribute and style names use HTML/CSS spelling; renderers
/// translate them to their target idiom.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, Expr)>,
    pub styles: Vec<(&'static str, Expr)>,
    /// Trusted markup rendered without escaping; replaces `children`
    pub inner_html: Option<Expr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            styles: Vec::new(),
            inner_html: None,
            children: Vec::new(),
        }
    }

    /// Shorthand for `new(tag).class(class)`
    pub fn with_class(tag: &'static str, class: impl Into<String>) -> Self {
        Self::new(tag).class(class)
    }

    /// Set the class attribute. Extra whitespace from empty optional
    /// classes is collapsed.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        let class = class.split_whitespace().collect::<Vec<_>>().join(" ");
        if class.is_empty() {
            return self;
        }
        self.attr("class", Expr::Literal(class))
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<Expr>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<Expr>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn html(mut self, markup: impl Into<Expr>) -> Self {
        self.inner_html = Some(markup.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<Expr>) -> Self {
        self.child(Node::text(text))
    }

    /// Value of a literal attribute, if set
    pub fn literal_attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find_map(|(key, value)| match value {
            Expr::Literal(text) if *key == name => Some(text.as_str()),
            _ => None,
        })
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Value expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(String),
    Number(f64),
    /// `binding.path.to.field`; an empty path is the bound item itself
    Field { binding: String, path: Vec<String> },
    /// Concatenation of the parts' display strings
    Template(Vec<Expr>),
    /// Left if truthy, else right
    Or(Box<Expr>, Box<Expr>),
    Equals(Box<Expr>, Box<Expr>),
    LessThan(Box<Expr>, Box<Expr>),
    Ternary {
        condition: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    /// `field("plan", "badgeText")`, `field("feature", "")`
    pub fn field(binding: &str, path: &str) -> Self {
        Expr::Field {
            binding: binding.to_string(),
            path: path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn or(self, fallback: impl Into<Expr>) -> Self {
        Expr::Or(Box::new(self), Box::new(fallback.into()))
    }

    pub fn equals(self, other: impl Into<Expr>) -> Self {
        Expr::Equals(Box::new(self), Box::new(other.into()))
    }

    pub fn less_than(self, other: impl Into<Expr>) -> Self {
        Expr::LessThan(Box::new(self), Box::new(other.into()))
    }

    pub fn ternary(condition: Expr, then: impl Into<Expr>, otherwise: impl Into<Expr>) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
    }

    /// True if the expression reads no bindings
    pub fn is_static(&self) -> bool {
        match self {
            Expr::Literal(_) | Expr::Number(_) => true,
            Expr::Field { .. } => false,
            Expr::Template(parts) => parts.iter().all(Expr::is_static),
            Expr::Or(a, b) | Expr::Equals(a, b) | Expr::LessThan(a, b) => {
                a.is_static() && b.is_static()
            }
            Expr::Ternary {
                condition,
                then,
                otherwise,
            } => condition.is_static() && then.is_static() && otherwise.is_static(),
        }
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Literal(text.to_string())
    }
}

impl From<String> for Expr {
    fn from(text: String) -> Self {
        Expr::Literal(text)
    }
}

impl From<&String> for Expr {
    fn from(text: &String) -> Self {
        Expr::Literal(text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{Animation, Background, Spacing};

    #[test]
    fn test_section_class_name() {
        let mut base = BaseFields::default();
        assert_eq!(ResolvedStyle::from_base(&base, None).class_name(), "pt-20 pb-20");

        base.padding_top = Spacing::Xl;
        base.animation = Animation::ZoomIn;
        base.background = Background::image("a.png");
        let style = ResolvedStyle::from_base(&base, Some("rounded-xl"));

        assert_eq!(style.class_name(), "pt-48 pb-20 animate__animated animate__zoomIn");
        assert_eq!(style.background.len(), 3);
    }

    #[test]
    fn test_class_collapses_empty_parts() {
        let element = Element::with_class("div", format!("p-8 {} border", ""));
        assert_eq!(element.literal_attr("class"), Some("p-8 border"));

        let element = Element::with_class("div", " ");
        assert!(element.attributes.is_empty());
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(
            Expr::field("plan", "badgeText"),
            Expr::Field {
                binding: "plan".to_string(),
                path: vec!["badgeText".to_string()]
            }
        );
        assert_eq!(
            Expr::field("feature", ""),
            Expr::Field {
                binding: "feature".to_string(),
                path: vec![]
            }
        );
    }

    #[test]
    fn test_is_static() {
        assert!(Expr::from("x").is_static());
        assert!(!Expr::field("item", "name").is_static());
        assert!(!Expr::Template(vec![Expr::from("\""), Expr::field("item", "quote")]).is_static());
        assert!(Expr::from("a").or("b").is_static());
    }
}
