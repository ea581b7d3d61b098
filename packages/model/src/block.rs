//! Block instances: shared base fields plus a kind-specific payload.

use crate::content::*;
use crate::error::ModelError;
use crate::id_generator::InstanceId;
use crate::style::{Animation, Background, Spacing};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Navigation,
    Hero,
    Feature,
    Cta,
    Footer,
    Split,
    Map,
    Form,
    Image,
    Text,
    Button,
    Divider,
    Pricing,
    Testimonial,
    Team,
    Faq,
}

impl BlockKind {
    pub const ALL: [BlockKind; 16] = [
        BlockKind::Navigation,
        BlockKind::Hero,
        BlockKind::Feature,
        BlockKind::Cta,
        BlockKind::Footer,
        BlockKind::Split,
        BlockKind::Map,
        BlockKind::Form,
        BlockKind::Image,
        BlockKind::Text,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Pricing,
        BlockKind::Testimonial,
        BlockKind::Team,
        BlockKind::Faq,
    ];

    /// Serialized tag (`"navigation"`, `"hero"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Navigation => "navigation",
            BlockKind::Hero => "hero",
            BlockKind::Feature => "feature",
            BlockKind::Cta => "cta",
            BlockKind::Footer => "footer",
            BlockKind::Split => "split",
            BlockKind::Map => "map",
            BlockKind::Form => "form",
            BlockKind::Image => "image",
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Pricing => "pricing",
            BlockKind::Testimonial => "testimonial",
            BlockKind::Team => "team",
            BlockKind::Faq => "faq",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(D::Error::custom)
    }
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

/// Fields shared by every block kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseFields {
    /// Catalog identifier; shared by every instance of a template
    pub id: String,

    /// Unique per block; assigned at creation and never changed
    pub instance_id: InstanceId,

    /// In-page link target, rendered as the section `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,

    pub background: Background,
    pub padding_top: Spacing,
    pub padding_bottom: Spacing,
    pub animation: Animation,
}

impl Default for BaseFields {
    fn default() -> Self {
        Self {
            id: String::new(),
            instance_id: InstanceId::unassigned(),
            anchor_id: None,
            background: Background::default(),
            padding_top: Spacing::Md,
            padding_bottom: Spacing::Md,
            animation: Animation::None,
        }
    }
}

impl BaseFields {
    /// The anchor as a section id, if one is set and non-empty
    pub fn anchor(&self) -> Option<&str> {
        self.anchor_id.as_deref().filter(|a| !a.is_empty())
    }
}

/// Kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Navigation(NavigationContent),
    Hero(HeroContent),
    Feature(FeatureContent),
    Cta(CtaContent),
    Footer(FooterContent),
    Split(SplitContent),
    Map(MapContent),
    Form(FormContent),
    Image(ImageContent),
    Text(TextContent),
    Button(ButtonContent),
    Divider(DividerContent),
    Pricing(PricingContent),
    Testimonial(TestimonialContent),
    Team(TeamContent),
    Faq(FaqContent),

    /// A block whose `type` tag is outside the known kinds. Only produced
    /// when loading serialized documents; renders as a placeholder.
    Unsupported { kind: String },
}

impl BlockContent {
    /// Default payload for a kind
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Navigation => BlockContent::Navigation(Default::default()),
            BlockKind::Hero => BlockContent::Hero(Default::default()),
            BlockKind::Feature => BlockContent::Feature(Default::default()),
            BlockKind::Cta => BlockContent::Cta(Default::default()),
            BlockKind::Footer => BlockContent::Footer(Default::default()),
            BlockKind::Split => BlockContent::Split(Default::default()),
            BlockKind::Map => BlockContent::Map(Default::default()),
            BlockKind::Form => BlockContent::Form(Default::default()),
            BlockKind::Image => BlockContent::Image(Default::default()),
            BlockKind::Text => BlockContent::Text(Default::default()),
            BlockKind::Button => BlockContent::Button(Default::default()),
            BlockKind::Divider => BlockContent::Divider(Default::default()),
            BlockKind::Pricing => BlockContent::Pricing(Default::default()),
            BlockKind::Testimonial => BlockContent::Testimonial(Default::default()),
            BlockKind::Team => BlockContent::Team(Default::default()),
            BlockKind::Faq => BlockContent::Faq(Default::default()),
        }
    }

    /// Kind of this payload; `None` for unsupported payloads
    pub fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            BlockContent::Navigation(_) => BlockKind::Navigation,
            BlockContent::Hero(_) => BlockKind::Hero,
            BlockContent::Feature(_) => BlockKind::Feature,
            BlockContent::Cta(_) => BlockKind::Cta,
            BlockContent::Footer(_) => BlockKind::Footer,
            BlockContent::Split(_) => BlockKind::Split,
            BlockContent::Map(_) => BlockKind::Map,
            BlockContent::Form(_) => BlockKind::Form,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Button(_) => BlockKind::Button,
            BlockContent::Divider(_) => BlockKind::Divider,
            BlockContent::Pricing(_) => BlockKind::Pricing,
            BlockContent::Testimonial(_) => BlockKind::Testimonial,
            BlockContent::Team(_) => BlockKind::Team,
            BlockContent::Faq(_) => BlockKind::Faq,
            BlockContent::Unsupported { .. } => return None,
        };
        Some(kind)
    }

    /// The serialized `type` tag
    pub fn tag(&self) -> &str {
        match self {
            BlockContent::Unsupported { kind } => kind,
            other => other.kind().map(BlockKind::as_str).unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let value = match self {
            BlockContent::Navigation(c) => serde_json::to_value(c)?,
            BlockContent::Hero(c) => serde_json::to_value(c)?,
            BlockContent::Feature(c) => serde_json::to_value(c)?,
            BlockContent::Cta(c) => serde_json::to_value(c)?,
            BlockContent::Footer(c) => serde_json::to_value(c)?,
            BlockContent::Split(c) => serde_json::to_value(c)?,
            BlockContent::Map(c) => serde_json::to_value(c)?,
            BlockContent::Form(c) => serde_json::to_value(c)?,
            BlockContent::Image(c) => serde_json::to_value(c)?,
            BlockContent::Text(c) => serde_json::to_value(c)?,
            BlockContent::Button(c) => serde_json::to_value(c)?,
            BlockContent::Divider(c) => serde_json::to_value(c)?,
            BlockContent::Pricing(c) => serde_json::to_value(c)?,
            BlockContent::Testimonial(c) => serde_json::to_value(c)?,
            BlockContent::Team(c) => serde_json::to_value(c)?,
            BlockContent::Faq(c) => serde_json::to_value(c)?,
            BlockContent::Unsupported { .. } => Value::Object(Map::new()),
        };

        match value {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }

    fn from_fields(kind: BlockKind, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            BlockKind::Navigation => BlockContent::Navigation(serde_json::from_value(value)?),
            BlockKind::Hero => BlockContent::Hero(serde_json::from_value(value)?),
            BlockKind::Feature => BlockContent::Feature(serde_json::from_value(value)?),
            BlockKind::Cta => BlockContent::Cta(serde_json::from_value(value)?),
            BlockKind::Footer => BlockContent::Footer(serde_json::from_value(value)?),
            BlockKind::Split => BlockContent::Split(serde_json::from_value(value)?),
            BlockKind::Map => BlockContent::Map(serde_json::from_value(value)?),
            BlockKind::Form => BlockContent::Form(serde_json::from_value(value)?),
            BlockKind::Image => BlockContent::Image(serde_json::from_value(value)?),
            BlockKind::Text => BlockContent::Text(serde_json::from_value(value)?),
            BlockKind::Button => BlockContent::Button(serde_json::from_value(value)?),
            BlockKind::Divider => BlockContent::Divider(serde_json::from_value(value)?),
            BlockKind::Pricing => BlockContent::Pricing(serde_json::from_value(value)?),
            BlockKind::Testimonial => BlockContent::Testimonial(serde_json::from_value(value)?),
            BlockKind::Team => BlockContent::Team(serde_json::from_value(value)?),
            BlockKind::Faq => BlockContent::Faq(serde_json::from_value(value)?),
        })
    }
}

/// A block instance in a document
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub base: BaseFields,
    pub content: BlockContent,
}

impl Block {
    pub fn new(base: BaseFields, content: BlockContent) -> Self {
        Self { base, content }
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.base.instance_id
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }

    /// Same block with a different instance id
    pub fn with_instance_id(&self, instance_id: InstanceId) -> Self {
        let mut block = self.clone();
        block.base.instance_id = instance_id;
        block
    }

    /// Flat JSON object: base fields, `type`, then payload fields
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let mut fields = match serde_json::to_value(&self.base)? {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        fields.insert("type".to_string(), Value::String(self.content.tag().to_string()));
        fields.extend(self.content.to_fields()?);
        Ok(Value::Object(fields))
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let base = BaseFields::deserialize(&value)?;
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let content = match tag.parse::<BlockKind>() {
            Ok(kind) => BlockContent::from_fields(kind, value)?,
            Err(_) => {
                tracing::warn!(kind = %tag, "loaded block with unsupported kind");
                BlockContent::Unsupported { kind: tag }
            }
        };

        Ok(Self { base, content })
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Block::from_value(value).map_err(D::Error::custom)
    }
}
