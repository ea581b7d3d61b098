//! Kind-specific block payloads.
//!
//! Each payload's `Default` is the catalog default for its kind, so a
//! serialized block that omits a field picks up the same value a freshly
//! inserted block would have.

use crate::options::*;
use crate::style::{Radius, Spacing};
use serde::{Deserialize, Serialize};

const TEXT_COLOR: &str = "var(--color-text)";
const PRIMARY_COLOR: &str = "var(--color-primary)";
const WHITE: &str = "#FFFFFF";

// ---------------------------------------------------------------------------
// List item records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Material Symbols icon name
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub button_text: String,
    pub is_popular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialItem {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Avatar image URL; empty renders a placeholder icon
    pub avatar: String,
    pub quote: String,
    /// Star rating, 0 to 5
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Layout blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationContent {
    pub logo_type: LogoType,
    pub logo_text: String,
    pub logo_image: String,
    pub logo_width: u32,
    pub links: Vec<NavLink>,
    pub layout: Alignment,
    pub layout_style: LayoutStyle,
    pub text_color: String,
    pub link_color: String,
    pub hover_color: String,
    pub menu_bg_color: String,
    pub show_button: bool,
    pub button_text: String,
    pub button_url: String,
    pub button_bg: String,
    pub button_text_color: String,
    pub button_radius: Radius,
}

impl Default for NavigationContent {
    fn default() -> Self {
        Self {
            logo_type: LogoType::Text,
            logo_text: "Brand".into(),
            logo_image: "https://placehold.co/120x40".into(),
            logo_width: 100,
            links: vec![
                nav_link("n1", "Home", "#"),
                nav_link("n2", "About", "#about"),
                nav_link("n3", "Services", "#services"),
            ],
            layout: Alignment::Right,
            layout_style: LayoutStyle::Topbar,
            text_color: TEXT_COLOR.into(),
            link_color: TEXT_COLOR.into(),
            hover_color: PRIMARY_COLOR.into(),
            menu_bg_color: WHITE.into(),
            show_button: true,
            button_text: "Get Started".into(),
            button_url: "#".into(),
            button_bg: PRIMARY_COLOR.into(),
            button_text_color: WHITE.into(),
            button_radius: Radius::Md,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub heading: String,
    pub subheading: String,
    pub alignment: Alignment,
    pub heading_color: String,
    pub subheading_color: String,
    pub show_button1: bool,
    pub button1_text: String,
    pub button1_url: String,
    pub button1_bg: String,
    pub button1_color: String,
    pub show_button2: bool,
    pub button2_text: String,
    pub button2_url: String,
    pub button2_bg: String,
    pub button2_color: String,
    pub button_radius: Radius,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            heading: "Build Your Next Idea Faster".into(),
            subheading: "The perfect starting point for your next project.".into(),
            alignment: Alignment::Center,
            heading_color: TEXT_COLOR.into(),
            subheading_color: TEXT_COLOR.into(),
            show_button1: true,
            button1_text: "Get Started".into(),
            button1_url: "#".into(),
            button1_bg: PRIMARY_COLOR.into(),
            button1_color: WHITE.into(),
            show_button2: true,
            button2_text: "Learn More".into(),
            button2_url: "#".into(),
            button2_bg: "transparent".into(),
            button2_color: TEXT_COLOR.into(),
            button_radius: Radius::Md,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureContent {
    pub title: String,
    pub description: String,
    pub features: Vec<FeatureItem>,
    /// Responsive column count: 2, 3 or 4 (anything else renders as 3)
    pub grid_cols: u8,
    pub gap: Spacing,
    pub title_color: String,
    pub description_color: String,
    pub feature_title_color: String,
    pub feature_desc_color: String,
    pub icon_bg_color: String,
    pub icon_color: String,
    pub card_bg_color: String,
    pub card_radius: Radius,
    pub shadow: bool,
}

impl Default for FeatureContent {
    fn default() -> Self {
        Self {
            title: "Everything you need".into(),
            description: "Possimus magnam voluptatum cupiditate veritatis in.".into(),
            features: vec![
                FeatureItem {
                    id: "f1".into(),
                    title: "Push to deploy".into(),
                    description: "Maiores impedit perferendis suscipit eaque.".into(),
                    icon: "cloud_upload".into(),
                },
                FeatureItem {
                    id: "f2".into(),
                    title: "SSL certificates".into(),
                    description: "Anim aute id magna aliqua ad ad non deserunt sunt.".into(),
                    icon: "lock".into(),
                },
            ],
            grid_cols: 3,
            gap: Spacing::Lg,
            title_color: TEXT_COLOR.into(),
            description_color: TEXT_COLOR.into(),
            feature_title_color: TEXT_COLOR.into(),
            feature_desc_color: TEXT_COLOR.into(),
            icon_bg_color: PRIMARY_COLOR.into(),
            icon_color: WHITE.into(),
            card_bg_color: WHITE.into(),
            card_radius: Radius::Lg,
            shadow: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaContent {
    pub heading: String,
    pub subtext: String,
    pub show_button: bool,
    pub button_text: String,
    pub destination_url: String,
    pub heading_color: String,
    pub subtext_color: String,
    pub button_bg: String,
    pub button_text_color: String,
    pub button_radius: Radius,
    /// Dark overlay opacity, 0 to 100
    pub overlay_opacity: u8,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            heading: "Ready to dive in?".into(),
            subtext: "Start your free trial today.".into(),
            show_button: true,
            button_text: "Get Started Now".into(),
            destination_url: "#".into(),
            heading_color: WHITE.into(),
            subtext_color: "#E5E7EB".into(),
            button_bg: WHITE.into(),
            button_text_color: PRIMARY_COLOR.into(),
            button_radius: Radius::Md,
            overlay_opacity: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub copyright_text: String,
    pub social_links: Vec<SocialLink>,
    pub text_color: String,
    pub icon_color: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            copyright_text: "© 2024 Company. All rights reserved.".into(),
            social_links: vec![
                SocialLink {
                    id: "s1".into(),
                    platform: SocialPlatform::Twitter,
                    url: "#".into(),
                },
                SocialLink {
                    id: "s2".into(),
                    platform: SocialPlatform::Instagram,
                    url: "#".into(),
                },
            ],
            text_color: "#D1D5DB".into(),
            icon_color: "#9CA3AF".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitContent {
    pub image_side: ImageSide,
    pub title: String,
    /// Trusted HTML fragment
    pub content: String,
    pub image_url: String,
    pub text_color: String,
    pub split_ratio: SplitRatio,
}

impl Default for SplitContent {
    fn default() -> Self {
        Self {
            image_side: ImageSide::Right,
            title: "Share your story".into(),
            content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".into(),
            image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?auto=format&fit=crop&w=800&q=80".into(),
            text_color: TEXT_COLOR.into(),
            split_ratio: SplitRatio::Even,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapContent {
    pub address: String,
    /// Frame height in pixels
    pub height: u32,
    pub zoom: u8,
}

impl Default for MapContent {
    fn default() -> Self {
        Self {
            address: "New York, NY".into(),
            height: 400,
            zoom: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormContent {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FormField>,
    pub submit_text: String,
    pub text_color: String,
    pub input_bg: String,
    pub input_border_color: String,
    pub button_bg: String,
    pub button_text_color: String,
    pub button_radius: Radius,
    pub box_shadow: bool,
}

impl Default for FormContent {
    fn default() -> Self {
        Self {
            title: "Contact Us".into(),
            subtitle: "We would love to hear from you.".into(),
            fields: vec![
                form_field("f1", FieldType::Text, "Name", "Your Name"),
                form_field("f2", FieldType::Email, "Email", "your@email.com"),
                form_field("f3", FieldType::Textarea, "Message", "How can we help?"),
            ],
            submit_text: "Send Message".into(),
            text_color: TEXT_COLOR.into(),
            input_bg: WHITE.into(),
            input_border_color: "#E5E7EB".into(),
            button_bg: PRIMARY_COLOR.into(),
            button_text_color: WHITE.into(),
            button_radius: Radius::Md,
            box_shadow: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Atomic blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageContent {
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub width: ImageWidth,
    pub align: Alignment,
    pub border_radius: Radius,
    pub shadow: bool,
    pub aspect_ratio: AspectRatio,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            url: "https://images.unsplash.com/photo-1497215728101-856f4ea42174?auto=format&fit=crop&w=1000&q=80".into(),
            alt: "Office".into(),
            caption: "Our space".into(),
            width: ImageWidth::Full,
            align: Alignment::Center,
            border_radius: Radius::Lg,
            shadow: true,
            aspect_ratio: AspectRatio::Wide,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContent {
    /// Trusted HTML fragment
    pub content: String,
    pub tag: TextTag,
    pub align: TextAlign,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub color: String,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            content: "Start editing this text".into(),
            tag: TextTag::P,
            align: TextAlign::Left,
            font_size: FontSize::Base,
            font_weight: FontWeight::Normal,
            color: TEXT_COLOR.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonContent {
    pub text: String,
    pub url: String,
    pub align: Alignment,
    pub variant: ButtonVariant,
    pub button_bg: String,
    pub button_color: String,
    pub radius: Radius,
    pub width: ButtonWidth,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            text: "Click Me".into(),
            url: "#".into(),
            align: Alignment::Center,
            variant: ButtonVariant::Solid,
            button_bg: PRIMARY_COLOR.into(),
            button_color: WHITE.into(),
            radius: Radius::Md,
            width: ButtonWidth::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividerContent {
    pub line_color: String,
    pub line_width: LineWidth,
    pub height: Spacing,
    pub show_line: bool,
}

impl Default for DividerContent {
    fn default() -> Self {
        Self {
            line_color: "#E5E7EB".into(),
            line_width: LineWidth::Full,
            height: Spacing::Md,
            show_line: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Marketing blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingContent {
    pub plans: Vec<PricingPlan>,
    pub card_bg: String,
    pub text_color: String,
    pub accent_color: String,
    pub radius: Radius,
}

impl Default for PricingContent {
    fn default() -> Self {
        Self {
            plans: vec![
                pricing_plan(
                    "p1",
                    "Basic",
                    "$9",
                    &["5 Projects", "Basic Analytics"],
                    "Choose",
                    false,
                    "Most Popular",
                ),
                pricing_plan(
                    "p2",
                    "Pro",
                    "$29",
                    &["Unlimited Projects", "Adv Analytics", "Priority Support"],
                    "Choose",
                    true,
                    "Best Value",
                ),
                pricing_plan(
                    "p3",
                    "Enterprise",
                    "$99",
                    &["Custom Solutions", "24/7 Support"],
                    "Contact",
                    false,
                    "Most Popular",
                ),
            ],
            card_bg: WHITE.into(),
            text_color: TEXT_COLOR.into(),
            accent_color: PRIMARY_COLOR.into(),
            radius: Radius::Lg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialContent {
    pub items: Vec<TestimonialItem>,
    pub layout: TestimonialLayout,
    pub card_bg: String,
    pub text_color: String,
    pub star_color: String,
    pub radius: Radius,
}

impl Default for TestimonialContent {
    fn default() -> Self {
        Self {
            items: vec![
                TestimonialItem {
                    id: "t1".into(),
                    name: "Jane Doe".into(),
                    role: "CEO, TechCo".into(),
                    avatar: String::new(),
                    quote: "This builder saved me hours of work. Highly recommended!".into(),
                    rating: 5,
                },
                TestimonialItem {
                    id: "t2".into(),
                    name: "John Smith".into(),
                    role: "Developer".into(),
                    avatar: String::new(),
                    quote: "Clean code and easy to use. A game changer.".into(),
                    rating: 4,
                },
            ],
            layout: TestimonialLayout::Grid,
            card_bg: WHITE.into(),
            text_color: TEXT_COLOR.into(),
            star_color: "#FBBF24".into(),
            radius: Radius::Lg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamContent {
    pub heading: String,
    pub members: Vec<TeamMember>,
    pub card_bg: String,
    pub text_color: String,
    pub radius: Radius,
}

impl Default for TeamContent {
    fn default() -> Self {
        Self {
            heading: "Meet Our Team".into(),
            members: vec![
                team_member(
                    "m1",
                    "Alex Johnson",
                    "Founder",
                    "https://i.pravatar.cc/150?u=a",
                    "Visionary leader.",
                ),
                team_member(
                    "m2",
                    "Sarah Williams",
                    "CTO",
                    "https://i.pravatar.cc/150?u=b",
                    "Tech wizard.",
                ),
                team_member(
                    "m3",
                    "Mike Brown",
                    "Designer",
                    "https://i.pravatar.cc/150?u=c",
                    "Creative mind.",
                ),
            ],
            card_bg: WHITE.into(),
            text_color: TEXT_COLOR.into(),
            radius: Radius::Lg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqContent {
    pub heading: String,
    pub items: Vec<FaqItem>,
    pub question_color: String,
    pub answer_color: String,
    pub card_bg: String,
}

impl Default for FaqContent {
    fn default() -> Self {
        Self {
            heading: "Frequently Asked Questions".into(),
            items: vec![
                FaqItem {
                    id: "q1".into(),
                    question: "Is it free?".into(),
                    answer: "Yes, there is a free tier available.".into(),
                },
                FaqItem {
                    id: "q2".into(),
                    question: "Can I export code?".into(),
                    answer: "Absolutely! You can export HTML and React code.".into(),
                },
            ],
            question_color: TEXT_COLOR.into(),
            answer_color: "#4B5563".into(),
            card_bg: "#F9FAFB".into(),
        }
    }
}

fn nav_link(id: &str, label: &str, href: &str) -> NavLink {
    NavLink {
        id: id.into(),
        label: label.into(),
        href: href.into(),
    }
}

fn form_field(id: &str, field_type: FieldType, label: &str, placeholder: &str) -> FormField {
    FormField {
        id: id.into(),
        field_type,
        label: label.into(),
        placeholder: placeholder.into(),
        required: true,
    }
}

fn pricing_plan(
    id: &str,
    name: &str,
    price: &str,
    features: &[&str],
    button_text: &str,
    is_popular: bool,
    badge_text: &str,
) -> PricingPlan {
    PricingPlan {
        id: id.into(),
        name: name.into(),
        price: price.into(),
        period: "/mo".into(),
        features: features.iter().map(|f| f.to_string()).collect(),
        button_text: button_text.into(),
        is_popular,
        badge_text: Some(badge_text.into()),
    }
}

fn team_member(id: &str, name: &str, role: &str, image: &str, bio: &str) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        image: image.into(),
        bio: bio.into(),
    }
}
