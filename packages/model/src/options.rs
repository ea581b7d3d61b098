//! Kind-specific option sets used by block payloads.

token_enum! {
    pub enum Alignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
    fallback = Center;
}

token_enum! {
    pub enum TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
    fallback = Left;
}

token_enum! {
    /// Navigation placement: horizontal bar or fixed left sidebar
    pub enum LayoutStyle {
        Topbar => "topbar",
        Sidebar => "sidebar",
    }
    fallback = Topbar;
}

token_enum! {
    pub enum LogoType {
        Text => "text",
        Image => "image",
    }
    fallback = Text;
}

token_enum! {
    pub enum ButtonVariant {
        Solid => "solid",
        Outline => "outline",
        Ghost => "ghost",
    }
    fallback = Solid;
}

token_enum! {
    pub enum ButtonWidth {
        Auto => "auto",
        Full => "full",
    }
    fallback = Auto;
}

token_enum! {
    pub enum ImageSide {
        Left => "left",
        Right => "right",
    }
    fallback = Right;
}

token_enum! {
    pub enum SplitRatio {
        Even => "50-50",
        TextNarrow => "40-60",
        TextWide => "60-40",
    }
    fallback = Even;
}

token_enum! {
    pub enum FieldType {
        Text => "text",
        Email => "email",
        Textarea => "textarea",
        Number => "number",
        Select => "select",
    }
    fallback = Text;
}

token_enum! {
    pub enum SocialPlatform {
        Facebook => "facebook",
        Twitter => "twitter",
        Instagram => "instagram",
        Linkedin => "linkedin",
        Github => "github",
        Youtube => "youtube",
        Tiktok => "tiktok",
        Website => "website",
        Email => "email",
        Phone => "phone",
    }
    fallback = Website;
}

token_enum! {
    pub enum ImageWidth {
        Auto => "auto",
        Full => "full",
        Half => "50%",
        ThreeQuarters => "75%",
    }
    fallback = Full;
}

token_enum! {
    pub enum AspectRatio {
        Auto => "auto",
        Square => "1/1",
        Wide => "16/9",
        Standard => "4/3",
        Portrait => "3/4",
    }
    fallback = Auto;
}

token_enum! {
    pub enum TextTag {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        P => "p",
        Div => "div",
        Blockquote => "blockquote",
    }
    fallback = P;
}

token_enum! {
    pub enum FontSize {
        Xs => "xs",
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xxl => "2xl",
        Xxxl => "3xl",
        X4l => "4xl",
        X5l => "5xl",
        X6l => "6xl",
    }
    fallback = Base;
}

token_enum! {
    pub enum FontWeight {
        Normal => "normal",
        Medium => "medium",
        Bold => "bold",
        Black => "black",
    }
    fallback = Normal;
}

token_enum! {
    pub enum LineWidth {
        Full => "full",
        Short => "short",
        Middle => "middle",
    }
    fallback = Full;
}

token_enum! {
    pub enum TestimonialLayout {
        Grid => "grid",
        Slider => "slider",
    }
    fallback = Grid;
}
