//! Built-in utility class groups.
//!
//! Every recognized utility token belongs to exactly one [`ClassGroup`]: the
//! CSS property axis it sets. Classification runs against an ordered rule
//! table where the first match wins, so narrow rules (`text-sm` is a font
//! size, `text-left` an alignment) sit ahead of catch-alls (`text-*` is a
//! colour).

use std::sync::LazyLock;

use regex::Regex;

/// A set of utilities that target the same style axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    // ─────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────
    Display,
    Position,
    Visibility,
    Overflow,
    OverflowX,
    OverflowY,
    ZIndex,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,

    // ─────────────────────────────────────────────────────────────────────
    // Flexbox & Grid
    // ─────────────────────────────────────────────────────────────────────
    FlexDirection,
    FlexWrap,
    Flex,
    Grow,
    Shrink,
    JustifyContent,
    AlignItems,
    AlignSelf,
    Gap,
    GapX,
    GapY,
    GridCols,
    GridRows,

    // ─────────────────────────────────────────────────────────────────────
    // Spacing
    // ─────────────────────────────────────────────────────────────────────
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    SpaceX,
    SpaceY,

    // ─────────────────────────────────────────────────────────────────────
    // Sizing
    // ─────────────────────────────────────────────────────────────────────
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    Size,

    // ─────────────────────────────────────────────────────────────────────
    // Typography
    // ─────────────────────────────────────────────────────────────────────
    FontSize,
    FontWeight,
    FontFamily,
    FontStyle,
    TextAlign,
    TextColor,
    TextOverflow,
    TextDecoration,
    TextTransform,
    UnderlineOffset,
    LineHeight,
    Tracking,
    Whitespace,

    // ─────────────────────────────────────────────────────────────────────
    // Backgrounds
    // ─────────────────────────────────────────────────────────────────────
    BgColor,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    GradientFrom,
    GradientVia,
    GradientTo,

    // ─────────────────────────────────────────────────────────────────────
    // Borders
    // ─────────────────────────────────────────────────────────────────────
    Rounded,
    RoundedTop,
    RoundedRight,
    RoundedBottom,
    RoundedLeft,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthTop,
    BorderWidthRight,
    BorderWidthBottom,
    BorderWidthLeft,
    BorderStyle,
    BorderColor,
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    Outline,

    // ─────────────────────────────────────────────────────────────────────
    // Effects
    // ─────────────────────────────────────────────────────────────────────
    Shadow,
    ShadowColor,
    Opacity,
    Blur,
    BackdropBlur,

    // ─────────────────────────────────────────────────────────────────────
    // Transitions, Animation & Transforms
    // ─────────────────────────────────────────────────────────────────────
    Transition,
    Duration,
    Ease,
    Delay,
    Animate,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    TranslateX,
    TranslateY,

    // ─────────────────────────────────────────────────────────────────────
    // Interactivity
    // ─────────────────────────────────────────────────────────────────────
    Cursor,
    PointerEvents,
    UserSelect,
}

impl ClassGroup {
    /// Stable identifier, also used to reference built-in groups from
    /// custom group `conflicts` lists.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::Visibility => "visibility",
            Self::Overflow => "overflow",
            Self::OverflowX => "overflow-x",
            Self::OverflowY => "overflow-y",
            Self::ZIndex => "z",
            Self::Inset => "inset",
            Self::InsetX => "inset-x",
            Self::InsetY => "inset-y",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::FlexDirection => "flex-direction",
            Self::FlexWrap => "flex-wrap",
            Self::Flex => "flex",
            Self::Grow => "grow",
            Self::Shrink => "shrink",
            Self::JustifyContent => "justify-content",
            Self::AlignItems => "align-items",
            Self::AlignSelf => "align-self",
            Self::Gap => "gap",
            Self::GapX => "gap-x",
            Self::GapY => "gap-y",
            Self::GridCols => "grid-cols",
            Self::GridRows => "grid-rows",
            Self::Padding => "p",
            Self::PaddingX => "px",
            Self::PaddingY => "py",
            Self::PaddingTop => "pt",
            Self::PaddingRight => "pr",
            Self::PaddingBottom => "pb",
            Self::PaddingLeft => "pl",
            Self::Margin => "m",
            Self::MarginX => "mx",
            Self::MarginY => "my",
            Self::MarginTop => "mt",
            Self::MarginRight => "mr",
            Self::MarginBottom => "mb",
            Self::MarginLeft => "ml",
            Self::SpaceX => "space-x",
            Self::SpaceY => "space-y",
            Self::Width => "w",
            Self::MinWidth => "min-w",
            Self::MaxWidth => "max-w",
            Self::Height => "h",
            Self::MinHeight => "min-h",
            Self::MaxHeight => "max-h",
            Self::Size => "size",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::FontFamily => "font-family",
            Self::FontStyle => "font-style",
            Self::TextAlign => "text-alignment",
            Self::TextColor => "text-color",
            Self::TextOverflow => "text-overflow",
            Self::TextDecoration => "text-decoration",
            Self::TextTransform => "text-transform",
            Self::UnderlineOffset => "underline-offset",
            Self::LineHeight => "leading",
            Self::Tracking => "tracking",
            Self::Whitespace => "whitespace",
            Self::BgColor => "bg-color",
            Self::BgImage => "bg-image",
            Self::BgSize => "bg-size",
            Self::BgPosition => "bg-position",
            Self::BgRepeat => "bg-repeat",
            Self::GradientFrom => "gradient-from",
            Self::GradientVia => "gradient-via",
            Self::GradientTo => "gradient-to",
            Self::Rounded => "rounded",
            Self::RoundedTop => "rounded-t",
            Self::RoundedRight => "rounded-r",
            Self::RoundedBottom => "rounded-b",
            Self::RoundedLeft => "rounded-l",
            Self::BorderWidth => "border-w",
            Self::BorderWidthX => "border-w-x",
            Self::BorderWidthY => "border-w-y",
            Self::BorderWidthTop => "border-w-t",
            Self::BorderWidthRight => "border-w-r",
            Self::BorderWidthBottom => "border-w-b",
            Self::BorderWidthLeft => "border-w-l",
            Self::BorderStyle => "border-style",
            Self::BorderColor => "border-color",
            Self::RingWidth => "ring-w",
            Self::RingColor => "ring-color",
            Self::RingOffsetWidth => "ring-offset-w",
            Self::RingOffsetColor => "ring-offset-color",
            Self::Outline => "outline-style",
            Self::Shadow => "shadow",
            Self::ShadowColor => "shadow-color",
            Self::Opacity => "opacity",
            Self::Blur => "blur",
            Self::BackdropBlur => "backdrop-blur",
            Self::Transition => "transition",
            Self::Duration => "duration",
            Self::Ease => "ease",
            Self::Delay => "delay",
            Self::Animate => "animate",
            Self::Scale => "scale",
            Self::ScaleX => "scale-x",
            Self::ScaleY => "scale-y",
            Self::Rotate => "rotate",
            Self::TranslateX => "translate-x",
            Self::TranslateY => "translate-y",
            Self::Cursor => "cursor",
            Self::PointerEvents => "pointer-events",
            Self::UserSelect => "select",
        }
    }

    /// Groups overridden by a later member of this group.
    ///
    /// Shorthands override their longhands; the reverse does not hold.
    #[must_use]
    pub fn conflicts(self) -> &'static [ClassGroup] {
        use ClassGroup::{
            BorderWidthBottom, BorderWidthLeft, BorderWidthRight, BorderWidthTop, BorderWidthX,
            BorderWidthY, Bottom, GapX, GapY, Height, InsetX, InsetY, Left, LineHeight,
            MarginBottom, MarginLeft, MarginRight, MarginTop, MarginX, MarginY, OverflowX,
            OverflowY, PaddingBottom, PaddingLeft, PaddingRight, PaddingTop, PaddingX, PaddingY,
            Right, RoundedBottom, RoundedLeft, RoundedRight, RoundedTop, ScaleX, ScaleY, Top,
            Width,
        };

        match self {
            Self::Overflow => &[OverflowX, OverflowY],
            Self::Inset => &[InsetX, InsetY, Top, Right, Bottom, Left],
            Self::InsetX => &[Right, Left],
            Self::InsetY => &[Top, Bottom],
            Self::Gap => &[GapX, GapY],
            Self::Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            Self::PaddingX => &[PaddingRight, PaddingLeft],
            Self::PaddingY => &[PaddingTop, PaddingBottom],
            Self::Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            Self::MarginX => &[MarginRight, MarginLeft],
            Self::MarginY => &[MarginTop, MarginBottom],
            Self::Size => &[Width, Height],
            Self::FontSize => &[LineHeight],
            Self::Rounded => &[RoundedTop, RoundedRight, RoundedBottom, RoundedLeft],
            Self::BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthTop,
                BorderWidthRight,
                BorderWidthBottom,
                BorderWidthLeft,
            ],
            Self::BorderWidthX => &[BorderWidthRight, BorderWidthLeft],
            Self::BorderWidthY => &[BorderWidthTop, BorderWidthBottom],
            Self::Scale => &[ScaleX, ScaleY],
            _ => &[],
        }
    }
}

/// A class token split into variant modifiers, important flag and base
/// utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant modifiers in source order (`hover`, `md`, `dark`).
    pub modifiers: Vec<&'a str>,
    /// `!`-prefixed (or suffixed) utility.
    pub important: bool,
    /// Utility without modifiers, important marker or negative sign.
    pub base: &'a str,
}

impl ParsedClass<'_> {
    /// Key under which conflicts are resolved: modifiers are order-insensitive.
    pub fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// Splits a token on `:` outside of arbitrary-value brackets.
pub fn parse_class(token: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    let mut base = &token[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        important = true;
        base = rest;
    } else if let Some(rest) = base.strip_suffix('!') {
        important = true;
        base = rest;
    }
    let base = base.strip_prefix('-').unwrap_or(base);

    ParsedClass {
        modifiers,
        important,
        base,
    }
}

/// Looks up the built-in group of a base utility (no modifiers).
pub fn classify_base(base: &str) -> Option<ClassGroup> {
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(base))
        .map(|rule| rule.group)
}

// ─────────────────────────────────────────────────────────────────────────────
// Value validators
// ─────────────────────────────────────────────────────────────────────────────

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("number pattern"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("integer pattern"));
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("fraction pattern"));
static TSHIRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").expect("t-shirt pattern"));
static ARBITRARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?:([a-z-]+):)?(.+)\]$").expect("arbitrary pattern"));
static LENGTH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:-?\d*\.?\d+(?:%|px|r?em|ch|ex|vh|vw|vmin|vmax|[sdl]v[hw]|pt|pc|in|cm|mm)|0|(?:calc|min|max|clamp)\(.+\))$",
    )
    .expect("length pattern")
});

const LENGTH_KEYWORDS: &[&str] = &[
    "px", "full", "auto", "screen", "min", "max", "fit", "svh", "dvh", "lvh",
];
const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];

fn is_arbitrary(value: &str) -> bool {
    ARBITRARY.is_match(value)
}

fn is_arbitrary_length(value: &str) -> bool {
    ARBITRARY.captures(value).is_some_and(|caps| {
        match caps.get(1).map(|label| label.as_str()) {
            Some(label) => label == "length",
            None => caps
                .get(2)
                .is_some_and(|inner| LENGTH_UNIT.is_match(inner.as_str())),
        }
    })
}

/// Shape of the part following `prefix-`.
#[derive(Debug, Clone, Copy)]
enum Value {
    /// No value: the token is exactly the prefix (`border`, `rounded`).
    Bare,
    Any,
    Length,
    Number,
    Integer,
    TShirt,
    Arbitrary,
    ArbitraryLength,
    OneOf(&'static [&'static str]),
}

impl Value {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Bare => false,
            Self::Any => true,
            Self::Length => {
                NUMBER.is_match(value)
                    || FRACTION.is_match(value)
                    || LENGTH_KEYWORDS.contains(&value)
                    || is_arbitrary(value)
            }
            Self::Number => NUMBER.is_match(value) || is_arbitrary(value),
            Self::Integer => INTEGER.is_match(value) || value == "auto" || is_arbitrary(value),
            Self::TShirt => {
                TSHIRT.is_match(value)
                    || value == "none"
                    || value == "full"
                    || is_arbitrary_length(value)
            }
            Self::Arbitrary => is_arbitrary(value),
            Self::ArbitraryLength => is_arbitrary_length(value),
            Self::OneOf(words) => words.contains(&value),
        }
    }
}

#[derive(Debug)]
enum Matcher {
    Exact(&'static [&'static str]),
    Prefix(&'static str, Value),
}

impl Matcher {
    fn matches(&self, base: &str) -> bool {
        match self {
            Self::Exact(words) => words.contains(&base),
            Self::Prefix(prefix, Value::Bare) => base == *prefix,
            Self::Prefix(prefix, value) => base
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|rest| !rest.is_empty() && value.accepts(rest)),
        }
    }
}

#[derive(Debug)]
struct Rule {
    group: ClassGroup,
    matcher: Matcher,
}

const fn exact(group: ClassGroup, words: &'static [&'static str]) -> Rule {
    Rule {
        group,
        matcher: Matcher::Exact(words),
    }
}

const fn prefix(group: ClassGroup, prefix: &'static str, value: Value) -> Rule {
    Rule {
        group,
        matcher: Matcher::Prefix(prefix, value),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule table (first match wins)
// ─────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static RULES: &[Rule] = &[
    // Layout
    exact(ClassGroup::Display, &[
        "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
        "table-cell", "table-row", "flow-root", "grid", "inline-grid", "contents",
        "list-item", "hidden",
    ]),
    exact(ClassGroup::Position, &["static", "fixed", "absolute", "relative", "sticky"]),
    exact(ClassGroup::Visibility, &["visible", "invisible", "collapse"]),
    prefix(ClassGroup::OverflowX, "overflow-x", Value::OneOf(OVERFLOW)),
    prefix(ClassGroup::OverflowY, "overflow-y", Value::OneOf(OVERFLOW)),
    prefix(ClassGroup::Overflow, "overflow", Value::OneOf(OVERFLOW)),
    prefix(ClassGroup::ZIndex, "z", Value::Integer),
    prefix(ClassGroup::InsetX, "inset-x", Value::Length),
    prefix(ClassGroup::InsetY, "inset-y", Value::Length),
    prefix(ClassGroup::Inset, "inset", Value::Length),
    prefix(ClassGroup::Top, "top", Value::Length),
    prefix(ClassGroup::Right, "right", Value::Length),
    prefix(ClassGroup::Bottom, "bottom", Value::Length),
    prefix(ClassGroup::Left, "left", Value::Length),

    // Flexbox & Grid
    exact(ClassGroup::FlexDirection, &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"]),
    exact(ClassGroup::FlexWrap, &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
    prefix(ClassGroup::Flex, "flex", Value::Number),
    prefix(ClassGroup::Flex, "flex", Value::OneOf(&["auto", "initial", "none"])),
    prefix(ClassGroup::Grow, "grow", Value::Bare),
    prefix(ClassGroup::Grow, "grow", Value::Number),
    prefix(ClassGroup::Shrink, "shrink", Value::Bare),
    prefix(ClassGroup::Shrink, "shrink", Value::Number),
    prefix(ClassGroup::JustifyContent, "justify", Value::OneOf(&[
        "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
    ])),
    prefix(ClassGroup::AlignItems, "items", Value::OneOf(&["start", "end", "center", "baseline", "stretch"])),
    prefix(ClassGroup::AlignSelf, "self", Value::OneOf(&["auto", "start", "end", "center", "stretch", "baseline"])),
    prefix(ClassGroup::GapX, "gap-x", Value::Length),
    prefix(ClassGroup::GapY, "gap-y", Value::Length),
    prefix(ClassGroup::Gap, "gap", Value::Length),
    prefix(ClassGroup::GridCols, "grid-cols", Value::Integer),
    prefix(ClassGroup::GridCols, "grid-cols", Value::OneOf(&["none", "subgrid"])),
    prefix(ClassGroup::GridRows, "grid-rows", Value::Integer),
    prefix(ClassGroup::GridRows, "grid-rows", Value::OneOf(&["none", "subgrid"])),

    // Spacing
    prefix(ClassGroup::Padding, "p", Value::Length),
    prefix(ClassGroup::PaddingX, "px", Value::Length),
    prefix(ClassGroup::PaddingY, "py", Value::Length),
    prefix(ClassGroup::PaddingTop, "pt", Value::Length),
    prefix(ClassGroup::PaddingRight, "pr", Value::Length),
    prefix(ClassGroup::PaddingBottom, "pb", Value::Length),
    prefix(ClassGroup::PaddingLeft, "pl", Value::Length),
    prefix(ClassGroup::Margin, "m", Value::Length),
    prefix(ClassGroup::MarginX, "mx", Value::Length),
    prefix(ClassGroup::MarginY, "my", Value::Length),
    prefix(ClassGroup::MarginTop, "mt", Value::Length),
    prefix(ClassGroup::MarginRight, "mr", Value::Length),
    prefix(ClassGroup::MarginBottom, "mb", Value::Length),
    prefix(ClassGroup::MarginLeft, "ml", Value::Length),
    prefix(ClassGroup::SpaceX, "space-x", Value::Length),
    prefix(ClassGroup::SpaceY, "space-y", Value::Length),

    // Sizing
    prefix(ClassGroup::Width, "w", Value::Length),
    prefix(ClassGroup::MinWidth, "min-w", Value::Length),
    prefix(ClassGroup::MaxWidth, "max-w", Value::Any),
    prefix(ClassGroup::Height, "h", Value::Length),
    prefix(ClassGroup::MinHeight, "min-h", Value::Length),
    prefix(ClassGroup::MaxHeight, "max-h", Value::Any),
    prefix(ClassGroup::Size, "size", Value::Length),

    // Typography
    prefix(ClassGroup::FontSize, "text", Value::OneOf(&["base"])),
    prefix(ClassGroup::FontSize, "text", Value::TShirt),
    prefix(ClassGroup::TextAlign, "text", Value::OneOf(&["left", "center", "right", "justify", "start", "end"])),
    prefix(ClassGroup::TextOverflow, "text", Value::OneOf(&["ellipsis", "clip"])),
    exact(ClassGroup::TextOverflow, &["truncate"]),
    prefix(ClassGroup::TextColor, "text", Value::Any),
    prefix(ClassGroup::FontWeight, "font", Value::OneOf(&[
        "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
    ])),
    prefix(ClassGroup::FontFamily, "font", Value::Any),
    exact(ClassGroup::FontStyle, &["italic", "not-italic"]),
    exact(ClassGroup::TextDecoration, &["underline", "overline", "line-through", "no-underline"]),
    exact(ClassGroup::TextTransform, &["uppercase", "lowercase", "capitalize", "normal-case"]),
    prefix(ClassGroup::UnderlineOffset, "underline-offset", Value::Any),
    prefix(ClassGroup::LineHeight, "leading", Value::Any),
    prefix(ClassGroup::Tracking, "tracking", Value::Any),
    prefix(ClassGroup::Whitespace, "whitespace", Value::Any),

    // Backgrounds
    prefix(ClassGroup::BgImage, "bg", Value::OneOf(&["none"])),
    prefix(ClassGroup::BgImage, "bg-gradient-to", Value::Any),
    prefix(ClassGroup::BgImage, "bg-linear-to", Value::Any),
    prefix(ClassGroup::BgSize, "bg", Value::OneOf(&["auto", "cover", "contain"])),
    prefix(ClassGroup::BgPosition, "bg", Value::OneOf(&[
        "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom",
        "right-top", "top",
    ])),
    prefix(ClassGroup::BgRepeat, "bg", Value::OneOf(&[
        "repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space",
    ])),
    prefix(ClassGroup::BgColor, "bg", Value::Any),
    prefix(ClassGroup::GradientFrom, "from", Value::Any),
    prefix(ClassGroup::GradientVia, "via", Value::Any),
    prefix(ClassGroup::GradientTo, "to", Value::Any),

    // Borders
    prefix(ClassGroup::RoundedTop, "rounded-t", Value::Bare),
    prefix(ClassGroup::RoundedTop, "rounded-t", Value::TShirt),
    prefix(ClassGroup::RoundedRight, "rounded-r", Value::Bare),
    prefix(ClassGroup::RoundedRight, "rounded-r", Value::TShirt),
    prefix(ClassGroup::RoundedBottom, "rounded-b", Value::Bare),
    prefix(ClassGroup::RoundedBottom, "rounded-b", Value::TShirt),
    prefix(ClassGroup::RoundedLeft, "rounded-l", Value::Bare),
    prefix(ClassGroup::RoundedLeft, "rounded-l", Value::TShirt),
    prefix(ClassGroup::Rounded, "rounded", Value::Bare),
    prefix(ClassGroup::Rounded, "rounded", Value::TShirt),
    prefix(ClassGroup::BorderWidthX, "border-x", Value::Bare),
    prefix(ClassGroup::BorderWidthX, "border-x", Value::Number),
    prefix(ClassGroup::BorderWidthY, "border-y", Value::Bare),
    prefix(ClassGroup::BorderWidthY, "border-y", Value::Number),
    prefix(ClassGroup::BorderWidthTop, "border-t", Value::Bare),
    prefix(ClassGroup::BorderWidthTop, "border-t", Value::Number),
    prefix(ClassGroup::BorderWidthRight, "border-r", Value::Bare),
    prefix(ClassGroup::BorderWidthRight, "border-r", Value::Number),
    prefix(ClassGroup::BorderWidthBottom, "border-b", Value::Bare),
    prefix(ClassGroup::BorderWidthBottom, "border-b", Value::Number),
    prefix(ClassGroup::BorderWidthLeft, "border-l", Value::Bare),
    prefix(ClassGroup::BorderWidthLeft, "border-l", Value::Number),
    prefix(ClassGroup::BorderWidth, "border", Value::Bare),
    prefix(ClassGroup::BorderWidth, "border", Value::Number),
    prefix(ClassGroup::BorderWidth, "border", Value::ArbitraryLength),
    prefix(ClassGroup::BorderStyle, "border", Value::OneOf(&["solid", "dashed", "dotted", "double", "hidden", "none"])),
    prefix(ClassGroup::BorderColor, "border", Value::Any),
    prefix(ClassGroup::RingOffsetWidth, "ring-offset", Value::Number),
    prefix(ClassGroup::RingOffsetWidth, "ring-offset", Value::ArbitraryLength),
    prefix(ClassGroup::RingOffsetColor, "ring-offset", Value::Any),
    prefix(ClassGroup::RingWidth, "ring", Value::Bare),
    prefix(ClassGroup::RingWidth, "ring", Value::Number),
    prefix(ClassGroup::RingWidth, "ring", Value::ArbitraryLength),
    prefix(ClassGroup::RingColor, "ring", Value::Any),
    exact(ClassGroup::Outline, &["outline", "outline-none", "outline-dashed", "outline-dotted", "outline-double"]),

    // Effects
    prefix(ClassGroup::Shadow, "shadow", Value::Bare),
    prefix(ClassGroup::Shadow, "shadow", Value::TShirt),
    prefix(ClassGroup::Shadow, "shadow", Value::OneOf(&["inner"])),
    prefix(ClassGroup::Shadow, "shadow", Value::Arbitrary),
    prefix(ClassGroup::ShadowColor, "shadow", Value::Any),
    prefix(ClassGroup::Opacity, "opacity", Value::Number),
    prefix(ClassGroup::Blur, "blur", Value::Bare),
    prefix(ClassGroup::Blur, "blur", Value::TShirt),
    prefix(ClassGroup::BackdropBlur, "backdrop-blur", Value::Bare),
    prefix(ClassGroup::BackdropBlur, "backdrop-blur", Value::TShirt),

    // Transitions, Animation & Transforms
    prefix(ClassGroup::Transition, "transition", Value::Bare),
    prefix(ClassGroup::Transition, "transition", Value::OneOf(&["none", "all", "colors", "opacity", "shadow", "transform"])),
    prefix(ClassGroup::Duration, "duration", Value::Number),
    prefix(ClassGroup::Ease, "ease", Value::Any),
    prefix(ClassGroup::Delay, "delay", Value::Number),
    prefix(ClassGroup::Animate, "animate", Value::Any),
    prefix(ClassGroup::ScaleX, "scale-x", Value::Number),
    prefix(ClassGroup::ScaleY, "scale-y", Value::Number),
    prefix(ClassGroup::Scale, "scale", Value::Number),
    prefix(ClassGroup::Rotate, "rotate", Value::Number),
    prefix(ClassGroup::TranslateX, "translate-x", Value::Length),
    prefix(ClassGroup::TranslateY, "translate-y", Value::Length),

    // Interactivity
    prefix(ClassGroup::Cursor, "cursor", Value::Any),
    prefix(ClassGroup::PointerEvents, "pointer-events", Value::OneOf(&["none", "auto"])),
    prefix(ClassGroup::UserSelect, "select", Value::OneOf(&["none", "text", "all", "auto"])),
];
