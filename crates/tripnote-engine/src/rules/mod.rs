//! Keyword rule tables that drive label and section-header styling.
//!
//! Rules live in ordered tables and lookups are first-match-wins: the
//! earliest rule with any keyword hit claims the candidate, regardless of
//! how specific later rules are. Table order is therefore part of the
//! contract — appending is safe, reordering changes classification.

mod builtin;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum RuleParseError {
    #[error("unknown icon id: {0}")]
    UnknownIcon(String),
    #[error("unknown color key: {0}")]
    UnknownColor(String),
}

/// Semantic color slot. Renderers map these to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorKey {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Muted,
}

impl ColorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Primary => "primary",
            ColorKey::Success => "success",
            ColorKey::Warning => "warning",
            ColorKey::Danger => "danger",
            ColorKey::Info => "info",
            ColorKey::Muted => "muted",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ColorKey::Primary),
            "success" => Ok(ColorKey::Success),
            "warning" => Ok(ColorKey::Warning),
            "danger" => Ok(ColorKey::Danger),
            "info" => Ok(ColorKey::Info),
            "muted" => Ok(ColorKey::Muted),
            other => Err(RuleParseError::UnknownColor(other.to_string())),
        }
    }
}

/// Opaque icon identifier. The parsing core never touches glyphs or
/// image assets; consumers resolve these through their own icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    MapPin,
    Clock,
    Wallet,
    Coins,
    Phone,
    Bus,
    Train,
    CalendarCheck,
    CalendarDays,
    Globe,
    Lightbulb,
    AlertTriangle,
    UtensilsCrossed,
    Coffee,
    BedDouble,
    CloudSun,
    Route,
    Wifi,
    SquareParking,
    Ticket,
    CheckSquare,
    ShoppingBag,
    Backpack,
    Camera,
    Gift,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::MapPin => "map-pin",
            IconId::Clock => "clock",
            IconId::Wallet => "wallet",
            IconId::Coins => "coins",
            IconId::Phone => "phone",
            IconId::Bus => "bus",
            IconId::Train => "train",
            IconId::CalendarCheck => "calendar-check",
            IconId::CalendarDays => "calendar-days",
            IconId::Globe => "globe",
            IconId::Lightbulb => "lightbulb",
            IconId::AlertTriangle => "alert-triangle",
            IconId::UtensilsCrossed => "utensils-crossed",
            IconId::Coffee => "coffee",
            IconId::BedDouble => "bed-double",
            IconId::CloudSun => "cloud-sun",
            IconId::Route => "route",
            IconId::Wifi => "wifi",
            IconId::SquareParking => "square-parking",
            IconId::Ticket => "ticket",
            IconId::CheckSquare => "check-square",
            IconId::ShoppingBag => "shopping-bag",
            IconId::Backpack => "backpack",
            IconId::Camera => "camera",
            IconId::Gift => "gift",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconId {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map-pin" => Ok(IconId::MapPin),
            "clock" => Ok(IconId::Clock),
            "wallet" => Ok(IconId::Wallet),
            "coins" => Ok(IconId::Coins),
            "phone" => Ok(IconId::Phone),
            "bus" => Ok(IconId::Bus),
            "train" => Ok(IconId::Train),
            "calendar-check" => Ok(IconId::CalendarCheck),
            "calendar-days" => Ok(IconId::CalendarDays),
            "globe" => Ok(IconId::Globe),
            "lightbulb" => Ok(IconId::Lightbulb),
            "alert-triangle" => Ok(IconId::AlertTriangle),
            "utensils-crossed" => Ok(IconId::UtensilsCrossed),
            "coffee" => Ok(IconId::Coffee),
            "bed-double" => Ok(IconId::BedDouble),
            "cloud-sun" => Ok(IconId::CloudSun),
            "route" => Ok(IconId::Route),
            "wifi" => Ok(IconId::Wifi),
            "square-parking" => Ok(IconId::SquareParking),
            "ticket" => Ok(IconId::Ticket),
            "check-square" => Ok(IconId::CheckSquare),
            "shopping-bag" => Ok(IconId::ShoppingBag),
            "backpack" => Ok(IconId::Backpack),
            "camera" => Ok(IconId::Camera),
            "gift" => Ok(IconId::Gift),
            other => Err(RuleParseError::UnknownIcon(other.to_string())),
        }
    }
}

/// Styles `label: value` lines whose label mentions one of the keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRule {
    pub keywords: Vec<String>,
    pub icon: IconId,
    pub color: ColorKey,
}

impl IconRule {
    pub fn new(keywords: &[&str], icon: IconId, color: ColorKey) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            icon,
            color,
        }
    }

    /// True when any keyword occurs in `text`, case-insensitively.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(&k.to_lowercase()))
    }
}

/// Recognizes section titles by emoji prefix or by title keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeaderRule {
    pub emoji: String,
    pub keywords: Vec<String>,
    pub icon: IconId,
    pub color: ColorKey,
}

impl SectionHeaderRule {
    pub fn new(emoji: &str, keywords: &[&str], icon: IconId, color: ColorKey) -> Self {
        Self {
            emoji: emoji.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            icon,
            color,
        }
    }

    /// True when any keyword occurs in `title`, case-insensitively.
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.keywords.iter().any(|k| title.contains(&k.to_lowercase()))
    }
}

/// The two ordered rule tables consulted during classification.
///
/// Constructed once at startup and immutable afterwards. User rules are
/// appended after the built-ins, so built-ins keep lookup priority.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    icon_rules: Vec<IconRule>,
    header_rules: Vec<SectionHeaderRule>,
}

impl RuleSet {
    /// The built-in tables on their own.
    pub fn builtin() -> Self {
        Self {
            icon_rules: builtin::icon_rules(),
            header_rules: builtin::header_rules(),
        }
    }

    pub fn new(icon_rules: Vec<IconRule>, header_rules: Vec<SectionHeaderRule>) -> Self {
        Self {
            icon_rules,
            header_rules,
        }
    }

    /// Append icon rules below the existing table.
    pub fn with_icon_rules(mut self, rules: Vec<IconRule>) -> Self {
        self.icon_rules.extend(rules);
        self
    }

    /// Append header rules below the existing table.
    pub fn with_header_rules(mut self, rules: Vec<SectionHeaderRule>) -> Self {
        self.header_rules.extend(rules);
        self
    }

    /// First icon rule whose keywords hit `label`, if any.
    pub fn match_icon_rule(&self, label: &str) -> Option<&IconRule> {
        self.icon_rules.iter().find(|rule| rule.matches(label))
    }

    /// First header rule whose keywords hit `title`, if any.
    pub fn match_header_rule(&self, title: &str) -> Option<&SectionHeaderRule> {
        self.header_rules.iter().find(|rule| rule.matches(title))
    }

    pub fn icon_rules(&self) -> &[IconRule] {
        &self.icon_rules
    }

    pub fn header_rules(&self) -> &[SectionHeaderRule] {
        &self.header_rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
