//! Paragraph styles and the per-role style sheets.

use super::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Regular weight (default)
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

/// Paragraph styling properties, all lengths in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// Font weight
    pub weight: Weight,

    /// Font size
    pub font_size: f32,

    /// Baseline-to-baseline distance
    pub leading: f32,

    /// Space before the paragraph
    pub space_before: f32,

    /// Space after the paragraph
    pub space_after: f32,

    /// Left indent of the text
    pub left_indent: f32,

    /// Left indent of the enclosing list (grouped bullets only)
    pub list_indent: f32,
}

impl ParagraphStyle {
    /// Create a style with the given alignment, weight, size and leading.
    pub fn new(alignment: Alignment, weight: Weight, font_size: f32, leading: f32) -> Self {
        Self {
            alignment,
            weight,
            font_size,
            leading,
            ..Default::default()
        }
    }

    /// Set the space before the paragraph.
    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    /// Set the space after the paragraph.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    /// Set the text indent.
    pub fn with_left_indent(mut self, points: f32) -> Self {
        self.left_indent = points;
        self
    }

    /// Set the list indent.
    pub fn with_list_indent(mut self, points: f32) -> Self {
        self.list_indent = points;
        self
    }

    /// Check if the style uses a bold weight.
    pub fn is_bold(&self) -> bool {
        self.weight == Weight::Bold
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            weight: Weight::Normal,
            font_size: 10.0,
            leading: 12.0,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            list_indent: 0.0,
        }
    }
}

/// Mapping from role to paragraph style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: BTreeMap<Role, ParagraphStyle>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Style sheet for résumés.
    pub fn resume() -> Self {
        use Alignment::*;
        use Weight::*;

        let mut sheet = Self::new();
        sheet.insert(
            Role::Header,
            ParagraphStyle::new(Center, Bold, 16.0, 16.0).with_space_after(16.0),
        );
        sheet.insert(
            Role::IdentityLine,
            ParagraphStyle::new(Left, Normal, 10.0, 12.0).with_space_after(2.0),
        );
        sheet.insert(
            Role::Intro,
            ParagraphStyle::new(Justify, Normal, 11.0, 13.0).with_space_before(8.0),
        );
        sheet.insert(
            Role::SectionTitle,
            ParagraphStyle::new(Left, Bold, 12.0, 12.0)
                .with_space_before(8.0)
                .with_space_after(4.0),
        );
        sheet.insert(
            Role::Bullet,
            ParagraphStyle::new(Left, Normal, 11.0, 14.0)
                .with_left_indent(6.0)
                .with_list_indent(12.0)
                .with_space_after(1.0),
        );
        sheet.insert(
            Role::Paragraph,
            ParagraphStyle::new(Left, Normal, 11.0, 14.0).with_space_after(2.0),
        );
        sheet
    }

    /// Style sheet for cover letters.
    pub fn letter() -> Self {
        use Alignment::*;
        use Weight::*;

        let mut sheet = Self::new();
        sheet.insert(
            Role::DateLine,
            ParagraphStyle::new(Left, Normal, 11.0, 12.0).with_space_after(14.0),
        );
        sheet.insert(
            Role::Recipient,
            ParagraphStyle::new(Right, Normal, 11.0, 12.0).with_space_after(18.0),
        );
        sheet.insert(
            Role::Subject,
            ParagraphStyle::new(Left, Bold, 11.0, 12.0).with_space_after(14.0),
        );
        sheet.insert(
            Role::Body,
            ParagraphStyle::new(Justify, Normal, 11.0, 14.0).with_space_after(12.0),
        );
        sheet.insert(
            Role::Signature,
            ParagraphStyle::new(Left, Normal, 11.0, 12.0).with_space_before(12.0),
        );
        sheet
    }

    /// Set the style for a role.
    pub fn insert(&mut self, role: Role, style: ParagraphStyle) {
        self.styles.insert(role, style);
    }

    /// Get the style for a role, if defined.
    pub fn get(&self, role: Role) -> Option<&ParagraphStyle> {
        self.styles.get(&role)
    }

    /// Get the style for a role, falling back to the default style.
    pub fn style(&self, role: Role) -> ParagraphStyle {
        self.get(role).cloned().unwrap_or_default()
    }

    /// Iterate over defined styles in role order.
    pub fn iter(&self) -> impl Iterator<Item = (&Role, &ParagraphStyle)> {
        self.styles.iter()
    }
}
