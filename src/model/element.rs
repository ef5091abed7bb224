//! Roles and the styled elements handed to renderers.

use serde::{Deserialize, Serialize};

/// Semantic role of a rendered element.
///
/// Each role maps to exactly one entry of a [`StyleSheet`](super::StyleSheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Document title, the first identity line of a résumé
    Header,
    /// Contact/identity line below the header
    IdentityLine,
    /// Introductory paragraph
    Intro,
    /// All-caps section heading
    SectionTitle,
    /// Grouped bullet list
    Bullet,
    /// Ordinary body paragraph
    Paragraph,
    /// Letter date/location line
    DateLine,
    /// Letter recipient block
    Recipient,
    /// Letter subject line
    Subject,
    /// Letter body paragraph
    Body,
    /// Letter closing/signature block
    Signature,
}

impl Role {
    /// Roles used by résumé layouts, in emission order.
    pub const RESUME: [Role; 6] = [
        Role::Header,
        Role::IdentityLine,
        Role::Intro,
        Role::SectionTitle,
        Role::Bullet,
        Role::Paragraph,
    ];

    /// Roles used by letter layouts, in emission order.
    pub const LETTER: [Role; 5] = [
        Role::DateLine,
        Role::Recipient,
        Role::Subject,
        Role::Body,
        Role::Signature,
    ];

    /// Stable lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Header => "header",
            Role::IdentityLine => "identity_line",
            Role::Intro => "intro",
            Role::SectionTitle => "section_title",
            Role::Bullet => "bullet",
            Role::Paragraph => "paragraph",
            Role::DateLine => "date_line",
            Role::Recipient => "recipient",
            Role::Subject => "subject",
            Role::Body => "body",
            Role::Signature => "signature",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content carried by a styled element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// A single paragraph of text (may contain line-break markers)
    Text(String),
    /// Members of a grouped bullet list
    Items(Vec<String>),
}

/// A role-tagged unit of output, decoration already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledElement {
    /// Role deciding the presentation style
    pub role: Role,
    /// Text or grouped list members
    pub content: Content,
}

impl StyledElement {
    /// Create a singleton text element.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: Content::Text(text.into()),
        }
    }

    /// Create a grouped bullet list element.
    pub fn bullets(items: Vec<String>) -> Self {
        Self {
            role: Role::Bullet,
            content: Content::Items(items),
        }
    }

    /// Text content, if this is a singleton element.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Items(_) => None,
        }
    }

    /// List members, if this is a grouped bullet list.
    pub fn items(&self) -> Option<&[String]> {
        match &self.content {
            Content::Items(items) => Some(items),
            Content::Text(_) => None,
        }
    }

    /// Check if this is a grouped bullet list.
    pub fn is_list(&self) -> bool {
        matches!(self.content, Content::Items(_))
    }
}

/// An element of a laid-out document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A styled paragraph or grouped list
    Styled(StyledElement),

    /// Vertical gap between elements
    Spacer {
        /// Gap height in points
        height: f32,
    },
}

impl Element {
    /// Create a singleton text element.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Element::Styled(StyledElement::text(role, text))
    }

    /// Create a grouped bullet list element.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::Styled(StyledElement::bullets(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create a spacer of the given height in points.
    pub fn spacer(height: f32) -> Self {
        Element::Spacer { height }
    }

    /// Role of the element, `None` for spacers.
    pub fn role(&self) -> Option<Role> {
        match self {
            Element::Styled(styled) => Some(styled.role),
            Element::Spacer { .. } => None,
        }
    }

    /// Styled element, `None` for spacers.
    pub fn as_styled(&self) -> Option<&StyledElement> {
        match self {
            Element::Styled(styled) => Some(styled),
            Element::Spacer { .. } => None,
        }
    }

    /// Check if this element is a spacer.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Element::Spacer { .. })
    }
}
