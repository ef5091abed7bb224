//! Integration tests for résumé layout.

use cvpress::layout::{classify_body, layout_resume, LayoutOptions};
use cvpress::parser::{is_section_title, normalize, segment_resume};
use cvpress::{Content, Cvpress, Element, Role};

const SAMPLE: &str = "Jean Dupont
06 12 34 56 78 | jean@mail.com

Ingénieur passionné par la chimie industrielle.

EXPERIENCE
• Poste A
• Poste B";

#[test]
fn test_sample_segmentation() {
    let sections = segment_resume(SAMPLE);

    assert_eq!(
        sections.identity,
        vec!["Jean Dupont", "06 12 34 56 78 | jean@mail.com", ""]
    );
    assert_eq!(
        sections.intro,
        "Ingénieur passionné par la chimie industrielle."
    );
    assert_eq!(sections.body, vec!["EXPERIENCE", "• Poste A", "• Poste B"]);
}

#[test]
fn test_sample_body_classification() {
    let sections = segment_resume(SAMPLE);
    let elements = classify_body(&sections.body, '•');

    assert_eq!(
        elements,
        vec![
            Element::text(Role::SectionTitle, "EXPERIENCE"),
            Element::bullets(["Poste A", "Poste B"]),
        ]
    );
}

#[test]
fn test_sample_layout() {
    let doc = layout_resume(SAMPLE, &LayoutOptions::default());

    assert_eq!(
        doc.roles(),
        vec![
            Role::Header,
            Role::IdentityLine,
            Role::Intro,
            Role::SectionTitle,
            Role::Bullet
        ]
    );
    assert_eq!(doc.find(Role::Header).unwrap().as_text(), Some("Jean Dupont"));
    assert_eq!(
        doc.find(Role::IdentityLine).unwrap().as_text(),
        Some("06 12 34 56 78 | jean@mail.com")
    );

    let spacers: Vec<f32> = doc
        .elements
        .iter()
        .filter_map(|e| match e {
            Element::Spacer { height } => Some(*height),
            Element::Styled(_) => None,
        })
        .collect();
    assert_eq!(spacers, vec![10.0, 6.0, 8.0]);
}

#[test]
fn test_section_titles() {
    assert!(is_section_title("EXPERIENCE PROFESSIONNELLE"));
    assert!(is_section_title("## **COMPÉTENCES**"));
    assert!(is_section_title("LANGUES (2)"));
    assert!(!is_section_title("Experience"));
    assert!(!is_section_title(&"A".repeat(45)));
    assert!(!is_section_title("2019 - 2023"));
    assert!(!is_section_title(""));
}

#[test]
fn test_plain_line_unchanged() {
    let line = "Chef de projet chez Arkema, 2019 - 2023";
    assert_eq!(normalize(line), line);
}

#[test]
fn test_blank_line_splits_bullets() {
    let text = "Jean Dupont\nChimiste\n\nIntro.\n\nCOMPÉTENCES\n• Analyse HPLC\n\n• Synthèse organique";
    let doc = layout_resume(text, &LayoutOptions::default());

    let lists: Vec<&[String]> = doc.styled().filter_map(|s| s.items()).collect();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0], ["Analyse HPLC".to_string()]);
    assert_eq!(lists[1], ["Synthèse organique".to_string()]);
}

#[test]
fn test_body_paragraphs() {
    let text = "Jean Dupont
Chimiste

Intro.

EXPERIENCE
**Technicien** chez Arkema
Analyses quotidiennes.
• Contrôle qualité
FORMATION
Master de chimie";
    let doc = layout_resume(text, &LayoutOptions::default());

    let body: Vec<(Role, &Content)> = doc
        .styled()
        .skip(3)
        .map(|s| (s.role, &s.content))
        .collect();
    assert_eq!(
        body,
        vec![
            (Role::SectionTitle, &Content::Text("EXPERIENCE".into())),
            (
                Role::Intro,
                &Content::Text("**Technicien** chez Arkema".into())
            ),
            (
                Role::Paragraph,
                &Content::Text("Analyses quotidiennes.".into())
            ),
            (
                Role::Bullet,
                &Content::Items(vec!["Contrôle qualité".into()])
            ),
            (Role::SectionTitle, &Content::Text("FORMATION".into())),
            (Role::Paragraph, &Content::Text("Master de chimie".into())),
        ]
    );
}

#[test]
fn test_empty_resume_uses_placeholder() {
    let doc = Cvpress::new().with_placeholder("Jean Dupont").resume("\n\n").document;
    assert_eq!(doc.roles(), vec![Role::Header]);
    assert_eq!(doc.find(Role::Header).unwrap().as_text(), Some("Jean Dupont"));
}

#[test]
fn test_generated_resume_cleanup() {
    let text = "```markdown
# Jean Dupont - Technicien chimiste
06 12 34 56 78 | jean@mail.com

Technicien rigoureux [cite: 3].

## EXPERIENCE
• Poste A [cite_start]

## AGENT INSTRUCTIONS
Ne pas modifier.
```";
    let result = Cvpress::new().resume(text);
    let doc = result.document();

    assert_eq!(
        doc.find(Role::Intro).unwrap().as_text(),
        Some("Technicien rigoureux .")
    );
    assert_eq!(
        doc.find(Role::Bullet).unwrap().items().unwrap(),
        ["Poste A".to_string()]
    );
    assert!(!doc.plain_text().contains("AGENT"));
}

#[test]
fn test_custom_bullet_glyph() {
    let options = LayoutOptions::new().with_bullet('-');
    let doc = layout_resume("Jean\nChimiste\n\nIntro.\n\n- Poste A\n- Poste B", &options);
    assert_eq!(
        doc.find(Role::Bullet).unwrap().items().unwrap(),
        ["Poste A".to_string(), "Poste B".to_string()]
    );
}
