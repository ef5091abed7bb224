//! Integration tests for the renderer registry and file export.

use std::fs;
use std::sync::Arc;

use cvpress::export::{DocumentRenderer, JsonRenderer, RendererRegistry};
use cvpress::render::RenderOptions;
use cvpress::{Cvpress, Document, Error, JsonFormat, Result};

/// Mock renderer for testing.
struct MockRenderer {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockRenderer {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentRenderer for MockRenderer {
    fn name(&self) -> &str {
        self.name
    }

    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn mime_type(&self) -> &'static str {
        "text/x-mock"
    }

    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(format!("{} elements by {}", doc.elements.len(), self.name).into_bytes())
    }
}

const RESUME: &str = "Jean Dupont - Technicien chimiste
06 12 34 56 78

Technicien rigoureux.

EXPERIENCE
• Poste A";

#[test]
fn test_registry_new_is_empty() {
    let registry = RendererRegistry::new();
    assert!(!registry.supports("html"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_registry_register_custom() {
    let mut registry = RendererRegistry::with_defaults();
    registry.register(Arc::new(MockRenderer::new(vec!["pdf"], "mock-pdf")));

    assert!(registry.supports("PDF"));
    let renderer = registry.get_by_name("MOCK-PDF").unwrap();
    assert!(renderer.supports_extension("pdf"));
    assert_eq!(renderer.mime_type(), "text/x-mock");
}

#[test]
fn test_register_replaces_extension() {
    let mut registry = RendererRegistry::with_defaults();
    registry.register(Arc::new(MockRenderer::new(vec!["html"], "plain-html")));

    let doc = Cvpress::new().resume(RESUME).document;
    let bytes = registry.render(&doc, "html").unwrap();
    assert_eq!(bytes, format!("{} elements by plain-html", doc.elements.len()).as_bytes());
}

#[test]
fn test_export_to_dir_naming() {
    let dir = tempfile::tempdir().unwrap();
    let result = Cvpress::new().resume(RESUME);

    let path = result.export_to_dir(dir.path(), "html").unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "CV - Jean Dupont - Technicien chimiste.html"
    );

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<p class=\"section_title\""));
    assert!(html.contains("Poste A</li>"));
}

#[test]
fn test_export_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CV - Jean.md");
    fs::write(&path, "ancienne version").unwrap();

    Cvpress::new().resume(RESUME).export(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Jean Dupont - Technicien chimiste"));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_export_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CV - Jean.pdf");

    let err = Cvpress::new().resume(RESUME).export(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "pdf"));
    assert!(!path.exists());
}

#[test]
fn test_export_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.json");
    let result = Cvpress::new().resume(RESUME);

    result.export(&path).unwrap();

    let back: Document = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&back, result.document());
}

#[test]
fn test_letter_export_with_title() {
    let dir = tempfile::tempdir().unwrap();
    let letter = "Paris, le 3 mars 2025\n\nSociété\n\nObjet : Candidature\n\nMadame,\n\nJean Dupont";

    let path = Cvpress::new()
        .with_render_options(RenderOptions::new().with_frontmatter(true))
        .letter(letter)
        .unwrap()
        .with_title("Jean Dupont")
        .export_to_dir(dir.path(), "md")
        .unwrap();

    assert!(path.ends_with("Lettre - Jean Dupont.md"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("---\nkind: letter\n"));
    assert!(content.contains("subject: \"Objet : Candidature\""));
}

#[test]
fn test_json_renderer_name() {
    let renderer = JsonRenderer::new(JsonFormat::Pretty);
    assert_eq!(renderer.name(), "json");
    assert_eq!(renderer.supported_extensions(), &["json"]);
}
