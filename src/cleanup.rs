//! Cleanup of generated text before segmentation.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Marker after which a generated résumé carries agent instructions.
pub const AGENT_INSTRUCTIONS_MARKER: &str = "## AGENT INSTRUCTIONS";

/// Lowercased prefixes of generated footer lines.
const FOOTER_PREFIXES: [&str; 2] = ["cv adapté pour", "cv adapte pour"];

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization and code fences
    Minimal,
    /// Standard cleanup: minimal + citation artifacts and agent instructions
    #[default]
    Standard,
    /// Aggressive cleanup: standard + footer lines and blank-line runs
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove an opening and a closing code fence line
    pub strip_fences: bool,

    /// Remove `[cite_start]` and `[cite:…]` artifacts
    pub strip_citations: bool,

    /// Drop everything from the agent instructions marker onward
    pub cut_agent_instructions: bool,

    /// Drop "CV adapté pour …" footer lines
    pub drop_footer_lines: bool,

    /// Collapse runs of blank lines into a single blank line
    pub collapse_blank_lines: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            strip_fences: true,
            strip_citations: false,
            cut_agent_instructions: false,
            drop_footer_lines: false,
            collapse_blank_lines: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            strip_citations: true,
            cut_agent_instructions: true,
            ..Self::minimal()
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            drop_footer_lines: true,
            collapse_blank_lines: true,
            ..Self::standard()
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    options: CleanupOptions,
    citation_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            citation_regex: Regex::new(r"\[cite_start\]|\[cite:[^\]]+\]")
                .expect("citation pattern is a valid regex"),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Options this pipeline runs with.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.strip_fences {
            result = strip_fences(&result);
        }

        if self.options.strip_citations {
            result = self.citation_regex.replace_all(&result, "").into_owned();
        }

        if self.options.cut_agent_instructions {
            if let Some(pos) = result.find(AGENT_INSTRUCTIONS_MARKER) {
                log::debug!("Cutting agent instructions at byte {}", pos);
                result.truncate(pos);
            }
        }

        if self.options.drop_footer_lines {
            result = drop_footer_lines(&result);
        }

        if self.options.collapse_blank_lines {
            result = collapse_blank_lines(&result);
        }

        result.trim().to_string()
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

/// Remove a leading ```` ``` ```` / ```` ```markdown ```` line and a trailing
/// fence line.
fn strip_fences(text: &str) -> String {
    let mut lines: Vec<&str> = text.trim().lines().collect();

    if lines.first().is_some_and(|l| is_fence(l)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| is_fence(l)) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

fn drop_footer_lines(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let lower = line.trim().to_lowercase();
            !FOOTER_PREFIXES.iter().any(|p| lower.starts_with(p))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let text = "Cre\u{301}teil";
        assert_eq!(pipeline.process(text), "Créteil");
    }

    #[test]
    fn test_strip_fences() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let text = "\n```markdown\nJean Dupont\n\nEXPERIENCE\n```\n";
        assert_eq!(pipeline.process(text), "Jean Dupont\n\nEXPERIENCE");
    }

    #[test]
    fn test_fences_only_at_edges() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        let text = "A\n```\nB";
        assert_eq!(pipeline.process(text), "A\n```\nB");
    }

    #[test]
    fn test_strip_citations() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        let text = "[cite_start]Technicien chimiste [cite: 12, 14]depuis 2019.";
        assert_eq!(pipeline.process(text), "Technicien chimiste depuis 2019.");
    }

    #[test]
    fn test_minimal_keeps_citations() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        assert_eq!(pipeline.process("a [cite: 1]"), "a [cite: 1]");
    }

    #[test]
    fn test_cut_agent_instructions() {
        let pipeline = CleanupPipeline::default();
        let text = "Jean Dupont\nEXPERIENCE\n\n## AGENT INSTRUCTIONS\nDo not edit.";
        assert_eq!(pipeline.process(text), "Jean Dupont\nEXPERIENCE");
    }

    #[test]
    fn test_drop_footer_lines() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Aggressive);
        let text = "Jean Dupont\n\nCompétences\n\n  CV Adapté pour le poste de technicien";
        assert_eq!(pipeline.process(text), "Jean Dupont\n\nCompétences");

        let standard = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert!(standard.process(text).contains("CV Adapté pour"));
    }

    #[test]
    fn test_collapse_blank_lines() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Aggressive);
        let text = "A\n\n\n  \n\nB\nC\n\n\nD";
        assert_eq!(pipeline.process(text), "A\n\nB\nC\n\nD");
    }

    #[test]
    fn test_preset_options() {
        let aggressive = CleanupOptions::from_preset(CleanupPreset::Aggressive);
        assert!(aggressive.strip_citations && aggressive.drop_footer_lines);
        assert_eq!(CleanupOptions::default(), CleanupOptions::standard());
        assert!(!CleanupOptions::minimal().cut_agent_instructions);
    }
}
