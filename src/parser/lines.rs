//! Line and block splitting.

/// A single row of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    raw: &'a str,
}

impl<'a> Line<'a> {
    /// Wrap a raw line.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Raw content, as found in the source.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Content without surrounding whitespace.
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    /// Check if the line is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Split text into lines (`\n` or `\r\n` terminated).
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.lines().map(Line::new).collect()
}

/// A maximal run of contiguous non-blank lines.
///
/// A block always holds at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn new(first: &'a str) -> Self {
        Self { lines: vec![first] }
    }

    /// Lines of the block, right-trimmed.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// First line of the block.
    pub fn first_line(&self) -> &'a str {
        self.lines[0]
    }

    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the block has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into blocks separated by runs of blank lines.
///
/// Surrounding whitespace of the whole text is ignored and each line is
/// right-trimmed. Block boundaries depend only on blank lines, never on
/// content.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for line in text.trim().lines().map(str::trim_end) {
        if line.trim().is_empty() {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
        } else {
            match current.as_mut() {
                Some(block) => block.lines.push(line),
                None => current = Some(Block::new(line)),
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }

    blocks
}
