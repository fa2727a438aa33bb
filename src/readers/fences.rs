//! Fenced code block scanning.

/// Backtick run that opens or closes a fence.
pub const FENCE: &str = "```";

/// A fenced code block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Text after the opening backticks, trimmed. Empty if untagged.
    pub info: String,
    /// Lines between the fences, joined with `\n`.
    pub body: String,
    /// Zero-based line index of the opening fence.
    pub line: usize,
}

impl FencedBlock {
    /// The language tag, or `default` when the fence is untagged.
    pub fn language_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.info.is_empty() {
            default
        } else {
            &self.info
        }
    }

    /// Length of the body in Unicode scalar values, not UTF-16 units.
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// Result of scanning one item from the line stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// A complete fenced block.
    Block(FencedBlock),
    /// A line outside any fence, with its index.
    Text(usize, String),
    /// An opening fence that was never closed.
    Unclosed(FencedBlock),
}

/// Scans lines for fenced blocks.
///
/// Any line starting with three backticks toggles fence state, so a line
/// such as ```` ```js ```` inside a block closes it.
pub struct FenceScanner {
    /// Zero-based index of the next line.
    line_index: usize,
}

impl FenceScanner {
    /// Creates a new scanner.
    pub fn new() -> Self {
        Self { line_index: 0 }
    }

    /// Scans the next item from the line iterator.
    pub fn scan<'a, I>(&mut self, lines: &mut I) -> Option<ScanResult>
    where
        I: Iterator<Item = &'a str>,
    {
        let line = lines.next()?;
        let start = self.line_index;
        self.line_index += 1;

        let Some(info) = line.strip_prefix(FENCE) else {
            return Some(ScanResult::Text(start, line.to_string()));
        };
        let info = info.trim().to_string();

        let mut body_lines: Vec<&str> = Vec::new();
        loop {
            match lines.next() {
                Some(body_line) => {
                    self.line_index += 1;
                    if body_line.starts_with(FENCE) {
                        return Some(ScanResult::Block(FencedBlock {
                            info,
                            body: body_lines.join("\n"),
                            line: start,
                        }));
                    }
                    body_lines.push(body_line);
                }
                None => {
                    return Some(ScanResult::Unclosed(FencedBlock {
                        info,
                        body: body_lines.join("\n"),
                        line: start,
                    }));
                }
            }
        }
    }
}

impl Default for FenceScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans a whole document.
pub fn scan_all(input: &str) -> Vec<ScanResult> {
    let mut scanner = FenceScanner::new();
    let mut lines = input.lines();
    let mut results = Vec::new();

    while let Some(result) = scanner.scan(&mut lines) {
        results.push(result);
    }

    results
}

/// Returns every closed fenced block in document order.
pub fn fenced_blocks(input: &str) -> Vec<FencedBlock> {
    scan_all(input)
        .into_iter()
        .filter_map(|r| match r {
            ScanResult::Block(block) => Some(block),
            _ => None,
        })
        .collect()
}
