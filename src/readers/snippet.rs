//! Snippet extraction from a step's markdown.

use crate::config::SnippetConfig;
use crate::model::{CodeSnippet, Highlight};

use super::fences::{scan_all, FencedBlock, ScanResult};

/// Extracts the displayable snippet from one content file.
///
/// Total: every input, including empty text and unterminated fences, yields
/// a snippet. Block choice:
///
/// 1. with a highlight marker, the last block opening before the marker;
/// 2. otherwise (or if no block precedes the marker) the longest block,
///    first one winning ties;
/// 3. with no blocks at all, the configured placeholder code.
///
/// Lines after an unterminated fence still count when looking for the title
/// and the highlight marker.
pub fn extract_snippet(raw: &str, config: &SnippetConfig) -> CodeSnippet {
    let mut title = None;
    let mut marker_line = None;
    let mut blocks = Vec::new();

    let mut note_line = |index: usize, line: &str| {
        if title.is_none() {
            if let Some(heading) = line.strip_prefix("# ") {
                title = Some(heading.trim().to_string());
            }
        }
        if marker_line.is_none() && line.trim_end() == config.highlight_marker {
            marker_line = Some(index);
        }
    };

    for result in scan_all(raw) {
        match result {
            ScanResult::Block(block) => blocks.push(block),
            ScanResult::Text(index, line) => note_line(index, &line),
            // Not a candidate block, so its lines are read as prose.
            ScanResult::Unclosed(block) => {
                for (offset, line) in block.body.lines().enumerate() {
                    note_line(block.line + 1 + offset, line);
                }
            }
        }
    }

    let highlight = marker_line.and_then(|index| parse_highlight(raw.lines().nth(index + 1)));
    let selected = select_block(&blocks, marker_line);

    let (language, code) = match selected {
        Some(block) => (
            block.language_or(&config.default_language).to_string(),
            block.body.clone(),
        ),
        None => (
            config.default_language.clone(),
            config.placeholder_code.clone(),
        ),
    };

    CodeSnippet {
        title: title.unwrap_or_else(|| config.fallback_title.clone()),
        language,
        code,
        highlight,
    }
}

/// Picks the block to display.
fn select_block(blocks: &[FencedBlock], marker_line: Option<usize>) -> Option<&FencedBlock> {
    if let Some(marker) = marker_line {
        if let Some(block) = blocks.iter().rev().find(|b| b.line < marker) {
            return Some(block);
        }
    }

    // Strictly-greater comparison keeps the first of equally long blocks.
    blocks.iter().fold(None, |best: Option<&FencedBlock>, block| match best {
        Some(current) if block.body_len() <= current.body_len() => Some(current),
        _ => Some(block),
    })
}

/// Parses the line after a highlight marker.
///
/// Accepts `N` or `A-B` with `1 <= A <= B`; anything else yields `None`.
pub fn parse_highlight(payload: Option<&str>) -> Option<Highlight> {
    let payload = payload?.trim();

    let highlight = match payload.split_once('-') {
        Some((start, end)) => {
            Highlight::new(start.trim().parse().ok()?, end.trim().parse().ok()?)
        }
        None => Highlight::line(payload.parse().ok()?),
    };

    if highlight.start == 0 || highlight.start > highlight.end {
        return None;
    }
    Some(highlight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(raw: &str) -> CodeSnippet {
        extract_snippet(raw, &SnippetConfig::default())
    }

    #[test]
    fn test_no_code_gives_placeholder() {
        for input in ["", "# Title only", "plain prose\nmore prose", "```ts\nunterminated"] {
            let snippet = extract(input);
            assert_eq!(snippet.code, "// No code available");
            assert_eq!(snippet.language, "typescript");
            assert_eq!(snippet.highlight, None);
        }
    }

    #[test]
    fn test_title_from_first_heading() {
        let snippet = extract("intro\n# Encrypt Input\n## Details\n# Second");
        assert_eq!(snippet.title, "Encrypt Input");
    }

    #[test]
    fn test_fallback_title() {
        assert_eq!(extract("## Only level two").title, "Code Example");
        assert_eq!(extract("#NoSpace").title, "Code Example");
    }

    #[test]
    fn test_comment_in_code_is_not_title() {
        let snippet = extract("```bash\n# install deps\nnpm i\n```");
        assert_eq!(snippet.title, "Code Example");
    }

    #[test]
    fn test_single_block_selected_regardless_of_size() {
        let snippet = extract("# T\n\n```rust\nx\n```\n");
        assert_eq!(snippet.code, "x");
        assert_eq!(snippet.language, "rust");
    }

    #[test]
    fn test_untagged_block_language() {
        let snippet = extract("```\nconst a = 1\n```");
        assert_eq!(snippet.language, "typescript");
    }

    #[test]
    fn test_longest_block_wins() {
        let input = "```ts\nshort\n```\n```sol\nthe longest body\n```\n```js\nmid body\n```";
        let snippet = extract(input);
        assert_eq!(snippet.code, "the longest body");
        assert_eq!(snippet.language, "sol");
    }

    #[test]
    fn test_length_tie_first_wins() {
        let input = "```a\nsame\n```\n```b\nsame\n```";
        assert_eq!(extract(input).language, "a");
    }

    #[test]
    fn test_marker_selects_nearest_preceding_block() {
        let input = "\
# Compute
```ts
first
```
```ts
second
```
## Highlight Lines
2-3
```ts
a much much much larger block after the marker
```";
        let snippet = extract(input);
        assert_eq!(snippet.code, "second");
        assert_eq!(snippet.highlight, Some(Highlight::new(2, 3)));
    }

    #[test]
    fn test_marker_without_preceding_block_falls_through() {
        let input = "## Highlight Lines\n4\n```ts\nsmall\n```\n```ts\nlarger one\n```";
        let snippet = extract(input);
        assert_eq!(snippet.code, "larger one");
        assert_eq!(snippet.highlight, Some(Highlight::line(4)));
    }

    #[test]
    fn test_marker_after_unclosed_fence() {
        let input = "```ts\nfirst\n```\n```ts\nsecond\n```\n```\n## Highlight Lines\n2";
        let snippet = extract(input);
        assert_eq!(snippet.code, "second");
        assert_eq!(snippet.highlight, Some(Highlight::line(2)));
    }

    #[test]
    fn test_title_after_unclosed_fence() {
        let snippet = extract("```ts\nconst x = 1\n```\n```\n# Late Title");
        assert_eq!(snippet.title, "Late Title");
        assert_eq!(snippet.code, "const x = 1");
    }

    #[test]
    fn test_highlight_parsing() {
        assert_eq!(parse_highlight(Some("12-18")), Some(Highlight::new(12, 18)));
        assert_eq!(parse_highlight(Some(" 12 - 18 ")), Some(Highlight::new(12, 18)));
        assert_eq!(parse_highlight(Some("7")), Some(Highlight::new(7, 7)));
        assert_eq!(parse_highlight(Some("abc")), None);
        assert_eq!(parse_highlight(Some("")), None);
        assert_eq!(parse_highlight(Some("3-x")), None);
        assert_eq!(parse_highlight(Some("1-2-3")), None);
        assert_eq!(parse_highlight(Some("9-4")), None);
        assert_eq!(parse_highlight(Some("0")), None);
        assert_eq!(parse_highlight(None), None);
    }

    #[test]
    fn test_marker_on_last_line() {
        let snippet = extract("```ts\ncode\n```\n## Highlight Lines");
        assert_eq!(snippet.code, "code");
        assert_eq!(snippet.highlight, None);
    }

    #[test]
    fn test_malformed_payload_omits_highlight() {
        let snippet = extract("```ts\ncode\n```\n## Highlight Lines\nlines ten to twelve");
        assert_eq!(snippet.code, "code");
        assert_eq!(snippet.highlight, None);
    }

    #[test]
    fn test_custom_config() {
        let config = SnippetConfig {
            default_language: "solidity".to_string(),
            highlight_marker: "### Focus".to_string(),
            ..SnippetConfig::default()
        };
        let snippet = extract_snippet("```\nuint x;\n```\n### Focus\n1", &config);

        assert_eq!(snippet.language, "solidity");
        assert_eq!(snippet.highlight, Some(Highlight::line(1)));
    }
}
