//! Heading-delimited section splitting
//!
//! Splits markdown into `(heading text, following content)` pairs using ATX
//! headings of any level. Lines inside fenced code blocks never count as
//! headings, so a YAML comment inside a fenced `Options` block stays content.

use once_cell::sync::Lazy;
use regex::Regex;

/// Name given to content that appears before the first heading
pub const RAW_SECTION: &str = "raw";

static ATX_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}#{1,6}(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$").expect("heading regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub content: String,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            content: String::new(),
        }
    }
}

/// Split `text` into sections in document order
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut leading = String::new();
    let mut fence = Fence::default();

    for line in text.split_inclusive('\n') {
        let bare = line.trim_end_matches(['\n', '\r']);

        if !fence.update(bare) {
            if let Some(name) = heading_text(bare) {
                tracing::trace!(section = %name, "found section heading");
                sections.push(Section::new(name));
                continue;
            }
        }

        match sections.last_mut() {
            Some(section) => section.content.push_str(line),
            None => leading.push_str(line),
        }
    }

    if !leading.trim().is_empty() {
        let mut raw = Section::new(RAW_SECTION);
        raw.content = leading;
        sections.insert(0, raw);
    }

    sections
}

fn heading_text(line: &str) -> Option<String> {
    let captures = ATX_HEADING.captures(line)?;
    let text = captures.get(1).map_or("", |m| m.as_str()).trim();
    Some(text.to_string())
}

/// Tracks whether the scan is inside a fenced code block
#[derive(Debug, Default)]
struct Fence {
    open: Option<(char, usize)>,
}

impl Fence {
    /// Feed one line; returns true when the line belongs to a fence
    fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > 3 {
            return self.open.is_some();
        }

        let marker = trimmed.chars().next();
        let run = match marker {
            Some(c @ ('`' | '~')) => trimmed.chars().take_while(|&ch| ch == c).count(),
            _ => 0,
        };

        match (self.open, marker) {
            (None, Some(c)) if run >= 3 => {
                self.open = Some((c, run));
                true
            }
            (Some((c, len)), Some(m)) if m == c && run >= len && trimmed[run..].trim().is_empty() => {
                self.open = None;
                true
            }
            (open, _) => open.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn splits_on_headings_of_any_level() {
        let sections = split_sections("# Board\n\nAbout.\n\n## Todo\n- a\n### Done\n");
        assert_eq!(names(&sections), vec!["Board", "Todo", "Done"]);
        assert_eq!(sections[0].content, "\nAbout.\n\n");
        assert_eq!(sections[1].content, "- a\n");
        assert_eq!(sections[2].content, "");
    }

    #[test]
    fn leading_content_becomes_raw_section() {
        let sections = split_sections("Intro text\n# Board\n");
        assert_eq!(names(&sections), vec![RAW_SECTION, "Board"]);
        assert_eq!(sections[0].content, "Intro text\n");
    }

    #[test]
    fn blank_leading_content_is_ignored() {
        let sections = split_sections("\n\n# Board\n");
        assert_eq!(names(&sections), vec!["Board"]);
    }

    #[test]
    fn closing_hashes_are_stripped() {
        let sections = split_sections("## Todo ##\n#### C# notes\n");
        assert_eq!(names(&sections), vec!["Todo", "C# notes"]);
    }

    #[test]
    fn hashtags_are_not_headings() {
        let sections = split_sections("# Board\n#tag\n");
        assert_eq!(names(&sections), vec!["Board"]);
        assert_eq!(sections[0].content, "#tag\n");
    }

    #[test]
    fn fenced_lines_are_content() {
        let text = "# Board\n## Options\n```yaml\n# a comment\nhiddenColumns: []\n```\n## Todo\n";
        let sections = split_sections(text);
        assert_eq!(names(&sections), vec!["Board", "Options", "Todo"]);
        assert!(sections[1].content.contains("# a comment"));
    }

    #[test]
    fn no_headings_yields_raw_only() {
        let sections = split_sections("just text\n");
        assert_eq!(names(&sections), vec![RAW_SECTION]);
        assert!(split_sections("").is_empty());
    }
}
