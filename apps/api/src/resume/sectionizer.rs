//! Text Sectionizer — splits raw résumé text into named sections.
//!
//! A section starts at its heading (`Skills`, optionally followed by a
//! colon) and runs until the next line that starts with a capitalized word,
//! or the end of input. Headings match case-insensitively; the boundary is
//! case-sensitive so an indented lowercase continuation line stays inside
//! the section.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Sentinel returned when a section heading does not appear in the text.
pub const NOT_FOUND: &str = "Not Found";

/// The three fields the intake form consumes, derived once per upload.
#[derive(Debug, Clone, Serialize)]
pub struct SectionMap {
    pub skills: String,
    pub experience: String,
    pub education: String,
}

/// Extracts the named section from `text`, trimmed. Returns [`NOT_FOUND`]
/// when the heading is absent; never errors.
pub fn extract_section(text: &str, section_name: &str) -> String {
    let pattern = format!(r"{}\s*:?\s*", regex::escape(section_name));
    let heading = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return NOT_FOUND.to_string(),
    };

    let Some(found) = heading.find(text) else {
        return NOT_FOUND.to_string();
    };

    let rest = &text[found.end()..];
    let body = match next_section_start(rest) {
        Some(pos) => &rest[..pos],
        None => rest,
    };

    body.trim().to_string()
}

/// Runs the sectionizer for the three known headings.
pub fn extract_resume_info(text: &str) -> SectionMap {
    SectionMap {
        skills: extract_section(text, "Skills"),
        experience: extract_section(text, "Experience"),
        education: extract_section(text, "Education"),
    }
}

/// Offset of the next line starting with a capitalized word, if any.
fn next_section_start(rest: &str) -> Option<usize> {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY
        .get_or_init(|| Regex::new(r"\n[A-Z][a-z]").expect("boundary pattern is valid"))
        .find(rest)
        .map(|m| m.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "Skills: Go, Rust\nExperience: 5 years backend\nEducation: BS CS";

    #[test]
    fn test_extract_section_stops_at_next_capitalized_line() {
        let text = "Skills: X\nNext section";
        assert_eq!(extract_section(text, "Skills"), "X");
    }

    #[test]
    fn test_extract_section_missing_heading_returns_sentinel() {
        assert_eq!(extract_section("Nothing relevant here", "Skills"), NOT_FOUND);
    }

    #[test]
    fn test_extract_section_runs_to_end_of_input() {
        assert_eq!(extract_section(SAMPLE_RESUME, "Education"), "BS CS");
    }

    #[test]
    fn test_extract_section_heading_is_case_insensitive() {
        assert_eq!(extract_section("SKILLS: Rust", "Skills"), "Rust");
    }

    #[test]
    fn test_extract_section_heading_without_colon() {
        assert_eq!(extract_section("Skills\nRust and Go\nEducation: BS", "Skills"), "Rust and Go");
    }

    #[test]
    fn test_extract_section_keeps_lowercase_continuation_lines() {
        let text = "Skills: Rust\nand also Go\nEducation: BS";
        assert_eq!(extract_section(text, "Skills"), "Rust\nand also Go");
    }

    #[test]
    fn test_extract_section_trims_captured_text() {
        let text = "Skills:    spaced out   \nNext";
        assert_eq!(extract_section(text, "Skills"), "spaced out");
    }

    #[test]
    fn test_extract_resume_info_full_sample() {
        let sections = extract_resume_info(SAMPLE_RESUME);
        assert_eq!(sections.skills, "Go, Rust");
        assert_eq!(sections.experience, "5 years backend");
        assert_eq!(sections.education, "BS CS");
    }

    #[test]
    fn test_extract_resume_info_marks_missing_sections() {
        let sections = extract_resume_info("Skills: Rust");
        assert_eq!(sections.skills, "Rust");
        assert_eq!(sections.experience, NOT_FOUND);
        assert_eq!(sections.education, NOT_FOUND);
    }
}
