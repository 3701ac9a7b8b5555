//! Section splitter — slices raw resume text into the five canonical
//! sections by header position. Pure function, no I/O.

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Skills,
    Experience,
    Projects,
    Education,
    Achievements,
}

/// Header synonyms per canonical section, matched case-insensitively
/// anywhere in the text.
const SECTION_MARKERS: &[(Section, &[&str])] = &[
    (
        Section::Skills,
        &["skills", "technical skills", "core competencies", "expertise"],
    ),
    (
        Section::Experience,
        &[
            "experience",
            "work experience",
            "employment history",
            "professional experience",
        ],
    ),
    (
        Section::Projects,
        &["projects", "personal projects", "key projects", "portfolio"],
    ),
    (
        Section::Education,
        &[
            "education",
            "academic background",
            "qualifications",
            "academic qualifications",
        ],
    ),
    (
        Section::Achievements,
        &[
            "achievements",
            "awards",
            "certifications",
            "honors",
            "accomplishments",
        ],
    ),
];

/// Splits resume text into sections.
///
/// Each section starts at the earliest occurrence of any of its header
/// synonyms and runs to the start of the next section (the last one runs to
/// the end of the text). The header line is dropped and the remaining lines
/// are trimmed, with empties discarded. Sections whose headers never appear
/// come back empty; the caller decides what an entirely empty result means.
pub fn split_sections(text: &str) -> ResumeData {
    // ASCII lowering keeps byte offsets aligned with the original text.
    let lower = text.to_ascii_lowercase();

    let mut found: Vec<(Section, usize)> = SECTION_MARKERS
        .iter()
        .filter_map(|(section, markers)| {
            markers
                .iter()
                .filter_map(|marker| lower.find(marker))
                .min()
                .map(|start| (*section, start))
        })
        .collect();
    found.sort_by_key(|&(_, start)| start);

    let mut data = ResumeData::default();
    for (i, &(section, start)) in found.iter().enumerate() {
        let end = found
            .get(i + 1)
            .map(|&(_, next_start)| next_start)
            .unwrap_or(text.len());

        let lines: Vec<String> = text[start..end]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .skip(1) // drop the header line itself
            .map(String::from)
            .collect();

        if lines.is_empty() {
            continue;
        }
        match section {
            Section::Skills => data.skills = lines,
            Section::Experience => data.experience = lines,
            Section::Projects => data.projects = lines,
            Section::Education => data.education = lines,
            Section::Achievements => data.achievements = lines,
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane@example.com

Technical Skills
Rust, Go, PostgreSQL
Kubernetes

Work Experience
Senior Engineer at Acme (2020-Present)
Engineer at Widgets Co (2017-2020)

Projects
Build pipeline overhaul

Education
BSc Computer Science, State University (2013-2017)

Awards
Employee of the Year 2022
";

    #[test]
    fn test_splits_all_sections() {
        let data = split_sections(SAMPLE_RESUME);
        assert_eq!(data.skills, vec!["Rust, Go, PostgreSQL", "Kubernetes"]);
        assert_eq!(
            data.experience,
            vec![
                "Senior Engineer at Acme (2020-Present)",
                "Engineer at Widgets Co (2017-2020)"
            ]
        );
        assert_eq!(data.projects, vec!["Build pipeline overhaul"]);
        assert_eq!(
            data.education,
            vec!["BSc Computer Science, State University (2013-2017)"]
        );
        assert_eq!(data.achievements, vec!["Employee of the Year 2022"]);
    }

    #[test]
    fn test_header_line_is_dropped() {
        let data = split_sections("Skills\nRust\n");
        assert_eq!(data.skills, vec!["Rust"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let data = split_sections("SKILLS\nRust\nEDUCATION\nMIT\n");
        assert_eq!(data.skills, vec!["Rust"]);
        assert_eq!(data.education, vec!["MIT"]);
    }

    #[test]
    fn test_synonyms_are_recognized() {
        let text = "Core Competencies\nLeadership\n\nEmployment History\nManager at Acme\n\nHonors\nDean's list\n";
        let data = split_sections(text);
        assert_eq!(data.skills, vec!["Leadership"]);
        assert_eq!(data.experience, vec!["Manager at Acme"]);
        assert_eq!(data.achievements, vec!["Dean's list"]);
    }

    #[test]
    fn test_last_section_runs_to_end_of_text() {
        let text = "Experience\nEngineer at Acme\nStill the same section\nAnd this line too";
        let data = split_sections(text);
        assert_eq!(data.experience.len(), 3);
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        let data = split_sections("Skills\n\n  Rust  \n\n\nGo\n");
        assert_eq!(data.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_unrecognizable_text_yields_empty_result() {
        let data = split_sections("Lorem ipsum dolor sit amet.\nNothing resume-like here.");
        assert!(data.is_empty());
    }

    #[test]
    fn test_section_without_body_stays_empty() {
        // A header with no following lines contributes nothing.
        let data = split_sections("Skills");
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_earliest_marker_wins_per_section() {
        // "experience" appears inside "Professional Experience"; the section
        // must anchor at the earliest marker occurrence, not a later one.
        let text = "Professional Experience\nEngineer at Acme\n\nSkills\nRust\n";
        let data = split_sections(text);
        assert_eq!(data.experience, vec!["Engineer at Acme"]);
        assert_eq!(data.skills, vec!["Rust"]);
    }
}
