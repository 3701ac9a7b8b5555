use serde::{Deserialize, Serialize};

/// Parsed resume content, one list of lines per canonical section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub education: Vec<String>,
    pub achievements: Vec<String>,
}

impl ResumeData {
    /// True when no section yielded any content.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.education.is_empty()
            && self.achievements.is_empty()
    }

    /// Fixed fallback record returned whenever a resume cannot be parsed,
    /// so the client always receives a well-shaped response.
    pub fn mock() -> Self {
        ResumeData {
            skills: vec![
                "JavaScript".to_string(),
                "TypeScript".to_string(),
                "React".to_string(),
                "Next.js".to_string(),
                "Node.js".to_string(),
                "Express".to_string(),
                "MongoDB".to_string(),
                "SQL".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
            ],
            experience: vec![
                "Senior Software Engineer at Tech Solutions Inc. (2020-Present)".to_string(),
                "Software Developer at Digital Innovations (2017-2020)".to_string(),
                "Junior Developer at StartUp Tech (2015-2017)".to_string(),
            ],
            projects: vec![
                "E-commerce Platform: Built a full-stack e-commerce platform with React, Node.js, and MongoDB".to_string(),
                "Task Management App: Developed a task management application with real-time updates using Socket.io".to_string(),
                "Portfolio Website: Created a personal portfolio website using Next.js and Tailwind CSS".to_string(),
            ],
            education: vec![
                "Master of Science in Computer Science, University of Technology (2015-2017)".to_string(),
                "Bachelor of Science in Software Engineering, State University (2011-2015)".to_string(),
            ],
            achievements: vec![
                "Published article on modern web development practices in Tech Magazine".to_string(),
                "Speaker at Regional Web Development Conference 2022".to_string(),
                "Open source contributor to popular React libraries".to_string(),
            ],
        }
    }
}
