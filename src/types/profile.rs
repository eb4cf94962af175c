// src/types/profile.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Candidate profile as submitted by the form front-end. The search core
/// only reads the title and skill names; it never mutates the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub professional_title: String,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl CandidateProfile {
    /// Text the ranker compares against job descriptions: the professional
    /// title followed by the space-joined skill names.
    pub fn comparison_text(&self) -> String {
        let mut text = self.professional_title.clone();
        for skill in &self.skills {
            text.push(' ');
            text.push_str(&skill.name);
        }
        text
    }

    /// Load a profile from a `.json` or `.toml` file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

        match crate::utils::get_file_extension(path).as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML profile: {}", path.display())),
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON profile: {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_text_joins_title_and_skills() {
        let profile = CandidateProfile {
            professional_title: "Python Developer".to_string(),
            skills: vec![
                SkillEntry {
                    name: "Flask".to_string(),
                    level: "Advanced".to_string(),
                    category: String::new(),
                },
                SkillEntry {
                    name: "SQL".to_string(),
                    level: String::new(),
                    category: String::new(),
                },
            ],
            experiences: Vec::new(),
        };

        assert_eq!(profile.comparison_text(), "Python Developer Flask SQL");
    }

    #[test]
    fn deserializes_minimal_json() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"professional_title": "Data Analyst"}"#).unwrap();
        assert_eq!(profile.professional_title, "Data Analyst");
        assert!(profile.skills.is_empty());
        assert!(profile.experiences.is_empty());
    }
}
