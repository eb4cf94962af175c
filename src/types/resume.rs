// src/types/resume.rs
//! Fully-resolved resume document handed to the external PDF render service.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::profile::{ExperienceEntry, SkillEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub educations: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub full_name: String,
    #[serde(default)]
    pub professional_title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub technologies: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default)]
    pub label: String,
    pub url: String,
}

/// Style selector understood by the render service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStyle {
    Classic,
    Modern,
    Uno,
}

impl std::fmt::Display for ResumeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResumeStyle::Classic => "classic",
            ResumeStyle::Modern => "modern",
            ResumeStyle::Uno => "uno",
        };
        write!(f, "{}", label)
    }
}

impl ResumeDocument {
    /// Load a resume document from a `.json` or `.toml` file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

        match crate::utils::get_file_extension(path).as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML resume: {}", path.display())),
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON resume: {}", path.display())),
        }
    }

    /// Flat text rendition of the document, used as the candidate side of
    /// an ATS audit.
    pub fn plain_text(&self) -> String {
        let mut parts = vec![
            self.candidate.professional_title.clone(),
            self.candidate.summary.clone(),
        ];
        for skill in &self.skills {
            parts.push(skill.name.clone());
        }
        for exp in &self.experiences {
            parts.push(exp.role.clone());
            parts.push(exp.description.clone());
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}
