// src/strategy.rs
//! Profile analysis: seniority banding, gap advisories and summary
//! suggestions for the form front-end.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::types::CandidateProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    LeadPrincipal,
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seniority::EntryLevel => "Entry-Level",
            Seniority::Junior => "Junior",
            Seniority::MidLevel => "Mid-Level",
            Seniority::Senior => "Senior",
            Seniority::LeadPrincipal => "Lead/Principal",
        };
        write!(f, "{}", label)
    }
}

/// Band seniority from the number of recorded experiences.
pub fn seniority_for(experience_count: usize) -> Seniority {
    match experience_count {
        0 => Seniority::EntryLevel,
        1..=2 => Seniority::Junior,
        3..=5 => Seniority::MidLevel,
        6..=9 => Seniority::Senior,
        _ => Seniority::LeadPrincipal,
    }
}

/// Advisory gap analysis keyed off title keywords and missing core skills.
pub fn identify_gaps(title: &str, skill_names: &[String]) -> Vec<String> {
    let title_lower = title.to_lowercase();
    let skills: Vec<String> = skill_names.iter().map(|s| s.to_lowercase()).collect();
    let has_any = |candidates: &[&str]| {
        candidates
            .iter()
            .any(|c| skills.iter().any(|s| s.contains(c)))
    };

    let mut suggestions = Vec::new();

    if title_lower.contains("full stack") {
        if !has_any(&["react", "vue", "angular"]) {
            suggestions
                .push("Consider learning a modern frontend framework (React/Vue).".to_string());
        }
        if !has_any(&["node", "python", "java", "c#", "php"]) {
            suggestions.push("Strengthen your backend skills (Node/Python/Java).".to_string());
        }
    }

    if title_lower.contains("data") && !has_any(&["sql", "pandas", "python"]) {
        suggestions.push("Data roles require strong SQL and Python foundations.".to_string());
    }

    suggestions
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub seniority: Seniority,
    pub suggestions: Vec<String>,
    /// Summary variants: experience-, skill- and impact-focused.
    pub summaries: Vec<String>,
}

/// Build the full career-strategy report for a profile.
pub fn build_report(profile: &CandidateProfile) -> StrategyReport {
    let title = if profile.professional_title.is_empty() {
        "Profesional"
    } else {
        &profile.professional_title
    };
    let skill_names: Vec<String> = profile.skills.iter().map(|s| s.name.clone()).collect();
    let roles: Vec<&str> = profile
        .experiences
        .iter()
        .filter(|e| !e.role.is_empty())
        .map(|e| e.role.as_str())
        .collect();

    info!("Analyzing profile for {}", title);

    let seniority = seniority_for(profile.experiences.len());
    let suggestions = identify_gaps(title, &skill_names);

    let top_skills = if skill_names.is_empty() {
        "habilidades clave".to_string()
    } else {
        skill_names
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let last_role = roles.first().copied().unwrap_or("Profesional");

    let mut summaries = Vec::new();
    if matches!(seniority, Seniority::Senior | Seniority::LeadPrincipal) {
        summaries.push(format!(
            "{} nivel {} con sólida trayectoria como {}. Liderazgo técnico en {}. \
             Enfocado en arquitecturas escalables y mentoría de equipos.",
            title, seniority, last_role, top_skills
        ));
    } else {
        summaries.push(format!(
            "{} con experiencia como {}. Competente en {}. Busco oportunidades para \
             aplicar mis conocimientos en proyectos desafiantes.",
            title, last_role, top_skills
        ));
    }
    summaries.push(format!(
        "Especialista en {} con enfoque en resultados. Experiencia práctica en {}, \
         comprometido con la calidad de código y las mejores prácticas.",
        top_skills, last_role
    ));
    summaries.push(format!(
        "{} proactivo y orientado a objetivos. Historial demostrado en {}. \
         Capacidad para {} y resolución de problemas complejos.",
        title, last_role, top_skills
    ));

    StrategyReport {
        seniority,
        suggestions,
        summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExperienceEntry, SkillEntry};

    #[test]
    fn seniority_banding_boundaries() {
        assert_eq!(seniority_for(0), Seniority::EntryLevel);
        assert_eq!(seniority_for(1), Seniority::Junior);
        assert_eq!(seniority_for(2), Seniority::Junior);
        assert_eq!(seniority_for(3), Seniority::MidLevel);
        assert_eq!(seniority_for(5), Seniority::MidLevel);
        assert_eq!(seniority_for(6), Seniority::Senior);
        assert_eq!(seniority_for(9), Seniority::Senior);
        assert_eq!(seniority_for(10), Seniority::LeadPrincipal);
    }

    #[test]
    fn full_stack_without_frontend_framework_gets_advisory() {
        let gaps = identify_gaps(
            "Full Stack Developer",
            &["Python".to_string(), "SQL".to_string()],
        );
        assert_eq!(gaps.len(), 1);
        assert!(gaps[0].contains("frontend framework"));
    }

    #[test]
    fn data_title_with_sql_has_no_gap() {
        let gaps = identify_gaps("Data Analyst", &["SQL".to_string()]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn report_produces_three_summaries() {
        let profile = CandidateProfile {
            professional_title: "Python Developer".to_string(),
            skills: vec![SkillEntry {
                name: "Flask".to_string(),
                level: String::new(),
                category: String::new(),
            }],
            experiences: vec![ExperienceEntry {
                role: "Backend Developer".to_string(),
                company: "StartUp A".to_string(),
                location: "Remote".to_string(),
                start_date: "2023-01".to_string(),
                end_date: "Present".to_string(),
                description: String::new(),
            }],
        };

        let report = build_report(&profile);
        assert_eq!(report.seniority, Seniority::Junior);
        assert_eq!(report.summaries.len(), 3);
        assert!(report.summaries[0].contains("Backend Developer"));
        assert!(report.summaries[1].contains("Flask"));
    }
}
