// src/optimizer.rs
//! Resume optimization against a target job: the ATS audit and the
//! skill-reordering step that runs before the document is handed to the
//! render service.

use tracing::debug;

use crate::analysis::{relevance_score, KeywordSet, ScoreResult};
use crate::types::SkillEntry;

/// ATS audit: the relevance scorer applied to the resume/job pair,
/// unmodified from the job-ranking path.
pub fn audit_resume(resume_text: &str, job_description: &str) -> ScoreResult {
    relevance_score(resume_text, job_description)
}

/// Reorder the skills sequence so the ones the job description weights
/// most come first. Entries are never dropped or altered; skills the job
/// does not mention keep their original relative order at the tail.
pub fn reorder_skills(skills: &[SkillEntry], job_description: &str) -> Vec<SkillEntry> {
    let reference = KeywordSet::extract(job_description);

    let mut reordered = skills.to_vec();
    reordered.sort_by(|a, b| skill_weight(b, &reference).cmp(&skill_weight(a, &reference)));

    debug!(
        "Reordered {} skills against a {}-keyword job description",
        reordered.len(),
        reference.total_weight()
    );
    reordered
}

/// Reference-side weight of a skill: the summed frequency of its tokens in
/// the job description.
fn skill_weight(skill: &SkillEntry, reference: &KeywordSet) -> usize {
    KeywordSet::extract(&skill.name)
        .iter()
        .map(|(token, _)| reference.count(token))
        .sum()
}
