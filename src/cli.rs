// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::optimizer;
use crate::render::RenderClient;
use crate::search::{JobSearchEngine, QueryExpander};
use crate::strategy;
use crate::types::{CandidateProfile, JobPosting, ResumeDocument, ResumeStyle};
use crate::utils;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "Job aggregation, relevance ranking and resume tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the job boards and rank results against an optional profile
    Search {
        query: String,
        #[arg(long, default_value = "")]
        location: String,
        /// Candidate profile file (.json or .toml) used for ranking
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Print raw JSON instead of the table
        #[arg(long)]
        json: bool,
        /// Also export the results to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Save results as timestamped JSON under this directory
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Show the expanded search terms for a query
    Expand { query: String },
    /// Audit a resume text against a job description (ATS simulation)
    Audit {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
    },
    /// Seniority banding, gap analysis and summary suggestions for a profile
    Strategy {
        #[arg(long)]
        profile: PathBuf,
    },
    /// Reorder resume skills for a target job; optionally render a PDF
    Optimize {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
        #[arg(long, value_enum, default_value_t = ResumeStyle::Classic)]
        style: ResumeStyle,
        /// Render via the configured service and write the PDF here
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Command::Search {
            query,
            location,
            profile,
            json,
            csv,
            save,
        } => {
            let profile = match profile {
                Some(path) => Some(CandidateProfile::load(&path).await?),
                None => None,
            };

            let engine = JobSearchEngine::new(&config.search)?;
            let jobs = engine.run(&query, &location, profile.as_ref()).await;

            if jobs.is_empty() {
                println!("No jobs found for '{}'", query);
            } else if json {
                println!("{}", serde_json::to_string_pretty(&jobs)?);
            } else {
                print_job_table(&jobs);
            }

            if let Some(path) = csv {
                export_csv(&jobs, &path)?;
                println!("Exported {} postings to {}", jobs.len(), path.display());
            }
            if let Some(dir) = save {
                let path = utils::stamped_output_path(&dir, &query, "json");
                let body = serde_json::to_string_pretty(&jobs)?;
                utils::write_file_content(&path, body.as_bytes()).await?;
                println!("Saved results to {}", path.display());
            }
            Ok(())
        }

        Command::Expand { query } => {
            let terms = QueryExpander::new(&config.search).expand(&query);
            for term in terms {
                println!("{}", term);
            }
            Ok(())
        }

        Command::Audit { resume, job } => {
            let resume_text = utils::read_file_content(&resume).await?;
            let job_text = utils::read_file_content(&job).await?;

            let result = optimizer::audit_resume(&resume_text, &job_text);
            println!("ATS score: {}%", result.score);
            if !result.matched.is_empty() {
                println!("Matched:  {}", result.matched.join(", "));
            }
            if !result.missing.is_empty() {
                println!("Missing:  {}", result.missing.join(", "));
            }
            Ok(())
        }

        Command::Strategy { profile } => {
            let profile = CandidateProfile::load(&profile).await?;
            let report = strategy::build_report(&profile);

            println!("Seniority: {}", report.seniority);
            for suggestion in &report.suggestions {
                println!("Advisory:  {}", suggestion);
            }
            println!();
            for (index, summary) in report.summaries.iter().enumerate() {
                println!("Summary {}: {}", index + 1, summary);
            }
            Ok(())
        }

        Command::Optimize {
            resume,
            job,
            style,
            output,
        } => {
            let mut document = ResumeDocument::load(&resume).await?;
            let job_text = utils::read_file_content(&job).await?;

            document.skills = optimizer::reorder_skills(&document.skills, &job_text);
            println!("Skill order for this job:");
            for skill in &document.skills {
                println!("  - {}", skill.name);
            }

            let audit = optimizer::audit_resume(&document.plain_text(), &job_text);
            println!("ATS score after reorder: {}%", audit.score);

            if let Some(path) = output {
                let client = RenderClient::new(&config.render)?;
                let bytes = client
                    .render(&document, style)
                    .await
                    .context("Resume rendering failed")?;
                utils::write_file_content(&path, &bytes).await?;
                println!("Rendered {} resume to {}", style, path.display());
            }
            Ok(())
        }
    }
}

fn print_job_table(jobs: &[JobPosting]) {
    println!("[{:^5}] {:<40} {:<20} {}", "MATCH", "TITLE", "COMPANY", "SOURCE");
    println!("{}", "-".repeat(80));
    for job in jobs {
        let score = match job.match_score {
            Some(score) => format!("{:>3}%", score),
            None => "   -".to_string(),
        };
        println!(
            "[{:^5}] {:<40} {:<20} {}",
            score,
            truncate(&job.title, 38),
            truncate(&job.company, 18),
            job.source
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn export_csv(jobs: &[JobPosting], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record([
        "title",
        "company",
        "location",
        "url",
        "source",
        "date_posted",
        "match_score",
    ])?;

    for job in jobs {
        let source = job.source.to_string();
        let score = job
            .match_score
            .map(|s| s.to_string())
            .unwrap_or_default();
        writer.write_record([
            job.title.as_str(),
            job.company.as_str(),
            job.location.as_str(),
            job.url.as_str(),
            source.as_str(),
            job.date_posted.as_str(),
            score.as_str(),
        ])?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
