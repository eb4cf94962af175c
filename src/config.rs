// src/config.rs
//! Runtime configuration: search knobs, source endpoints, render service.
//! Defaults live in code; `config.yaml` overrides them per environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Pause between successive expanded-term fetches, to avoid tripping
    /// source-side rate limiting. Politeness, not correctness.
    pub politeness_delay_ms: u64,
    pub request_timeout_secs: u64,
    /// Combined cap on search terms: the original query plus expansions.
    pub max_expansion_terms: usize,
    pub synonyms: Vec<SynonymRule>,
    pub remoteok: SourceConfig,
    pub computrabajo: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynonymRule {
    /// Lowercase substring that activates this rule.
    pub trigger: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            politeness_delay_ms: 2000,
            request_timeout_secs: 15,
            max_expansion_terms: 4,
            synonyms: default_synonyms(),
            remoteok: SourceConfig {
                base_url: "https://remoteok.com/api".to_string(),
                max_results: 20,
            },
            computrabajo: SourceConfig {
                base_url: "https://cl.computrabajo.com".to_string(),
                max_results: 15,
            },
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            max_results: 20,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5555".to_string(),
            timeout_secs: 30,
        }
    }
}

fn default_synonyms() -> Vec<SynonymRule> {
    let table: &[(&str, &[&str])] = &[
        (
            "python",
            &["django", "flask", "backend developer", "software engineer"],
        ),
        (
            "javascript",
            &["react", "node", "frontend developer", "full stack developer"],
        ),
        ("java", &["spring", "backend developer", "software engineer"]),
        ("react", &["frontend developer", "javascript", "web developer"]),
        ("data", &["data analyst", "data engineer", "sql", "python"]),
        (
            "devops",
            &["kubernetes", "docker", "site reliability engineer"],
        ),
        ("frontend", &["react", "vue", "web developer"]),
        ("backend", &["api developer", "software engineer"]),
        (
            "full stack",
            &["frontend developer", "backend developer", "software engineer"],
        ),
        ("qa", &["quality assurance", "tester", "automation engineer"]),
    ];

    table
        .iter()
        .map(|(trigger, terms)| SynonymRule {
            trigger: trigger.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration for the current environment from `config.yaml`,
    /// falling back to built-in defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let environment = Self::environment_name();
        let config_path = PathBuf::from("config.yaml");

        if !config_path.exists() {
            info!("config.yaml not found, using built-in defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;
        let config_file: ConfigFile =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        info!("Loaded configuration for environment: {}", environment);
        Ok(match environment.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn environment_name() -> String {
        std::env::var("JOBSCOUT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = SearchConfig::default();
        assert_eq!(config.max_expansion_terms, 4);
        assert!(config.remoteok.base_url.starts_with("https://"));
        assert!(config.computrabajo.max_results <= 20);
        assert!(!config.synonyms.is_empty());
        for rule in &config.synonyms {
            assert_eq!(rule.trigger, rule.trigger.to_lowercase());
        }
    }

    #[test]
    fn partial_yaml_override_keeps_defaults() {
        let yaml = r#"
search:
  politeness_delay_ms: 50
  computrabajo:
    base_url: "http://localhost:9999"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.politeness_delay_ms, 50);
        assert_eq!(config.search.computrabajo.base_url, "http://localhost:9999");
        // Untouched knobs come from defaults.
        assert_eq!(config.search.max_expansion_terms, 4);
        assert_eq!(config.search.remoteok.base_url, "https://remoteok.com/api");
    }
}
