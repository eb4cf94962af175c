// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get file extension in lowercase.
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Build a timestamped output file path for saved search results.
pub fn stamped_output_path(base: &Path, query: &str, extension: &str) -> PathBuf {
    let slug: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    base.join(format!(
        "jobs_{}_{}.{}",
        slug,
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    ))
}

/// Read file content as string with proper error context.
pub async fn read_file_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write file content, creating parent directories as needed.
pub async fn write_file_content(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(
            get_file_extension(Path::new("profile.json")),
            Some("json".to_string())
        );
        assert_eq!(
            get_file_extension(Path::new("data/cv_params.TOML")),
            Some("toml".to_string())
        );
        assert_eq!(get_file_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_stamped_output_path() {
        let path = stamped_output_path(Path::new("out"), "Python Developer", "csv");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("jobs_python_developer_"));
        assert!(name.ends_with(".csv"));
    }
}
