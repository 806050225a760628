// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{GkeTfError, Result};
use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which family of Terraform templates to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TemplateFamily {
    /// Plain google provider resources
    #[default]
    Vanilla,
    /// Cloud Foundation Toolkit kubernetes-engine modules
    Cft,
}

impl TemplateFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Vanilla => "vanilla",
            TemplateFamily::Cft => "cft",
        }
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one generation run, passed by value into the pipeline
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory the Terraform files are written to
    pub output_dir: PathBuf,
    /// Cluster document to read
    pub config_file: PathBuf,
    /// Replaces `spec.projectId` from the document when set
    pub project_id: Option<String>,
    pub template_family: TemplateFamily,
    /// Allow replacing files that already exist in `output_dir`
    pub overwrite: bool,
}

impl GenerateConfig {
    /// Check that the input is a readable file and the output directory is
    /// writable, creating the directory when it does not exist yet.
    pub fn check(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(GkeTfError::Config(
                "--directory must be set with a directory name".to_string(),
            ));
        }

        if !self.output_dir.exists() {
            debug!("Creating output directory {}", self.output_dir.display());
            fs::create_dir_all(&self.output_dir).map_err(|e| {
                GkeTfError::Config(format!(
                    "unable to create directory {}: {}",
                    self.output_dir.display(),
                    e
                ))
            })?;
        }

        let dir = fs::metadata(&self.output_dir).map_err(|e| {
            GkeTfError::Config(format!(
                "unable to open directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;
        if !dir.is_dir() {
            return Err(GkeTfError::Config(format!(
                "{} is not a directory",
                self.output_dir.display()
            )));
        }
        if dir.permissions().readonly() || !can_create_files(&self.output_dir) {
            return Err(GkeTfError::Config(format!(
                "directory {} is not writable",
                self.output_dir.display()
            )));
        }

        if self.config_file.as_os_str().is_empty() {
            return Err(GkeTfError::Config(
                "--file must be set with a file name".to_string(),
            ));
        }
        match fs::metadata(&self.config_file) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(GkeTfError::Config(format!(
                "configuration path {} is a directory, expected a file",
                self.config_file.display()
            ))),
            Err(_) => Err(GkeTfError::Config(format!(
                "configuration file is not found: {}",
                self.config_file.display()
            ))),
        }
    }
}

const WRITE_CHECK_FILE: &str = ".gke-tf-write-check";

/// Create and remove a scratch file, so ownership and ACLs are honoured.
fn can_create_files(dir: &Path) -> bool {
    let path = dir.join(WRITE_CHECK_FILE);
    match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(_) => {
            if let Err(e) = fs::remove_file(&path) {
                debug!("Failed to remove {}: {}", path.display(), e);
            }
            true
        }
        Err(e) => {
            debug!("Write check in {} failed: {}", dir.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(output_dir: PathBuf, config_file: PathBuf) -> GenerateConfig {
        GenerateConfig {
            output_dir,
            config_file,
            project_id: None,
            template_family: TemplateFamily::Vanilla,
            overwrite: false,
        }
    }

    #[test]
    fn test_check_creates_missing_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("cluster.yaml");
        fs::write(&input, "spec: {}\n").unwrap();
        let out = tmp.path().join("nested").join("tf");

        make_config(out.clone(), input).check().unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_check_rejects_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_config(tmp.path().to_path_buf(), tmp.path().join("missing.yaml"));
        assert!(matches!(config.check(), Err(GkeTfError::Config(_))));
    }

    #[test]
    fn test_check_rejects_directory_as_input() {
        let tmp = tempfile::tempdir().unwrap();
        let config = make_config(tmp.path().to_path_buf(), tmp.path().to_path_buf());
        assert!(matches!(config.check(), Err(GkeTfError::Config(_))));
    }

    #[test]
    fn test_check_rejects_file_as_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("cluster.yaml");
        fs::write(&input, "spec: {}\n").unwrap();
        let config = make_config(input.clone(), input);
        assert!(matches!(config.check(), Err(GkeTfError::Config(_))));
    }

    #[test]
    fn test_template_family_parses_case_insensitively() {
        assert_eq!(
            TemplateFamily::from_str("CFT", true).unwrap(),
            TemplateFamily::Cft
        );
        assert_eq!(
            TemplateFamily::from_str("Vanilla", true).unwrap(),
            TemplateFamily::Vanilla
        );
        assert!(TemplateFamily::from_str("terragrunt", true).is_err());
    }

    #[test]
    fn test_check_leaves_output_dir_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("cluster.yaml");
        fs::write(&input, "spec: {}\n").unwrap();
        let out = tmp.path().join("tf");
        fs::create_dir(&out).unwrap();

        make_config(out.clone(), input).check().unwrap();
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_write_check_fails_for_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(can_create_files(tmp.path()));
        assert!(!can_create_files(&tmp.path().join("gone")));
    }
}
