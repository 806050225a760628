// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gke_tf::config::{GenerateConfig, TemplateFamily};
use gke_tf::pipeline;
use gke_tf::types::ClusterDocument;

#[derive(Parser)]
#[command(author, version, about = "Generate GKE Terraform from a cluster document", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Terraform files from a cluster document
    Gen {
        /// Directory the Terraform files are written to
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
        /// Cluster document to read
        #[arg(short, long)]
        file: PathBuf,
        /// Override the projectId of the document
        #[arg(short, long = "project-id")]
        project_id: Option<String>,
        /// Template family to render
        #[arg(short = 't', long = "tf-type", value_enum, ignore_case = true, default_value_t = TemplateFamily::Vanilla)]
        tf_type: TemplateFamily,
        /// Replace Terraform files that already exist
        #[arg(short = 'o', long = "overwrite-file")]
        overwrite: bool,
    },
    /// Print the JSON Schema of the cluster document
    Schema,
    /// Print the version of gke-tf
    Version,
}

fn version_line() -> String {
    format!("gke-tf version: {}", env!("CARGO_PKG_VERSION"))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gen {
            directory,
            file,
            project_id,
            tf_type,
            overwrite,
        } => {
            let config = GenerateConfig {
                output_dir: directory,
                config_file: file,
                project_id,
                template_family: tf_type,
                overwrite,
            };
            let written = pipeline::generate(config)?;
            info!("Wrote {} terraform files", written.len());
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(ClusterDocument);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Version => println!("{}", version_line()),
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_gen_arguments() {
        let cli = Cli::try_parse_from([
            "gke-tf", "gen", "-f", "cluster.yaml", "-d", "out", "-p", "my-project", "-t", "CFT", "-o",
        ])
        .unwrap();
        match cli.command {
            Commands::Gen {
                directory,
                file,
                project_id,
                tf_type,
                overwrite,
            } => {
                assert_eq!(directory, PathBuf::from("out"));
                assert_eq!(file, PathBuf::from("cluster.yaml"));
                assert_eq!(project_id.as_deref(), Some("my-project"));
                assert_eq!(tf_type, TemplateFamily::Cft);
                assert!(overwrite);
            }
            other => panic!("expected gen, got {:?}", other),
        }
    }

    #[test]
    fn test_gen_defaults() {
        let cli = Cli::try_parse_from(["gke-tf", "gen", "-f", "cluster.yaml"]).unwrap();
        match cli.command {
            Commands::Gen {
                directory,
                tf_type,
                overwrite,
                ..
            } => {
                assert_eq!(directory, PathBuf::from("."));
                assert_eq!(tf_type, TemplateFamily::Vanilla);
                assert!(!overwrite);
            }
            other => panic!("expected gen, got {:?}", other),
        }
    }

    #[test]
    fn test_gen_requires_file() {
        assert!(Cli::try_parse_from(["gke-tf", "gen"]).is_err());
    }

    #[test]
    fn test_version_subcommand() {
        let cli = Cli::try_parse_from(["gke-tf", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
        assert_eq!(
            version_line(),
            format!("gke-tf version: {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
