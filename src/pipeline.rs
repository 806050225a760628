// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One generation run: read, default, validate, render.

use crate::config::GenerateConfig;
use crate::defaults::apply_defaults;
use crate::error::Result;
use crate::parser::load_document;
use crate::render::TerraformTemplates;
use crate::types::ClusterDocument;
use crate::validate::validate_document;
use std::path::PathBuf;
use tracing::{debug, info};

/// Load the document named by `config` and return it defaulted and validated.
pub fn prepare(config: &GenerateConfig) -> Result<ClusterDocument> {
    let mut doc = load_document(&config.config_file)?;

    if let Some(project_id) = &config.project_id {
        debug!(
            "Overriding projectId {:?} with {:?}",
            doc.spec.project_id, project_id
        );
        doc.spec.project_id = project_id.clone();
    }

    let applied = apply_defaults(&mut doc.spec);
    debug!("Applied {} default values", applied);

    validate_document(&doc)?;
    Ok(doc)
}

/// Run the whole pipeline and return the paths of the written files.
pub fn generate(config: GenerateConfig) -> Result<Vec<PathBuf>> {
    config.check()?;

    info!(
        "Generating {} terraform for {}",
        config.template_family,
        config.config_file.display()
    );
    let doc = prepare(&config)?;
    info!(
        "Cluster {} validated with {} node pool(s)",
        doc.cluster_name(),
        doc.spec.node_pools.len()
    );

    let templates = TerraformTemplates::new(config.template_family)?;
    let written = templates.copy_to(config.overwrite, &config.output_dir, &doc)?;
    Ok(written)
}
