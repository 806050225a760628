// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Projects a finalized cluster document onto Terraform files.

pub mod context;

use crate::config::TemplateFamily;
use crate::constants::OUTPUT_FILES;
use crate::error::RenderError;
use crate::types::ClusterDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{info, warn};

pub use context::build_context;

/// Rendered file content awaiting a write.
#[derive(Debug)]
pub struct RenderedFile {
    pub file_name: &'static str,
    pub content: String,
}

/// The compiled templates of one family, keyed by output file name.
pub struct TerraformTemplates {
    family: TemplateFamily,
    tera: Tera,
}

fn sources(family: TemplateFamily) -> [(&'static str, &'static str); 4] {
    match family {
        TemplateFamily::Vanilla => [
            ("main.tf", include_str!("../../templates/vanilla/main.tf.tera")),
            ("network.tf", include_str!("../../templates/vanilla/network.tf.tera")),
            ("outputs.tf", include_str!("../../templates/vanilla/outputs.tf.tera")),
            ("variables.tf", include_str!("../../templates/vanilla/variables.tf.tera")),
        ],
        TemplateFamily::Cft => [
            ("main.tf", include_str!("../../templates/cft/main.tf.tera")),
            ("network.tf", include_str!("../../templates/cft/network.tf.tera")),
            ("outputs.tf", include_str!("../../templates/cft/outputs.tf.tera")),
            ("variables.tf", include_str!("../../templates/cft/variables.tf.tera")),
        ],
    }
}

impl TerraformTemplates {
    pub fn new(family: TemplateFamily) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        for (name, source) in sources(family) {
            tera.add_raw_template(name, source)
                .map_err(|source| RenderError::Template {
                    template: format!("{}/{}", family, name),
                    source,
                })?;
        }
        Ok(Self { family, tera })
    }

    pub fn family(&self) -> TemplateFamily {
        self.family
    }

    /// Render every output file in memory without touching the filesystem.
    pub fn render(&self, doc: &ClusterDocument) -> Result<Vec<RenderedFile>, RenderError> {
        let context = build_context(doc);
        OUTPUT_FILES
            .iter()
            .map(|file_name| {
                let content = self
                    .tera
                    .render(file_name, &context)
                    .map_err(|source| RenderError::Template {
                        template: format!("{}/{}", self.family, file_name),
                        source,
                    })?;
                Ok(RenderedFile {
                    file_name: *file_name,
                    content,
                })
            })
            .collect()
    }

    /// Write every template for `doc` into `dst`.
    ///
    /// Without `allow_overwrite` an existing target fails the run before
    /// anything is written. Files written by this call are removed again if
    /// a later write fails.
    pub fn copy_to(
        &self,
        allow_overwrite: bool,
        dst: &Path,
        doc: &ClusterDocument,
    ) -> Result<Vec<PathBuf>, RenderError> {
        if !allow_overwrite {
            if let Some(existing) = OUTPUT_FILES
                .iter()
                .map(|name| dst.join(name))
                .find(|path| path.exists())
            {
                return Err(RenderError::Conflict(existing));
            }
        }

        let rendered = self.render(doc)?;

        let mut written = Vec::with_capacity(rendered.len());
        for file in rendered {
            let path = dst.join(file.file_name);
            if let Err(source) = fs::write(&path, file.content) {
                rollback(&written);
                return Err(RenderError::Io { path, source });
            }
            info!("Created terraform file: {}", file.file_name);
            written.push(path);
        }

        info!("Finished creating terraform files in: {}", dst.display());
        Ok(written)
    }
}

fn rollback(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = fs::remove_file(path) {
            warn!("Failed to remove partially written {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::apply_defaults;
    use crate::parser::parse_document;

    const DOC: &str = r#"
metadata:
  name: test-cluster
spec:
  projectId: my-project
  region: us-west1
  network:
    spec:
      subnetName: my-subnet
      subnetRange: "10.0.0.0/24"
      podSubnetRange: "10.1.0.0/16"
      serviceSubnetRange: "10.2.0.0/20"
  nodePools:
    - metadata:
        name: my-node-pool
      spec:
        maxCount: 3
"#;

    fn make_doc(extra: &str) -> ClusterDocument {
        let text = DOC.replace("  region: us-west1", &format!("  region: us-west1\n{}", extra));
        let mut doc = parse_document(&text).unwrap();
        apply_defaults(&mut doc.spec);
        doc
    }

    #[test]
    fn test_all_families_compile() {
        for family in [TemplateFamily::Vanilla, TemplateFamily::Cft] {
            let templates = TerraformTemplates::new(family).unwrap();
            assert_eq!(templates.family(), family);
        }
    }

    #[test]
    fn test_render_produces_every_output_file() {
        let doc = make_doc("");
        for family in [TemplateFamily::Vanilla, TemplateFamily::Cft] {
            let files = TerraformTemplates::new(family).unwrap().render(&doc).unwrap();
            let names: Vec<_> = files.iter().map(|f| f.file_name).collect();
            assert_eq!(names, OUTPUT_FILES);
            assert!(files.iter().all(|f| !f.content.trim().is_empty()));
        }
    }

    #[test]
    fn test_vanilla_private_variant() {
        let doc = make_doc("");
        let files = TerraformTemplates::new(TemplateFamily::Vanilla)
            .unwrap()
            .render(&doc)
            .unwrap();
        let main = &files[0].content;
        assert!(main.contains("private_cluster_config"));
        assert!(main.contains("google_compute_instance\" \"bastion\""));
        assert!(main.contains("name     = \"test-cluster\""));
        assert!(main.contains("resource \"google_container_node_pool\" \"my-node-pool\""));
        assert!(main.contains("max_node_count = 3"));
    }

    #[test]
    fn test_vanilla_public_variant() {
        let doc = make_doc("  private: false");
        let files = TerraformTemplates::new(TemplateFamily::Vanilla)
            .unwrap()
            .render(&doc)
            .unwrap();
        let main = &files[0].content;
        assert!(!main.contains("private_cluster_config"));
        assert!(!main.contains("bastion"));
    }

    #[test]
    fn test_cft_selects_private_module() {
        let private = make_doc("");
        let public = make_doc("  private: false");
        let templates = TerraformTemplates::new(TemplateFamily::Cft).unwrap();

        let main = templates.render(&private).unwrap().remove(0).content;
        assert!(main.contains("kubernetes-engine/google//modules/beta-private-cluster\""));

        let main = templates.render(&public).unwrap().remove(0).content;
        assert!(main.contains(
            "source             = \"terraform-google-modules/kubernetes-engine/google//modules/beta-public-cluster\""
        ));
        assert!(!main.contains("private-cluster"));
    }

    #[test]
    fn test_optional_blocks_rendered_when_present() {
        let doc = make_doc(
            "  databaseEncryption:\n    state: ENCRYPTED\n    keyName: projects/p/locations/l/keyRings/r/cryptoKeys/k\n  maintenanceStartTime: \"03:00\"",
        );
        let files = TerraformTemplates::new(TemplateFamily::Vanilla)
            .unwrap()
            .render(&doc)
            .unwrap();
        let main = &files[0].content;
        assert!(main.contains("database_encryption {"));
        assert!(main.contains("state    = \"ENCRYPTED\""));
        assert!(main.contains("start_time = \"03:00\""));
    }

    #[test]
    fn test_copy_to_refuses_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("main.tf"), "# mine\n").unwrap();
        let templates = TerraformTemplates::new(TemplateFamily::Vanilla).unwrap();

        let err = templates.copy_to(false, tmp.path(), &make_doc("")).unwrap_err();
        assert!(matches!(err, RenderError::Conflict(ref p) if p.ends_with("main.tf")));
        assert_eq!(fs::read_to_string(tmp.path().join("main.tf")).unwrap(), "# mine\n");
        assert!(!tmp.path().join("network.tf").exists());
    }

    #[test]
    fn test_copy_to_overwrites_when_allowed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("main.tf"), "# mine\n").unwrap();
        let templates = TerraformTemplates::new(TemplateFamily::Vanilla).unwrap();

        let written = templates.copy_to(true, tmp.path(), &make_doc("")).unwrap();
        assert_eq!(written.len(), OUTPUT_FILES.len());
        let main = fs::read_to_string(tmp.path().join("main.tf")).unwrap();
        assert!(main.contains("google_container_cluster"));
    }

    #[test]
    fn test_copy_to_rolls_back_on_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory in place of outputs.tf makes the third write fail.
        fs::create_dir(tmp.path().join("outputs.tf")).unwrap();
        let templates = TerraformTemplates::new(TemplateFamily::Vanilla).unwrap();

        let err = templates.copy_to(true, tmp.path(), &make_doc("")).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(!tmp.path().join("main.tf").exists());
        assert!(!tmp.path().join("network.tf").exists());
    }

    #[test]
    fn test_cft_maps_addon_toggles() {
        let doc = make_doc("  alpha: true\n  addons:\n    istio: false\n    vpa: true");
        let main = TerraformTemplates::new(TemplateFamily::Cft)
            .unwrap()
            .render(&doc)
            .unwrap()
            .remove(0)
            .content;
        assert!(main.contains("istio                       = false"));
        assert!(main.contains("enable_vertical_pod_autoscaling = true"));
        assert!(main.contains("enable_kubernetes_alpha     = true"));
        // Defaulted toggles are passed through as well.
        assert!(main.contains("cloudrun                    = false"));
        assert!(main.contains("sandbox_enabled    = false"));
    }

    #[test]
    fn test_cluster_oauth_scopes_reach_every_family() {
        let doc = make_doc("  oauthScopes:\n    - https://www.googleapis.com/auth/cloud-platform");
        for family in [TemplateFamily::Vanilla, TemplateFamily::Cft] {
            let main = TerraformTemplates::new(family)
                .unwrap()
                .render(&doc)
                .unwrap()
                .remove(0)
                .content;
            assert!(
                main.contains("[\"https://www.googleapis.com/auth/cloud-platform\"]"),
                "{} lost the cluster scopes",
                family
            );
            assert!(!main.contains("devstorage.read_only"));
        }
    }

    #[test]
    fn test_user_strings_are_quoted_for_hcl() {
        let doc = make_doc(
            "  taints:\n    - key: dedicated\n      value: 'x\"y'\n      effect: NO_SCHEDULE",
        );
        for family in [TemplateFamily::Vanilla, TemplateFamily::Cft] {
            let main = TerraformTemplates::new(family)
                .unwrap()
                .render(&doc)
                .unwrap()
                .remove(0)
                .content;
            assert!(main.contains(r#"value  = "x\"y""#), "{} left a raw quote", family);
            assert!(!main.contains(r#""x"y""#));
        }
    }
}
