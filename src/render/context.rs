// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Template context derived from a finalized cluster document.
//!
//! Values the templates cannot compute themselves (inherited versions, merged
//! cluster and pool tags/labels/taints) are resolved here.

use crate::constants::cluster::{BASTION_ZONE_SUFFIX, SERVICE_ACCOUNT_CREATE};
use crate::types::{
    ClusterDocument, Field, NodePoolResource, NodePoolSpecification, TaintSpecification,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tera::Context;

#[derive(Serialize, Debug)]
pub struct NodePoolView<'a> {
    pub name: &'a str,
    /// Explicit node version, absent when the pool follows the master.
    pub version: Option<&'a str>,
    /// Service account email, absent when the generated account is used.
    pub service_account: Option<&'a str>,
    pub oauth_scopes: &'a [String],
    pub tags: Vec<&'a str>,
    pub labels: BTreeMap<&'a str, &'a str>,
    pub metadata: BTreeMap<&'a str, &'a str>,
    pub taints: Vec<&'a TaintSpecification>,
    pub spec: &'a NodePoolSpecification,
}

pub fn build_context(doc: &ClusterDocument) -> Context {
    let spec = &doc.spec;
    let mut context = Context::new();

    context.insert("cluster_name", doc.cluster_name());
    context.insert("spec", spec);
    context.insert("private", &spec.is_private());
    context.insert("regional", &spec.is_regional());
    context.insert("location", spec.location());
    context.insert("master_version", &release_version(spec.version.as_str()));
    context.insert(
        "create_service_account",
        &(spec.service_account.as_str() == Some(SERVICE_ACCOUNT_CREATE)),
    );
    context.insert("bastion_zone", &bastion_zone(doc));

    let pools: Vec<NodePoolView<'_>> = spec
        .node_pools
        .iter()
        .map(|pool| node_pool_view(doc, pool))
        .collect();
    context.insert("node_pools", &pools);

    context
}

/// `latest` means "let GKE pick", which Terraform expresses by omission.
fn release_version(version: Option<&str>) -> Option<&str> {
    version.filter(|v| !v.is_empty() && *v != "latest")
}

fn bastion_zone(doc: &ClusterDocument) -> String {
    doc.spec
        .bastion
        .as_ref()
        .and_then(|b| b.spec.zone.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}-{}", doc.spec.region, BASTION_ZONE_SUFFIX))
}

fn node_pool_view<'a>(doc: &'a ClusterDocument, pool: &'a NodePoolResource) -> NodePoolView<'a> {
    let cluster = &doc.spec;
    let spec = &pool.spec;

    let version = release_version(cluster.node_pool_version(spec));

    let service_account = spec.service_account.as_str().or_else(|| {
        cluster
            .service_account
            .as_str()
            .filter(|sa| *sa != SERVICE_ACCOUNT_CREATE)
    });

    let oauth_scopes = pool_oauth_scopes(&cluster.oauth_scopes, &spec.oauth_scopes);

    let tags = merged_list(cluster.tags.value(), spec.tags.value())
        .map(String::as_str)
        .collect();
    let taints = merged_list(cluster.taints.value(), spec.taints.value()).collect();

    NodePoolView {
        name: pool.name(),
        version,
        service_account,
        oauth_scopes,
        tags,
        labels: merged_map(cluster.labels.value(), spec.labels.value()),
        metadata: merged_map(cluster.metadata.value(), spec.metadata.value()),
        taints,
        spec,
    }
}

/// Scopes the pool's nodes get. Scopes written on the pool win, then scopes
/// written on the cluster, then whatever the defaulter filled in.
fn pool_oauth_scopes<'a>(
    cluster: &'a Field<Vec<String>>,
    pool: &'a Field<Vec<String>>,
) -> &'a [String] {
    let chosen = if pool.is_explicit() || !cluster.is_explicit() {
        pool.value().or(cluster.value())
    } else {
        cluster.value()
    };
    chosen.map(Vec::as_slice).unwrap_or_default()
}

fn merged_list<'a, T>(
    cluster: Option<&'a Vec<T>>,
    pool: Option<&'a Vec<T>>,
) -> impl Iterator<Item = &'a T> {
    cluster
        .into_iter()
        .flatten()
        .chain(pool.into_iter().flatten())
}

/// Pool entries win over cluster entries with the same key.
fn merged_map<'a>(
    cluster: Option<&'a BTreeMap<String, String>>,
    pool: Option<&'a BTreeMap<String, String>>,
) -> BTreeMap<&'a str, &'a str> {
    cluster
        .into_iter()
        .flatten()
        .chain(pool.into_iter().flatten())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClusterSpecification, ObjectMeta};

    fn make_doc(cluster: ClusterSpecification) -> ClusterDocument {
        ClusterDocument {
            metadata: ObjectMeta {
                name: "test-cluster".to_string(),
                ..Default::default()
            },
            spec: cluster,
            ..Default::default()
        }
    }

    fn labels(pairs: &[(&str, &str)]) -> Field<BTreeMap<String, String>> {
        Field::Explicit(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_pool_inherits_and_overrides_cluster_settings() {
        let doc = make_doc(ClusterSpecification {
            region: "us-west1".to_string(),
            tags: Field::Explicit(vec!["blue".to_string()]),
            labels: labels(&[("team", "infra"), ("env", "dev")]),
            node_version: Field::Explicit("1.14.8-gke.12".to_string()),
            service_account: Field::Defaulted("create".to_string()),
            node_pools: vec![NodePoolResource::named(
                "pool",
                NodePoolSpecification {
                    tags: Field::Explicit(vec!["red".to_string()]),
                    labels: labels(&[("env", "prod")]),
                    ..Default::default()
                },
            )],
            ..Default::default()
        });

        let view = node_pool_view(&doc, &doc.spec.node_pools[0]);
        assert_eq!(view.version, Some("1.14.8-gke.12"));
        assert_eq!(view.service_account, None);
        assert_eq!(view.tags, vec!["blue", "red"]);
        assert_eq!(view.labels.get("env"), Some(&"prod"));
        assert_eq!(view.labels.get("team"), Some(&"infra"));
    }

    #[test]
    fn test_latest_version_is_omitted() {
        assert_eq!(release_version(Some("latest")), None);
        assert_eq!(release_version(Some("1.15.4-gke.22")), Some("1.15.4-gke.22"));
        assert_eq!(release_version(None), None);
    }

    #[test]
    fn test_bastion_zone_fallback() {
        let doc = make_doc(ClusterSpecification {
            region: "europe-west4".to_string(),
            ..Default::default()
        });
        assert_eq!(bastion_zone(&doc), "europe-west4-a");
    }

    #[test]
    fn test_custom_cluster_service_account_reaches_pools() {
        let doc = make_doc(ClusterSpecification {
            service_account: Field::Explicit("gke@p.iam.gserviceaccount.com".to_string()),
            node_pools: vec![NodePoolResource::named("pool", NodePoolSpecification::default())],
            ..Default::default()
        });
        let view = node_pool_view(&doc, &doc.spec.node_pools[0]);
        assert_eq!(view.service_account, Some("gke@p.iam.gserviceaccount.com"));
    }

    fn scopes(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cluster_oauth_scopes_reach_defaulted_pools() {
        let cluster = Field::Explicit(scopes(&["cloud-platform"]));
        let defaulted = Field::Defaulted(scopes(&["monitoring", "trace.append"]));
        assert_eq!(pool_oauth_scopes(&cluster, &defaulted), scopes(&["cloud-platform"]));
        assert_eq!(pool_oauth_scopes(&cluster, &Field::Unset), scopes(&["cloud-platform"]));
    }

    #[test]
    fn test_pool_oauth_scopes_win_when_written() {
        let cluster = Field::Explicit(scopes(&["cloud-platform"]));
        assert_eq!(
            pool_oauth_scopes(&cluster, &Field::Explicit(scopes(&["devstorage.read_only"]))),
            scopes(&["devstorage.read_only"])
        );
        assert!(pool_oauth_scopes(&cluster, &Field::Explicit(vec![])).is_empty());
    }

    #[test]
    fn test_defaulted_scopes_used_when_nothing_written() {
        let cluster = Field::Defaulted(scopes(&["a"]));
        let pool = Field::Defaulted(scopes(&["b"]));
        assert_eq!(pool_oauth_scopes(&cluster, &pool), scopes(&["b"]));
        assert!(pool_oauth_scopes(&Field::Unset, &Field::Unset).is_empty());
    }
}
