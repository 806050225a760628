// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Field;

/// A GKE node pool. Counts are signed so that negative input reaches the
/// validator instead of failing the parse.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodePoolSpecification {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub min_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub initial_node_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub max_pods_per_node: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub machine_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_repair: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_upgrade: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub preemptible: Field<bool>,
    /// Overrides the cluster version for this pool.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
    #[serde(default, rename = "diskSizeGB", skip_serializing_if = "Field::is_unset")]
    pub disk_size_gb: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disk_type: Field<String>,
    /// Number of 375GB local SSDs per node.
    #[serde(default, rename = "localSSDCount", skip_serializing_if = "Field::is_unset")]
    pub local_ssd_count: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub image_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub min_cpu_platform: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub oauth_scopes: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub taints: Field<Vec<TaintSpecification>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub labels: Field<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub workload_metadata_config: Field<WorkloadMetadataConfig>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub accelerator_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub accelerator_count: Field<i32>,
    /// Existing service account to run the nodes as.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub service_account: Field<String>,
    /// GKE Sandbox.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gvisor: Field<bool>,
}

/// Kubernetes node taint, e.g. `{key: dedicated, value: gpu, effect: NO_SCHEDULE}`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaintSpecification {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub effect: String,
}

/// How workloads on the pool see the GCE metadata server.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkloadMetadataConfig {
    #[serde(default)]
    pub node_metadata: String,
}
