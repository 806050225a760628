// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{
    AddonsSpecification, BastionSpecification, Field, MasterAuthorizedNetwork,
    NetworkSpecification, NodePoolSpecification, ObjectMeta, Resource, StubDomain,
    TaintSpecification,
};

pub type NetworkResource = Resource<NetworkSpecification>;
pub type BastionResource = Resource<BastionSpecification>;
pub type NodePoolResource = Resource<NodePoolSpecification>;

/// Top-level cluster document as written by the user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: ClusterSpecification,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClusterSpecification {
    /// GCP project hosting the cluster.
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub private: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub regional: Field<bool>,
    /// Master version, also used by node pools without their own version.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remove_default_node_pool: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub zones: Field<Vec<String>>,
    /// Taints applied to every node.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub taints: Field<Vec<TaintSpecification>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub oauth_scopes: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub labels: Field<BTreeMap<String, String>>,
    /// GCE instance metadata for every node.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub metadata: Field<BTreeMap<String, String>>,
    #[serde(default, alias = "Description", skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ip_masq_link_local: Field<bool>,
    #[serde(
        default,
        alias = "ipMasqRsyncInterval",
        skip_serializing_if = "Field::is_unset"
    )]
    pub ip_masq_resync_interval: Field<String>,
    /// Daily maintenance window start, `HH:MM`.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub maintenance_start_time: Field<String>,
    #[serde(
        default,
        alias = "IssueClientCertificate",
        skip_serializing_if = "Field::is_unset"
    )]
    pub issue_client_certificate: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub master_authorized_networks_config: Field<Vec<MasterAuthorizedNetwork>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub resource_usage_export_config: Field<ResourceUsageExportConfig>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub stub_domains: Field<Vec<StubDomain>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub database_encryption: Field<DatabaseEncryption>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub node_version: Field<String>,
    /// Service account for the nodes, or `create` for a dedicated one.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub service_account: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub workload_identity_config: Field<WorkloadIdentityConfig>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub deploy_using_private_endpoint: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub default_max_pods_per_node: Field<i32>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tpu: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub alpha: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub intra_node_visibility: Field<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<AddonsSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bastion: Option<BastionResource>,
    #[serde(default)]
    pub node_pools: Vec<NodePoolResource>,
}

/// Export of cluster resource usage to BigQuery.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceUsageExportConfig {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enable_network_egress_metering: Field<bool>,
    #[serde(default)]
    pub dataset_id: String,
}

/// Application-layer secrets encryption of etcd with a KMS key.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DatabaseEncryption {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub key_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkloadIdentityConfig {
    /// Typically `<project>.svc.id.goog`.
    #[serde(default)]
    pub identity_namespace: String,
}

impl ClusterDocument {
    pub fn cluster_name(&self) -> &str {
        &self.metadata.name
    }
}

impl ClusterSpecification {
    /// Unset is reported as private, matching the declared default.
    pub fn is_private(&self) -> bool {
        self.private.get().unwrap_or(true)
    }

    pub fn is_regional(&self) -> bool {
        self.regional.get().unwrap_or(true)
    }

    /// Version a node pool runs: its own override, else the cluster version.
    pub fn node_pool_version<'a>(&'a self, pool: &'a NodePoolSpecification) -> Option<&'a str> {
        pool.version
            .as_str()
            .or_else(|| self.node_version.as_str())
            .or_else(|| self.version.as_str())
    }

    /// Where the cluster is placed: the region, or the first zone of a zonal cluster.
    pub fn location(&self) -> &str {
        if self.is_regional() {
            return &self.region;
        }
        self.zones
            .value()
            .and_then(|z| z.first())
            .map(String::as_str)
            .unwrap_or(&self.region)
    }
}
