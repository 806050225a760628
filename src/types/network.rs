// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Field;

/// The VPC subnet created for the cluster and its secondary ranges.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkSpecification {
    #[serde(default)]
    pub subnet_name: String,
    /// Primary range for the nodes.
    #[serde(default)]
    pub subnet_range: String,
    /// Alias range for pods.
    #[serde(default)]
    pub pod_subnet_range: String,
    /// Alias range for services.
    #[serde(default)]
    pub service_subnet_range: String,
    /// Range for the hosted master network of a private cluster.
    #[serde(
        default,
        rename = "masterIPV4CIDRBlock",
        skip_serializing_if = "Field::is_unset"
    )]
    pub master_ipv4_cidr_block: Field<String>,
}

/// Bastion host created alongside a private cluster.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BastionSpecification {
    /// Defaults to the `a` zone of the cluster region.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub zone: Field<String>,
}

/// One CIDR allowed to reach the master endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MasterAuthorizedNetwork {
    #[serde(default)]
    pub cidr_block: String,
    #[serde(default)]
    pub display_name: String,
}

/// Forwards DNS queries for the domain in `metadata.name` to custom resolvers.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StubDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default)]
    pub metadata: super::ObjectMeta,
    #[serde(default, rename = "dnsServerIPAddresses")]
    pub dns_server_ip_addresses: Vec<String>,
}
