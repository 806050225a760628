// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Field;

/// Cluster add-on toggles. Every field has a declared default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddonsSpecification {
    /// Managed Istio.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub istio: Field<bool>,
    /// Managed Cloud Run.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cloudrun: Field<bool>,
    /// Logging service endpoint.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub logging: Field<String>,
    /// Monitoring service endpoint.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub monitoring: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub network_policy: Field<bool>,
    /// Horizontal pod autoscaling.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hpa: Field<bool>,
    /// Vertical pod autoscaling.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub vpa: Field<bool>,
    /// Node auto-provisioning across node pools.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub cluster_autoscaling: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub binary_auth: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub http_load_balancing: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub pod_security_policy: Field<bool>,
}
