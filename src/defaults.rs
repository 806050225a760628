// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fills unset fields with their declared defaults.
//!
//! Only `Field::Unset` is ever touched, so anything the user wrote, including
//! `false`, `0` and empty lists, survives unchanged. Each node pool is
//! defaulted independently.

use crate::constants::{self, addons, cluster, node_pool};
use crate::types::{
    AddonsSpecification, BastionSpecification, ClusterSpecification, NodePoolSpecification,
    ResourceUsageExportConfig,
};
use tracing::debug;

fn default_oauth_scopes() -> Vec<String> {
    constants::DEFAULT_OAUTH_SCOPES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Apply every declared default to `spec`. Returns the number of fields filled.
pub fn apply_defaults(spec: &mut ClusterSpecification) -> usize {
    let mut filled = apply_cluster_defaults(spec);

    filled += apply_addon_defaults(spec.addons.get_or_insert_with(AddonsSpecification::default));

    if let Some(bastion) = spec.bastion.as_mut() {
        filled += apply_bastion_defaults(&mut bastion.spec, &spec.region);
    }

    if let Some(export) = spec.resource_usage_export_config.value_mut() {
        filled += apply_resource_usage_export_defaults(export);
    }

    for pool in spec.node_pools.iter_mut() {
        let count = apply_node_pool_defaults(&mut pool.spec);
        debug!("Defaulted {} fields of node pool {}", count, pool.name());
        filled += count;
    }

    debug!("Defaulted {} fields of the cluster specification", filled);
    filled
}

fn apply_cluster_defaults(spec: &mut ClusterSpecification) -> usize {
    [
        spec.private.apply_default(cluster::PRIVATE),
        spec.regional.apply_default(cluster::REGIONAL),
        spec.version.apply_default(cluster::VERSION.to_string()),
        spec.remove_default_node_pool
            .apply_default(cluster::REMOVE_DEFAULT_NODE_POOL),
        spec.oauth_scopes.apply_default_with(default_oauth_scopes),
        spec.issue_client_certificate
            .apply_default(cluster::ISSUE_CLIENT_CERTIFICATE),
        spec.service_account
            .apply_default(cluster::SERVICE_ACCOUNT_CREATE.to_string()),
        spec.default_max_pods_per_node
            .apply_default(cluster::DEFAULT_MAX_PODS_PER_NODE),
        spec.tpu.apply_default(cluster::TPU),
        spec.alpha.apply_default(cluster::ALPHA),
        spec.intra_node_visibility
            .apply_default(cluster::INTRA_NODE_VISIBILITY),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn apply_addon_defaults(spec: &mut AddonsSpecification) -> usize {
    [
        spec.istio.apply_default(addons::ISTIO),
        spec.cloudrun.apply_default(addons::CLOUDRUN),
        spec.logging.apply_default(addons::LOGGING.to_string()),
        spec.monitoring.apply_default(addons::MONITORING.to_string()),
        spec.network_policy.apply_default(addons::NETWORK_POLICY),
        spec.hpa.apply_default(addons::HPA),
        spec.vpa.apply_default(addons::VPA),
        spec.cluster_autoscaling
            .apply_default(addons::CLUSTER_AUTOSCALING),
        spec.binary_auth.apply_default(addons::BINARY_AUTH),
        spec.http_load_balancing
            .apply_default(addons::HTTP_LOAD_BALANCING),
        spec.pod_security_policy
            .apply_default(addons::POD_SECURITY_POLICY),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}

fn apply_bastion_defaults(spec: &mut BastionSpecification, region: &str) -> usize {
    // An empty region is left for the validator to report.
    if region.is_empty() {
        return 0;
    }
    usize::from(
        spec.zone
            .apply_default_with(|| format!("{}-{}", region, cluster::BASTION_ZONE_SUFFIX)),
    )
}

fn apply_resource_usage_export_defaults(spec: &mut ResourceUsageExportConfig) -> usize {
    usize::from(
        spec.enable_network_egress_metering
            .apply_default(cluster::ENABLE_NETWORK_EGRESS_METERING),
    )
}

fn apply_node_pool_defaults(spec: &mut NodePoolSpecification) -> usize {
    [
        spec.min_count.apply_default(node_pool::MIN_COUNT),
        spec.max_count.apply_default(node_pool::MAX_COUNT),
        spec.initial_node_count
            .apply_default(node_pool::INITIAL_NODE_COUNT),
        spec.max_pods_per_node
            .apply_default(node_pool::MAX_PODS_PER_NODE),
        spec.machine_type
            .apply_default(node_pool::MACHINE_TYPE.to_string()),
        spec.auto_repair.apply_default(node_pool::AUTO_REPAIR),
        spec.auto_upgrade.apply_default(node_pool::AUTO_UPGRADE),
        spec.preemptible.apply_default(node_pool::PREEMPTIBLE),
        spec.disk_size_gb.apply_default(node_pool::DISK_SIZE_GB),
        spec.disk_type.apply_default(node_pool::DISK_TYPE.to_string()),
        spec.local_ssd_count.apply_default(node_pool::LOCAL_SSD_COUNT),
        spec.image_type.apply_default(node_pool::IMAGE_TYPE.to_string()),
        spec.oauth_scopes.apply_default_with(default_oauth_scopes),
        spec.gvisor.apply_default(node_pool::GVISOR),
    ]
    .into_iter()
    .filter(|applied| *applied)
    .count()
}
