// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Constraint checks over a defaulted cluster specification.
//!
//! Every check runs; violations are collected with their document path and
//! returned together. Optional blocks are only inspected when present.

use crate::constants::{allowed, cluster, limits};
use crate::error::{ValidationError, Violation};
use crate::types::{
    AddonsSpecification, BastionResource, ClusterDocument, ClusterSpecification, Field,
    NetworkResource, NodePoolSpecification, TaintSpecification,
};
use ipnet::Ipv4Net;
use regex::Regex;
use std::collections::HashSet;
use std::fmt::Display;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// GKE resource names: lowercase RFC 1035 labels.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]([-a-z0-9]{0,38}[a-z0-9])?$").unwrap());

static TIME_OF_DAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap()
});

pub fn is_ipv4_cidr(value: &str) -> bool {
    value.parse::<Ipv4Net>().is_ok()
}

pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_resource_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Validate `spec`, reporting every violation at once.
pub fn validate(spec: &ClusterSpecification) -> Result<(), ValidationError> {
    let mut v = Validator::default();
    v.cluster(spec);
    v.finish()
}

/// Validate the whole document: the cluster name plus everything [`validate`] checks.
pub fn validate_document(doc: &ClusterDocument) -> Result<(), ValidationError> {
    let mut v = Validator::default();
    v.name("metadata.name", &doc.metadata.name);
    v.cluster(&doc.spec);
    v.finish()
}

#[derive(Default)]
struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation {
            path: path.into(),
            message: message.into(),
        });
    }

    fn required(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(path, "is required");
        }
    }

    fn required_field(&mut self, path: &str, value: &Field<String>) {
        match value.as_str() {
            Some(s) => self.required(path, s),
            None => self.push(path, "is required"),
        }
    }

    fn one_of(&mut self, path: &str, value: &str, allowed: &[&str]) {
        if !allowed.contains(&value) {
            self.push(
                path,
                format!("must be one of [{}], got {:?}", allowed.join(", "), value),
            );
        }
    }

    fn in_range<T>(&mut self, path: &str, value: &Field<T>, min: T, max: T)
    where
        T: PartialOrd + Display + Copy,
    {
        if let Some(n) = value.get() {
            if n < min || n > max {
                self.push(path, format!("must be between {} and {}, got {}", min, max, n));
            }
        }
    }

    fn name(&mut self, path: &str, value: &str) {
        if value.is_empty() {
            self.push(path, "is required");
        } else if !is_resource_name(value) {
            self.push(
                path,
                format!(
                    "must be lowercase letters, digits and dashes, starting with a letter, got {:?}",
                    value
                ),
            );
        }
    }

    fn cidr(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(path, "is required");
        } else if !is_ipv4_cidr(value) {
            self.push(path, format!("must be an IPv4 CIDR range, got {:?}", value));
        }
    }

    fn cluster(&mut self, spec: &ClusterSpecification) {
        self.required("spec.projectId", &spec.project_id);
        self.required("spec.region", &spec.region);
        self.required_field("spec.version", &spec.version);

        if !spec.is_regional() && spec.zones.value().map_or(true, |z| z.is_empty()) {
            self.push("spec.zones", "a zonal cluster requires at least one zone");
        }

        self.in_range(
            "spec.defaultMaxPodsPerNode",
            &spec.default_max_pods_per_node,
            limits::MIN_PODS_PER_NODE,
            limits::MAX_PODS_PER_NODE,
        );

        if let Some(taints) = spec.taints.value() {
            self.taints("spec.taints", taints);
        }

        if let Some(start) = spec.maintenance_start_time.as_str() {
            if !TIME_OF_DAY_REGEX.is_match(start) {
                self.push(
                    "spec.maintenanceStartTime",
                    format!("must be a 24h HH:MM time, got {:?}", start),
                );
            }
        }

        if let Some(account) = spec.service_account.as_str() {
            if account != cluster::SERVICE_ACCOUNT_CREATE && !is_email(account) {
                self.push(
                    "spec.serviceAccount",
                    format!(
                        "must be {:?} or a service account email, got {:?}",
                        cluster::SERVICE_ACCOUNT_CREATE,
                        account
                    ),
                );
            }
        }

        if let Some(networks) = spec.master_authorized_networks_config.value() {
            for (i, network) in networks.iter().enumerate() {
                let path = format!("spec.masterAuthorizedNetworksConfig[{}]", i);
                self.cidr(&format!("{}.cidrBlock", path), &network.cidr_block);
                self.required(&format!("{}.displayName", path), &network.display_name);
            }
        }

        if let Some(export) = spec.resource_usage_export_config.value() {
            self.required("spec.resourceUsageExportConfig.datasetId", &export.dataset_id);
        }

        if let Some(domains) = spec.stub_domains.value() {
            for (i, domain) in domains.iter().enumerate() {
                let path = format!("spec.stubDomains[{}]", i);
                self.required(&format!("{}.metadata.name", path), &domain.metadata.name);
                if domain.dns_server_ip_addresses.is_empty() {
                    self.push(
                        format!("{}.dnsServerIPAddresses", path),
                        "at least one DNS server address is required",
                    );
                }
                for (j, address) in domain.dns_server_ip_addresses.iter().enumerate() {
                    if !is_ipv4(address) {
                        self.push(
                            format!("{}.dnsServerIPAddresses[{}]", path, j),
                            format!("must be an IPv4 address, got {:?}", address),
                        );
                    }
                }
            }
        }

        if let Some(encryption) = spec.database_encryption.value() {
            if encryption.state.is_empty() {
                self.push("spec.databaseEncryption.state", "is required");
            } else {
                self.one_of(
                    "spec.databaseEncryption.state",
                    &encryption.state,
                    allowed::DATABASE_ENCRYPTION_STATES,
                );
            }
            self.required("spec.databaseEncryption.keyName", &encryption.key_name);
        }

        if let Some(identity) = spec.workload_identity_config.value() {
            self.required(
                "spec.workloadIdentityConfig.identityNamespace",
                &identity.identity_namespace,
            );
        }

        if let Some(addons) = &spec.addons {
            self.addons(addons);
        }

        match &spec.network {
            Some(network) => self.network(network),
            None => self.push("spec.network", "is required"),
        }

        if let Some(bastion) = &spec.bastion {
            self.bastion(bastion);
        }

        if spec.node_pools.is_empty() {
            self.push("spec.nodePools", "at least one node pool is required");
        }
        let mut seen = HashSet::new();
        for (i, pool) in spec.node_pools.iter().enumerate() {
            let name_path = format!("spec.nodePools[{}].metadata.name", i);
            self.name(&name_path, pool.name());
            if !pool.name().is_empty() && !seen.insert(pool.name()) {
                self.push(name_path, format!("duplicate node pool name {:?}", pool.name()));
            }
            self.node_pool(&format!("spec.nodePools[{}].spec", i), &pool.spec);
        }
    }

    fn addons(&mut self, addons: &AddonsSpecification) {
        if let Some(logging) = addons.logging.as_str() {
            self.one_of("spec.addons.logging", logging, allowed::LOGGING_SERVICES);
        }
        if let Some(monitoring) = addons.monitoring.as_str() {
            self.one_of("spec.addons.monitoring", monitoring, allowed::MONITORING_SERVICES);
        }
    }

    fn network(&mut self, network: &NetworkResource) {
        let spec = &network.spec;
        self.name("spec.network.spec.subnetName", &spec.subnet_name);
        self.cidr("spec.network.spec.subnetRange", &spec.subnet_range);
        self.cidr("spec.network.spec.podSubnetRange", &spec.pod_subnet_range);
        self.cidr("spec.network.spec.serviceSubnetRange", &spec.service_subnet_range);
        if let Some(master) = spec.master_ipv4_cidr_block.as_str() {
            self.cidr("spec.network.spec.masterIPV4CIDRBlock", master);
        }
    }

    fn bastion(&mut self, bastion: &BastionResource) {
        self.required_field("spec.bastion.spec.zone", &bastion.spec.zone);
    }

    fn node_pool(&mut self, path: &str, pool: &NodePoolSpecification) {
        let at = |field: &str| format!("{}.{}", path, field);

        if let Some(min) = pool.min_count.get() {
            if min < 0 {
                self.push(at("minCount"), format!("must not be negative, got {}", min));
            }
        }
        self.in_range(&at("maxCount"), &pool.max_count, 0, limits::MAX_NODE_COUNT);
        if let Some(initial) = pool.initial_node_count.get() {
            if initial < 0 {
                self.push(
                    at("initialNodeCount"),
                    format!("must not be negative, got {}", initial),
                );
            }
        }
        if let Some(max) = pool.max_count.get() {
            if let Some(min) = pool.min_count.get().filter(|min| *min > max) {
                self.push(
                    at("minCount"),
                    format!("must be less than or equal to maxCount ({}), got {}", max, min),
                );
            }
            if let Some(initial) = pool.initial_node_count.get().filter(|n| *n > max) {
                self.push(
                    at("initialNodeCount"),
                    format!("must be less than or equal to maxCount ({}), got {}", max, initial),
                );
            }
        }

        self.in_range(
            &at("maxPodsPerNode"),
            &pool.max_pods_per_node,
            limits::MIN_PODS_PER_NODE,
            limits::MAX_PODS_PER_NODE,
        );
        self.in_range(
            &at("diskSizeGB"),
            &pool.disk_size_gb,
            limits::MIN_DISK_SIZE_GB,
            limits::MAX_DISK_SIZE_GB,
        );
        self.in_range(&at("localSSDCount"), &pool.local_ssd_count, 0, limits::MAX_LOCAL_SSD_COUNT);

        if let Some(machine_type) = pool.machine_type.as_str() {
            self.required(&at("machineType"), machine_type);
        }
        if let Some(disk_type) = pool.disk_type.as_str() {
            self.one_of(&at("diskType"), disk_type, allowed::DISK_TYPES);
        }
        if let Some(image_type) = pool.image_type.as_str() {
            self.one_of(&at("imageType"), image_type, allowed::IMAGE_TYPES);
        }
        if let Some(taints) = pool.taints.value() {
            self.taints(&at("taints"), taints);
        }
        if let Some(config) = pool.workload_metadata_config.value() {
            self.one_of(
                &at("workloadMetadataConfig.nodeMetadata"),
                &config.node_metadata,
                allowed::NODE_METADATA,
            );
        }

        if let Some(count) = pool.accelerator_count.get() {
            if count < 0 {
                self.push(at("acceleratorCount"), format!("must not be negative, got {}", count));
            } else if count > 0 && pool.accelerator_type.as_str().map_or(true, str::is_empty) {
                self.push(at("acceleratorType"), "is required when acceleratorCount is set");
            }
        }

        if let Some(account) = pool.service_account.as_str() {
            if !is_email(account) {
                self.push(
                    at("serviceAccount"),
                    format!("must be a service account email, got {:?}", account),
                );
            }
        }
    }

    fn taints(&mut self, path: &str, taints: &[TaintSpecification]) {
        for (i, taint) in taints.iter().enumerate() {
            let at = |field: &str| format!("{}[{}].{}", path, i, field);
            if taint.key.is_empty() || taint.key.len() > limits::MAX_TAINT_KEY_LENGTH {
                self.push(
                    at("key"),
                    format!("must be 1 to {} characters", limits::MAX_TAINT_KEY_LENGTH),
                );
            }
            if taint.value.len() > limits::MAX_TAINT_VALUE_LENGTH {
                self.push(
                    at("value"),
                    format!("must be at most {} characters", limits::MAX_TAINT_VALUE_LENGTH),
                );
            }
            self.one_of(&at("effect"), &taint.effect, allowed::TAINT_EFFECTS);
        }
    }
}
