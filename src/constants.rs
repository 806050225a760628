// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Declared defaults for unset cluster fields
pub mod cluster {
    pub const PRIVATE: bool = true;
    pub const REGIONAL: bool = true;
    pub const VERSION: &str = "latest";
    pub const REMOVE_DEFAULT_NODE_POOL: bool = true;
    pub const ISSUE_CLIENT_CERTIFICATE: bool = false;
    /// Creates a dedicated service account for the cluster nodes
    pub const SERVICE_ACCOUNT_CREATE: &str = "create";
    pub const DEFAULT_MAX_PODS_PER_NODE: i32 = 110;
    pub const TPU: bool = false;
    pub const ALPHA: bool = false;
    pub const INTRA_NODE_VISIBILITY: bool = false;
    pub const ENABLE_NETWORK_EGRESS_METERING: bool = false;
    /// Bastion zone suffix appended to the region
    pub const BASTION_ZONE_SUFFIX: &str = "a";
}

/// Declared defaults for unset add-on toggles
pub mod addons {
    pub const ISTIO: bool = true;
    pub const CLOUDRUN: bool = false;
    pub const LOGGING: &str = "logging.googleapis.com/kubernetes";
    pub const MONITORING: &str = "monitoring.googleapis.com/kubernetes";
    pub const NETWORK_POLICY: bool = true;
    pub const HPA: bool = true;
    pub const VPA: bool = false;
    pub const CLUSTER_AUTOSCALING: bool = true;
    pub const BINARY_AUTH: bool = true;
    pub const HTTP_LOAD_BALANCING: bool = true;
    pub const POD_SECURITY_POLICY: bool = false;
}

/// Declared defaults for unset node pool fields
pub mod node_pool {
    pub const MIN_COUNT: i32 = 1;
    pub const MAX_COUNT: i32 = 1;
    pub const INITIAL_NODE_COUNT: i32 = 1;
    pub const MAX_PODS_PER_NODE: i32 = 110;
    pub const MACHINE_TYPE: &str = "n1-standard-1";
    pub const AUTO_REPAIR: bool = true;
    pub const AUTO_UPGRADE: bool = false;
    pub const PREEMPTIBLE: bool = false;
    pub const DISK_SIZE_GB: i64 = 100;
    pub const DISK_TYPE: &str = "pd-ssd";
    pub const LOCAL_SSD_COUNT: i32 = 0;
    pub const IMAGE_TYPE: &str = "COS";
    pub const GVISOR: bool = false;
}

/// Base OAuth scopes every GKE node needs
pub const DEFAULT_OAUTH_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/trace.append",
    "https://www.googleapis.com/auth/service.management.readonly",
    "https://www.googleapis.com/auth/monitoring",
    "https://www.googleapis.com/auth/devstorage.read_only",
    "https://www.googleapis.com/auth/servicecontrol",
];

/// Closed sets of accepted literal values
pub mod allowed {
    pub const DISK_TYPES: &[&str] = &["pd-ssd", "pd-standard"];
    pub const IMAGE_TYPES: &[&str] = &["COS", "UBUNTU", "COS_CONTAINERD"];
    pub const TAINT_EFFECTS: &[&str] = &["NO_SCHEDULE", "PREFER_NO_SCHEDULE", "NO_EXECUTE"];
    pub const DATABASE_ENCRYPTION_STATES: &[&str] = &["ENCRYPTED", "DECRYPTED"];
    pub const NODE_METADATA: &[&str] = &["UNSPECIFIED", "EXPOSED", "SECURE", "GKE_METADATA_SERVER"];
    pub const LOGGING_SERVICES: &[&str] =
        &["logging.googleapis.com/kubernetes", "logging.googleapis.com"];
    pub const MONITORING_SERVICES: &[&str] =
        &["monitoring.googleapis.com/kubernetes", "monitoring.googleapis.com"];
}

/// Numeric bounds enforced by the validator
pub mod limits {
    pub const MIN_PODS_PER_NODE: i32 = 8;
    pub const MAX_PODS_PER_NODE: i32 = 110;
    pub const MAX_NODE_COUNT: i32 = 2000;
    pub const MIN_DISK_SIZE_GB: i64 = 10;
    pub const MAX_DISK_SIZE_GB: i64 = 65536;
    pub const MAX_LOCAL_SSD_COUNT: i32 = 2;
    pub const MAX_TAINT_KEY_LENGTH: usize = 250;
    pub const MAX_TAINT_VALUE_LENGTH: usize = 63;
}

/// Terraform files produced by every template family, in write order
pub const OUTPUT_FILES: &[&str] = &["main.tf", "network.tf", "outputs.tf", "variables.tf"];
