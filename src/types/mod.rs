// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory model of a GKE cluster document.

pub mod addons;
pub mod cluster;
pub mod field;
pub mod meta;
pub mod network;
pub mod node_pool;

pub use addons::AddonsSpecification;
pub use cluster::{
    BastionResource, ClusterDocument, ClusterSpecification, DatabaseEncryption, NetworkResource,
    NodePoolResource, ResourceUsageExportConfig, WorkloadIdentityConfig,
};
pub use field::Field;
pub use meta::{ObjectMeta, Resource};
pub use network::{BastionSpecification, MasterAuthorizedNetwork, NetworkSpecification, StubDomain};
pub use node_pool::{NodePoolSpecification, TaintSpecification, WorkloadMetadataConfig};
