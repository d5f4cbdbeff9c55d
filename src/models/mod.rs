//! Domain models for the CIDR registry.
//!
//! This module contains the core data structures:
//! - [`Range`] - a named CIDR block with canonical bounds and address count
//! - [`NetworkEntry`] and [`RegistryFile`] - caller-supplied input
//! - [`NetworkDetail`] and [`Registry`] - validated output

mod network;
mod range;

// Re-export public types
pub use network::{NetworkDetail, NetworkEntry, Registry, RegistryFile};
pub use range::{
    address_count, broadcast_addr, network_addr, prefix_mask, Range, IPV4_BITS, IPV6_BITS,
};
