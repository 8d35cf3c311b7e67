//! Ports Layer - Trait definitions
//!
//! - Inbound: `MembershipFilter`, the contract every filter variant implements
//! - Outbound: `BloomBackend`, what a remote-backed filter needs from an
//!   external bloom service

pub mod inbound;
pub mod outbound;

pub use inbound::MembershipFilter;
pub use outbound::BloomBackend;
