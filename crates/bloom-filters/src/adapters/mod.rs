//! Adapters Layer - Connections to the outside world
//!
//! - `RemoteFilter`: `MembershipFilter` over an external bloom service
//! - `InMemoryBackend`: in-process `BloomBackend`
//! - `Instrumented`: metrics decorator for any filter

pub mod instrumented;
pub mod memory_backend;
pub mod remote;

pub use instrumented::Instrumented;
pub use memory_backend::InMemoryBackend;
pub use remote::RemoteFilter;
