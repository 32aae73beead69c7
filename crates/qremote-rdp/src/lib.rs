//! # qremote-rdp — RDP connection profiles
//!
//! Settings model and connection compiler for RDP targets:
//! - **Profile** — every setting a saved RDP connection carries, kept
//!   internally consistent while it is edited one field at a time
//! - **Compiler** — deterministic lowering of a profile into the flat
//!   numeric/flag fields an external RDP engine consumes
//! - **Persistence** — stable JSON snapshot, load/save round trips
//!
//! Architecture:
//! - `types` — display/gateway/performance enums, connection model values
//! - `error` — profile-specific error type
//! - `profile` — `RdpProfile` with change notification and invariants
//! - `snapshot` — serialized profile shape, bulk restore
//! - `storage` — snapshot files on disk
//! - `credentials` — decrypt-by-reference contract for stored secrets
//! - `rdp_config` — compiled connection descriptor (`.rdp` field set)
//! - `compiler` — profile → descriptor lowering

pub mod compiler;
pub mod credentials;
pub mod error;
pub mod profile;
pub mod rdp_config;
pub mod snapshot;
pub mod storage;
pub mod types;

// Re-exports
pub use compiler::compile;
pub use credentials::{Base64Cipher, NoCipher, SecretCipher};
pub use error::{ProfileError, ProfileResult};
pub use profile::{LocalSetting, RdpProfile};
pub use rdp_config::RdpConfig;
pub use snapshot::ProfileSnapshot;
pub use storage::ProfileStore;
pub use types::*;
