//! World state boundary for the student records chaincode.
//!
//! The host ledger owns world state; chaincode only ever sees it through a
//! per-transaction [`ChaincodeStub`]. This crate defines that boundary and
//! the small amount of host machinery needed to run the contract outside a
//! peer.
//!
//! # Transaction Flow
//!
//! 1. A [`TransactionStub`] is opened over a [`WorldState`].
//! 2. The contract reads committed state and buffers writes in the stub.
//! 3. On success the host takes the [`ReadWriteSet`] and applies its
//!    [`WriteSet`] atomically. On failure the set is dropped.
//!
//! # Storage Backends
//!
//! All backends implement the [`WorldState`] trait:
//!
//! - [`InMemoryWorldState`] -- `BTreeMap`-based state for tests and embedding
//! - [`FileWorldState`] -- JSON document on disk, rewritten atomically per commit
//!
//! # Rules
//!
//! 1. Reads observe committed state only, never the transaction's own writes.
//! 2. Keys are non-empty and never start with the `0x00` composite-key byte.
//! 3. A write set is applied entirely or not at all.

pub mod error;
pub mod file;
pub mod key;
pub mod memory;
pub mod rwset;
pub mod stub;
pub mod world;

pub use error::{StateError, StateResult};
pub use file::FileWorldState;
pub use key::{validate_key, COMPOSITE_KEY_NAMESPACE};
pub use memory::InMemoryWorldState;
pub use rwset::{ReadWriteSet, TransactionStub, WriteSet};
pub use stub::{ChaincodeStub, TransactionContext};
pub use world::WorldState;
