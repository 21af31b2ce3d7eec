//! Student records chaincode.
//!
//! Stores one [`Student`] per key in ledger world state and exposes the
//! contract's transactions to a host runtime:
//!
//! - [`StudentContract`] -- the contract functions, written against a
//!   [`TransactionContext`]
//! - [`Transaction`] -- a parsed string-argument invocation, routed by name
//! - [`ContractMetadata`] -- the contract's self-description
//! - [`Chaincode`] -- an in-process host that simulates each invocation and
//!   commits its write set on success

pub mod config;
pub mod contract;
pub mod error;
pub mod host;
pub mod metadata;
pub mod response;
pub mod transaction;

pub use config::ChaincodeConfig;
pub use contract::StudentContract;
pub use error::{ContractError, ContractResult};
pub use host::Chaincode;
pub use metadata::{ContractMetadata, ParameterMetadata, TransactionMetadata};
pub use response::Response;
pub use transaction::{Transaction, TransactionKind};

pub use sr_state::{TransactionContext, WorldState};
pub use sr_types::Student;
