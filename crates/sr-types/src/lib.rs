//! Record types for the student records chaincode.
//!
//! A [`Student`] is stored in world state as a flat JSON document under its
//! own ID. Every other crate in the workspace depends on `sr-types`.

pub mod error;
pub mod student;

pub use error::{TypeError, TypeResult};
pub use student::Student;
