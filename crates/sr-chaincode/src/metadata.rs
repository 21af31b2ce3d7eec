use serde::{Deserialize, Serialize};

use crate::contract::StudentContract;
use crate::transaction::{
    TransactionKind, ADD_STUDENT, GET_ALL_STUDENTS, QUERY_STUDENT, STUDENT_EXISTS, UPDATE_GPA,
};

/// Self-description returned by the metadata system function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub name: String,
    pub version: String,
    pub transactions: Vec<TransactionMetadata>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    pub name: String,
    pub tag: TransactionKind,
    pub parameters: Vec<ParameterMetadata>,
    /// Schema type of the payload, `None` for an empty payload.
    pub returns: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    pub name: String,
    pub schema: String,
}

impl ParameterMetadata {
    fn new(name: &str, schema: &str) -> Self {
        Self {
            name: name.to_string(),
            schema: schema.to_string(),
        }
    }
}

impl TransactionMetadata {
    fn new(
        name: &str,
        tag: TransactionKind,
        parameters: &[(&str, &str)],
        returns: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            tag,
            parameters: parameters
                .iter()
                .map(|(name, schema)| ParameterMetadata::new(name, schema))
                .collect(),
            returns: returns.map(str::to_string),
        }
    }
}

impl ContractMetadata {
    pub fn for_contract(contract: &StudentContract) -> Self {
        use TransactionKind::{Evaluate, Submit};

        Self {
            name: contract.name().to_string(),
            version: contract.version().to_string(),
            transactions: vec![
                TransactionMetadata::new(
                    ADD_STUDENT,
                    Submit,
                    &[("id", "string"), ("name", "string"), ("degree", "string"), ("gpa", "number")],
                    None,
                ),
                TransactionMetadata::new(UPDATE_GPA, Submit, &[("id", "string"), ("gpa", "number")], None),
                TransactionMetadata::new(QUERY_STUDENT, Evaluate, &[("id", "string")], Some("Student")),
                TransactionMetadata::new(STUDENT_EXISTS, Evaluate, &[("id", "string")], Some("boolean")),
                TransactionMetadata::new(GET_ALL_STUDENTS, Evaluate, &[], Some("array<Student>")),
            ],
        }
    }
}
