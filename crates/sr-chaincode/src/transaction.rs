//! Routing of string-argument invocations to contract functions.
//!
//! Hosts deliver an invocation as a function name plus positional string
//! arguments. [`Transaction::parse`] checks the arity, converts each argument
//! to its parameter type, and yields a typed transaction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

pub const ADD_STUDENT: &str = "AddStudent";
pub const UPDATE_GPA: &str = "UpdateGPA";
pub const QUERY_STUDENT: &str = "QueryStudent";
pub const STUDENT_EXISTS: &str = "StudentExists";
pub const GET_ALL_STUDENTS: &str = "GetAllStudents";
/// System function every contract answers with its own metadata.
pub const GET_METADATA: &str = "org.hyperledger.fabric:GetMetadata";

/// Whether a transaction's writes are meant to be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Simulated, then committed to world state.
    Submit,
    /// Simulated only. Writes, if any, are discarded.
    Evaluate,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => f.write_str("submit"),
            Self::Evaluate => f.write_str("evaluate"),
        }
    }
}

/// A parsed invocation of one contract function.
#[derive(Clone, Debug, PartialEq)]
pub enum Transaction {
    AddStudent {
        id: String,
        name: String,
        degree: String,
        gpa: f32,
    },
    UpdateGpa {
        id: String,
        gpa: f32,
    },
    QueryStudent {
        id: String,
    },
    StudentExists {
        id: String,
    },
    GetAllStudents,
    GetMetadata,
}

impl Transaction {
    /// Parse a named invocation with positional string arguments.
    pub fn parse(function: &str, args: &[String]) -> ContractResult<Self> {
        match function {
            ADD_STUDENT => {
                expect_args(function, args, 4)?;
                Ok(Self::AddStudent {
                    id: args[0].clone(),
                    name: args[1].clone(),
                    degree: args[2].clone(),
                    gpa: parse_gpa(&args[3])?,
                })
            }
            UPDATE_GPA => {
                expect_args(function, args, 2)?;
                Ok(Self::UpdateGpa {
                    id: args[0].clone(),
                    gpa: parse_gpa(&args[1])?,
                })
            }
            QUERY_STUDENT => {
                expect_args(function, args, 1)?;
                Ok(Self::QueryStudent {
                    id: args[0].clone(),
                })
            }
            STUDENT_EXISTS => {
                expect_args(function, args, 1)?;
                Ok(Self::StudentExists {
                    id: args[0].clone(),
                })
            }
            GET_ALL_STUDENTS => {
                expect_args(function, args, 0)?;
                Ok(Self::GetAllStudents)
            }
            GET_METADATA => {
                expect_args(function, args, 0)?;
                Ok(Self::GetMetadata)
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }

    /// The function name this transaction is invoked by.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddStudent { .. } => ADD_STUDENT,
            Self::UpdateGpa { .. } => UPDATE_GPA,
            Self::QueryStudent { .. } => QUERY_STUDENT,
            Self::StudentExists { .. } => STUDENT_EXISTS,
            Self::GetAllStudents => GET_ALL_STUDENTS,
            Self::GetMetadata => GET_METADATA,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::AddStudent { .. } | Self::UpdateGpa { .. } => TransactionKind::Submit,
            _ => TransactionKind::Evaluate,
        }
    }
}

fn expect_args(function: &str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn parse_gpa(value: &str) -> ContractResult<f32> {
    value
        .parse::<f32>()
        .map_err(|e| ContractError::InvalidArgument {
            parameter: "gpa",
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_add_student() {
        let tx = Transaction::parse("AddStudent", &args(&["s-1", "Alice", "BSc", "3.5"])).unwrap();
        assert_eq!(
            tx,
            Transaction::AddStudent {
                id: "s-1".into(),
                name: "Alice".into(),
                degree: "BSc".into(),
                gpa: 3.5,
            }
        );
        assert_eq!(tx.kind(), TransactionKind::Submit);
        assert_eq!(tx.name(), "AddStudent");
    }

    #[test]
    fn parse_update_gpa() {
        let tx = Transaction::parse("UpdateGPA", &args(&["s-1", "2"])).unwrap();
        assert_eq!(
            tx,
            Transaction::UpdateGpa {
                id: "s-1".into(),
                gpa: 2.0
            }
        );
    }

    #[test]
    fn queries_are_evaluate_transactions() {
        for (function, values) in [
            ("QueryStudent", args(&["s-1"])),
            ("StudentExists", args(&["s-1"])),
            ("GetAllStudents", args(&[])),
            (GET_METADATA, args(&[])),
        ] {
            let tx = Transaction::parse(function, &values).unwrap();
            assert_eq!(tx.kind(), TransactionKind::Evaluate, "{function}");
            assert_eq!(tx.name(), function);
        }
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = Transaction::parse("AddStudent", &args(&["s-1", "Alice"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "incorrect number of arguments for AddStudent: expected 4, got 2"
        );
        assert!(Transaction::parse("GetAllStudents", &args(&["extra"])).is_err());
    }

    #[test]
    fn unparsable_gpa_is_rejected() {
        let err = Transaction::parse("UpdateGPA", &args(&["s-1", "three"])).unwrap_err();
        assert!(matches!(
            err,
            ContractError::InvalidArgument { parameter: "gpa", ref value, .. } if value == "three"
        ));
    }

    #[test]
    fn unknown_function_is_rejected() {
        let err = Transaction::parse("DeleteStudent", &[]).unwrap_err();
        assert_eq!(err.to_string(), "function DeleteStudent not found in contract");
    }

    #[test]
    fn function_names_are_case_sensitive() {
        assert!(Transaction::parse("addstudent", &args(&["a", "b", "c", "1"])).is_err());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TransactionKind::Submit).unwrap(), r#""submit""#);
        assert_eq!(TransactionKind::Evaluate.to_string(), "evaluate");
    }
}
