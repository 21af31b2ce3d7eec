use sr_state::TransactionContext;
use sr_types::Student;
use tracing::debug;

use crate::error::{ContractError, ContractResult};
use crate::metadata::ContractMetadata;
use crate::transaction::Transaction;

/// The student records contract.
///
/// Each record lives in world state under its own ID. The contract holds no
/// state of its own; everything goes through the [`TransactionContext`]
/// supplied per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentContract {
    name: String,
    version: String,
}

impl StudentContract {
    pub const DEFAULT_NAME: &'static str = "StudentContract";

    pub fn new() -> Self {
        Self::with_identity(Self::DEFAULT_NAME, env!("CARGO_PKG_VERSION"))
    }

    pub fn with_identity(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Create a record. Fails if a record with `id` already exists.
    pub fn add_student(
        &self,
        ctx: &mut dyn TransactionContext,
        id: &str,
        name: &str,
        degree: &str,
        gpa: f32,
    ) -> ContractResult<()> {
        if self.student_exists(&*ctx, id)? {
            return Err(ContractError::AlreadyExists(id.to_string()));
        }

        let student = Student::new(id, name, degree, gpa);
        let bytes = student.to_json_bytes()?;
        ctx.stub_mut().put_state(id, bytes)?;
        debug!(id, "student added");
        Ok(())
    }

    /// Replace the GPA of an existing record, keeping every other field.
    pub fn update_gpa(
        &self,
        ctx: &mut dyn TransactionContext,
        id: &str,
        gpa: f32,
    ) -> ContractResult<()> {
        let student = self.query_student(&*ctx, id)?;
        let bytes = student.with_gpa(gpa).to_json_bytes()?;
        ctx.stub_mut().put_state(id, bytes)?;
        debug!(id, gpa, "student GPA updated");
        Ok(())
    }

    pub fn query_student(&self, ctx: &dyn TransactionContext, id: &str) -> ContractResult<Student> {
        let bytes = ctx
            .stub()
            .get_state(id)
            .map_err(ContractError::ReadState)?
            .ok_or_else(|| ContractError::NotFound(id.to_string()))?;
        Ok(Student::from_json_bytes(&bytes)?)
    }

    pub fn student_exists(&self, ctx: &dyn TransactionContext, id: &str) -> ContractResult<bool> {
        let bytes = ctx.stub().get_state(id).map_err(ContractError::ReadState)?;
        Ok(bytes.is_some())
    }

    /// Every record in world state, ordered by ID.
    pub fn get_all_students(&self, ctx: &dyn TransactionContext) -> ContractResult<Vec<Student>> {
        ctx.stub()
            .get_state_by_range("", "")
            .map_err(ContractError::ReadState)?
            .into_iter()
            .map(|(_, bytes)| Student::from_json_bytes(&bytes).map_err(ContractError::from))
            .collect()
    }

    /// Run a parsed transaction and encode its result as the response payload.
    ///
    /// Records and lists encode as JSON, existence as `true`/`false`, and
    /// mutators return an empty payload.
    pub fn invoke(
        &self,
        ctx: &mut dyn TransactionContext,
        transaction: &Transaction,
    ) -> ContractResult<Vec<u8>> {
        match transaction {
            Transaction::AddStudent {
                id,
                name,
                degree,
                gpa,
            } => {
                self.add_student(ctx, id, name, degree, *gpa)?;
                Ok(Vec::new())
            }
            Transaction::UpdateGpa { id, gpa } => {
                self.update_gpa(ctx, id, *gpa)?;
                Ok(Vec::new())
            }
            Transaction::QueryStudent { id } => Ok(self.query_student(&*ctx, id)?.to_json_bytes()?),
            Transaction::StudentExists { id } => {
                Ok(self.student_exists(&*ctx, id)?.to_string().into_bytes())
            }
            Transaction::GetAllStudents => to_json(&self.get_all_students(&*ctx)?),
            Transaction::GetMetadata => to_json(&ContractMetadata::for_contract(self)),
        }
    }
}

impl Default for StudentContract {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ContractError::Serialization(e.to_string()))
}
