use std::sync::Mutex;

use sr_state::{ReadWriteSet, TransactionStub, WorldState};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::contract::StudentContract;
use crate::error::{ContractError, ContractResult};
use crate::metadata::ContractMetadata;
use crate::response::Response;
use crate::transaction::{Transaction, TransactionKind};

/// In-process host for the student contract.
///
/// Every invocation is simulated in a fresh [`TransactionStub`] under a new
/// UUID v7 transaction ID. A submitted transaction's writes are applied to
/// world state only if simulation succeeded and nothing it read has changed
/// since. Evaluated transactions never commit.
pub struct Chaincode<W: WorldState> {
    contract: StudentContract,
    world: W,
    /// Serializes read validation and apply across concurrent submits.
    commit_lock: Mutex<()>,
}

impl<W: WorldState> Chaincode<W> {
    pub fn new(world: W) -> Self {
        Self::with_contract(StudentContract::new(), world)
    }

    pub fn with_contract(contract: StudentContract, world: W) -> Self {
        Self {
            contract,
            world,
            commit_lock: Mutex::new(()),
        }
    }

    pub fn contract(&self) -> &StudentContract {
        &self.contract
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn metadata(&self) -> ContractMetadata {
        ContractMetadata::for_contract(&self.contract)
    }

    /// Simulate and commit.
    pub fn submit(&self, function: &str, args: &[String]) -> Response {
        self.run(TransactionKind::Submit, function, args)
    }

    /// Simulate only.
    pub fn evaluate(&self, function: &str, args: &[String]) -> Response {
        self.run(TransactionKind::Evaluate, function, args)
    }

    fn run(&self, mode: TransactionKind, function: &str, args: &[String]) -> Response {
        let tx_id = Uuid::now_v7().to_string();
        match self.execute(&tx_id, mode, function, args) {
            Ok(payload) => Response::success(tx_id, payload),
            Err(e) => {
                warn!(%tx_id, %mode, function, error = %e, "transaction failed");
                Response::error(tx_id, e.to_string())
            }
        }
    }

    fn execute(
        &self,
        tx_id: &str,
        mode: TransactionKind,
        function: &str,
        args: &[String],
    ) -> ContractResult<String> {
        let transaction = Transaction::parse(function, args)?;
        debug!(tx_id, %mode, transaction = transaction.name(), "simulating transaction");
        let mut stub = TransactionStub::new(&self.world, tx_id);
        let payload = self.contract.invoke(&mut stub, &transaction)?;
        let rwset = stub.into_rwset();

        if mode == TransactionKind::Submit && !rwset.writes.is_empty() {
            self.commit(tx_id, transaction.name(), &rwset)?;
        }
        String::from_utf8(payload).map_err(|e| ContractError::Serialization(e.to_string()))
    }

    fn commit(&self, tx_id: &str, function: &str, rwset: &ReadWriteSet) -> ContractResult<()> {
        let _guard = self.commit_lock.lock().expect("commit lock poisoned");
        if let Some(key) = rwset.stale_reads(&self.world)?.into_iter().next() {
            return Err(ContractError::ReadConflict(key));
        }
        self.world.apply(&rwset.writes)?;
        info!(tx_id, function, writes = rwset.writes.len(), "transaction committed");
        Ok(())
    }
}

impl<W: WorldState + std::fmt::Debug> std::fmt::Debug for Chaincode<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chaincode")
            .field("contract", &self.contract)
            .field("world", &self.world)
            .finish()
    }
}
