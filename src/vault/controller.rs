//! Session ownership and the contract-call submission workflow.
//!
//! # Responsibilities
//! - Own the wallet session, transaction log and last error message
//! - Check preconditions before anything reaches the wallet
//! - Dispatch `stx_callContract` through the injected provider
//! - Record exactly one terminal log entry per dispatched call
//!
//! # Ordering
//! Records are prepended when a call completes, not when it starts. The state
//! lock is never held across the wallet await, so a fast failure can land
//! ahead of a slower call that was started earlier.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::blockchain::clarity::ClarityValue;
use crate::blockchain::types::{ContractId, Network};
use crate::blockchain::wallet::{
    CallContractParams, CallContractResponse, WalletProvider, CALL_CONTRACT_METHOD,
};
use crate::config::schema::{AppConfig, ContractsConfig};
use crate::observability::metrics;
use crate::vault::error::{VaultError, VaultResult};
use crate::vault::types::{now_millis, Session, TransactionRecord, TxStatus};

#[derive(Debug, Default)]
struct ControllerState {
    session: Option<Session>,
    /// Most recently completed call first.
    transactions: VecDeque<TransactionRecord>,
    last_error: Option<String>,
}

/// Counts a call as pending for as long as it is alive.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        let now = counter.fetch_add(1, Ordering::SeqCst) + 1;
        metrics::set_pending_calls(now);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let now = self.0.fetch_sub(1, Ordering::SeqCst) - 1;
        metrics::set_pending_calls(now);
    }
}

/// Rejection text used when the wallet gives no reason.
pub const CONTRACT_CALL_FAILED: &str = "Contract call failed";

/// Single owner of wallet session state. Share it as `Arc<VaultController>`.
pub struct VaultController {
    wallet: Arc<dyn WalletProvider>,
    contracts: ContractsConfig,
    network: Network,
    state: RwLock<ControllerState>,
    in_flight: AtomicUsize,
}

impl VaultController {
    pub fn new(wallet: Arc<dyn WalletProvider>, contracts: ContractsConfig, network: Network) -> Self {
        Self {
            wallet,
            contracts,
            network,
            state: RwLock::new(ControllerState::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &AppConfig, wallet: Arc<dyn WalletProvider>) -> Self {
        Self::new(wallet, config.contracts.clone(), config.network)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn contracts(&self) -> &ContractsConfig {
        &self.contracts
    }

    // Session

    /// Adopt a session the wallet already holds (e.g. from a previous run).
    ///
    /// Returns the restored address, or `None` when the wallet is not
    /// connected or exposes no address.
    pub fn restore_session(&self) -> Option<String> {
        if !self.wallet.is_connected() {
            return None;
        }
        let address = self.wallet.address().filter(|a| !a.is_empty())?;

        self.write().session = Some(Session {
            address: address.clone(),
            connected_at: now_millis(),
        });
        metrics::record_session_event("restore");
        tracing::info!(address = %address, "Restored wallet session");
        Some(address)
    }

    /// Ask the wallet to connect and establish a session.
    pub async fn connect_wallet(&self) -> VaultResult<String> {
        self.write().last_error = None;

        if let Err(e) = self.wallet.connect().await {
            tracing::warn!(error = %e, "Wallet connection failed");
            return Err(self.fail_connect(e.to_string()));
        }

        if !self.wallet.is_connected() {
            return Err(self.fail_connect("Connection failed or cancelled".to_string()));
        }

        let Some(address) = self.wallet.address().filter(|a| !a.is_empty()) else {
            return Err(self.fail_connect("No STX address found after connection".to_string()));
        };

        self.write().session = Some(Session {
            address: address.clone(),
            connected_at: now_millis(),
        });
        metrics::record_session_event("connect");
        tracing::info!(address = %address, "Wallet connected");
        Ok(address)
    }

    /// Tear down the wallet session. Session, log and last error are always
    /// cleared together, even if the wallet reports a teardown error.
    pub async fn disconnect_wallet(&self) {
        if let Err(e) = self.wallet.disconnect().await {
            tracing::warn!(error = %e, "Wallet disconnect error");
        }

        {
            let mut state = self.write();
            state.session = None;
            state.transactions.clear();
            state.last_error = None;
        }
        metrics::record_session_event("disconnect");
        tracing::info!("Wallet disconnected");
    }

    /// Connected address, or an empty string.
    pub fn address(&self) -> String {
        self.read()
            .session
            .as_ref()
            .map(|s| s.address.clone())
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<Session> {
        self.read().session.clone()
    }

    /// True only while a session exists and the wallet still agrees.
    pub fn is_connected(&self) -> bool {
        self.read().session.is_some() && self.wallet.is_connected()
    }

    // Read access for display

    /// Snapshot of the transaction log, most recent completion first.
    pub fn transactions(&self) -> Vec<TransactionRecord> {
        self.read().transactions.iter().cloned().collect()
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    /// Number of calls currently waiting on the wallet.
    pub fn pending_calls(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    // Submission

    /// Submit a contract call through the wallet.
    ///
    /// Precondition failures (`NotConnected`, `MalformedContractId`) return
    /// before the wallet is involved and leave the log untouched. Every call
    /// that reaches the wallet adds exactly one `success` or `failed` record.
    pub async fn submit(
        &self,
        contract_id: &str,
        function_name: &str,
        args: Vec<ClarityValue>,
    ) -> VaultResult<String> {
        if !self.is_connected() {
            return Err(self.fail(VaultError::NotConnected));
        }

        let Some(contract) = ContractId::parse(contract_id) else {
            return Err(self.fail(VaultError::MalformedContractId(contract_id.to_string())));
        };

        self.write().last_error = None;

        let record = TransactionRecord::pending(function_name, now_millis());
        let params = CallContractParams {
            contract: contract.to_string(),
            function_name: function_name.to_string(),
            function_args: args,
            network: self.network,
        };

        tracing::info!(
            contract = %contract,
            function = function_name,
            arg_count = params.function_args.len(),
            arg_types = ?params
                .function_args
                .iter()
                .map(ClarityValue::type_name)
                .collect::<Vec<_>>(),
            network = %self.network,
            "Calling contract"
        );

        let started = Instant::now();
        let outcome = {
            let _pending = InFlight::enter(&self.in_flight);
            self.wallet.request(CALL_CONTRACT_METHOD, &params).await
        };
        metrics::record_wallet_latency(function_name, started.elapsed().as_secs_f64());

        let result = match outcome {
            Ok(CallContractResponse { txid: Some(txid) }) if !txid.is_empty() => Ok(txid),
            Ok(_) => {
                // The wallet may have broadcast something we now have no id for.
                tracing::warn!(
                    contract = %contract,
                    function = function_name,
                    "Wallet accepted the call but returned no transaction id"
                );
                Err(VaultError::EmptyTxId)
            }
            Err(e) => {
                let reason = e.to_string();
                if reason.trim().is_empty() {
                    Err(VaultError::WalletRejected(CONTRACT_CALL_FAILED.to_string()))
                } else {
                    Err(VaultError::WalletRejected(reason))
                }
            }
        };

        match result {
            Ok(txid) => {
                self.write()
                    .transactions
                    .push_front(record.succeed(txid.clone()));
                metrics::record_submission(function_name, TxStatus::Success.as_str());
                tracing::info!(function = function_name, tx_id = %txid, "Contract call succeeded");
                Ok(txid)
            }
            Err(err) => {
                let message = err.to_string();
                {
                    let mut state = self.write();
                    state.transactions.push_front(record.fail(message.clone()));
                    state.last_error = Some(message.clone());
                }
                metrics::record_submission(function_name, TxStatus::Failed.as_str());
                tracing::error!(function = function_name, error = %message, "Contract call failed");
                Err(err)
            }
        }
    }

    /// Record `err` as the last error and hand it back.
    pub(crate) fn fail(&self, err: VaultError) -> VaultError {
        tracing::debug!(kind = err.kind(), error = %err, "Action rejected");
        self.write().last_error = Some(err.to_string());
        err
    }

    fn fail_connect(&self, message: String) -> VaultError {
        {
            let mut state = self.write();
            state.session = None;
            state.last_error = Some(message.clone());
        }
        VaultError::ConnectionFailed(message)
    }

    fn read(&self) -> RwLockReadGuard<'_, ControllerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ControllerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
