//! Recording stand-ins for the router and wallet collaborators

#![allow(dead_code)]

pub mod http;

use alloy::primitives::{address, b256, Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use enso_swap_tools::router::{
    ApprovalData, ApprovalParams, ApprovalTransaction, RouteData, RouteParams, RouteTransaction,
};
use enso_swap_tools::wallet::{ContractRead, ReadValue, TransactionCall};
use enso_swap_tools::{Error, EvmWalletClient, Result, RouterClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const SENDER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
pub const TOKEN_A: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub const TOKEN_B: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
pub const ROUTER: Address = address!("80eba3855878739f4710233a8a19d89bdd2ffb8e");
pub const TX_HASH: TxHash =
    b256!("1111111111111111111111111111111111111111111111111111111111111111");

pub fn route_data() -> RouteData {
    RouteData {
        tx: RouteTransaction {
            to: ROUTER,
            data: Bytes::from(vec![0xde, 0xad]),
            value: U256::ZERO,
        },
        amount_out: None,
        gas: None,
        price_impact: None,
    }
}

pub fn approval_data() -> ApprovalData {
    ApprovalData {
        spender: ROUTER,
        tx: ApprovalTransaction {
            to: TOKEN_A,
            data: Bytes::from(vec![0x09, 0x5e, 0xa7, 0xb3]),
        },
        gas: None,
    }
}

/// Router returning canned responses and recording each request
#[derive(Clone, Default)]
pub struct StubRouter {
    pub route_calls: Arc<Mutex<Vec<RouteParams>>>,
    pub approval_calls: Arc<Mutex<Vec<ApprovalParams>>>,
    pub fail_with: Option<String>,
    pub route_value: U256,
}

impl StubRouter {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_route_value(mut self, value: U256) -> Self {
        self.route_value = value;
        self
    }

    pub fn calls(&self) -> usize {
        self.route_calls.lock().unwrap().len() + self.approval_calls.lock().unwrap().len()
    }

    fn failure(&self) -> Option<Error> {
        self.fail_with.as_ref().map(|body| Error::Router {
            status: 500,
            body: body.clone(),
        })
    }
}

#[async_trait]
impl RouterClient for StubRouter {
    async fn get_route_data(&self, params: &RouteParams) -> Result<RouteData> {
        self.route_calls.lock().unwrap().push(params.clone());
        match self.failure() {
            Some(err) => Err(err),
            None => {
                let mut data = route_data();
                data.tx.value = self.route_value;
                Ok(data)
            }
        }
    }

    async fn get_approval_data(&self, params: &ApprovalParams) -> Result<ApprovalData> {
        self.approval_calls.lock().unwrap().push(params.clone());
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(approval_data()),
        }
    }
}

/// Wallet with a fixed chain and allowance that records submissions
pub struct StubWallet {
    pub chain_id: u64,
    pub allowance: ReadValue,
    pub fail_send: bool,
    pub sent: Mutex<Vec<TransactionCall>>,
    pub reads: Mutex<Vec<ContractRead>>,
    pub io_calls: AtomicUsize,
}

impl StubWallet {
    pub fn on_chain(chain_id: u64) -> Self {
        Self {
            chain_id,
            allowance: ReadValue::Number(0),
            fail_send: false,
            sent: Mutex::new(Vec::new()),
            reads: Mutex::new(Vec::new()),
            io_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_allowance(mut self, allowance: impl Into<ReadValue>) -> Self {
        self.allowance = allowance.into();
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_send = true;
        self
    }

    pub fn sent(&self) -> Vec<TransactionCall> {
        self.sent.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<ContractRead> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl EvmWalletClient for StubWallet {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn address(&self) -> Address {
        SENDER
    }

    async fn send_transaction(&self, tx: TransactionCall) -> Result<TxHash> {
        self.io_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_send {
            return Err(Error::Wallet("insufficient funds for gas".to_string()));
        }
        self.sent.lock().unwrap().push(tx);
        Ok(TX_HASH)
    }

    async fn read(&self, request: ContractRead) -> Result<ReadValue> {
        self.io_calls.fetch_add(1, Ordering::SeqCst);
        self.reads.lock().unwrap().push(request);
        Ok(self.allowance.clone())
    }
}
