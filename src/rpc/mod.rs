use crate::{
    constants,
    endpoints::{FieldResult, QueryError, QueryResult},
    types::{
        hashes::{AccountAddress, TransactionHash},
        network::PeerInfo,
        BlockHeight, BlockInfo, CurrentBlock, Receipt, Transaction,
    },
};
use num_bigint::BigInt;
use serde_json::{json, Value};

mod conversions;
pub mod fields;

pub use conversions::{balance, block_info, FromWire};

/// The connection to the node. A transport performs a single JSON-RPC call
/// and returns the untyped `result` of the response. Connection handling,
/// framing of the JSON-RPC envelope, retries and timeouts are all up to the
/// transport.
pub trait Transport {
    /// Error returned when the call could not be made, or the node answered
    /// with an error. It is handed to the caller of the query unchanged.
    type Error;

    fn call(&mut self, method: &str, params: Value) -> Result<Value, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn call(&mut self, method: &str, params: Value) -> Result<Value, Self::Error> {
        (**self).call(method, params)
    }
}

/// A block identifier used in queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockIdentifier {
    /// The head of the chain at the time of the query.
    Latest,
    /// The block at the given height.
    Height(BlockHeight),
}

impl From<BlockHeight> for BlockIdentifier {
    fn from(height: BlockHeight) -> Self { BlockIdentifier::Height(height) }
}

impl BlockIdentifier {
    fn height_param(&self) -> Value {
        match self {
            BlockIdentifier::Latest => constants::LATEST_HEIGHT.into(),
            BlockIdentifier::Height(h) => h.height.into(),
        }
    }
}

#[derive(Clone, Debug)]
/// Client that can perform queries.
/// All endpoints take a `&mut self` as an argument, so there is only ever a
/// single call in flight. Nothing is cached, every query asks the node again.
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self { Self { transport } }

    /// Access the underlying transport.
    pub fn transport(&mut self) -> &mut T { &mut self.transport }

    /// Give back the underlying transport.
    pub fn into_inner(self) -> T { self.transport }

    fn query<A>(
        &mut self,
        method: &'static str,
        params: Value,
        decode: impl FnOnce(&Value) -> FieldResult<A>,
    ) -> QueryResult<A, T::Error> {
        tracing::debug!(method, "Querying the node.");
        let result = self
            .transport
            .call(method, params)
            .map_err(QueryError::Transport)?;
        decode(&result).map_err(|e| {
            let e = e.in_method(method);
            tracing::warn!(method, path = %e.path, "Unexpected response from the node: {}.", e.kind);
            e.into()
        })
    }

    /// Get the block identified by `bi`. If `full_tx` is set the block's
    /// transactions are included, otherwise
    /// [`transactions`](BlockInfo::transactions) is empty.
    pub fn get_block(
        &mut self,
        bi: BlockIdentifier,
        full_tx: bool,
    ) -> QueryResult<BlockInfo, T::Error> {
        let params = json!({
            "height": bi.height_param(),
            "fullTx": full_tx,
        });
        let block = self.query(constants::GET_BLOCK_BY_HEIGHT, params, |v| {
            block_info(v, full_tx)
        })?;
        tracing::debug!(
            height = %block.height,
            txs = block.transactions.len(),
            "Received block {}.",
            block.hash
        );
        Ok(block)
    }

    /// Get the block at the given height.
    pub fn get_block_by_height(
        &mut self,
        height: impl Into<BlockHeight>,
        full_tx: bool,
    ) -> QueryResult<BlockInfo, T::Error> {
        self.get_block(BlockIdentifier::Height(height.into()), full_tx)
    }

    /// Get a summary of the current head of the chain. The head is queried
    /// with all its transactions so that the transaction count is exact.
    pub fn current_block(&mut self) -> QueryResult<CurrentBlock, T::Error> {
        self.get_block(BlockIdentifier::Latest, true).map(CurrentBlock::from)
    }

    /// Get the peers the node is currently connected to.
    pub fn get_peers_info(&mut self) -> QueryResult<Vec<PeerInfo>, T::Error> {
        let peers = self.query(
            constants::GET_PEERS_INFO,
            Value::Null,
            Vec::<PeerInfo>::from_wire,
        )?;
        tracing::debug!(peers = peers.len(), "Received peer list.");
        Ok(peers)
    }

    /// Get the balance of the given account. Fails with a
    /// [consistency](crate::endpoints::DecodeErrorKind::Consistency) error if
    /// the node reports the balance of a different account.
    pub fn get_balance(&mut self, address: &AccountAddress) -> QueryResult<BigInt, T::Error> {
        self.query(constants::GET_BALANCE, address.as_str().into(), |v| {
            balance(v, address)
        })
    }

    /// Get the receipt of the transaction with the given hash.
    pub fn get_receipt_by_tx_hash(
        &mut self,
        tx_hash: &TransactionHash,
    ) -> QueryResult<Receipt, T::Error> {
        self.query(
            constants::GET_RECEIPT_BY_TX_HASH,
            tx_hash.as_str().into(),
            Receipt::from_wire,
        )
    }

    /// Get the transactions in the node's pending pool.
    pub fn get_pending_transactions(&mut self) -> QueryResult<Vec<Transaction>, T::Error> {
        let txs = self.query(
            constants::GET_PENDING_TRANSACTIONS,
            Value::Null,
            Vec::<Transaction>::from_wire,
        )?;
        tracing::debug!(txs = txs.len(), "Received pending transactions.");
        Ok(txs)
    }
}
