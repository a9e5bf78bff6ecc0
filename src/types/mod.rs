mod basic;
pub mod hashes;
pub mod network;

pub use basic::*;
use hashes::{AccountAddress, BlockHash, StateHash, TransactionHash};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// A snapshot of the head of the chain.
pub struct CurrentBlock {
    /// Hash of the head block.
    pub head_hash:  BlockHash,
    pub height:     BlockHeight,
    pub timestamp:  Timestamp,
    #[serde(with = "crate::internal::big_int_string")]
    pub difficulty: BigInt,
    /// Account that produced the head block.
    pub creator:    AccountAddress,
    /// The number of transactions in the head block.
    pub tx_count:   usize,
}

impl CurrentBlock {
    /// Time the head block was created, see [`Timestamp::to_datetime`].
    pub fn time(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.timestamp.to_datetime() }
}

/// A head snapshot taken from a block that was queried with full transaction
/// details, so that the transaction list is complete.
impl From<BlockInfo> for CurrentBlock {
    fn from(block: BlockInfo) -> Self {
        Self {
            head_hash:  block.hash,
            height:     block.height,
            timestamp:  block.timestamp,
            difficulty: block.difficulty,
            creator:    block.creator,
            tx_count:   block.transactions.len(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// A block as reported by the node.
pub struct BlockInfo {
    pub height:           BlockHeight,
    pub hash:             BlockHash,
    pub parent_hash:      BlockHash,
    /// Proof of work nonce found by the creator.
    pub nonce:            u64,
    /// Root hash of the state after applying the block.
    pub state_hash:       StateHash,
    /// Root hash of the transactions in the block.
    pub tx_hash:          StateHash,
    pub creator:          AccountAddress,
    pub timestamp:        Timestamp,
    #[serde(with = "crate::internal::big_int_string")]
    pub difficulty:       BigInt,
    /// Sum of the difficulties of all blocks up to and including this one.
    #[serde(with = "crate::internal::big_int_string")]
    pub total_difficulty: BigInt,
    /// Transactions of the block. Only populated if the block was queried
    /// with full transaction details, and empty otherwise.
    pub transactions:     Vec<Transaction>,
}

impl BlockInfo {
    /// Time the block was created, see [`Timestamp::to_datetime`].
    pub fn time(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.timestamp.to_datetime() }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// A transfer between two accounts, either included in a block or pending.
pub struct Transaction {
    pub hash:          TransactionHash,
    pub from:          AccountAddress,
    pub to:            AccountAddress,
    #[serde(with = "crate::internal::big_int_string")]
    pub amount:        BigInt,
    /// Sequence number of the transaction among the sender's transactions.
    pub account_nonce: Nonce,
    /// Hex encoded input data, empty for plain transfers.
    pub payload:       String,
    pub timestamp:     Timestamp,
    #[serde(with = "crate::internal::big_int_string")]
    pub fee:           BigInt,
}

impl Transaction {
    pub fn time(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.timestamp.to_datetime() }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Outcome of executing a transaction.
pub struct Receipt {
    /// Hex encoded return value of the execution.
    pub result:           String,
    /// Root hash of the state after executing the transaction.
    pub post_state:       StateHash,
    pub tx_hash:          TransactionHash,
    /// Address of the contract created by the transaction. The node reports
    /// an empty address if no contract was created, see
    /// [`Receipt::created_contract`].
    pub contract_address: AccountAddress,
    pub failed:           bool,
    #[serde(with = "crate::internal::big_int_string")]
    pub total_fee:        BigInt,
    #[serde(with = "crate::internal::big_int_string")]
    pub used_gas:         BigInt,
}

impl Receipt {
    /// The address of the created contract, if the transaction created one.
    pub fn created_contract(&self) -> Option<&AccountAddress> {
        if self.contract_address.is_empty() {
            None
        } else {
            Some(&self.contract_address)
        }
    }
}
