//! Mappers from the node's untyped responses to their Rust equivalents. Each
//! mapper is a pure function of the response and stops at the first field
//! that fails to decode.

use super::fields::{self, Fields};
use crate::{
    endpoints::{DecodeErrorKind, FieldError, FieldPath, FieldResult},
    types::{
        hashes::AccountAddress, network::PeerInfo, BlockInfo, Receipt, Timestamp, Transaction,
    },
};
use num_bigint::BigInt;
use serde_json::Value;

/// Records that can be decoded from the node's JSON on their own.
pub trait FromWire: Sized {
    fn from_wire(value: &Value) -> FieldResult<Self>;
}

impl<A: FromWire> FromWire for Vec<A> {
    fn from_wire(value: &Value) -> FieldResult<Self> { fields::sequence(value, A::from_wire) }
}

impl FromWire for Transaction {
    fn from_wire(value: &Value) -> FieldResult<Self> {
        let tx = fields::object(value)?;
        Ok(Self {
            hash:          tx.string("hash")?.into(),
            from:          tx.string("from")?.into(),
            to:            tx.string("to")?.into(),
            amount:        tx.big_int("amount")?,
            account_nonce: tx.integer::<u64>("accountNonce")?.into(),
            payload:       tx.string("payload")?.to_owned(),
            timestamp:     timestamp(&tx)?,
            fee:           tx.big_int("fee")?,
        })
    }
}

impl FromWire for PeerInfo {
    fn from_wire(value: &Value) -> FieldResult<Self> {
        let peer = fields::object(value)?;
        let id = peer.string("id")?.to_owned().into();
        let caps = peer
            .sequence("caps", |cap| fields::string(cap).map(str::to_owned))?
            .into_iter()
            .collect();
        let (local_address, remote_address) = peer.nested("network", |network| {
            Ok((
                network.string("localAddress")?.to_owned(),
                network.string("remoteAddress")?.to_owned(),
            ))
        })?;
        Ok(Self {
            id,
            caps,
            local_address,
            remote_address,
            shard: peer.integer::<u32>("shard")?.into(),
        })
    }
}

impl FromWire for Receipt {
    fn from_wire(value: &Value) -> FieldResult<Self> {
        let receipt = fields::object(value)?;
        Ok(Self {
            result:           receipt.string("result")?.to_owned(),
            post_state:       receipt.string("poststate")?.into(),
            tx_hash:          receipt.string("txhash")?.into(),
            contract_address: receipt.string("contract")?.into(),
            failed:           receipt.boolean("failed")?,
            total_fee:        receipt.big_int("totalFee")?,
            used_gas:         receipt.big_int("usedGas")?,
        })
    }
}

fn timestamp(fields: &Fields) -> FieldResult<Timestamp> {
    fields.integer::<u64>("timestamp").map(Timestamp::from)
}

/// Decode a block. The transaction list is only read if it was requested,
/// in which case the node must include it.
pub fn block_info(value: &Value, full_tx: bool) -> FieldResult<BlockInfo> {
    let block = fields::object(value)?;
    Ok(BlockInfo {
        height:           block.integer::<u64>("height")?.into(),
        hash:             block.string("hash")?.into(),
        parent_hash:      block.string("parentHash")?.into(),
        nonce:            block.integer("nonce")?,
        state_hash:       block.string("stateHash")?.into(),
        tx_hash:          block.string("txHash")?.into(),
        creator:          block.string("creator")?.into(),
        timestamp:        timestamp(&block)?,
        difficulty:       block.big_int("difficulty")?,
        total_difficulty: block.big_int("totalDifficulty")?,
        transactions:     if full_tx {
            block.required_sequence("transactions", Transaction::from_wire)?
        } else {
            Vec::new()
        },
    })
}

/// Decode the balance of `address`. The node echoes the account it looked
/// up, which must be the one that was asked for.
pub fn balance(value: &Value, address: &AccountAddress) -> FieldResult<BigInt> {
    let result = fields::object(value)?;
    let account = result.string("Account")?;
    if account != address.as_str() {
        return Err(FieldError::new(
            FieldPath::key("Account"),
            DecodeErrorKind::Consistency {
                expected: address.to_string(),
                actual:   account.to_owned(),
            },
        ));
    }
    result.big_int("Balance")
}
