use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Height of a block, counted from the genesis block at height 0.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct BlockHeight {
    pub height: u64,
}

/// Sequence number of a transaction sent from an account. Assigned
/// consecutively per sender, so it is only unique together with the sender.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct Nonce {
    pub nonce: u64,
}

/// Shard of the network a node belongs to.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct ShardNumber {
    pub shard: u32,
}

/// Unix time in seconds, as reported by the node.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct Timestamp {
    pub seconds: u64,
}

impl Timestamp {
    /// The timestamp as a date, or [`None`] if it is beyond what
    /// [`chrono`] can represent.
    pub fn to_datetime(self) -> Option<chrono::DateTime<chrono::Utc>> {
        let seconds = i64::try_from(self.seconds).ok()?;
        chrono::DateTime::from_timestamp(seconds, 0)
    }
}
