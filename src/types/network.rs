//! Network related types.

use super::basic::ShardNumber;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of a peer.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, From, Into)]
pub struct PeerId(pub String);

/// A peer that the node is connected to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeerInfo {
    /// The id of the peer.
    pub id:             PeerId,
    /// Protocols the peer supports, e.g. `seele/1`. The node reports them in
    /// no particular order; a capability listed more than once is kept once.
    pub caps:           BTreeSet<String>,
    /// The node's end of the connection.
    pub local_address:  String,
    /// The peer's end of the connection.
    pub remote_address: String,
    /// The shard the peer belongs to.
    pub shard:          ShardNumber,
}

impl PeerInfo {
    /// Whether the peer announced the given capability.
    pub fn supports(&self, cap: &str) -> bool { self.caps.contains(cap) }
}
