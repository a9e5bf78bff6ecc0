/// Block lookup by height. With height [`LATEST_HEIGHT`] the node returns the
/// head of the chain.
pub const GET_BLOCK_BY_HEIGHT: &str = "seele.GetBlockByHeight";

/// Information about the peers the node is connected to.
pub const GET_PEERS_INFO: &str = "network_getPeersInfo";

/// Balance of a single account.
pub const GET_BALANCE: &str = "seele_getBalance";

/// Execution receipt of a transaction.
pub const GET_RECEIPT_BY_TX_HASH: &str = "txpool_getReceiptByTxHash";

/// Contents of the node's pending transaction pool.
pub const GET_PENDING_TRANSACTIONS: &str = "debug_getPendingTransactions";

/// Height understood by the node as "the current head of the chain".
pub const LATEST_HEIGHT: i64 = -1;
