//! Hashes and addresses as reported by the node. The node writes them in a
//! fixed hex notation. They are kept exactly as received and never parsed.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

macro_rules! opaque_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, From, Into)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str { &self.0 }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str { &self.0 }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self { Self(s.to_owned()) }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool { self.0 == other }
        }
    };
}

opaque_identifier!(
    /// Hash of a block.
    BlockHash
);

opaque_identifier!(
    /// Hash of a transaction.
    TransactionHash
);

opaque_identifier!(
    /// Root hash of a trie, e.g. the state trie or the transaction trie of a
    /// block.
    StateHash
);

opaque_identifier!(
    /// Address of an account or a contract.
    AccountAddress
);

impl AccountAddress {
    /// Whether this is the empty address the node reports when there is no
    /// address, i.e. `""`, `"0x"` or `0x` followed by zeros only.
    pub fn is_empty(&self) -> bool {
        let digits = self.0.strip_prefix("0x").unwrap_or(&self.0);
        digits.bytes().all(|b| b == b'0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address() {
        assert!(AccountAddress::from("").is_empty());
        assert!(AccountAddress::from("0x").is_empty());
        assert!(AccountAddress::from("0x0000000000000000000000000000000000000000").is_empty());
        assert!(!AccountAddress::from("0x4c10f2cd2159bb432094e3be7e17904c2b4aeb21").is_empty());
    }

    #[test]
    fn test_kept_verbatim() {
        let hash = BlockHash::from("0x00000A");
        assert_eq!(hash.to_string(), "0x00000A");
        assert!(hash == *"0x00000A");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"0x00000A\"");
    }
}
