//! Identifier newtypes for feed entities.
//!
//! Ids are allocated sequentially by whichever engine owns the entity
//! (the ledger for items/votes/evidence, the account store for users).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub fn raw(&self) -> u64 {
                self.0
            }

            /// The id following this one.
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// A news item in the feed.
    ItemId,
    "item-"
);
id_type!(
    /// A single vote on a news item.
    VoteId,
    "vote-"
);
id_type!(
    /// A piece of evidence attached to a news item.
    EvidenceId,
    "evidence-"
);
id_type!(
    /// A response under a piece of evidence.
    ResponseId,
    "response-"
);
id_type!(
    /// A registered user.
    UserId,
    "user-"
);
