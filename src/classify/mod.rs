pub mod marketplace;
pub mod push;

pub use marketplace::{classify_marketplace, MarketplaceAction};
pub use push::{ImageExtensions, PushClassifier};

use crate::collaborators::MarketplaceRecord;
use crate::events::RouterMessage;

pub const DISPATCHED: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Ignore(IgnoreReason),
    Dispatch(RouterMessage),
    Mutate(MarketplaceMutation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    NonDefaultBranch,
    NoImagesTouched,
    UnknownEvent,
    /// A marketplace action other than purchased or cancelled, verbatim.
    MarketplaceAction(String),
}

impl IgnoreReason {
    pub fn response_text(&self) -> &str {
        match self {
            IgnoreReason::NonDefaultBranch => "Commit to non default branch",
            IgnoreReason::NoImagesTouched => "No image files touched",
            IgnoreReason::UnknownEvent => "no action",
            IgnoreReason::MarketplaceAction(action) => action,
        }
    }
}

/// The one table mutation a marketplace delivery implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceMutation {
    /// Insert-or-merge the record.
    Upsert(MarketplaceRecord),
    /// Retrieve the stored row for this record's key and delete it if present.
    Cancel(MarketplaceRecord),
}

impl MarketplaceMutation {
    pub fn response_text(&self) -> &'static str {
        match self {
            MarketplaceMutation::Upsert(_) => "purchased",
            MarketplaceMutation::Cancel(_) => "cancelled",
        }
    }
}

impl Decision {
    pub fn response_text(&self) -> &str {
        match self {
            Decision::Ignore(reason) => reason.response_text(),
            Decision::Dispatch(_) => DISPATCHED,
            Decision::Mutate(mutation) => mutation.response_text(),
        }
    }
}
