pub mod inbound_event;
pub mod router_message;

pub use inbound_event::{EventKind, GitHubEvent, InboundEvent};
pub use router_message::{RepositoryIdentity, RouterMessage};
