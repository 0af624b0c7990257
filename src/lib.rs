pub mod app_state;
pub mod classify;
pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod handlers;
pub mod webhook_payloads;

#[cfg(test)]
mod test_utils;

pub use dispatch::{DispatchEngine, HookReport, HookResponse, Outcome};
pub use error::{HookError, Result};
