//! Domain types and rules shared by the PromptBox crates.
//!
//! Nothing in here touches the database or the network.

pub mod category;
pub mod error;
pub mod timestamp;
pub mod types;
