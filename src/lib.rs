//! # Split TUI
//!
//! A small terminal app for tracking who owes whom among a group of friends.
//!
//! ## Features
//! - Friend list with running balances
//! - Add friends with an avatar URL
//! - Split a bill with the selected friend
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous rendering of state snapshots
//! - App Layer (State machine) - owns the friend store and form state

pub mod app;
pub mod config;
pub mod constants;
pub mod forms;
pub mod messages;
pub mod models;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use models::{Friend, FriendId, BalanceStatus, IdSource, UuidSource};
pub use store::{FriendStore, Selection};
pub use forms::{AddFriendForm, UpdateBalanceForm};
pub use messages::{UiEvent, RenderState};
pub use app::{AppState, AppActor};
pub use config::Config;
