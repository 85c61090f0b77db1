//! Wallet and blockchain services.
//!
//! # Services
//!
//! - [`wallet`] - Injected Aptos wallet (Petra and compatible extensions)
//! - [`aptos`] - Fullnode/indexer reads and transaction confirmation
//! - [`clipboard`] - Copy text to the system clipboard
//!
//! # JavaScript Bindings
//!
//! The wallet service goes through `src/js/wallet.js`.

pub mod wallet;
pub mod aptos;
pub mod clipboard;

pub use wallet::*;
pub use aptos::*;
pub use clipboard::*;
