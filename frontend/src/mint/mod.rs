//! Minting logic, independent of the DOM.
//!
//! - [`eligibility`] - Mint window evaluation (not started / active / ended)
//! - [`form`] - Prescription form state
//! - [`payload`] - `launchpad::mint_nft` transaction payload
//! - [`submit`] - Guarded sign-and-confirm flow

pub mod eligibility;
pub mod form;
pub mod payload;
pub mod submit;

pub use eligibility::*;
pub use form::*;
pub use payload::*;
pub use submit::*;
