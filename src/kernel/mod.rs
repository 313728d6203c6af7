//! Headless scoping core (membership/filter/action/effect).

pub mod action;
pub mod config;
pub mod effect;
pub mod filter;
pub mod membership;
pub mod services;
pub mod session;
pub mod store;

pub use action::Action;
pub use config::ScopeConfig;
pub use effect::Effect;
pub use filter::filtered_order;
pub use membership::{MembershipStore, Violation, MEMBERSHIP_KEY};
pub use session::Session;
pub use store::{DispatchResult, ListingHook, Store};
