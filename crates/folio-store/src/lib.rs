//! # folio-store
//!
//! Client-side application state for the portfolio.
//!
//! - **Stores** ([`ProjectStore`], [`SkillStore`], [`ProfileStore`],
//!   [`ContactStore`]) own one slice of state each, published through a
//!   `tokio::sync::watch` channel, and expose async actions that call the API
//!   and reconcile the result.
//! - **Derived views** ([`DerivedView`]) are read-only projections recomputed
//!   from a store's latest snapshot.
//! - **Notifications** ([`ToastService`]) are a shared, self-expiring queue
//!   that every store reports successes and failures to.
//! - **[`Portfolio`]** wires one API implementation and one toast service into
//!   all stores.

pub mod context;
pub mod reactive;
pub mod state;
pub mod stores;
pub mod toast;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use context::Portfolio;
pub use reactive::DerivedView;
pub use state::LoadingState;
pub use stores::{
    ContactState, ContactStore, ProfileState, ProfileStore, ProjectState, ProjectStore,
    SkillState, SkillStore, CONTACT_SENT_MESSAGE,
};
pub use toast::{Toast, ToastId, ToastKind, ToastOptions, ToastService};
