//! `storefront-session` — the only surface a presentation layer talks to.
//!
//! A [`Session`] owns one cart and one navigation state, reads a shared
//! catalog, and answers every [`Intent`] with the [`ViewModel`] to render next.
//! All calls are synchronous and must be serialized onto one thread.

pub mod config;
pub mod intent;
pub mod navigation;
pub mod session;
pub mod view_model;

pub use config::SessionConfig;
pub use intent::Intent;
pub use navigation::{NavigationState, Transition, ViewKind};
pub use session::{CartEnvelope, Session};
pub use view_model::ViewModel;
