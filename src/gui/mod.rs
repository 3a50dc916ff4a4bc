//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Shell') and messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (tick, keyboard, worker inbox)
//! - the transport controller and result picker the views drive
//! - background workers for search/resolve

pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod transport;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;
pub(crate) mod workers;

// Re-export the entry points main.rs needs.
pub(crate) use state::Shell;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
