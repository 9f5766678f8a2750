//! Command action handlers.
//!
//! One handler per [`Command`](crate::commands::Command). Handlers receive the
//! parsed tokens and the collaborators they need, perform their side effects in
//! order, and return a [`DispatchResult`](crate::commands::DispatchResult).
//!
//! Only presence (`/away`, `/back`) and character selection persist anything;
//! every other handler is a stateless lookup that can safely run again.

mod broadcast;
mod lighack;
mod macros;
mod ping;
mod presence;
mod rename;
mod slap;

pub use crate::commands::actions::{
    broadcast::handle_broadcast,
    lighack::handle_lighack,
    macros::{handle_macro, handle_token_count, handle_youre},
    ping::handle_ping,
    presence::{handle_away, handle_back},
    rename::handle_become,
    slap::{SLAP_OBJECTS, handle_slap},
};
