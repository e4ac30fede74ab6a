//! Session and progression layer over the [`tripick_core`] match engine:
//! free-play vs. ranked rules, powerup allowances, run timing, and the
//! boundary to the remote scoring service.

pub use error::*;
pub use ranked::*;
pub use service::*;
pub use session::*;
pub use theme::*;

mod error;
mod ranked;
mod service;
mod session;
mod theme;
