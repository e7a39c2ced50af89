//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `auth` is the plain state model with pure transitions and derived flags;
//! `session` layers the async store actions (login, register, logout,
//! initialize) over it. The model stays DOM-free so it runs under native
//! `cargo test`.

pub mod auth;
pub mod session;
