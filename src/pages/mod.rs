//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it installs its navigation
//! guard, drives its fetches, and delegates rendering details to
//! `components`. The dispatch "pages" render nothing and exist only to
//! reroute `/services` and `/order` by role.

pub mod customer_orders;
pub mod customer_services;
pub mod dispatch;
pub mod home;
pub mod login;
pub mod provider_dashboard;
pub mod provider_orders;
pub mod provider_services;
pub mod register;
