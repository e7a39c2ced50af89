//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one function per backend endpoint and `types` defines the
//! shared wire schema. There is no realtime channel; everything is plain
//! request/response JSON under `/api`.

pub mod api;
pub mod types;
