//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, currently the
//! trace identifier and the one-line access log.

pub mod trace;

pub use trace::Trace;
