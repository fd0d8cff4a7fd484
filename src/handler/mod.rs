//! Request handler module
//!
//! Request routing dispatch and the fixed-record endpoint handlers.

pub mod endpoints;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
