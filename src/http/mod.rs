//! HTTP protocol layer module
//!
//! Response construction helpers, decoupled from the endpoint handlers.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_html_response, build_json_response, build_text_response,
};
