// Server module entry point
// Listener construction, the accept loop, and per-connection serving

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the accept-loop module lives in loop.rs as
// server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used entry points
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
