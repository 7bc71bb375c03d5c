//! Browser-driven checks against a locally launched `web` server.

pub mod browser;
pub mod test_server;
