//! Networking: JSON calls to the studio server.

pub mod api;
