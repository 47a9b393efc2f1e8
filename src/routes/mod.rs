//! Service-level route handlers

pub mod system;
