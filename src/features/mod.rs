//! Feature modules for zentro.

pub mod focus;
