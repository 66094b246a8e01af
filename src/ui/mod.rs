//! Console presentation shared by both binaries

pub mod error;
pub mod interrupt;
pub mod logging;
pub mod output;
pub mod views;
