//! Project preparation (`prepscript`)

mod layout;
mod use_case;

pub use layout::DirectoryLayout;
pub use use_case::{PrepareReport, RepoPreparer};
