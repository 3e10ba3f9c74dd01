// Reusable components live here.

pub mod error_banner;
pub mod inspect_panel;
pub mod loading_spinner;
pub mod query_tree;
