// Sitemin - site output post-processor
// Walks generated output roots and minifies HTML/CSS in place

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;
