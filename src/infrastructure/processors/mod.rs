pub mod css_minifier;
pub mod html_minifier;

pub use css_minifier::*;
pub use html_minifier::*;
