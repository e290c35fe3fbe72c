mod types;
mod view;

pub use types::*;
pub use view::*;
