pub mod conversion;
pub mod definition;
pub mod view;

pub use definition::*;
pub use view::*;
