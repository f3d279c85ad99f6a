pub mod definition;
pub mod prop;

pub use definition::*;
pub use prop::Prop;
