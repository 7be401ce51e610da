pub mod record;
pub mod input;
pub mod tabular;

pub use record::*;
pub use input::*;
pub use tabular::*;
