pub mod templates;
pub mod assets;
pub mod render;
pub mod generator;

pub use assets::*;
pub use generator::*;
pub use render::*;
