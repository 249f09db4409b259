pub(crate) mod blend;
pub mod compositor;
pub mod field;
pub(crate) mod font;
pub mod frame;
pub mod layer;
pub mod surface;
