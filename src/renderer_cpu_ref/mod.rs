pub mod canvas;
pub mod projection;
pub mod reference;
