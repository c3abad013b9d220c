pub mod constants;
pub mod graph;
pub mod interp;
pub mod marquee;
pub mod scroll;
pub mod spring;
pub mod surface;
pub mod texture;
pub mod uniforms;

pub use constants::*;
pub use graph::*;
pub use interp::*;
pub use marquee::*;
pub use scroll::*;
pub use spring::*;
pub use surface::*;
pub use uniforms::*;
