//! Rendering
//!
//! The simulation draws into a [`RenderSurface`]. The shipped surface is a
//! [`DrawList`]; its shapes go through the WebGPU vertex pipeline and its text
//! goes to the host's text layer.

pub mod draw_list;
pub mod frame;
pub mod overlay;
pub mod pipeline;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList, TextCommand, TextStyle};
pub use frame::render_frame;
pub use pipeline::RenderState;
pub use surface::{Color, Font, RenderSurface, TextAlign};
