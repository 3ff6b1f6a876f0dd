//! Frame drawing: the `Surface` abstraction, a software framebuffer
//! implementing it, the frame renderer and the instance export buffer.

pub mod framebuffer;
pub mod gradient;
pub mod instance;
pub mod renderer;
pub mod surface;

pub use framebuffer::Framebuffer;
pub use renderer::render_frame;
pub use surface::Surface;
