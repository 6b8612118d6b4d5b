//! Screenshot input and mockup compositing
//!
//! - [`Screenshot`]: header-probed input image, decoded on demand
//! - [`compositor`]: bezel + screenshot layering, PNG output

pub mod compositor;
pub mod screenshot;

pub use compositor::{Mockup, centering_offset, compose, create_mockup, load_bezel};
pub use screenshot::Screenshot;
