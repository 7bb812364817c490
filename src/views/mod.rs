// src/views/mod.rs

pub mod background;
pub mod face;
pub mod surface;

pub use background::BackgroundManager;
pub use face::FaceInstance;
pub use surface::{FaceLayout, Surface};
