pub mod osc;

pub use osc::{FaceCommand, OscController, OscSender};
