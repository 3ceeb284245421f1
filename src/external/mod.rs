//! External process collaborators.
//!
//! - `tool`: the `Transcoder`, `TextRenderer` and `AudioPlayer` traits
//! - `tools/`: implementations backed by ffmpeg, chafa and ffplay
//! - `error`: `ToolError`

mod error;
mod tool;
pub mod tools;

pub use error::ToolError;
pub use tool::{AudioHandle, AudioPlayer, TextRenderer, Transcoder};
pub use tools::{Chafa, Ffmpeg, Ffplay, FfplayHandle};
