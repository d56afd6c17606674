pub mod prompt;

pub use prompt::prompt_camera_index;
