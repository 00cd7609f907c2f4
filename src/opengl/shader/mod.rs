mod program_pipeline;
mod shader_program;

pub use program_pipeline::*;
pub use shader_program::*;
