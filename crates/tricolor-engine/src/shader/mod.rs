//! Shader program construction.

mod builder;
mod source;

pub use builder::{
    bounded_info_log, BuildReport, ShaderBuilder, ShaderProgram, StageStatus, INFO_LOG_CAPACITY,
};
pub use source::{
    COLOR_ATTRIBUTE, FRAGMENT_SHADER_SOURCE, POSITION_ATTRIBUTE, VERTEX_SHADER_SOURCE,
};
