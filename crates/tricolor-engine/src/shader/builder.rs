use anyhow::{anyhow, Context, Result};

use crate::device::{GlApi, ShaderStage};

use super::source::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};

/// Size of the info-log buffer, including the terminating NUL a C driver writes.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Outcome of one compile or link step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    Ok,
    /// Step failed; carries the driver diagnostic, bounded by [`INFO_LOG_CAPACITY`].
    Failed(String),
}

impl StageStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, StageStatus::Ok)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            StageStatus::Ok => None,
            StageStatus::Failed(log) => Some(log),
        }
    }
}

/// Per-step results of a program build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub vertex: StageStatus,
    pub fragment: StageStatus,
    pub link: StageStatus,
}

impl BuildReport {
    pub fn is_ok(&self) -> bool {
        self.vertex.is_ok() && self.fragment.is_ok() && self.link.is_ok()
    }

    /// All diagnostics produced by the build, in pipeline order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        [&self.vertex, &self.fragment, &self.link]
            .into_iter()
            .filter_map(StageStatus::diagnostic)
    }
}

/// A linked (or failed-to-link) program handle plus its build report.
///
/// A failed build still yields a handle: rendering with it is undefined but
/// not fatal.
#[derive(Debug)]
pub struct ShaderProgram<G: GlApi> {
    pub handle: G::Program,
    pub report: BuildReport,
}

/// Compiles a vertex/fragment pair and links them into one program.
///
/// Compile and link failures are logged and recorded in the report; the
/// build continues regardless. Only GL object allocation failure is an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct ShaderBuilder<'s> {
    vertex_source: &'s str,
    fragment_source: &'s str,
}

impl Default for ShaderBuilder<'static> {
    fn default() -> Self {
        Self::new(VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)
    }
}

impl<'s> ShaderBuilder<'s> {
    pub fn new(vertex_source: &'s str, fragment_source: &'s str) -> Self {
        Self {
            vertex_source,
            fragment_source,
        }
    }

    pub fn build<G: GlApi>(&self, gl: &G) -> Result<ShaderProgram<G>> {
        let (vertex_shader, vertex) = compile(gl, ShaderStage::Vertex, self.vertex_source)?;
        let (fragment_shader, fragment) =
            match compile(gl, ShaderStage::Fragment, self.fragment_source) {
                Ok(compiled) => compiled,
                Err(e) => {
                    gl.delete_shader(vertex_shader);
                    return Err(e);
                }
            };

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(e) => {
                gl.delete_shader(vertex_shader);
                gl.delete_shader(fragment_shader);
                return Err(anyhow!(e)).context("failed to create shader program");
            }
        };

        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);

        let link = if gl.program_link_status(program) {
            StageStatus::Ok
        } else {
            let log = bounded_info_log(gl.program_info_log(program));
            log::error!("shader program linking failed: {log}");
            StageStatus::Failed(log)
        };

        // Linked binaries no longer need the stage objects.
        for shader in [vertex_shader, fragment_shader] {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        let report = BuildReport {
            vertex,
            fragment,
            link,
        };
        if report.is_ok() {
            log::debug!("shader program {program:?} linked");
        }

        Ok(ShaderProgram {
            handle: program,
            report,
        })
    }
}

fn compile<G: GlApi>(gl: &G, stage: ShaderStage, source: &str) -> Result<(G::Shader, StageStatus)> {
    let shader = gl
        .create_shader(stage)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to create {} shader", stage.label()))?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    let status = if gl.shader_compile_status(shader) {
        StageStatus::Ok
    } else {
        let log = bounded_info_log(gl.shader_info_log(shader));
        log::error!("{} shader compilation failed: {log}", stage.label());
        StageStatus::Failed(log)
    };

    Ok((shader, status))
}

/// Trims a driver log to what a fixed `INFO_LOG_CAPACITY` buffer would hold.
///
/// Never splits a UTF-8 sequence. An empty log becomes a placeholder so a
/// failure always carries a non-empty diagnostic.
pub fn bounded_info_log(log: String) -> String {
    let mut log = log;
    let limit = INFO_LOG_CAPACITY - 1;
    if log.len() > limit {
        let mut cut = limit;
        while !log.is_char_boundary(cut) {
            cut -= 1;
        }
        log.truncate(cut);
    }

    let trimmed = log.trim_end();
    if trimmed.is_empty() {
        "(driver returned no info log)".to_string()
    } else {
        trimmed.to_string()
    }
}
