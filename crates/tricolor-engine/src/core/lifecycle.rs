use anyhow::{ensure, Result};

use crate::device::{GlApi, Present};
use crate::render::FrameRenderer;
use crate::shader::ShaderBuilder;

use super::resources::RenderResources;

/// Where the renderer is in its one-way life.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Terminated,
}

/// Owns the render resources and sequences setup, frames and cleanup.
///
/// Drivers create the context, then call [`Lifecycle::start`], then
/// [`Lifecycle::frame`] on their own cadence, and finally
/// [`Lifecycle::terminate`] while the context is still current.
#[derive(Debug)]
pub struct Lifecycle<G: GlApi> {
    state: LifecycleState,
    resources: Option<RenderResources<G>>,
    renderer: FrameRenderer,
    frames: u64,
}

impl<G: GlApi> Default for Lifecycle<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GlApi> Lifecycle<G> {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            resources: None,
            renderer: FrameRenderer::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Frames drawn since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resources(&self) -> Option<&RenderResources<G>> {
        self.resources.as_ref()
    }

    /// Builds shaders and geometry on the current context.
    ///
    /// Shader diagnostics do not fail the start; GL allocation failures do.
    pub fn start(&mut self, gl: &G) -> Result<()> {
        self.start_with(gl, &ShaderBuilder::default())
    }

    /// Like [`Lifecycle::start`] with caller-provided shader sources.
    pub fn start_with(&mut self, gl: &G, shaders: &ShaderBuilder<'_>) -> Result<()> {
        ensure!(
            self.state == LifecycleState::Uninitialized,
            "renderer cannot start from {:?}",
            self.state
        );

        let resources = RenderResources::init_with(gl, shaders)?;
        if !resources.report().is_ok() {
            log::warn!("continuing with a broken shader program; output is undefined");
        }

        self.resources = Some(resources);
        self.state = LifecycleState::Running;
        log::info!("renderer running");
        Ok(())
    }

    /// Renders one frame. Outside `Running` this is a no-op.
    pub fn frame<P: Present + ?Sized>(&mut self, gl: &G, presenter: &P) -> Result<()> {
        let (LifecycleState::Running, Some(resources)) = (self.state, self.resources.as_ref())
        else {
            return Ok(());
        };

        let result = self.renderer.render(gl, resources, presenter);
        self.frames += 1;
        result
    }

    /// Releases the GPU resources. Returns `true` only for the call that
    /// actually performed the cleanup.
    pub fn terminate(&mut self, gl: &G) -> bool {
        let was_running = self.state == LifecycleState::Running;
        self.state = LifecycleState::Terminated;

        match self.resources.take() {
            Some(mut resources) => {
                resources.release(gl);
                log::info!("renderer terminated after {} frames", self.frames);
                true
            }
            None => {
                if was_running {
                    log::warn!("renderer was running without resources");
                }
                false
            }
        }
    }
}
