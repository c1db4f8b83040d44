use winit::dpi::LogicalSize;
use winit::window::{Window, WindowAttributes};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Rendering assumes a fixed-size surface; resize events are ignored.
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Triangle".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: false,
        }
    }
}

impl RuntimeConfig {
    pub(crate) fn window_attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size)
            .with_resizable(self.resizable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_fixed_800_by_600() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "OpenGL Triangle");
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 600.0));
    }

    #[test]
    fn resizing_is_out_of_scope() {
        let config = RuntimeConfig::default();
        assert!(!config.resizable);
        assert!(!config.window_attributes().resizable);
    }
}
