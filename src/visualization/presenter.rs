use crate::render::Figure;
use crate::Result;

/// Shows a finished figure to the user. Building the figure never depends on this.
pub trait Presenter {
    fn name(&self) -> &str;

    fn present(&self, figure: &Figure) -> Result<()>;
}

/// Used when no viewer is available or display is turned off.
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn name(&self) -> &str {
        "none"
    }

    fn present(&self, figure: &Figure) -> Result<()> {
        tracing::info!(title = %figure.title, "No viewer available, skipping display");
        Ok(())
    }
}

/// Native window that stays open until closed or Escape is pressed.
#[cfg(feature = "viewer")]
pub struct WindowPresenter;

#[cfg(feature = "viewer")]
impl Presenter for WindowPresenter {
    fn name(&self) -> &str {
        "window"
    }

    fn present(&self, figure: &Figure) -> Result<()> {
        use minifb::{Key, ScaleMode, Window, WindowOptions};

        let (width, height) = (figure.width() as usize, figure.height() as usize);
        let buffer = figure.to_rgb_u32();
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        };
        let mut window = Window::new(&figure.title, width, height, options)
            .map_err(|e| anyhow::anyhow!("Failed to open viewer window: {}", e))?;
        window.limit_update_rate(Some(std::time::Duration::from_millis(33)));

        tracing::info!("Viewer open, close the window or press Escape to exit");
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| anyhow::anyhow!("Failed to update viewer window: {}", e))?;
        }
        Ok(())
    }
}

/// Window presenter when compiled with the `viewer` feature and `show` is set, otherwise no-op.
pub fn default_presenter(show: bool) -> Box<dyn Presenter> {
    if show {
        viewer_presenter()
    } else {
        Box::new(NoopPresenter)
    }
}

#[cfg(feature = "viewer")]
fn viewer_presenter() -> Box<dyn Presenter> {
    Box::new(WindowPresenter)
}

#[cfg(not(feature = "viewer"))]
fn viewer_presenter() -> Box<dyn Presenter> {
    tracing::info!("Display requested but this binary was built without the `viewer` feature");
    Box::new(NoopPresenter)
}
