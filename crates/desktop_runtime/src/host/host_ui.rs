use crate::{config::WindowMetrics, model::SurfaceSize};

const FALLBACK_CLIENT_WIDTH: i32 = 1024;
const FALLBACK_CLIENT_HEIGHT: i32 = 768;

/// Client size of the browser viewport, which the desktop shell fills.
fn viewport_client_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_CLIENT_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_CLIENT_HEIGHT);
            return (width, height);
        }
    }

    (FALLBACK_CLIENT_WIDTH, FALLBACK_CLIENT_HEIGHT)
}

/// Surface size from the desktop element's measured client size. Before the element is laid
/// out (no measurement, or a zero-sized one) the viewport stands in for it.
pub(super) fn desktop_surface_size(
    metrics: &WindowMetrics,
    measured: Option<(i32, i32)>,
) -> SurfaceSize {
    let (width, height) = measured
        .filter(|&(width, height)| width > 0 && height > 0)
        .unwrap_or_else(viewport_client_size);
    metrics.parent_size(width, height)
}
