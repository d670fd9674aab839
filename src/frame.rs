use polygon_core::{Frame, FrameTarget, TickScheduler, Viewport};
use polygon_gpu::GpuState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Runs each tick on the next display refresh via `requestAnimationFrame`.
pub struct AnimationFrameScheduler {
    window: web::Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl TickScheduler for AnimationFrameScheduler {
    fn schedule_next(&self, tick: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || tick());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// The canvas plus the GPU state drawing into it. The canvas backing store
/// size is the viewport; the surface follows it before every draw.
pub struct CanvasTarget {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState<'static>,
}

impl CanvasTarget {
    pub fn new(canvas: web::HtmlCanvasElement, gpu: GpuState<'static>) -> Self {
        Self { canvas, gpu }
    }
}

impl FrameTarget for CanvasTarget {
    type Error = wgpu::SurfaceError;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        self.gpu.render(frame)
    }
}
