use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use polygon_core::{
    build_regular_polygon, control_for_key, Control, ControlOutcome, RenderLoop, RenderState,
    TickQueue, POLYGON_RADIUS, POLYGON_SIDES,
};
use polygon_gpu::GpuState;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

const WINDOW_TITLE: &str = "Rotating Polygon (native)";

/// Text fed to the shared key mapping for a pressed key.
fn key_text(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::Space) => Some(" "),
        _ => None,
    }
}

fn apply_control(state: &Rc<RefCell<RenderState>>, control: Control) {
    let outcome = state.borrow_mut().apply(control);
    match outcome {
        ControlOutcome::ModeChanged(mode) => log::info!("[controls] mode={:?}", mode),
        ControlOutcome::Updated => {
            let st = state.borrow();
            log::info!(
                "[controls] {:?} color={:?} rot=({:.3},{:.3})",
                control,
                st.color,
                st.rotation_x,
                st.rotation_y
            );
        }
        ControlOutcome::ToggleShareInfo => {
            log::info!("[controls] share links are only shown by the web frontend")
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .build(&event_loop)?,
    );

    let vertices = build_regular_polygon(POLYGON_SIDES, POLYGON_RADIUS)?;
    let size = window.inner_size();
    let gpu = pollster::block_on(GpuState::new(
        window.clone(),
        size.width,
        size.height,
        &vertices,
    ))
    .inspect_err(|e| log::error!("GPU init error: {e}"))?;

    let state = Rc::new(RefCell::new(RenderState::default()));
    let target = Rc::new(RefCell::new(gpu));
    let ticks = Rc::new(TickQueue::new());
    RenderLoop::new(state.clone(), target.clone(), ticks.clone()).start();
    log::info!("keys: space/p pause, c color, r reset, s share, esc quit");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                target.borrow_mut().resize_if_needed(size.width, size.height)
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if logical_key == Key::Named(NamedKey::Escape) {
                    elwt.exit();
                } else if let Some(control) = key_text(&logical_key).and_then(control_for_key) {
                    apply_control(&state, control);
                }
            }
            WindowEvent::RedrawRequested => {
                ticks.run_pending();
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_letters_map_to_controls() {
        let space = Key::Named(NamedKey::Space);
        assert_eq!(key_text(&space).and_then(control_for_key), Some(Control::TogglePause));
        let c = Key::Character("c".into());
        assert_eq!(key_text(&c).and_then(control_for_key), Some(Control::ChangeColor));
        assert_eq!(key_text(&Key::Named(NamedKey::Enter)), None);
    }
}
