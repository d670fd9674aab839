//! Per-tick frame driver.
//!
//! A tick advances the render state, rebuilds both matrices and hands them to
//! a [`FrameTarget`], then asks a [`TickScheduler`] for the next tick. Hosts
//! plug in their own scheduler (`requestAnimationFrame` on the web, the event
//! loop on native); tests drive ticks by hand through [`TickQueue`].

use crate::constants::{FOVY_RADIANS, VIEW_OFFSET, Z_FAR, Z_NEAR};
use crate::state::RenderState;
use crate::transform::{identity, perspective, rotate_about, translate, UnitAxis};
use glam::{Mat4, Vec4};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;

/// Backing-store size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when either side is zero.
    pub fn aspect(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }
}

/// Uniform inputs for one draw of the polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub projection: Mat4,
    pub model_view: Mat4,
    pub color: Vec4,
}

impl Frame {
    #[inline]
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.model_view
    }
}

pub fn projection_for(aspect: f32) -> Mat4 {
    perspective(FOVY_RADIANS, aspect, Z_NEAR, Z_FAR)
}

/// Translate in front of the eye, then rotate about local X, then local Y.
pub fn model_view_for(state: &RenderState) -> Mat4 {
    let m = translate(identity(), VIEW_OFFSET);
    let m = rotate_about(m, state.rotation_x, UnitAxis::X);
    rotate_about(m, state.rotation_y, UnitAxis::Y)
}

/// Matrices and color for the current state, or `None` for an empty viewport.
pub fn build_frame(state: &RenderState, viewport: Viewport) -> Option<Frame> {
    let aspect = viewport.aspect()?;
    Some(Frame {
        projection: projection_for(aspect),
        model_view: model_view_for(state),
        color: state.color.rgba(),
    })
}

/// Defers a tick until the host is ready for the next frame.
pub trait TickScheduler {
    fn schedule_next(&self, tick: Box<dyn FnOnce()>);
}

/// Something that can draw a [`Frame`]: binds the polygon buffers, writes the
/// uniforms and issues the fan draw.
pub trait FrameTarget {
    type Error: Debug;

    fn viewport(&self) -> Viewport;
    fn draw(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// FIFO of pending ticks, drained explicitly by its owner.
#[derive(Default)]
pub struct TickQueue {
    pending: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Run every tick queued so far. Ticks scheduled while running wait for
    /// the next call. Returns how many ticks ran.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let ran = batch.len();
        for tick in batch {
            tick();
        }
        ran
    }
}

impl TickScheduler for TickQueue {
    fn schedule_next(&self, tick: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push_back(tick);
    }
}

pub struct RenderLoop<T, S> {
    state: Rc<RefCell<RenderState>>,
    target: Rc<RefCell<T>>,
    scheduler: Rc<S>,
}

impl<T, S> RenderLoop<T, S>
where
    T: FrameTarget + 'static,
    S: TickScheduler + 'static,
{
    pub fn new(state: Rc<RefCell<RenderState>>, target: Rc<RefCell<T>>, scheduler: Rc<S>) -> Rc<Self> {
        Rc::new(Self {
            state,
            target,
            scheduler,
        })
    }

    /// Schedule the first tick. Every tick re-arms the next one, so the loop
    /// runs for as long as the scheduler keeps calling back.
    pub fn start(self: &Rc<Self>) {
        log::info!("[loop] starting");
        self.schedule();
    }

    /// One frame without re-arming. Returns the frame handed to the target.
    pub fn tick(&self) -> Option<Frame> {
        self.state.borrow_mut().advance();
        let viewport = self.target.borrow().viewport();
        let Some(frame) = build_frame(&self.state.borrow(), viewport) else {
            log::debug!("[loop] skipping draw for empty viewport {:?}", viewport);
            return None;
        };
        if let Err(e) = self.target.borrow_mut().draw(&frame) {
            log::error!("render error: {:?}", e);
        }
        Some(frame)
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.scheduler.schedule_next(Box::new(move || {
            this.tick();
            this.schedule();
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_has_no_aspect() {
        assert_eq!(Viewport::new(640, 0).aspect(), None);
        assert_eq!(Viewport::new(0, 480).aspect(), None);
        assert_eq!(Viewport::new(800, 400).aspect(), Some(2.0));
    }

    #[test]
    fn queue_defers_ticks_scheduled_while_draining() {
        let queue = Rc::new(TickQueue::new());
        let hits = Rc::new(RefCell::new(0));
        let (q, h) = (queue.clone(), hits.clone());
        queue.schedule_next(Box::new(move || {
            *h.borrow_mut() += 1;
            let h2 = h.clone();
            q.schedule_next(Box::new(move || *h2.borrow_mut() += 1));
        }));
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*hits.borrow(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn model_view_starts_at_view_offset() {
        let mv = model_view_for(&RenderState::default());
        assert_eq!(mv, Mat4::from_translation(VIEW_OFFSET));
    }
}
