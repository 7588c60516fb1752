//! Host seams of the burst animator: where canvases are mounted and who
//! decides when the next frame runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::ConfettiError;

/// Size of the visible area a canvas covers, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A viewport with no area cannot back a drawing surface.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanvasId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Opaque RGB color of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    /// Parses any CSS color string (`#f7931e`, `#abc`, `tomato`, `rgb(...)`).
    pub fn parse(css: &str) -> Option<Self> {
        let color = colorgrad::Color::from_html(css).ok()?;
        let [r, g, b, _] = color.to_rgba8();
        Some(Self { r, g, b })
    }
}

/// How a new canvas should be laid out on its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    pub viewport: Viewport,
    pub z_index: i32,
}

/// One rotated, filled square to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Center position
    pub x: f32,
    pub y: f32,
    /// Edge length
    pub size: f32,
    pub rotation_deg: f32,
    pub color: Rgba,
    /// 0.0 = invisible, 1.0 = opaque
    pub alpha: f32,
}

pub type ResizeListener = Rc<dyn Fn(Viewport)>;

/// A container confetti canvases are appended to and removed from.
///
/// Methods take `&self`: implementations keep their state behind interior
/// mutability so a running burst and the host can share one handle.
pub trait MountTarget {
    /// Current viewport, or `None` when the target is detached.
    fn viewport(&self) -> Option<Viewport>;

    /// Appends a canvas. Fails without mutating anything if the target is
    /// detached or no drawing surface can be created.
    fn attach_canvas(&self, spec: CanvasSpec) -> Result<CanvasId, ConfettiError>;

    fn resize_canvas(&self, id: CanvasId, viewport: Viewport);

    /// Clears the canvas and draws `sprites` on it.
    fn present(&self, id: CanvasId, sprites: &[Sprite]) -> Result<(), ConfettiError>;

    fn detach_canvas(&self, id: CanvasId);

    fn canvas_count(&self) -> usize;

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId;

    fn remove_resize_listener(&self, id: ListenerId);

    fn listener_count(&self) -> usize;
}

pub type FrameCallback = Box<dyn FnOnce()>;

/// The host's per-frame primitive: runs a callback at the next frame.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Cooperative single-threaded frame scheduler.
///
/// The host calls [`FrameQueue::run_frame`] once per displayed frame; tests
/// call it in a loop to step animations synchronously.
#[derive(Default)]
pub struct FrameQueue {
    queue: RefCell<VecDeque<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every callback that was queued before this call. Callbacks that
    /// request another frame land on the *next* `run_frame`.
    pub fn run_frame(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let ran = batch.len();
        for callback in batch {
            callback();
        }
        ran
    }

    /// Steps frames until the queue is idle or `max_frames` ran. Returns the
    /// number of frames that executed at least one callback.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pending() > 0 {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}
