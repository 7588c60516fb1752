use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use eframe::egui::emath::Rot2;
use eframe::egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Shape, Stroke, Vec2};

use crate::config::CONFETTI;

use super::{
    CanvasId, CanvasSpec, ConfettiError, ListenerId, MountTarget, ResizeListener, Sprite,
    Viewport,
};

struct OverlayCanvas {
    viewport: Viewport,
    z_index: i32,
    sprites: Vec<Sprite>,
}

/// The app-wide mount target: canvases are painted on a foreground egui
/// layer above every panel, and never take pointer input.
pub struct OverlayStage {
    attached: Cell<bool>,
    viewport: Cell<Viewport>,
    next_id: Cell<u64>,
    canvases: RefCell<BTreeMap<CanvasId, OverlayCanvas>>,
    listeners: RefCell<Vec<(ListenerId, ResizeListener)>>,
}

impl Default for OverlayStage {
    fn default() -> Self {
        Self {
            attached: Cell::new(true),
            // Unknown until the first frame reports the screen size
            viewport: Cell::new(Viewport::new(0.0, 0.0)),
            next_id: Cell::new(0),
            canvases: RefCell::new(BTreeMap::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl OverlayStage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    /// Records the current screen size; resize listeners fire when it changed.
    pub fn sync_viewport(&self, viewport: Viewport) -> bool {
        if self.viewport.get() == viewport {
            return false;
        }
        self.viewport.set(viewport);

        // Listeners call back into the stage, so run them outside the borrow
        let listeners: Vec<ResizeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(viewport);
        }
        true
    }

    /// Paints every canvas, lowest `z_index` first.
    pub fn paint(&self, ctx: &Context) {
        let canvases = self.canvases.borrow();
        if canvases.is_empty() {
            return;
        }

        let mut ordered: Vec<&OverlayCanvas> = canvases.values().collect();
        ordered.sort_by_key(|canvas| canvas.z_index);

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new(CONFETTI.overlay_layer)));
        for canvas in ordered {
            let clip = Rect::from_min_size(
                Pos2::ZERO,
                Vec2::new(canvas.viewport.width, canvas.viewport.height),
            );
            let painter = painter.with_clip_rect(clip);
            for sprite in &canvas.sprites {
                painter.add(sprite_shape(sprite));
            }
        }
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl MountTarget for OverlayStage {
    fn viewport(&self) -> Option<Viewport> {
        self.attached.get().then(|| self.viewport.get())
    }

    fn attach_canvas(&self, spec: CanvasSpec) -> Result<CanvasId, ConfettiError> {
        if !self.attached.get() {
            return Err(ConfettiError::TargetUnavailable);
        }
        if !spec.viewport.is_drawable() {
            return Err(ConfettiError::SurfaceUnavailable);
        }

        let id = CanvasId(self.allocate_id());
        self.canvases.borrow_mut().insert(
            id,
            OverlayCanvas {
                viewport: spec.viewport,
                z_index: spec.z_index,
                sprites: Vec::new(),
            },
        );
        Ok(id)
    }

    fn resize_canvas(&self, id: CanvasId, viewport: Viewport) {
        if let Some(canvas) = self.canvases.borrow_mut().get_mut(&id) {
            canvas.viewport = viewport;
        }
    }

    fn present(&self, id: CanvasId, sprites: &[Sprite]) -> Result<(), ConfettiError> {
        if !self.attached.get() {
            return Err(ConfettiError::TargetUnavailable);
        }
        let mut canvases = self.canvases.borrow_mut();
        let canvas = canvases
            .get_mut(&id)
            .ok_or_else(|| ConfettiError::Draw(format!("canvas {:?} is not attached", id)))?;
        canvas.sprites.clear();
        canvas.sprites.extend_from_slice(sprites);
        Ok(())
    }

    fn detach_canvas(&self, id: CanvasId) {
        self.canvases.borrow_mut().remove(&id);
    }

    fn canvas_count(&self) -> usize {
        self.canvases.borrow().len()
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_resize_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// A sprite as a rotated, filled square.
fn sprite_shape(sprite: &Sprite) -> Shape {
    let half = sprite.size / 2.0;
    let rotation = Rot2::from_angle(sprite.rotation_deg.to_radians());
    let center = Pos2::new(sprite.x, sprite.y);
    let corners: Vec<Pos2> = [(-half, -half), (half, -half), (half, half), (-half, half)]
        .into_iter()
        .map(|(dx, dy)| center + rotation * Vec2::new(dx, dy))
        .collect();

    let alpha = (sprite.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    let fill = Color32::from_rgba_unmultiplied(sprite.color.r, sprite.color.g, sprite.color.b, alpha);
    Shape::convex_polygon(corners, fill, Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confetti::{ConfettiOptions, FrameQueue, FrameScheduler, Rgba, launch_confetti};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::rc::Rc;

    fn sprite() -> Sprite {
        Sprite {
            x: 10.0,
            y: 20.0,
            size: 4.0,
            rotation_deg: 90.0,
            color: Rgba { r: 255, g: 0, b: 0 },
            alpha: 0.5,
        }
    }

    #[test]
    fn unsized_stage_has_no_surface() {
        let stage = OverlayStage::new();
        let spec = CanvasSpec {
            viewport: stage.viewport().unwrap(),
            z_index: 1,
        };
        assert_eq!(stage.attach_canvas(spec), Err(ConfettiError::SurfaceUnavailable));
        assert_eq!(stage.canvas_count(), 0);
    }

    #[test]
    fn detached_stage_reports_no_viewport() {
        let stage = OverlayStage::new();
        stage.sync_viewport(Viewport::new(640.0, 480.0));
        stage.set_attached(false);
        assert_eq!(stage.viewport(), None);
        assert!(stage.present(CanvasId(0), &[]).is_err());
    }

    #[test]
    fn viewport_changes_fire_listeners_once() {
        let stage = Rc::new(OverlayStage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = stage.add_resize_listener(Rc::new(move |vp: Viewport| sink.borrow_mut().push(vp)));

        assert!(stage.sync_viewport(Viewport::new(640.0, 480.0)));
        assert!(!stage.sync_viewport(Viewport::new(640.0, 480.0)));
        stage.remove_resize_listener(id);
        assert!(stage.sync_viewport(Viewport::new(800.0, 600.0)));

        assert_eq!(*seen.borrow(), vec![Viewport::new(640.0, 480.0)]);
        assert_eq!(stage.listener_count(), 0);
    }

    #[test]
    fn burst_on_the_stage_paints_and_cleans_up() {
        let stage = Rc::new(OverlayStage::new());
        stage.sync_viewport(Viewport::new(640.0, 480.0));
        let queue = Rc::new(FrameQueue::new());
        let target: Rc<dyn MountTarget> = stage.clone();
        let scheduler: Rc<dyn FrameScheduler> = queue.clone();

        let opts = ConfettiOptions::default().with_count(12).with_ticks(6);
        launch_confetti(target, &opts, scheduler, &mut StdRng::seed_from_u64(11)).unwrap();

        let ctx = Context::default();
        for _ in 0..6 {
            queue.run_frame();
            let _ = ctx.run(Default::default(), |ctx| stage.paint(ctx));
        }
        assert_eq!(stage.canvas_count(), 0);
        assert_eq!(stage.listener_count(), 0);
    }

    #[test]
    fn sprite_shape_keeps_alpha() {
        match sprite_shape(&sprite()) {
            Shape::Path(path) => {
                assert_eq!(path.points.len(), 4);
                assert_eq!(path.fill.a(), 128);
            }
            other => panic!("unexpected shape {:?}", other),
        }
    }
}
