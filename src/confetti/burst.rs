use std::rc::{Rc, Weak};

use rand::Rng;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::particle::{Particle, Physics, spawn_batch};
use super::{
    CanvasId, CanvasSpec, ConfettiError, ConfettiOptions, FrameScheduler, ListenerId,
    MountTarget, Sprite, Viewport,
};

/// Identifies a running burst; equal to the id of the canvas it draws on.
pub type BurstId = CanvasId;

/// Why a burst stopped.
#[derive(Debug, Clone, PartialEq)]
enum BurstEnd {
    /// Every particle expired.
    Expired,
    /// The frame budget ran out before the particles did.
    FrameBudget,
    /// Drawing a frame failed.
    DrawFailed(ConfettiError),
}

/// One burst in flight: its canvas, resize listener, and particle batch.
///
/// The session is moved into each frame callback, so the particle list is
/// owned by exactly one running loop.
struct BurstSession {
    target: Rc<dyn MountTarget>,
    canvas: CanvasId,
    listener: ListenerId,
    particles: Vec<Particle>,
    physics: Physics,
    tick: u32,
    frame_budget: u32,
}

/// Launches a confetti burst on `target`.
///
/// Validates `options`, attaches one full-viewport canvas plus a resize
/// listener, and schedules the animation on `scheduler`. The burst tears
/// itself down once its particles expire. Returns `Ok(None)` for a burst
/// with no particles, which leaves the target untouched.
///
/// Fire-and-forget: callers log the error and carry on.
pub fn launch_confetti<R: Rng>(
    target: Rc<dyn MountTarget>,
    options: &ConfettiOptions,
    scheduler: Rc<dyn FrameScheduler>,
    rng: &mut R,
) -> Result<Option<BurstId>, ConfettiError> {
    let palette = options.validate()?;
    if options.count == 0 {
        return Ok(None);
    }

    let viewport = target.viewport().ok_or(ConfettiError::TargetUnavailable)?;
    // Spawn ranges need a finite, positive area
    if !viewport.is_drawable() {
        return Err(ConfettiError::SurfaceUnavailable);
    }
    let particles = spawn_batch(options, &palette, viewport, rng);

    let canvas = target.attach_canvas(CanvasSpec {
        viewport,
        z_index: options.z_index,
    })?;

    let weak_target: Weak<dyn MountTarget> = Rc::downgrade(&target);
    let listener = target.add_resize_listener(Rc::new(move |viewport: Viewport| {
        if let Some(target) = weak_target.upgrade() {
            target.resize_canvas(canvas, viewport);
        }
    }));

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_confetti_events {
        log::info!(
            "🎉 Confetti burst {:?}: {} particles over {} ticks",
            canvas,
            particles.len(),
            options.ticks
        );
    }

    let session = BurstSession {
        target,
        canvas,
        listener,
        particles,
        physics: Physics::from_options(options),
        tick: 0,
        frame_budget: options.frame_budget(),
    };
    session.schedule(scheduler);

    Ok(Some(canvas))
}

impl BurstSession {
    fn schedule(self, scheduler: Rc<dyn FrameScheduler>) {
        let next = Rc::clone(&scheduler);
        scheduler.request_frame(Box::new(move || self.on_frame(next)));
    }

    fn on_frame(mut self, scheduler: Rc<dyn FrameScheduler>) {
        match self.advance() {
            Ok(true) => self.schedule(scheduler),
            Ok(false) if self.particles.is_empty() => self.finish(BurstEnd::Expired),
            Ok(false) => self.finish(BurstEnd::FrameBudget),
            Err(e) => self.finish(BurstEnd::DrawFailed(e)),
        }
    }

    /// Runs one tick: integrate, cull, draw. Returns whether another frame
    /// is needed.
    fn advance(&mut self) -> Result<bool, ConfettiError> {
        let physics = self.physics;
        let tick = self.tick;
        self.particles.retain_mut(|p| p.step(&physics, tick));
        self.tick += 1;

        let sprites: Vec<Sprite> = self.particles.iter().map(|p| p.sprite(&physics)).collect();
        self.target.present(self.canvas, &sprites)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_confetti_frames {
            log::debug!(
                "Confetti {:?} tick {}: {} live",
                self.canvas,
                self.tick,
                sprites.len()
            );
        }

        Ok(!self.particles.is_empty() && self.tick < self.frame_budget)
    }

    fn finish(self, end: BurstEnd) {
        self.target.detach_canvas(self.canvas);
        self.target.remove_resize_listener(self.listener);

        match &end {
            BurstEnd::Expired => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_confetti_events {
                    log::info!(
                        "Confetti burst {:?} finished after {} ticks",
                        self.canvas,
                        self.tick
                    );
                }
            }
            BurstEnd::FrameBudget => log::warn!(
                "Confetti burst {:?} hit its frame budget with {} particles left; tearing down",
                self.canvas,
                self.particles.len()
            ),
            BurstEnd::DrawFailed(e) => {
                log::warn!("Confetti burst {:?} stopped: {}", self.canvas, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confetti::{FrameQueue, ResizeListener};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    /// In-memory mount target that records every presented frame.
    #[derive(Default)]
    struct RecordingTarget {
        detached: Cell<bool>,
        no_surface: Cell<bool>,
        fail_present_after: Cell<Option<usize>>,
        viewport: Cell<Option<Viewport>>,
        next_id: Cell<u64>,
        canvases: RefCell<BTreeMap<CanvasId, Viewport>>,
        frames: RefCell<Vec<(CanvasId, usize)>>,
        listeners: RefCell<Vec<(ListenerId, ResizeListener)>>,
    }

    impl RecordingTarget {
        fn new() -> Rc<Self> {
            let target = Self::default();
            target.viewport.set(Some(Viewport::new(800.0, 600.0)));
            Rc::new(target)
        }

        fn frames_for(&self, id: CanvasId) -> Vec<usize> {
            self.frames
                .borrow()
                .iter()
                .filter(|(c, _)| *c == id)
                .map(|(_, n)| *n)
                .collect()
        }

        fn fire_resize(&self, viewport: Viewport) {
            self.viewport.set(Some(viewport));
            let listeners: Vec<ResizeListener> =
                self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
            for listener in listeners {
                listener(viewport);
            }
        }
    }

    impl MountTarget for RecordingTarget {
        fn viewport(&self) -> Option<Viewport> {
            if self.detached.get() {
                None
            } else {
                self.viewport.get()
            }
        }

        fn attach_canvas(&self, spec: CanvasSpec) -> Result<CanvasId, ConfettiError> {
            if self.detached.get() {
                return Err(ConfettiError::TargetUnavailable);
            }
            if self.no_surface.get() {
                return Err(ConfettiError::SurfaceUnavailable);
            }
            let id = CanvasId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.canvases.borrow_mut().insert(id, spec.viewport);
            Ok(id)
        }

        fn resize_canvas(&self, id: CanvasId, viewport: Viewport) {
            if let Some(vp) = self.canvases.borrow_mut().get_mut(&id) {
                *vp = viewport;
            }
        }

        fn present(&self, id: CanvasId, sprites: &[Sprite]) -> Result<(), ConfettiError> {
            let presented = self.frames.borrow().len();
            if self.fail_present_after.get().is_some_and(|n| presented >= n) {
                return Err(ConfettiError::Draw("context lost".to_string()));
            }
            self.frames.borrow_mut().push((id, sprites.len()));
            Ok(())
        }

        fn detach_canvas(&self, id: CanvasId) {
            self.canvases.borrow_mut().remove(&id);
        }

        fn canvas_count(&self) -> usize {
            self.canvases.borrow().len()
        }

        fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners.borrow_mut().push((id, listener));
            id
        }

        fn remove_resize_listener(&self, id: ListenerId) {
            self.listeners.borrow_mut().retain(|(l, _)| *l != id);
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    fn launch(
        target: &Rc<RecordingTarget>,
        queue: &Rc<FrameQueue>,
        options: &ConfettiOptions,
        seed: u64,
    ) -> Result<Option<BurstId>, ConfettiError> {
        let target: Rc<dyn MountTarget> = target.clone();
        let scheduler: Rc<dyn FrameScheduler> = queue.clone();
        launch_confetti(target, options, scheduler, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn ten_particles_five_ticks_clean_up_after_five_frames() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());
        let opts = ConfettiOptions::default().with_count(10).with_ticks(5);

        let id = launch(&target, &queue, &opts, 1).unwrap().unwrap();
        assert_eq!(target.canvas_count(), 1);
        assert_eq!(target.listener_count(), 1);

        for _ in 0..4 {
            queue.run_frame();
        }
        assert_eq!(target.canvas_count(), 1, "still animating after 4 frames");

        queue.run_frame();
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(queue.pending(), 0);
        assert_eq!(target.frames_for(id), vec![10, 10, 10, 10, 0]);
    }

    #[test]
    fn zero_count_never_attaches() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());
        let opts = ConfettiOptions::default().with_count(0);

        assert_eq!(launch(&target, &queue, &opts, 1), Ok(None));
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn default_burst_cleans_up_within_five_seconds_of_frames() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());

        launch(&target, &queue, &ConfettiOptions::default(), 9).unwrap();
        let frames = queue.run_until_idle(5 * 60);

        assert_eq!(queue.pending(), 0);
        assert!(frames <= 5 * 60);
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn back_to_back_bursts_run_independently() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());

        let short = ConfettiOptions::default().with_count(4).with_ticks(3);
        let long = ConfettiOptions::default().with_count(7).with_ticks(6);
        let a = launch(&target, &queue, &short, 1).unwrap().unwrap();
        let b = launch(&target, &queue, &long, 2).unwrap().unwrap();
        assert_ne!(a, b);
        assert_eq!(target.canvas_count(), 2);
        assert_eq!(target.listener_count(), 2);

        queue.run_until_idle(3);
        assert_eq!(target.canvas_count(), 1, "short burst done, long one still running");
        assert_eq!(target.listener_count(), 1);

        queue.run_until_idle(100);
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(target.frames_for(a), vec![4, 4, 0]);
        assert_eq!(target.frames_for(b), vec![7, 7, 7, 7, 7, 0]);
    }

    #[test]
    fn detached_target_is_left_untouched() {
        let target = RecordingTarget::new();
        target.detached.set(true);
        let queue = Rc::new(FrameQueue::new());

        let err = launch(&target, &queue, &ConfettiOptions::default(), 1).unwrap_err();
        assert_eq!(err, ConfettiError::TargetUnavailable);
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn missing_surface_registers_no_listener() {
        let target = RecordingTarget::new();
        target.no_surface.set(true);
        let queue = Rc::new(FrameQueue::new());

        let err = launch(&target, &queue, &ConfettiOptions::default(), 1).unwrap_err();
        assert_eq!(err, ConfettiError::SurfaceUnavailable);
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn degenerate_viewport_is_rejected_before_spawning() {
        for viewport in [
            Viewport::new(-10.0, 600.0),
            Viewport::new(800.0, f32::NAN),
            Viewport::new(0.0, 0.0),
        ] {
            let target = RecordingTarget::new();
            target.viewport.set(Some(viewport));
            let queue = Rc::new(FrameQueue::new());
            let opts = ConfettiOptions::default().with_count(3);

            assert_eq!(
                launch(&target, &queue, &opts, 1),
                Err(ConfettiError::SurfaceUnavailable)
            );
            assert_eq!(target.canvas_count(), 0);
            assert_eq!(target.listener_count(), 0);
            assert_eq!(queue.pending(), 0);
        }
    }

    #[test]
    fn frame_budget_tears_down_live_particles() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());
        let opts = ConfettiOptions::default().with_count(5).with_ticks(10);
        let palette = opts.validate().unwrap();
        let viewport = Viewport::new(800.0, 600.0);

        let canvas = target
            .attach_canvas(CanvasSpec {
                viewport,
                z_index: opts.z_index,
            })
            .unwrap();
        let listener = target.add_resize_listener(Rc::new(|_: Viewport| {}));
        let session = BurstSession {
            target: target.clone(),
            canvas,
            listener,
            particles: spawn_batch(&opts, &palette, viewport, &mut StdRng::seed_from_u64(3)),
            physics: Physics::from_options(&opts),
            tick: 0,
            frame_budget: 3,
        };
        session.schedule(queue.clone());

        queue.run_frame();
        queue.run_frame();
        assert_eq!(target.canvas_count(), 1);
        assert_eq!(target.listener_count(), 1);

        queue.run_frame();
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
        assert_eq!(queue.pending(), 0);
        assert_eq!(target.frames_for(canvas), vec![5, 5, 5], "particles still alive at teardown");
    }

    #[test]
    fn invalid_options_do_not_mutate_the_target() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());
        let opts = ConfettiOptions::default().with_ticks(0);

        assert!(launch(&target, &queue, &opts, 1).is_err());
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn draw_failure_mid_flight_tears_the_burst_down() {
        let target = RecordingTarget::new();
        target.fail_present_after.set(Some(2));
        let queue = Rc::new(FrameQueue::new());

        launch(&target, &queue, &ConfettiOptions::default(), 1).unwrap();
        let frames = queue.run_until_idle(1_000);

        assert_eq!(frames, 3);
        assert_eq!(target.canvas_count(), 0);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn resize_listener_follows_the_viewport() {
        let target = RecordingTarget::new();
        let queue = Rc::new(FrameQueue::new());
        let id = launch(&target, &queue, &ConfettiOptions::default(), 1)
            .unwrap()
            .unwrap();

        target.fire_resize(Viewport::new(1024.0, 768.0));
        assert_eq!(
            target.canvases.borrow().get(&id).copied(),
            Some(Viewport::new(1024.0, 768.0))
        );
    }

    #[test]
    fn same_seed_draws_the_same_frames() {
        let run = |seed| {
            let target = RecordingTarget::new();
            let queue = Rc::new(FrameQueue::new());
            let opts = ConfettiOptions::default().with_count(20).with_ticks(12);
            launch(&target, &queue, &opts, seed).unwrap();
            queue.run_until_idle(100);
            target.frames.borrow().clone()
        };
        assert_eq!(run(5), run(5));
    }

    proptest! {
        #[test]
        fn every_burst_finishes_in_exactly_ticks_frames(
            count in 1usize..300,
            ticks in 1u32..120,
            seed in any::<u64>(),
        ) {
            let target = RecordingTarget::new();
            let queue = Rc::new(FrameQueue::new());
            let opts = ConfettiOptions::default().with_count(count).with_ticks(ticks);

            let id = launch(&target, &queue, &opts, seed).unwrap().unwrap();
            let frames = queue.run_until_idle(ticks as usize + 100);

            prop_assert_eq!(frames, ticks as usize);
            prop_assert_eq!(target.canvas_count(), 0);
            prop_assert_eq!(target.listener_count(), 0);

            let live = target.frames_for(id);
            prop_assert_eq!(live.len(), ticks as usize);
            let first = live[0];
            prop_assert_eq!(first, if ticks > 1 { count } else { 0 });
            prop_assert!(live.windows(2).all(|w| w[1] <= w[0]));
            prop_assert_eq!(*live.last().unwrap(), 0);
        }
    }
}
