use std::rc::Rc;

use eframe::egui::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    BurstId, ConfettiOptions, FrameQueue, FrameScheduler, MountTarget, OverlayStage, Viewport,
    launch_confetti,
};

/// Owns the overlay stage, frame queue and RNG the app fires bursts with.
///
/// Call [`ConfettiCannon::begin_frame`] before the UI is laid out and
/// [`ConfettiCannon::end_frame`] after it, once per egui update.
pub struct ConfettiCannon {
    stage: Rc<OverlayStage>,
    frames: Rc<FrameQueue>,
    rng: StdRng,
    options: ConfettiOptions,
}

impl Default for ConfettiCannon {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConfettiCannon {
    /// A fixed `seed` makes every burst reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            stage: Rc::new(OverlayStage::new()),
            frames: Rc::new(FrameQueue::new()),
            rng,
            options: ConfettiOptions::default(),
        }
    }

    /// Fires a burst with the default options.
    pub fn fire(&mut self, reason: &str) -> Option<BurstId> {
        let options = self.options.clone();
        self.fire_with(&options, reason)
    }

    /// Fires a burst. Failures are logged, never returned.
    pub fn fire_with(&mut self, options: &ConfettiOptions, reason: &str) -> Option<BurstId> {
        let target: Rc<dyn MountTarget> = self.stage.clone();
        let scheduler: Rc<dyn FrameScheduler> = self.frames.clone();
        match launch_confetti(target, options, scheduler, &mut self.rng) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Confetti for {} skipped: {}", reason, e);
                None
            }
        }
    }

    pub fn begin_frame(&self, ctx: &Context) {
        #[allow(deprecated)]
        let screen = ctx.screen_rect();
        self.stage
            .sync_viewport(Viewport::new(screen.width(), screen.height()));
    }

    /// Steps every running burst once and paints the result.
    pub fn end_frame(&self, ctx: &Context) {
        self.frames.run_frame();
        self.stage.paint(ctx);
        if self.is_active() {
            ctx.request_repaint();
        }
    }

    pub fn is_active(&self) -> bool {
        self.frames.pending() > 0
    }

    pub fn stage(&self) -> &Rc<OverlayStage> {
        &self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_cannon(seed: u64) -> ConfettiCannon {
        let cannon = ConfettiCannon::new(Some(seed));
        cannon.stage().sync_viewport(Viewport::new(1024.0, 768.0));
        cannon
    }

    #[test]
    fn failures_are_swallowed() {
        let mut cannon = ConfettiCannon::new(Some(1));
        // No frame has reported a screen size yet
        assert_eq!(cannon.fire("test"), None);
        assert!(!cannon.is_active());

        let mut cannon = sized_cannon(1);
        cannon.stage().set_attached(false);
        assert_eq!(cannon.fire("test"), None);
        assert_eq!(cannon.stage().canvas_count(), 0);
    }

    #[test]
    fn bursts_run_across_egui_frames() {
        let mut cannon = sized_cannon(5);
        let opts = ConfettiOptions::default().with_count(20).with_ticks(3);
        assert!(cannon.fire_with(&opts, "test").is_some());
        assert!(cannon.is_active());

        let ctx = Context::default();
        for _ in 0..3 {
            let _ = ctx.run(Default::default(), |ctx| cannon.end_frame(ctx));
        }
        assert!(!cannon.is_active());
        assert_eq!(cannon.stage().canvas_count(), 0);
    }

    #[test]
    fn seeded_cannons_agree() {
        let mut a = sized_cannon(9);
        let mut b = sized_cannon(9);
        assert_eq!(a.fire("a"), b.fire("b"));
    }
}
