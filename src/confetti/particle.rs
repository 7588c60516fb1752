use rand::Rng;

use crate::config::CONFETTI;

use super::{ConfettiOptions, Rgba, Sprite, Viewport};

/// Motion constants shared by every particle of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub wind: f32,
    pub decay: f32,
    /// Life budget every particle starts with
    pub ticks: u32,
}

impl Physics {
    pub fn from_options(options: &ConfettiOptions) -> Self {
        Self {
            gravity: options.gravity,
            wind: options.wind,
            decay: options.decay,
            ticks: options.ticks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub size: f32,
    pub color: Rgba,
    /// Degrees
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Remaining frames
    pub life: u32,
}

impl Particle {
    /// Advances the particle by one frame. `tick` is the burst's frame index
    /// (0-based); motion ramps in linearly over the first `ticks` frames.
    ///
    /// Returns `true` while the particle is still alive.
    pub fn step(&mut self, physics: &Physics, tick: u32) -> bool {
        let ramp = tick as f32 / physics.ticks.max(1) as f32;

        self.x += (self.speed_x + physics.wind) * ramp;
        self.y += self.speed_y * ramp;
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(360.0);
        self.speed_y += physics.gravity * ramp;
        self.speed_x *= physics.decay;
        self.speed_y *= physics.decay;
        self.life = self.life.saturating_sub(1);

        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Draw command for the current state; fades out with remaining life.
    pub fn sprite(&self, physics: &Physics) -> Sprite {
        Sprite {
            x: self.x,
            y: self.y,
            size: self.size,
            rotation_deg: self.rotation,
            color: self.color,
            alpha: (self.life as f32 / physics.ticks.max(1) as f32).clamp(0.0, 1.0),
        }
    }
}

/// Builds a batch of `options.count` particles.
///
/// Launch angles are spread evenly over `options.spread` degrees; speed,
/// start position (anywhere across the width, up to one viewport above the
/// top edge), size, color, and spin are sampled from `rng`, so a seeded
/// generator yields the same batch every time.
pub fn spawn_batch<R: Rng>(
    options: &ConfettiOptions,
    palette: &[Rgba],
    viewport: Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    if palette.is_empty() {
        return Vec::new();
    }

    let limits = &CONFETTI.limits;
    let count = options.count;

    (0..count)
        .map(|i| {
            let angle = (i as f32 * options.spread / count as f32).to_radians();
            let speed = options.start_velocity * rng.random_range(0.5..1.0);
            Particle {
                x: rng.random_range(0.0..=viewport.width),
                y: rng.random_range(0.0..=viewport.height) - viewport.height,
                speed_x: angle.cos() * speed,
                speed_y: angle.sin() * speed,
                size: rng.random_range(limits.min_particle_size..limits.max_particle_size),
                color: palette[rng.random_range(0..palette.len())],
                rotation: rng.random_range(0.0..360.0),
                rotation_speed: rng
                    .random_range(-limits.max_rotation_speed..limits.max_rotation_speed),
                life: options.ticks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn palette() -> Vec<Rgba> {
        ConfettiOptions::default().validate().unwrap()
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn same_seed_same_batch() {
        let opts = ConfettiOptions::default().with_count(25);
        let a = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(42));
        let b = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(42));
        let c = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn particles_start_above_or_inside_the_viewport() {
        let opts = ConfettiOptions::default();
        let vp = viewport();
        let batch = spawn_batch(&opts, &palette(), vp, &mut StdRng::seed_from_u64(7));
        for p in &batch {
            assert!((0.0..=vp.width).contains(&p.x));
            assert!((-vp.height..=0.0).contains(&p.y));
            assert!(p.size >= CONFETTI.limits.min_particle_size);
            assert!(p.size < CONFETTI.limits.max_particle_size);
            assert_eq!(p.life, opts.ticks);
            assert!(palette().contains(&p.color));
        }
    }

    #[test]
    fn first_tick_does_not_move_particles() {
        let opts = ConfettiOptions::default().with_count(3);
        let physics = Physics::from_options(&opts);
        let mut batch = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(1));
        let before = batch.clone();
        for p in &mut batch {
            p.step(&physics, 0);
        }
        for (p, b) in batch.iter().zip(&before) {
            assert_eq!((p.x, p.y), (b.x, b.y));
            assert_eq!(p.life, b.life - 1);
        }
    }

    #[test]
    fn gravity_pulls_particles_down_once_ramped_in() {
        let physics = Physics {
            gravity: 1.0,
            wind: 0.0,
            decay: 1.0,
            ticks: 10,
        };
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            speed_x: 0.0,
            speed_y: 0.0,
            size: 4.0,
            color: Rgba { r: 0, g: 0, b: 0 },
            rotation: 0.0,
            rotation_speed: 0.0,
            life: 10,
        };
        p.step(&physics, 5);
        assert!(p.speed_y > 0.0);
        p.step(&physics, 6);
        assert!(p.y > 0.0);
    }

    #[test]
    fn opacity_tracks_remaining_life() {
        let opts = ConfettiOptions::default().with_count(1).with_ticks(4);
        let physics = Physics::from_options(&opts);
        let mut p = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(3))
            .remove(0);
        assert_eq!(p.sprite(&physics).alpha, 1.0);
        p.step(&physics, 0);
        assert_eq!(p.sprite(&physics).alpha, 0.75);
    }

    proptest! {
        #[test]
        fn batch_size_matches_count(count in 0usize..600, seed in any::<u64>()) {
            let opts = ConfettiOptions::default().with_count(count);
            let batch = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(batch.len(), count);
        }

        #[test]
        fn life_strictly_decreases_until_expiry(ticks in 1u32..300, seed in any::<u64>()) {
            let opts = ConfettiOptions::default().with_count(8).with_ticks(ticks);
            let physics = Physics::from_options(&opts);
            let mut batch = spawn_batch(&opts, &palette(), viewport(), &mut StdRng::seed_from_u64(seed));
            for p in &mut batch {
                let mut tick = 0;
                while p.is_alive() {
                    let before = p.life;
                    p.step(&physics, tick);
                    prop_assert!(p.life < before);
                    tick += 1;
                }
                prop_assert_eq!(tick, ticks);
            }
        }
    }
}
