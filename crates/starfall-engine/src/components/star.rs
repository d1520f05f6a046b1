use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::config::BackgroundConfig;
use crate::core::rng::RandomSource;
use crate::renderer::traits::Surface;

/// A fixed background star. Never mutated; replaced as a batch on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

impl Star {
    /// A star placed uniformly within a `width` x `height` surface.
    pub fn random(rng: &mut impl RandomSource, width: f64, height: f64, config: &BackgroundConfig) -> Self {
        let x = rng.range(0.0, width);
        let y = rng.range(0.0, height);
        Star {
            pos: DVec2::new(x, y),
            radius: rng.in_range(config.star_radius),
            alpha: rng.in_range(config.star_alpha),
        }
    }

    /// Draw as a filled disc. The caller sets the fill style once for the batch.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_global_alpha(self.alpha);
        surface.begin_path();
        surface.arc(self.pos.x, self.pos.y, self.radius, 0.0, TAU);
        surface.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn random_star_within_bounds() {
        let mut rng = Rng::new(42);
        let config = BackgroundConfig::default();
        for _ in 0..500 {
            let s = Star::random(&mut rng, 320.0, 240.0, &config);
            assert!(s.pos.x >= 0.0 && s.pos.x < 320.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 240.0);
            assert!(s.radius >= 0.3 && s.radius < 1.5);
            assert!(s.alpha >= 0.3 && s.alpha < 1.0);
        }
    }

    #[test]
    fn zero_sized_surface_puts_stars_at_origin() {
        let mut rng = Rng::new(1);
        let s = Star::random(&mut rng, 0.0, 0.0, &BackgroundConfig::default());
        assert_eq!(s.pos, DVec2::ZERO);
    }

    #[test]
    fn draw_emits_alpha_then_filled_arc() {
        let star = Star { pos: DVec2::new(5.0, 6.0), radius: 1.0, alpha: 0.5 };
        let mut surface = RecordingSurface::new();
        star.draw(&mut surface);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::GlobalAlpha(0.5),
                DrawCommand::BeginPath,
                DrawCommand::Arc { x: 5.0, y: 6.0, radius: 1.0 },
                DrawCommand::Fill,
            ]
        );
    }
}
