//! Meteors: short glowing streaks that fall diagonally and fade out.

use glam::DVec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::MeteorId;
use crate::core::rng::RandomSource;
use crate::renderer::traits::Surface;

/// A single meteor with motion and fade state.
#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    pub id: MeteorId,
    /// Head position; the trail extends backwards along `angle`.
    pub pos: DVec2,
    pub length: f64,
    pub width: f64,
    /// Pixels per frame.
    pub speed: f64,
    /// Travel direction in radians.
    pub angle: f64,
    pub alpha: f64,
    /// Alpha lost per frame.
    pub fade_speed: f64,
}

impl Meteor {
    /// Spawn just above the top edge at a random x, with randomized shape and heading.
    pub fn spawn(id: MeteorId, rng: &mut impl RandomSource, surface_width: f64, config: &BackgroundConfig) -> Self {
        let x = rng.range(0.0, surface_width);
        let length = rng.in_range(config.meteor_length);
        let width = rng.in_range(config.meteor_width);
        let speed = rng.in_range(config.meteor_speed);
        let half_spread = config.meteor_angle_spread / 2.0;
        let angle = config.meteor_angle + rng.range(-half_spread, half_spread);
        Meteor {
            id,
            pos: DVec2::new(x, config.meteor_spawn_y),
            length,
            width,
            speed,
            angle,
            alpha: 1.0,
            fade_speed: config.fade_speed,
        }
    }

    /// Unit vector along the travel direction.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.angle)
    }

    /// End of the trail, `length` pixels behind the head.
    pub fn tail(&self) -> DVec2 {
        self.pos - self.direction() * self.length
    }

    /// Faded out, or fully past the bottom or right edge of a surface of size `bounds`.
    pub fn is_spent(&self, bounds: DVec2) -> bool {
        self.alpha <= 0.0
            || self.pos.y > bounds.y + self.length
            || self.pos.x > bounds.x + self.length
    }

    /// Advance one frame. Returns false when the meteor should be removed.
    pub fn tick(&mut self, bounds: DVec2) -> bool {
        self.pos += self.direction() * self.speed;
        self.alpha -= self.fade_speed;
        !self.is_spent(bounds)
    }

    /// Pure form of `tick`: the advanced meteor, or `None` once spent.
    pub fn step(mut self, bounds: DVec2) -> Option<Meteor> {
        let alive = self.tick(bounds);
        alive.then_some(self)
    }

    /// Draw head-to-tail as a glowing line. Alpha and shadow are scoped with save/restore.
    pub fn draw(&self, surface: &mut impl Surface, config: &BackgroundConfig) {
        let tail = self.tail();
        surface.save();
        surface.set_global_alpha(self.alpha);
        surface.set_shadow(config.glow_blur, config.glow_color);
        surface.begin_path();
        surface.move_to(self.pos.x, self.pos.y);
        surface.line_to(tail.x, tail.y);
        surface.set_line_width(self.width);
        surface.set_stroke_style(config.meteor_color);
        surface.stroke();
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use std::f64::consts::FRAC_PI_2;

    fn meteor_at(pos: DVec2) -> Meteor {
        Meteor {
            id: MeteorId(1),
            pos,
            length: 40.0,
            width: 2.0,
            speed: 3.0,
            angle: std::f64::consts::FRAC_PI_4,
            alpha: 1.0,
            fade_speed: 0.006,
        }
    }

    #[test]
    fn spawn_parameters_within_ranges() {
        let mut rng = Rng::new(42);
        let config = BackgroundConfig::default();
        for i in 0..500 {
            let m = Meteor::spawn(MeteorId(i), &mut rng, 800.0, &config);
            assert!(m.pos.x >= 0.0 && m.pos.x < 800.0);
            assert_eq!(m.pos.y, -50.0);
            assert!(m.length >= 20.0 && m.length < 80.0);
            assert!(m.width >= 1.5 && m.width < 3.5);
            assert!(m.speed >= 2.0 && m.speed < 4.0);
            let deg = m.angle.to_degrees();
            assert!(deg >= 33.75 && deg < 56.25, "angle was {} degrees", deg);
            assert_eq!(m.alpha, 1.0);
            assert_eq!(m.fade_speed, 0.006);
        }
    }

    #[test]
    fn tick_moves_along_angle_and_fades() {
        let mut m = meteor_at(DVec2::new(100.0, 100.0));
        m.angle = FRAC_PI_2;
        assert!(m.tick(DVec2::new(1000.0, 1000.0)));
        assert!((m.pos.x - 100.0).abs() < 1e-9);
        assert!((m.pos.y - 103.0).abs() < 1e-9);
        assert!((m.alpha - 0.994).abs() < 1e-12);
    }

    #[test]
    fn fades_out_after_167_frames() {
        let bounds = DVec2::new(1.0e6, 1.0e6);
        let mut m = meteor_at(DVec2::new(0.0, 0.0));
        for frame in 1..=166 {
            assert!(m.tick(bounds), "meteor died early at frame {}", frame);
        }
        assert!(m.alpha > 0.0);
        assert!(!m.tick(bounds), "alpha {} should be spent", m.alpha);
    }

    #[test]
    fn removed_below_bottom_edge_even_when_visible() {
        let bounds = DVec2::new(800.0, 600.0);
        // One frame away from y > height + length
        let mut m = meteor_at(DVec2::new(100.0, 600.0 + 40.0 - 1.0));
        m.angle = FRAC_PI_2;
        assert!(!m.tick(bounds));
        assert!(m.alpha > 0.0);
    }

    #[test]
    fn removed_past_right_edge() {
        let bounds = DVec2::new(800.0, 600.0);
        let mut m = meteor_at(DVec2::new(800.0 + 40.0, 100.0));
        m.angle = 0.0;
        assert!(!m.tick(bounds));
    }

    #[test]
    fn step_returns_none_once_spent() {
        let bounds = DVec2::new(800.0, 600.0);
        let mut m = meteor_at(DVec2::new(10.0, 10.0));
        m.alpha = 0.004;
        assert!(m.clone().step(bounds).is_none());
        m.alpha = 1.0;
        let next = m.step(bounds).unwrap();
        assert_eq!(next.id, MeteorId(1));
    }

    #[test]
    fn tail_trails_behind_head() {
        let mut m = meteor_at(DVec2::new(100.0, 100.0));
        m.angle = 0.0;
        let tail = m.tail();
        assert!((tail.x - 60.0).abs() < 1e-9);
        assert!((tail.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn draw_is_scoped_by_save_restore() {
        let m = meteor_at(DVec2::new(50.0, 50.0));
        let mut surface = RecordingSurface::new();
        m.draw(&mut surface, &BackgroundConfig::default());
        let cmds = surface.commands();
        assert_eq!(cmds.first(), Some(&DrawCommand::Save));
        assert_eq!(cmds.last(), Some(&DrawCommand::Restore));
        assert!(cmds.contains(&DrawCommand::GlobalAlpha(1.0)));
        assert!(cmds.contains(&DrawCommand::MoveTo { x: 50.0, y: 50.0 }));
        assert_eq!(surface.count(|c| *c == DrawCommand::Stroke), 1);
    }
}
