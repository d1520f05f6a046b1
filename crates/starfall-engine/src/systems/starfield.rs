use crate::api::config::BackgroundConfig;
use crate::components::star::Star;
use crate::core::rng::RandomSource;
use crate::renderer::traits::{Color, Surface};

/// Replace `stars` with a fresh batch of `config.star_count` stars for the given surface size.
/// Reuses the existing allocation.
pub fn generate_star_field(
    stars: &mut Vec<Star>,
    rng: &mut impl RandomSource,
    width: f64,
    height: f64,
    config: &BackgroundConfig,
) {
    stars.clear();
    stars.extend((0..config.star_count).map(|_| Star::random(rng, width, height, config)));
}

/// Draw every star with a single fill style. Returns the number of stars drawn.
pub fn draw_star_field(stars: &[Star], surface: &mut impl Surface, color: Color) -> usize {
    surface.set_fill_style(color);
    for star in stars {
        star.draw(surface);
    }
    stars.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn generates_configured_count() {
        let mut rng = Rng::new(42);
        let mut stars = Vec::new();
        generate_star_field(&mut stars, &mut rng, 800.0, 600.0, &BackgroundConfig::default());
        assert_eq!(stars.len(), 150);
    }

    #[test]
    fn regeneration_replaces_previous_batch() {
        let mut rng = Rng::new(42);
        let config = BackgroundConfig::default();
        let mut stars = Vec::new();
        generate_star_field(&mut stars, &mut rng, 1920.0, 1080.0, &config);
        generate_star_field(&mut stars, &mut rng, 100.0, 50.0, &config);
        assert_eq!(stars.len(), 150);
        assert!(stars.iter().all(|s| s.pos.x < 100.0 && s.pos.y < 50.0));
    }

    #[test]
    fn draw_sets_fill_once_then_one_arc_per_star() {
        let mut rng = Rng::new(7);
        let config = BackgroundConfig { star_count: 5, ..Default::default() };
        let mut stars = Vec::new();
        generate_star_field(&mut stars, &mut rng, 100.0, 100.0, &config);

        let mut surface = RecordingSurface::new();
        let drawn = draw_star_field(&stars, &mut surface, Color::WHITE);

        assert_eq!(drawn, 5);
        assert_eq!(surface.commands()[0], DrawCommand::FillStyle(Color::WHITE));
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::FillStyle(_))), 1);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Arc { .. })), 5);
        assert_eq!(surface.count(|c| *c == DrawCommand::Fill), 5);
    }
}
