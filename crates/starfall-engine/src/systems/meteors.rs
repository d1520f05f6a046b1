use glam::DVec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::MeteorId;
use crate::components::meteor::Meteor;
use crate::renderer::traits::Surface;

/// Spawn gate: the interval has strictly elapsed since the last spawn and the set is below its cap.
pub fn should_spawn(now_ms: f64, last_spawn_ms: f64, active: usize, config: &BackgroundConfig) -> bool {
    now_ms - last_spawn_ms > config.spawn_interval_ms && active < config.max_meteors
}

/// Advance, cull and draw every meteor in one pass.
///
/// Spent meteors are dropped before drawing, so nothing is ever drawn with
/// alpha <= 0. Survivors keep their creation order. Ids of removed meteors
/// are appended to `despawned`. Returns the number of meteors drawn.
pub fn tick_meteors(
    meteors: &mut Vec<Meteor>,
    bounds: DVec2,
    surface: &mut impl Surface,
    config: &BackgroundConfig,
    despawned: &mut Vec<MeteorId>,
) -> usize {
    let mut drawn = 0;
    meteors.retain_mut(|meteor| {
        if !meteor.tick(bounds) {
            log::trace!("meteor {:?} despawned at {:?} (alpha {:.3})", meteor.id, meteor.pos, meteor.alpha);
            despawned.push(meteor.id);
            return false;
        }
        meteor.draw(surface, config);
        drawn += 1;
        true
    });
    drawn
}
