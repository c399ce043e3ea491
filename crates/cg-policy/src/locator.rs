//! Nearest eligible target search.

use cg_core::{PolicyConfig, TeamId, Vec3};

use crate::Target;

/// Linear scan for the closest target a team may pursue.
///
/// The best distance starts at `search_radius`, so anything at or beyond it
/// is never returned.  Comparison is strict: on equal distance the target
/// seen first wins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetLocator {
    pub search_radius: f32,
}

impl Default for TargetLocator {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl TargetLocator {
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self { search_radius: config.search_radius }
    }

    pub fn nearest<'a>(&self, targets: &'a [Target], origin: Vec3, team: TeamId) -> Option<&'a Target> {
        let mut best_distance = self.search_radius;
        let mut best = None;
        for target in targets {
            let distance = target.position.distance(origin);
            if distance < best_distance && target.is_eligible_for(team) {
                best_distance = distance;
                best = Some(target);
            }
        }
        best
    }
}

/// [`TargetLocator::nearest`] with the default 200-unit search radius.
pub fn find_nearest_target(targets: &[Target], origin: Vec3, team: TeamId) -> Option<&Target> {
    TargetLocator::default().nearest(targets, origin, team)
}
