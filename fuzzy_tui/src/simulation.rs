//! Engagement simulation utilities

use fuzzy_core::{FuzzyResult, WeaponSystem};
use rand::Rng;

/// Closest and furthest the target may wander
pub const MIN_DISTANCE: f64 = 0.0;
pub const MAX_DISTANCE: f64 = 600.0;

/// Run an engagement against a target drifting at random
pub struct EngagementSimulation {
    pub total_time: f64,
    pub shots: u32,
    pub switches: u32,
    pub pickups: u32,
    pub final_distance: f64,
    /// Seconds each weapon spent in hand, in carry order
    pub time_in_hand: Vec<(String, f64)>,
    pub log: Vec<String>,
}

impl EngagementSimulation {
    /// Simulate `duration` seconds in steps of `step`
    ///
    /// Every step the target moves up to `max_drift` units, the system picks
    /// its most desirable weapon and fires it if it is ready. Now and then a
    /// few rounds are picked up for a random weapon.
    pub fn run(
        system: &mut WeaponSystem,
        start_distance: f64,
        duration: f64,
        step: f64,
        max_drift: f64,
        rng: &mut impl Rng,
    ) -> FuzzyResult<Self> {
        let mut result = EngagementSimulation {
            total_time: 0.0,
            shots: 0,
            switches: 0,
            pickups: 0,
            final_distance: start_distance,
            time_in_hand: system
                .weapons()
                .iter()
                .map(|w| (w.id().to_string(), 0.0))
                .collect(),
            log: Vec::new(),
        };

        let step = step.max(0.01);
        let mut distance = start_distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        let mut time = 0.0;
        let mut in_hand = system.current().map(|w| w.id().to_string());

        while time < duration {
            if max_drift > 0.0 {
                distance = (distance + rng.gen_range(-max_drift..=max_drift))
                    .clamp(MIN_DISTANCE, MAX_DISTANCE);
            }

            if !system.weapons().is_empty() && rng.gen_bool(0.05) {
                let index = rng.gen_range(0..system.weapons().len());
                let id = system.weapons()[index].id().to_string();
                if let Some(weapon) = system.weapon_mut(&id) {
                    if !weapon.has_infinite_ammo() {
                        weapon.add_rounds(5);
                        result.pickups += 1;
                        result.log.push(format!("[{:.1}s] Picked up rounds for {}", time, weapon.name()));
                    }
                }
            }

            let picked = system
                .select_weapon(distance)?
                .map(|w| (w.id().to_string(), w.name().to_string(), w.last_desirability()));

            if let Some((id, name, score)) = picked {
                if in_hand.as_deref() != Some(id.as_str()) {
                    result.switches += 1;
                    result.log.push(format!(
                        "[{:.1}s] Switched to {} at {:.0} units (score {:.1})",
                        time, name, distance, score
                    ));
                    in_hand = Some(id.clone());
                }

                if let Some((_, secs)) = result.time_in_hand.iter_mut().find(|(w, _)| *w == id) {
                    *secs += step;
                }

                if score > 0.0 && system.shoot_at(time) {
                    result.shots += 1;
                }
            }

            time += step;
        }

        result.total_time = time.min(duration);
        result.final_distance = distance;
        Ok(result)
    }

    /// Shots per second over the whole engagement
    pub fn fire_rate(&self) -> f64 {
        if self.total_time > 0.0 {
            self.shots as f64 / self.total_time
        } else {
            0.0
        }
    }
}
