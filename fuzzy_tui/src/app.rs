//! Application state

use crate::simulation::EngagementSimulation;
use fuzzy_core::{
    config::ConfigError, default_weapons, DefuzzifyMethod, EngineConstants, FuzzyError, Weapon,
    WeaponSystem,
};
use rand::SeedableRng;
use thiserror::Error;

/// Distance change per key press
const DISTANCE_STEP: f64 = 10.0;
/// Furthest distance the inputs can be dialled to
const MAX_DISTANCE: f64 = 1000.0;
/// Seed for the engagement simulation
const SIMULATION_SEED: u64 = 42;
/// Oldest events are dropped past this many lines
const MAX_LOG_LINES: usize = 200;

/// Errors that stop the explorer from starting or running
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Scoring,
    Sets,
    Rules,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Scoring, Tab::Sets, Tab::Rules, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Scoring => "Scoring",
            Tab::Sets => "Sets",
            Tab::Rules => "Rules",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub system: WeaponSystem,
    /// Weapon shown in the Sets and Rules tabs
    pub inspected: usize,
    pub distance: f64,
    pub method: DefuzzifyMethod,
    pub event_log: Vec<String>,
    pub log_scroll: usize,
    pub detail_scroll: usize,
    pub time_elapsed: f64,
    pub rng: rand::rngs::StdRng,
    pub show_help: bool,
    pub last_simulation: Option<EngagementSimulation>,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        let constants = EngineConstants::default();
        let system = WeaponSystem::from_configs(&default_weapons()?, &constants)?;
        Self::with_system(system)
    }

    /// Start from an existing weapon system and score it at 150 units
    pub fn with_system(system: WeaponSystem) -> Result<Self, AppError> {
        let method = system
            .weapons()
            .first()
            .map(Weapon::method)
            .unwrap_or_default();

        let mut app = App {
            current_tab: Tab::Scoring,
            system,
            inspected: 0,
            distance: 150.0,
            method,
            event_log: vec!["Ready. Use ←/→ to move the target, ↑/↓ to change ammo.".to_string()],
            log_scroll: 0,
            detail_scroll: 0,
            time_elapsed: 0.0,
            rng: rand::rngs::StdRng::seed_from_u64(SIMULATION_SEED),
            show_help: false,
            last_simulation: None,
        };
        app.rescore()?;
        Ok(app)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    /// The weapon shown in the Sets and Rules tabs
    pub fn inspected_weapon(&self) -> Option<&Weapon> {
        self.system.weapons().get(self.inspected)
    }

    pub fn on_up(&mut self) -> Result<(), AppError> {
        match self.current_tab {
            Tab::Scoring => self.change_rounds(1),
            Tab::Sets | Tab::Rules => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
                Ok(())
            }
            Tab::Help => Ok(()),
        }
    }

    pub fn on_down(&mut self) -> Result<(), AppError> {
        match self.current_tab {
            Tab::Scoring => self.change_rounds(-1),
            Tab::Sets | Tab::Rules => {
                if self.detail_scroll + 1 < self.detail_len() {
                    self.detail_scroll += 1;
                }
                Ok(())
            }
            Tab::Help => Ok(()),
        }
    }

    pub fn on_left(&mut self) -> Result<(), AppError> {
        self.set_distance(self.distance - DISTANCE_STEP)
    }

    pub fn on_right(&mut self) -> Result<(), AppError> {
        self.set_distance(self.distance + DISTANCE_STEP)
    }

    pub fn set_distance(&mut self, distance: f64) -> Result<(), AppError> {
        self.distance = distance.clamp(0.0, MAX_DISTANCE);
        self.rescore()
    }

    /// Cycle the weapon shown in the Sets and Rules tabs
    pub fn next_weapon(&mut self) {
        let count = self.system.weapons().len();
        if count > 0 {
            self.inspected = (self.inspected + 1) % count;
            self.detail_scroll = 0;
        }
    }

    /// Lines in the Sets or Rules tab for the inspected weapon
    pub fn detail_len(&self) -> usize {
        let Some(weapon) = self.inspected_weapon() else {
            return 0;
        };
        match self.current_tab {
            // Header, column titles, one line per set and a blank per variable, then the score
            Tab::Sets => {
                weapon
                    .module()
                    .variables()
                    .iter()
                    .map(|v| v.len() + 3)
                    .sum::<usize>()
                    + 1
            }
            Tab::Rules => weapon.module().rules().len(),
            _ => 0,
        }
    }

    /// Add or remove rounds on the inspected weapon
    pub fn change_rounds(&mut self, delta: i64) -> Result<(), AppError> {
        let Some(id) = self.inspected_weapon().map(|w| w.id().to_string()) else {
            return Ok(());
        };
        if let Some(weapon) = self.system.weapon_mut(&id) {
            let rounds = (i64::from(weapon.rounds_left()) + delta).max(0);
            weapon.set_rounds(u32::try_from(rounds).unwrap_or(u32::MAX));
        }
        self.rescore()
    }

    /// Switch every weapon to the next defuzzification method
    pub fn toggle_method(&mut self) -> Result<(), AppError> {
        let methods = DefuzzifyMethod::all();
        let idx = methods.iter().position(|m| *m == self.method).unwrap_or(0);
        self.method = methods[(idx + 1) % methods.len()];

        for id in self.weapon_ids() {
            if let Some(weapon) = self.system.weapon_mut(&id) {
                weapon.set_method(self.method);
            }
        }
        self.log(format!("Defuzzifying with {}", self.method.name()));
        self.rescore()
    }

    /// Fire the weapon in hand at the current time
    pub fn fire(&mut self) -> Result<(), AppError> {
        let now = self.time_elapsed;
        if self.system.shoot_at(now) {
            if let Some(weapon) = self.system.current() {
                let msg = format!(
                    "[{:.1}s] {} fired ({} rounds left)",
                    now,
                    weapon.name(),
                    ammo_label(weapon)
                );
                self.log(msg);
            }
        } else {
            self.log(format!("[{:.1}s] Not ready to fire", now));
        }
        self.rescore()
    }

    pub fn tick_time(&mut self, seconds: f64) {
        self.time_elapsed += seconds;
    }

    /// Run a 30 second engagement on a copy of the weapons
    pub fn simulate(&mut self) -> Result<(), AppError> {
        let mut system = self.system.clone();
        let result = EngagementSimulation::run(&mut system, self.distance, 30.0, 0.1, 15.0, &mut self.rng)?;

        self.log(format!(
            "━━━ Engagement from {:.0} units: {} shots, {} switches, {} pickups ━━━",
            self.distance, result.shots, result.switches, result.pickups
        ));
        for line in &result.log {
            self.event_log.push(format!("  {}", line));
        }
        for (id, secs) in &result.time_in_hand {
            self.event_log.push(format!("  {}: {:.1}s in hand", id, secs));
        }
        self.scroll_log_to_end();
        self.last_simulation = Some(result);
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), AppError> {
        let inspected = self.inspected;
        let method = self.method;
        *self = Self::new()?;
        self.inspected = inspected.min(self.system.weapons().len().saturating_sub(1));
        if method != self.method {
            self.toggle_method()?;
        }
        self.event_log.clear();
        self.log("Weapons reset.".to_string());
        Ok(())
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    /// Re-score every weapon at the current distance and pick the best
    pub fn rescore(&mut self) -> Result<(), AppError> {
        let before = self.system.current().map(|w| w.id().to_string());
        let picked = self
            .system
            .select_weapon(self.distance)?
            .map(|w| (w.id().to_string(), w.name().to_string(), w.last_desirability()));

        if let Some((id, name, score)) = picked {
            if before.as_deref() != Some(id.as_str()) {
                self.log(format!(
                    "Switched to {} at {:.0} units (score {:.1})",
                    name, self.distance, score
                ));
            }
        }
        Ok(())
    }

    fn weapon_ids(&self) -> Vec<String> {
        self.system.weapons().iter().map(|w| w.id().to_string()).collect()
    }

    fn log(&mut self, line: String) {
        self.event_log.push(line);
        self.scroll_log_to_end();
    }

    fn scroll_log_to_end(&mut self) {
        if self.event_log.len() > MAX_LOG_LINES {
            let excess = self.event_log.len() - MAX_LOG_LINES;
            self.event_log.drain(..excess);
        }
        self.log_scroll = self.event_log.len().saturating_sub(15);
    }
}

/// Rounds left, or `∞` for weapons that never run dry
pub fn ammo_label(weapon: &Weapon) -> String {
    if weapon.has_infinite_ammo() {
        "∞".to_string()
    } else {
        weapon.rounds_left().to_string()
    }
}
