// simulation.rs - World plus run state and the generation counter

use tracing::debug;

use crate::error::WorldError;
use crate::grid::World;
use crate::patterns::Pattern;

/// Owns a [`World`], the run/pause flag and the number of generations
/// advanced so far.
///
/// The wrapper never schedules steps on its own; the caller decides when to
/// call [`step`](Self::step), usually based on [`is_running`](Self::is_running).
#[derive(Debug)]
pub struct Simulation {
    world: World,
    running: bool,
    total_iterations: u64,
}

impl Simulation {
    /// An empty, paused simulation of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        Ok(Self {
            world: World::new(width, height)?,
            running: false,
            total_iterations: 0,
        })
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        self.world.step();
        self.total_iterations += 1;
    }

    /// Advances `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
        debug!(n, total = self.total_iterations, "fast-forwarded");
    }

    pub fn randomize(&mut self, types: u8) -> Result<(), WorldError> {
        self.world.randomize(types)
    }

    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) {
        self.world.set_cell(x, y, value);
    }

    /// Empties the world. The generation counter keeps counting.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Sets the pattern's cells alive with its top-left corner at `(x, y)`.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        pattern.place(&mut self.world, x, y);
    }

    pub fn place_pattern_centered(&mut self, pattern: &Pattern) {
        pattern.place_centered(&mut self.world);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    pub fn teardown(self) {
        self.world.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused_at_generation_zero() {
        let sim = Simulation::new(16, 16).unwrap();
        assert!(!sim.is_running());
        assert_eq!(sim.total_iterations(), 0);
        assert_eq!(sim.world().population(), 0);
    }

    #[test]
    fn invalid_size_is_rejected() {
        assert!(Simulation::new(0, 16).is_err());
    }

    #[test]
    fn only_steps_advance_the_counter() {
        let mut sim = Simulation::new(16, 16).unwrap();
        sim.step();
        assert_eq!(sim.total_iterations(), 1);

        sim.set_cell(3, 3, 1);
        sim.randomize(2).unwrap();
        sim.toggle_running();
        sim.clear();
        assert_eq!(sim.total_iterations(), 1);

        sim.step();
        sim.step_n(10);
        assert_eq!(sim.total_iterations(), 12);
    }

    #[test]
    fn placing_patterns_leaves_the_counter_alone() {
        let mut sim = Simulation::new(20, 20).unwrap();
        sim.step();
        let glider = Pattern::find("Glider").unwrap();

        sim.place_pattern(glider, 2, 2);
        sim.place_pattern_centered(Pattern::find("Blinker").unwrap());
        assert_eq!(sim.total_iterations(), 1);
        assert_eq!(sim.world().population(), 8);
        assert_eq!(sim.world().cell(3, 2), Some(1));

        sim.step();
        assert_eq!(sim.total_iterations(), 2);
    }

    #[test]
    fn fill_type_count_survives_a_clear() {
        let mut sim = Simulation::new(8, 8).unwrap();
        assert_eq!(sim.world().types(), crate::CLASSIC_TYPES);
        sim.randomize(3).unwrap();
        sim.clear();
        assert_eq!(sim.world().types(), 3);
    }

    #[test]
    fn running_flag_is_caller_controlled() {
        let mut sim = Simulation::new(4, 4).unwrap();
        sim.toggle_running();
        assert!(sim.is_running());
        sim.step();
        assert!(sim.is_running());
        sim.set_running(false);
        assert!(!sim.is_running());
    }
}
