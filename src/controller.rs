//! The game loop controller: owns the state, the RNG and the timer queue,
//! and drives the pure functions in `compute` from timer callbacks.

use std::time::Duration;

use rand::Rng;

use crate::compute;
use crate::entities::{GameEvent, GameState, GameStatus, Steering, TICK_MS};
use crate::scheduler::Scheduler;

pub const TICK: Duration = Duration::from_millis(TICK_MS);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    Tick,
    Spawn,
}

pub struct Game<R: Rng> {
    state: GameState,
    rng: R,
    timers: Scheduler<Timer>,
}

impl<R: Rng> Game<R> {
    /// Wrap `state` and arm the first tick and the first spawn for `t = 0`.
    pub fn new(state: GameState, rng: R) -> Self {
        let mut timers = Scheduler::new();
        timers.schedule(Duration::ZERO, Duration::ZERO, Timer::Spawn);
        timers.schedule(Duration::ZERO, Duration::ZERO, Timer::Tick);
        Game { state, rng, timers }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }

    /// Earliest pending timer, or `None` once the game has stopped.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// One tick of the update loop; re-arms itself while the game is live.
    pub fn tick(&mut self, now: Duration, steering: Steering) {
        if self.is_over() {
            return;
        }
        self.state = compute::tick(&self.state, steering);
        if self.is_over() {
            self.timers.cancel_all();
        } else {
            self.timers.schedule(now, TICK, Timer::Tick);
        }
    }

    /// Fire-key edge.
    pub fn fire(&mut self) {
        self.state = compute::player_shoot(&self.state);
    }

    /// Spawn one enemy and re-arm with an interval that shrinks with score.
    pub fn spawn_enemy(&mut self, now: Duration) {
        if self.is_over() {
            return;
        }
        self.state = compute::spawn_enemy(&self.state, &mut self.rng);
        let interval = compute::spawn_interval(self.state.score);
        self.timers.schedule(now, interval, Timer::Spawn);
    }

    /// Run every timer due at `now`, in due order.  Returns how many fired.
    pub fn run_due(&mut self, now: Duration, steering: Steering) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                Timer::Tick => self.tick(now, steering),
                Timer::Spawn => self.spawn_enemy(now),
            }
            fired += 1;
        }
        fired
    }

    /// Hand pending events to the frontend.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
