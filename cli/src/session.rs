use chrono::prelude::*;
use minefield_core as game;

/// The elapsed counter stops here, it only has three digits.
pub(crate) const MAX_ELAPSED_SECS: u32 = 999;

/// A running game plus the wall-clock bookkeeping the engine leaves out.
#[derive(Debug)]
pub(crate) struct GameSession {
    pub game: game::Game,
    pub seed: u64,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn new(config: game::GameConfig, seed: u64) -> game::Result<Self> {
        log::info!("New game, seed {}", seed);
        Ok(Self {
            game: game::Game::new(config, seed)?,
            seed,
            started_at: None,
            ended_at: None,
        })
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            let secs = (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0);
            secs.min(MAX_ELAPSED_SECS.into()) as u32
        } else {
            0
        }
    }

    pub fn primary_action(
        &mut self,
        coords: game::Coord2,
        now: DateTime<Utc>,
    ) -> game::Result<game::RevealOutcome> {
        let outcome = self.game.primary_action(coords)?;
        self.update_clock(now);
        Ok(outcome)
    }

    pub fn secondary_action(
        &mut self,
        coords: game::Coord2,
        now: DateTime<Utc>,
    ) -> game::Result<game::SecondaryOutcome> {
        let outcome = self.game.secondary_action(coords)?;
        self.update_clock(now);
        Ok(outcome)
    }

    /// Starts the clock on the first reveal and stops it once the game ends.
    fn update_clock(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() && self.game.outcome().is_started() {
            log::debug!("started at {}", now);
            self.started_at = Some(now);
        }
        if self.ended_at.is_none() && self.game.is_finished() {
            log::debug!("ended at {}", now);
            self.ended_at = Some(now);
        }
    }
}
