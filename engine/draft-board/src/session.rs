use crate::config::DraftConfig;
use crate::error::Result;
use crate::slot::{RoundId, RoundSlot};
use crate::state::DraftState;
use crate::summary::{self, DraftSummary};
use roster_catalog::{Player, RosterCatalog};
use std::sync::Arc;
use tracing::{info, warn};

/// Draft Session - one user's draft against a shared roster
///
/// Owns its draft state exclusively; the catalog is shared read-only with
/// any other sessions. This is the whole surface the presentation layer
/// talks to: mutate with `assign`/`clear`, then re-render from `summarize`.
#[derive(Debug, Clone)]
pub struct DraftSession {
    config: DraftConfig,
    catalog: Arc<RosterCatalog>,
    state: DraftState,
}

impl DraftSession {
    /// Start a session with every round empty
    pub fn new(catalog: Arc<RosterCatalog>, config: DraftConfig) -> Result<Self> {
        config.validate()?;

        info!(
            "Starting draft session: {} rounds, budget {}, {} players available",
            config.rounds,
            config.initial_budget,
            catalog.len()
        );

        let state = DraftState::new(catalog.clone(), config.rounds);
        Ok(Self { config, catalog, state })
    }

    /// Pick a player for a round, replacing any previous pick
    pub fn assign(&mut self, round: RoundId, name: &str) -> Result<()> {
        match self.state.assign(round, name) {
            Ok(previous) => {
                info!("Round {}: picked '{}'", round, name.trim());
                if let Some(previous) = previous {
                    info!("Round {}: '{}' was replaced", round, previous);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Rejected pick for round {}: {}", round, e);
                Err(e)
            }
        }
    }

    /// Empty a round
    pub fn clear(&mut self, round: RoundId) -> Result<()> {
        match self.state.clear(round) {
            Ok(Some(previous)) => {
                info!("Round {}: cleared '{}'", round, previous);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                warn!("Rejected clear for round {}: {}", round, e);
                Err(e)
            }
        }
    }

    /// Empty every round
    pub fn reset(&mut self) {
        self.state.reset();
        info!("Draft reset");
    }

    /// Fresh budget and composition snapshot
    pub fn summarize(&self) -> DraftSummary {
        let summary = summary::summarize(&self.state, &self.catalog, &self.config);
        if summary.budget.overspend {
            warn!(
                "Budget exceeded: spent {} of {}",
                summary.budget.spend, summary.budget.initial_budget
            );
        }
        summary
    }

    /// Players available for selection, in roster order
    pub fn choices(&self) -> &[Player] {
        self.catalog.all()
    }

    pub fn pick(&self, round: RoundId) -> Option<&str> {
        self.state.get(round)
    }

    pub fn slots(&self) -> &[RoundSlot] {
        self.state.assignments()
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RosterCatalog {
        &self.catalog
    }
}
