//! World contract: what a domain must provide to be run by the harness.
//!
//! A world is a [`Problem`] plus the metadata the runner needs to build a
//! report: a stable identifier, named heuristics, and human-readable renderings
//! of actions and states. Worlds do NOT pick strategies, hash reports, or write
//! files; those are runner concerns.

use wayfind_search::evaluation::Heuristic;
use wayfind_search::problem::Problem;

/// A searchable domain with reporting metadata.
pub trait SearchWorld: Problem {
    /// Unique world identifier (e.g. `"route_map"`).
    fn world_id(&self) -> &str;

    /// Names of the heuristics [`SearchWorld::estimate`] understands.
    fn heuristics(&self) -> &[&'static str] {
        &[]
    }

    /// Evaluate heuristic `name` at `state`; `None` if the name is unknown.
    fn estimate(&self, name: &str, state: &Self::State) -> Option<f64> {
        let _ = (name, state);
        None
    }

    /// Stable textual form of an action, used in reports.
    fn render_action(&self, action: &Self::Action) -> String;

    /// Stable textual form of a state, used in reports.
    fn render_state(&self, state: &Self::State) -> String;
}

/// A world heuristic resolved by name.
///
/// Only constructible for names the world declares, so evaluation never
/// falls through to an unknown heuristic.
pub struct WorldHeuristic<'w, W> {
    world: &'w W,
    name: &'w str,
}

impl<'w, W: SearchWorld> WorldHeuristic<'w, W> {
    /// Resolve `name` against the world's declared heuristics.
    #[must_use]
    pub fn resolve(world: &'w W, name: &'w str) -> Option<Self> {
        world
            .heuristics()
            .iter()
            .any(|declared| *declared == name)
            .then_some(Self { world, name })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }
}

impl<W> Clone for WorldHeuristic<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for WorldHeuristic<'_, W> {}

impl<W: SearchWorld> Heuristic<W::State> for WorldHeuristic<'_, W> {
    fn h(&self, state: &W::State) -> f64 {
        self.world.estimate(self.name, state).unwrap_or(0.0)
    }
}
