//! `RouteMap`: shortest road route between two cities.
//!
//! Roads are undirected and weighted by distance. The `straight_line`
//! heuristic is the straight-line distance from a city to the goal, supplied
//! with the map; it never exceeds the road distance, so A* with it is
//! cost-optimal.

use thiserror::Error;
use wayfind_search::problem::Problem;

use crate::contract::SearchWorld;

const HEURISTICS: &[&str] = &["straight_line"];

/// Cities of the Romania road map with their straight-line distance to
/// Bucharest.
const ROMANIA_CITIES: &[(&str, f64)] = &[
    ("Arad", 366.0),
    ("Bucharest", 0.0),
    ("Craiova", 160.0),
    ("Drobeta", 242.0),
    ("Eforie", 161.0),
    ("Fagaras", 176.0),
    ("Giurgiu", 77.0),
    ("Hirsova", 151.0),
    ("Iasi", 226.0),
    ("Lugoj", 244.0),
    ("Mehadia", 241.0),
    ("Neamt", 234.0),
    ("Oradea", 380.0),
    ("Pitesti", 100.0),
    ("RimnicuVilcea", 193.0),
    ("Sibiu", 253.0),
    ("Timisoara", 329.0),
    ("Urziceni", 80.0),
    ("Vaslui", 199.0),
    ("Zerind", 374.0),
];

const ROMANIA_ROADS: &[(&str, &str, f64)] = &[
    ("Arad", "Zerind", 75.0),
    ("Arad", "Timisoara", 118.0),
    ("Arad", "Sibiu", 140.0),
    ("Zerind", "Oradea", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Drobeta", 75.0),
    ("Drobeta", "Craiova", 120.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Sibiu", "RimnicuVilcea", 80.0),
    ("RimnicuVilcea", "Pitesti", 97.0),
    ("RimnicuVilcea", "Craiova", 146.0),
    ("Craiova", "Pitesti", 138.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Bucharest", "Giurgiu", 90.0),
    ("Bucharest", "Urziceni", 85.0),
    ("Urziceni", "Hirsova", 98.0),
    ("Hirsova", "Eforie", 86.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Vaslui", "Iasi", 92.0),
    ("Iasi", "Neamt", 87.0),
];

/// Typed failure for map construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteMapError {
    /// A road or endpoint names a city the map does not declare.
    #[error("unknown city: {name}")]
    UnknownCity { name: String },
    /// A distance is negative or not finite.
    #[error("invalid distance {distance} on road {from} - {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
}

/// An undirected weighted road map with a fixed start and goal city.
///
/// Cities are identified by their index in declaration order; successors
/// follow road declaration order.
#[derive(Debug, Clone)]
pub struct RouteMap {
    cities: Vec<String>,
    straight_line: Vec<f64>,
    roads: Vec<Vec<(usize, f64)>>,
    start: usize,
    goal: usize,
}

impl RouteMap {
    /// Build a map from `(city, straight-line distance to goal)` pairs and
    /// `(from, to, distance)` roads.
    ///
    /// # Errors
    ///
    /// Returns [`RouteMapError`] if a road or endpoint names an undeclared
    /// city, or a distance is negative or not finite.
    pub fn new(
        cities: &[(&str, f64)],
        roads: &[(&str, &str, f64)],
        start: &str,
        goal: &str,
    ) -> Result<Self, RouteMapError> {
        let names: Vec<String> = cities.iter().map(|(name, _)| (*name).to_string()).collect();
        let straight_line = cities.iter().map(|(_, sld)| *sld).collect();
        let index = |name: &str| {
            names
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| RouteMapError::UnknownCity { name: name.into() })
        };

        let mut adjacency = vec![Vec::new(); names.len()];
        for &(from, to, distance) in roads {
            if !(distance.is_finite() && distance >= 0.0) {
                return Err(RouteMapError::InvalidDistance {
                    from: from.into(),
                    to: to.into(),
                    distance,
                });
            }
            let (a, b) = (index(from)?, index(to)?);
            adjacency[a].push((b, distance));
            adjacency[b].push((a, distance));
        }

        let start = index(start)?;
        let goal = index(goal)?;
        Ok(Self {
            cities: names,
            straight_line,
            roads: adjacency,
            start,
            goal,
        })
    }

    /// The Romania road map from `start` to Bucharest.
    ///
    /// # Errors
    ///
    /// Returns [`RouteMapError::UnknownCity`] if `start` is not on the map.
    pub fn romania(start: &str) -> Result<Self, RouteMapError> {
        Self::new(ROMANIA_CITIES, ROMANIA_ROADS, start, "Bucharest")
    }

    /// Index of the city called `name`.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<usize> {
        self.cities.iter().position(|c| c == name)
    }

    /// Name of the city at `index`.
    #[must_use]
    pub fn city_name(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.roads
            .get(from)?
            .iter()
            .find(|(city, _)| *city == to)
            .map(|(_, d)| *d)
    }
}

impl Problem for RouteMap {
    type State = usize;
    /// The city to drive to.
    type Action = usize;

    fn initial_state(&self) -> usize {
        self.start
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        self.roads
            .get(*state)
            .map(|roads| roads.iter().map(|(city, _)| *city).collect())
            .unwrap_or_default()
    }

    fn result(&self, _state: &usize, action: &usize) -> usize {
        *action
    }

    /// Distance of the road driven. Actions only come from
    /// [`Problem::actions`], so the road exists; asking for a missing one is
    /// a caller bug and trips a debug assertion.
    fn step_cost(&self, from: &usize, _action: &usize, to: &usize) -> f64 {
        let distance = self.distance(*from, *to);
        debug_assert!(distance.is_some(), "no road from city {from} to city {to}");
        distance.unwrap_or(f64::INFINITY)
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }
}

impl SearchWorld for RouteMap {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "route_map"
    }

    fn heuristics(&self) -> &[&'static str] {
        HEURISTICS
    }

    fn estimate(&self, name: &str, state: &usize) -> Option<f64> {
        match name {
            "straight_line" => self.straight_line.get(*state).copied(),
            _ => None,
        }
    }

    fn render_action(&self, action: &usize) -> String {
        format!("Go({})", self.render_state(action))
    }

    fn render_state(&self, state: &usize) -> String {
        self.city_name(*state).unwrap_or("?").to_string()
    }
}
