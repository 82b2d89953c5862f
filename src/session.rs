//! Click-driven selection of a source and a destination city.
//!
//! The session only tracks state. Drawing labels, highlighting the path and
//! reading mouse input are left to the caller, which reacts to the returned
//! [`SessionEvent`]s.

use tracing::{debug, info};

use crate::{
    error::{MapError, Result},
    graphs::{path::Path, CityId, RoadGraph},
    search::{describe::describe, dijkstra::find_path, WeightSelector},
};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    AwaitingSource,
    AwaitingDestination {
        source: CityId,
    },
    Searching {
        source: CityId,
        destination: CityId,
    },
    Done {
        source: CityId,
        destination: CityId,
        path: Option<Path>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SourceSelected(CityId),
    DestinationSelected(CityId),
    Reset,
    Ignored,
}

pub struct ClickSession<'a> {
    graph: &'a RoadGraph,
    selector: WeightSelector,
    state: SessionState,
}

impl<'a> ClickSession<'a> {
    pub fn new(graph: &'a RoadGraph, selector: WeightSelector) -> ClickSession<'a> {
        ClickSession {
            graph,
            selector,
            state: SessionState::AwaitingSource,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingSource;
    }

    /// Handles a released mouse button at pixel `(x, y)`.
    pub fn click(&mut self, x: i32, y: i32) -> SessionEvent {
        let event = match self.state {
            SessionState::AwaitingSource => match self.graph.closest_city(x, y) {
                Some(source) => {
                    self.state = SessionState::AwaitingDestination { source };
                    SessionEvent::SourceSelected(source)
                }
                None => SessionEvent::Ignored,
            },
            SessionState::AwaitingDestination { source } => match self.graph.closest_city(x, y) {
                Some(destination) => {
                    self.state = SessionState::Searching {
                        source,
                        destination,
                    };
                    SessionEvent::DestinationSelected(destination)
                }
                None => SessionEvent::Ignored,
            },
            SessionState::Searching { .. } => SessionEvent::Ignored,
            SessionState::Done { .. } => {
                self.reset();
                SessionEvent::Reset
            }
        };

        debug!("click at ({}, {}): {:?}", x, y, event);
        event
    }

    /// Searches between the selected cities and moves to `Done`.
    pub fn run_search(&mut self) -> Result<Option<&Path>> {
        let SessionState::Searching {
            source,
            destination,
        } = self.state
        else {
            return Err(MapError::InvalidState(format!(
                "search requested while {:?}",
                self.state
            )));
        };

        let path = find_path(self.graph, source, destination, self.selector)?;
        info!(
            "searched {} -> {}: {}",
            source,
            destination,
            match &path {
                Some(path) => format!("{} edges", path.len()),
                None => "no path".to_string(),
            }
        );

        self.state = SessionState::Done {
            source,
            destination,
            path,
        };

        match &self.state {
            SessionState::Done { path, .. } => Ok(path.as_ref()),
            _ => Ok(None),
        }
    }

    /// Description of the finished search.
    pub fn description(&self) -> Result<String> {
        match &self.state {
            SessionState::Done { source, path, .. } => describe(self.graph, path.as_ref(), *source),
            state => Err(MapError::InvalidState(format!(
                "no finished search while {:?}",
                state
            ))),
        }
    }
}
