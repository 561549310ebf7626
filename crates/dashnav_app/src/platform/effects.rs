use dashnav_core::{Effect, LoadOutcome, Msg, Section};
use dashnav_engine::{EngineEvent, EngineHandle, FetchError, RequestId};
use engine_logging::{engine_error, engine_info};

pub struct EffectRunner {
    engine: EngineHandle,
    next_request: RequestId,
    in_flight: usize,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            next_request: 0,
            in_flight: 0,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetFragment(fragment) => {
                    engine_info!("fragment #{}", fragment);
                    engine_logging::set_route(&fragment);
                }
                Effect::FetchPartial { section, path } => {
                    self.next_request += 1;
                    self.in_flight += 1;
                    engine_info!(
                        "FetchPartial request={} section={} path={} route=#{}",
                        self.next_request,
                        section,
                        path,
                        engine_logging::current_route()
                    );
                    self.engine.fetch(self.next_request, section.as_str(), path);
                }
                Effect::InitTableSort { selector } => {
                    engine_info!("table sorter attached to {}", selector);
                }
                Effect::ReportFailure { section, message } => {
                    engine_error!("loadSection {} error: {}", section, message);
                }
            }
        }
    }

    /// Number of fetches issued whose results have not been dispatched yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Turns a finished fetch into the router message for it.
    pub fn complete(&mut self, event: EngineEvent) -> Msg {
        self.in_flight = self.in_flight.saturating_sub(1);
        let EngineEvent::PartialFetched {
            request_id,
            section,
            path,
            result,
        } = event;

        let outcome = match result {
            Ok(partial) => LoadOutcome::Rendered {
                html: partial.html,
                outline: partial.outline,
            },
            Err(FetchError::HttpStatus(status)) => LoadOutcome::HttpStatus(status),
            Err(err) => {
                engine_error!(
                    "loadSection {} error: request={} path={}: {}",
                    section,
                    request_id,
                    path,
                    err
                );
                LoadOutcome::Failed
            }
        };

        Msg::PartialLoaded {
            section: Section::new(section),
            outcome,
        }
    }
}
