use tracker_core::Effect;
use tracker_engine::EngineHandle;
use tracker_logging::{tracker_info, tracker_warn};

pub struct EffectRunner<T> {
    engine: EngineHandle<T>,
}

impl<T: Send + 'static> EffectRunner<T> {
    pub fn new(engine: EngineHandle<T>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &EngineHandle<T> {
        &self.engine
    }

    /// Executes effects and returns any messages meant for the user.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut alerts = Vec::new();
        for effect in effects {
            match effect {
                Effect::Fetch(request) => {
                    tracker_info!(
                        "Fetch seq={} page={} term_len={}",
                        request.seq,
                        request.page,
                        request.term.len()
                    );
                    self.engine.fetch(request);
                }
                Effect::ReportFailure { reason } => {
                    tracker_warn!("Listing fetch failed: {}", reason);
                    if let Some(message) = reason.server_message() {
                        alerts.push(message.to_string());
                    }
                }
            }
        }
        alerts
    }
}
