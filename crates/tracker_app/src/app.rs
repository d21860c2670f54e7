use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracker_core::{update, ListingState, Msg, PortfolioStats};
use tracker_engine::{
    ApiClient, EngineEvent, EngineHandle, Listed, ListingFetcher, ReqwestListingFetcher,
};
use tracker_logging::{tracker_debug, tracker_info, tracker_warn};

use crate::effects::EffectRunner;
use crate::input::{parse_command, to_msg, Command, HELP};
use crate::render::{render_listing, render_stats, TableRow};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs one listing until the user quits or stdin closes.
///
/// All state changes happen on this thread; fetches run on the engine's
/// runtime and come back as events between input polls.
pub fn run_listing<T>(client: Arc<ApiClient>, with_stats: bool) -> anyhow::Result<()>
where
    T: Listed + TableRow,
{
    let fetcher: Arc<dyn ListingFetcher<T>> =
        Arc::new(ReqwestListingFetcher::<T>::new(client.clone()));
    let engine = EngineHandle::new(client, fetcher).context("starting fetch engine")?;
    let mut session = Session::new(EffectRunner::new(engine));

    let (line_tx, line_rx) = mpsc::channel::<String>();
    spawn_input_reader(line_tx);

    println!("{HELP}");
    session.dispatch(Msg::Mounted);
    if with_stats {
        session.runner.engine().load_stats();
    }

    loop {
        while let Some(event) = session.runner.engine().try_recv() {
            session.handle_engine_event(event);
        }

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => println!("{HELP}"),
                Ok(command) => match to_msg(command, &session.state.view()) {
                    Ok(msg) => session.dispatch(msg),
                    Err(note) => println!("{note}"),
                },
                Err(note) => println!("{note}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracker_info!("Listing closed at seq={}", session.state.current_seq());
    Ok(())
}

struct Session<T> {
    state: ListingState<T>,
    stats: Option<PortfolioStats>,
    runner: EffectRunner<T>,
}

impl<T> Session<T>
where
    T: Listed + TableRow,
{
    fn new(runner: EffectRunner<T>) -> Self {
        Self {
            state: ListingState::new(),
            stats: None,
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg<T>) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for alert in self.runner.run(effects) {
            println!("error: {alert}");
        }
        if self.state.consume_dirty() {
            self.render();
        }
    }

    fn handle_engine_event(&mut self, event: EngineEvent<T>) {
        match event {
            EngineEvent::FetchCompleted { request, outcome } => {
                if request.seq != self.state.current_seq() {
                    tracker_debug!(
                        "Discarding stale outcome seq={} (current {})",
                        request.seq,
                        self.state.current_seq()
                    );
                }
                self.dispatch(Msg::FetchCompleted { request, outcome });
            }
            EngineEvent::StatsLoaded(Ok(stats)) => {
                self.stats = Some(stats);
                self.render();
            }
            EngineEvent::StatsLoaded(Err(reason)) => {
                tracker_warn!("Portfolio stats failed: {}", reason);
                println!("Couldn't fetch portfolio stats.");
            }
        }
    }

    fn render(&self) {
        let mut lines = Vec::new();
        if let Some(stats) = &self.stats {
            lines.extend(render_stats(stats));
            lines.push(String::new());
        }
        lines.extend(render_listing(&self.state.view()));
        println!();
        for line in lines {
            println!("{line}");
        }
    }
}

fn spawn_input_reader(line_tx: mpsc::Sender<String>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
}
