use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use dashnav_core::{update, AppState, Msg};
use dashnav_engine::{EngineEvent, EngineEvents, EngineHandle, FetchSettings, ReqwestFetcher};
use engine_logging::{engine_info, engine_warn};
use log::LevelFilter;

use super::config::{self, Cli, FileConfig, Settings};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

/// How long `quit` waits for in-flight loads before leaving anyway.
const QUIT_GRACE: Duration = Duration::from_secs(2);

/// Everything the single UI loop reacts to.
enum HostEvent {
    Command(Command),
    Invalid(String),
    Engine(EngineEvent),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (file_config, config_error) = match config::load_file_config(&cli.config) {
        Ok(file) => (file.unwrap_or_default(), None),
        Err(err) => (FileConfig::default(), Some(err)),
    };
    let settings = Settings::resolve(cli, file_config);

    logging::initialize(settings.log, LevelFilter::Info);
    if let Some(err) = config_error {
        engine_warn!("Ignoring config file: {:#}", err);
    }
    engine_info!("dashnav starting against {}", settings.base_url);

    let fetcher = ReqwestFetcher::new(
        &settings.base_url,
        FetchSettings {
            connect_timeout: None,
            request_timeout: settings.request_timeout,
        },
    )
    .with_context(|| format!("invalid base url {}", settings.base_url))?;
    let (engine, events) = EngineHandle::new(Arc::new(fetcher)).context("starting engine")?;

    let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
    spawn_input_reader(host_tx.clone())?;
    spawn_engine_pump(events, host_tx)?;

    let mut host = Host {
        state: AppState::with_nav(settings.nav, settings.capabilities),
        runner: EffectRunner::new(engine),
        out: io::stdout(),
    };
    host.dispatch(Msg::PageReady {
        fragment: settings.fragment,
    })?;

    let mut shutdown = Shutdown::default();
    loop {
        let event = match shutdown.remaining(Instant::now()) {
            None => match host_rx.recv() {
                Ok(event) => event,
                Err(_) => break,
            },
            Some(wait) => match host_rx.recv_timeout(wait) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => {
                    engine_warn!(
                        "leaving with {} load(s) still in flight",
                        host.runner.in_flight()
                    );
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            },
        };
        match event {
            HostEvent::Engine(event) => {
                let msg = host.runner.complete(event);
                host.dispatch(msg)?;
            }
            HostEvent::Command(Command::Dispatch(msg)) => host.dispatch(msg)?,
            HostEvent::Command(Command::Show) => host.render()?,
            HostEvent::Command(Command::Help) => host.print(HELP)?,
            HostEvent::Command(Command::Quit) | HostEvent::InputClosed => {
                shutdown.request(Instant::now())
            }
            HostEvent::Invalid(err) => host.print(&err)?,
        }
        if shutdown.should_exit(host.runner.in_flight(), Instant::now()) {
            break;
        }
    }

    engine_info!("dashnav exiting at #{}", host.state.fragment());
    Ok(())
}

/// Exit condition of the host loop: once quit is requested, leave as soon
/// as no load is pending or the grace period is over.
#[derive(Debug, Default)]
struct Shutdown {
    deadline: Option<Instant>,
}

impl Shutdown {
    fn request(&mut self, now: Instant) {
        self.deadline.get_or_insert(now + QUIT_GRACE);
    }

    /// Time left before giving up on pending loads; `None` until requested.
    fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn should_exit(&self, in_flight: usize, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) => in_flight == 0 || now >= deadline,
            None => false,
        }
    }
}

struct Host {
    state: AppState,
    runner: EffectRunner,
    out: io::Stdout,
}

impl Host {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let text = render(&self.state.view());
        let mut out = self.out.lock();
        writeln!(out, "{text}")?;
        out.flush()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

fn spawn_input_reader(tx: mpsc::Sender<HostEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("dashnav-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let event = match parse_command(&line) {
                    Ok(Some(command)) => HostEvent::Command(command),
                    Ok(None) => continue,
                    Err(err) => HostEvent::Invalid(err),
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
            let _ = tx.send(HostEvent::InputClosed);
        })?;
    Ok(())
}

fn spawn_engine_pump(events: EngineEvents, tx: mpsc::Sender<HostEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("dashnav-engine-events".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                if tx.send(HostEvent::Engine(event)).is_err() {
                    return;
                }
            }
        })?;
    Ok(())
}
