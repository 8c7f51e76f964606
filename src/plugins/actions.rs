//! Side-effecting services behind the inspector controls: clipboard writes
//! and opening external pages.
//!
//! Both services are write-only and best-effort. Failures are logged and
//! counted, never shown to the user and never retried.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};
use std::collections::VecDeque;
use std::process::Command;
use std::sync::{mpsc, Arc};
use std::thread;

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        let clipboard: Arc<dyn ClipboardBackend> = match SystemClipboard::spawn() {
            Ok(clipboard) => Arc::new(clipboard),
            Err(error) => {
                error!("{}", error);
                Arc::new(MissingClipboard)
            }
        };

        app.add_message::<CopyText>()
            .add_message::<OpenUrl>()
            .insert_resource(ClipboardService::new(clipboard))
            .insert_resource(Navigator::new(Arc::new(SystemBrowser)))
            .add_systems(
                Update,
                (dispatch_clipboard_writes, poll_clipboard_writes, dispatch_navigation),
            );
    }
}

// =============================================================================
// Messages
// =============================================================================

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct CopyText {
    pub text: String,
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct OpenUrl {
    pub url: String,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("failed to launch browser for {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Clipboard
// =============================================================================

pub trait ClipboardBackend: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

type ClipboardJob = (String, mpsc::Sender<Result<(), ClipboardError>>);

/// Desktop clipboard. A single writer thread owns the platform handle for the
/// life of the app: X11 only serves clipboard contents while a handle is
/// alive, and the handle is not `Send` on every platform.
pub struct SystemClipboard {
    jobs: mpsc::Sender<ClipboardJob>,
}

impl SystemClipboard {
    pub fn spawn() -> Result<Self, ClipboardError> {
        let (jobs, inbox) = mpsc::channel::<ClipboardJob>();
        thread::Builder::new()
            .name("clipboard-writer".to_string())
            .spawn(move || run_clipboard_writer(inbox))
            .map_err(|error| ClipboardError::Unavailable(error.to_string()))?;
        Ok(Self { jobs })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let stopped = || ClipboardError::Unavailable("clipboard writer stopped".to_string());
        let (reply, answer) = mpsc::channel();
        self.jobs
            .send((text.to_string(), reply))
            .map_err(|_| stopped())?;
        answer.recv().unwrap_or_else(|_| Err(stopped()))
    }
}

fn run_clipboard_writer(inbox: mpsc::Receiver<ClipboardJob>) {
    let mut handle: Option<arboard::Clipboard> = None;
    for (text, reply) in inbox {
        let result = write_with(&mut handle, text);
        if reply.send(result).is_err() {
            debug!("Clipboard write finished after its requester went away");
        }
    }
}

/// Writes through the kept handle, opening it on first use or after the
/// platform refused to create one.
fn write_with(
    handle: &mut Option<arboard::Clipboard>,
    text: String,
) -> Result<(), ClipboardError> {
    let mut clipboard = match handle.take() {
        Some(clipboard) => clipboard,
        None => arboard::Clipboard::new()
            .map_err(|error| ClipboardError::Unavailable(error.to_string()))?,
    };
    let result = clipboard
        .set_text(text)
        .map_err(|error| ClipboardError::Write(error.to_string()));
    *handle = Some(clipboard);
    result
}

/// Stand-in when the writer thread could not be started.
pub struct MissingClipboard;

impl ClipboardBackend for MissingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipboard writer not running".to_string(),
        ))
    }
}

/// Runs clipboard writes one at a time in request order, so the last
/// requested text is the one left on the clipboard.
#[derive(Resource)]
pub struct ClipboardService {
    backend: Arc<dyn ClipboardBackend>,
    queued: VecDeque<String>,
    current: Option<Task<Result<(), ClipboardError>>>,
    failures: u32,
}

impl ClipboardService {
    pub fn new(backend: Arc<dyn ClipboardBackend>) -> Self {
        Self {
            backend,
            queued: VecDeque::new(),
            current: None,
            failures: 0,
        }
    }

    /// Queues a write without waiting for it. Superseded writes still run.
    pub fn copy(&mut self, text: String) {
        self.queued.push_back(text);
        self.start_next();
    }

    fn start_next(&mut self) {
        if self.current.is_some() {
            return;
        }
        let Some(text) = self.queued.pop_front() else {
            return;
        };
        let backend = Arc::clone(&self.backend);
        self.current = Some(IoTaskPool::get().spawn(async move { backend.write_text(&text) }));
    }

    /// Records the running write if it finished and starts the next one.
    fn poll(&mut self) {
        let Some(task) = self.current.as_mut() else {
            return;
        };
        let Some(result) = block_on(future::poll_once(task)) else {
            return;
        };
        self.current = None;
        self.record(result);
        self.start_next();
    }

    fn record(&mut self, result: Result<(), ClipboardError>) {
        if let Err(error) = result {
            self.failures += 1;
            warn!("{} ({} clipboard failures so far)", error, self.failures);
        }
    }
}

fn dispatch_clipboard_writes(
    mut requests: MessageReader<CopyText>,
    mut service: ResMut<ClipboardService>,
) {
    for request in requests.read() {
        service.copy(request.text.clone());
    }
}

fn poll_clipboard_writes(mut service: ResMut<ClipboardService>) {
    if service.current.is_none() {
        return;
    }
    service.poll();
}

// =============================================================================
// Navigation
// =============================================================================

pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), NavigationError>;
}

/// Opens URLs with the platform's default handler.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), NavigationError> {
        let mut command = open_command();
        command.arg(url);
        command
            .spawn()
            .map(|_| ())
            .map_err(|source| NavigationError::Launch {
                url: url.to_string(),
                source,
            })
    }
}

#[cfg(target_os = "macos")]
fn open_command() -> Command {
    Command::new("open")
}

// The URL goes to the protocol handler as a single argument; no shell parses
// `&`, `^` or `|` in it.
#[cfg(target_os = "windows")]
fn open_command() -> Command {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler");
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command() -> Command {
    Command::new("xdg-open")
}

#[derive(Resource)]
pub struct Navigator {
    opener: Arc<dyn UrlOpener>,
    failures: u32,
}

impl Navigator {
    pub fn new(opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            opener,
            failures: 0,
        }
    }

    /// Fire-and-forget; the result only feeds diagnostics.
    pub fn open(&mut self, url: &str) {
        match self.opener.open(url) {
            Ok(()) => info!("Opened {}", url),
            Err(error) => {
                self.failures += 1;
                warn!("{} ({} navigation failures so far)", error, self.failures);
            }
        }
    }
}

fn dispatch_navigation(mut requests: MessageReader<OpenUrl>, mut navigator: ResMut<Navigator>) {
    for request in requests.read() {
        navigator.open(&request.url);
    }
}
