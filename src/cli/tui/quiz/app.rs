use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, warn};

use super::events::AppEvent;
use super::screens::{self, ScreenContext};
use super::state::{StepAction, StepView};
use super::theme::Theme;
use crate::config::QuizConfig;
use crate::quiz::{format_summary, Advance, AnswerRecord, SharePayload, Step, WizardController};
use crate::share::system::SystemClipboard;
use crate::share::{share_sink_for, ClipboardWriter, CopiedAck, ShareSink};
use crate::Result;

/// How long the input reader waits before checking whether the app is gone
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Window for the double Ctrl+C exit
const CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Where a session ended up when the app quit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub step: Step,
    pub answers: AnswerRecord,
}

impl SessionOutcome {
    /// Whether the user reached the summary screen
    pub fn finished(&self) -> bool {
        self.step == Step::Finale
    }
}

/// Main application struct
pub struct App {
    /// Step progression and the answers
    controller: WizardController,
    /// View state of the step on screen
    view: StepView,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Redraw interval while idle
    tick_rate: Duration,
    /// Transient "copied" indicator on the finale
    copied: CopiedAck,
    clipboard: Arc<dyn ClipboardWriter>,
    share: Arc<dyn ShareSink>,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// Set by the record observer and by UI-only changes
    dirty: Rc<Cell<bool>>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app using the desktop clipboard and the configured share target
    pub fn new(config: &QuizConfig) -> Self {
        let share = share_sink_for(&config.share);
        Self::with_capabilities(config, Arc::new(SystemClipboard), share)
    }

    /// Create an app with explicit clipboard and share implementations
    pub fn with_capabilities(
        config: &QuizConfig,
        clipboard: Arc<dyn ClipboardWriter>,
        share: Arc<dyn ShareSink>,
    ) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let mut controller = WizardController::initialize();
        let observer_flag = Rc::clone(&dirty);
        controller.subscribe(move |_fields, _answers| observer_flag.set(true));

        let view = StepView::for_step(controller.step(), controller.answers());
        Self {
            controller,
            view,
            should_quit: false,
            theme: Theme::default(),
            tick_rate: Duration::from_millis(config.settings.tick_rate_ms),
            copied: CopiedAck::new(Duration::from_millis(config.settings.copied_ack_ms)),
            clipboard,
            share,
            event_tx: None,
            dirty,
            last_ctrl_c: None,
        }
    }

    /// Route background task results to `event_tx`
    pub fn connect(&mut self, event_tx: UnboundedSender<AppEvent>) {
        self.event_tx = Some(event_tx);
    }

    pub fn step(&self) -> Step {
        self.controller.step()
    }

    pub fn answers(&self) -> &AnswerRecord {
        self.controller.answers()
    }

    pub fn view(&self) -> &StepView {
        &self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn copied_visible(&self) -> bool {
        self.copied.is_visible(Instant::now())
    }

    pub fn into_outcome(self) -> SessionOutcome {
        SessionOutcome {
            step: self.controller.step(),
            answers: self.controller.into_answers(),
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<SessionOutcome> {
        // Initialize terminal
        let mut terminal = ratatui::init();

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        self.connect(event_tx.clone());

        // Spawn input handler; it stops once the receiver is dropped
        tokio::task::spawn_blocking(move || forward_input(event_tx));

        info!("quiz started");
        let result = match terminal.clear() {
            Ok(()) => self.main_loop(&mut terminal, &mut event_rx).await,
            Err(e) => Err(e.into()),
        };

        // Cleanup
        drop(event_rx);
        ratatui::restore();
        result?;

        let outcome = self.into_outcome();
        info!(step = %outcome.step, "quiz ended");
        Ok(outcome)
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            if self.dirty.replace(false) {
                terminal.draw(|frame| self.render(frame))?;
            }

            match time::timeout(self.tick_rate, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current step
    fn render(&self, frame: &mut Frame) {
        let ctx = ScreenContext {
            view: &self.view,
            answers: self.controller.answers(),
            copied: self.copied_visible(),
            theme: &self.theme,
        };
        screens::render(frame, &ctx);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                if self.handle_global_key(key) {
                    return;
                }
                let action = self.view.handle_key(key, self.controller.answers());
                self.apply(action);
                self.dirty.set(true);
            }
            AppEvent::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.dirty.set(true);
            }
            AppEvent::ClipboardWritten(Ok(())) => {
                info!("summary copied to clipboard");
                self.copied.mark(Instant::now());
                self.dirty.set(true);
            }
            AppEvent::ClipboardWritten(Err(error)) => {
                warn!(%error, "clipboard write failed");
            }
            AppEvent::ShareFinished { target, result } => match result {
                Ok(()) => debug!(share = target, "summary shared"),
                Err(error) => warn!(share = target, %error, "share failed"),
            },
            AppEvent::Tick => {
                if self.copied.tick(Instant::now()) {
                    self.dirty.set(true);
                }
            }
        }
    }

    /// Esc and double Ctrl+C quit from anywhere
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let now = Instant::now();
                if let Some(last) = self.last_ctrl_c {
                    if now.duration_since(last) < CTRL_C_WINDOW {
                        self.should_quit = true;
                    }
                }
                self.last_ctrl_c = Some(now);
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self, action: StepAction) {
        match action {
            StepAction::None => {}
            StepAction::Update(patch) => {
                let step = self.controller.step();
                debug_assert!(patch.fields().iter().all(|field| step.owns(*field)));
                self.controller.update_answers(patch);
            }
            StepAction::Confirm => match self.controller.advance() {
                Advance::Moved { to, .. } => {
                    info!(step = %to, "step reached");
                    self.view = StepView::for_step(to, self.controller.answers());
                }
                Advance::Blocked(_) | Advance::Terminal => {}
            },
            StepAction::Copy => self.spawn_share_tasks(false),
            StepAction::Send => self.spawn_share_tasks(true),
            StepAction::Quit => self.should_quit = true,
        }
    }

    /// Copy the summary and, when sending, hand it to the share target
    /// afterwards. Results come back as events.
    fn spawn_share_tasks(&self, send: bool) {
        let Some(event_tx) = self.event_tx.clone() else {
            debug!("no event channel, skipping clipboard");
            return;
        };

        let answers = self.controller.answers();
        let text = format_summary(answers);
        let payload = send.then(|| SharePayload::from_answers(answers));
        let clipboard = Arc::clone(&self.clipboard);
        let share = Arc::clone(&self.share);

        tokio::task::spawn_blocking(move || {
            let copied = clipboard.write_text(&text).map_err(|e| e.to_string());
            let _ = event_tx.send(AppEvent::ClipboardWritten(copied));

            if let Some(payload) = payload {
                let result = share.share(&payload).map_err(|e| e.to_string());
                let _ = event_tx.send(AppEvent::ShareFinished {
                    target: share.name(),
                    result,
                });
            }
        });
    }
}

/// Forward terminal input until the app drops its receiver
fn forward_input(input_tx: UnboundedSender<AppEvent>) {
    while !input_tx.is_closed() {
        match event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(error) => {
                warn!(%error, "terminal input unavailable");
                break;
            }
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
            Ok(_) => continue,
            Err(error) => {
                warn!(%error, "terminal input unavailable");
                break;
            }
        };

        if input_tx.send(app_event).is_err() {
            break;
        }
    }
}
