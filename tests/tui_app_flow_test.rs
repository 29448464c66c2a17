use std::sync::{Arc, Mutex};

use muse_profile::cli::tui::quiz::app::App;
use muse_profile::cli::tui::quiz::events::AppEvent;
use muse_profile::config::QuizConfig;
use muse_profile::quiz::{SharePayload, Step};
use muse_profile::share::{ClipboardWriter, NoShare, ShareSink};
use muse_profile::{MuseError, Result};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Clipboard that records what it was given, or fails every write
#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<String>>,
    fail: bool,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(MuseError::Clipboard("no clipboard here".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct FakeShare {
    shared: Mutex<Vec<SharePayload>>,
}

impl ShareSink for FakeShare {
    fn share(&self, payload: &SharePayload) -> Result<()> {
        self.shared.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Drive a fresh app to the finale with a complete set of answers
fn play_to_finale(app: &mut App) {
    press(app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Basics);

    type_text(app, "Heo");
    press(app, KeyCode::Tab);
    type_text(app, "2007-07-02");
    press(app, KeyCode::Tab);
    press(app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Preferences);

    press(app, KeyCode::Char('4')); // Matcha
    press(app, KeyCode::Tab);
    press(app, KeyCode::Char('2')); // Năng động
    press(app, KeyCode::Tab);
    press(app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Situational);

    press(app, KeyCode::Enter); // first option
    press(app, KeyCode::Enter); // first option
    press(app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Deep);

    type_text(app, "Nụ cười");
    press(app, KeyCode::Tab);
    press(app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Finale);
}

fn connected(app: &mut App) -> UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    app.connect(tx);
    rx
}

#[test]
fn test_blocked_steps_hold_position() {
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        Arc::new(FakeClipboard::default()),
        Arc::new(NoShare),
    );
    press(&mut app, KeyCode::Enter);

    // Confirm with nothing typed
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Basics);

    // Birthday alone is not enough; focus sits on confirm, so step back once
    press(&mut app, KeyCode::BackTab);
    type_text(&mut app, "2007-07-02");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), Step::Basics);
    assert_eq!(app.answers().birthday, "2007-07-02");
    assert_eq!(app.answers().nickname, "");
}

#[test]
fn test_tab_from_confirm_wraps_to_first_field() {
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        Arc::new(FakeClipboard::default()),
        Arc::new(NoShare),
    );
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Heo");

    assert_eq!(app.answers().nickname, "Heo");
    assert_eq!(app.answers().birthday, "");
}

#[test]
fn test_full_walkthrough_records_answers() {
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        Arc::new(FakeClipboard::default()),
        Arc::new(NoShare),
    );
    play_to_finale(&mut app);

    let answers = app.answers();
    assert_eq!(answers.nickname, "Heo");
    assert_eq!(answers.drink, "Matcha lattee 🍵");
    assert_eq!(answers.style, "Năng động cool ngầu 😎");
    assert_eq!(answers.angry_action, "Kệ anh, dỗi tí là hết 🙄");
    assert_eq!(answers.weekend, "Nằm nhà cày Netflix 🎬");
    assert_eq!(answers.crush_factor, "Nụ cười");

    let outcome = app.into_outcome();
    assert!(outcome.finished());
}

#[tokio::test]
async fn test_copy_shows_acknowledgment() {
    let clipboard = Arc::new(FakeClipboard::default());
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        clipboard.clone(),
        Arc::new(NoShare),
    );
    let mut rx = connected(&mut app);
    play_to_finale(&mut app);
    let before = app.answers().clone();

    assert!(!app.copied_visible());
    press(&mut app, KeyCode::Char('c'));

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::ClipboardWritten(Ok(()))));
    app.handle_event(event);

    assert!(app.copied_visible());
    assert_eq!(app.step(), Step::Finale);
    assert_eq!(app.answers(), &before);

    let written = clipboard.written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("💖 *Hồ sơ tình yêu của Heo* 💖"));
}

#[tokio::test]
async fn test_failed_copy_changes_nothing() {
    let clipboard = Arc::new(FakeClipboard {
        fail: true,
        ..Default::default()
    });
    let mut app = App::with_capabilities(&QuizConfig::default(), clipboard, Arc::new(NoShare));
    let mut rx = connected(&mut app);
    play_to_finale(&mut app);
    let before = app.answers().clone();

    press(&mut app, KeyCode::Char('c'));
    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::ClipboardWritten(Err(_))));
    app.handle_event(event);

    assert!(!app.copied_visible());
    assert_eq!(app.step(), Step::Finale);
    assert_eq!(app.answers(), &before);
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_send_copies_then_shares() {
    let clipboard = Arc::new(FakeClipboard::default());
    let share = Arc::new(FakeShare::default());
    let mut app = App::with_capabilities(&QuizConfig::default(), clipboard.clone(), share.clone());
    let mut rx = connected(&mut app);
    play_to_finale(&mut app);

    press(&mut app, KeyCode::Char('s'));

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, AppEvent::ClipboardWritten(Ok(()))));
    app.handle_event(first);

    match rx.recv().await.unwrap() {
        AppEvent::ShareFinished { target, result } => {
            assert_eq!(target, "fake");
            assert_eq!(result, Ok(()));
        }
        other => panic!("unexpected event {other:?}"),
    }

    let shared = share.shared.lock().unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].title, "Hồ sơ của Heo");
    assert_eq!(clipboard.written.lock().unwrap()[0], shared[0].text);
}

#[test]
fn test_copy_without_channel_is_ignored() {
    let clipboard = Arc::new(FakeClipboard::default());
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        clipboard.clone(),
        Arc::new(NoShare),
    );
    play_to_finale(&mut app);
    press(&mut app, KeyCode::Char('c'));
    assert!(clipboard.written.lock().unwrap().is_empty());
    assert_eq!(app.step(), Step::Finale);
}

#[test]
fn test_escape_quits_mid_quiz() {
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        Arc::new(FakeClipboard::default()),
        Arc::new(NoShare),
    );
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Heo");
    press(&mut app, KeyCode::Esc);

    assert!(app.should_quit());
    let outcome = app.into_outcome();
    assert!(!outcome.finished());
    assert_eq!(outcome.answers.nickname, "Heo");
}

#[test]
fn test_single_ctrl_c_does_not_quit() {
    let mut app = App::with_capabilities(
        &QuizConfig::default(),
        Arc::new(FakeClipboard::default()),
        Arc::new(NoShare),
    );
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    app.handle_event(AppEvent::Key(ctrl_c));
    assert!(!app.should_quit());
    app.handle_event(AppEvent::Key(ctrl_c));
    assert!(app.should_quit());
}
