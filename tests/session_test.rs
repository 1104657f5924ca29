//! Session scenarios driven by a scripted word source.

use std::time::Duration;

use word_scramble::config::GameConfig;
use word_scramble::engine::{Outcome, RoundEvent};
use word_scramble::error::{EngineError, FailureKind, WordSourceError};
use word_scramble::session::Session;
use word_scramble::source::{ScriptedWordSource, WordSource};

fn session(words: &[&str]) -> Session<ScriptedWordSource> {
    let source = ScriptedWordSource::words(words.iter().copied());
    Session::from_config(&GameConfig::default(), source, Some(17))
}

#[tokio::test]
async fn wrong_guesses_run_out_the_tries() {
    let mut session = session(&["purple"]);
    let event = session.next_word().await.unwrap();
    assert!(matches!(event, Some(RoundEvent::Started { .. })));

    for expected in 1..=4 {
        let submission = session.guess("apple").await.unwrap();
        assert_eq!(
            submission.outcome,
            Outcome::Incorrect {
                mistake_count: expected,
                mistake_limit: 5
            }
        );
        assert_eq!(submission.round, None);
    }

    let submission = session.guess("apple").await.unwrap();
    assert_eq!(submission.outcome, Outcome::GameOver { success_count: 0 });
    assert!(session.engine().state().is_game_over());
    assert_eq!(session.engine().state().mistake_count(), 4);

    assert_eq!(
        session.guess("purple").await,
        Err(EngineError::GameOver { success_count: 0 })
    );
}

#[tokio::test]
async fn correct_guess_starts_next_round() {
    let mut session = session(&["purple", "garden"]);
    session.next_word().await.unwrap();

    let submission = session.guess("purple").await.unwrap();
    assert!(matches!(submission.outcome, Outcome::Correct { .. }));
    assert!(matches!(
        submission.round,
        Some(RoundEvent::Started { ref scrambled }) if scrambled.len() == 6
    ));

    let engine = session.engine();
    assert_eq!(engine.state().success_count(), 1);
    assert_eq!(engine.state().mistake_count(), 0);
    assert_eq!(engine.current_word().map(|w| w.text()), Some("garden"));
    assert!(!engine.is_fetch_in_progress());
    assert_eq!(session.source().calls(), 2);
}

#[tokio::test]
async fn guess_is_case_sensitive() {
    let mut session = session(&["purple"]);
    session.next_word().await.unwrap();

    let submission = session.guess("PURPLE").await.unwrap();
    assert!(matches!(submission.outcome, Outcome::Incorrect { .. }));
}

#[tokio::test]
async fn network_failure_leaves_no_round() {
    let source = ScriptedWordSource::new([Err(WordSourceError::Network(
        "connection refused".to_string(),
    ))]);
    let mut session = Session::from_config(&GameConfig::default(), source, Some(1));

    let event = session.next_word().await.unwrap();
    let Some(RoundEvent::Failed { error }) = event else {
        panic!("expected a failed round, got {event:?}");
    };
    assert_eq!(error.kind(), FailureKind::Network);
    assert_eq!(
        error.user_message(),
        "Unable to connect to server. Please try again later."
    );

    let engine = session.engine();
    assert!(engine.current_word().is_none());
    assert!(!engine.is_fetch_in_progress());
    assert_eq!(engine.state().mistake_count(), 0);
    assert_eq!(engine.state().success_count(), 0);

    assert_eq!(
        session.guess("purple").await,
        Err(EngineError::NoActiveRound)
    );
}

#[tokio::test]
async fn invalid_word_is_reported_as_invalid_input() {
    let mut session = session(&["pur ple"]);
    let event = session.next_word().await.unwrap();
    let Some(RoundEvent::Failed { error }) = event else {
        panic!("expected a failed round, got {event:?}");
    };
    assert_eq!(error.kind(), FailureKind::InvalidInput);
}

#[tokio::test]
async fn retry_after_failure_recovers() {
    let source = ScriptedWordSource::new([
        Err(WordSourceError::EmptyResult),
        Ok("orange".to_string()),
    ]);
    let mut session = Session::from_config(&GameConfig::default(), source, Some(2));

    let first = session.next_word().await.unwrap();
    assert!(matches!(first, Some(RoundEvent::Failed { .. })));

    let second = session.next_word().await.unwrap();
    assert!(matches!(second, Some(RoundEvent::Started { .. })));
    assert_eq!(
        session.engine().current_word().map(|w| w.text()),
        Some("orange")
    );
}

#[tokio::test]
async fn new_game_resets_counters() {
    let mut session = session(&["purple", "garden"]);
    session.next_word().await.unwrap();
    session.guess("apple").await.unwrap();
    assert_eq!(session.engine().state().mistake_count(), 1);

    let event = session.new_game().await.unwrap();
    assert!(matches!(event, Some(RoundEvent::Started { .. })));
    let state = session.engine().state();
    assert_eq!(
        (state.mistake_count(), state.success_count(), state.is_game_over()),
        (0, 0, false)
    );
}

#[tokio::test]
async fn submit_uses_the_slots() {
    let mut session = session(&["purple", "garden"]);
    session.next_word().await.unwrap();

    for (i, ch) in "pur".chars().enumerate() {
        session.engine_mut().set_char(i, ch).unwrap();
    }
    let submission = session.submit().await.unwrap();
    assert_eq!(submission.outcome, Outcome::Incomplete);

    for (i, ch) in "purple".chars().enumerate() {
        session.engine_mut().set_char(i, ch).unwrap();
    }
    let submission = session.submit().await.unwrap();
    assert!(matches!(submission.outcome, Outcome::Correct { .. }));
}

#[derive(Clone)]
struct StalledSource;

impl WordSource for StalledSource {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("purple".to_string())
    }
}

#[tokio::test(start_paused = true)]
async fn slow_source_times_out_as_network_failure() {
    let config = GameConfig {
        fetch_timeout_ms: 250,
        ..GameConfig::default()
    };
    let mut session = Session::from_config(&config, StalledSource, None);

    let event = session.next_word().await.unwrap();
    let Some(RoundEvent::Failed { error }) = event else {
        panic!("expected a failed round, got {event:?}");
    };
    assert_eq!(error.kind(), FailureKind::Network);
    assert!(!session.engine().is_fetch_in_progress());
}
