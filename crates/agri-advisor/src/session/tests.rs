//! Tests for the session store state machine.

use agri_common::SessionId;

use super::*;
use crate::wire::{Citation, QueryResponse};
use crate::TransportError;

const WELCOME: &str = "Explore the future of farming.";

fn store() -> SessionStore {
    SessionStore::new(SessionId::from_configured("test-session"), WELCOME)
}

fn reply(answer: &str) -> QueryResponse {
    QueryResponse {
        answer: answer.into(),
        sources: vec![Citation::new("citrus_pathology.pdf", Some(12.into()))],
        search_triggered: Some(true),
        intent: Some("disease".into()),
    }
}

#[test]
fn new_session_is_seeded_with_one_advisor_turn() {
    let store = store();
    assert_eq!(store.len(), 1);
    let seed = store.last_turn().unwrap();
    assert_eq!(seed.speaker, Speaker::Advisor);
    assert_eq!(seed.text, WELCOME);
    assert!(seed.citations.is_empty());
    assert_eq!(seed.search_triggered, None);
    assert_eq!(store.phase(), Phase::Idle);
    assert!(store.invariant_holds());
}

#[test]
fn farmer_turn_enters_awaiting_response() {
    let mut store = store();
    let turn = store.append_farmer_turn("When should I spray neem oil?").unwrap();
    assert_eq!(turn.speaker, Speaker::Farmer);
    assert!(turn.citations.is_empty());
    assert_eq!(turn.search_triggered, None);
    assert!(store.is_pending());
    assert_eq!(store.phase(), Phase::AwaitingResponse);
    assert!(store.invariant_holds());
}

#[test]
fn blank_farmer_turn_is_rejected_without_change() {
    let mut store = store();
    for blank in ["", "   ", "\n\t "] {
        assert_eq!(
            store.append_farmer_turn(blank).unwrap_err(),
            SessionError::InvalidInput
        );
    }
    assert_eq!(store.len(), 1);
    assert!(!store.is_pending());
}

#[test]
fn second_farmer_turn_while_pending_is_rejected() {
    let mut store = store();
    store.append_farmer_turn("first").unwrap();
    assert_eq!(
        store.append_farmer_turn("second").unwrap_err(),
        SessionError::RequestInFlight
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.last_turn().unwrap().text, "first");
    assert!(store.invariant_holds());
}

#[test]
fn blank_input_is_reported_before_in_flight() {
    let mut store = store();
    store.append_farmer_turn("first").unwrap();
    assert_eq!(
        store.append_farmer_turn(" ").unwrap_err(),
        SessionError::InvalidInput
    );
}

#[test]
fn successful_reply_becomes_advisor_turn() {
    let mut store = store();
    store.append_farmer_turn("What blight affects citrus leaves?").unwrap();
    let turn = store
        .append_advisor_turn(Ok(reply("Citrus canker causes lesions...")))
        .unwrap()
        .clone();

    assert_eq!(turn.speaker, Speaker::Advisor);
    assert_eq!(turn.text, "Citrus canker causes lesions...");
    assert_eq!(
        turn.citations,
        vec![Citation::new("citrus_pathology.pdf", Some(12.into()))]
    );
    assert_eq!(turn.search_triggered, Some(true));
    assert_eq!(turn.intent.as_deref(), Some("disease"));
    assert!(!turn.is_offline_notice());
    assert!(!store.is_pending());
    assert_eq!(store.len(), 3);
    assert!(store.invariant_holds());
}

#[test]
fn failed_reply_becomes_offline_notice() {
    let mut store = store();
    store.append_farmer_turn("price of wheat").unwrap();
    let turn = store
        .append_advisor_turn(Err(TransportError::Network("connection refused".into())))
        .unwrap();

    assert_eq!(turn.text, OFFLINE_NOTICE);
    assert!(turn.citations.is_empty());
    assert_eq!(turn.search_triggered, None);
    assert!(turn.is_offline_notice());
    assert!(!store.is_pending());
}

#[test]
fn advisor_turn_without_pending_question_is_rejected() {
    let mut store = store();
    assert_eq!(
        store
            .append_advisor_turn(Ok(reply("unsolicited")))
            .unwrap_err(),
        SessionError::NothingPending
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn turns_alternate_and_invariant_holds_throughout() {
    let mut store = store();
    for i in 0..4 {
        store.append_farmer_turn(&format!("question {i}")).unwrap();
        assert!(store.invariant_holds());
        let outcome = if i % 2 == 0 {
            Ok(reply("answer"))
        } else {
            Err(TransportError::Timeout)
        };
        store.append_advisor_turn(outcome).unwrap();
        assert!(store.invariant_holds());
    }

    assert_eq!(store.len(), 9);
    let speakers: Vec<Speaker> = store.history().iter().map(|t| t.speaker).collect();
    assert_eq!(speakers[0], Speaker::Advisor);
    for pair in speakers[1..].chunks(2) {
        assert_eq!(pair, [Speaker::Farmer, Speaker::Advisor]);
    }
}

#[test]
fn read_returns_an_independent_snapshot() {
    let mut store = store();
    store.append_farmer_turn("soil test?").unwrap();
    let snapshot = store.read();
    store
        .append_advisor_turn(Ok(reply("Visit the KVK lab.")))
        .unwrap();

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.pending);
    assert_eq!(snapshot.session_id.as_str(), "test-session");
    assert!(snapshot.last_turn().unwrap().is_farmer());
    assert_eq!(store.read().len(), 3);
}

#[test]
fn last_question_tracks_latest_farmer_turn() {
    let mut store = store();
    assert_eq!(store.last_question(), None);
    store.append_farmer_turn("first").unwrap();
    store.append_advisor_turn(Err(TransportError::Timeout)).unwrap();
    store.append_farmer_turn("second").unwrap();
    assert_eq!(store.last_question(), Some("second"));
}

#[test]
fn turn_serializes_lowercase_speaker() {
    let turn = store().read().history[0].clone();
    let json = serde_json::to_value(&turn).unwrap();
    assert_eq!(json["speaker"], "advisor");
    assert!(json.get("search_triggered").is_none());
}
