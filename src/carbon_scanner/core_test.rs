use crate::assessment::record::ImpactTier;
use crate::assessment::session::Session;
use crate::carbon_scanner::core::{
    init, transition, CameraState, ClassifierState, Effect, Event, Phase, State,
};
use crate::carbon_scanner::fixture::{test_adapter, Fixture};
use crate::device_camera::interface::DeviceCameraEvent;
use crate::image_classifier::interface::Classification;
use rust_decimal_macros::dec;
use std::time::Instant;

fn idle_state() -> State {
    State {
        phase: Phase::Idle,
        session: Session::new(),
    }
}

fn identifying_state() -> State {
    State {
        phase: Phase::Identifying,
        session: Session::new(),
    }
}

fn classification(label: &str) -> Vec<Classification> {
    vec![Classification {
        label: label.to_string(),
        confidence: 0.92,
    }]
}

#[test]
fn init_waits_for_devices() {
    let (state, effects) = init();

    assert!(matches!(state.phase, Phase::DevicesInitializing { .. }));
    assert_eq!(state.session.count(), 0);
    assert_eq!(
        effects,
        vec![
            Effect::SubscribeCamera,
            Effect::SubscribeTick,
            Effect::LoadClassifier
        ]
    );
}

#[test]
fn camera_connection_starts_the_stream() {
    let adapter = test_adapter();
    let (state, _) = init();

    let (state, effects) = transition(
        &adapter,
        state,
        Event::CameraEvent(DeviceCameraEvent::Connected),
    );

    match &state.phase {
        Phase::DevicesInitializing { device_states } => {
            assert!(matches!(device_states.camera, CameraState::Connected(_)));
        }
        _ => panic!("Unexpected phase"),
    }
    assert_eq!(effects, vec![Effect::StartCamera]);
}

#[test]
fn scanning_begins_once_camera_and_model_are_ready() {
    let adapter = test_adapter();
    let (state, _) = init();

    let (state, _) = transition(
        &adapter,
        state,
        Event::CameraEvent(DeviceCameraEvent::Connected),
    );
    let (state, _) = transition(&adapter, state, Event::CameraStartDone(Ok(())));

    assert!(matches!(state.phase, Phase::DevicesInitializing { .. }));

    let (state, effects) = transition(&adapter, state, Event::ClassifierLoadDone(Ok(())));

    assert!(matches!(state.phase, Phase::Idle));
    assert!(effects.is_empty());
}

#[test]
fn tick_starts_a_scan_cycle() {
    let adapter = test_adapter();

    let (state, effects) = transition(&adapter, idle_state(), Event::Tick(Instant::now()));

    assert!(matches!(state.phase, Phase::Identifying));
    assert_eq!(effects, vec![Effect::CaptureFrame]);
}

#[test]
fn tick_is_rejected_while_identifying() {
    let adapter = test_adapter();

    let (state, effects) = transition(&adapter, identifying_state(), Event::Tick(Instant::now()));

    assert!(matches!(state.phase, Phase::Identifying));
    assert!(effects.is_empty());
}

#[test]
fn captured_frame_goes_to_the_classifier() {
    let adapter = test_adapter();
    let frame = vec![1, 2, 3];

    let (state, effects) = transition(
        &adapter,
        identifying_state(),
        Event::FrameCaptureDone(Ok(frame.clone())),
    );

    assert!(matches!(state.phase, Phase::Identifying));
    assert_eq!(effects, vec![Effect::ClassifyFrame { frame }]);
}

#[test]
fn classification_records_the_scan() {
    let adapter = test_adapter();

    let (state, effects) = transition(
        &adapter,
        identifying_state(),
        Event::FrameClassifyDone(Ok(classification("laptop, notebook computer"))),
    );

    assert!(matches!(state.phase, Phase::Idle));
    assert!(effects.is_empty());
    assert_eq!(state.session.count(), 1);
    assert_eq!(state.session.total_co2(), dec!(36.00));
    assert_eq!(
        state.session.last_scanned().map(|r| r.relative_impact.clone()),
        Some(ImpactTier::High)
    );
}

#[test]
fn unknown_label_updates_last_scanned_only() {
    let adapter = test_adapter();

    let (state, _) = transition(
        &adapter,
        identifying_state(),
        Event::FrameClassifyDone(Ok(classification("chair, furniture"))),
    );

    assert!(matches!(state.phase, Phase::Idle));
    assert_eq!(state.session.count(), 0);
    assert_eq!(
        state.session.last_scanned().map(|r| r.display_name.as_str()),
        Some("Unknown: chair")
    );
}

#[test]
fn empty_classification_leaves_session_untouched() {
    let adapter = test_adapter();

    let (state, effects) = transition(
        &adapter,
        identifying_state(),
        Event::FrameClassifyDone(Ok(vec![])),
    );

    assert!(matches!(state.phase, Phase::Idle));
    assert!(effects.is_empty());
    assert_eq!(state.session.count(), 0);
    assert!(state.session.last_scanned().is_none());
}

#[test]
fn capture_error_returns_to_idle() {
    let adapter = test_adapter();

    let (state, effects) = transition(
        &adapter,
        identifying_state(),
        Event::FrameCaptureDone(Err("camera offline".into())),
    );

    assert!(matches!(state.phase, Phase::Idle));
    assert!(effects.is_empty());
}

#[test]
fn camera_disconnect_preserves_the_session() {
    let adapter = test_adapter();

    let (state, _) = transition(
        &adapter,
        identifying_state(),
        Event::FrameClassifyDone(Ok(classification("laptop, notebook computer"))),
    );
    let (state, effects) = transition(
        &adapter,
        state,
        Event::CameraEvent(DeviceCameraEvent::Disconnected),
    );

    match &state.phase {
        Phase::DevicesInitializing { device_states } => {
            assert!(matches!(device_states.camera, CameraState::Disconnected));
            assert!(matches!(device_states.classifier, ClassifierState::Loaded));
        }
        _ => panic!("Unexpected phase"),
    }
    assert!(effects.is_empty());
    assert_eq!(state.session.count(), 1);
}

#[test]
fn load_classifier_effect_reports_completion() {
    let fixture = Fixture::new();

    fixture.scanner.interpret_effect(Effect::LoadClassifier);

    let event = fixture
        .scanner
        .event_receiver
        .lock()
        .unwrap()
        .try_recv()
        .unwrap();
    assert!(matches!(event, Event::ClassifierLoadDone(Ok(()))));
}

#[test]
fn capture_frame_effect_reports_a_frame() {
    let fixture = Fixture::new();

    fixture.scanner.interpret_effect(Effect::CaptureFrame);

    let event = fixture
        .scanner
        .event_receiver
        .lock()
        .unwrap()
        .try_recv()
        .unwrap();
    match event {
        Event::FrameCaptureDone(Ok(frame)) => assert_eq!(frame.len(), 224 * 224 * 3),
        other => panic!("Unexpected event: {:?}", other),
    }
}
