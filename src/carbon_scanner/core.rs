use crate::assessment::adapter::ClassificationAdapter;
use crate::assessment::session::Session;
use crate::device_camera::interface::DeviceCameraEvent;
use crate::image_classifier::interface::Classification;
use std::time::Instant;

#[derive(Default, Clone, Debug)]
pub struct DeviceStates {
    pub camera: CameraState,
    pub classifier: ClassifierState,
}

#[derive(Default, Clone, Debug)]
pub enum CameraState {
    #[default]
    Disconnected,
    Connected(Instant),
    Started,
}

#[derive(Default, Clone, Debug)]
pub enum ClassifierState {
    #[default]
    Loading,
    Loaded,
}

/// The session rides alongside the phase so that device reconnects never
/// lose recorded scans.
#[derive(Clone, Debug)]
pub struct State {
    pub phase: Phase,
    pub session: Session,
}

#[derive(Clone, Debug)]
pub enum Phase {
    DevicesInitializing { device_states: DeviceStates },
    Idle,
    Identifying,
}

#[derive(Debug)]
pub enum Event {
    Tick(Instant),
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    ClassifierLoadDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptureDone(Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>),
    FrameClassifyDone(Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameCaptureDone(Ok(_)) => {
                format!("{:?}", Event::FrameCaptureDone(Ok(vec![])))
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeCamera,
    SubscribeTick,
    LoadClassifier,
    StartCamera,
    CaptureFrame,
    ClassifyFrame { frame: Vec<u8> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyFrame { .. } => {
                format!("{:?}", Effect::ClassifyFrame { frame: vec![] })
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (
        State {
            phase: Phase::DevicesInitializing {
                device_states: DeviceStates::default(),
            },
            session: Session::new(),
        },
        vec![
            Effect::SubscribeCamera,
            Effect::SubscribeTick,
            Effect::LoadClassifier,
        ],
    )
}

pub fn transition(
    adapter: &ClassificationAdapter,
    state: State,
    event: Event,
) -> (State, Vec<Effect>) {
    let State { phase, session } = state;

    match (phase, event) {
        // Startup: the camera stream and the model load race each other
        (
            Phase::DevicesInitializing { device_states },
            Event::CameraEvent(DeviceCameraEvent::Connected),
        ) => {
            let new_states = DeviceStates {
                camera: CameraState::Connected(Instant::now()),
                classifier: device_states.classifier,
            };
            (
                State {
                    phase: Phase::DevicesInitializing {
                        device_states: new_states,
                    },
                    session,
                },
                vec![Effect::StartCamera],
            )
        }
        (Phase::DevicesInitializing { device_states }, Event::CameraStartDone(Ok(()))) => {
            let new_states = DeviceStates {
                camera: CameraState::Started,
                classifier: device_states.classifier,
            };
            devices_ready_or_wait(new_states, session)
        }
        (Phase::DevicesInitializing { device_states }, Event::ClassifierLoadDone(Ok(()))) => {
            let new_states = DeviceStates {
                camera: device_states.camera,
                classifier: ClassifierState::Loaded,
            };
            devices_ready_or_wait(new_states, session)
        }

        // Scan cycle: at most one capture-classify cycle is in flight, so a
        // tick arriving while identifying is rejected
        (Phase::Idle, Event::Tick(_)) => (
            State {
                phase: Phase::Identifying,
                session,
            },
            vec![Effect::CaptureFrame],
        ),
        (Phase::Identifying, Event::Tick(_)) => (
            State {
                phase: Phase::Identifying,
                session,
            },
            vec![],
        ),
        (Phase::Identifying, Event::FrameCaptureDone(Ok(frame))) => (
            State {
                phase: Phase::Identifying,
                session,
            },
            vec![Effect::ClassifyFrame { frame }],
        ),
        (Phase::Identifying, Event::FrameClassifyDone(Ok(classifications))) => {
            let mut session = session;
            if let Some(top) = classifications.first() {
                session.record_scan(adapter.assess(&top.label));
            }
            (
                State {
                    phase: Phase::Idle,
                    session,
                },
                vec![],
            )
        }
        (Phase::Identifying, Event::FrameCaptureDone(Err(_)))
        | (Phase::Identifying, Event::FrameClassifyDone(Err(_))) => (
            State {
                phase: Phase::Idle,
                session,
            },
            vec![],
        ),

        // A camera drop re-initializes the devices; the loaded model and the
        // session survive
        (phase, Event::CameraEvent(DeviceCameraEvent::Disconnected)) => {
            let classifier = match phase {
                Phase::DevicesInitializing { device_states } => device_states.classifier,
                _ => ClassifierState::Loaded,
            };
            (
                State {
                    phase: Phase::DevicesInitializing {
                        device_states: DeviceStates {
                            camera: CameraState::Disconnected,
                            classifier,
                        },
                    },
                    session,
                },
                vec![],
            )
        }

        // Default case
        (phase, _) => (State { phase, session }, vec![]),
    }
}

fn devices_ready_or_wait(device_states: DeviceStates, session: Session) -> (State, Vec<Effect>) {
    match (&device_states.camera, &device_states.classifier) {
        (CameraState::Started, ClassifierState::Loaded) => (
            State {
                phase: Phase::Idle,
                session,
            },
            vec![],
        ),
        _ => (
            State {
                phase: Phase::DevicesInitializing { device_states },
                session,
            },
            vec![],
        ),
    }
}
