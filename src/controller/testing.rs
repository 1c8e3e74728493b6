//! Recording fakes of the collaborator traits

use std::sync::Mutex;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::model::{
    PlaybackStatus, PlayerCallback, PlayerEvent, PlayerHandle, PlayerManager, PlaylistManager,
    Track,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Play(Track),
    Pause,
    Resume,
    Seek(f64),
}

struct FakeState {
    status: PlaybackStatus,
    duration: f64,
    position: f64,
    buffer: f64,
    track: Option<Track>,
    player: Option<PlayerHandle>,
    commands: Vec<Command>,
}

pub struct FakePlayer {
    state: Mutex<FakeState>,
}

impl FakePlayer {
    pub fn new(status: PlaybackStatus) -> Self {
        Self {
            state: Mutex::new(FakeState {
                status,
                duration: 0.0,
                position: 0.0,
                buffer: 0.0,
                track: None,
                player: None,
                commands: Vec::new(),
            }),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn set_status(&self, status: PlaybackStatus) {
        self.with(|s| s.status = status);
    }

    pub fn set_duration(&self, duration: f64) {
        self.with(|s| s.duration = duration);
    }

    pub fn set_position(&self, position: f64) {
        self.with(|s| s.position = position);
    }

    pub fn set_buffer(&self, buffer: f64) {
        self.with(|s| s.buffer = buffer);
    }

    pub fn set_track(&self, track: Option<Track>) {
        self.with(|s| s.track = track);
    }

    pub fn set_player(&self, player: Option<PlayerHandle>) {
        self.with(|s| s.player = player);
    }

    pub fn commands(&self) -> Vec<Command> {
        self.with(|s| s.commands.clone())
    }
}

impl PlayerManager for FakePlayer {
    fn status(&self) -> PlaybackStatus {
        self.with(|s| s.status)
    }

    fn duration(&self) -> f64 {
        self.with(|s| s.duration)
    }

    fn current_position(&self) -> f64 {
        self.with(|s| s.position)
    }

    fn buffer(&self) -> f64 {
        self.with(|s| s.buffer)
    }

    fn current_track(&self) -> Option<Track> {
        self.with(|s| s.track.clone())
    }

    fn current_player(&self) -> Option<PlayerHandle> {
        self.with(|s| s.player)
    }

    fn play(&self, track: Track) {
        self.with(|s| s.commands.push(Command::Play(track)));
    }

    fn pause(&self) {
        self.with(|s| s.commands.push(Command::Pause));
    }

    fn resume(&self) {
        self.with(|s| s.commands.push(Command::Resume));
    }

    fn seek(&self, position_secs: f64) {
        self.with(|s| s.commands.push(Command::Seek(position_secs)));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlaylistCall {
    PopNext(Option<String>),
    Repeat,
    Shuffle,
}

pub struct FakePlaylist {
    tracks: Vec<Track>,
    next: Mutex<Option<Track>>,
    calls: Mutex<Vec<PlaylistCall>>,
}

impl FakePlaylist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            next: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_next(&self, track: Option<Track>) {
        *self.next.lock().unwrap() = track;
    }

    pub fn calls(&self) -> Vec<PlaylistCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlaylistManager for FakePlaylist {
    fn pop_next(&self, current: Option<&Track>) -> Option<Track> {
        self.calls
            .lock()
            .unwrap()
            .push(PlaylistCall::PopNext(current.map(|t| t.id.clone())));
        self.next.lock().unwrap().clone()
    }

    fn on_repeat_clicked(&self) {
        self.calls.lock().unwrap().push(PlaylistCall::Repeat);
    }

    fn on_shuffle_clicked(&self) {
        self.calls.lock().unwrap().push(PlaylistCall::Shuffle);
    }

    fn tracks(&self) -> Vec<Track> {
        self.tracks.clone()
    }
}

#[derive(Default)]
pub struct FakeCallbacks {
    listeners: Mutex<Vec<UnboundedSender<PlayerEvent>>>,
}

impl FakeCallbacks {
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl PlayerCallback for FakeCallbacks {
    fn subscribe(&self) -> UnboundedReceiver<PlayerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.lock().unwrap().push(tx);
        rx
    }
}

pub fn track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        duration_secs: 180.0,
    }
}
