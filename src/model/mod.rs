//! Model module - Shared types, UI bindings and collaborator traits
//!
//! - `types`: Status, track, lifecycle event and display state types
//! - `playback`: Progress state and the UI bindings owned by each component
//! - `traits`: Player manager, playlist manager and callback registry interfaces

mod types;
mod playback;
mod traits;

pub use types::{DisplayState, PlaybackStatus, PlayerEvent, PlayerHandle, Track};

pub use playback::{Button, ControlsBinding, ProgressBinding, ProgressState};

pub use traits::{PlayerCallback, PlayerManager, PlaylistManager};
