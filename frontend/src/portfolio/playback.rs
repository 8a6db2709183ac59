use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerStatus {
    Loading,
    Ready,
    /// Terminal until the user retries.
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackAction {
    SetPlaying(bool),
    AutoplayBlocked,
    TimeUpdate(f64),
    LoadedMetadata(f64),
    Buffered(f64),
    Seek(f64),
    SetVolume(f64),
    ToggleMute,
    ToggleCaptions,
    FullscreenChanged(bool),
    PointerActivity,
    ControlsIdle,
    Error(String),
    Retry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub buffered: f64,
    pub volume: f64,
    /// Last non-zero volume, restored when unmuting from silence.
    pub audible_volume: f64,
    pub muted: bool,
    pub captions_enabled: bool,
    pub fullscreen: bool,
    pub controls_shown: bool,
    pub status: PlayerStatus,
    /// Bumped on retry so the media element is rebuilt from scratch.
    pub reload_nonce: u32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: true,
            current_time: 0.0,
            duration: 0.0,
            buffered: 0.0,
            volume: 1.0,
            audible_volume: 1.0,
            muted: false,
            captions_enabled: true,
            fullscreen: false,
            controls_shown: true,
            status: PlayerStatus::Loading,
            reload_nonce: 0,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

impl PlaybackState {
    pub fn is_error(&self) -> bool {
        matches!(self.status, PlayerStatus::Error(_))
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_shown || !self.playing
    }

    /// Value the volume slider shows.
    pub fn displayed_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub fn clamp_seek(&self, time: f64) -> f64 {
        finite_or_zero(time).clamp(0.0, finite_or_zero(self.duration).max(0.0))
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn buffered_percent(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.buffered / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn apply(&mut self, action: PlaybackAction) {
        // The document can leave fullscreen at any time, error or not.
        if let PlaybackAction::FullscreenChanged(fullscreen) = action {
            self.fullscreen = fullscreen;
            return;
        }
        if self.is_error() && action != PlaybackAction::Retry {
            return;
        }

        match action {
            PlaybackAction::SetPlaying(playing) => {
                self.playing = playing;
                if !playing {
                    self.controls_shown = true;
                }
            }
            PlaybackAction::AutoplayBlocked => {
                self.playing = false;
                self.controls_shown = true;
            }
            PlaybackAction::TimeUpdate(time) => {
                self.current_time = finite_or_zero(time).max(0.0);
            }
            PlaybackAction::LoadedMetadata(duration) => {
                self.duration = finite_or_zero(duration).max(0.0);
                self.status = PlayerStatus::Ready;
            }
            PlaybackAction::Buffered(end) => {
                self.buffered = finite_or_zero(end).max(0.0);
            }
            PlaybackAction::Seek(time) => {
                self.current_time = self.clamp_seek(time);
            }
            PlaybackAction::SetVolume(volume) => {
                let volume = finite_or_zero(volume).clamp(0.0, 1.0);
                self.volume = volume;
                if volume == 0.0 {
                    self.muted = true;
                } else {
                    self.audible_volume = volume;
                    self.muted = false;
                }
            }
            PlaybackAction::ToggleMute => {
                self.muted = !self.muted;
                if !self.muted && self.volume == 0.0 {
                    self.volume = self.audible_volume;
                }
            }
            PlaybackAction::ToggleCaptions => {
                self.captions_enabled = !self.captions_enabled;
            }
            PlaybackAction::FullscreenChanged(_) => {}
            PlaybackAction::PointerActivity => {
                self.controls_shown = true;
            }
            PlaybackAction::ControlsIdle => {
                if self.playing {
                    self.controls_shown = false;
                }
            }
            PlaybackAction::Error(message) => {
                self.status = PlayerStatus::Error(message);
                self.playing = false;
                self.controls_shown = true;
            }
            PlaybackAction::Retry => {
                // Fullscreen belongs to the container, which survives the reload.
                *self = Self {
                    fullscreen: self.fullscreen,
                    reload_nonce: self.reload_nonce.wrapping_add(1),
                    ..Self::default()
                };
            }
        }
    }
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Keyboard shortcuts while the player has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlay,
    ToggleMute,
    ToggleCaptions,
}

impl PlayerCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(Self::TogglePlay),
            "m" => Some(Self::ToggleMute),
            "c" => Some(Self::ToggleCaptions),
            _ => None,
        }
    }
}

/// `MediaError.code` to a user-facing message.
pub fn media_error_message(code: u16) -> &'static str {
    match code {
        1 => "Playback was aborted.",
        2 => "A network error interrupted the video download.",
        3 => "The video could not be decoded.",
        4 => "This video format is not supported by your browser.",
        _ => "The video could not be played.",
    }
}

/// `m:ss`; zero, negative or non-finite input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(duration: f64) -> PlaybackState {
        let mut state = PlaybackState::default();
        state.apply(PlaybackAction::LoadedMetadata(duration));
        state
    }

    #[test]
    fn test_starts_playing_and_falls_back_when_autoplay_blocked() {
        let mut state = PlaybackState::default();
        assert!(state.playing);
        state.apply(PlaybackAction::AutoplayBlocked);
        assert!(!state.playing);
        assert!(state.controls_visible());
        assert!(!state.is_error());
    }

    #[test]
    fn test_metadata_marks_ready() {
        let state = ready(120.0);
        assert_eq!(state.status, PlayerStatus::Ready);
        assert_eq!(state.duration, 120.0);
    }

    #[test]
    fn test_volume_zero_mutes() {
        let mut state = ready(10.0);
        state.apply(PlaybackAction::SetVolume(0.0));
        assert!(state.muted);
        assert_eq!(state.displayed_volume(), 0.0);
    }

    #[test]
    fn test_raising_volume_unmutes() {
        let mut state = ready(10.0);
        state.apply(PlaybackAction::ToggleMute);
        assert!(state.muted);
        state.apply(PlaybackAction::SetVolume(0.4));
        assert!(!state.muted);
        assert_eq!(state.volume, 0.4);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut state = ready(10.0);
        state.apply(PlaybackAction::SetVolume(3.0));
        assert_eq!(state.volume, 1.0);
        state.apply(PlaybackAction::SetVolume(-1.0));
        assert_eq!(state.volume, 0.0);
        assert!(state.muted);
    }

    #[test]
    fn test_unmuting_from_zero_restores_audible_volume() {
        let mut state = ready(10.0);
        state.apply(PlaybackAction::SetVolume(0.6));
        state.apply(PlaybackAction::SetVolume(0.0));
        assert!(state.muted);

        state.apply(PlaybackAction::ToggleMute);
        assert!(!state.muted);
        assert_eq!(state.volume, 0.6);
        assert_eq!(state.displayed_volume(), 0.6);
    }

    #[test]
    fn test_mute_toggle_keeps_level() {
        let mut state = ready(10.0);
        state.apply(PlaybackAction::SetVolume(0.3));
        state.apply(PlaybackAction::ToggleMute);
        state.apply(PlaybackAction::ToggleMute);
        assert!(!state.muted);
        assert_eq!(state.volume, 0.3);
    }

    #[test]
    fn test_seek_bounded_by_duration() {
        let mut state = ready(90.0);
        state.apply(PlaybackAction::Seek(200.0));
        assert_eq!(state.current_time, 90.0);
        state.apply(PlaybackAction::Seek(-5.0));
        assert_eq!(state.current_time, 0.0);
        state.apply(PlaybackAction::Seek(42.5));
        assert_eq!(state.current_time, 42.5);
    }

    #[test]
    fn test_seek_before_metadata_stays_at_zero() {
        let mut state = PlaybackState::default();
        state.apply(PlaybackAction::Seek(30.0));
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.clamp_seek(f64::NAN), 0.0);
    }

    #[test]
    fn test_error_is_terminal_without_retry() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::Error(media_error_message(2).to_string()));
        assert!(state.is_error());
        assert!(!state.playing);

        state.apply(PlaybackAction::SetPlaying(true));
        state.apply(PlaybackAction::LoadedMetadata(60.0));
        state.apply(PlaybackAction::TimeUpdate(5.0));
        assert!(state.is_error());
        assert!(!state.playing);
        assert_eq!(state.reload_nonce, 0);
    }

    #[test]
    fn test_retry_reloads_from_scratch() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::TimeUpdate(12.0));
        state.apply(PlaybackAction::Error("boom".to_string()));
        state.apply(PlaybackAction::Retry);

        assert_eq!(state.status, PlayerStatus::Loading);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.reload_nonce, 1);
        assert!(state.playing);
    }

    #[test]
    fn test_controls_hide_only_while_playing() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::ControlsIdle);
        assert!(!state.controls_visible());

        state.apply(PlaybackAction::PointerActivity);
        assert!(state.controls_visible());

        state.apply(PlaybackAction::SetPlaying(false));
        state.apply(PlaybackAction::ControlsIdle);
        assert!(state.controls_visible());
    }

    #[test]
    fn test_pausing_shows_controls() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::ControlsIdle);
        state.apply(PlaybackAction::SetPlaying(false));
        assert!(state.controls_shown);
    }

    #[test]
    fn test_captions_and_fullscreen_flags() {
        let mut state = ready(60.0);
        assert!(state.captions_enabled);
        state.apply(PlaybackAction::ToggleCaptions);
        assert!(!state.captions_enabled);

        state.apply(PlaybackAction::FullscreenChanged(true));
        assert!(state.fullscreen);
        state.apply(PlaybackAction::FullscreenChanged(false));
        assert!(!state.fullscreen);
    }

    #[test]
    fn test_fullscreen_exit_tracked_during_error() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::FullscreenChanged(true));
        state.apply(PlaybackAction::Error("boom".to_string()));
        state.apply(PlaybackAction::FullscreenChanged(false));
        assert!(!state.fullscreen);
        assert!(state.is_error());
    }

    #[test]
    fn test_retry_keeps_fullscreen() {
        let mut state = ready(60.0);
        state.apply(PlaybackAction::FullscreenChanged(true));
        state.apply(PlaybackAction::Error("boom".to_string()));
        state.apply(PlaybackAction::Retry);
        assert!(state.fullscreen);
        assert_eq!(state.status, PlayerStatus::Loading);
    }

    #[test]
    fn test_progress_percentages() {
        let mut state = ready(200.0);
        state.apply(PlaybackAction::TimeUpdate(50.0));
        state.apply(PlaybackAction::Buffered(100.0));
        assert_eq!(state.progress_percent(), 25.0);
        assert_eq!(state.buffered_percent(), 50.0);
        assert_eq!(PlaybackState::default().progress_percent(), 0.0);
    }

    #[test]
    fn test_keyboard_shortcuts() {
        assert_eq!(PlayerCommand::from_key(" "), Some(PlayerCommand::TogglePlay));
        assert_eq!(PlayerCommand::from_key("m"), Some(PlayerCommand::ToggleMute));
        assert_eq!(PlayerCommand::from_key("c"), Some(PlayerCommand::ToggleCaptions));
        assert_eq!(PlayerCommand::from_key("k"), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
    }
}
