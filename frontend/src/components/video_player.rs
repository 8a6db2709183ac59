use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlInputElement, HtmlMediaElement, KeyboardEvent, MouseEvent, TextTrackMode};
use yew::prelude::*;

use crate::config;
use crate::portfolio::playback::{
    format_time, media_error_message, PlaybackAction, PlaybackState, PlayerCommand, PlayerStatus,
};

type Dispatcher = UseReducerDispatcher<PlaybackState>;

fn start_playback(video: &HtmlMediaElement, dispatcher: Dispatcher) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                debug!("Autoplay rejected, staying paused");
                dispatcher.dispatch(PlaybackAction::AutoplayBlocked);
            }
        }),
        Err(_) => dispatcher.dispatch(PlaybackAction::AutoplayBlocked),
    }
}

fn buffered_end(video: &HtmlMediaElement) -> f64 {
    let ranges = video.buffered();
    match ranges.length() {
        0 => 0.0,
        n => ranges.end(n - 1).unwrap_or(0.0),
    }
}

/// Restarts the idle countdown. Dropping the previous timeout cancels it.
fn arm_idle_timer(timer: &Rc<RefCell<Option<Timeout>>>, dispatcher: Dispatcher) {
    let timeout = Timeout::new(config::CONTROLS_IDLE_MS, move || {
        dispatcher.dispatch(PlaybackAction::ControlsIdle);
    });
    *timer.borrow_mut() = Some(timeout);
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub captions_url: Option<AttrValue>,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let state = use_reducer(PlaybackState::default);
    let video_ref = use_node_ref();
    let container_ref = use_node_ref();
    let idle_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Media element listeners. Re-bound whenever a retry rebuilds the element.
    {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_nonce: &u32| {
            let video = video_ref.cast::<HtmlMediaElement>();
            let mut listeners: Vec<(&'static str, Closure<dyn FnMut()>)> = Vec::new();

            if let Some(video) = &video {
                let bind = |event: &'static str, handler: Box<dyn FnMut()>, listeners: &mut Vec<(&'static str, Closure<dyn FnMut()>)>| {
                    let closure = Closure::wrap(handler);
                    if video
                        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        listeners.push((event, closure));
                    }
                };

                let (v, d) = (video.clone(), dispatcher.clone());
                bind("timeupdate", Box::new(move || d.dispatch(PlaybackAction::TimeUpdate(v.current_time()))), &mut listeners);

                let (v, d) = (video.clone(), dispatcher.clone());
                bind("loadedmetadata", Box::new(move || d.dispatch(PlaybackAction::LoadedMetadata(v.duration()))), &mut listeners);

                let (v, d) = (video.clone(), dispatcher.clone());
                bind("progress", Box::new(move || d.dispatch(PlaybackAction::Buffered(buffered_end(&v)))), &mut listeners);

                let d = dispatcher.clone();
                bind("play", Box::new(move || d.dispatch(PlaybackAction::SetPlaying(true))), &mut listeners);

                let d = dispatcher.clone();
                bind("pause", Box::new(move || d.dispatch(PlaybackAction::SetPlaying(false))), &mut listeners);

                let (v, d) = (video.clone(), dispatcher.clone());
                bind("error", Box::new(move || {
                    let code = v.error().map(|e| e.code()).unwrap_or(0);
                    warn!("Video playback failed with media error {}", code);
                    d.dispatch(PlaybackAction::Error(media_error_message(code).to_string()));
                }), &mut listeners);

                start_playback(video, dispatcher.clone());
            }

            move || {
                if let Some(video) = video {
                    for (event, closure) in listeners {
                        let _ = video.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                    }
                }
            }
        }, state.reload_nonce);
    }

    // Fullscreen can also be left with Esc, so follow the document.
    {
        let dispatcher = state.dispatcher();
        let idle_timer = idle_timer.clone();
        use_effect_with_deps(move |_| {
            arm_idle_timer(&idle_timer, dispatcher.clone());
            let document = web_sys::window().and_then(|w| w.document());
            let on_change = {
                let document = document.clone();
                Closure::wrap(Box::new(move || {
                    let fullscreen = document
                        .as_ref()
                        .map(|d| d.fullscreen_element().is_some())
                        .unwrap_or(false);
                    dispatcher.dispatch(PlaybackAction::FullscreenChanged(fullscreen));
                }) as Box<dyn FnMut()>)
            };
            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("fullscreenchange", on_change.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback("fullscreenchange", on_change.as_ref().unchecked_ref());
                }
                idle_timer.borrow_mut().take();
            }
        }, ());
    }

    // Captions follow the toggle through the first text track.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(move |(enabled, _nonce): &(bool, u32)| {
            if let Some(track) = video_ref
                .cast::<HtmlMediaElement>()
                .and_then(|v| v.text_tracks())
                .and_then(|tracks| tracks.get(0))
            {
                track.set_mode(if *enabled { TextTrackMode::Showing } else { TextTrackMode::Hidden });
            }
            || ()
        }, (state.captions_enabled, state.reload_nonce));
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(move |(volume, muted, _nonce): &(f64, bool, u32)| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_volume(*volume);
                video.set_muted(*muted);
            }
            || ()
        }, (state.volume, state.muted, state.reload_nonce));
    }

    let toggle_play = {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        let playing = state.playing;
        move || {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                if playing {
                    let _ = video.pause();
                    dispatcher.dispatch(PlaybackAction::SetPlaying(false));
                } else {
                    start_playback(&video, dispatcher.clone());
                    dispatcher.dispatch(PlaybackAction::SetPlaying(true));
                }
            }
        }
    };

    let toggle_fullscreen = {
        let container_ref = container_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            } else if let Some(container) = container_ref.cast::<Element>() {
                if container.request_fullscreen().is_err() {
                    warn!("Fullscreen request refused");
                }
            }
        })
    };

    let on_key = {
        let toggle_play = toggle_play.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            match PlayerCommand::from_key(&e.key()) {
                Some(PlayerCommand::TogglePlay) => toggle_play(),
                Some(PlayerCommand::ToggleMute) => dispatcher.dispatch(PlaybackAction::ToggleMute),
                Some(PlayerCommand::ToggleCaptions) => dispatcher.dispatch(PlaybackAction::ToggleCaptions),
                None => return,
            }
            e.prevent_default();
        })
    };

    let on_pointer_move = {
        let dispatcher = state.dispatcher();
        let idle_timer = idle_timer.clone();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(PlaybackAction::PointerActivity);
            arm_idle_timer(&idle_timer, dispatcher.clone());
        })
    };

    let on_seek = {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let target = state.clamp_seek(input.value().parse().unwrap_or(0.0));
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_current_time(target);
            }
            dispatcher.dispatch(PlaybackAction::Seek(target));
        })
    };

    let on_volume = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(PlaybackAction::SetVolume(input.value().parse().unwrap_or(1.0)));
        })
    };

    let click = |action: PlaybackAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };

    let on_play_click = {
        let toggle_play = toggle_play.clone();
        Callback::from(move |_: MouseEvent| toggle_play())
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let controls_class = classes!(
        "player-controls",
        if state.controls_visible() { "visible" } else { "faded" }
    );

    html! {
        <div
            ref={container_ref}
            class={classes!("video-player", state.fullscreen.then(|| "fullscreen"))}
            tabindex="0"
            role="region"
            aria-label="Video Player"
            onkeydown={on_key}
            onmousemove={on_pointer_move}
        >
            <video
                key={state.reload_nonce.to_string()}
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                class="player-video"
                onclick={on_play_click.clone()}
                playsinline={true}
                crossorigin="anonymous"
            >
                if let Some(captions) = props.captions_url.clone() {
                    <track
                        kind="captions"
                        src={captions}
                        srclang="en"
                        label="English"
                        default={state.captions_enabled}
                    />
                }
            </video>

            if state.status == PlayerStatus::Loading {
                <div class="player-loading"><span class="spinner"></span></div>
            }

            if let PlayerStatus::Error(message) = &state.status {
                <div class="player-error" role="alert">
                    <p>{message.clone()}</p>
                    <div class="player-error-actions">
                        <button class="btn btn-primary btn-sm" onclick={click(PlaybackAction::Retry)}>{"Retry"}</button>
                        <button class="btn btn-outline btn-sm" onclick={on_close.clone()}>{"Close"}</button>
                    </div>
                </div>
            } else {
                <div class={controls_class}>
                    <div class="seek-bar">
                        <div class="seek-buffered" style={format!("width: {}%;", state.buffered_percent())}></div>
                        <input
                            type="range"
                            min="0"
                            max={state.duration.to_string()}
                            step="0.1"
                            value={state.current_time.to_string()}
                            oninput={on_seek}
                            aria-label="Seek Video"
                        />
                    </div>
                    <div class="player-bar">
                        <div class="player-bar-left">
                            <button onclick={on_play_click} aria-label={if state.playing { "Pause" } else { "Play" }}>
                                { if state.playing { "❚❚" } else { "▶" } }
                            </button>
                            <div class="volume-group">
                                <button onclick={click(PlaybackAction::ToggleMute)} aria-label={if state.muted { "Unmute" } else { "Mute" }}>
                                    { if state.muted || state.volume == 0.0 { "🔇" } else { "🔊" } }
                                </button>
                                <input
                                    type="range"
                                    min="0"
                                    max="1"
                                    step="0.05"
                                    value={state.displayed_volume().to_string()}
                                    oninput={on_volume}
                                    aria-label="Volume"
                                />
                            </div>
                            <span class="player-time">
                                {format!("{} / {}", format_time(state.current_time), format_time(state.duration))}
                            </span>
                        </div>
                        <div class="player-bar-right">
                            if props.captions_url.is_some() {
                                <button
                                    class={classes!("captions-toggle", state.captions_enabled.then(|| "on"))}
                                    onclick={click(PlaybackAction::ToggleCaptions)}
                                    aria-label="Toggle Captions"
                                    aria-pressed={state.captions_enabled.to_string()}
                                >
                                    {"CC"}
                                </button>
                            }
                            <button onclick={toggle_fullscreen} aria-label={if state.fullscreen { "Exit fullscreen" } else { "Fullscreen" }}>
                                { if state.fullscreen { "⤡" } else { "⤢" } }
                            </button>
                            <button class="player-close" onclick={on_close}>{"Close"}</button>
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .video-player {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    background: #000;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    outline: none;
                }
                .player-video {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .player-controls {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    transition: opacity 0.3s;
                }
                .player-controls.faded {
                    opacity: 0;
                }
                .player-controls.visible {
                    opacity: 1;
                }
                .seek-bar {
                    position: relative;
                    margin-bottom: 1rem;
                }
                .seek-buffered {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    height: 4px;
                    transform: translateY(-50%);
                    background: rgba(255, 255, 255, 0.35);
                    border-radius: 4px;
                    pointer-events: none;
                }
                .seek-bar input {
                    position: relative;
                    width: 100%;
                    accent-color: #3b82f6;
                }
                .player-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #fff;
                }
                .player-bar button {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    padding: 0.25rem;
                    border-radius: 0.25rem;
                }
                .player-bar button:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .player-bar-left,
                .player-bar-right {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .volume-group {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .volume-group input {
                    width: 0;
                    transition: width 0.3s;
                    accent-color: #3b82f6;
                }
                .volume-group:hover input {
                    width: 4rem;
                }
                .player-time {
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                .captions-toggle {
                    color: rgba(255, 255, 255, 0.5) !important;
                    font-weight: 700;
                }
                .captions-toggle.on {
                    color: #60a5fa !important;
                }
                .player-close {
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    background: rgba(255, 255, 255, 0.1) !important;
                    padding: 0.25rem 0.75rem !important;
                }
                .player-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }
                .player-error {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: rgba(0, 0, 0, 0.85);
                    color: #fff;
                    text-align: center;
                    padding: 2rem;
                }
                .player-error-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
