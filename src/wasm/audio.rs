use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{EventTarget, HtmlAudioElement, HtmlElement, MouseEvent};

use super::dom;
use super::page::PageRef;
use crate::audio::{toggle_action, ToggleAction};
use crate::error::InviteError;

const AUDIO_ID: &str = "main-audio";
const TOGGLE_ID: &str = "music-toggle";

fn elements(page: &PageRef) -> Result<(HtmlAudioElement, HtmlElement), InviteError> {
    Ok((
        dom::by_id(&page.document, AUDIO_ID)?,
        dom::by_id(&page.document, TOGGLE_ID)?,
    ))
}

/// Request playback; `on_playing` runs once the browser accepts it.
fn play(audio: &HtmlAudioElement, on_playing: impl FnOnce() + 'static) {
    let promise = match audio.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("audio play failed: {}", InviteError::from(e));
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => on_playing(),
            Err(e) => log::warn!("audio play failed: {}", InviteError::from(e)),
        }
    });
}

/// Start the music from the top on the visitor's opening gesture. Best effort:
/// a blocked autoplay only logs.
pub fn play_intro(page: &PageRef) {
    let Ok(audio) = dom::by_id::<HtmlAudioElement>(&page.document, AUDIO_ID) else {
        return;
    };
    let toggle = dom::by_id::<HtmlElement>(&page.document, TOGGLE_ID).ok();
    audio.set_volume(page.config.audio.volume);
    audio.set_current_time(0.0);
    let label = page.config.audio.intro_label.clone();
    play(&audio, move || {
        log::info!("audio playing");
        if let Some(toggle) = toggle {
            toggle.set_text_content(Some(label.as_str()));
        }
    });
}

/// Music button: play when paused, pause when playing.
pub fn wire_toggle(page: &PageRef) {
    dom::report("music toggle", wire(page));
}

fn wire(page: &PageRef) -> Result<(), InviteError> {
    let (audio, toggle) = elements(page)?;
    let target: EventTarget = toggle.clone().into();
    let playing = page.config.audio.playing_label.clone();
    let paused = page.config.audio.paused_label.clone();

    dom::on(&target, "click", move |_: MouseEvent| match toggle_action(audio.paused()) {
        ToggleAction::Play => {
            let toggle = toggle.clone();
            let label = playing.clone();
            play(&audio, move || toggle.set_text_content(Some(label.as_str())));
        }
        ToggleAction::Pause => {
            if let Err(e) = audio.pause() {
                log::warn!("audio pause failed: {}", InviteError::from(e));
            }
            toggle.set_text_content(Some(paused.as_str()));
        }
    })
}
