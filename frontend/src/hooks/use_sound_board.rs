use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use shared::Sound;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

use crate::config::get_asset_url;

/// One preloaded audio element per sound.
#[derive(Clone)]
pub struct SoundBoard {
    players: Rc<HashMap<Sound, HtmlAudioElement>>,
}

impl PartialEq for SoundBoard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.players, &other.players)
    }
}

impl SoundBoard {
    /// Starts `sound` from the beginning without waiting for it.
    pub fn play(&self, sound: Sound) {
        if let Some(audio) = self.players.get(&sound) {
            audio.set_current_time(0.0);
            start(sound, audio);
        }
    }

    /// Starts `sound` if it is silent, otherwise stops and rewinds it.
    pub fn toggle(&self, sound: Sound) {
        let Some(audio) = self.players.get(&sound) else {
            return;
        };

        if audio.paused() {
            start(sound, audio);
        } else {
            stop(audio);
        }
    }

    fn stop_all(&self) {
        for audio in self.players.values() {
            stop(audio);
        }
    }
}

fn start(sound: Sound, audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            // Autoplay policy rejects play() until the user has interacted with the page
            if let Err(err) = JsFuture::from(promise).await {
                warn!("Playback of {:?} was blocked: {:?}", sound, err);
            }
        }),
        Err(err) => warn!("Could not start {:?}: {:?}", sound, err),
    }
}

fn stop(audio: &HtmlAudioElement) {
    if let Err(err) = audio.pause() {
        warn!("Could not pause audio: {:?}", err);
    }
    audio.set_current_time(0.0);
}

#[hook]
pub fn use_sound_board(sounds: &'static [Sound]) -> SoundBoard {
    let players = use_memo(sounds, |sounds| {
        sounds
            .iter()
            .filter_map(|&sound| {
                match HtmlAudioElement::new_with_src(&get_asset_url(sound.file_name())) {
                    Ok(audio) => Some((sound, audio)),
                    Err(err) => {
                        warn!("Could not load {}: {:?}", sound.file_name(), err);
                        None
                    }
                }
            })
            .collect::<HashMap<_, _>>()
    });

    let board = SoundBoard { players };

    {
        let board = board.clone();
        use_effect_with((), move |_| move || board.stop_all());
    }

    board
}
