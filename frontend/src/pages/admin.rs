use shared::Sound;
use yew::prelude::*;

use crate::hooks::use_sound_board;
use crate::styles;

/// Host controls: one button per show sound, each toggling playback.
#[function_component(AdminAudioPreview)]
pub fn admin_audio_preview() -> Html {
    let sounds = use_sound_board(Sound::ADMIN_PREVIEW);

    html! {
        <div class={styles::ADMIN_LIST}>
            { for Sound::ADMIN_PREVIEW.iter().map(|&sound| {
                let sounds = sounds.clone();
                html! {
                    <button
                        key={sound.file_name()}
                        class={styles::ADMIN_BUTTON}
                        onclick={Callback::from(move |_| sounds.toggle(sound))}
                    >
                        {sound.label()}
                    </button>
                }
            }) }
        </div>
    }
}
