mod fireworks;
mod prize_overlays;

use log::{debug, warn};
use shared::{PayoutClass, Sound, SpinEvent};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{get_asset_url, load_wheel_config};
use crate::hooks::{use_sound_board, use_spin_sequencer};
use crate::styles;

use fireworks::FireworksCanvas;
use prize_overlays::{BasicChance, CarChance, MoneyPrize};

const WHEEL_SOUNDS: &[Sound] = &[Sound::Spin, Sound::BigWin];

// The timeline keeps running when the wheel is not mounted; only the visual step is lost
fn rotate_wheel(wheel_ref: &NodeRef, degrees: f64) {
    let Some(wheel) = wheel_ref.cast::<HtmlElement>() else {
        warn!("Wheel element not mounted, skipping rotation to {}deg", degrees);
        return;
    };

    if let Err(err) = wheel
        .style()
        .set_property("transform", &format!("rotate({}deg)", degrees))
    {
        warn!("Failed to rotate wheel: {:?}", err);
    }
}

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    let config = use_memo((), |_| load_wheel_config());
    let wheel_ref = use_node_ref();
    let sounds = use_sound_board(WHEEL_SOUNDS);

    let celebration = use_state(|| None::<PayoutClass>);
    // Outlives the celebration so the exit transition still shows the amount
    let money_amount = use_state(|| 0u32);
    let particles = use_state(|| None::<f64>);

    let on_event = {
        let wheel_ref = wheel_ref.clone();
        let sounds = sounds.clone();
        let celebration = celebration.clone();
        let money_amount = money_amount.clone();
        let particles = particles.clone();

        Callback::from(move |event: SpinEvent| match event {
            SpinEvent::PlaySound { sound } => sounds.play(sound),
            SpinEvent::Rotate { degrees } => rotate_wheel(&wheel_ref, degrees),
            SpinEvent::ShowCelebration { payout } => {
                if let Some(amount) = payout.amount() {
                    money_amount.set(amount);
                }
                celebration.set(Some(payout));
            }
            SpinEvent::ClearCelebration => celebration.set(None),
            SpinEvent::StartParticles { intensity } => particles.set(Some(intensity)),
            SpinEvent::StopParticles => particles.set(None),
            SpinEvent::SpinControl { enabled } => debug!("Spin control enabled: {}", enabled),
        })
    };

    let sequencer = use_spin_sequencer((*config).clone(), on_event);
    let onclick = sequencer.spin.reform(|_: MouseEvent| ());

    let showing = *celebration;

    html! {
        <main class={styles::PAGE}>
            <div class={styles::OVERLAY_LAYER}>
                <FireworksCanvas intensity={*particles} />
                <CarChance visible={showing == Some(PayoutClass::CarChance)} />
                <BasicChance visible={showing == Some(PayoutClass::BasicChance)} />
                <MoneyPrize
                    visible={matches!(showing, Some(PayoutClass::Cash(_)))}
                    amount={*money_amount}
                />
            </div>

            <div class={styles::HEADER}>
                <h2 class={styles::TITLE}>{"Поле чудес"}</h2>
                <button
                    class={styles::SPIN_BUTTON}
                    disabled={!sequencer.snapshot.spin_enabled}
                    {onclick}
                >
                    {"Крутить"}
                </button>
            </div>

            <div class={styles::WHEEL_AREA}>
                <img
                    ref={wheel_ref}
                    alt=""
                    src={get_asset_url("wheel.png")}
                    class={styles::WHEEL_IMAGE}
                />
                <img alt="" src={get_asset_url("spinner.png")} class={styles::POINTER_IMAGE} />
            </div>
        </main>
    }
}
