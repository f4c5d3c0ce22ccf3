use gloo_timers::callback::Timeout;
use shared::constants::OVERLAY_TRANSITION_MS;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

#[derive(Debug, Clone, Copy, PartialEq)]
enum OverlayStatus {
    Unmounted,
    Entering,
    Entered,
    Exiting,
}

impl OverlayStatus {
    fn is_transitioning(self) -> bool {
        matches!(self, OverlayStatus::Entering | OverlayStatus::Exiting)
    }
}

/// Mounts on show, unmounts once the exit transition has played.
#[hook]
fn use_overlay_transition(visible: bool) -> OverlayStatus {
    let status = use_state(|| OverlayStatus::Unmounted);

    {
        let status = status.clone();
        use_effect_with(visible, move |&visible| {
            let (during, after) = if visible {
                (OverlayStatus::Entering, OverlayStatus::Entered)
            } else {
                (OverlayStatus::Exiting, OverlayStatus::Unmounted)
            };

            let timeout = if visible || *status != OverlayStatus::Unmounted {
                status.set(during);
                Some(Timeout::new(OVERLAY_TRANSITION_MS, move || status.set(after)))
            } else {
                None
            };

            move || drop(timeout)
        });
    }

    *status
}

#[derive(Properties, PartialEq)]
pub struct MoneyPrizeProps {
    pub visible: bool,
    pub amount: u32,
}

#[function_component(MoneyPrize)]
pub fn money_prize(props: &MoneyPrizeProps) -> Html {
    let status = use_overlay_transition(props.visible);
    if status == OverlayStatus::Unmounted {
        return html! {};
    }

    html! {
        <div class={classes!(
            styles::OVERLAY_BOX,
            "flex",
            "justify-center",
            "items-center",
            "transition-all",
            "duration-300",
            status.is_transitioning().then_some("scale-0 translate-y-3")
        )}>
            <p class={styles::MONEY_TEXT}>{props.amount}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChanceProps {
    pub visible: bool,
}

#[function_component(CarChance)]
pub fn car_chance(props: &ChanceProps) -> Html {
    let status = use_overlay_transition(props.visible);
    if status == OverlayStatus::Unmounted {
        return html! {};
    }

    html! {
        <div class={styles::OVERLAY_BOX}>
            <span class={classes!(
                "absolute",
                "scale-150",
                "w-full",
                "h-full",
                "transition-all",
                "duration-300",
                "flex",
                status.is_transitioning().then_some("opacity-0 scale-0")
            )}>
                <img
                    alt=""
                    src={get_asset_url("rays.png")}
                    class="animate-spin w-full h-full"
                    style="animation-duration: 5s"
                />
            </span>
            <img
                alt=""
                src={get_asset_url("car.png")}
                class={classes!(
                    "absolute",
                    "w-full",
                    "h-full",
                    "transition-transform",
                    "duration-300",
                    status.is_transitioning().then_some("scale-0")
                )}
            />
        </div>
    }
}

#[function_component(BasicChance)]
pub fn basic_chance(props: &ChanceProps) -> Html {
    let status = use_overlay_transition(props.visible);
    if status == OverlayStatus::Unmounted {
        return html! {};
    }

    html! {
        <div class={styles::OVERLAY_BOX}>
            <img
                alt=""
                src={get_asset_url("chance.png")}
                class={classes!(
                    "absolute",
                    "w-full",
                    "h-full",
                    "transition-transform",
                    "duration-300",
                    status.is_transitioning().then_some("scale-0")
                )}
            />
        </div>
    }
}
