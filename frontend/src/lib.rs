pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{admin::AdminAudioPreview, wheel::FrontendWheelGame};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Wheel,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Wheel | Route::NotFound => html! { <FrontendWheelGame /> },
        Route::Admin => html! { <AdminAudioPreview /> },
    }
}
