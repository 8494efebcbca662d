use yew::prelude::*;

use crate::config::BoardConfig;
use crate::mood_board::MoodBoard;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <MoodBoard config={BoardConfig::default()} />
    }
}
