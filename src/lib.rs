mod app;
mod mood_board;
mod utils;

pub mod config;
pub mod error;
pub mod layout_store;
pub mod placement;
pub mod projection;
pub mod storage;
pub mod types;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
