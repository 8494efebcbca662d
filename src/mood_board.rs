use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::BoardConfig;
use crate::error::MoodBoardError;
use crate::layout_store::LayoutStore;
use crate::placement::{PlacementController, PlacementSession};
use crate::projection::{render_element, BoardItems};
use crate::storage::BoardStorage;
use crate::utils::{client_point, element_origin, preview_style};

const BOARD_WIDTH: f64 = 800.0;
const BOARD_HEIGHT: f64 = 600.0;

#[derive(Properties, PartialEq)]
pub struct MoodBoardProps {
    #[prop_or_default]
    pub config: BoardConfig,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
}

#[function_component(MoodBoard)]
pub fn mood_board(props: &MoodBoardProps) -> Html {
    // Layout + placement state. Window listeners need the live values, so
    // both live behind refs; `document` and `session` mirror them for rendering.
    let store = {
        let config = props.config.clone();
        use_mut_ref(move || LayoutStore::open(BoardStorage::detect(), &config))
    };
    let controller = {
        let config = props.config.clone();
        use_mut_ref(move || PlacementController::new(config))
    };
    let document = {
        let store = store.clone();
        use_state(move || store.borrow().document().clone())
    };
    let session = use_state(|| None::<PlacementSession>);
    let image_url = use_state(String::new);
    let text_value = use_state(String::new);
    let board_ref = use_node_ref();

    let placing = session.is_some();

    // Follow the pointer anywhere on the page while placing; Escape aborts.
    {
        let controller = controller.clone();
        let session = session.clone();
        use_effect_with(placing, move |placing| -> Box<dyn FnOnce()> {
            if !*placing {
                return Box::new(|| ());
            }

            let document = gloo::utils::document();

            let mousemove_listener = {
                let controller = controller.clone();
                let session = session.clone();
                EventListener::new(&document, "mousemove", move |event| {
                    let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let mut controller = controller.borrow_mut();
                    if controller.pointer_moved(client_point(mouse_event)) {
                        session.set(controller.session().cloned());
                    }
                })
            };

            let keydown_listener = EventListener::new(&document, "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                    if keyboard_event.key() == "Escape" && controller.borrow_mut().abort().is_some() {
                        keyboard_event.prevent_default();
                        session.set(None);
                    }
                }
            });

            Box::new(move || {
                drop(mousemove_listener);
                drop(keydown_listener);
            })
        });
    }

    let on_image_input = {
        let image_url = image_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                image_url.set(value);
            }
        })
    };

    let on_text_input = {
        let text_value = text_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                text_value.set(value);
            }
        })
    };

    let on_add_image = {
        let controller = controller.clone();
        let session = session.clone();
        let image_url = image_url.clone();
        Callback::from(move |_: MouseEvent| {
            let result = controller
                .borrow_mut()
                .request_image(&image_url)
                .map(|spawned| spawned.clone());
            match result {
                Ok(spawned) => session.set(Some(spawned)),
                Err(err @ MoodBoardError::InvalidImageUrl(_)) => {
                    log::info!("rejected image: {}", err);
                    gloo::dialogs::alert(&controller.borrow().config().invalid_image_notice);
                    image_url.set(String::new());
                }
                Err(err) => log::info!("ignored add-image: {}", err),
            }
        })
    };

    let on_add_text = {
        let controller = controller.clone();
        let session = session.clone();
        let text_value = text_value.clone();
        Callback::from(move |_: MouseEvent| {
            let result = controller
                .borrow_mut()
                .request_text(&text_value)
                .map(|spawned| spawned.clone());
            match result {
                Ok(spawned) => session.set(Some(spawned)),
                Err(err @ MoodBoardError::BlankText) => {
                    log::info!("rejected text: {}", err);
                    gloo::dialogs::alert(&controller.borrow().config().invalid_text_notice);
                    text_value.set(String::new());
                }
                Err(err) => log::info!("ignored add-text: {}", err),
            }
        })
    };

    let on_clear = {
        let controller = controller.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = controller.borrow().ensure_idle() {
                log::info!("ignored clear: {}", err);
                return;
            }
            if let Err(err) = store.borrow_mut().clear_all() {
                log::error!("failed to clear mood board: {}", err);
            }
            if let Err(err) = gloo::utils::window().location().reload() {
                log::error!("failed to reload after clear: {:?}", err);
            }
        })
    };

    let on_board_click = {
        let controller = controller.clone();
        let store = store.clone();
        let document = document.clone();
        let session = session.clone();
        let image_url = image_url.clone();
        let text_value = text_value.clone();
        let board_ref = board_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(board) = board_ref.cast::<Element>() else {
                return;
            };
            let committed = controller
                .borrow_mut()
                .commit(client_point(&e), element_origin(&board));
            let Some(item) = committed else {
                return;
            };

            let mut store = store.borrow_mut();
            if let Err(err) = store.append(item) {
                log::error!("failed to save mood board, item not placed: {}", err);
            }
            document.set(store.document().clone());
            session.set(None);
            image_url.set(String::new());
            text_value.set(String::new());
        })
    };

    let pending = match &*session {
        Some(active) => render_element(
            active.element.kind,
            &active.element.content,
            active.preview.map(preview_style),
        ),
        None => html! {},
    };

    html! {
        <div class="flex flex-col items-center gap-4 p-4 bg-gray-100 min-h-screen">
            <div class="flex flex-wrap gap-2 items-center">
                <input
                    id="image-url"
                    type="text"
                    placeholder="Image URL"
                    value={(*image_url).clone()}
                    oninput={on_image_input}
                    class="px-3 py-1 border border-gray-300 rounded text-sm"
                />
                <button
                    id="add-image"
                    onclick={on_add_image}
                    disabled={placing}
                    class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Add Image"}
                </button>
                <input
                    id="text-input"
                    type="text"
                    placeholder="Text"
                    value={(*text_value).clone()}
                    oninput={on_text_input}
                    class="px-3 py-1 border border-gray-300 rounded text-sm"
                />
                <button
                    id="add-text"
                    onclick={on_add_text}
                    disabled={placing}
                    class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Add Text"}
                </button>
                <button
                    id="clear-all"
                    onclick={on_clear}
                    disabled={placing}
                    class="px-3 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Clear All"}
                </button>
            </div>

            <div
                ref={board_ref}
                id="mood-board"
                onclick={on_board_click}
                class="bg-white border border-gray-300 overflow-hidden"
                style={format!(
                    "position: relative; width: {}px; height: {}px;",
                    BOARD_WIDTH, BOARD_HEIGHT
                )}
            >
                <BoardItems document={(*document).clone()} />
            </div>

            // Not yet on the board: rendered outside it until committed.
            {pending}
        </div>
    }
}
