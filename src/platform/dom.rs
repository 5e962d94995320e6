//! DOM lookups and the DOM score display (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use crate::error::SetupError;
use crate::hud::ScoreDisplay;
use crate::sim::Player;

/// Id of the game's `<canvas>`
pub const CANVAS_ID: &str = "the_canvas";

/// Id of the element showing a player's score
pub fn score_element_id(player: Player) -> &'static str {
    match player {
        Player::One => "inputOne",
        Player::Two => "inputTwo",
    }
}

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, SetupError> {
    window.document().ok_or(SetupError::NoDocument)
}

pub fn element(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))
}

pub fn canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, SetupError> {
    element(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::NotACanvas(id.to_string()))
}

/// Writes scores into the page's two score elements
pub struct DomScoreDisplay {
    elements: [Element; 2],
}

impl DomScoreDisplay {
    /// Look up both score elements; either missing is fatal
    pub fn new(document: &Document) -> Result<Self, SetupError> {
        Ok(Self {
            elements: [
                element(document, score_element_id(Player::One))?,
                element(document, score_element_id(Player::Two))?,
            ],
        })
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn show(&mut self, player: Player, score: u32) {
        self.elements[player.index()].set_text_content(Some(&score.to_string()));
    }
}
