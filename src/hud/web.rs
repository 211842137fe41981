//! DOM-backed HUD

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{Hud, score_text};

/// Class that hides the restart button
const HIDDEN_CLASS: &str = "hidden";

pub struct DomHud {
    score: Element,
    restart: Element,
}

impl DomHud {
    /// Look up the score element and restart button by id
    pub fn new(document: &Document, score_id: &str, restart_id: &str) -> Result<Self, JsValue> {
        let score = document
            .get_element_by_id(score_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", score_id)))?;
        let restart = document
            .get_element_by_id(restart_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", restart_id)))?;
        Ok(Self { score, restart })
    }
}

impl Hud for DomHud {
    fn set_score(&mut self, score: u64) {
        self.score.set_text_content(Some(&score_text(score)));
    }

    fn set_restart_visible(&mut self, visible: bool) {
        let classes = self.restart.class_list();
        let result = if visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to toggle restart button: {:?}", e);
        }
    }
}
