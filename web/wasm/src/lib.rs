use deckrs::{Card, DealOrder, DeckError, Player, SetupOptions, Table};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(hand_size: u32, players: u32, round_robin: bool, seed: u32) -> Self {
        let order = if round_robin {
            DealOrder::RoundRobin
        } else {
            DealOrder::Block
        };
        let options = SetupOptions::default()
            .with_hand_size(hand_size as usize)
            .with_players(players as usize)
            .with_deal_order(order);

        Self {
            table: Table::new(options, seed as u64),
        }
    }

    pub fn reseed(&mut self, seed: u32) {
        self.table.reseed(seed as u64);
    }

    pub fn setup(&mut self, cards: JsValue) -> Result<JsValue, JsValue> {
        let cards = cards_from_js(cards)?;
        let players = self.table.setup(&cards).map_err(js_err)?;
        players_to_js(&players)
    }
}

#[wasm_bindgen(js_name = createCards)]
pub fn create_cards(suits: JsValue, values: JsValue) -> Result<JsValue, JsValue> {
    let suits = untyped(suits)?;
    let values = untyped(values)?;
    let cards = deckrs::create_cards_from_json(&suits, &values).map_err(js_err)?;
    to_js_value(&cards)
}

#[wasm_bindgen(js_name = standardDeck)]
pub fn standard_deck() -> Result<JsValue, JsValue> {
    to_js_value(&deckrs::standard_deck())
}

#[wasm_bindgen(js_name = setupGame)]
pub fn setup_game(
    cards: JsValue,
    hand_size: u32,
    players: u32,
    seed: u32,
) -> Result<JsValue, JsValue> {
    let mut table = WasmTable::new(hand_size, players, false, seed);
    table.setup(cards)
}

// `undefined` and other values serde cannot read are reported as a type error.
fn untyped(value: JsValue) -> Result<serde_json::Value, JsValue> {
    if value.is_undefined() {
        return Err(js_err(DeckError::InvalidArgumentType));
    }
    serde_wasm_bindgen::from_value(value).map_err(|_| js_err(DeckError::InvalidArgumentType))
}

fn cards_from_js(cards: JsValue) -> Result<Vec<Card>, JsValue> {
    serde_wasm_bindgen::from_value(cards).map_err(js_err)
}

fn players_to_js(players: &[Player]) -> Result<JsValue, JsValue> {
    to_js_value(players)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
