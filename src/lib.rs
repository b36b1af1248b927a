//! Miscellaneous sequence utilities: Levenshtein distances, a fixed-capacity
//! evicting queue, and small string, bit-packing, and random-pick helpers,
//! with a wasm-bindgen surface for browser consumers.

pub mod bits;
pub mod bounded_queue;
pub mod levenshtein;
pub mod pick;
pub mod strings;

pub use bits::{bit_at, pack_bools, unpack_byte};
pub use bounded_queue::{BoundedQueue, EmptyQueue};
pub use levenshtein::{distance, slice_distance};
pub use pick::{random_item, random_item_with};
pub use strings::{capitalize, replace_at, StringError};

use wasm_bindgen::prelude::*;

use serde::Serialize;

/// One computed pair from a pairwise distance sweep.
#[derive(Debug, Serialize)]
pub struct PairDistance {
    pub left: u32,
    pub right: u32,
    pub distance: u32,
}

/// Computes the Levenshtein distance for every pair `left < right` of
/// `sequences`, in ascending `(left, right)` order.
pub fn pairwise_distances<S: AsRef<str>>(sequences: &[S]) -> Vec<PairDistance> {
    pairwise_distances_core(sequences, |_, _| {})
}

// Shared traversal; the wasm entry point layers its progress reporting on top
// through the closure.
fn pairwise_distances_core<S, P>(sequences: &[S], mut progress: P) -> Vec<PairDistance>
where
    S: AsRef<str>,
    P: FnMut(usize, usize),
{
    let char_sequences: Vec<Vec<char>> = sequences
        .iter()
        .map(|s| s.as_ref().chars().collect())
        .collect();

    let mut pairs = Vec::new();
    for (i, left) in char_sequences.iter().enumerate() {
        for (j, right) in char_sequences.iter().enumerate().skip(i + 1) {
            let dist = levenshtein::slice_distance(left, right);
            pairs.push(PairDistance {
                left: i as u32,
                right: j as u32,
                distance: dist as u32,
            });
        }
        log::debug!(
            "pairwise sweep: sequence {}/{}, {} pairs so far",
            i + 1,
            char_sequences.len(),
            pairs.len()
        );
        progress(i, pairs.len());
    }
    pairs
}

/// Levenshtein distance between two strings, counted in chars.
#[wasm_bindgen]
pub fn edit_distance(left: &str, right: &str) -> u32 {
    levenshtein::distance(left, right) as u32
}

/// Computes all pairwise distances among `sequences` and returns them as a
/// JSON array of `{left, right, distance}` objects. `progress_callback` is
/// invoked with a status string once per sequence.
#[wasm_bindgen]
pub fn pairwise_distances_json(
    sequences: Vec<String>,
    progress_callback: &js_sys::Function,
) -> Result<String, JsValue> {
    if sequences.is_empty() {
        return Err(JsValue::from_str("No sequences provided."));
    }
    let total = sequences.len();
    let pairs = pairwise_distances_core(&sequences, |current, pairs_so_far| {
        let _ = progress_callback.call1(
            &JsValue::NULL,
            &JsValue::from_str(&format!(
                "Pairwise distances: sequence {}/{} ({} pairs computed)...",
                current + 1,
                total,
                pairs_so_far
            )),
        );
    });
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "Pairwise sweep complete: {} sequences, {} pairs.",
        total,
        pairs.len()
    )));
    serde_json::to_string(&pairs)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

/// Fixed-capacity FIFO queue for JS consumers; the element type is erased to
/// `JsValue`.
#[wasm_bindgen]
pub struct EvictingQueue {
    inner: BoundedQueue<JsValue>,
}

#[wasm_bindgen]
impl EvictingQueue {
    #[wasm_bindgen(constructor)]
    pub fn new(max_entries: usize) -> EvictingQueue {
        EvictingQueue {
            inner: BoundedQueue::new(max_entries),
        }
    }

    /// Appends `item`, evicting the oldest entries once the queue is full.
    pub fn enqueue(&mut self, item: JsValue) {
        self.inner.enqueue(item);
    }

    /// Removes and returns the oldest entry; rejects when the queue is empty.
    pub fn dequeue(&mut self) -> Result<JsValue, JsValue> {
        self.inner
            .dequeue()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Snapshot of the contents, oldest first.
    pub fn read(&self) -> js_sys::Array {
        self.inner.iter().cloned().collect()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

#[wasm_bindgen(js_name = capitalize)]
pub fn capitalize_js(input: &str) -> Result<String, JsValue> {
    strings::capitalize(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Picks one element of `items` uniformly at random; `undefined` when empty.
#[wasm_bindgen]
pub fn pick_random(items: js_sys::Array) -> JsValue {
    let values: Vec<JsValue> = items.iter().collect();
    pick::random_item(&values)
        .cloned()
        .unwrap_or(JsValue::UNDEFINED)
}
