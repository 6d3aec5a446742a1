//! Request/response protocol for numeric choices made during item use.
//!
//! The core never reads input itself. It builds an [`InputRequest`] and hands
//! it to an [`InputSource`], which may be a terminal prompt, a UI dialog, or a
//! scripted source in tests.

use alloc::format;
use alloc::string::String;

use crate::item::Item;

/// A request for a number in `1..=max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    /// Text to show to the user.
    pub message: String,
    /// Largest accepted value.
    pub max: usize,
}

impl InputRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(message: String, max: usize) -> Self {
        Self { message, max }
    }

    /// Asks which of `items` to use.
    #[must_use]
    pub fn choose_item(items: &[Item]) -> Self {
        let mut message = String::from("Which item do you use?\n");
        for (index, item) in items.iter().enumerate() {
            message.push_str(&format!("{}: {item}\n", index + 1));
        }
        Self::new(message, items.len())
    }

    /// Asks which of `hand_len` cards `item` applies to.
    #[must_use]
    pub fn choose_card(item: Item, hand_len: usize) -> Self {
        Self::new(
            format!("{}\n(1-{hand_len}, counting from the left)", item.card_prompt()),
            hand_len,
        )
    }

    /// Returns whether `value` answers this request.
    #[must_use]
    pub const fn accepts(&self, value: usize) -> bool {
        value >= 1 && value <= self.max
    }
}

/// Something that can answer [`InputRequest`]s.
pub trait InputSource {
    /// Returns the raw reply, or `None` if the user cancelled.
    fn respond(&mut self, request: &InputRequest) -> Option<String>;
}

impl<F> InputSource for F
where
    F: FnMut(&InputRequest) -> Option<String>,
{
    fn respond(&mut self, request: &InputRequest) -> Option<String> {
        self(request)
    }
}

/// Asks `input` until it replies with a number in `1..=request.max`.
///
/// Replies that are not numbers, or are out of range, repeat the request.
/// Returns `None` if the source cancels, or straight away if no value could
/// ever be accepted.
pub fn prompt_for_number<I: InputSource + ?Sized>(
    input: &mut I,
    request: &InputRequest,
) -> Option<usize> {
    if request.max == 0 {
        return None;
    }

    loop {
        let reply = input.respond(request)?;
        match reply.trim().parse::<usize>() {
            Ok(value) if request.accepts(value) => return Some(value),
            _ => log::trace!("rejected input {reply:?} (expected 1-{})", request.max),
        }
    }
}
