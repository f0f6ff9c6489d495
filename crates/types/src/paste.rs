//! Pastebin actor request envelopes

use serde::{Deserialize, Serialize};

/// Path prefix of the pastebin actor on the backend
pub const ACTOR_PATH: &str = "/actors/pastebin";

/// Remote methods exposed by the pastebin actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteAction {
    /// Fetch an existing paste by id
    GetPaste,
    /// Store a new paste
    NewPaste,
}

impl PasteAction {
    /// Actor method name
    pub fn method(&self) -> &'static str {
        match self {
            PasteAction::GetPaste => "get_paste",
            PasteAction::NewPaste => "new_paste",
        }
    }

    /// Full request path, e.g. `/actors/pastebin/get_paste`
    pub fn path(&self) -> String {
        format!("{}/{}", ACTOR_PATH, self.method())
    }
}

/// Actor call envelope: every actor method takes its arguments under `args`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasteRequest<A> {
    pub args: A,
}

impl<A> PasteRequest<A> {
    pub fn new(args: A) -> Self {
        Self { args }
    }
}

/// Arguments of `get_paste`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetPasteArgs<I> {
    /// Opaque paste identifier, sent as-is
    pub paste_id: I,
}

/// Arguments of `new_paste`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPasteArgs<'a> {
    /// Paste contents
    pub code: &'a str,
}
