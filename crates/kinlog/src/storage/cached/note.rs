//! Cached access to notes.
//!
//! Notes are listed per progeny under `note:progeny:{id}`. Every write
//! removes that list so the next read rebuilds it from the store.

use super::CachedAccessor;
use kinlog_core::model::Note;

pub type NoteAccessor<S, C> = CachedAccessor<Note, S, C>;
