//! Kanji to kana/romaji transliteration.
//!
//! The centerpiece is the kanwa dictionary ([`KanwaDict`]): readings keyed
//! by their first kanji, overlaid on an optional binary backing file whose
//! per-key segments load lazily on first lookup. On top of it sit the
//! longest-match resolver ([`convert::KanjiConverter`]), kana and romaji
//! converters, and the configurable [`Transliterator`] driver.
//!
//! ```no_run
//! use std::sync::Arc;
//! use yomi_core::{ItaijiTable, KanwaDict, Target, Transliterator};
//!
//! let itaiji = Arc::new(ItaijiTable::new());
//! let dict = Arc::new(KanwaDict::new(itaiji.clone()));
//! dict.add_entry("言", "い", Some('u'));
//! let mut tl = Transliterator::new(dict, itaiji);
//! tl.set_kanji_target(Some(Target::Hiragana));
//! assert_eq!(tl.convert_string("言う").unwrap(), "いう");
//! ```

pub mod convert;
pub mod dict;
pub mod input;
pub mod itaiji;
pub mod output;
pub mod translit;
pub mod unicode;

pub use convert::{RomajiSystem, Target};
pub use dict::{DictError, KanwaDict, YomiEntry};
pub use input::KanjiInput;
pub use itaiji::ItaijiTable;
pub use output::KanjiOutput;
pub use translit::{Transliterator, TranslitError};
