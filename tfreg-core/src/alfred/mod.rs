//! Launcher script filter output
//!
//! Models the JSON document a launcher's script filter reads and converts
//! registry search results into it.
//!
//! # Document shape
//!
//! ```text
//! {
//!     "items": [
//!         { "uid", "title", "subtitle", "arg", "quicklookurl",
//!           "type", "valid", "icon": {...}, "text": {...}, "mods": {...} }
//!     ]
//! }
//! ```

pub mod icons;
pub mod transform;
pub mod types;

pub use icons::{resolve_icon, GENERIC_ICON, KNOWN_PROVIDER_ICONS, REGISTRY_LOGO_ICON};
pub use transform::{
    ModifierKey, PrimaryAction, TransformOptions, Transformer, Variant, NO_RESULTS_TITLE,
};
pub use types::{Icon, Item, ItemType, ModifierAction, Mods, ScriptFilter, Text};
