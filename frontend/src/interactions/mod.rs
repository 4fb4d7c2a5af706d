//! Browser-independent state machines behind the page's widgets.

pub mod accordion;
pub mod carousel;
pub mod consent;
pub mod counter;
pub mod language;
pub mod reveal;
pub mod scroll;
pub mod title;
