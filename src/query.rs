//! Query-string building blocks: the canonical value encoder and the sortable parameter list.

pub mod encode;
pub mod params;

pub use encode::*;
pub use params::*;
