// Deterministic numerology primitives.
// Nothing in here touches the network; the LLM-backed parts live in `fortune`.

pub mod calendar;
pub mod life_path;

pub use calendar::{Locale, Season};
pub use life_path::{compute_life_path_number, LifePathNumber};
