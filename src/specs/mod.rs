// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! One spec per page (or message view). Each spec encodes *where the ground
//! truth lives in the markup* and *how to read it without guessing*.
//!
//! ## What lives here
//! - **Pure extraction** from an already parsed `core::Doc` (or raw bytes for
//!   the empire JSON), driven by a `config::Dialect` where layout varies.
//! - **Absence rules** per field group: zeros for the resource bar, an empty
//!   queue, `information_available = false`, or `StructuralMismatch` when the
//!   identity of the thing cannot be established.
//! - **Shaping** into `model` values.
//!
//! ## What does **not** live here
//! - Fetching pages, sessions, retries: callers hand us bytes.
//! - Detecting the revision from the page: the caller picks the dialect.
//! - Logging setup: specs only emit `logd!` events.
//!
//! ## Typical call chain
//! ```text
//! caller → Extractor::<group>(bytes) → Doc::parse → specs::<page>::extract_*
//!                                                 ↘ model value / ExtractError
//! ```
//!
//! ## Current specs
//! - `overview` – resource bar tooltips and the shipyard production queue.
//! - `empire` – per-celestial snapshots from the empire page's embedded JSON.
//! - `espionage` – one espionage report from its message detail view.
//! - `cancel` – token and ids needed to cancel research / lifeform building.
//!
//! In short: **`specs` knows how to read the pages.** Everything else is up to
//! the caller.
pub mod cancel;
pub mod empire;
pub mod espionage;
pub mod overview;

pub use cancel::{CancelInfo, extract_cancel_lf_building_infos, extract_cancel_research_infos};
pub use empire::extract_empire;
pub use espionage::extract_espionage_report;
pub use overview::{extract_production_queue, extract_resources};
