// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera framing and click-to-inspect controller for a 3D resort scene.
//!
//! The crate is renderer-agnostic: it owns the scene description (building,
//! courts, pool, furniture), hit-tests pointer input against it, keeps the
//! selection and its highlight overlay, and animates the camera toward
//! per-object poses. A host renderer calls
//! [`ResortEngine::frame`](engine::ResortEngine::frame) once per display
//! refresh and draws whatever the returned
//! [`FrameOutput`](engine::FrameOutput) and accessors describe.
//!
//! # Key entry points
//!
//! - [`engine::ResortEngine`] - the framing controller and frame loop
//! - [`engine::ResortCommand`] - every interaction as a value
//! - [`input::InputProcessor`] - raw pointer/key events to commands
//! - [`scene::Scene`] - the scene context owning every object
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! Everything is single-threaded and frame-driven. At most one camera tween
//! is active; starting a new one supersedes the old one from wherever the
//! camera currently is.

pub mod camera;
pub mod engine;
pub mod environment;
pub mod error;
pub mod framing;
pub mod input;
pub mod options;
pub mod overlay;
pub mod picking;
pub mod replay;
pub mod scene;
pub mod selection;
pub mod util;

pub use engine::{ResortCommand, ResortEngine};
pub use error::ResortError;
