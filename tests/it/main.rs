//! Single test binary entry point.
//!
//! All tests live in one binary to keep linking overhead down.
//!
//! Structure:
//! - unit: single-component tests (store, geometry, embed URLs, imaging,
//!   library, notifications)
//! - integration: multi-component workflows (drag lifecycle, save/load,
//!   background jobs, export)
