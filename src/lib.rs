//! Angle interaction and derived geometry for an interactive unit-circle explorer.
//!
//! The user drags a point around a unit circle; this crate turns each pointer
//! position into an angle, evaluates the six trigonometric functions at it,
//! builds the line segments that depict them on the circle, and samples their
//! waveforms over one period. It computes data only: a presentation layer
//! (SVG, canvas, or anything else) pulls a [`engine::Scene`] and draws it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: owns the angle, routes input, snapshots scenes |
//! | [`angle`] | Angle model, pointer-to-angle conversion, normalization and labels |
//! | [`trig`] | Function evaluation with explicit singularities, readout formatting |
//! | [`geometry`] | Unit-circle segment construction with asymptote suppression |
//! | [`wave`] | Waveform sampling, discontinuity breaks, current-angle markers |
//! | [`input`] | The idle/dragging pointer state machine |
//! | [`frame`] | Screen-space points and the circle/plot coordinate frames |
//! | [`config`] | Tunable thresholds, layouts and the enabled function set |
//! | [`consts`] | Default numeric constants |
//! | `bindings` | `wasm` feature: browser handle with element and window listeners |

pub mod angle;
#[cfg(feature = "wasm")]
pub mod bindings;
pub mod config;
pub mod consts;
pub mod engine;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod trig;
pub mod wave;
