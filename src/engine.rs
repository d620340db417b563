use serde::Serialize;

use crate::angle::{AngleModel, format_degrees_label, format_pi_label, slider_from_radians};
use crate::config::{ConfigError, VizConfig};
use crate::frame::{Point, Tick};
use crate::geometry::{CircleGeometry, CircleGeometryBuilder};
use crate::input::{DragController, DragState};
use crate::trig::{PythagoreanIdentity, Readout, TrigReading, evaluate};
use crate::wave::{Marker, WavePath, WaveformSampler};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Notifications returned from state-changing calls for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AngleChanged { radians: f64, degrees: f64 },
    DragStarted,
    DragEnded,
    /// Derived outputs changed; the host should pull a fresh [`Scene`].
    RenderNeeded,
}

/// Everything the presentation layer draws for the current angle.
///
/// Built in one pass from a single angle value, so no field can mix an old
/// angle with a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Raw angle as last set, radians.
    pub raw_angle: f64,
    /// Angle in `[0, 2π)`.
    pub angle: f64,
    pub degrees: f64,
    pub degrees_label: String,
    pub pi_label: String,
    /// Slider position in degrees.
    pub slider: f64,
    pub reading: TrigReading,
    pub readout: Readout,
    pub identity: PythagoreanIdentity,
    pub circle: CircleGeometry,
    pub arc_path: String,
    pub cursor_x: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub ticks: [Tick; 3],
    pub markers: Vec<Marker>,
    pub drag: DragState,
    pub revision: u64,
}

/// Core engine state: the angle, the drag machine and the derived builders.
///
/// Holds no browser handles so it can be tested natively. Waveform paths are
/// cached here and rebuilt only when the configuration changes.
pub struct EngineCore {
    config: VizConfig,
    model: AngleModel,
    drag: DragController,
    circle: CircleGeometryBuilder,
    sampler: WaveformSampler,
    waves: Vec<WavePath>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(VizConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from an already-validated config.
    #[must_use]
    pub fn with_config(config: VizConfig) -> Self {
        let circle = CircleGeometryBuilder::from_config(&config);
        let sampler = WaveformSampler::from_config(&config);
        let waves = sampler.sample_all();
        Self {
            config,
            model: AngleModel::new(config.initial_angle),
            drag: DragController::new(circle.frame().center),
            circle,
            sampler,
            waves,
        }
    }

    /// Build an engine from a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns any [`ConfigError`] from parsing or validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        VizConfig::from_json(raw).map(Self::with_config)
    }

    // --- Configuration ---

    /// Swap the configuration, keeping the current angle and drag state.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the engine untouched when the
    /// new config is invalid.
    pub fn set_config(&mut self, config: VizConfig) -> Result<Vec<Action>, ConfigError> {
        config.validate()?;
        let pointer_center = self.drag.center();
        let default_center = self.circle.frame().center;
        self.config = config;
        self.circle = CircleGeometryBuilder::from_config(&config);
        self.sampler = WaveformSampler::from_config(&config);
        self.waves = self.sampler.sample_all();
        // Follow the new layout unless the host placed the center itself.
        if pointer_center == default_center {
            self.drag.set_center(self.circle.frame().center);
        }
        tracing::debug!(waves = self.waves.len(), "config applied, waveforms rebuilt");
        Ok(vec![Action::RenderNeeded])
    }

    /// Where the circle's center sits in pointer-event coordinates.
    pub fn set_pointer_center(&mut self, center: Point) {
        self.drag.set_center(center);
    }

    // --- Angle entry points ---

    /// Set the angle directly (radians, any finite real).
    pub fn set_angle(&mut self, radians: f64) -> Vec<Action> {
        if self.model.set(radians) { self.angle_changed() } else { Vec::new() }
    }

    /// Set the angle from a slider value in degrees.
    pub fn set_angle_degrees(&mut self, degrees: f64) -> Vec<Action> {
        if self.model.set_degrees(degrees) { self.angle_changed() } else { Vec::new() }
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let was_idle = !self.drag.is_dragging();
        let changed = self.drag.pointer_engage(pt, &mut self.model);
        let mut actions = Vec::new();
        if was_idle {
            actions.push(Action::DragStarted);
        }
        if changed {
            actions.extend(self.angle_changed());
        }
        actions
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if self.drag.pointer_move(pt, &mut self.model) { self.angle_changed() } else { Vec::new() }
    }

    /// Release from anywhere: the element, the window, a cancelled touch.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.drag.pointer_release() { vec![Action::DragEnded] } else { Vec::new() }
    }

    fn angle_changed(&self) -> Vec<Action> {
        vec![
            Action::AngleChanged { radians: self.model.normalized(), degrees: self.model.degrees() },
            Action::RenderNeeded,
        ]
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    #[must_use]
    pub fn angle(&self) -> &AngleModel {
        &self.model
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub fn reading(&self) -> TrigReading {
        evaluate(self.model.get(), self.config.thresholds.epsilon)
    }

    #[must_use]
    pub fn geometry(&self) -> CircleGeometry {
        self.circle.build(self.model.get())
    }

    #[must_use]
    pub fn waves(&self) -> &[WavePath] {
        &self.waves
    }

    /// Snapshot every derived output for the current angle.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let raw = self.model.get();
        let reading = evaluate(raw, self.config.thresholds.epsilon);
        let circle = self.circle.build(raw);
        let plot = self.sampler.plot();
        Scene {
            raw_angle: raw,
            angle: self.model.normalized(),
            degrees: self.model.degrees(),
            degrees_label: format_degrees_label(raw),
            pi_label: format_pi_label(raw),
            slider: slider_from_radians(raw),
            readout: Readout::from_reading(&reading, self.config.thresholds.display_unbounded),
            identity: reading.identity(),
            reading,
            arc_path: circle.arc.svg_path(),
            circle,
            cursor_x: self.sampler.cursor_x(raw),
            plot_top: plot.top,
            plot_bottom: plot.bottom(),
            ticks: plot.ticks(),
            markers: self.sampler.markers(raw),
            drag: self.drag.state(),
            revision: self.model.revision(),
        }
    }

    /// [`Scene`] as JSON for a script host.
    ///
    /// # Errors
    ///
    /// Returns a serialization error (not expected for finite values).
    pub fn scene_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.scene())
    }

    /// Cached waveform paths as JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error (not expected for finite values).
    pub fn waves_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.waves)
    }
}
