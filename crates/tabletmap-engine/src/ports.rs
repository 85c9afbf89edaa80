//! Capability traits separating mapping logic from process I/O.
//!
//! The resolver and pipeline only ever talk to these traits. Production code
//! plugs in the process-backed adapters ([`crate::XSetWacomPort`],
//! [`crate::XrandrSource`]); tests plug in [`mock::MockTabletPort`].

use tabletmap_geometry::Rect;
use tabletmap_xrandr_protocol::Monitor;
use tabletmap_xsetwacom_protocol::TabletDevice;

use crate::EngineError;

/// Capability to read and rewrite one tablet device's input area.
///
/// `area` and `set_area` address the currently active rectangle;
/// `reset_area` restores the factory default. Every call is an independent
/// external operation that may fail.
pub trait TabletPort: Send + Sync {
    /// Read the device's active input area.
    fn area(&self, device: &TabletDevice) -> Result<Rect, EngineError>;

    /// Replace the device's active input area.
    fn set_area(&self, device: &TabletDevice, area: Rect) -> Result<(), EngineError>;

    /// Restore the device's factory-default input area.
    fn reset_area(&self, device: &TabletDevice) -> Result<(), EngineError>;

    /// Constrain the device's pointer to one display output.
    fn map_to_output(&self, device: &TabletDevice, output: &str) -> Result<(), EngineError>;
}

/// Capability to enumerate tablet input devices.
pub trait DeviceSource: Send + Sync {
    /// List all connected tablet input devices.
    fn devices(&self) -> Result<Vec<TabletDevice>, EngineError>;
}

/// Capability to enumerate connected, active monitors.
pub trait MonitorSource: Send + Sync {
    /// List connected, active monitors.
    fn monitors(&self) -> Result<Vec<Monitor>, EngineError>;
}

pub mod mock {
    //! Scriptable in-memory port for tests that must not touch hardware.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use tabletmap_geometry::Rect;
    use tabletmap_xsetwacom_protocol::TabletDevice;

    use super::TabletPort;
    use crate::EngineError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Failure {
        /// Fail the nth `area` call (1-based).
        Area(usize),
        /// Fail the nth `set_area` call (1-based).
        SetArea(usize),
        ResetArea,
        MapToOutput,
    }

    /// In-memory [`TabletPort`] that replays scripted `area` reads and
    /// records every write.
    ///
    /// At most one operation can be armed to fail; failed calls are counted
    /// but leave no trace in the write histories, mirroring a utility that
    /// exited before doing anything.
    pub struct MockTabletPort {
        area_queue: Mutex<VecDeque<Rect>>,
        area_calls: Mutex<usize>,
        set_calls: Mutex<usize>,
        reset_calls: Mutex<usize>,
        set_history: Mutex<Vec<Rect>>,
        mapped_outputs: Mutex<Vec<String>>,
        failure: Option<Failure>,
    }

    impl MockTabletPort {
        /// Mock whose successive `area` calls return `areas` in order.
        pub fn new(areas: impl IntoIterator<Item = Rect>) -> Self {
            Self {
                area_queue: Mutex::new(areas.into_iter().collect()),
                area_calls: Mutex::new(0),
                set_calls: Mutex::new(0),
                reset_calls: Mutex::new(0),
                set_history: Mutex::new(Vec::new()),
                mapped_outputs: Mutex::new(Vec::new()),
                failure: None,
            }
        }

        /// Arm the nth `area` call (1-based) to fail.
        #[must_use]
        pub fn failing_area_call(mut self, call: usize) -> Self {
            self.failure = Some(Failure::Area(call));
            self
        }

        /// Arm the nth `set_area` call (1-based) to fail.
        #[must_use]
        pub fn failing_set_area_call(mut self, call: usize) -> Self {
            self.failure = Some(Failure::SetArea(call));
            self
        }

        /// Arm every `reset_area` call to fail.
        #[must_use]
        pub fn failing_reset(mut self) -> Self {
            self.failure = Some(Failure::ResetArea);
            self
        }

        /// Arm every `map_to_output` call to fail.
        #[must_use]
        pub fn failing_map(mut self) -> Self {
            self.failure = Some(Failure::MapToOutput);
            self
        }

        /// How many times `area` was called.
        pub fn area_calls(&self) -> usize {
            *self.area_calls.lock().unwrap_or_else(|e| e.into_inner())
        }

        /// How many times `set_area` was called, failures included.
        pub fn set_calls(&self) -> usize {
            *self.set_calls.lock().unwrap_or_else(|e| e.into_inner())
        }

        /// How many times `reset_area` was called, failures included.
        pub fn reset_calls(&self) -> usize {
            *self.reset_calls.lock().unwrap_or_else(|e| e.into_inner())
        }

        /// Every rectangle successfully written through `set_area`.
        pub fn set_history(&self) -> Vec<Rect> {
            self.set_history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        /// Every output successfully mapped through `map_to_output`.
        pub fn mapped_outputs(&self) -> Vec<String> {
            self.mapped_outputs
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        fn injected(operation: &'static str) -> EngineError {
            EngineError::Launch {
                program: format!("mock-{operation}"),
                source: std::io::Error::other("injected mock failure"),
            }
        }
    }

    impl TabletPort for MockTabletPort {
        fn area(&self, _device: &TabletDevice) -> Result<Rect, EngineError> {
            let call = {
                let mut calls = self.area_calls.lock().unwrap_or_else(|e| e.into_inner());
                *calls += 1;
                *calls
            };
            if self.failure == Some(Failure::Area(call)) {
                return Err(Self::injected("area"));
            }
            self.area_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .ok_or_else(|| Self::injected("area"))
        }

        fn set_area(&self, _device: &TabletDevice, area: Rect) -> Result<(), EngineError> {
            let call = {
                let mut calls = self.set_calls.lock().unwrap_or_else(|e| e.into_inner());
                *calls += 1;
                *calls
            };
            if self.failure == Some(Failure::SetArea(call)) {
                return Err(Self::injected("set area"));
            }
            self.set_history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(area);
            Ok(())
        }

        fn reset_area(&self, _device: &TabletDevice) -> Result<(), EngineError> {
            *self.reset_calls.lock().unwrap_or_else(|e| e.into_inner()) += 1;
            if self.failure == Some(Failure::ResetArea) {
                return Err(Self::injected("reset area"));
            }
            Ok(())
        }

        fn map_to_output(&self, _device: &TabletDevice, output: &str) -> Result<(), EngineError> {
            if self.failure == Some(Failure::MapToOutput) {
                return Err(Self::injected("map to output"));
            }
            self.mapped_outputs
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(output.to_string());
            Ok(())
        }
    }
}
