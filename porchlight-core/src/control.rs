//! Control loop
//!
//! Peripheral bring-up happens before a `ControlLoop` is built. From then
//! on the loop has a single state, running: sample the sensor, drive the
//! light and panel, report status, repeat until power-off.

use crate::presence::{apply_presence, LightState};
use crate::status::report_status;
use crate::traits::HardwareIo;

/// Result of one pass through the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    /// Pass number, starting at 1 (wraps)
    pub number: u32,
    /// Light state driven this pass
    pub light: LightState,
    /// Light state differs from the previous pass (always true on the first)
    pub changed: bool,
}

/// The sense-map-report loop
///
/// Owns the board I/O exclusively. The only thing remembered between
/// passes is the previous light state, and that is used for reporting
/// edges to the caller, never to skip hardware writes.
pub struct ControlLoop<IO> {
    io: IO,
    previous: Option<LightState>,
    iterations: u32,
}

impl<IO: HardwareIo> ControlLoop<IO> {
    /// Wrap already-initialized board I/O
    pub fn new(io: IO) -> Self {
        Self {
            io,
            previous: None,
            iterations: 0,
        }
    }

    /// Run a single pass
    ///
    /// The status line is sent even if the display write failed; the
    /// first error of the pass is returned.
    pub fn step(&mut self) -> Result<Iteration, IO::Error> {
        let sensor_active = self.io.read_input_pin();

        let presence = apply_presence(&mut self.io, sensor_active);
        let status = report_status(&mut self.io, sensor_active);

        self.iterations = self.iterations.wrapping_add(1);
        let light = LightState::from_sensor(sensor_active);
        let changed = self.previous.replace(light) != Some(light);

        presence?;
        status?;

        Ok(Iteration {
            number: self.iterations,
            light,
            changed,
        })
    }

    /// Loop forever, handing every pass outcome to `on_step`
    ///
    /// Errors do not stop the loop; the next pass samples the sensor
    /// afresh.
    pub fn run<F>(&mut self, mut on_step: F) -> !
    where
        F: FnMut(Result<Iteration, IO::Error>),
    {
        loop {
            let outcome = self.step();
            on_step(outcome);
        }
    }

    /// Borrow the board I/O
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Give back the board I/O
    pub fn into_inner(self) -> IO {
        self.io
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeError, FakeIo, Op};
    use proptest::prelude::*;
    use std::vec::Vec;

    #[test]
    fn test_motion_scenario() {
        let mut control = ControlLoop::new(FakeIo::with_readings(&[true]));
        let iteration = control.step().unwrap();

        assert_eq!(iteration.light, LightState::On);
        let io = control.io();
        assert_eq!(io.pin, Some(true));
        assert_eq!(io.display(), ["Welcome", "Homeowner!"]);
        assert_eq!(io.serial, "Light is on\n");
    }

    #[test]
    fn test_idle_scenario() {
        let mut control = ControlLoop::new(FakeIo::with_readings(&[false]));
        let iteration = control.step().unwrap();

        assert_eq!(iteration.light, LightState::Off);
        let io = control.io();
        assert_eq!(io.pin, Some(false));
        assert_eq!(io.display(), ["", ""]);
        assert_eq!(io.serial, "Light is off\n");
    }

    #[test]
    fn test_alternating_scenario() {
        let mut control = ControlLoop::new(FakeIo::with_readings(&[true, false, true]));

        let mut pins = Vec::new();
        for _ in 0..3 {
            control.step().unwrap();
            pins.push(control.io().pin);
        }

        assert_eq!(pins, [Some(true), Some(false), Some(true)]);
        assert_eq!(
            control.io().serial,
            "Light is on\nLight is off\nLight is on\n"
        );
        assert_eq!(control.io().display(), ["Welcome", "Homeowner!"]);
    }

    #[test]
    fn test_pass_order() {
        let mut control = ControlLoop::new(FakeIo::with_readings(&[false]));
        control.step().unwrap();

        let ops = &control.io().ops;
        assert_eq!(ops.first(), Some(&Op::ReadPin));
        assert_eq!(ops.get(1), Some(&Op::SetPin(false)));
        assert!(matches!(ops.last(), Some(Op::Serial(_))));
        assert_eq!(ops.len(), 5);
    }

    #[test]
    fn test_edges_reported() {
        let mut control = ControlLoop::new(FakeIo::with_readings(&[false, false, true, true, false]));

        let passes: Vec<Iteration> = (0..5).map(|_| control.step().unwrap()).collect();
        let changed: Vec<bool> = passes.iter().map(|pass| pass.changed).collect();
        assert_eq!(changed, [true, false, true, false, true]);
        assert_eq!(passes.last().map(|pass| pass.number), Some(5));
    }

    #[test]
    fn test_display_failure_still_reports_status() {
        let mut io = FakeIo::with_readings(&[true]);
        io.fail_display = true;
        let mut control = ControlLoop::new(io);

        assert_eq!(control.step(), Err(FakeError::Display));
        assert_eq!(control.io().pin, Some(true));
        assert_eq!(control.io().serial, "Light is on\n");
    }

    #[test]
    fn test_serial_failure_reported() {
        let mut io = FakeIo::with_readings(&[false]);
        io.fail_serial = true;
        let mut control = ControlLoop::new(io);

        assert_eq!(control.step(), Err(FakeError::Serial));
        assert_eq!(control.io().display(), ["", ""]);
    }

    #[test]
    fn test_recovers_after_failed_pass() {
        let mut io = FakeIo::with_readings(&[true, false]);
        io.fail_serial = true;
        let mut control = ControlLoop::new(io);

        assert!(control.step().is_err());
        let mut io = control.into_inner();
        io.fail_serial = false;
        let mut control = ControlLoop::new(io);

        let iteration = control.step().unwrap();
        assert_eq!(iteration.light, LightState::Off);
        assert_eq!(control.io().serial, "Light is off\n");
    }

    proptest! {
        #[test]
        fn prop_outputs_track_each_sample(readings in proptest::collection::vec(any::<bool>(), 1..32)) {
            let mut control = ControlLoop::new(FakeIo::with_readings(&readings));

            let mut expected_serial = std::string::String::new();
            for &sensor in &readings {
                let iteration = control.step().unwrap();
                prop_assert_eq!(iteration.light.is_on(), sensor);
                prop_assert_eq!(control.io().pin, Some(sensor));
                expected_serial.push_str(if sensor { "Light is on\n" } else { "Light is off\n" });
            }

            let last = *readings.last().unwrap();
            let expected_display = if last { ["Welcome", "Homeowner!"] } else { ["", ""] };
            prop_assert_eq!(control.io().display(), expected_display);
            prop_assert_eq!(&control.io().serial, &expected_serial);
        }
    }
}
