// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Battery;
use battery_domain::Capacity;
use battery_monitor::RecordingMonitor;

pub fn create_test_capacity() -> Capacity {
    Capacity::new(100).unwrap()
}

/// Battery at full capacity (100/100).
pub fn create_charged_battery() -> Battery {
    Battery::new(create_test_capacity())
}

/// Battery partially charged (70/100).
pub fn create_partially_charged_battery() -> Battery {
    Battery::with_charge(create_test_capacity(), 70).unwrap()
}

/// Battery with no charge left (0/100).
pub fn create_empty_battery() -> Battery {
    Battery::with_charge(create_test_capacity(), 0).unwrap()
}

/// Attaches a fresh recording monitor and returns a handle to its log.
pub fn attach_recording_monitor(battery: &mut Battery) -> RecordingMonitor {
    let monitor: RecordingMonitor = RecordingMonitor::new();
    battery.attach_monitor(Box::new(monitor.clone()));
    monitor
}
