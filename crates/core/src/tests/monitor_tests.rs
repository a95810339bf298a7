// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    attach_recording_monitor, create_charged_battery, create_empty_battery,
    create_partially_charged_battery,
};
use crate::{Battery, ChargeMonitor, Notification, RecordingMonitor, TracingMonitor};

#[test]
fn test_notifies_monitor_on_recharge() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.recharge(20);

    assert_eq!(monitor.recharge_calls(), vec![90]);
    assert!(monitor.drain_calls().is_empty());
}

#[test]
fn test_notifies_monitor_on_drain() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.drain(20);

    assert_eq!(monitor.drain_calls(), vec![50]);
    assert!(monitor.recharge_calls().is_empty());
}

#[test]
fn test_notifies_with_clamped_charge() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.recharge(50);
    battery.drain(500);

    assert_eq!(
        monitor.notifications(),
        vec![
            Notification::Recharge { charge: 100 },
            Notification::Drain { charge: 0 },
        ]
    );
}

#[test]
fn test_does_not_notify_on_failed_recharge() {
    let mut battery: Battery = create_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.recharge(10);

    assert_eq!(monitor.call_count(), 0);
}

#[test]
fn test_does_not_notify_on_non_positive_recharge() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.recharge(0);
    battery.recharge(-10);

    assert_eq!(monitor.call_count(), 0);
}

#[test]
fn test_does_not_notify_on_failed_drain() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.drain(0);

    assert!(monitor.drain_calls().is_empty());
    assert_eq!(monitor.call_count(), 0);
}

#[test]
fn test_notifies_on_drain_of_empty_battery() {
    let mut battery: Battery = create_empty_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.drain(5);

    assert_eq!(monitor.drain_calls(), vec![0]);
}

#[test]
fn test_one_notification_per_successful_transition() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.drain(10); // 60
    battery.recharge(0); // refused
    battery.recharge(15); // 75
    battery.drain(-1); // refused
    battery.recharge(100); // 100
    battery.recharge(1); // refused, full

    assert_eq!(monitor.call_count(), 3);
    assert_eq!(monitor.drain_calls(), vec![60]);
    assert_eq!(monitor.recharge_calls(), vec![75, 100]);
}

#[test]
fn test_works_without_monitor() {
    let mut battery: Battery = create_partially_charged_battery();
    assert!(battery.detach_monitor().is_none());

    let result: bool = battery.recharge(10);

    assert!(result);
    assert_eq!(battery.charge(), 80);
}

#[test]
fn test_detached_monitor_stops_receiving() {
    let mut battery: Battery = create_partially_charged_battery();
    let monitor: RecordingMonitor = attach_recording_monitor(&mut battery);

    battery.drain(10);
    assert!(battery.detach_monitor().is_some());
    assert!(!battery.has_monitor());
    battery.drain(10);

    assert_eq!(monitor.drain_calls(), vec![60]);
    assert_eq!(battery.charge(), 50);
}

#[test]
fn test_attach_replaces_previous_monitor() {
    let mut battery: Battery = create_partially_charged_battery();
    let first: RecordingMonitor = attach_recording_monitor(&mut battery);
    battery.drain(10);

    let second: RecordingMonitor = RecordingMonitor::new();
    let replaced: Option<Box<dyn ChargeMonitor>> =
        battery.attach_monitor(Box::new(second.clone()));
    battery.drain(10);

    assert!(replaced.is_some());
    assert_eq!(first.drain_calls(), vec![60]);
    assert_eq!(second.drain_calls(), vec![50]);
}

#[test]
fn test_tracing_monitor_can_be_attached() {
    let mut battery: Battery = create_partially_charged_battery();
    battery.attach_monitor(Box::new(TracingMonitor::new("test-cell")));

    assert!(battery.has_monitor());
    assert!(battery.recharge(20));
    assert_eq!(battery.charge(), 90);
}
