//! Integration tests for the Dispatcher → actuators pipeline.
//!
//! Drives the dispatcher exactly as the control loop does and asserts on
//! the recorded physical outputs.

use super::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

use rccar::app::commands::{AppCommand, CommandReply};
use rccar::app::dispatcher::Dispatcher;
use rccar::app::events::AppEvent;
use rccar::app::ports::MotorDirection;
use rccar::app::state::Gear;
use rccar::config::SystemConfig;

fn make_car() -> (Dispatcher, MockHardware, RecordingSink) {
    let mut car = Dispatcher::new(&SystemConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    car.start(0, &mut hw, &mut sink);
    (car, hw, sink)
}

fn send(
    car: &mut Dispatcher,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
    cmd: AppCommand,
) -> CommandReply {
    car.handle_command(cmd, 0, hw, sink)
}

#[test]
fn boot_drives_every_output_to_rest() {
    let (car, hw, sink) = make_car();

    assert_eq!(hw.pulse_us(), Some(1286), "72° straight ahead");
    assert_eq!(hw.direction(), MotorDirection::Coast);
    assert_eq!(hw.duty(), 0);
    assert!(!hw.headlight());
    assert!(!hw.stop_light());
    assert_eq!(car.state().steering_angle_deg, 72);
    assert_eq!(
        sink.events.first(),
        Some(&AppEvent::Started { steering_angle_deg: 72 })
    );
}

#[test]
fn drive_brake_release_scenario() {
    let (mut car, mut hw, mut sink) = make_car();

    // Full forward, clamped.
    let reply = send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(300));
    assert_eq!(reply, CommandReply::Ok);
    assert_eq!(car.state().motor_speed, 255);
    assert_eq!(hw.direction(), MotorDirection::Forward);
    assert_eq!(hw.duty(), 1023);

    // Brake overrides the drive output.
    let reply = send(&mut car, &mut hw, &mut sink, AppCommand::SetBrake(true));
    assert_eq!(reply, CommandReply::Braking);
    assert!(hw.stop_light());
    assert!(car.state().stop_light_on);
    assert_eq!(hw.direction(), MotorDirection::Coast);
    assert_eq!(hw.duty(), 1023);

    // Drive while braking: stored, not applied.
    hw.clear();
    let reply = send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(-50));
    assert_eq!(reply, CommandReply::Braking);
    assert_eq!(car.state().motor_speed, -50);
    assert!(hw.calls.is_empty(), "no output may change while braking");
    assert_eq!(sink.last(), Some(&AppEvent::DriveSuppressed { speed: -50 }));

    // Release: motor stops, stop lamp off.
    let reply = send(&mut car, &mut hw, &mut sink, AppCommand::SetBrake(false));
    assert_eq!(reply, CommandReply::Released);
    assert_eq!(hw.duty(), 0);
    assert_eq!(hw.direction(), MotorDirection::Coast);
    assert!(!hw.stop_light());
    assert!(!car.state().stop_light_on);

    // Reverse must be re-sent after release.
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(-50));
    assert_eq!(hw.direction(), MotorDirection::Reverse);
    assert_eq!(hw.duty(), 200, "map(50) = 200");
}

#[test]
fn small_speeds_are_floored_to_minimum_duty() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(10));
    assert_eq!(hw.duty(), 200);
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(-1));
    assert_eq!(hw.duty(), 200);
    assert_eq!(hw.direction(), MotorDirection::Reverse);
}

#[test]
fn release_clears_stop_light_toggled_while_braking() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetBrake(true));
    assert_eq!(
        send(&mut car, &mut hw, &mut sink, AppCommand::ToggleStopLight),
        CommandReply::Light(false)
    );
    send(&mut car, &mut hw, &mut sink, AppCommand::ToggleStopLight);
    send(&mut car, &mut hw, &mut sink, AppCommand::SetBrake(false));
    assert!(!car.state().stop_light_on);
    assert!(!hw.stop_light());
}

#[test]
fn headlight_double_toggle_restores_output() {
    let (mut car, mut hw, mut sink) = make_car();
    assert_eq!(
        send(&mut car, &mut hw, &mut sink, AppCommand::ToggleHeadlight),
        CommandReply::Light(true)
    );
    assert!(hw.headlight());
    assert_eq!(
        send(&mut car, &mut hw, &mut sink, AppCommand::ToggleHeadlight),
        CommandReply::Light(false)
    );
    assert!(!hw.headlight());
    assert_eq!(
        hw.calls
            .iter()
            .filter(|c| matches!(c, ActuatorCall::Headlight(_)))
            .count(),
        3,
        "boot write plus two toggles"
    );
}

#[test]
fn steering_clamps_and_maps_pulse() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetSteering(-40));
    assert_eq!(car.state().steering_angle_deg, 0);
    assert_eq!(hw.pulse_us(), Some(544));

    send(&mut car, &mut hw, &mut sink, AppCommand::SetSteering(999));
    assert_eq!(car.state().steering_angle_deg, 180);
    assert_eq!(hw.pulse_us(), Some(2400));
}

#[test]
fn gear_and_gas_never_touch_the_motor() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(120));
    hw.clear();

    send(&mut car, &mut hw, &mut sink, AppCommand::SetGear(Gear::Reverse));
    send(&mut car, &mut hw, &mut sink, AppCommand::SetGas(250));

    assert!(hw.calls.is_empty());
    assert_eq!(car.state().gear, Gear::Reverse);
    assert_eq!(car.state().gas_percent, 100);
    assert_eq!(car.state().motor_speed, 120);
}

#[test]
fn emergency_stop_neutralises_everything_but_the_brake() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetGear(Gear::Drive));
    send(&mut car, &mut hw, &mut sink, AppCommand::SetGas(60));
    send(&mut car, &mut hw, &mut sink, AppCommand::SetSteering(150));
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(200));

    assert_eq!(
        send(&mut car, &mut hw, &mut sink, AppCommand::EmergencyStop),
        CommandReply::Ok
    );
    let s = car.state();
    assert_eq!((s.gear, s.gas_percent, s.motor_speed), (Gear::Neutral, 0, 0));
    assert_eq!(s.steering_angle_deg, 72);
    assert_eq!(hw.duty(), 0);
    assert_eq!(hw.direction(), MotorDirection::Coast);
    assert_eq!(sink.last(), Some(&AppEvent::EmergencyStop));
}

#[test]
fn state_query_reports_logical_steering() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetSteering(100));
    match send(&mut car, &mut hw, &mut sink, AppCommand::GetState) {
        CommandReply::State(snap) => {
            assert_eq!(snap.steering_logical_deg, 28);
            assert_eq!(snap.state.steering_angle_deg, 100);
        }
        other => panic!("expected state, got {other:?}"),
    }
}

#[test]
fn deadman_stops_a_silent_car_when_enabled() {
    let config = SystemConfig {
        deadman_timeout_ms: 1_000,
        ..SystemConfig::default()
    };
    let mut car = Dispatcher::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    car.start(0, &mut hw, &mut sink);

    car.handle_command(AppCommand::SetDrive(180), 100, &mut hw, &mut sink);
    car.tick(900, &mut hw, &mut sink);
    assert_eq!(car.state().motor_speed, 180, "within the window");

    car.tick(1_200, &mut hw, &mut sink);
    assert_eq!(car.state().motor_speed, 0);
    assert_eq!(hw.duty(), 0);
    assert_eq!(sink.last(), Some(&AppEvent::DeadmanTripped { silent_ms: 1_100 }));

    // Trips once per idle period.
    let before = sink.events.len();
    car.tick(5_000, &mut hw, &mut sink);
    assert_eq!(sink.events.len(), before);
}

#[test]
fn deadman_disabled_by_default() {
    let (mut car, mut hw, mut sink) = make_car();
    send(&mut car, &mut hw, &mut sink, AppCommand::SetDrive(100));
    car.tick(10_000_000, &mut hw, &mut sink);
    assert_eq!(car.state().motor_speed, 100);
}
