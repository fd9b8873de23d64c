//! End-to-end HTTP tests: URI → parser → CommandBridge → Dispatcher → reply.
//!
//! A scoped thread plays the control loop, draining the bridge exactly as
//! `main` does, while the test thread plays the httpd handler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::mock_hw::{MockHardware, RecordingSink};

use rccar::app::dispatcher::{Dispatcher, VERSION_STRING};
use rccar::app::ports::MotorDirection;
use rccar::config::SystemConfig;
use rccar::http::channels::CommandBridge;
use rccar::http::response::{APPLICATION_JSON, HttpResponse, TEXT_HTML};
use rccar::http::respond;

/// Stops the control loop even when the client side panics.
struct StopOnDrop<'a>(&'a AtomicBool);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Run `client` against a live control loop; returns the loop's final
/// dispatcher and hardware for inspection.
fn with_control_loop(
    lenient: bool,
    client: impl FnOnce(&dyn Fn(&str) -> HttpResponse),
) -> (Dispatcher, MockHardware) {
    let bridge = CommandBridge::new();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        let control = s.spawn(|| {
            let mut car = Dispatcher::new(&SystemConfig::default());
            let mut hw = MockHardware::new();
            let mut sink = RecordingSink::new();
            car.start(0, &mut hw, &mut sink);
            while !done.load(Ordering::Acquire) {
                bridge.serve_pending(&mut car, 0, &mut hw, &mut sink);
                thread::sleep(Duration::from_millis(1));
            }
            (car, hw)
        });

        {
            let _stop = StopOnDrop(&done);
            client(&|uri| respond(uri, lenient, &bridge));
        }
        control.join().unwrap()
    })
}

#[test]
fn control_page_served_at_root() {
    with_control_loop(false, |get| {
        let r = get("/");
        assert_eq!((r.status, r.content_type), (200, TEXT_HTML));
        assert!(r.body.contains("/api/servo"));
    });
}

#[test]
fn scenario_over_http() {
    let (car, hw) = with_control_loop(false, |get| {
        assert_eq!(get("/api/mosfet?duty=300").body, "OK");
        assert_eq!(get("/api/brake?state=1").body, "BRAKING");
        assert_eq!(get("/api/mosfet?duty=-50").body, "BRAKING");
        assert_eq!(get("/api/brake?state=0").body, "RELEASED");
        assert_eq!(get("/api/headlight").body, "ON");
        assert_eq!(get("/api/servo?angle=90").body, "OK");
    });
    assert_eq!(car.state().motor_speed, -50);
    assert!(car.state().headlight_on);
    assert_eq!(hw.duty(), 0);
    assert_eq!(hw.direction(), MotorDirection::Coast);
    assert_eq!(hw.pulse_us(), Some(1472));
}

#[test]
fn missing_parameter_is_400_and_leaves_state_alone() {
    let (car, hw) = with_control_loop(false, |get| {
        let r = get("/api/servo");
        assert_eq!((r.status, r.body.as_ref()), (400, "angle parameter missing"));
        let r = get("/api/mosfet?speed=10");
        assert_eq!((r.status, r.body.as_ref()), (400, "duty parameter missing"));
        let r = get("/api/brake");
        assert_eq!((r.status, r.body.as_ref()), (400, "state parameter missing"));
    });
    assert_eq!(car.state().steering_angle_deg, 72);
    assert_eq!(car.state().motor_speed, 0);
    assert!(!car.state().is_braking);
    assert_eq!(hw.calls.len(), 5, "only the boot writes");
}

#[test]
fn malformed_value_strict_vs_lenient() {
    with_control_loop(false, |get| {
        let r = get("/api/servo?angle=left");
        assert_eq!((r.status, r.body.as_ref()), (400, "angle parameter invalid"));
    });
    let (car, _) = with_control_loop(true, |get| {
        assert_eq!(get("/api/servo?angle=left").body, "OK");
    });
    assert_eq!(car.state().steering_angle_deg, 0);
}

#[test]
fn version_and_state_queries() {
    with_control_loop(false, |get| {
        let r = get("/api/version");
        assert_eq!(r.body, VERSION_STRING);
        assert!(r.body.starts_with("v1.3.1 | "));

        get("/api/gear?value=d");
        get("/api/gas?value=55");
        let r = get("/api/state");
        assert_eq!(r.content_type, APPLICATION_JSON);
        let v: serde_json::Value = serde_json::from_str(&r.body).unwrap();
        assert_eq!(v["gear"], "D");
        assert_eq!(v["gas_percent"], 55);
        assert_eq!(v["motor_speed"], 0);
    });
}

#[test]
fn unknown_path_and_bad_gear() {
    with_control_loop(false, |get| {
        let r = get("/api/turbo");
        assert_eq!((r.status, r.body.as_ref()), (404, "not found"));
        assert_eq!(get("/api/gear?value=P").status, 400);
        assert_eq!(get("/api/gear").status, 400);
    });
}

#[test]
fn emergency_stop_over_http() {
    let (car, hw) = with_control_loop(false, |get| {
        get("/api/mosfet?duty=200");
        get("/api/servo?angle=10");
        assert_eq!(get("/api/stop").body, "OK");
    });
    assert_eq!(car.state().motor_speed, 0);
    assert_eq!(car.state().steering_angle_deg, 72);
    assert_eq!(hw.duty(), 0);
}

#[test]
fn percent_encoded_values_are_decoded() {
    let (car, _) = with_control_loop(false, |get| {
        assert_eq!(get("/api/mosfet?duty=%2D120").body, "OK");
    });
    assert_eq!(car.state().motor_speed, -120);
}

#[test]
fn page_resends_throttle_after_brake_release() {
    assert!(HttpResponse::page().body.contains("return pushDrive();"));

    // The sequence the page issues: press, release, then gas + mosfet.
    let (car, hw) = with_control_loop(false, |get| {
        assert_eq!(get("/api/gear?value=D").body, "OK");
        assert_eq!(get("/api/gas?value=60").body, "OK");
        assert_eq!(get("/api/mosfet?duty=153").body, "OK");
        assert_eq!(get("/api/brake?state=1").body, "BRAKING");
        assert_eq!(get("/api/brake?state=0").body, "RELEASED");
        assert_eq!(get("/api/gas?value=60").body, "OK");
        assert_eq!(get("/api/mosfet?duty=153").body, "OK");
    });
    assert_eq!(car.state().motor_speed, 153);
    assert!(car.snapshot().motor_energised);
    assert_eq!(hw.direction(), MotorDirection::Forward);
    assert_eq!(hw.duty(), 613);
}
