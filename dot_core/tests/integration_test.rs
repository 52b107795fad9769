use dot_core::*;
use glam::Vec2;

const DT: f32 = Params::UPDATE_RATE;

/// Host stub that records termination requests
#[derive(Default)]
struct StubHost {
    exit_calls: u32,
}

impl Host for StubHost {
    fn exit(&mut self) {
        self.exit_calls += 1;
    }
}

fn new_controller() -> DotController {
    DotController::new(Config::new()).unwrap()
}

#[test]
fn test_rest_is_stable() {
    let mut dot = new_controller();
    let start = dot.position();

    for _ in 0..500 {
        dot.on_update(DT);
        assert_eq!(dot.position(), start);
    }
    assert_eq!(dot.time().ticks, 500);
}

#[test]
fn test_start_is_screen_center() {
    let dot = new_controller();
    assert_eq!(dot.position(), Vec2::new(400.0, 300.0));
}

#[test]
fn test_hold_right_until_wall() {
    let mut dot = new_controller();
    let mut host = StubHost::default();

    dot.on_key_press(Key::Right, &mut host);
    assert_eq!(dot.velocity(), Vec2::new(5.0, 0.0));

    dot.on_update(DT);
    assert_eq!(dot.position(), Vec2::new(405.0, 300.0));

    // 400 + 5 * 100 would be 900, past the 790 limit
    for _ in 0..100 {
        dot.on_update(DT);
    }
    assert_eq!(dot.position(), Vec2::new(790.0, 300.0));
    assert_eq!(host.exit_calls, 0);
}

#[test]
fn test_release_right_stops() {
    let mut dot = new_controller();
    let mut host = StubHost::default();

    dot.on_key_press(Key::Right, &mut host);
    dot.on_update(DT);
    dot.on_key_release(Key::Right);
    assert_eq!(dot.velocity().x, 0.0);

    let parked = dot.position();
    dot.on_update(DT);
    assert_eq!(dot.position(), parked);
}

#[test]
fn test_diagonal_into_corner() {
    let mut dot = new_controller();
    let mut host = StubHost::default();

    dot.on_key_press(Key::A, &mut host);
    dot.on_key_press(Key::S, &mut host);
    assert_eq!(dot.velocity(), Vec2::new(-5.0, -5.0));

    for _ in 0..200 {
        dot.on_update(DT);
    }
    assert_eq!(dot.position(), Vec2::new(10.0, 10.0));
}

#[test]
fn test_one_step_stays_in_bounds() {
    let config = Config::new();
    let r = config.dot_radius;
    let speed = config.dot_speed;

    // Start anywhere in (and around) the legal area, move any direction
    let xs = [r, r + 1.0, 13.0, 400.0, 787.5, 790.0 - 0.5, 790.0];
    let ys = [r, 12.0, 300.0, 587.0, 590.0];
    let dirs = [-1.0, 0.0, 1.0];

    for &x in &xs {
        for &y in &ys {
            for &dx in &dirs {
                for &dy in &dirs {
                    let mut dot = Dot::new(Vec2::new(x, y));
                    dot.vel = Vec2::new(dx * speed, dy * speed);
                    systems::move_dot(&mut dot, &config);

                    assert!(
                        (r..=config.screen_width - r).contains(&dot.pos.x),
                        "x out of bounds from ({x}, {y}) moving ({dx}, {dy}): {}",
                        dot.pos.x
                    );
                    assert!(
                        (r..=config.screen_height - r).contains(&dot.pos.y),
                        "y out of bounds from ({x}, {y}) moving ({dx}, {dy}): {}",
                        dot.pos.y
                    );
                }
            }
        }
    }
}

#[test]
fn test_escape_terminates_run_loop() {
    let mut dot = new_controller();
    let mut host = StubHost::default();

    dot.on_key_press(Key::Other, &mut host);
    assert_eq!(host.exit_calls, 0);

    dot.on_key_press(Key::Escape, &mut host);
    assert_eq!(host.exit_calls, 1);
}

#[test]
fn test_custom_config_bounds() {
    let config = Config {
        screen_width: 100.0,
        screen_height: 50.0,
        dot_radius: 5.0,
        dot_speed: 20.0,
        ..Config::new()
    };
    let mut dot = DotController::new(config).unwrap();
    let mut host = StubHost::default();
    assert_eq!(dot.position(), Vec2::new(50.0, 25.0));

    dot.on_key_press(Key::Up, &mut host);
    dot.on_key_press(Key::D, &mut host);
    for _ in 0..3 {
        dot.on_update(DT);
    }
    assert_eq!(dot.position(), Vec2::new(95.0, 45.0));
}
