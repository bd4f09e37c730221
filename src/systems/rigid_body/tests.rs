use std::f32::consts::FRAC_PI_2;

use super::*;
use crate::domain::{Attachment, AttachmentShape, BodyShape, Direction, RobotConfig, Rotation, Wheel};
use crate::error::KinematicsError;
use crate::geometry::{Arena, Pose, Vec2};
use crate::systems::clamping::max_safe_distance;
use crate::systems::footprint::FootprintSource;

fn arena() -> Arena {
    Arena::new(1080.0, 720.0).unwrap()
}

fn shape() -> BodyShape {
    BodyShape::new(60.0, 120.0, Wheel { width: 10.0, diameter: 40.0 }).unwrap()
}

fn body_at(x: f32, y: f32, heading: f32) -> RigidBody {
    RigidBody::new(shape(), arena(), Pose::new(Vec2::new(x, y), heading), 10.0, 0.1)
}

fn assert_contained(body: &RigidBody) {
    assert!(
        body.footprint().first_outside(&body.area(), 1e-3).is_none(),
        "footprint left the arena: {:?}",
        body.footprint()
    );
}

#[test]
fn direction_convention_is_counter_clockwise_positive() {
    let mut body = body_at(540.0, 360.0, 0.0);

    body.translate(Direction::Left);
    assert!((body.center().y - 370.0).abs() < 1e-3);
    assert!((body.center().x - 540.0).abs() < 1e-3);

    body.translate(Direction::Right);
    body.translate(Direction::Right);
    assert!((body.center().y - 350.0).abs() < 1e-3);

    body.translate(Direction::Back);
    assert!((body.center().x - 530.0).abs() < 1e-3);

    let r = body.rotate(Rotation::CounterClockwise);
    assert_eq!(r.status, StepStatus::Full);
    assert!((body.heading() - 0.1).abs() < 1e-6);
    body.rotate(Rotation::Clockwise);
    body.rotate(Rotation::Clockwise);
    assert!((body.heading() + 0.1).abs() < 1e-6);
}

#[test]
fn forward_follows_heading() {
    let mut body = body_at(540.0, 360.0, FRAC_PI_2);
    let r = body.translate(Direction::Forward);
    assert_eq!(r.status, StepStatus::Full);
    assert!((body.center().y - 370.0).abs() < 1e-3);
    assert!((body.center().x - 540.0).abs() < 1e-3);
}

#[test]
fn zero_speed_never_moves() {
    let mut body = body_at(540.0, 360.0, 0.3);
    body.set_speed(0.0).unwrap();
    let start = body.center();
    for d in Direction::ALL {
        let r = body.translate(d);
        assert_eq!(r.applied, 0.0);
        assert_eq!(body.center(), start);
    }
}

#[test]
fn move_stops_at_the_wall_and_reports_truncation() {
    // Front corners at x = 1075, 4 px from the right border.
    let mut body = body_at(1015.0, 360.0, 0.0);
    let r = body.translate(Direction::Forward);
    assert!(r.is_truncated());
    assert!((r.applied - 4.0).abs() < 1e-3);
    assert!((body.center().x - 1019.0).abs() < 1e-3);

    let r = body.translate(Direction::Forward);
    assert!(r.is_truncated());
    assert!(r.applied.abs() < 1e-3);
    assert_contained(&body);
}

#[test]
fn rotate_near_a_wall_is_truncated_and_contained() {
    // Corners reach x = 1079 exactly; any turn swings a corner outward.
    let mut body = body_at(1019.0, 360.0, 0.0);
    let r = body.rotate(Rotation::CounterClockwise);
    assert!(r.is_truncated());
    assert!(r.applied < 1e-3);
    assert_contained(&body);
}

#[test]
fn go_rotates_against_the_moved_footprint() {
    let mut a = body_at(540.0, 360.0, 0.0);
    let report = a.go(Direction::Forward, Rotation::CounterClockwise);
    assert_eq!(report.translation.status, StepStatus::Full);
    assert_eq!(report.rotation.status, StepStatus::Full);

    let mut b = body_at(540.0, 360.0, 0.0);
    b.translate(Direction::Forward);
    b.rotate(Rotation::CounterClockwise);
    assert_eq!(a.pose(), b.pose());
}

#[test]
fn footprint_tracks_pose_after_every_call() {
    let mut body = body_at(540.0, 360.0, 0.0);
    body.go(Direction::Left, Rotation::Clockwise);
    let expected = shape().compute_footprint(&body.pose());
    assert_eq!(body.footprint(), &expected);
}

#[test]
fn degenerate_area_is_rejected_without_touching_pose() {
    let mut body = body_at(540.0, 360.0, 0.0);
    let before = body.pose();
    let err = body.set_area(0.0, 720.0).unwrap_err();
    assert!(matches!(err, KinematicsError::InvalidArena { .. }));
    assert_eq!(body.pose(), before);
    assert_eq!(body.area(), arena());

    body.set_area(800.0, 600.0).unwrap();
    assert_eq!(body.area().width(), 800.0);
}

#[test]
fn placement_outside_the_arena_is_refused() {
    let mut body = body_at(540.0, 360.0, 0.0);
    let err = body.set_center(10.0, 360.0).unwrap_err();
    assert!(matches!(err, KinematicsError::OutOfBounds { .. }));
    assert_eq!(body.center(), Vec2::new(540.0, 360.0));

    body.set_center(200.0, 100.0).unwrap();
    body.center_in_area().unwrap();
    assert_eq!(body.center(), Vec2::new(540.0, 360.0));
}

#[test]
fn from_config_centers_and_validates() {
    let body = RigidBody::from_config(&RobotConfig::default(), arena()).unwrap();
    assert_eq!(body.center(), Vec2::new(540.0, 360.0));
    assert!((body.heading() - FRAC_PI_2).abs() < 1e-6);
    assert!(body.attachment().is_none());

    let stuck = RobotConfig { center: Some(Vec2::new(5.0, 5.0)), ..RobotConfig::default() };
    assert!(matches!(
        RigidBody::from_config(&stuck, arena()),
        Err(KinematicsError::OutOfBounds { .. })
    ));

    let armed = RigidBody::from_config(&RobotConfig::armed(), arena()).unwrap();
    assert_eq!(armed.footprint().len(), 8);
}

fn armed_body(gun_length: f32, clamped: bool) -> RigidBody {
    let shape = AttachmentShape::new(40.0, 60.0, gun_length, 10.0).unwrap();
    let turret = Attachment::new(shape, Vec2::zero(), 0.0, 0.2).with_clamped(clamped);
    body_at(540.0, 360.0, 0.0).with_attachment(turret)
}

#[test]
fn long_gun_tightens_translation_bound() {
    let plain = body_at(540.0, 360.0, 0.0);
    let armed = armed_body(100.0, false);
    let a = arena();
    let plain_d = max_safe_distance(plain.footprint().points(), &a, 0.0, Direction::Forward, 1000.0);
    let armed_d = max_safe_distance(armed.footprint().points(), &a, 0.0, Direction::Forward, 1000.0);
    assert!((plain_d - 479.0).abs() < 1e-2);
    assert!((armed_d - 439.0).abs() < 1e-2);
    assert!(armed_d < plain_d);
}

#[test]
fn attachment_rotation_is_unclamped_by_default() {
    let mut body = armed_body(100.0, false);
    let before = body.heading();
    let r = body.rotate_attachment(Rotation::CounterClockwise).unwrap();
    assert_eq!(r.status, StepStatus::Full);
    assert!((body.attachment().unwrap().heading() - 0.2).abs() < 1e-6);
    assert_eq!(body.heading(), before);
    // Gun points moved with the attachment.
    let muzzle = body.footprint().points()[5];
    assert!((muzzle.y - (360.0 + 100.0 * 0.2f32.sin() + 5.0 * 0.2f32.cos())).abs() < 1e-3);
}

#[test]
fn clamped_attachment_stops_at_the_wall() {
    // Mount 105 px from the right border: the muzzle circle never reaches it.
    let mut body = armed_body(100.0, true);
    body.set_center(974.0, 360.0).unwrap();
    let r = body.rotate_attachment(Rotation::CounterClockwise).unwrap();
    assert_eq!(r.status, StepStatus::Full);
    assert_contained(&body);

    // Muzzle touching the border: any turn swings a muzzle corner out.
    let mut body = armed_body(100.0, true);
    body.set_center(979.0, 360.0).unwrap();
    let r = body.rotate_attachment(Rotation::CounterClockwise).unwrap();
    assert!(r.is_truncated());
    assert!(r.applied < 1e-3);
    assert_contained(&body);
}

#[test]
fn attachment_calls_fail_on_plain_body() {
    let mut body = body_at(540.0, 360.0, 0.0);
    assert_eq!(body.rotate_attachment(Rotation::Clockwise), Err(KinematicsError::NoAttachment));
    assert_eq!(body.set_attachment_angular_speed(1.0), Err(KinematicsError::NoAttachment));
}

#[test]
fn shrinking_area_that_cuts_the_footprint_is_refused() {
    let mut body = body_at(540.0, 360.0, 0.0);
    let before = body.pose();
    let err = body.set_area(300.0, 300.0).unwrap_err();
    assert!(matches!(err, KinematicsError::OutOfBounds { .. }));
    assert_eq!(body.area(), arena());
    assert_eq!(body.pose(), before);
    assert_contained(&body);
}

#[test]
fn shrunk_area_keeps_every_step_contained() {
    let mut body = body_at(150.0, 150.0, 0.0);
    body.set_area(300.0, 300.0).unwrap();
    assert_eq!(body.area().width(), 300.0);

    for _ in 0..30 {
        for d in Direction::ALL {
            body.translate(d);
            assert_contained(&body);
        }
        body.rotate(Rotation::Clockwise);
        assert_contained(&body);
        body.go(Direction::Forward, Rotation::CounterClockwise);
        assert_contained(&body);
    }
}

#[test]
fn non_finite_speed_caps_are_rejected() {
    let mut body = body_at(540.0, 360.0, 0.0);
    assert_eq!(body.set_angular_speed(f32::INFINITY), Err(KinematicsError::InvalidSpeed(f32::INFINITY)));
    assert!(body.set_speed(f32::NAN).is_err());
    assert_eq!(body.angular_speed(), 0.1);
    assert_eq!(body.speed(), 10.0);

    let r = body.rotate(Rotation::Clockwise);
    assert!((r.applied - 0.1).abs() < 1e-6);
    assert!(body.heading().is_finite());
    assert!(body.footprint().points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));

    let wild = RigidBody::new(shape(), arena(), Pose::new(Vec2::new(540.0, 360.0), 0.0), f32::INFINITY, f32::NAN);
    assert_eq!(wild.speed(), 0.0);
    assert_eq!(wild.angular_speed(), 0.0);

    let config = RobotConfig { speed: f32::INFINITY, ..RobotConfig::default() };
    assert!(matches!(RigidBody::from_config(&config, arena()), Err(KinematicsError::InvalidSpeed(_))));
}

#[test]
fn gun_points_compose_with_the_body_heading() {
    let gun_shape = AttachmentShape::new(40.0, 60.0, 100.0, 10.0).unwrap();
    let turret = Attachment::new(gun_shape, Vec2::zero(), 0.0, 0.2);
    let body = body_at(540.0, 360.0, FRAC_PI_2).with_attachment(turret);

    // Gun along local +x of the hull, so it points up when the hull faces up.
    let points = body.footprint().points();
    assert!((points[5].x - 535.0).abs() < 1e-3);
    assert!((points[5].y - 460.0).abs() < 1e-3);
    assert!((points[6].x - 545.0).abs() < 1e-3);
    assert!((points[6].y - 460.0).abs() < 1e-3);

    // The clamped footprint is the gun that gets drawn.
    let drawn = crate::simulation::outline::gun(&body).unwrap();
    for (fp, gun) in points[4..].iter().zip(drawn.iter()) {
        assert!((fp.x - gun.x).abs() < 1e-4 && (fp.y - gun.y).abs() < 1e-4);
    }
}

#[test]
fn gun_swings_with_body_rotation() {
    let mut body = armed_body(100.0, false);
    let r = body.rotate(Rotation::CounterClockwise);
    assert_eq!(r.status, StepStatus::Full);

    let muzzle = body.footprint().points()[5];
    let expected = Vec2::new(540.0, 360.0) + Vec2::new(100.0, 5.0).rotate(0.1);
    assert!((muzzle.x - expected.x).abs() < 1e-3);
    assert!((muzzle.y - expected.y).abs() < 1e-3);
    assert_contained(&body);
}
