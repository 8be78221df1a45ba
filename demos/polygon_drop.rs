//! Click to place outline points, press `E` to turn them into a body.
//! `F` pushes the newest body at one of its corners, `R` removes everything.

use ::tracing::{debug, info};
use macroquad::prelude::*;

use verlet2d::{BodyHandle, PhysicsEngine, PointForce, Vector2};

#[path = "../tests/tracing.rs"]
mod tracing_helper;
use tracing_helper::*;

const PIXELS_PER_METRE: f32 = 50.0;
const BODY_MASS: f32 = 100.0;

fn to_world(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y) * PIXELS_PER_METRE.recip()
}

fn to_screen(point: Vector2) -> Vec2 {
    vec2(point.x, point.y) * PIXELS_PER_METRE
}

fn draw_outline(points: &[Vec2], color: Color) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_line(start.x, start.y, end.x, end.y, 2., color);
    }
}

#[macroquad::main("verlet2d demo")]
async fn main() {
    init_tracing();
    let mut engine = PhysicsEngine::default();
    let mut outline: Vec<Vector2> = vec![];
    let mut newest: Option<BodyHandle> = None;
    let mut message = String::new();
    loop {
        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            outline.push(to_world(x, y));
        }
        if is_key_pressed(KeyCode::E) {
            match engine.create_body(&std::mem::take(&mut outline), BODY_MASS) {
                Ok(handle) => {
                    info!(?handle, "created body");
                    newest = Some(handle);
                    message.clear();
                }
                Err(err) => message = err.to_string(),
            }
        }
        if is_key_pressed(KeyCode::F) {
            if let Some(body) = newest.and_then(|handle| engine.body_mut(handle).ok()) {
                let corner = body.local_vertices()[0];
                body.add_point_force(PointForce::new(corner, Vector2::new(0.0, -1500.0)));
            }
        }
        if is_key_pressed(KeyCode::R) {
            engine = PhysicsEngine::default();
            newest = None;
        }

        // The first frame has no duration yet, which the engine refuses.
        if let Err(err) = engine.update(get_frame_time().recip()) {
            debug!(%err, "skipped frame");
        }

        clear_background(BLACK);
        for (_, body) in engine.bodies() {
            let points: Vec<_> = body.world_vertices().map(to_screen).collect();
            draw_outline(&points, RED);
            let centre = to_screen(body.position());
            draw_circle(centre.x, centre.y, 3., WHITE);
        }
        for point in &outline {
            let point = to_screen(*point);
            draw_circle(point.x, point.y, 3., YELLOW);
        }
        draw_text(&message, 10., 20., 20., WHITE);

        next_frame().await
    }
}
