use ::rand::{SeedableRng as _, rngs::SmallRng};
use ::tracing::{debug, error};
use macroquad::prelude::*;

use bounce2d::*;
use rigid2d::{Body, BodyOptions, Shape, Vector};

#[path = "../tests/tracing.rs"]
mod tracing_helper;
use tracing_helper::*;

fn build_world(bounds: Vector) -> Result<World, WorldError> {
    let mut world = World::new(bounds)?;
    world.set_gravity(Some(0.3));
    let mut rng = SmallRng::seed_from_u64(0xb0a7);
    let templates = [
        BodyOptions {
            vel: Some(Vector::new(4., 0.)),
            shape: Some("CIRCLE".into()),
            w: Some(16.),
            h: Some(16.),
            ..Default::default()
        },
        BodyOptions {
            vel: Some(Vector::new(-2., 1.)),
            w: Some(14.),
            h: Some(10.),
            ..Default::default()
        },
        BodyOptions {
            vel: Some(Vector::new(6., -3.)),
            mass: Some(30.),
            shape: Some(
                [
                    Vector::new(0., -10.),
                    Vector::new(9., 6.),
                    Vector::new(-9., 6.),
                ]
                .into(),
            ),
            ..Default::default()
        },
    ];
    for template in &templates {
        world.scatter(&mut rng, 15, template)?;
    }
    Ok(world)
}

fn draw_body(body: &Body) {
    let center = vec2(body.pos.x as f32, body.pos.y as f32);
    let (w, h) = (body.w() as f32, body.h() as f32);
    match body.shape() {
        Shape::Label(label) if label == "CIRCLE" => draw_circle(center.x, center.y, w / 2., SKYBLUE),
        Shape::Label(_) => draw_rectangle(center.x - w / 2., center.y - h / 2., w, h, ORANGE),
        Shape::Polygon(polygon) => {
            let vertices = polygon.vertices();
            for (i, start) in vertices.iter().enumerate() {
                let end = vertices[(i + 1) % vertices.len()];
                let start = center + vec2(start.x as f32, start.y as f32);
                let end = center + vec2(end.x as f32, end.y as f32);
                draw_line(start.x, start.y, end.x, end.y, 2., LIME);
            }
        }
    }
}

#[macroquad::main("bounce2d demo")]
async fn main() {
    init_tracing();
    let bounds = Vector::new(f64::from(screen_width()), f64::from(screen_height()));
    let mut world = match build_world(bounds) {
        Ok(world) => world,
        Err(err) => {
            error!(%err, "could not build the demo world");
            return;
        }
    };
    loop {
        if is_key_pressed(KeyCode::Space) {
            world.apply_force(Vector::new(0., -12.));
        }
        let report = world.step();
        if !report.bounces.is_empty() {
            debug!(tick = report.tick.0, bounces = report.bounces.len());
        }
        let collisions = world.collisions();

        clear_background(DARKGRAY);
        for body in world.bodies() {
            draw_body(body);
        }
        for (a, _) in &collisions {
            if let Some(body) = world.get(*a) {
                draw_circle_lines(body.pos.x as f32, body.pos.y as f32, 12., 2., RED);
            }
        }
        draw_text(
            &format!("tick {} / bodies {} / space: kick", report.tick.0, world.len()),
            10.,
            20.,
            20.,
            WHITE,
        );

        next_frame().await
    }
}
