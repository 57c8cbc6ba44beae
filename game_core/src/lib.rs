//! Deterministic fixed-timestep Pong simulation
//!
//! One tick reads held input flags, moves paddles and ball, resolves wall and
//! paddle collisions, and updates the score. No I/O, no clock, no rendering.

pub mod components;
pub mod config;
pub mod error;
pub mod field;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation
///
/// Events are appended to `events`; clearing them is the caller's job so a
/// multi-tick advance can collect everything that happened.
#[allow(clippy::too_many_arguments)]
pub fn step<R: ServeSource + ?Sized>(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    hits: &mut HitCounter,
    events: &mut Events,
    rng: &mut R,
) {
    // 1. Human paddle intents from held keys
    apply_input(world, input);

    // 2. AI paddle intents
    track_ball(world);

    // 3. Move paddles based on intents
    move_paddles(world, field);

    // 4. Move ball
    move_ball(world);

    // 5. Top/bottom walls
    check_wall_collision(world, field, events);

    // 6. Paddles, with speed escalation
    check_paddle_collision(world, config, hits, events);

    // 7. Check scoring (ball exited the field)
    check_scoring(world, field, config, score, hits, events, rng);

    time.advance();
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let controller = config.controller(side);
    let paddle = Paddle::new(
        side,
        config.paddle_spawn(side),
        config.paddle_size(),
        config.speed_for(controller),
        &config.field(),
    );
    world.spawn((paddle, controller, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, size: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
