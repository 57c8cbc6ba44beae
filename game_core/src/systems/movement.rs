use hecs::World;

use crate::{Ball, Field, Paddle, PaddleIntent};

/// Apply paddle intents, then clamp into the field
pub fn move_paddles(world: &mut World, field: &Field) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.pos.y += intent.dy;
        paddle.clamp_to(field);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
