use hecs::World;

use crate::{Ball, Controller, Paddle, PaddleIntent};

/// One fixed-size step of the paddle center toward the target, without overshooting
pub fn ai_step(paddle_center_y: f32, target_y: f32, speed: f32) -> f32 {
    (target_y - paddle_center_y).min(speed).max(-speed)
}

/// Point AI paddles at the ball's vertical center
pub fn track_ball(world: &mut World) {
    let ball_center_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center().y);

    let Some(target_y) = ball_center_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, controller, intent)) in
        world.query_mut::<(&Paddle, &Controller, &mut PaddleIntent)>()
    {
        if *controller == Controller::Ai {
            intent.dy = ai_step(paddle.center_y(), target_y, paddle.speed);
        }
    }
}
