use hecs::World;
use log::{debug, trace};

use crate::{Aabb, Ball, Config, Events, Field, GameEvent, HitCounter, Paddle, Side};

/// Bounce the ball off the top and bottom walls
///
/// The ball is pushed back inside the field so it cannot stay in contact
/// with the wall and flip again on the next tick.
pub fn check_wall_collision(world: &mut World, field: &Field, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();
        if rect.top() <= 0.0 || rect.bottom() >= field.height {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = field.clamp_y(ball.pos.y, ball.size.y);
            events.push(GameEvent::WallBounce);
            trace!("wall bounce at y={:.1}", ball.pos.y);
        }
    }
}

/// Add `step` to each velocity component in the direction it already points
pub fn escalate(ball: &mut Ball, step: f32) {
    ball.vel.x += step.copysign(ball.vel.x);
    ball.vel.y += step.copysign(ball.vel.y);
}

/// Bounce the ball off whichever paddle it overlaps
///
/// Only a ball travelling toward the paddle whose leading edge was at or in
/// front of the paddle face before this tick's move bounces. It is moved
/// flush against the face, so one contact can never flip it twice. A ball
/// that already slipped behind the face keeps going and can score.
pub fn check_paddle_collision(
    world: &mut World,
    config: &Config,
    hits: &mut HitCounter,
    events: &mut Events,
) {
    // Collect paddle rects first so the ball can be borrowed mutably
    let paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.rect()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, rect) in &paddles {
            if !ball.rect().intersects(&rect) {
                continue;
            }

            let rect_before = Aabb::from_pos_size(ball.pos - ball.vel, ball.size);
            let facing = match side {
                Side::Left => ball.vel.x < 0.0 && rect_before.left() >= rect.right(),
                Side::Right => ball.vel.x > 0.0 && rect_before.right() <= rect.left(),
            };
            if !facing {
                continue;
            }

            ball.vel.x = -ball.vel.x;
            ball.pos.x = match side {
                Side::Left => rect.right(),
                Side::Right => rect.left() - ball.size.x,
            };
            events.push(GameEvent::PaddleHit(side));

            if hits.register_hit() {
                escalate(ball, config.escalation_step);
                debug!(
                    "ball speed escalated to ({:.1}, {:.1})",
                    ball.vel.x, ball.vel.y
                );
            }
            break;
        }
    }
}
