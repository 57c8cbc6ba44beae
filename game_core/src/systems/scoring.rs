use hecs::World;
use log::debug;

use crate::{Ball, Config, Events, Field, GameEvent, HitCounter, Score, ServeSource, Side};

/// Recenter the ball and send it toward `toward` at serve speed
///
/// Both axes restart at the base serve speed, so any escalation is dropped on a point.
pub fn serve<R: ServeSource + ?Sized>(
    ball: &mut Ball,
    field: &Field,
    config: &Config,
    toward: Side,
    rng: &mut R,
) {
    ball.recenter(field);
    ball.vel = config.serve_velocity(toward, rng.vertical_sign());
}

/// Check if ball left the field (scoring)
///
/// At most one side scores per call. The ball is served toward the side that
/// just lost the point.
pub fn check_scoring<R: ServeSource + ?Sized>(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    hits: &mut HitCounter,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();
        let scorer = if rect.left() <= 0.0 {
            Side::Right
        } else if rect.right() >= field.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        hits.reset();
        serve(ball, field, config, scorer.opponent(), rng);
        events.push(GameEvent::Scored(scorer));

        debug!(
            "{:?} scored, now {}-{}, serving toward {:?}",
            scorer,
            score.left,
            score.right,
            scorer.opponent()
        );
    }
}
