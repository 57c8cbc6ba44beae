use glam::Vec2;
use hecs::{Entity, World};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::systems::serve;
use crate::{
    create_ball, create_paddle, step, Aabb, Ball, Config, ConfigError, Events, Field, GameRng,
    HitCounter, InputState, Paddle, Score, ServeSource, Side, Time,
};

/// Read-only view of one tick, handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub ball_vel: Vec2,
    pub score: Score,
}

/// Everything one game owns: entities, score, hit counter and serve source
///
/// The ball and paddle entities are spawned once in [`Session::with_rng`] and
/// never despawned, so `left`, `right` and `ball` always name live entities
/// carrying their `Paddle` or `Ball` component.
pub struct Session<R: ServeSource = GameRng> {
    world: World,
    time: Time,
    field: Field,
    config: Config,
    score: Score,
    hits: HitCounter,
    events: Events,
    rng: R,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Session<GameRng> {
    /// Start a session using a `GameRng` seeded from `config.seed`
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: ServeSource> Session<R> {
    /// Start a session with an injected serve source
    ///
    /// The opening serve goes toward the right side.
    pub fn with_rng(config: Config, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let field = config.field();
        let mut world = World::new();
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);

        let mut opening = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_extent());
        serve(&mut opening, &field, &config, Side::Right, &mut rng);
        let ball = create_ball(&mut world, opening.pos, opening.vel, opening.size);

        debug!(
            "session started: {}x{} field, {:?}",
            field.width, field.height, config.mode
        );

        Ok(Self {
            world,
            time: Time::new(),
            field,
            hits: HitCounter::new(config.escalation_hits),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// Advance one tick
    pub fn advance(&mut self, input: &InputState) -> &Events {
        self.advance_ticks(input, 1)
    }

    /// Advance `ticks` ticks with the same input held, collecting all events
    pub fn advance_ticks(&mut self, input: &InputState, ticks: u32) -> &Events {
        self.events.clear();
        for _ in 0..ticks {
            step(
                &mut self.world,
                &mut self.time,
                &self.field,
                &self.config,
                input,
                &mut self.score,
                &mut self.hits,
                &mut self.events,
                &mut self.rng,
            );
        }
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            tick: self.time.tick,
            left_paddle: self.paddle(Side::Left).rect(),
            right_paddle: self.paddle(Side::Right).rect(),
            ball: ball.rect(),
            ball_vel: ball.vel,
            score: self.score,
        }
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball entity lives as long as the session")
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        *self
            .world
            .get::<&Paddle>(self.paddle_entity(side))
            .expect("paddle entities live as long as the session")
    }

    /// Move the ball, e.g. to set up a scenario
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        let mut ball = self
            .world
            .get::<&mut Ball>(self.ball)
            .expect("ball entity lives as long as the session");
        ball.pos = pos;
        ball.vel = vel;
    }

    /// Move a paddle vertically; the position is clamped into the field
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        let mut paddle = self
            .world
            .get::<&mut Paddle>(entity)
            .expect("paddle entities live as long as the session");
        paddle.pos.y = y;
        paddle.clamp_to(&self.field);
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn hit_count(&self) -> u32 {
        self.hits.count
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.time.tick
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControlMode, GameEvent};

    struct FixedSign(f32);

    impl ServeSource for FixedSign {
        fn vertical_sign(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_new_session_layout() {
        let session = Session::new(Config::new()).unwrap();
        let field = *session.field();

        assert_eq!(session.ball().center(), field.center());
        assert!(session.ball().vel.x > 0.0, "Opening serve heads right");
        assert_eq!(session.paddle(Side::Left).pos, Vec2::new(10.0, 200.0));
        assert_eq!(session.paddle(Side::Right).pos, Vec2::new(780.0, 200.0));
        assert_eq!(session.score(), Score::new());
        assert_eq!(session.tick(), 0);
    }

    #[test]
    fn test_new_session_rejects_invalid_config() {
        let config = Config {
            ai_speed: 100.0,
            ..Config::default()
        };
        assert!(matches!(
            Session::new(config),
            Err(ConfigError::AiFasterThanPlayer { .. })
        ));
    }

    #[test]
    fn test_injected_serve_source_controls_opening_serve() {
        let session = Session::with_rng(Config::new(), FixedSign(-1.0)).unwrap();
        assert_eq!(session.ball().vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_advance_counts_ticks_and_clears_events() {
        let mut session = Session::with_rng(Config::new(), FixedSign(1.0)).unwrap();
        session.place_ball(Vec2::new(400.0, 1.0), Vec2::new(5.0, -5.0));

        let events = session.advance(&InputState::new());
        assert!(events.contains(GameEvent::WallBounce));

        let events = session.advance(&InputState::new());
        assert!(events.is_empty(), "Events belong to a single advance");
        assert_eq!(session.tick(), 2);
    }

    #[test]
    fn test_advance_ticks_collects_events() {
        let mut session = Session::with_rng(Config::new(), FixedSign(1.0)).unwrap();
        session.place_paddle(Side::Left, 0.0);
        session.place_paddle(Side::Right, 0.0);
        session.place_ball(Vec2::new(400.0, 400.0), Vec2::new(-5.0, 0.0));

        // 400 units at 5 per tick reaches the left wall within 80 ticks
        let events = session.advance_ticks(&InputState::new(), 80);
        assert_eq!(events.scored(), Some(Side::Right));
        assert_eq!(session.tick(), 80);
    }

    #[test]
    fn test_entities_stay_live_across_points() {
        let mut session = Session::with_rng(Config::new(), FixedSign(1.0)).unwrap();
        for _ in 0..3 {
            session.place_ball(Vec2::new(1.0, 20.0), Vec2::new(-5.0, 0.0));
            session.advance(&InputState::new());
        }

        assert_eq!(session.score().right, 3);
        assert_eq!(session.ball().center(), session.field().center());
        assert_eq!(session.paddle(Side::Left).pos, Vec2::new(10.0, 200.0));
    }

    #[test]
    fn test_place_paddle_is_clamped() {
        let mut session = Session::new(Config::new()).unwrap();
        session.place_paddle(Side::Left, 10_000.0);
        assert_eq!(session.paddle(Side::Left).pos.y, 400.0);
    }

    #[test]
    fn test_versus_ai_paddle_tracks_ball() {
        let config = Config {
            mode: ControlMode::VersusAi,
            ..Config::default()
        };
        let mut session = Session::with_rng(config, FixedSign(1.0)).unwrap();
        session.place_ball(Vec2::new(600.0, 50.0), Vec2::new(1.0, 0.0));

        // Holding player-two keys must not matter in this mode
        let input = InputState {
            p2_down: true,
            ..InputState::default()
        };
        session.advance(&input);

        assert_eq!(session.paddle(Side::Right).pos.y, 200.0 - 6.0);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let session = Session::new(Config::new()).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.ball, session.ball().rect());
        assert_eq!(snapshot.left_paddle, session.paddle(Side::Left).rect());
        assert_eq!(snapshot.right_paddle, session.paddle(Side::Right).rect());
        assert_eq!(snapshot.ball_vel, session.ball().vel);
        assert_eq!(snapshot.tick, 0);
    }
}
