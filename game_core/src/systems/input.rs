use hecs::World;

use crate::{Controller, InputState, Paddle, PaddleIntent};

/// Turn held keys into paddle intents for human-controlled paddles
///
/// Up and down held together cancel out.
pub fn apply_input(world: &mut World, input: &InputState) {
    for (_entity, (paddle, controller, intent)) in
        world.query_mut::<(&Paddle, &Controller, &mut PaddleIntent)>()
    {
        if *controller != Controller::Human {
            continue;
        }

        let (up, down) = input.flags(paddle.side);
        let mut dy = 0.0;
        if up {
            dy -= paddle.speed;
        }
        if down {
            dy += paddle.speed;
        }
        intent.dy = dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config, ControlMode, Side};

    fn intent_for(world: &World, side: Side) -> f32 {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side == side)
            .map(|(_e, (_, intent))| intent.dy)
            .unwrap()
    }

    #[test]
    fn test_up_and_down_flags() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);

        let input = InputState {
            p1_up: true,
            p2_down: true,
            ..InputState::default()
        };
        apply_input(&mut world, &input);

        assert_eq!(intent_for(&world, Side::Left), -config.paddle_speed);
        assert_eq!(intent_for(&world, Side::Right), config.paddle_speed);
    }

    #[test]
    fn test_both_flags_cancel() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);

        let input = InputState {
            p1_up: true,
            p1_down: true,
            ..InputState::default()
        };
        apply_input(&mut world, &input);

        assert_eq!(intent_for(&world, Side::Left), 0.0);
    }

    #[test]
    fn test_ai_paddle_ignores_player_two_flags() {
        let config = Config {
            mode: ControlMode::VersusAi,
            ..Config::default()
        };
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Right);

        let input = InputState {
            p2_up: true,
            ..InputState::default()
        };
        apply_input(&mut world, &input);

        assert_eq!(
            intent_for(&world, Side::Right),
            0.0,
            "AI paddle should not respond to keyboard flags"
        );
    }
}
