use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot drive a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("paddle height {paddle_height} does not fit in field height {field_height}")]
    PaddleTooTall {
        paddle_height: f32,
        field_height: f32,
    },

    #[error("ball size {ball_size} does not fit in a {field_width}x{field_height} field")]
    BallTooLarge {
        ball_size: f32,
        field_width: f32,
        field_height: f32,
    },

    #[error("paddles overlap: margin {margin} plus width {width} exceeds half the field width")]
    PaddlesOverlap { margin: f32, width: f32 },

    #[error("ai speed {ai_speed} exceeds player paddle speed {paddle_speed}")]
    AiFasterThanPlayer { ai_speed: f32, paddle_speed: f32 },

    #[error("escalation threshold must be at least one hit")]
    ZeroEscalationHits,

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
}
