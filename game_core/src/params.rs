/// Game tuning parameters for Pong
///
/// Distances are in field units (pixels of the reference 800x500 field) and
/// speeds are in units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side wall
    pub const PADDLE_SPEED: f32 = 7.0;
    pub const AI_PADDLE_SPEED: f32 = 6.0; // Slower than the player so the AI can be beaten

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SERVE_SPEED_X: f32 = 5.0;
    pub const BALL_SERVE_SPEED_Y: f32 = 5.0;

    // Escalation
    pub const ESCALATION_HITS: u32 = 3;
    pub const ESCALATION_STEP: f32 = 0.5;

    // Score
    pub const WIN_SCORE: u32 = 11;

    // Timing
    pub const TICK_RATE: u32 = 60;
    pub const DEFAULT_SEED: u64 = 12345;
}
