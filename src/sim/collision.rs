//! Ball-vs-paddle contact
//!
//! Contact is a plain bounding-box overlap. There is no swept test and no
//! penetration resolution, so a fast ball can tunnel into (or through) a paddle.

use super::rect::Rect;
use super::state::Side;

/// Which paddle, if any, the ball is touching this tick.
///
/// The left paddle is checked first and a hit there short-circuits the right
/// paddle check, so at most one side is reported per tick.
pub fn ball_paddle_contact(ball: &Rect, left_paddle: &Rect, right_paddle: &Rect) -> Option<Side> {
    if ball.intersects(left_paddle) {
        Some(Side::Left)
    } else if ball.intersects(right_paddle) {
        Some(Side::Right)
    } else {
        None
    }
}
