//! Containment tests between the agent and falling entities
//!
//! Plain overlap tests, no response: a hit either ends the run or collects
//! an item.

use glam::Vec2;

use super::state::{Agent, BonusItem, Obstacle};
use crate::clamp;
use crate::consts::ITEM_RADIUS;

/// Circle vs axis-aligned rectangle overlap
///
/// The circle center is clamped onto the rectangle to find its nearest
/// point; the shapes touch when that point is within `cr`. Exact comparison,
/// no tolerance.
pub fn circle_rect_collide(rx: f32, ry: f32, rw: f32, rh: f32, cx: f32, cy: f32, cr: f32) -> bool {
    let nx = clamp(cx, rx, rx + rw);
    let ny = clamp(cy, ry, ry + rh);
    let dx = cx - nx;
    let dy = cy - ny;
    dx * dx + dy * dy <= cr * cr
}

/// Circle vs circle overlap (touching counts)
#[inline]
pub fn circle_circle_collide(a: Vec2, ar: f32, b: Vec2, br: f32) -> bool {
    let reach = ar + br;
    a.distance_squared(b) <= reach * reach
}

/// Agent vs obstacle rectangle
pub fn agent_hits_obstacle(agent: &Agent, obstacle: &Obstacle) -> bool {
    circle_rect_collide(
        obstacle.left(),
        obstacle.y,
        obstacle.width,
        obstacle.height,
        agent.pos.x,
        agent.pos.y,
        agent.radius,
    )
}

/// Agent vs bonus item
pub fn agent_hits_item(agent: &Agent, item: &BonusItem) -> bool {
    circle_circle_collide(agent.pos, agent.radius, item.pos, ITEM_RADIUS)
}
