//! Targeting geometry on the integer grid.

use gt_core::{Bounds, GridPoint};

/// Reflect `interest` through `reference`: the point twice as far from
/// `reference` along the same line.
#[inline]
pub fn reflect(interest: GridPoint, reference: GridPoint) -> GridPoint {
    reference + (interest - reference) * 2
}

/// Pull an overshooting target back inside `bounds`, sliding it along the
/// line of `displacement` so it stays roughly on the projection ray.
///
/// The x overshoot is corrected first, shifting y by `ceil(dy/dx · overshoot)`;
/// then the y overshoot, shifting x by `ceil(dx/dy · overshoot)`.  A final
/// component-wise clamp guarantees the result lies inside `bounds` even when
/// the slope correction itself overshoots.
pub fn clamp_along_line(target: GridPoint, displacement: GridPoint, bounds: Bounds) -> GridPoint {
    let GridPoint { x: dx, y: dy } = displacement;
    let mut x = target.x;
    let mut y = target.y;

    if x > bounds.max_x {
        let over = x - bounds.max_x;
        x -= over;
        y -= slope_step(dy, dx, over);
    } else if x < 1 {
        let over = 1 - x;
        x += over;
        y += slope_step(dy, dx, over);
    }

    if y > bounds.max_y {
        let over = y - bounds.max_y;
        y -= over;
        x -= slope_step(dx, dy, over);
    } else if y < 1 {
        let over = 1 - y;
        y += over;
        x += slope_step(dx, dy, over);
    }

    bounds.clamp(GridPoint::new(x, y))
}

/// `ceil(num / den · over)`, or 0 for a degenerate line.
fn slope_step(num: i32, den: i32, over: i32) -> i32 {
    if den == 0 {
        return 0;
    }
    (num as f64 / den as f64 * over as f64).ceil() as i32
}
