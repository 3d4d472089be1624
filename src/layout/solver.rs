//! Viewport constraint solving for gutter padding.
//!
//! Both solver entry points answer the same question (how much total
//! padding fits in a viewport while leaving `min_content` columns for the
//! content) but apply different policies when the request is over budget:
//!
//! - [`fit_padding`] scales both edges proportionally, preserving the
//!   left/right ratio. Used for programmatic updates (seeding from the
//!   state file, double-click resets, resize reflow).
//! - [`fit_drag`] takes the excess only from the edge being dragged, so a
//!   live drag never moves the handle the user is not touching.

use super::Side;

/// Total padding budget for a viewport: the columns left over after
/// reserving the minimum content width. Zero when the viewport is too
/// narrow to reserve anything.
pub fn padding_budget(viewport_width: f64, min_content: f64) -> f64 {
    (viewport_width - min_content).max(0.0)
}

/// Fit a requested padding pair into the viewport, scaling both edges
/// proportionally when the request exceeds the budget.
///
/// A non-positive `viewport_width` means the viewport is not yet known;
/// the request passes through unchanged (clamped to zero) and is
/// corrected on the next resize.
pub fn fit_padding(left: f64, right: f64, viewport_width: f64, min_content: f64) -> (f64, f64) {
    let left = left.max(0.0);
    let right = right.max(0.0);

    if viewport_width <= 0.0 {
        return (left, right);
    }

    let budget = padding_budget(viewport_width, min_content);
    let total = left + right;
    if total <= budget {
        return (left, right);
    }

    // total > budget >= 0 here, so the division is well-defined.
    let scale = budget / total;
    (left * scale, right * scale)
}

/// Fit a padding pair mid-drag, shrinking only the dragged edge when the
/// pair exceeds the budget. The stationary edge keeps its drag-start
/// value even if that forces the dragged edge all the way to zero.
pub fn fit_drag(
    left: f64,
    right: f64,
    viewport_width: f64,
    min_content: f64,
    side: Side,
) -> (f64, f64) {
    let mut left = left.max(0.0);
    let mut right = right.max(0.0);

    if viewport_width <= 0.0 {
        return (left, right);
    }

    let budget = padding_budget(viewport_width, min_content);
    let excess = (left + right) - budget;
    if excess > 0.0 {
        match side {
            Side::Left => left = (left - excess).max(0.0),
            Side::Right => right = (right - excess).max(0.0),
        }
    }

    (left, right)
}
