//! Interval projector: predicts the review intervals a scripted run of
//! ratings would produce for a scheduling configuration.
//!
//! Everything here is pure. Inputs are coerced rather than rejected so a
//! half-typed settings value still yields a plausible preview.

use crate::{
    Rating, SrsConfig, StepResult, AGAIN_EASE_DELTA, EASE_DEFAULT, EASE_MIN, EASY_BONUS,
    EASY_EASE_DELTA, HARD_EASE_DELTA, HARD_MULTIPLIER, MODIFIER_DEFAULT,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SCRIPT: [Rating; 4] = [Rating::Good, Rating::Easy, Rating::Good, Rating::Easy];

/// Ordered interval lengths in days; the first entry is the starting interval.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProjectedPath(Vec<u64>);

impl ProjectedPath {
    pub fn intervals(&self) -> &[u64] {
        &self.0
    }

    pub fn start(&self) -> u64 {
        self.0.first().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProjectedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, days) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{days}d")?;
        }
        Ok(())
    }
}

/// Every intermediate state of a projection, for callers that also want the ease.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionTrace {
    pub start_interval_days: u64,
    pub steps: Vec<StepResult>,
}

impl ProjectionTrace {
    pub fn final_ease(&self) -> Option<f64> {
        self.steps.last().map(|s| s.ease)
    }

    pub fn path(&self) -> ProjectedPath {
        let mut v = Vec::with_capacity(self.steps.len() + 1);
        v.push(self.start_interval_days);
        v.extend(self.steps.iter().map(|s| s.interval_days));
        ProjectedPath(v)
    }
}

// Zero and NaN count as "not set", the same way an empty settings field does.
fn ease_or_default(ease: f64) -> f64 {
    if ease == 0.0 || ease.is_nan() {
        EASE_DEFAULT
    } else {
        ease
    }
}

// Same rule for the modifier: an unset (zero or NaN) field means 1x.
fn modifier_or_default(modifier: f64) -> f64 {
    if modifier == 0.0 || modifier.is_nan() {
        MODIFIER_DEFAULT
    } else {
        modifier
    }
}

fn clamp_ease(x: f64) -> f64 {
    x.max(EASE_MIN)
}

// Saturating: NaN and negatives become 0, overflow pins at u64::MAX.
fn whole_days(x: f64) -> u64 {
    x.ceil() as u64
}

/// Applies one rating to `(current_interval_days, current_ease)`.
///
/// `base_interval_days` acts as a floor on the interval the rating grows from,
/// so a lapse (`Again`, interval 0) restarts from the base interval. The
/// modifier is applied as given; a zero modifier zeroes every non-lapse step.
pub fn project_step(
    current_interval_days: f64,
    current_ease: f64,
    rating: Rating,
    base_interval_days: f64,
    interval_modifier: f64,
) -> StepResult {
    let effective = current_interval_days.max(base_interval_days).max(0.0);
    let ease = ease_or_default(current_ease);

    match rating {
        Rating::Again => StepResult {
            interval_days: 0,
            ease: clamp_ease(ease + AGAIN_EASE_DELTA),
        },
        Rating::Hard => StepResult {
            interval_days: whole_days(effective * HARD_MULTIPLIER * interval_modifier),
            ease: clamp_ease(ease + HARD_EASE_DELTA),
        },
        Rating::Good => StepResult {
            interval_days: whole_days(effective * ease * interval_modifier),
            ease,
        },
        Rating::Easy => StepResult {
            interval_days: whole_days(effective * ease * EASY_BONUS * interval_modifier),
            ease: clamp_ease(ease + EASY_EASE_DELTA),
        },
    }
}

/// Folds `script` over the starting state, keeping every step. A zero or NaN
/// modifier is treated as unset and projects at 1x.
pub fn project_trace(
    base_interval_days: f64,
    ease_multiplier: f64,
    interval_modifier: f64,
    script: &[Rating],
) -> ProjectionTrace {
    let start = whole_days(base_interval_days.round().max(1.0));
    let floor = base_interval_days.max(1.0);
    let modifier = modifier_or_default(interval_modifier);

    let mut interval = start as f64;
    let mut ease = ease_or_default(ease_multiplier);
    let mut steps = Vec::with_capacity(script.len());

    for &rating in script {
        let next = project_step(interval, ease, rating, floor, modifier);
        interval = next.interval_days as f64;
        ease = next.ease;
        steps.push(next);
    }

    ProjectionTrace {
        start_interval_days: start,
        steps,
    }
}

/// Projects the path for an arbitrary rating script. An empty script yields
/// just the starting interval.
pub fn project_path_with(
    base_interval_days: f64,
    ease_multiplier: f64,
    interval_modifier: f64,
    script: &[Rating],
) -> ProjectedPath {
    project_trace(base_interval_days, ease_multiplier, interval_modifier, script).path()
}

/// Projects the path for the default `Good, Easy, Good, Easy` script.
pub fn project_path(
    base_interval_days: f64,
    ease_multiplier: f64,
    interval_modifier: f64,
) -> ProjectedPath {
    project_path_with(
        base_interval_days,
        ease_multiplier,
        interval_modifier,
        &DEFAULT_SCRIPT,
    )
}

impl SrsConfig {
    pub fn project(&self) -> ProjectedPath {
        self.project_with(&DEFAULT_SCRIPT)
    }

    pub fn project_with(&self, script: &[Rating]) -> ProjectedPath {
        self.trace_with(script).path()
    }

    pub fn trace_with(&self, script: &[Rating]) -> ProjectionTrace {
        project_trace(
            self.base_interval_days as f64,
            self.ease_multiplier,
            self.interval_modifier,
            script,
        )
    }
}
