use crate::{CoreError, SrsConfig, EASE_RANGE, MODIFIER_RANGE};

impl SrsConfig {
    pub fn new(base_interval_days: u32, ease_multiplier: f64, interval_modifier: f64) -> Self {
        Self {
            base_interval_days,
            ease_multiplier,
            interval_modifier,
        }
    }

    /// Checks the values a profile is allowed to save. The projector accepts
    /// anything; this is for the update path only.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.base_interval_days == 0 {
            return Err(CoreError::Invalid("base interval must be at least one day"));
        }
        if !self.ease_multiplier.is_finite() || !EASE_RANGE.contains(&self.ease_multiplier) {
            return Err(CoreError::Invalid("ease multiplier out of range"));
        }
        if !self.interval_modifier.is_finite()
            || !MODIFIER_RANGE.contains(&self.interval_modifier)
        {
            return Err(CoreError::Invalid("interval modifier out of range"));
        }
        Ok(())
    }

    /// Forces every field into its practical range. Non-finite values fall
    /// back to the defaults.
    pub fn clamped(&self) -> Self {
        let defaults = SrsConfig::default();
        let clamp = |x: f64, lo: f64, hi: f64, fallback: f64| {
            if x.is_finite() {
                x.clamp(lo, hi)
            } else {
                fallback
            }
        };
        Self {
            base_interval_days: self.base_interval_days.max(1),
            ease_multiplier: clamp(
                self.ease_multiplier,
                *EASE_RANGE.start(),
                *EASE_RANGE.end(),
                defaults.ease_multiplier,
            ),
            interval_modifier: clamp(
                self.interval_modifier,
                *MODIFIER_RANGE.start(),
                *MODIFIER_RANGE.end(),
                defaults.interval_modifier,
            ),
        }
    }
}
