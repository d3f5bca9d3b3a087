//! Animation step counter
//!
//! ```text
//! 0 → 1 → ... → steps-1
//!                  ↓ next (loop)      → 0
//!                  ↓ next (no loop)   → steps-1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnimationRecord", into = "AnimationRecord")]
pub struct Animation {
    /// Total number of reveal stages, always at least 1
    steps: usize,
    /// Per-step duration, interpreted by the renderer
    time: f64,
    /// Whether advancing past the last step wraps to the first
    looping: bool,
    /// Active step, in `0..steps`
    current: usize,
}

/// Persisted shape of an animation, validated on the way back in.
#[derive(Serialize, Deserialize)]
struct AnimationRecord {
    steps: usize,
    time: f64,
    #[serde(rename = "loop")]
    looping: bool,
    #[serde(default)]
    current: usize,
}

impl Animation {
    pub fn new(steps: usize, time: f64, looping: bool) -> Result<Self> {
        if steps == 0 {
            return Err(AnimationError::InvalidConfiguration { steps });
        }

        Ok(Self {
            steps,
            time,
            looping,
            current: 0,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Index of the active step
    pub fn current(&self) -> usize {
        self.current
    }

    /// True when the active step is the last one
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps
    }

    /// Advance one step, wrapping or clamping at the end
    pub fn next(&mut self) {
        let advanced = self.current + 1;

        if advanced < self.steps {
            self.current = advanced;
            return;
        }

        if self.looping {
            tracing::debug!(steps = self.steps, "Animation wrapped to first step");
            self.current = 0;
        } else {
            // Fixed point: further calls are no-ops
            self.current = self.steps - 1;
        }
    }

    /// Return to the first step
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl TryFrom<AnimationRecord> for Animation {
    type Error = AnimationError;

    fn try_from(record: AnimationRecord) -> Result<Self> {
        let mut animation = Animation::new(record.steps, record.time, record.looping)?;

        if record.current >= record.steps {
            return Err(AnimationError::StepOutOfRange {
                current: record.current,
                steps: record.steps,
            });
        }

        animation.current = record.current;
        Ok(animation)
    }
}

impl From<Animation> for AnimationRecord {
    fn from(animation: Animation) -> Self {
        Self {
            steps: animation.steps,
            time: animation.time,
            looping: animation.looping,
            current: animation.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_animation_starts_at_zero() {
        for steps in 1..=8 {
            let animation = Animation::new(steps, 0.5, steps % 2 == 0).unwrap();
            assert_eq!(animation.current(), 0);
            assert_eq!(animation.steps(), steps);
        }
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = Animation::new(0, 1.0, false);
        assert_eq!(
            result.unwrap_err(),
            AnimationError::InvalidConfiguration { steps: 0 }
        );
    }

    #[test]
    fn test_non_looping_clamps_at_last_step() {
        for steps in 1..=6 {
            let mut animation = Animation::new(steps, 1.0, false).unwrap();

            for _ in 0..steps - 1 {
                animation.next();
            }
            assert_eq!(animation.current(), steps - 1);
            assert!(animation.is_last());

            // Idempotent at the ceiling
            for _ in 0..5 {
                animation.next();
                assert_eq!(animation.current(), steps - 1);
            }
        }
    }

    #[test]
    fn test_looping_wraps_to_first_step() {
        for steps in 1..=6 {
            let mut animation = Animation::new(steps, 1.0, true).unwrap();

            for _ in 0..steps {
                animation.next();
            }
            assert_eq!(animation.current(), 0);

            for k in 0..(2 * steps + 3) {
                let mut animation = Animation::new(steps, 1.0, true).unwrap();
                for _ in 0..(steps + k) {
                    animation.next();
                }
                assert_eq!(animation.current(), k % steps);
            }
        }
    }

    #[test]
    fn test_single_step_without_loop_stays_put() {
        let mut animation = Animation::new(1, 2.0, false).unwrap();
        for _ in 0..10 {
            animation.next();
            assert_eq!(animation.current(), 0);
        }
    }

    #[test]
    fn test_reset() {
        let mut animation = Animation::new(4, 1.0, false).unwrap();
        animation.next();
        animation.next();
        assert_eq!(animation.current(), 2);

        animation.reset();
        assert_eq!(animation.current(), 0);
        assert!(!animation.is_last());
    }

    #[test]
    fn test_serde_uses_loop_key() {
        let mut animation = Animation::new(3, 0.25, true).unwrap();
        animation.next();

        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(value["steps"], 3);
        assert_eq!(value["loop"], true);
        assert_eq!(value["current"], 1);

        let restored: Animation = serde_json::from_value(value).unwrap();
        assert_eq!(restored, animation);
    }

    #[test]
    fn test_deserialize_validates() {
        let zero_steps = serde_json::from_str::<Animation>(r#"{"steps":0,"time":1.0,"loop":false}"#);
        assert!(zero_steps.is_err());

        let past_end =
            serde_json::from_str::<Animation>(r#"{"steps":2,"time":1.0,"loop":false,"current":2}"#);
        assert!(past_end.is_err());

        let fresh: Animation =
            serde_json::from_str(r#"{"steps":2,"time":1.0,"loop":false}"#).unwrap();
        assert_eq!(fresh.current(), 0);
    }
}
