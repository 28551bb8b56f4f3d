// Viewport observer - threshold-crossing filter over section visibility
//
// The document can compute exact visible fractions every frame, but the
// resolver is only notified when a fraction crosses one of a fixed set of
// thresholds (or a section starts/stops intersecting entirely). Between
// crossings the observer stays silent, which is what makes the resolver's
// staleness fallback a real code path rather than dead logic.

use crate::sections::SectionId;
use std::collections::HashMap;

/// Default observation thresholds
pub const DEFAULT_THRESHOLDS: [f64; 4] = [0.0, 0.1, 0.25, 0.5];

#[derive(Debug)]
pub struct ViewportObserver {
    thresholds: Vec<f64>,
    last: HashMap<SectionId, f64>,
    primed: bool,
}

impl ViewportObserver {
    pub fn new(thresholds: &[f64]) -> Self {
        let mut thresholds = thresholds.to_vec();
        thresholds.sort_by(|a, b| a.total_cmp(b));
        Self {
            thresholds,
            last: HashMap::new(),
            primed: false,
        }
    }

    /// Feed the current fractions; returns the entries whose bucket changed,
    /// or None when nothing crossed a threshold. The first sample always
    /// reports everything (initial observation).
    pub fn sample(&mut self, ratios: &[(SectionId, f64)]) -> Option<Vec<(SectionId, f64)>> {
        if !self.primed {
            self.primed = true;
            for &(id, ratio) in ratios {
                self.last.insert(id, ratio);
            }
            return Some(ratios.to_vec());
        }

        let mut changed = Vec::new();
        for &(id, ratio) in ratios {
            let previous = self.last.get(&id).copied().unwrap_or(0.0);
            if self.bucket(previous) != self.bucket(ratio)
                || (previous > 0.0) != (ratio > 0.0)
            {
                changed.push((id, ratio));
            }
            self.last.insert(id, ratio);
        }

        if changed.is_empty() {
            None
        } else {
            Some(changed)
        }
    }

    /// Number of thresholds at or below a nonzero ratio
    fn bucket(&self, ratio: f64) -> usize {
        if ratio <= 0.0 {
            return 0;
        }
        self.thresholds.iter().filter(|&&t| ratio >= t).count()
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(&DEFAULT_THRESHOLDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_reports_everything() {
        let mut obs = ViewportObserver::default();
        let updates = obs
            .sample(&[(SectionId::Home, 0.0), (SectionId::About, 0.3)])
            .expect("initial sample fires");
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn silent_between_crossings() {
        let mut obs = ViewportObserver::default();
        obs.sample(&[(SectionId::Home, 0.12)]);

        // 0.12 -> 0.2 stays inside the (0.1, 0.25) bucket.
        assert!(obs.sample(&[(SectionId::Home, 0.2)]).is_none());
        // Crossing 0.25 fires.
        let updates = obs.sample(&[(SectionId::Home, 0.3)]).expect("crossed");
        assert_eq!(updates, vec![(SectionId::Home, 0.3)]);
    }

    #[test]
    fn intersection_start_and_stop_always_fire() {
        let mut obs = ViewportObserver::default();
        obs.sample(&[(SectionId::Skills, 0.0)]);

        let enter = obs.sample(&[(SectionId::Skills, 0.05)]).expect("entered");
        assert_eq!(enter, vec![(SectionId::Skills, 0.05)]);

        let leave = obs.sample(&[(SectionId::Skills, 0.0)]).expect("left");
        assert_eq!(leave, vec![(SectionId::Skills, 0.0)]);
    }

    #[test]
    fn only_changed_sections_are_reported() {
        let mut obs = ViewportObserver::default();
        obs.sample(&[(SectionId::Home, 0.4), (SectionId::About, 0.0)]);

        let updates = obs
            .sample(&[(SectionId::Home, 0.4), (SectionId::About, 0.2)])
            .expect("about entered");
        assert_eq!(updates, vec![(SectionId::About, 0.2)]);
    }
}
