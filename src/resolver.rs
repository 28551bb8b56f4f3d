// Active-section resolution
//
// Decides which page section the nav bar highlights while the user scrolls.
// Two signals feed it: per-section visible fractions measured against a
// shrunk viewport band (the observer), and raw scroll notifications used as
// a staleness fallback. A short-lived "intent" set by nav activation bridges
// the gap during programmatic smooth scrolling, where mid-flight no section
// is substantially visible yet.
//
// All methods take an explicit `now` so the timing windows are deterministic
// under test. Everything runs on the UI task; there is no locking.

use crate::sections::SectionId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tuned heuristics for section activation.
///
/// The thresholds and windows have no derivation beyond feel; they are kept
/// configurable rather than folded into the logic.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Minimum visible fraction for a section to win unconditionally
    pub meaningful_ratio: f64,

    /// How long a nav-activation intent stays eligible
    pub intent_window: Duration,

    /// Observer silence after which a raw scroll forces re-resolution
    pub stale_after: Duration,

    /// Rows from the viewport top to the sticky-nav buffer line
    pub top_buffer: i32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            meaningful_ratio: 0.12,
            intent_window: Duration::from_millis(900),
            stale_after: Duration::from_millis(250),
            top_buffer: 3,
        }
    }
}

/// The user just asked to navigate here; eligible until `until`
#[derive(Debug, Clone, Copy)]
struct Intent {
    id: SectionId,
    until: Instant,
}

/// Resolves the currently-active section from visibility and intent signals
#[derive(Debug)]
pub struct ActiveSectionResolver {
    sections: Vec<SectionId>,
    config: ResolverConfig,

    /// Most recently observed visible fraction per section; missing reads as 0
    ratios: HashMap<SectionId, f64>,

    /// When the observer last delivered an update (staleness check)
    last_observer_update: Option<Instant>,

    /// At most one outstanding intent; a new one replaces the old
    intent: Option<Intent>,

    active: SectionId,
}

impl ActiveSectionResolver {
    pub fn new(sections: &[SectionId], config: ResolverConfig) -> Self {
        let active = sections.first().copied().unwrap_or(SectionId::Home);
        Self {
            sections: sections.to_vec(),
            config,
            ratios: HashMap::new(),
            last_observer_update: None,
            intent: None,
            active,
        }
    }

    /// The single current output; never an unknown section once constructed
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Record a nav activation. Replaces any outstanding intent.
    pub fn set_intent(&mut self, id: SectionId, now: Instant) {
        if !self.sections.contains(&id) {
            return;
        }
        self.intent = Some(Intent {
            id,
            until: now + self.config.intent_window,
        });
    }

    /// The user took over (wheel, mouse down, touch move, navigation key):
    /// drop the intent immediately, expired or not.
    pub fn cancel_intent(&mut self) {
        self.intent = None;
    }

    /// Viewport-intersection signal: visible fractions for sections whose
    /// ratio crossed an observation threshold. Returns true if the active
    /// section changed.
    pub fn observe(
        &mut self,
        updates: &[(SectionId, f64)],
        now: Instant,
        tops: &[(SectionId, i32)],
    ) -> bool {
        self.last_observer_update = Some(now);
        for &(id, ratio) in updates {
            self.ratios.insert(id, ratio.clamp(0.0, 1.0));
        }
        self.choose_active(now, tops)
    }

    /// Raw scroll signal, already rate-limited to once per frame by the
    /// caller. Only forces a full re-resolution when the observer has gone
    /// quiet or nothing intersects at all; otherwise the observer is
    /// trusted and this is a no-op.
    pub fn on_scroll(&mut self, now: Instant, tops: &[(SectionId, i32)]) -> bool {
        let stale = self
            .last_observer_update
            .is_none_or(|t| now.duration_since(t) > self.config.stale_after);

        if stale || self.observer_candidate().is_none() {
            return self.choose_active(now, tops);
        }
        false
    }

    /// Section with the highest nonzero recorded fraction, if any
    fn observer_candidate(&self) -> Option<(SectionId, f64)> {
        let mut best: Option<(SectionId, f64)> = None;
        for &id in &self.sections {
            let ratio = self.ratios.get(&id).copied().unwrap_or(0.0);
            if ratio > best.map_or(0.0, |(_, r)| r) {
                best = Some((id, ratio));
            }
        }
        best
    }

    /// Resolution procedure, run on every trigger.
    fn choose_active(&mut self, now: Instant, tops: &[(SectionId, i32)]) -> bool {
        let candidate = self.observer_candidate();

        // A genuinely visible section always wins; intent never blocks it.
        if let Some((id, ratio)) = candidate {
            if ratio >= self.config.meaningful_ratio {
                return self.set_active(id);
            }
        }

        // Mid smooth-scroll nothing may intersect yet; honor the intent so
        // the nav highlight does not flicker through in-between sections.
        let live_intent = self.intent.filter(|i| now < i.until);
        if let Some(intent) = live_intent {
            if candidate.is_none() {
                return self.set_active(intent.id);
            }
        }

        if let Some((id, _)) = candidate {
            return self.set_active(id);
        }

        let fallback = self.fallback_active(tops);
        self.set_active(fallback)
    }

    /// Geometric fallback: nearest section top at or above the buffer line,
    /// else nearest below it, else the first known section.
    fn fallback_active(&self, tops: &[(SectionId, i32)]) -> SectionId {
        let buffer = self.config.top_buffer + 1;

        let mut best_above: Option<(SectionId, i32)> = None;
        let mut best_below: Option<(SectionId, i32)> = None;

        for &(id, top) in tops {
            let dist = (top - buffer).abs();
            if top <= buffer {
                if best_above.is_none_or(|(_, d)| dist < d) {
                    best_above = Some((id, dist));
                }
            } else if best_below.is_none_or(|(_, d)| dist < d) {
                best_below = Some((id, dist));
            }
        }

        best_above
            .or(best_below)
            .map(|(id, _)| id)
            .or_else(|| self.sections.first().copied())
            .unwrap_or(self.active)
    }

    /// Write the output only when it differs; no redundant updates.
    fn set_active(&mut self, next: SectionId) -> bool {
        if self.active == next {
            return false;
        }
        tracing::debug!(from = self.active.anchor(), to = next.anchor(), "active section changed");
        self.active = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ActiveSectionResolver {
        ActiveSectionResolver::new(&SectionId::ALL, ResolverConfig::default())
    }

    fn no_tops() -> Vec<(SectionId, i32)> {
        Vec::new()
    }

    #[test]
    fn starts_at_first_section() {
        assert_eq!(resolver().active(), SectionId::Home);
    }

    #[test]
    fn meaningful_candidate_always_wins_over_intent() {
        let mut r = resolver();
        let now = Instant::now();
        r.set_intent(SectionId::Contact, now);

        // About is meaningfully visible; intent must not block it.
        r.observe(&[(SectionId::About, 0.5)], now, &no_tops());
        assert_eq!(r.active(), SectionId::About);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut r = resolver();
        let now = Instant::now();
        r.set_intent(SectionId::Contact, now);
        // Exactly at the meaningful ratio counts as meaningful.
        r.observe(&[(SectionId::Skills, 0.12)], now, &no_tops());
        assert_eq!(r.active(), SectionId::Skills);
    }

    #[test]
    fn never_reports_sub_threshold_section_while_meaningful_one_exists() {
        let mut r = resolver();
        let now = Instant::now();
        r.observe(
            &[(SectionId::About, 0.05), (SectionId::Projects, 0.4)],
            now,
            &no_tops(),
        );
        assert_eq!(r.active(), SectionId::Projects);
    }

    #[test]
    fn intent_holds_until_window_elapses() {
        let mut r = resolver();
        let t0 = Instant::now();
        r.set_intent(SectionId::Projects, t0);

        // No intersection updates at all: intent is active for the window.
        r.on_scroll(t0 + Duration::from_millis(100), &no_tops());
        assert_eq!(r.active(), SectionId::Projects);

        r.on_scroll(t0 + Duration::from_millis(899), &no_tops());
        assert_eq!(r.active(), SectionId::Projects);

        // Past the window the geometric fallback takes over (empty geometry
        // falls back to the first section).
        r.on_scroll(t0 + Duration::from_millis(901), &no_tops());
        assert_eq!(r.active(), SectionId::Home);
    }

    #[test]
    fn user_input_cancels_pending_intent() {
        let mut r = resolver();
        let t0 = Instant::now();
        r.set_intent(SectionId::Contact, t0);
        r.cancel_intent();

        // Window has not elapsed, but the intent is gone.
        r.on_scroll(t0 + Duration::from_millis(10), &no_tops());
        assert_eq!(r.active(), SectionId::Home);
    }

    #[test]
    fn intent_loses_when_anything_intersects() {
        let mut r = resolver();
        let now = Instant::now();
        r.set_intent(SectionId::Contact, now);

        // A weak candidate below the meaningful threshold still beats intent
        // because something is intersecting.
        r.observe(&[(SectionId::Education, 0.05)], now, &no_tops());
        assert_eq!(r.active(), SectionId::Education);
    }

    #[test]
    fn new_intent_replaces_old() {
        let mut r = resolver();
        let t0 = Instant::now();
        r.set_intent(SectionId::About, t0);
        r.set_intent(SectionId::Contact, t0 + Duration::from_millis(10));

        r.on_scroll(t0 + Duration::from_millis(20), &no_tops());
        assert_eq!(r.active(), SectionId::Contact);
    }

    #[test]
    fn intent_for_an_untracked_section_is_ignored() {
        // Only a subset of sections is tracked; intents for the rest are
        // dropped rather than ever becoming the active output.
        let tracked = [SectionId::Home, SectionId::About];
        let mut r = ActiveSectionResolver::new(&tracked, ResolverConfig::default());
        let t0 = Instant::now();

        r.set_intent(SectionId::Contact, t0);
        r.on_scroll(t0 + Duration::from_millis(1), &no_tops());
        assert_eq!(r.active(), SectionId::Home);

        r.set_intent(SectionId::About, t0);
        r.on_scroll(t0 + Duration::from_millis(2), &no_tops());
        assert_eq!(r.active(), SectionId::About);
    }

    #[test]
    fn scroll_is_noop_while_observer_is_fresh_with_candidate() {
        let mut r = resolver();
        let t0 = Instant::now();
        r.observe(&[(SectionId::Skills, 0.3)], t0, &no_tops());
        assert_eq!(r.active(), SectionId::Skills);

        // Geometry now points elsewhere; a fresh observer with a candidate
        // means scroll trusts the recorded state instead.
        let tops = vec![(SectionId::Contact, 0)];
        let changed = r.on_scroll(t0 + Duration::from_millis(100), &tops);
        assert!(!changed);
        assert_eq!(r.active(), SectionId::Skills);
    }

    #[test]
    fn stale_observer_lets_scroll_rerun_resolution() {
        let mut r = resolver();
        let t0 = Instant::now();
        r.observe(&[(SectionId::Skills, 0.3)], t0, &no_tops());

        // Zero out the recorded ratio, then go quiet past the stale window;
        // the fallback geometry decides.
        r.observe(&[(SectionId::Skills, 0.0)], t0 + Duration::from_millis(1), &no_tops());
        let tops = vec![(SectionId::Education, 2), (SectionId::Experience, 30)];
        r.on_scroll(t0 + Duration::from_millis(300), &tops);
        assert_eq!(r.active(), SectionId::Education);
    }

    #[test]
    fn fallback_prefers_nearest_above_the_buffer_line() {
        let r = resolver();
        // Buffer line sits at top_buffer + 1 = 4 rows.
        let tops = vec![
            (SectionId::Home, -40),
            (SectionId::About, -2),
            (SectionId::Skills, 10),
        ];
        assert_eq!(r.fallback_active(&tops), SectionId::About);
    }

    #[test]
    fn fallback_uses_nearest_below_when_nothing_is_above() {
        let r = resolver();
        let tops = vec![(SectionId::Projects, 25), (SectionId::Education, 8)];
        assert_eq!(r.fallback_active(&tops), SectionId::Education);
    }

    #[test]
    fn observe_reports_change_only_when_output_differs() {
        let mut r = resolver();
        let now = Instant::now();
        assert!(r.observe(&[(SectionId::About, 0.5)], now, &no_tops()));
        assert!(!r.observe(&[(SectionId::About, 0.6)], now, &no_tops()));
    }
}
