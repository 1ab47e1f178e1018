//! The keyframe collection: ordering invariant, search, interpolation.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::interp::unlerp;
use crate::keyframe::Keyframe;
use crate::value::Lerp;

/// Bracketing indices plus normalized fraction resolved for a query time.
///
/// `start == end` means no interpolation applies: the query time preceded
/// the first keyframe or landed at/after the last one, so the value at that
/// single index is the answer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub start: usize,
    pub end: usize,
    /// Normalized position in [0, 1] between the two bracketing keyframes.
    pub t: f32,
}

/// Ordered collection of keyframes, ascending by time.
///
/// Mutations that can break the ordering re-sort immediately
/// ([`Timeline::add`], [`Timeline::splice`] with insertions); every query
/// assumes the invariant holds. The sort is stable, so keyframes sharing a
/// timestamp keep their relative order.
///
/// No internal synchronization: a host sampling from multiple threads wraps
/// the timeline in its own lock or snapshots it, since mutation interleaved
/// with a concurrent scan may resize or reorder the backing sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline<V> {
    frames: Vec<Keyframe<V>>,
}

impl<V> Default for Timeline<V> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<V> Timeline<V> {
    /// Take ownership of `frames` and sort them ascending by time.
    /// Empty input yields a zero-length timeline.
    pub fn new(frames: Vec<Keyframe<V>>) -> Self {
        let mut timeline = Self { frames };
        timeline.sort();
        timeline
    }

    /// Take ownership of `frames` that are already ascending by time,
    /// skipping the initial sort. The search contract only holds if the
    /// caller's assertion was true; [`Timeline::validate`] checks it.
    pub fn from_sorted(frames: Vec<Keyframe<V>>) -> Self {
        Self { frames }
    }

    /// Number of keyframes.
    #[inline]
    pub fn count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The backing sequence, ascending by time.
    #[inline]
    pub fn frames(&self) -> &[Keyframe<V>] {
        &self.frames
    }

    /// Mutable access to the backing sequence. Bulk edits that reorder
    /// keyframes must call [`Timeline::sort`] afterwards to restore the
    /// invariant.
    #[inline]
    pub fn frames_mut(&mut self) -> &mut Vec<Keyframe<V>> {
        &mut self.frames
    }

    /// Append a keyframe, then fully re-sort. O(n log n) per call; meant
    /// for authoring-time edits, not a per-frame hot path.
    pub fn add(&mut self, frame: Keyframe<V>) {
        self.frames.push(frame);
        self.sort();
    }

    /// Remove `remove_count` keyframes starting at `index`, insert the
    /// given frames at that position, and return the removed keyframes.
    ///
    /// Mirrors `Array.prototype.splice`: a negative `index` counts from the
    /// end and both `index` and `remove_count` clamp to the available
    /// length. The sequence is re-sorted only when at least one keyframe
    /// was inserted; pure removal cannot break the ordering.
    pub fn splice<I>(&mut self, index: isize, remove_count: usize, inserted: I) -> Vec<Keyframe<V>>
    where
        I: IntoIterator<Item = Keyframe<V>>,
    {
        let len = self.frames.len();
        let start = if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else {
            (index as usize).min(len)
        };
        let remove = remove_count.min(len - start);
        let inserted: Vec<Keyframe<V>> = inserted.into_iter().collect();
        let resort = !inserted.is_empty();
        let removed: Vec<Keyframe<V>> =
            self.frames.splice(start..start + remove, inserted).collect();
        if resort {
            self.sort();
        }
        removed
    }

    /// Truncate to zero keyframes; the timeline stays usable.
    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Re-apply the ascending-by-time sort. Exposed so hosts that edit the
    /// backing sequence through [`Timeline::frames_mut`] can restore the
    /// invariant.
    pub fn sort(&mut self) {
        self.frames.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Check the invariants explicitly: finite timestamps, ascending order.
    pub fn validate(&self) -> Result<(), TimelineError> {
        let mut previous = f32::NEG_INFINITY;
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.time.is_finite() {
                return Err(TimelineError::NonFiniteTime {
                    index,
                    time: frame.time,
                });
            }
            if frame.time < previous {
                return Err(TimelineError::OutOfOrder {
                    index,
                    time: frame.time,
                    previous,
                });
            }
            previous = frame.time;
        }
        Ok(())
    }

    /// Index of the keyframe whose time is nearest to `time`, or `None`
    /// when the timeline is empty. Distance ties go to the lower index.
    #[inline]
    pub fn nearest_index(&self, time: f32) -> Option<usize> {
        self.nearest_index_within(time, f32::INFINITY)
    }

    /// Like [`Timeline::nearest_index`], but candidates farther than
    /// `radius` are excluded entirely.
    pub fn nearest_index_within(&self, time: f32, radius: f32) -> Option<usize> {
        let mut min_dist = f32::INFINITY;
        let mut nearest = None;
        // Linear scan; the strict `<` is what keeps the earliest candidate
        // on equal distance, so a binary-search variant must preserve it.
        for (i, frame) in self.frames.iter().enumerate() {
            let dist = (frame.time - time).abs();
            if dist < min_dist && dist <= radius {
                min_dist = dist;
                nearest = Some(i);
            }
        }
        nearest
    }

    /// The keyframe nearest to `time`, or `None` when the timeline is empty.
    #[inline]
    pub fn nearest(&self, time: f32) -> Option<&Keyframe<V>> {
        self.nearest_index(time).map(|i| &self.frames[i])
    }

    /// The keyframe nearest to `time` within `radius`, or `None`.
    #[inline]
    pub fn nearest_within(&self, time: f32, radius: f32) -> Option<&Keyframe<V>> {
        self.nearest_index_within(time, radius).map(|i| &self.frames[i])
    }

    /// Index of the keyframe at exactly `time` (radius-zero nearest).
    #[inline]
    pub fn get_index(&self, time: f32) -> Option<usize> {
        self.nearest_index_within(time, 0.0)
    }

    /// The keyframe at exactly `time`, or `None`.
    #[inline]
    pub fn get(&self, time: f32) -> Option<&Keyframe<V>> {
        self.nearest_within(time, 0.0)
    }

    /// First keyframe whose time is strictly greater than `time`.
    ///
    /// A timeline with fewer than two keyframes has no "next": a singleton
    /// models a constant with no upcoming change.
    pub fn next(&self, time: f32) -> Option<&Keyframe<V>> {
        if self.frames.len() < 2 {
            return None;
        }
        self.frames.iter().find(|frame| frame.time > time)
    }

    /// Last keyframe whose time is strictly less than `time`; same
    /// singleton exclusion as [`Timeline::next`].
    pub fn previous(&self, time: f32) -> Option<&Keyframe<V>> {
        if self.frames.len() < 2 {
            return None;
        }
        self.frames.iter().rev().find(|frame| frame.time < time)
    }

    /// Resolve `time` to bracketing indices plus a normalized fraction,
    /// the primitive beneath [`Timeline::value`].
    ///
    /// `None` only for an empty timeline. A query before the first
    /// keyframe yields `(0, 0, 0)`; at or past the last, `(last, last, 0)`;
    /// otherwise the enclosing pair with `time` clamped into it and `t`
    /// normalized via [`unlerp`] (zero-width intervals resolve to `t == 0`).
    pub fn interpolation(&self, time: f32) -> Option<Bracket> {
        if self.frames.is_empty() {
            return None;
        }
        // Last keyframe at or before the query time, scanning from the end.
        let prev = match self.frames.iter().rposition(|frame| time >= frame.time) {
            None => {
                return Some(Bracket {
                    start: 0,
                    end: 0,
                    t: 0.0,
                })
            }
            Some(i) if i == self.frames.len() - 1 => {
                return Some(Bracket {
                    start: i,
                    end: i,
                    t: 0.0,
                })
            }
            Some(i) => i,
        };
        let t0 = self.frames[prev].time;
        let t1 = self.frames[prev + 1].time;
        let clamped = time.max(t0).min(t1);
        Some(Bracket {
            start: prev,
            end: prev + 1,
            t: unlerp(t0, t1, clamped),
        })
    }
}

impl<V: Clone> Timeline<V> {
    /// Sample at `time` with a caller-supplied interpolator instead of the
    /// default lerp; its result is returned verbatim.
    ///
    /// The hook receives the bracketing start/end keyframes and `t` in
    /// [0, 1]. Equal bracket indices (empty-side boundary or clamped end)
    /// short-circuit to a clone of that keyframe's value and never invoke
    /// the hook. `None` only for an empty timeline.
    pub fn value_with<F>(&self, time: f32, interpolator: F) -> Option<V>
    where
        F: FnOnce(&Keyframe<V>, &Keyframe<V>, f32) -> V,
    {
        let bracket = self.interpolation(time)?;
        if bracket.start == bracket.end {
            return Some(self.frames[bracket.start].value.clone());
        }
        Some(interpolator(
            &self.frames[bracket.start],
            &self.frames[bracket.end],
            bracket.t,
        ))
    }
}

impl<V: Lerp + Clone> Timeline<V> {
    /// Sample the timeline at `time` with the default lerp.
    ///
    /// `None` only for an empty timeline; out-of-range times clamp to the
    /// boundary keyframe's value. Keyframes with mismatched value shapes
    /// are outside this path's contract; use [`Timeline::value_with`].
    pub fn value(&self, time: f32) -> Option<V> {
        let bracket = self.interpolation(time)?;
        if bracket.start == bracket.end {
            return Some(self.frames[bracket.start].value.clone());
        }
        let start = &self.frames[bracket.start];
        let end = &self.frames[bracket.end];
        Some(start.value.lerp(&end.value, bracket.t))
    }

    /// Sample like [`Timeline::value`], writing into `out` so repeated
    /// sampling can reuse storage. Returns `false` (leaving `out`
    /// untouched) only for an empty timeline.
    pub fn value_into(&self, time: f32, out: &mut V) -> bool {
        let Some(bracket) = self.interpolation(time) else {
            return false;
        };
        if bracket.start == bracket.end {
            out.clone_from(&self.frames[bracket.start].value);
        } else {
            let start = &self.frames[bracket.start];
            let end = &self.frames[bracket.end];
            start.value.lerp_into(&end.value, bracket.t, out);
        }
        true
    }
}
