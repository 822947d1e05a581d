#![forbid(unsafe_code)]

//! Headless bar chart.
//!
//! [`BarChart`] keeps the state a bar renderer would show: the current
//! values and the role tagged on each bar. It applies sink calls with the
//! usual renderer semantics, so it doubles as a sink for tests that care
//! about the final picture rather than the event stream.
//!
//! # Invariants
//!
//! 1. `highlight` first clears every tag, then tags the given indices.
//! 2. Out-of-range indices are ignored.
//! 3. `update_array` with a different length re-creates the bars untagged.
//! 4. Bar heights lie in `[MIN_BAR_HEIGHT, MIN_BAR_HEIGHT + BAR_SPAN]`.

use crate::role::HighlightRole;
use crate::sink::VisualSink;

/// Height of the lowest bar.
pub const MIN_BAR_HEIGHT: f64 = 30.0;

/// Extra height of the tallest bar over the lowest.
pub const BAR_SPAN: f64 = 250.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChart {
    values: Vec<i64>,
    roles: Vec<Option<HighlightRole>>,
}

impl BarChart {
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            roles: vec![None; values.len()],
        }
    }

    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Role currently tagged on bar `index`.
    #[must_use]
    pub fn role(&self, index: usize) -> Option<HighlightRole> {
        self.roles.get(index).copied().flatten()
    }

    /// Indices currently tagged with `role`, ascending.
    #[must_use]
    pub fn indices_with(&self, role: HighlightRole) -> Vec<usize> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Some(role))
            .map(|(i, _)| i)
            .collect()
    }

    /// Bar heights, linear in value between the array's min and max.
    #[must_use]
    pub fn heights(&self) -> Vec<f64> {
        let (Some(&min), Some(&max)) = (self.values.iter().min(), self.values.iter().max()) else {
            return Vec::new();
        };
        let min = min as f64;
        let range = match max as f64 - min {
            r if r > 0.0 => r,
            _ => 1.0,
        };
        self.values
            .iter()
            .map(|&v| MIN_BAR_HEIGHT.max((v as f64 - min) / range * BAR_SPAN + MIN_BAR_HEIGHT))
            .collect()
    }

    /// Drop every tag and redraw from scratch.
    pub fn reset(&mut self) {
        self.roles = vec![None; self.values.len()];
    }
}

impl VisualSink for BarChart {
    fn highlight(&mut self, indices: &[usize], role: HighlightRole) {
        self.clear_highlights();
        for &index in indices {
            if let Some(slot) = self.roles.get_mut(index) {
                *slot = Some(role);
            }
        }
    }

    fn clear_highlights(&mut self) {
        self.roles.iter_mut().for_each(|slot| *slot = None);
    }

    fn update_array(&mut self, values: &[i64]) {
        if values.len() != self.values.len() {
            self.roles = vec![None; values.len()];
        }
        self.values.clear();
        self.values.extend_from_slice(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_replaces_previous_tags() {
        let mut chart = BarChart::new(&[1, 2, 3]);
        chart.highlight(&[0, 1], HighlightRole::Comparing);
        chart.highlight(&[2], HighlightRole::Sorted);
        assert_eq!(chart.role(0), None);
        assert_eq!(chart.role(2), Some(HighlightRole::Sorted));
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut chart = BarChart::new(&[1, 2]);
        chart.highlight(&[1, 5], HighlightRole::Found);
        assert_eq!(chart.indices_with(HighlightRole::Found), vec![1]);
    }

    #[test]
    fn update_keeps_tags_when_length_matches() {
        let mut chart = BarChart::new(&[2, 1]);
        chart.highlight(&[0], HighlightRole::Swapping);
        chart.update_array(&[1, 2]);
        assert_eq!(chart.values(), &[1, 2]);
        assert_eq!(chart.role(0), Some(HighlightRole::Swapping));

        chart.update_array(&[1, 2, 3]);
        assert_eq!(chart.role(0), None);
        assert_eq!(chart.len(), 3);
    }

    #[test]
    fn heights_span_min_to_max() {
        let chart = BarChart::new(&[10, 60, 110]);
        assert_eq!(chart.heights(), vec![30.0, 155.0, 280.0]);
    }

    #[test]
    fn flat_arrays_use_unit_range() {
        let chart = BarChart::new(&[4, 4]);
        assert_eq!(chart.heights(), vec![30.0, 30.0]);
        assert!(BarChart::default().heights().is_empty());
    }

    #[test]
    fn reset_clears_tags() {
        let mut chart = BarChart::new(&[3]);
        chart.highlight(&[0], HighlightRole::Found);
        chart.reset();
        assert!(chart.indices_with(HighlightRole::Found).is_empty());
    }
}
