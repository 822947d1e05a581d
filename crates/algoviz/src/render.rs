#![forbid(unsafe_code)]

//! Text frames.
//!
//! A [`FrameRenderer`] keeps a [`BarChart`] in step with the event stream
//! and draws it after every event, either as one line of values or as one
//! horizontal bar per value.

use algoviz_core::{BarChart, HighlightRole, SinkEvent};

/// Height units per bar glyph.
const UNITS_PER_GLYPH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    /// `3 (1) [8] 5`: one line, roles shown as brackets.
    #[default]
    Line,
    /// One row per value, bar length proportional to its height.
    Bars,
}

#[derive(Debug, Clone)]
pub struct FrameRenderer {
    chart: BarChart,
    style: FrameStyle,
    frames: usize,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(values: &[i64], style: FrameStyle) -> Self {
        Self {
            chart: BarChart::new(values),
            style,
            frames: 0,
        }
    }

    /// Apply `event` and return the frame it produces.
    pub fn apply(&mut self, event: &SinkEvent) -> String {
        event.apply_to(&mut self.chart);
        self.frames += 1;
        self.draw()
    }

    #[must_use]
    pub fn draw(&self) -> String {
        match self.style {
            FrameStyle::Line => render_line(&self.chart),
            FrameStyle::Bars => render_bars(&self.chart),
        }
    }

    /// Events applied so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[must_use]
    pub fn chart(&self) -> &BarChart {
        &self.chart
    }
}

fn marked(value: i64, role: Option<HighlightRole>) -> String {
    match role {
        None => value.to_string(),
        Some(HighlightRole::Comparing) => format!("({value})"),
        Some(HighlightRole::Swapping) => format!("[{value}]"),
        Some(HighlightRole::Sorted) => format!("{value}*"),
        Some(HighlightRole::Found) => format!("<{value}>"),
    }
}

/// Render the chart as one line of values.
#[must_use]
pub fn render_line(chart: &BarChart) -> String {
    chart
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| marked(value, chart.role(i)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the chart as one row per bar, followed by a blank line.
#[must_use]
pub fn render_bars(chart: &BarChart) -> String {
    let mut out = String::new();
    for (i, (&value, height)) in chart.values().iter().zip(chart.heights()).enumerate() {
        let glyphs = (height / UNITS_PER_GLYPH).round() as usize;
        let role = chart.role(i).map_or("", HighlightRole::as_str);
        out.push_str(&format!(
            "{i:>2} {value:>5} {bar:<28} {role}",
            bar = "#".repeat(glyphs)
        ));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::VisualSink;

    #[test]
    fn line_marks_each_role() {
        let mut chart = BarChart::new(&[1, 2, 3, 4, 5]);
        chart.highlight(&[1], HighlightRole::Comparing);
        assert_eq!(render_line(&chart), "1 (2) 3 4 5");
        chart.highlight(&[0, 4], HighlightRole::Found);
        assert_eq!(render_line(&chart), "<1> 2 3 4 <5>");
        chart.highlight(&[2], HighlightRole::Swapping);
        assert_eq!(render_line(&chart), "1 2 [3] 4 5");
        chart.highlight(&[3], HighlightRole::Sorted);
        assert_eq!(render_line(&chart), "1 2 3 4* 5");
    }

    #[test]
    fn bars_scale_between_shortest_and_tallest() {
        let chart = BarChart::new(&[10, 110]);
        let frame = render_bars(&chart);
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].matches('#').count(), 3);
        assert_eq!(rows[1].matches('#').count(), 28);
    }

    #[test]
    fn renderer_tracks_updates() {
        let mut renderer = FrameRenderer::new(&[2, 1], FrameStyle::Line);
        let frame = renderer.apply(&SinkEvent::UpdateArray { values: vec![1, 2] });
        assert_eq!(frame, "1 2");
        let frame = renderer.apply(&SinkEvent::Highlight {
            indices: vec![0, 1],
            role: HighlightRole::Sorted,
        });
        assert_eq!(frame, "1* 2*");
        assert_eq!(renderer.frames(), 2);
    }
}
