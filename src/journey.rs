//! Journey rail: scroll-synchronized section navigation.
//!
//! Keeps a progress indicator and a column of section nodes in sync with the
//! document scroll position, and lets the user jump between sections by
//! hotkey or by dragging the rail. The logical state (active section,
//! progress fraction) is recomputed exactly on every frame; only the offset
//! itself is animated.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::theme::colors;

/// A named anchor point on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier matching a page anchor
    pub id: &'static str,
    /// Short label shown next to the rail node
    pub label: &'static str,
}

/// The portfolio's section list, in document order
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Start" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "projects", label: "Work" },
    Section { id: "contact", label: "Connect" },
];

/// Row geometry of the built document.
///
/// A section whose anchor could not be placed carries `None` and is skipped
/// during boundary scanning; sections may legitimately be absent while the
/// page is first built.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    tops: Vec<Option<usize>>,
    total_rows: usize,
}

impl PageLayout {
    pub fn new(tops: Vec<Option<usize>>, total_rows: usize) -> Self {
        Self { tops, total_rows }
    }

    /// Top row of the section at `index`, if its anchor exists
    pub fn section_top(&self, index: usize) -> Option<usize> {
        self.tops.get(index).copied().flatten()
    }

    pub fn section_count(&self) -> usize {
        self.tops.len()
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Maximum scrollable offset for a viewport of `viewport_rows`
    pub fn max_scroll(&self, viewport_rows: u16) -> f32 {
        self.total_rows.saturating_sub(viewport_rows as usize) as f32
    }
}

/// Fraction of the glide distance covered per frame
const GLIDE_RATE: f32 = 0.28;
/// Minimum glide step in rows, so long glides still settle quickly
const GLIDE_MIN_STEP: f32 = 1.0;
/// Distance at which a glide snaps to its target
const GLIDE_SNAP: f32 = 0.75;

/// Scroll tracker state for the journey rail
#[derive(Debug, Clone)]
pub struct JourneyState {
    /// Current scroll offset in rows (fractional while gliding)
    pub offset: f32,
    /// Ordinal of the section considered current
    pub active_index: usize,
    /// Global scroll ratio in [0, 1], independent of section boundaries
    pub progress: f32,
    /// Whether a rail drag gesture is in flight
    pub dragging: bool,
    /// Pointer position along the rail while dragging, in [0, 1]
    pub drag_fraction: f32,
    /// Target offset of the in-flight smooth scroll, if any
    glide_target: Option<f32>,
}

impl Default for JourneyState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            active_index: 0,
            progress: 0.0,
            dragging: false,
            drag_fraction: 0.0,
            glide_target: None,
        }
    }
}

impl JourneyState {
    /// Recompute `active_index` and `progress` from the current offset.
    ///
    /// The active section is the last one (in document order) whose top row
    /// has been scrolled past the viewport midpoint; ties between overlapping
    /// sections resolve to the later one. Falls back to 0.
    pub fn sync(&mut self, layout: &PageLayout, viewport_rows: u16) {
        let midpoint = self.offset + viewport_rows as f32 / 2.0;

        self.active_index = 0;
        for i in (0..layout.section_count()).rev() {
            if let Some(top) = layout.section_top(i) {
                if top as f32 <= midpoint {
                    self.active_index = i;
                    break;
                }
            }
        }

        let max = layout.max_scroll(viewport_rows);
        self.progress = if max > 0.0 {
            (self.offset / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Scroll by a row delta. Manual scrolling supersedes any glide.
    pub fn scroll_by(&mut self, delta: f32, layout: &PageLayout, viewport_rows: u16) {
        self.glide_target = None;
        self.offset = (self.offset + delta).clamp(0.0, layout.max_scroll(viewport_rows));
        self.sync(layout, viewport_rows);
    }

    /// Begin a smooth scroll to the section with the given id.
    ///
    /// Best-effort: an unknown id, a missing anchor, or the id of the
    /// already-active section all leave the state untouched. A new
    /// navigation replaces any glide still in flight.
    pub fn navigate_to(&mut self, id: &str, layout: &PageLayout, viewport_rows: u16) {
        let Some(index) = SECTIONS.iter().position(|s| s.id == id) else {
            return;
        };
        if index == self.active_index {
            return;
        }
        let Some(top) = layout.section_top(index) else {
            return;
        };
        let target = (top as f32).clamp(0.0, layout.max_scroll(viewport_rows));
        self.glide_target = Some(target);
    }

    /// Begin a rail drag gesture. Starting a drag cancels an in-flight glide
    /// so the gesture takes over immediately.
    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.drag_fraction = self.progress;
        self.glide_target = None;
    }

    /// Scrub along the rail. `fraction` is the pointer position on the
    /// track; out-of-range values are clamped, never rejected. Maps to a
    /// discrete section and navigates when the target differs from the
    /// active one.
    pub fn drag_move(&mut self, fraction: f32, layout: &PageLayout, viewport_rows: u16) {
        if !self.dragging {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.drag_fraction = fraction;

        let count = layout.section_count();
        if count == 0 {
            return;
        }
        let target = (fraction * (count - 1) as f32).round() as usize;
        if target != self.active_index {
            if let Some(section) = SECTIONS.get(target) {
                self.navigate_to(section.id, layout, viewport_rows);
            }
        }
    }

    /// End the drag gesture. Must be called on any gesture termination,
    /// normal or not, or the rail stops following scroll updates.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Advance the glide animation one frame and resync derived state.
    pub fn tick(&mut self, layout: &PageLayout, viewport_rows: u16) {
        if let Some(target) = self.glide_target {
            let distance = target - self.offset;
            if distance.abs() <= GLIDE_SNAP {
                self.offset = target;
                self.glide_target = None;
            } else {
                let step = (distance * GLIDE_RATE)
                    .abs()
                    .max(GLIDE_MIN_STEP)
                    .min(distance.abs());
                self.offset += step.copysign(distance);
            }
            self.offset = self.offset.clamp(0.0, layout.max_scroll(viewport_rows));
        }
        self.sync(layout, viewport_rows);
    }

    /// Whether a smooth scroll is still in flight
    pub fn is_gliding(&self) -> bool {
        self.glide_target.is_some()
    }

    /// Row of the rail node for section `index` within a rail of `height`
    /// rows. Nodes are spread evenly along the track.
    pub fn node_row(index: usize, count: usize, height: u16) -> u16 {
        if count <= 1 || height <= 1 {
            return 0;
        }
        (index * (height as usize - 1) / (count - 1)) as u16
    }

    /// Inverse of `node_row`: pointer row within the rail to a [0, 1]
    /// track fraction.
    pub fn row_to_fraction(row: u16, height: u16) -> f32 {
        if height <= 1 {
            return 0.0;
        }
        row as f32 / (height - 1) as f32
    }
}

const NODE_LIT: char = '●';
const NODE_DIM: char = '○';
const TRACK_CHAR: char = '│';
const FILL_CHAR: char = '┃';
const SPARKLE_CHARS: [char; 4] = ['✦', '✧', '✶', '✷'];

/// The journey rail widget: track, progress fill, nodes, active label
pub struct JourneyPathWidget<'a> {
    state: &'a JourneyState,
    frame: u64,
}

impl<'a> JourneyPathWidget<'a> {
    pub fn new(state: &'a JourneyState, frame: u64) -> Self {
        Self { state, frame }
    }
}

impl Widget for JourneyPathWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < SECTIONS.len() as u16 {
            return;
        }

        let rail_x = area.x + area.width - 2;
        let height = area.height;

        // While dragging the fill follows the pointer; the logical progress
        // keeps updating underneath and takes back over on release.
        let fill_fraction = if self.state.dragging {
            self.state.drag_fraction
        } else {
            self.state.progress
        };
        let filled_rows = (fill_fraction * (height - 1) as f32).round() as u16;

        for row in 0..height {
            let (ch, color) = if row <= filled_rows && fill_fraction > 0.0 {
                (FILL_CHAR, colors::RAIL_FILL)
            } else {
                (TRACK_CHAR, colors::RAIL_TRACK)
            };
            let pos = (rail_x, area.y + row);
            buf[pos].set_char(ch);
            buf[pos].set_style(Style::default().fg(color));
        }

        for (i, section) in SECTIONS.iter().enumerate() {
            let row = JourneyState::node_row(i, SECTIONS.len(), height);
            let pos = (rail_x, area.y + row);

            let is_active = i == self.state.active_index;
            let reached = i <= self.state.active_index;

            let ch = if is_active {
                SPARKLE_CHARS[(self.frame / 6) as usize % SPARKLE_CHARS.len()]
            } else if reached {
                NODE_LIT
            } else {
                NODE_DIM
            };
            let style = if reached {
                Style::default()
                    .fg(colors::RAIL_NODE_LIT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::RAIL_NODE)
            };
            buf[pos].set_char(ch);
            buf[pos].set_style(style);

            if is_active {
                let label = section.label;
                let label_w = label.chars().count() as u16;
                if rail_x > area.x + label_w {
                    let lx = rail_x - 1 - label_w;
                    buf.set_string(
                        lx,
                        area.y + row,
                        label,
                        Style::default()
                            .fg(colors::CYAN)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tops: &[usize], total: usize) -> PageLayout {
        PageLayout::new(tops.iter().map(|&t| Some(t)).collect(), total)
    }

    fn five_sections() -> PageLayout {
        layout(&[0, 800, 1600, 2400, 3200], 4000)
    }

    #[test]
    fn active_section_follows_viewport_midpoint() {
        let page = layout(&[0, 800, 1600], 2400);
        let mut state = JourneyState::default();

        // offset 1100, viewport 600 -> midpoint 1400: past "about" (800),
        // short of "skills" (1600)
        state.offset = 1100.0;
        state.sync(&page, 600);
        assert_eq!(state.active_index, 1);

        state.offset = 0.0;
        state.sync(&page, 600);
        assert_eq!(state.active_index, 0);

        state.offset = 1800.0;
        state.sync(&page, 600);
        assert_eq!(state.active_index, 2);
    }

    #[test]
    fn active_defaults_to_zero_when_nothing_qualifies() {
        let page = layout(&[500, 900], 2000);
        let mut state = JourneyState::default();
        state.offset = 0.0;
        state.sync(&page, 100);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn overlapping_tops_resolve_to_the_later_section() {
        let page = layout(&[0, 300, 300], 2000);
        let mut state = JourneyState::default();
        state.offset = 400.0;
        state.sync(&page, 100);
        assert_eq!(state.active_index, 2);
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let page = PageLayout::new(vec![Some(0), None, Some(1600)], 2400);
        let mut state = JourneyState::default();
        // Midpoint of 1400 would land on section 1 if it had an anchor;
        // with it missing, section 0 stays active.
        state.offset = 1100.0;
        state.sync(&page, 600);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let page = five_sections();
        let mut state = JourneyState::default();
        let mut last = -1.0f32;
        for offset in (0..=3900).step_by(130) {
            state.offset = offset as f32;
            state.sync(&page, 100);
            assert!(state.progress >= last);
            assert!((0.0..=1.0).contains(&state.progress));
            last = state.progress;
        }
        state.offset = page.max_scroll(100);
        state.sync(&page, 100);
        assert_eq!(state.progress, 1.0);
    }

    #[test]
    fn progress_is_zero_when_document_fits_viewport() {
        let page = layout(&[0, 10], 20);
        let mut state = JourneyState::default();
        state.sync(&page, 50);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn navigate_to_unknown_id_is_a_noop() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 100);
        let before = state.clone();

        state.navigate_to("blog", &page, 100);
        state.tick(&page, 100);

        assert_eq!(state.offset, before.offset);
        assert_eq!(state.active_index, before.active_index);
        assert!(!state.is_gliding());
    }

    #[test]
    fn navigate_to_active_section_does_not_move() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.offset = 900.0;
        state.sync(&page, 600);
        assert_eq!(state.active_index, 1); // "about"

        state.navigate_to("about", &page, 600);
        for _ in 0..50 {
            state.tick(&page, 600);
        }
        assert_eq!(state.offset, 900.0);
    }

    #[test]
    fn navigate_glides_to_the_section_top() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.navigate_to("skills", &page, 600);
        assert!(state.is_gliding());
        for _ in 0..500 {
            state.tick(&page, 600);
            if !state.is_gliding() {
                break;
            }
        }
        assert!(!state.is_gliding());
        assert_eq!(state.offset, 1600.0);
        assert_eq!(state.active_index, 2);
    }

    #[test]
    fn new_navigation_supersedes_the_previous_glide() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.navigate_to("contact", &page, 600);
        state.tick(&page, 600);
        state.navigate_to("about", &page, 600);
        for _ in 0..500 {
            state.tick(&page, 600);
            if !state.is_gliding() {
                break;
            }
        }
        assert_eq!(state.offset, 800.0);
    }

    #[test]
    fn drag_start_cancels_an_inflight_glide() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.navigate_to("contact", &page, 600);
        state.tick(&page, 600);
        assert!(state.is_gliding());
        let mid_glide = state.offset;
        assert!(mid_glide > 0.0);

        state.drag_start();
        assert!(!state.is_gliding());
        // The interrupted glide leaves the offset where it was
        state.tick(&page, 600);
        assert_eq!(state.offset, mid_glide);
    }

    #[test]
    fn drag_fraction_maps_to_nearest_section() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.drag_start();
        state.drag_move(0.5, &page, 600);
        // round(0.5 * 4) = 2 -> glide toward "skills"
        for _ in 0..500 {
            state.tick(&page, 600);
            if !state.is_gliding() {
                break;
            }
        }
        assert_eq!(state.active_index, 2);

        state.drag_move(1.0, &page, 600);
        for _ in 0..500 {
            state.tick(&page, 600);
            if !state.is_gliding() {
                break;
            }
        }
        assert_eq!(state.active_index, 4);

        state.drag_move(0.0, &page, 600);
        for _ in 0..500 {
            state.tick(&page, 600);
            if !state.is_gliding() {
                break;
            }
        }
        assert_eq!(state.active_index, 0);
        state.drag_end();
    }

    #[test]
    fn drag_input_is_clamped() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.drag_start();
        state.drag_move(7.5, &page, 600);
        assert_eq!(state.drag_fraction, 1.0);
        state.drag_move(-3.0, &page, 600);
        assert_eq!(state.drag_fraction, 0.0);
    }

    #[test]
    fn aborted_drag_returns_to_idle_unchanged() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.offset = 1000.0;
        state.sync(&page, 600);
        let active_before = state.active_index;

        state.drag_start();
        assert!(state.dragging);
        state.drag_end();
        assert!(!state.dragging);
        assert_eq!(state.active_index, active_before);
        assert_eq!(state.offset, 1000.0);
    }

    #[test]
    fn drag_move_without_drag_start_is_ignored() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.drag_move(1.0, &page, 600);
        state.tick(&page, 600);
        assert_eq!(state.active_index, 0);
        assert!(!state.is_gliding());
    }

    #[test]
    fn scroll_by_cancels_glide_and_clamps() {
        let page = five_sections();
        let mut state = JourneyState::default();
        state.sync(&page, 600);

        state.navigate_to("contact", &page, 600);
        state.scroll_by(-50.0, &page, 600);
        assert!(!state.is_gliding());
        assert_eq!(state.offset, 0.0);

        state.scroll_by(1e9, &page, 600);
        assert_eq!(state.offset, page.max_scroll(600));
    }

    #[test]
    fn node_rows_span_the_rail() {
        assert_eq!(JourneyState::node_row(0, 5, 21), 0);
        assert_eq!(JourneyState::node_row(4, 5, 21), 20);
        assert_eq!(JourneyState::node_row(2, 5, 21), 10);
        // Degenerate rails do not panic
        assert_eq!(JourneyState::node_row(3, 5, 1), 0);
        assert_eq!(JourneyState::node_row(0, 1, 21), 0);
    }

    #[test]
    fn row_to_fraction_round_trips_endpoints() {
        assert_eq!(JourneyState::row_to_fraction(0, 21), 0.0);
        assert_eq!(JourneyState::row_to_fraction(20, 21), 1.0);
        assert_eq!(JourneyState::row_to_fraction(5, 1), 0.0);
    }
}
