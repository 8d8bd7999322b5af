use crate::classify::LineStyle;
use crate::geometry::PageGeometry;
use crate::units::Pt;

/// One resolved instruction to draw a text fragment at an exact position
/// with a given style. Positions are top-down page coordinates; `y` is
/// always within `[margin, height - margin]` of the geometry the flow
/// was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub text: String,
    pub style: LineStyle,
    pub x: Pt,
    pub y: Pt,
}

/// An ordered run of placements on one page. The page index is the
/// position within the flow's output; pages are contiguous.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Page {
    pub placements: Vec<Placement>,
}

/// Vertical spacing applied while flowing lines down a page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spacing {
    /// Added to the font size when advancing past a placed fragment.
    pub leading: Pt,
    /// Cursor advance for a blank input line (no placement emitted).
    pub blank_line: Pt,
}

impl Default for Spacing {
    fn default() -> Spacing {
        Spacing {
            leading: Pt(2.0),
            blank_line: Pt(6.0),
        }
    }
}

/// Walks fragments in order, tracking a vertical cursor and opening new
/// pages when the cursor passes the bottom margin.
///
/// The page-break check runs *before* each fragment is placed, so a
/// fragment is never split across a page boundary; whole fragments are
/// pushed to the next page instead. The flow starts with one open page,
/// so even an empty input produces a single (empty) page.
pub struct PageFlow {
    geometry: PageGeometry,
    spacing: Spacing,
    cursor_y: Pt,
    pages: Vec<Page>,
}

impl PageFlow {
    /// Start a flow at the top margin of the first page. The geometry is
    /// expected to have been validated already.
    pub fn new(geometry: PageGeometry, spacing: Spacing) -> PageFlow {
        PageFlow {
            geometry,
            spacing,
            cursor_y: geometry.margin,
            pages: vec![Page::default()],
        }
    }

    /// The index of the page the cursor currently sits on.
    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    fn break_page_if_full(&mut self) {
        if self.cursor_y > self.geometry.max_y() {
            self.pages.push(Page::default());
            self.cursor_y = self.geometry.margin;
        }
    }

    /// Place one wrapped fragment at the left margin and advance the
    /// cursor by the fragment's font size plus leading.
    pub fn place(&mut self, text: String, style: LineStyle) {
        self.break_page_if_full();
        let placement = Placement {
            text,
            style,
            x: self.geometry.margin,
            y: self.cursor_y,
        };
        self.pages
            .last_mut()
            .expect("flow always has an open page")
            .placements
            .push(placement);
        self.cursor_y += style.size + self.spacing.leading;
    }

    /// Advance the cursor for a blank input line. Emits no placement,
    /// but still opens a new page first if the cursor is past the
    /// bottom margin.
    pub fn blank_line(&mut self) {
        self.break_page_if_full();
        self.cursor_y += self.spacing.blank_line;
    }

    /// Finish the flow and hand back the accumulated pages.
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::LETTER;

    fn letter_flow() -> PageFlow {
        let geometry = PageGeometry::new(LETTER, Pt(40.0));
        PageFlow::new(geometry, Spacing::default())
    }

    #[test]
    fn header_then_body_lands_at_40_and_54() {
        let mut flow = letter_flow();
        flow.place("SKILLS".into(), LineStyle::HEADER);
        flow.place("Python, Go, Rust".into(), LineStyle::BODY);

        let pages = flow.into_pages();
        assert_eq!(pages.len(), 1);
        let placements = &pages[0].placements;
        assert_eq!(placements.len(), 2);

        assert_eq!(placements[0].text, "SKILLS");
        assert_eq!(placements[0].style, LineStyle::HEADER);
        assert_eq!((placements[0].x, placements[0].y), (Pt(40.0), Pt(40.0)));

        assert_eq!(placements[1].text, "Python, Go, Rust");
        assert_eq!(placements[1].style, LineStyle::BODY);
        // 40 + (12 + 2) leading from the header line
        assert_eq!((placements[1].x, placements[1].y), (Pt(40.0), Pt(54.0)));
    }

    #[test]
    fn cursor_past_bottom_margin_opens_a_new_page() {
        let mut flow = letter_flow();
        // body lines advance 12pt each from y=40; the check is strictly
        // greater-than, so the page turns once the cursor passes 752
        for i in 0..100 {
            flow.place(format!("line {i}"), LineStyle::BODY);
        }
        let pages = flow.into_pages();
        assert_eq!(pages.len(), 2);

        // 60 placements fit: y = 40 + 59*12 = 748, cursor then 760 > 752
        assert_eq!(pages[0].placements.len(), 60);
        assert_eq!(pages[0].placements.last().unwrap().y, Pt(748.0));
        // the overflowing line restarts at the top margin of page 1
        assert_eq!(pages[1].placements[0].y, Pt(40.0));
        assert_eq!(pages[1].placements[0].text, "line 60");
    }

    #[test]
    fn blank_line_advances_six_points_without_placing() {
        let mut flow = letter_flow();
        flow.place("first paragraph".into(), LineStyle::BODY);
        flow.blank_line();
        flow.place("second paragraph".into(), LineStyle::BODY);

        let pages = flow.into_pages();
        let placements = &pages[0].placements;
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].y, Pt(40.0));
        // 40 + (10 + 2) + 6
        assert_eq!(placements[1].y, Pt(58.0));
    }

    #[test]
    fn blank_line_past_bottom_margin_still_turns_the_page() {
        let geometry = PageGeometry::new(LETTER, Pt(40.0));
        let mut flow = PageFlow::new(geometry, Spacing::default());
        flow.cursor_y = Pt(753.0);
        flow.blank_line();
        assert_eq!(flow.page_index(), 1);
        // the blank advance still applies on the fresh page
        assert_eq!(flow.cursor_y, Pt(46.0));
    }

    #[test]
    fn empty_flow_is_one_empty_page() {
        let pages = letter_flow().into_pages();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].placements.is_empty());
    }

    #[test]
    fn placements_never_leave_the_printable_band() {
        let geometry = PageGeometry::new(LETTER, Pt(40.0));
        let mut flow = PageFlow::new(geometry, Spacing::default());
        for i in 0..500 {
            if i % 7 == 0 {
                flow.blank_line();
            } else if i % 5 == 0 {
                flow.place(format!("HEADER {i}"), LineStyle::HEADER);
            } else {
                flow.place(format!("body {i}"), LineStyle::BODY);
            }
        }
        for page in flow.into_pages() {
            for placement in &page.placements {
                assert!(placement.y >= geometry.margin);
                assert!(placement.y <= geometry.max_y());
            }
        }
    }
}
