//! Syllabus export: a deterministic, paginated layout of a course document.
//!
//! The transform is pure: the same document always yields the same layout and
//! the source course is never mutated. Output is a page/line model carrying
//! millimeter positions on A4 paper; a PDF or print backend can consume it
//! as-is, and `to_plain_text` renders it for previews and tests.

use crate::domain::{Course, Module};
use crate::util::{fmt_num, wrap_text};

/// Vertical cursor position of the first line on every page (mm).
pub const PAGE_TOP: f64 = 20.0;
/// Horizontal origin of left-aligned text (mm); a rendering backend resolves
/// Center/Right against [`PAGE_WIDTH`] and [`RIGHT_MARGIN`].
pub const LEFT_MARGIN: f64 = 20.0;
/// A4 page width (mm).
pub const PAGE_WIDTH: f64 = 210.0;
/// Right margin for right-aligned fragments (mm).
pub const RIGHT_MARGIN: f64 = 20.0;
/// Mid-section break threshold: once the cursor passes this, continue on a
/// fresh page.
const BODY_BREAK_Y: f64 = 250.0;
/// Stricter threshold applied before opening a new major section.
const SECTION_BREAK_Y: f64 = 230.0;
const LINE_HEIGHT: f64 = 5.0;
/// Body text wrap width in characters (~170mm of 11pt Helvetica).
const WRAP_COLS: usize = 95;
/// Wrap width of the outcome column in the outcomes table.
const OUTCOME_COLS: usize = 55;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One positioned line of text. Table rows are emitted as a single line with
/// cells joined by " | ".
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub y: f64,
    pub text: String,
    pub style: FontStyle,
    pub align: Align,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<Line>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyllabusPdf {
    pub pages: Vec<Page>,
}

impl SyllabusPdf {
    /// Flatten the layout to plain text, one line per entry, pages separated
    /// by a form feed.
    pub fn to_plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| {
                p.lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }
}

/// Page-building cursor: tracks the vertical position and starts a new page
/// whenever a threshold is crossed.
struct LayoutCursor {
    pages: Vec<Page>,
    y: f64,
}

impl LayoutCursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: PAGE_TOP,
        }
    }

    fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.y = PAGE_TOP;
    }

    fn ensure_room(&mut self, threshold: f64) {
        if self.y > threshold {
            self.break_page();
        }
    }

    /// Emit a line at the current cursor without advancing; callers advance
    /// explicitly so multiple fragments can share one baseline.
    fn line(&mut self, text: impl Into<String>, style: FontStyle, align: Align) {
        let y = self.y;
        self.pages.last_mut().expect("at least one page").lines.push(Line {
            y,
            text: text.into(),
            style,
            align,
        });
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Wrap `text` and emit one line per row, advancing LINE_HEIGHT each.
    fn wrapped(&mut self, text: &str, style: FontStyle) {
        for row in wrap_text(text, WRAP_COLS) {
            self.line(row, style, Align::Left);
            self.advance(LINE_HEIGHT);
        }
    }

    fn finish(self) -> SyllabusPdf {
        SyllabusPdf { pages: self.pages }
    }
}

fn hours_row(values: [&str; 5]) -> String {
    values.join(" | ")
}

fn module_hours_breakdown(course: &Course, module: &Module) -> String {
    format!(
        "{}L+{}T+{}P+{}SL = {} hours",
        fmt_num(course.lecture_hours),
        fmt_num(course.tutorial_hours),
        fmt_num(course.practical_hours),
        fmt_num(course.self_learning_hours),
        fmt_num(module.duration),
    )
}

/// Render the course into its paginated syllabus layout.
pub fn render(course: &Course) -> SyllabusPdf {
    let mut cur = LayoutCursor::new();

    // Title, centered.
    cur.line(
        format!("{} {}", course.course_id, course.course_name),
        FontStyle::Bold,
        Align::Center,
    );
    cur.advance(15.0);

    // Hours-per-week mini table, right aligned.
    cur.line("Hours Per Week :", FontStyle::Normal, Align::Right);
    cur.advance(6.0);
    cur.line(hours_row(["L", "T", "P", "SL", "C"]), FontStyle::Bold, Align::Right);
    cur.advance(7.0);
    cur.line(
        hours_row([
            &fmt_num(course.lecture_hours),
            &fmt_num(course.tutorial_hours),
            &fmt_num(course.practical_hours),
            &fmt_num(course.self_learning_hours),
            &fmt_num(course.credits),
        ]),
        FontStyle::Normal,
        Align::Right,
    );
    cur.advance(15.0);

    // Prerequisite block, label and text on one baseline.
    cur.line(
        format!("PREREQUISITE KNOWLEDGE: {}", course.prerequisites),
        FontStyle::Bold,
        Align::Left,
    );
    cur.advance(10.0);

    // Description block.
    cur.line("COURSE DESCRIPTION & OBJECTIVES:", FontStyle::Bold, Align::Left);
    cur.advance(10.0);
    cur.wrapped(&course.course_description, FontStyle::Normal);
    cur.advance(15.0);

    // One section per module, in module order.
    for module in &course.modules {
        cur.ensure_room(BODY_BREAK_Y);

        // Centered module header plus right-aligned hour breakdown share the
        // same baseline.
        cur.line(format!("MODULE-{}", module.number), FontStyle::Bold, Align::Center);
        cur.line(
            module_hours_breakdown(course, module),
            FontStyle::Normal,
            Align::Right,
        );
        cur.advance(12.0);

        for (unit_index, unit) in module.units.iter().enumerate() {
            cur.ensure_room(BODY_BREAK_Y);
            cur.line(
                format!("UNIT-{}: {}", unit_index + 1, unit.name),
                FontStyle::Bold,
                Align::Left,
            );
            cur.advance(8.0);
            cur.wrapped(&unit.contents, FontStyle::Normal);
            cur.advance(10.0);
        }

        // Practices bullet list; blank entries are excluded and the section
        // is skipped entirely when nothing remains.
        let practices: Vec<&String> = module
            .practices
            .iter()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if !practices.is_empty() {
            cur.ensure_room(BODY_BREAK_Y);
            cur.line("PRACTICES:", FontStyle::Bold, Align::Left);
            cur.advance(8.0);
            for practice in practices {
                cur.wrapped(&format!("• {}", practice), FontStyle::Normal);
                cur.advance(4.0);
            }
            cur.advance(8.0);
        }
    }

    // Course outcomes table.
    cur.ensure_room(SECTION_BREAK_Y);
    cur.line("COURSE OUTCOMES:", FontStyle::Bold, Align::Left);
    cur.advance(8.0);
    cur.line(
        "Upon successful completion of this course, students will be able to:",
        FontStyle::Normal,
        Align::Left,
    );
    cur.advance(10.0);

    if !course.course_outcomes.is_empty() {
        cur.line(
            "CO No. | Course Outcomes | Bloom's Level | Mapping with POs",
            FontStyle::Bold,
            Align::Left,
        );
        cur.advance(12.0);
        for (index, outcome) in course.course_outcomes.iter().enumerate() {
            cur.ensure_room(BODY_BREAK_Y);
            let wrapped_rows = wrap_text(&outcome.outcome, OUTCOME_COLS).len();
            let row_height = (wrapped_rows as f64 * LINE_HEIGHT).max(8.0) + 4.0;
            cur.line(
                format!(
                    "{} | {} | {} | {}",
                    index + 1,
                    outcome.outcome,
                    outcome.bloom_level.as_str(),
                    outcome.mapping.as_deref().unwrap_or(""),
                ),
                FontStyle::Normal,
                Align::Left,
            );
            cur.advance(row_height);
        }
    }

    // Numbered book lists.
    cur.ensure_room(SECTION_BREAK_Y);
    cur.line("TEXT BOOK:", FontStyle::Bold, Align::Left);
    cur.advance(8.0);
    for (index, book) in course.textbooks.iter().enumerate() {
        cur.wrapped(&format!("{}. {}", index + 1, book), FontStyle::Normal);
        cur.advance(4.0);
    }
    cur.advance(4.0);

    cur.ensure_room(SECTION_BREAK_Y);
    cur.line("REFERENCE BOOKS:", FontStyle::Bold, Align::Left);
    cur.advance(8.0);
    for (index, book) in course.reference_books.iter().enumerate() {
        cur.wrapped(&format!("{}. {}", index + 1, book), FontStyle::Normal);
        cur.advance(4.0);
    }

    // Skills bullets only when at least one entry is non-blank.
    if course.skills.iter().any(|s| !s.trim().is_empty()) {
        cur.ensure_room(SECTION_BREAK_Y);
        cur.advance(4.0);
        cur.line("SKILLS:", FontStyle::Bold, Align::Left);
        cur.advance(8.0);
        for skill in course.skills.iter().filter(|s| !s.trim().is_empty()) {
            cur.wrapped(&format!("• {}", skill), FontStyle::Normal);
            cur.advance(4.0);
        }
    }

    cur.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BloomLevel, CourseOutcome, Unit};

    fn unit(name: &str) -> Unit {
        Unit {
            name: name.into(),
            selected_textbook: "CLRS".into(),
            page_from: 1,
            page_to: 40,
            contents: format!("Contents of {name}."),
        }
    }

    fn course() -> Course {
        Course {
            course_id: "CS201".into(),
            year: "2nd".into(),
            semester: "1st".into(),
            course_name: "Data Structures".into(),
            course_category: "Potential core".into(),
            course_type: "Skill based".into(),
            lecture_hours: 3.0,
            tutorial_hours: 1.0,
            practical_hours: 2.0,
            self_learning_hours: 0.0,
            course_description: "Core data structures and their use.".into(),
            prerequisites: "Programming fundamentals".into(),
            course_outcomes: vec![
                CourseOutcome {
                    outcome: "Apply lists and trees to real problems".into(),
                    bloom_level: BloomLevel::Apply,
                    mapping: Some("PO1".into()),
                },
                CourseOutcome {
                    outcome: "Analyze algorithmic complexity".into(),
                    bloom_level: BloomLevel::Analyze,
                    mapping: None,
                },
            ],
            textbooks: vec!["CLRS".into()],
            reference_books: vec!["Sedgewick".into()],
            skills: vec!["Debugging".into(), "  ".into()],
            credits: 4.5,
            modules: vec![
                Module {
                    number: 1,
                    duration: 12.0,
                    units: vec![unit("Arrays"), unit("Linked Lists")],
                    practices: vec![],
                },
                Module {
                    number: 2,
                    duration: 14.0,
                    units: vec![unit("Trees"), unit("Heaps"), unit("Graphs")],
                    practices: vec!["Implement a BST".into(), "".into()],
                },
            ],
        }
    }

    #[test]
    fn render_is_deterministic_and_does_not_mutate() {
        let c = course();
        let before = c.clone();
        let first = render(&c);
        let second = render(&c);
        assert_eq!(first, second);
        assert_eq!(c, before);
    }

    #[test]
    fn modules_and_units_appear_in_document_order() {
        let text = render(&course()).to_plain_text();
        let positions: Vec<usize> = [
            "MODULE-1",
            "UNIT-1: Arrays",
            "UNIT-2: Linked Lists",
            "MODULE-2",
            "UNIT-1: Trees",
            "UNIT-2: Heaps",
            "UNIT-3: Graphs",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "sections out of order");
    }

    #[test]
    fn blank_practices_are_excluded() {
        let text = render(&course()).to_plain_text();
        // Module 1 has no practices at all; only module 2's one real entry
        // shows up, so there is exactly one PRACTICES section.
        assert_eq!(text.matches("PRACTICES:").count(), 1);
        assert!(text.contains("• Implement a BST"));
        assert!(!text.contains("• \n"));
    }

    #[test]
    fn hours_table_reflects_course_load() {
        let text = render(&course()).to_plain_text();
        assert!(text.contains("L | T | P | SL | C"));
        assert!(text.contains("3 | 1 | 2 | 0 | 4.5"));
        assert!(text.contains("3L+1T+2P+0SL = 12 hours"));
    }

    #[test]
    fn outcomes_table_includes_bloom_and_mapping() {
        let text = render(&course()).to_plain_text();
        assert!(text.contains("1 | Apply lists and trees to real problems | apply | PO1"));
        assert!(text.contains("2 | Analyze algorithmic complexity | analyze | "));
    }

    #[test]
    fn skills_section_skips_blank_entries() {
        let text = render(&course()).to_plain_text();
        assert!(text.contains("SKILLS:"));
        assert!(text.contains("• Debugging"));

        let mut c = course();
        c.skills = vec!["".into(), "   ".into()];
        assert!(!render(&c).to_plain_text().contains("SKILLS:"));
    }

    #[test]
    fn long_documents_break_onto_new_pages() {
        let mut c = course();
        let module = c.modules[1].clone();
        for n in 3..12 {
            let mut m = module.clone();
            m.number = n;
            c.modules.push(m);
        }
        let pdf = render(&c);
        assert!(pdf.pages.len() > 1, "expected a page break");
        for page in &pdf.pages {
            assert!(!page.lines.is_empty());
            assert_eq!(page.lines[0].y, PAGE_TOP);
            for line in &page.lines {
                assert!(line.y <= BODY_BREAK_Y + 25.0, "line far past break threshold");
            }
        }
    }
}
