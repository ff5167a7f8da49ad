//! Portfolio page content.
//!
//! Builds the whole single-page document as a list of styled lines for a
//! given width, recording where each section starts. The scroll tracker
//! works purely against the resulting `PageLayout`; rendering slices the
//! line list by the current offset.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::journey::{PageLayout, SECTIONS};
use crate::theme::{card_color, colors, styles};

pub const NAME: &str = "Aditya Raj";
pub const TAGLINE: &str = "Applied AI & Data Science";
pub const BADGE: &str = "First Year @ IIT Jodhpur";
pub const EMAIL: &str = "b25bs1020@iitj.ac.in";
pub const GITHUB: &str = "github.com/adityarajIITj";
pub const LOCATION: &str = "IIT Jodhpur, Rajasthan";

/// Frames the hero typing effect takes per character
const TYPE_SPEED: u64 = 3;
/// Frames the skill bars take to ramp to their full level
const BAR_RAMP_FRAMES: u64 = 60;
const BAR_WIDTH: usize = 20;

pub struct Trait {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRAITS: &[Trait] = &[
    Trait { title: "Ambitious", description: "Always pushing boundaries and setting higher goals" },
    Trait { title: "Curious Learner", description: "Constantly exploring new technologies and concepts" },
    Trait { title: "Goal-Oriented", description: "Focused on delivering impactful solutions" },
    Trait { title: "Innovative", description: "Thinking outside the box to solve complex problems" },
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 85, category: "Programming", description: "Data analysis, ML/AI, automation scripts" },
    Skill { name: "Linux", level: 80, category: "Systems", description: "Command line, shell scripting, open source advocacy" },
    Skill { name: "UI/UX Design", level: 75, category: "Design", description: "Creating intuitive and beautiful interfaces" },
    Skill { name: "Logic Building", level: 80, category: "Problem Solving", description: "Algorithm design and optimization" },
    Skill { name: "Data Science", level: 70, category: "Analytics", description: "Data analysis, visualization, insights" },
    Skill { name: "Git & GitHub", level: 75, category: "Open Source", description: "Version control, collaboration, contributing to FOSS" },
];

pub const EXPLORING: &[&str] = &[
    "TensorFlow", "Neural Networks", "NLP", "Computer Vision", "APIs",
    "SQL", "NumPy", "Pandas", "Bash", "Vim",
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Crystal-Based Auth System",
        description: "A secure authentication system built from scratch, implementing \
            crystal-clear security protocols and modern encryption techniques for robust \
            user verification.",
        tags: &["Python", "Security", "Authentication", "Encryption"],
        featured: true,
    },
    Project {
        title: "Indigenous LLM",
        description: "An ongoing project to develop a homegrown Large Language Model, \
            exploring transformer architectures and natural language processing from the \
            ground up.",
        tags: &["AI", "NLP", "Deep Learning", "Transformers"],
        featured: true,
    },
    Project {
        title: "More Coming Soon",
        description: "Constantly working on new ideas and experiments. Stay tuned for \
            more exciting projects in AI, data science, and software development!",
        tags: &["In Progress", "Innovation"],
        featured: false,
    },
];

/// The built document: one styled line per row plus section geometry
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

/// Build the page for the given content width. `frame` drives the hero
/// typing effect and the skill-bar ramp; it never changes line counts, so
/// the layout is stable across frames.
pub fn build_page(width: u16, frame: u64) -> Page {
    let width = width.max(20) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut tops: Vec<Option<usize>> = Vec::with_capacity(SECTIONS.len());

    tops.push(Some(lines.len()));
    push_hero(&mut lines, width, frame);

    tops.push(Some(lines.len()));
    push_about(&mut lines, width);

    tops.push(Some(lines.len()));
    push_skills(&mut lines, width, frame);

    tops.push(Some(lines.len()));
    push_projects(&mut lines, width);

    tops.push(Some(lines.len()));
    push_contact(&mut lines, width);

    let total = lines.len();
    Page {
        lines,
        layout: PageLayout::new(tops, total),
    }
}

fn blank(lines: &mut Vec<Line<'static>>, n: usize) {
    for _ in 0..n {
        lines.push(Line::default());
    }
}

fn push_paragraph(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in wrap(text, width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}

/// Section divider with the kicker label, mirroring the site's thin
/// gradient separators
fn push_divider(lines: &mut Vec<Line<'static>>, kicker: &str, width: usize) {
    let label = format!("── {} ", kicker);
    let rest = width.saturating_sub(label.chars().count());
    lines.push(Line::from(vec![
        Span::styled(label, styles::kicker()),
        Span::styled("─".repeat(rest), styles::border_dim()),
    ]));
    blank(lines, 1);
}

fn push_heading(lines: &mut Vec<Line<'static>>, plain: &str, gradient: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", plain), styles::heading()),
        Span::styled(
            gradient.to_string(),
            Style::default()
                .fg(colors::CYAN)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    blank(lines, 1);
}

fn push_hero(lines: &mut Vec<Line<'static>>, width: usize, frame: u64) {
    blank(lines, 2);
    lines.push(Line::from(vec![
        Span::styled("✦ ", styles::accent()),
        Span::styled(BADGE.to_string(), styles::text_dim()),
    ]));
    blank(lines, 1);
    lines.push(Line::from(vec![
        Span::styled(
            "Aditya ",
            Style::default()
                .fg(colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Raj",
            Style::default()
                .fg(colors::CYAN)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    // Typewriter reveal of the tagline; the line itself always exists
    let shown = ((frame / TYPE_SPEED) as usize).min(TAGLINE.chars().count());
    let typed: String = TAGLINE.chars().take(shown).collect();
    let caret = if shown < TAGLINE.chars().count() { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(typed, styles::accent()),
        Span::styled(caret.to_string(), styles::accent()),
    ]));
    blank(lines, 1);
    push_paragraph(
        lines,
        "Exploring artificial intelligence and building things that matter.",
        width,
        styles::text_dim(),
    );
    blank(lines, 1);
    lines.push(Line::from(Span::styled(
        "↓ scroll to explore",
        styles::text_hint(),
    )));
    blank(lines, 3);
}

fn push_about(lines: &mut Vec<Line<'static>>, width: usize) {
    push_divider(lines, "ABOUT ME", width);
    push_heading(lines, "Passionate About", "AI Innovation");
    push_paragraph(
        lines,
        "As a first-year student at IIT Jodhpur specializing in Applied AI and Data \
         Science, I'm on a mission to understand and harness the power of artificial \
         intelligence. My journey is driven by an insatiable curiosity and a deep \
         desire to create technology that makes a real difference.",
        width,
        styles::text(),
    );
    blank(lines, 1);

    for (i, t) in TRAITS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(card_color(i))),
            Span::styled(
                t.title.to_string(),
                Style::default()
                    .fg(colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        push_paragraph(lines, t.description, width.saturating_sub(2), styles::text_dim());
    }
    blank(lines, 1);

    lines.push(Line::from(Span::styled(
        "My Journey So Far",
        styles::heading(),
    )));
    push_paragraph(
        lines,
        "From writing my first lines of Python code to building authentication \
         systems and exploring Large Language Models, every step has been a learning \
         adventure. I believe in the power of persistent effort and continuous \
         improvement.",
        width,
        styles::text_dim(),
    );
    lines.push(Line::from(vec![
        Span::styled("[ IIT Jodhpur '29 ] ", styles::accent()),
        Span::styled("[ Applied AI & DS ] ", Style::default().fg(colors::VIOLET)),
        Span::styled("[ Problem Solver ]", styles::accent()),
    ]));
    blank(lines, 3);
}

fn push_skills(lines: &mut Vec<Line<'static>>, width: usize, frame: u64) {
    push_divider(lines, "SKILLS", width);
    push_heading(lines, "Technical", "Arsenal");
    push_paragraph(
        lines,
        "A growing toolkit of technologies and methodologies that I'm mastering to \
         build innovative solutions. Passionate about open source and the Linux \
         ecosystem.",
        width,
        styles::text(),
    );
    blank(lines, 1);

    // Bars ramp up over the first couple of seconds on screen
    let ramp = (frame.min(BAR_RAMP_FRAMES) as f32) / BAR_RAMP_FRAMES as f32;
    for (i, skill) in SKILLS.iter().enumerate() {
        let accent = card_color(i);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", skill.name),
                Style::default().fg(colors::FG_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(skill.category, styles::text_hint()),
        ]));

        let fill = (skill.level as f32 / 100.0 * ramp * BAR_WIDTH as f32).round() as usize;
        let fill = fill.min(BAR_WIDTH);
        lines.push(Line::from(vec![
            Span::styled("█".repeat(fill), Style::default().fg(accent)),
            Span::styled("░".repeat(BAR_WIDTH - fill), styles::border_dim()),
            Span::styled(format!(" {:>3}%  ", skill.level), Style::default().fg(accent)),
            Span::styled(skill.description.to_string(), styles::text_dim()),
        ]));
    }
    blank(lines, 1);

    lines.push(Line::from(Span::styled(
        "Open Source Advocate",
        styles::heading(),
    )));
    push_paragraph(
        lines,
        "Open source isn't just code, it's a movement that democratizes technology \
         and fosters innovation.",
        width,
        styles::text_dim(),
    );
    blank(lines, 1);

    lines.push(Line::from(Span::styled("Also exploring:", styles::text_dim())));
    push_paragraph(lines, &EXPLORING.join(" · "), width, styles::text_hint());
    blank(lines, 3);
}

fn push_projects(lines: &mut Vec<Line<'static>>, width: usize) {
    push_divider(lines, "PROJECTS", width);
    push_heading(lines, "What I'm", "Building");
    push_paragraph(
        lines,
        "A showcase of my ongoing explorations and completed works in AI, security, \
         and software development.",
        width,
        styles::text(),
    );
    blank(lines, 1);

    for (i, project) in PROJECTS.iter().enumerate() {
        let accent = card_color(i);
        let mut header = vec![
            Span::styled("▐ ", Style::default().fg(accent)),
            Span::styled(
                project.title.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ];
        if project.featured {
            header.push(Span::styled("  ★ Featured", styles::warning()));
        }
        lines.push(Line::from(header));
        push_paragraph(lines, project.description, width.saturating_sub(2), styles::text_dim());
        push_paragraph(
            lines,
            &project
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" "),
            width.saturating_sub(2),
            styles::text_hint(),
        );
        blank(lines, 1);
    }

    lines.push(Line::from(vec![
        Span::styled("Explore more on GitHub → ", styles::text_dim()),
        Span::styled(GITHUB.to_string(), styles::accent()),
    ]));
    blank(lines, 3);
}

fn push_contact(lines: &mut Vec<Line<'static>>, width: usize) {
    push_divider(lines, "CONTACT", width);
    push_heading(lines, "Let's", "Connect");
    push_paragraph(
        lines,
        "Have an exciting project or just want to chat about AI? I'm always open to \
         discussions and collaborations.",
        width,
        styles::text(),
    );
    blank(lines, 1);

    for (label, value) in [("Email", EMAIL), ("GitHub", GITHUB), ("Location", LOCATION)] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", label), styles::text_dim()),
            Span::styled(value.to_string(), styles::text()),
        ]));
    }
    blank(lines, 1);

    lines.push(Line::from(vec![
        Span::styled("Press ", styles::text_dim()),
        Span::styled("c", styles::accent()),
        Span::styled(" to send me a message right from here.", styles::text_dim()),
    ]));
    blank(lines, 2);
    lines.push(Line::from(Span::styled(
        format!("© {} · built with curiosity", NAME),
        styles::text_hint(),
    )));
    blank(lines, 2);
}

/// Greedy word wrap; words longer than the width get a row of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_an_anchor() {
        let page = build_page(80, 0);
        assert_eq!(page.layout.section_count(), SECTIONS.len());
        for i in 0..SECTIONS.len() {
            assert!(page.layout.section_top(i).is_some());
        }
    }

    #[test]
    fn section_tops_are_strictly_increasing() {
        for width in [30u16, 60, 100, 160] {
            let page = build_page(width, 0);
            let mut last = None;
            for i in 0..page.layout.section_count() {
                let top = page.layout.section_top(i).unwrap();
                if let Some(prev) = last {
                    assert!(top > prev, "width {}: section {} not below previous", width, i);
                }
                assert!(top < page.layout.total_rows());
                last = Some(top);
            }
        }
    }

    #[test]
    fn layout_matches_line_count() {
        let page = build_page(80, 0);
        assert_eq!(page.layout.total_rows(), page.lines.len());
    }

    #[test]
    fn frame_animation_never_changes_the_layout() {
        let base = build_page(80, 0);
        for frame in [1u64, 17, 59, 60, 1000] {
            let page = build_page(80, frame);
            assert_eq!(page.lines.len(), base.lines.len());
            for i in 0..SECTIONS.len() {
                assert_eq!(page.layout.section_top(i), base.layout.section_top(i));
            }
        }
    }

    #[test]
    fn wrap_respects_width() {
        for row in wrap("the quick brown fox jumps over the lazy dog", 10) {
            assert!(row.chars().count() <= 10);
        }
        assert_eq!(wrap("", 10), vec![String::new()]);
        // Oversized words still get emitted
        assert_eq!(wrap("antidisestablishmentarianism", 5).len(), 1);
    }
}
