use fltk::{app::Sender, group::Group, prelude::*};

use crate::app::domain::content::{Project, ProjectKind, projects_of};
use crate::app::domain::messages::Message;
use crate::app::domain::tabs::TabSet;
use crate::ui::theme::ACCENT;

use super::{Cursor, TabPanel, caption, card, heading, link_button, paragraph, section_group, title};

pub const HEIGHT: i32 = 820;
const FEATURED_H: i32 = 190;
const OTHER_H: i32 = 280;
const GAP: i32 = 16;

pub struct ProjectsView {
    pub group: Group,
    pub tabs: TabPanel,
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> ProjectsView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "Featured Projects");

    let tab_labels = [
        (ProjectKind::Featured.tab_id(), "Featured"),
        (ProjectKind::Other.tab_id(), "Other Projects"),
    ];
    let buttons = TabPanel::tab_row(&mut cursor, &tab_labels, sender, Message::SelectProjectTab);
    cursor.gap(24);
    let top = cursor.y;

    let panels = vec![featured_panel(x, top, w, sender), other_panel(x, top, w, sender)];
    group.end();

    let tabs = TabSet::new(&[ProjectKind::Featured.tab_id(), ProjectKind::Other.tab_id()])
        .expect("project tabs are never empty");
    ProjectsView {
        group,
        tabs: TabPanel::new(tabs, buttons, panels),
    }
}

/// One wide card per project, stacked
fn featured_panel(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Group {
    let count = projects_of(ProjectKind::Featured).count() as i32;
    let panel = Group::new(x, y, w, count * (FEATURED_H + GAP), None);

    for (i, project) in projects_of(ProjectKind::Featured).enumerate() {
        let top = y + i as i32 * (FEATURED_H + GAP);
        card(x, top, w, FEATURED_H);
        project_body(x + 20, top + 16, w - 40, FEATURED_H - 32, project, sender);
    }

    panel.end();
    panel
}

/// Narrow cards side by side
fn other_panel(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Group {
    let count = projects_of(ProjectKind::Other).count().max(1) as i32;
    let panel = Group::new(x, y, w, OTHER_H, None);
    let card_w = (w - GAP * (count - 1)) / count;

    for (i, project) in projects_of(ProjectKind::Other).enumerate() {
        let left = x + i as i32 * (card_w + GAP);
        card(left, y, card_w, OTHER_H);
        project_body(left + 16, y + 16, card_w - 32, OTHER_H - 32, project, sender);
    }

    panel.end();
    panel
}

fn project_body(x: i32, y: i32, w: i32, h: i32, project: &Project, sender: &Sender<Message>) {
    const LINKS_H: i32 = 32;
    const LINE_H: i32 = 26;

    title(x, y, w, LINE_H, project.title);

    // Fill upwards from the link row
    let mut bottom = y + h - LINKS_H;
    link_button(x, bottom, 120, LINKS_H, "Live Demo", project.demo_url, sender);
    link_button(x + 130, bottom, 130, LINKS_H, "Source Code", project.repo_url, sender);

    if let Some(metrics) = project.metrics {
        bottom -= LINE_H;
        caption(x, bottom, w, LINE_H - 4, metrics);
    }
    bottom -= LINE_H;
    let mut tech = caption(x, bottom, w, LINE_H - 4, &project.tech.join("  \u{00b7}  "));
    tech.set_label_color(ACCENT);

    let text_top = y + LINE_H + 6;
    let mut description = paragraph(x, text_top, w, bottom - text_top - 4, project.description);
    description.set_label_size(14);
}
