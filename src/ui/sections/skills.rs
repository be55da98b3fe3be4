use fltk::{
    app::Sender,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    misc::Progress,
    prelude::*,
};

use crate::app::domain::content::{ADDITIONAL_SKILLS, SKILL_CATEGORIES, Skill};
use crate::app::domain::messages::Message;
use crate::app::domain::tabs::TabSet;
use crate::ui::theme::{ACCENT, ACCENT_SOFT};

use super::{Cursor, TabPanel, caption, card, heading, section_group, title};

pub const HEIGHT: i32 = 640;
const ROW_H: i32 = 44;
const NAME_W: i32 = 180;
const PERCENT_W: i32 = 60;
const ROWS: i32 = 5;

pub struct SkillsView {
    pub group: Group,
    pub tabs: TabPanel,
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> SkillsView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "Skills & Technologies");

    let tab_labels: Vec<(&'static str, &'static str)> =
        SKILL_CATEGORIES.iter().map(|c| (c.id, c.name)).collect();
    let buttons = TabPanel::tab_row(&mut cursor, &tab_labels, sender, Message::SelectSkillCategory);

    cursor.gap(24);
    let panel_top = cursor.take(ROW_H * ROWS + 32);
    card(x, panel_top, w, ROW_H * ROWS + 32);
    let panels = SKILL_CATEGORIES
        .iter()
        .map(|category| skill_panel(x + 24, panel_top + 16, w - 48, category.skills))
        .collect();

    cursor.gap(28);
    let top = cursor.take(30);
    title(x, top, w, 28, "Additional Skills");
    let top = cursor.take(72);
    let mut chips = caption(x, top, w, 64, &ADDITIONAL_SKILLS.join("    \u{00b7}    "));
    chips.set_align(Align::Center | Align::Inside | Align::Wrap);
    chips.set_label_size(15);

    group.end();

    let ids: Vec<&'static str> = tab_labels.iter().map(|(id, _)| *id).collect();
    let tabs = TabSet::new(&ids).expect("skill categories are never empty");
    SkillsView {
        group,
        tabs: TabPanel::new(tabs, buttons, panels),
    }
}

fn skill_panel(x: i32, y: i32, w: i32, skills: &[Skill]) -> Group {
    let panel = Group::new(x, y, w, ROW_H * skills.len() as i32, None);
    let bar_w = w - NAME_W - PERCENT_W - 24;

    for (row, skill) in skills.iter().enumerate() {
        let top = y + row as i32 * ROW_H;

        let mut name = Frame::new(x, top, NAME_W, ROW_H, None);
        name.set_label(skill.name);
        name.set_align(Align::Left | Align::Inside);
        name.set_label_color(Color::Foreground);
        if skill.is_highlighted() {
            name.set_label_font(Font::HelveticaBold);
        }

        let mut bar = Progress::new(x + NAME_W + 12, top + 14, bar_w, ROW_H - 28, None);
        bar.set_minimum(0.0);
        bar.set_maximum(100.0);
        bar.set_value(f64::from(skill.level));
        bar.set_frame(FrameType::RFlatBox);
        bar.set_color(Color::Background);
        bar.set_selection_color(if skill.is_highlighted() { ACCENT } else { ACCENT_SOFT });

        let mut percent = Frame::new(x + w - PERCENT_W, top, PERCENT_W, ROW_H, None);
        percent.set_label(&format!("{}%", skill.level));
        percent.set_align(Align::Right | Align::Inside);
        percent.set_label_color(Color::Inactive);
    }

    panel.end();
    panel
}
