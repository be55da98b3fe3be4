use fltk::{
    app::Sender,
    enums::{Color, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
    text::{TextBuffer, TextDisplay},
};

use crate::app::domain::content::{DevTool, TOOL_CATEGORIES, tools_in};
use crate::app::domain::messages::Message;
use crate::app::domain::tabs::TabSet;
use crate::ui::theme::ACCENT;

use super::{Cursor, TabPanel, caption, card, heading, paragraph, section_group, title};

pub const HEIGHT: i32 = 860;
const TOOL_H: i32 = 300;
const GAP: i32 = 16;
const MAX_TOOLS_PER_TAB: i32 = 2;

pub struct DevToolsView {
    pub group: Group,
    pub tabs: TabPanel,
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> DevToolsView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "Dev Tools & Automations");

    let buttons = TabPanel::tab_row(&mut cursor, &TOOL_CATEGORIES, sender, Message::SelectToolCategory);
    cursor.gap(24);
    let top = cursor.y;

    let panels = TOOL_CATEGORIES
        .iter()
        .map(|&(category, _)| {
            let panel = Group::new(x, top, w, MAX_TOOLS_PER_TAB * (TOOL_H + GAP), None);
            for (i, tool) in tools_in(category).take(MAX_TOOLS_PER_TAB as usize).enumerate() {
                tool_card(x, top + i as i32 * (TOOL_H + GAP), w, tool);
            }
            panel.end();
            panel
        })
        .collect();
    group.end();

    let ids: Vec<&'static str> = TOOL_CATEGORIES.iter().map(|(id, _)| *id).collect();
    let tabs = TabSet::new(&ids).expect("tool categories are never empty");
    DevToolsView {
        group,
        tabs: TabPanel::new(tabs, buttons, panels),
    }
}

fn tool_card(x: i32, y: i32, w: i32, tool: &DevTool) {
    card(x, y, w, TOOL_H);
    let left_w = w * 11 / 20;
    let inner_x = x + 20;
    let inner_y = y + 16;

    title(inner_x, inner_y, left_w - 30, 26, tool.title);
    let mut description = paragraph(inner_x, inner_y + 32, left_w - 30, 84, tool.description);
    description.set_label_size(14);

    let features: Vec<String> = tool.features.iter().map(|f| format!("\u{2713}  {f}")).collect();
    caption(inner_x, inner_y + 124, left_w - 30, TOOL_H - 156, &features.join("\n"));

    let right_x = x + left_w;
    let right_w = w - left_w - 20;

    let mut metrics_box = Frame::new(right_x, inner_y, right_w, 76, None);
    metrics_box.set_frame(FrameType::RFlatBox);
    metrics_box.set_color(Color::Background);

    let mut improvement = Frame::new(right_x, inner_y + 6, right_w / 3, 64, None);
    improvement.set_label(&format!("{}\nImprovement", tool.metrics.improvement));
    improvement.set_label_font(Font::HelveticaBold);
    improvement.set_label_color(ACCENT);

    let mut before_after = Frame::new(right_x + right_w / 3, inner_y + 6, right_w * 2 / 3, 64, None);
    before_after.set_label(&format!(
        "Before: {}   \u{2192}   After: {}",
        tool.metrics.old_value, tool.metrics.new_value
    ));
    before_after.set_label_color(Color::Foreground);

    let mut buffer = TextBuffer::default();
    buffer.set_text(tool.code_snippet);
    let mut snippet = TextDisplay::new(right_x, inner_y + 88, right_w, TOOL_H - 120, None);
    snippet.set_buffer(buffer);
    snippet.set_frame(FrameType::FlatBox);
    snippet.set_color(Color::Background);
    snippet.set_text_color(Color::Foreground);
    snippet.set_text_font(Font::Courier);
    snippet.set_text_size(12);
}
