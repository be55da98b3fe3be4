use fltk::{app::Sender, enums::Align, group::Group, prelude::*};

use crate::app::domain::content::{ART_PIECES, GITHUB_REPOS, REDDIT_POSTS, SOCIAL_TABS, VIDEOS};
use crate::app::domain::messages::Message;
use crate::app::domain::tabs::TabSet;
use crate::ui::theme::ACCENT;

use super::{Cursor, TabPanel, caption, card, heading, link_button, paragraph, section_group, title};

pub const HEIGHT: i32 = 480;
const CARD_H: i32 = 190;
const GAP: i32 = 16;
const COLUMNS: i32 = 3;

pub struct SocialView {
    pub group: Group,
    pub tabs: TabPanel,
}

/// Text for one feed card
struct Entry {
    title: &'static str,
    body: String,
    meta: String,
    url: Option<&'static str>,
}

fn entries_for(tab: &str) -> Vec<Entry> {
    match tab {
        "github" => GITHUB_REPOS
            .iter()
            .map(|repo| Entry {
                title: repo.title,
                body: repo.description.to_string(),
                meta: format!("{}   \u{2605} {}   \u{2442} {}", repo.language, repo.stars, repo.forks),
                url: Some(repo.url),
            })
            .collect(),
        "deviantArt" => ART_PIECES
            .iter()
            .map(|art| Entry {
                title: art.title,
                body: "UI concept artwork".to_string(),
                meta: format!("\u{2665} {}", art.likes),
                url: None,
            })
            .collect(),
        "youtube" => VIDEOS
            .iter()
            .map(|video| Entry {
                title: video.title,
                body: format!("{} views", video.views),
                meta: video.published.to_string(),
                url: None,
            })
            .collect(),
        "reddit" => REDDIT_POSTS
            .iter()
            .map(|post| Entry {
                title: post.title,
                body: post.subreddit.to_string(),
                meta: format!("\u{25b2} {}   {} comments", post.upvotes, post.comments),
                url: None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> SocialView {
    let group = section_group(x, y, w, HEIGHT);
    let mut cursor = Cursor::new(x, y + 30, w);
    heading(&mut cursor, "Social Media Hub");

    let tab_labels: Vec<(&'static str, &'static str)> =
        SOCIAL_TABS.iter().map(|&(id, label, _)| (id, label)).collect();
    let buttons = TabPanel::tab_row(&mut cursor, &tab_labels, sender, Message::SelectSocialTab);
    cursor.gap(20);
    let top = cursor.y;
    let card_w = (w - GAP * (COLUMNS - 1)) / COLUMNS;

    let panels = SOCIAL_TABS
        .iter()
        .map(|&(id, _, blurb)| {
            let panel = Group::new(x, top, w, 40 + CARD_H, None);
            let mut intro = caption(x, top, w, 30, blurb);
            intro.set_align(Align::Center | Align::Inside);

            for (i, entry) in entries_for(id).iter().take(COLUMNS as usize).enumerate() {
                let left = x + i as i32 * (card_w + GAP);
                let card_top = top + 40;
                card(left, card_top, card_w, CARD_H);
                let mut name = title(left + 16, card_top + 14, card_w - 32, 48, entry.title);
                name.set_label_size(16);
                paragraph(left + 16, card_top + 66, card_w - 32, 44, &entry.body).set_label_size(14);
                let mut meta = caption(left + 16, card_top + 112, card_w - 32, 22, &entry.meta);
                meta.set_label_color(ACCENT);
                if let Some(url) = entry.url {
                    link_button(left + 16, card_top + CARD_H - 44, 120, 30, "View", url, sender);
                }
            }

            panel.end();
            panel
        })
        .collect();
    group.end();

    let ids: Vec<&'static str> = tab_labels.iter().map(|(id, _)| *id).collect();
    let tabs = TabSet::new(&ids).expect("social tabs are never empty");
    SocialView {
        group,
        tabs: TabPanel::new(tabs, buttons, panels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_entries() {
        for (id, _, _) in SOCIAL_TABS {
            assert!(!entries_for(id).is_empty(), "{id} has no entries");
        }
        assert!(entries_for("myspace").is_empty());
    }

    #[test]
    fn test_only_repositories_link_out() {
        assert!(entries_for("github").iter().all(|e| e.url.is_some()));
        assert!(entries_for("reddit").iter().all(|e| e.url.is_none()));
    }
}
