use iced::Element;
use iced::widget::{column, progress_bar, row, text};

use crate::core::store::SiteStore;
use crate::gui::message::Message;
use crate::gui::state::AppState;
use crate::pages::percent_funded;
use crate::services::donation::format_usd;

pub fn view<'a>(_state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let mut col = column![
        text("Our Projects").size(32),
        text("Every project is a promise to a community.").size(14),
    ]
    .spacing(16)
    .padding(24);

    for project in store.projects() {
        let percent = percent_funded(&project);
        col = col.push(
            column![
                text(project.title).size(20),
                text(project.description).size(14),
                row![
                    text(format!("{} raised", format_usd(project.raised))).size(14),
                    text(format!("Goal: {}", format_usd(project.goal))).size(14),
                ]
                .spacing(12),
                progress_bar(0.0..=100.0, percent as f32),
                text(format!("{percent}% funded")).size(13),
            ]
            .spacing(4),
        );
    }
    col.into()
}
