use iced::Element;
use iced::widget::{button, column, progress_bar, row, text};

use crate::core::store::SiteStore;
use crate::gui::message::Message;
use crate::gui::state::AppState;
use crate::pages::{Route, percent_funded};
use crate::services::donation::format_usd;

pub fn view<'a>(_state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let content = store.config().content;
    let mut col = column![
        text(content.hero_title).size(36),
        text(content.hero_subtitle).size(18),
        button(text(content.hero_button_text)).on_press(Message::Navigate(Route::Donate)),
        text(content.mission_title).size(24),
        text(content.mission_text),
        text("Current Projects").size(24),
        text("Help us reach our goals for these communities.").size(14),
    ]
    .spacing(16)
    .padding(24);

    for project in store.projects() {
        let percent = percent_funded(&project);
        col = col.push(
            column![
                text(project.title).size(18),
                row![
                    text(format_usd(project.raised)),
                    text(format!("of {}", format_usd(project.goal))).size(14),
                ]
                .spacing(8),
                progress_bar(0.0..=100.0, percent as f32),
                text(format!("{percent}% funded")).size(13),
            ]
            .spacing(4),
        );
    }

    let mut latest = column![text("Latest News").size(24)].spacing(8);
    for post in store.posts().into_iter().take(2) {
        latest = latest.push(
            column![text(post.title).size(16), text(post.excerpt).size(14)].spacing(2),
        );
    }
    col.push(latest).into()
}
