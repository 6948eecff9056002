use iced::Element;
use iced::widget::{column, text};

use crate::core::store::SiteStore;
use crate::gui::message::Message;
use crate::gui::state::AppState;

pub fn view<'a>(_state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let content = store.config().content;
    column![
        text(content.about_title).size(32),
        text(content.about_text),
        text(content.mission_title).size(24),
        text(content.mission_text),
    ]
    .spacing(16)
    .padding(24)
    .into()
}
