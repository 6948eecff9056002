use iced::Element;
use iced::widget::{button, column, row, text};

use crate::core::store::SiteStore;
use crate::gui::message::{AdminMessage, Message};
use crate::gui::state::AppState;

pub fn view<'a>(_state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let admin = store.is_admin();
    let mut col = column![
        text("Our Stories").size(32),
        text("News and updates from the field.").size(14),
    ]
    .spacing(16)
    .padding(24);

    for post in store.posts() {
        let mut card = column![
            text(post.title).size(20),
            text(format!("{} · {}", post.date, post.author)).size(13),
            text(post.excerpt).size(14),
            text(post.content).size(14),
        ]
        .spacing(4);
        if admin {
            // edit affordances only exist while the admin flag is set
            card = card.push(
                row![
                    button(text("Edit"))
                        .on_press(Message::Admin(AdminMessage::EditPostPressed(post.id.clone()))),
                    button(text("Delete"))
                        .on_press(Message::Admin(AdminMessage::DeletePostPressed(post.id))),
                ]
                .spacing(8),
            );
        }
        col = col.push(card);
    }
    col.into()
}
