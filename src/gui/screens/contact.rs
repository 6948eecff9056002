use iced::Element;
use iced::widget::{button, column, text, text_input};

use crate::core::store::SiteStore;
use crate::gui::message::{ContactMessage, Message};
use crate::gui::state::AppState;

pub fn view<'a>(state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let contact = store.config().contact;

    if state.contact.submitted {
        return column![
            text("Message Sent!").size(28),
            text("Thank you for reaching out. We will get back to you shortly."),
            button(text("Send another message"))
                .on_press(Message::Contact(ContactMessage::SendAnother)),
        ]
        .spacing(16)
        .padding(24)
        .into();
    }

    column![
        text("Get in Touch").size(32),
        text("Have questions about our projects or want to partner with us? We'd love to hear from you.")
            .size(14),
        text(format!("Email Us: {}", contact.email)),
        text(format!("Call Us: {}", contact.phone)),
        text(format!("Visit Us: {}", contact.address)),
        text("Send a Message").size(20),
        text_input("Your name", &state.contact.name)
            .on_input(|value| Message::Contact(ContactMessage::NameChanged(value))),
        text_input("Your email", &state.contact.email)
            .on_input(|value| Message::Contact(ContactMessage::EmailChanged(value))),
        text_input("How can we help?", &state.contact.body)
            .on_input(|value| Message::Contact(ContactMessage::BodyChanged(value)))
            .on_submit(Message::Contact(ContactMessage::Submitted)),
        button(text("Send Message")).on_press(Message::Contact(ContactMessage::Submitted)),
    ]
    .spacing(12)
    .padding(24)
    .into()
}
