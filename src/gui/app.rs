use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

use crate::core::store::SiteStore;
use crate::pages::{NAV_ITEMS, Route};
use crate::services::donation::{DonationRequest, MockGateway};

use super::message::{ContactMessage, DonateMessage, FooterMessage, Message};
use super::screens;
use super::state::{AppState, ContactScreen};

/// How long the "subscribed" banner stays up before clearing itself.
const BANNER_DURATION: Duration = Duration::from_secs(3);

pub fn run(site_file: PathBuf) -> iced::Result {
    iced::application(title, update, view)
        .theme(theme)
        .run_with(move || {
            let state = AppState::new(site_file.clone());
            let path = site_file.clone();
            (
                state,
                Task::perform(
                    async move {
                        SiteStore::open(&path)
                            .await
                            .map(Arc::new)
                            .map_err(|e| format!("{e:#}"))
                    },
                    Message::StoreLoaded,
                ),
            )
        })
}

fn title(state: &AppState) -> String {
    match state.store.as_deref() {
        Some(store) => {
            let branding = store.config().branding;
            format!("{} · {}", branding.name, branding.tagline)
        }
        None => "Safe Water Organisation".to_string(),
    }
}

fn theme(_state: &AppState) -> Theme {
    Theme::Light
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::StoreLoaded(Ok(store)) => {
            state.admin.sync_from(&store);
            state.store = Some(store);
            Task::none()
        }
        Message::StoreLoaded(Err(error)) => {
            state.load_error = Some(error);
            Task::none()
        }
        Message::Navigate(route) => {
            state.route = route;
            Task::none()
        }
        Message::Saved(Ok(())) => {
            state.status = None;
            Task::none()
        }
        Message::Saved(Err(error)) => {
            state.status = Some(error);
            Task::none()
        }
        Message::Donate(message) => update_donate(state, message),
        Message::Contact(message) => update_contact(state, message),
        Message::Footer(message) => update_footer(state, message),
        Message::Admin(message) => screens::admin::update(state, message),
    }
}

fn update_donate(state: &mut AppState, message: DonateMessage) -> Task<Message> {
    match message {
        DonateMessage::PresetPicked(amount) => {
            state.donate.preset = Some(amount);
            state.donate.use_custom = false;
            Task::none()
        }
        DonateMessage::CustomAmountChanged(value) => {
            state.donate.custom_amount = value;
            state.donate.use_custom = true;
            Task::none()
        }
        DonateMessage::NameChanged(value) => {
            state.donate.donor_name = value;
            Task::none()
        }
        DonateMessage::EmailChanged(value) => {
            state.donate.donor_email = value;
            Task::none()
        }
        DonateMessage::Submitted => {
            let Some(amount) = state.donate.amount() else {
                return Task::none();
            };
            if state.donate.donor_name.trim().is_empty()
                || state.donate.donor_email.trim().is_empty()
            {
                state.status = Some("Full name and email address are required".to_string());
                return Task::none();
            }
            if !state.donate.flow.begin(amount) {
                return Task::none();
            }
            state.status = None;
            let request = DonationRequest {
                amount,
                donor_name: state.donate.donor_name.clone(),
                donor_email: state.donate.donor_email.clone(),
            };
            let gateway = MockGateway::new();
            Task::perform(
                async move {
                    gateway
                        .process(&request)
                        .await
                        .map_err(|e| format!("{e:#}"))
                },
                |result| Message::Donate(DonateMessage::Completed(result)),
            )
        }
        DonateMessage::Completed(Ok(receipt)) => {
            state.donate.flow.complete(receipt);
            Task::none()
        }
        DonateMessage::Completed(Err(error)) => {
            state.donate.flow.reset();
            state.status = Some(error);
            Task::none()
        }
        DonateMessage::DonateAgain => {
            state.donate.flow.reset();
            Task::none()
        }
    }
}

fn update_contact(state: &mut AppState, message: ContactMessage) -> Task<Message> {
    match message {
        ContactMessage::NameChanged(value) => state.contact.name = value,
        ContactMessage::EmailChanged(value) => state.contact.email = value,
        ContactMessage::BodyChanged(value) => state.contact.body = value,
        ContactMessage::Submitted => {
            if !(state.contact.name.trim().is_empty()
                || state.contact.email.trim().is_empty()
                || state.contact.body.trim().is_empty())
            {
                state.contact.submitted = true;
            }
        }
        ContactMessage::SendAnother => state.contact = ContactScreen::default(),
    }
    Task::none()
}

fn update_footer(state: &mut AppState, message: FooterMessage) -> Task<Message> {
    match message {
        FooterMessage::EmailChanged(value) => {
            state.footer.email = value;
            Task::none()
        }
        FooterMessage::Subscribed => {
            if state.footer.email.trim().is_empty() {
                return Task::none();
            }
            state.footer.subscribed = true;
            state.footer.email.clear();
            Task::perform(tokio::time::sleep(BANNER_DURATION), |_| {
                Message::Footer(FooterMessage::BannerExpired)
            })
        }
        FooterMessage::BannerExpired => {
            state.footer.subscribed = false;
            Task::none()
        }
    }
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    if let Some(error) = &state.load_error {
        return container(
            column![
                text("Failed to open the site file").size(24),
                text(format!("Site file: {}", state.site_file.display())).size(14),
                text(error.as_str()),
            ]
            .spacing(8),
        )
        .padding(32)
        .into();
    }
    let Some(store) = state.store.as_deref() else {
        return container(text("Loading site...").size(24)).padding(32).into();
    };

    let page = match state.route {
        Route::Home => screens::home::view(state, store),
        Route::About => screens::about::view(state, store),
        Route::Projects => screens::projects::view(state, store),
        Route::Blog => screens::blog::view(state, store),
        Route::Donate => screens::donate::view(state, store),
        Route::Contact => screens::contact::view(state, store),
        Route::Admin => screens::admin::view(state, store),
    };

    let mut layout = column![
        navbar(store),
        scrollable(column![page, footer(state, store)].spacing(24)).height(Length::Fill),
    ]
    .spacing(8);
    if let Some(status) = &state.status {
        layout = layout.push(text(status.as_str()).size(14));
    }
    layout.into()
}

fn navbar(store: &SiteStore) -> Element<'_, Message> {
    let branding = store.config().branding;
    let mut items = row![text(branding.name).size(20)].spacing(12).padding(12);
    for route in NAV_ITEMS {
        items = items.push(button(text(route.label())).on_press(Message::Navigate(route)));
    }
    items = items.push(button(text("Donate")).on_press(Message::Navigate(Route::Donate)));
    items = items.push(button(text("Admin")).on_press(Message::Navigate(Route::Admin)));
    items.into()
}

fn footer<'a>(state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    let config = store.config();
    let mut col = column![
        horizontal_rule(1),
        text(config.branding.name).size(18),
        text(config.branding.tagline).size(14),
        text(config.content.newsletter_title).size(16),
        text(config.content.newsletter_text).size(14),
    ]
    .spacing(8)
    .padding(16);
    if state.footer.subscribed {
        col = col.push(text("Subscribed! Thank you for joining our newsletter."));
    } else {
        col = col.push(
            row![
                text_input("Your email address", &state.footer.email)
                    .on_input(|value| Message::Footer(FooterMessage::EmailChanged(value)))
                    .on_submit(Message::Footer(FooterMessage::Subscribed))
                    .width(Length::Fixed(260.0)),
                button(text("Subscribe")).on_press(Message::Footer(FooterMessage::Subscribed)),
            ]
            .spacing(8),
        );
    }
    col = col.push(
        text(format!(
            "{} · {} · {}",
            config.contact.email, config.contact.phone, config.contact.address
        ))
        .size(13),
    );
    col = col.push(text(config.content.footer_text).size(13));
    col.into()
}
