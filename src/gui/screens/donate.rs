use iced::Element;
use iced::widget::{button, column, row, text, text_input};

use crate::core::store::SiteStore;
use crate::gui::message::{DonateMessage, Message};
use crate::gui::state::AppState;
use crate::services::donation::{DonationStatus, PRESET_AMOUNTS, format_usd};

pub fn view<'a>(state: &'a AppState, _store: &'a SiteStore) -> Element<'a, Message> {
    let screen = &state.donate;

    if screen.flow.status() == DonationStatus::Success {
        let amount = screen.flow.receipt().map(|r| r.amount).unwrap_or_default();
        return column![
            text("Thank You!").size(32),
            text(format!(
                "Your donation of {} will help us continue our vital work in Malawi.",
                format_usd(amount)
            )),
            button(text("Donate Again")).on_press(Message::Donate(DonateMessage::DonateAgain)),
        ]
        .spacing(16)
        .padding(24)
        .into();
    }

    let processing = screen.flow.status() == DonationStatus::Processing;

    let mut presets = row![].spacing(8);
    for amount in PRESET_AMOUNTS {
        presets = presets.push(
            button(text(format!("${amount:.0}")))
                .on_press(Message::Donate(DonateMessage::PresetPicked(amount))),
        );
    }

    let submit_label = if processing {
        "Processing...".to_string()
    } else {
        match screen.amount() {
            Some(amount) if amount > 0.0 => format!("Donate {}", format_usd(amount)),
            _ => "Donate".to_string(),
        }
    };
    let mut submit = button(text(submit_label));
    if !processing {
        submit = submit.on_press(Message::Donate(DonateMessage::Submitted));
    }

    column![
        text("Support Our Mission").size(32),
        text("Your contribution directly helps families in rural Malawi."),
        text("We are currently struggling to extend our vision due to lack of funds. Every dollar counts.")
            .size(14),
        text("Choose Amount").size(16),
        presets,
        text_input("Other amount", &screen.custom_amount)
            .on_input(|value| Message::Donate(DonateMessage::CustomAmountChanged(value))),
        text_input("Full Name", &screen.donor_name)
            .on_input(|value| Message::Donate(DonateMessage::NameChanged(value))),
        text_input("Email Address", &screen.donor_email)
            .on_input(|value| Message::Donate(DonateMessage::EmailChanged(value))),
        text("Card Details: •••• •••• •••• 4242").size(14),
        submit,
    ]
    .spacing(12)
    .padding(24)
    .into()
}
