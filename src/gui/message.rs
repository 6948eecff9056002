use std::sync::Arc;

use crate::core::store::SiteStore;
use crate::models::ContentField;
use crate::pages::Route;
use crate::services::donation::DonationReceipt;

#[derive(Debug, Clone)]
pub enum Message {
    StoreLoaded(Result<Arc<SiteStore>, String>),
    Navigate(Route),
    /// Completion of any store mutation task.
    Saved(Result<(), String>),
    Donate(DonateMessage),
    Contact(ContactMessage),
    Footer(FooterMessage),
    Admin(AdminMessage),
}

#[derive(Debug, Clone)]
pub enum DonateMessage {
    PresetPicked(f64),
    CustomAmountChanged(String),
    NameChanged(String),
    EmailChanged(String),
    Submitted,
    Completed(Result<DonationReceipt, String>),
    DonateAgain,
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    BodyChanged(String),
    Submitted,
    SendAnother,
}

#[derive(Debug, Clone)]
pub enum FooterMessage {
    EmailChanged(String),
    Subscribed,
    BannerExpired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Posts,
    Projects,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Author,
    Date,
    ImageUrl,
    Excerpt,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsInput {
    OrgName,
    Tagline,
    LogoUrl,
    MetaTitle,
    MetaDescription,
    Email,
    Phone,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingField {
    Raised,
    Goal,
}

#[derive(Debug, Clone)]
pub enum AdminMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    LoginSubmitted,
    LogoutPressed,
    TabSelected(AdminTab),
    NewPostPressed,
    EditPostPressed(String),
    DeletePostPressed(String),
    PostFieldChanged(PostField, String),
    SavePostPressed,
    CancelEditPressed,
    FundingChanged {
        id: String,
        field: FundingField,
        value: String,
    },
    SettingChanged(SettingsInput, String),
    ContentChanged(ContentField, String),
    SaveSettingsPressed,
}
