use std::path::PathBuf;
use std::sync::Arc;

use crate::core::store::SiteStore;
use crate::models::{BlogPost, SiteContent};
use crate::pages::Route;
use crate::services::donation::DonationFlow;

use super::message::AdminTab;

pub struct AppState {
    pub site_file: PathBuf,
    pub store: Option<Arc<SiteStore>>,
    pub load_error: Option<String>,
    /// Last mutation error, shown at the bottom of the window.
    pub status: Option<String>,
    pub route: Route,
    pub donate: DonateScreen,
    pub contact: ContactScreen,
    pub footer: FooterState,
    pub admin: AdminScreen,
}

impl AppState {
    pub fn new(site_file: PathBuf) -> Self {
        Self {
            site_file,
            store: None,
            load_error: None,
            status: None,
            route: Route::Home,
            donate: DonateScreen::default(),
            contact: ContactScreen::default(),
            footer: FooterState::default(),
            admin: AdminScreen::default(),
        }
    }
}

pub struct DonateScreen {
    pub preset: Option<f64>,
    pub custom_amount: String,
    pub use_custom: bool,
    pub donor_name: String,
    pub donor_email: String,
    pub flow: DonationFlow,
}

impl Default for DonateScreen {
    fn default() -> Self {
        Self {
            preset: Some(50.0),
            custom_amount: String::new(),
            use_custom: false,
            donor_name: String::new(),
            donor_email: String::new(),
            flow: DonationFlow::default(),
        }
    }
}

impl DonateScreen {
    /// Amount currently selected on the form, if it parses to a number.
    pub fn amount(&self) -> Option<f64> {
        if self.use_custom {
            self.custom_amount.trim().parse().ok()
        } else {
            self.preset
        }
    }
}

#[derive(Default)]
pub struct ContactScreen {
    pub name: String,
    pub email: String,
    pub body: String,
    pub submitted: bool,
}

#[derive(Default)]
pub struct FooterState {
    pub email: String,
    pub subscribed: bool,
}

pub struct AdminScreen {
    pub username: String,
    pub password: String,
    pub login_error: Option<String>,
    pub tab: AdminTab,
    pub editing: Option<PostForm>,
    pub funding: Vec<FundingForm>,
    pub settings: SettingsForm,
}

impl Default for AdminScreen {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            login_error: None,
            tab: AdminTab::Posts,
            editing: None,
            funding: Vec::new(),
            settings: SettingsForm::default(),
        }
    }
}

impl AdminScreen {
    /// Refresh the editable buffers from the store.
    pub fn sync_from(&mut self, store: &SiteStore) {
        self.funding = store
            .projects()
            .into_iter()
            .map(|project| FundingForm {
                id: project.id,
                title: project.title,
                raised: amount_text(project.raised),
                goal: amount_text(project.goal),
            })
            .collect();
        let config = store.config();
        self.settings = SettingsForm {
            org_name: config.branding.name,
            tagline: config.branding.tagline,
            logo_url: config.branding.logo_url,
            meta_title: config.seo.meta_title,
            meta_description: config.seo.meta_description,
            email: config.contact.email,
            phone: config.contact.phone,
            address: config.contact.address,
            content: config.content,
        };
    }
}

fn amount_text(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub date: String,
    pub image_url: String,
    pub excerpt: String,
    pub content: String,
}

impl PostForm {
    pub fn from_post(post: BlogPost) -> Self {
        Self {
            id: Some(post.id),
            title: post.title,
            author: post.author,
            date: post.date,
            image_url: post.image_url,
            excerpt: post.excerpt,
            content: post.content,
        }
    }

    /// Required-field check; the cover image is optional (a fallback image
    /// is substituted on save).
    pub fn is_valid(&self) -> bool {
        !(self.title.trim().is_empty()
            || self.author.trim().is_empty()
            || self.date.trim().is_empty()
            || self.excerpt.trim().is_empty()
            || self.content.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FundingForm {
    pub id: String,
    pub title: String,
    pub raised: String,
    pub goal: String,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub org_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub content: SiteContent,
}
