use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description;

/// Fallback cover image used when a post is saved without one.
pub const DEFAULT_POST_IMAGE: &str =
    "https://images.unsplash.com/photo-1531983412531-1f49a365ffed?auto=format&fit=crop&q=80&w=800";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub primary_color: String,
    pub secondary_color: String,
    pub surface_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    pub name: String,
    pub logo_url: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
    pub whatsapp: String,
}

/// The fixed set of editable display strings. Every page string an admin can
/// change lives here; there is no dynamic key lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_button_text: String,
    pub hero_image: String,
    pub about_title: String,
    pub about_text: String,
    pub about_image: String,
    pub mission_title: String,
    pub mission_text: String,
    pub footer_text: String,
    pub newsletter_title: String,
    pub newsletter_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    HeroTitle,
    HeroSubtitle,
    HeroButtonText,
    HeroImage,
    AboutTitle,
    AboutText,
    AboutImage,
    MissionTitle,
    MissionText,
    FooterText,
    NewsletterTitle,
    NewsletterText,
}

impl ContentField {
    pub const ALL: [ContentField; 12] = [
        ContentField::HeroTitle,
        ContentField::HeroSubtitle,
        ContentField::HeroButtonText,
        ContentField::HeroImage,
        ContentField::AboutTitle,
        ContentField::AboutText,
        ContentField::AboutImage,
        ContentField::MissionTitle,
        ContentField::MissionText,
        ContentField::FooterText,
        ContentField::NewsletterTitle,
        ContentField::NewsletterText,
    ];

    /// Key of this field in the serialized configuration entry.
    pub fn as_key(self) -> &'static str {
        match self {
            ContentField::HeroTitle => "heroTitle",
            ContentField::HeroSubtitle => "heroSubtitle",
            ContentField::HeroButtonText => "heroButtonText",
            ContentField::HeroImage => "heroImage",
            ContentField::AboutTitle => "aboutTitle",
            ContentField::AboutText => "aboutText",
            ContentField::AboutImage => "aboutImage",
            ContentField::MissionTitle => "missionTitle",
            ContentField::MissionText => "missionText",
            ContentField::FooterText => "footerText",
            ContentField::NewsletterTitle => "newsletterTitle",
            ContentField::NewsletterText => "newsletterText",
        }
    }
}

impl SiteContent {
    pub fn get(&self, field: ContentField) -> &str {
        match field {
            ContentField::HeroTitle => &self.hero_title,
            ContentField::HeroSubtitle => &self.hero_subtitle,
            ContentField::HeroButtonText => &self.hero_button_text,
            ContentField::HeroImage => &self.hero_image,
            ContentField::AboutTitle => &self.about_title,
            ContentField::AboutText => &self.about_text,
            ContentField::AboutImage => &self.about_image,
            ContentField::MissionTitle => &self.mission_title,
            ContentField::MissionText => &self.mission_text,
            ContentField::FooterText => &self.footer_text,
            ContentField::NewsletterTitle => &self.newsletter_title,
            ContentField::NewsletterText => &self.newsletter_text,
        }
    }

    pub fn set(&mut self, field: ContentField, value: String) {
        match field {
            ContentField::HeroTitle => self.hero_title = value,
            ContentField::HeroSubtitle => self.hero_subtitle = value,
            ContentField::HeroButtonText => self.hero_button_text = value,
            ContentField::HeroImage => self.hero_image = value,
            ContentField::AboutTitle => self.about_title = value,
            ContentField::AboutText => self.about_text = value,
            ContentField::AboutImage => self.about_image = value,
            ContentField::MissionTitle => self.mission_title = value,
            ContentField::MissionText => self.mission_text = value,
            ContentField::FooterText => self.footer_text = value,
            ContentField::NewsletterTitle => self.newsletter_title = value,
            ContentField::NewsletterText => self.newsletter_text = value,
        }
    }
}

/// One record per site. Sections are replaced field-by-field through
/// [`ConfigUpdate`], never left partially invalid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub theme: ThemeColors,
    pub branding: Branding,
    pub seo: Seo,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub content: SiteContent,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// ISO date string, e.g. `2023-10-15`.
    pub date: String,
    pub image_url: String,
    pub author: String,
}

/// Input record for adding a post; the store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub image_url: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Fundraising target in dollars. `raised` may exceed it; only the
    /// displayed percentage is clamped.
    pub goal: f64,
    pub raised: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeUpdate {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub surface_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BrandingUpdate {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SeoUpdate {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialUpdate {
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContentUpdate {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_button_text: Option<String>,
    pub hero_image: Option<String>,
    pub about_title: Option<String>,
    pub about_text: Option<String>,
    pub about_image: Option<String>,
    pub mission_title: Option<String>,
    pub mission_text: Option<String>,
    pub footer_text: Option<String>,
    pub newsletter_title: Option<String>,
    pub newsletter_text: Option<String>,
}

/// Partial update of exactly one configuration section. Fields left as
/// `None` keep their stored value; sections other than the one named are
/// never touched.
#[derive(Debug, Clone)]
pub enum ConfigUpdate {
    Theme(ThemeUpdate),
    Branding(BrandingUpdate),
    Seo(SeoUpdate),
    Contact(ContactUpdate),
    Social(SocialUpdate),
    Content(ContentUpdate),
}

fn merge(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl ConfigUpdate {
    pub fn apply_to(self, config: &mut SiteConfig) {
        match self {
            ConfigUpdate::Theme(update) => {
                merge(&mut config.theme.primary_color, update.primary_color);
                merge(&mut config.theme.secondary_color, update.secondary_color);
                merge(&mut config.theme.surface_color, update.surface_color);
                merge(&mut config.theme.text_color, update.text_color);
            }
            ConfigUpdate::Branding(update) => {
                merge(&mut config.branding.name, update.name);
                merge(&mut config.branding.logo_url, update.logo_url);
                merge(&mut config.branding.tagline, update.tagline);
            }
            ConfigUpdate::Seo(update) => {
                merge(&mut config.seo.meta_title, update.meta_title);
                merge(&mut config.seo.meta_description, update.meta_description);
            }
            ConfigUpdate::Contact(update) => {
                merge(&mut config.contact.email, update.email);
                merge(&mut config.contact.phone, update.phone);
                merge(&mut config.contact.address, update.address);
            }
            ConfigUpdate::Social(update) => {
                merge(&mut config.social.facebook, update.facebook);
                merge(&mut config.social.twitter, update.twitter);
                merge(&mut config.social.instagram, update.instagram);
                merge(&mut config.social.youtube, update.youtube);
                merge(&mut config.social.whatsapp, update.whatsapp);
            }
            ConfigUpdate::Content(update) => {
                merge(&mut config.content.hero_title, update.hero_title);
                merge(&mut config.content.hero_subtitle, update.hero_subtitle);
                merge(&mut config.content.hero_button_text, update.hero_button_text);
                merge(&mut config.content.hero_image, update.hero_image);
                merge(&mut config.content.about_title, update.about_title);
                merge(&mut config.content.about_text, update.about_text);
                merge(&mut config.content.about_image, update.about_image);
                merge(&mut config.content.mission_title, update.mission_title);
                merge(&mut config.content.mission_text, update.mission_text);
                merge(&mut config.content.footer_text, update.footer_text);
                merge(&mut config.content.newsletter_title, update.newsletter_title);
                merge(&mut config.content.newsletter_text, update.newsletter_text);
            }
        }
    }
}

/// Today's date as an ISO `YYYY-MM-DD` string, used to prefill new posts.
pub fn today_iso() -> anyhow::Result<String> {
    let format = format_description::parse("[year]-[month]-[day]")?;
    Ok(OffsetDateTime::now_utc().date().format(&format)?)
}

/// Built-in configuration used until an admin edits the site.
pub fn seed_config() -> SiteConfig {
    SiteConfig {
        theme: ThemeColors {
            primary_color: "#0ea5e9".to_string(),
            secondary_color: "#0f172a".to_string(),
            surface_color: "#ffffff".to_string(),
            text_color: "#334155".to_string(),
        },
        branding: Branding {
            name: "Safe Water Organisation".to_string(),
            logo_url: String::new(),
            tagline: "Providing Good Health To The Community".to_string(),
        },
        seo: Seo {
            meta_title: "Safe Water Organisation | Malawi".to_string(),
            meta_description: "Helping communities access clean water and health support. \
                 Founded by Patrick Chimphamba in 2004."
                .to_string(),
        },
        contact: ContactInfo {
            email: "Safewaterorg@gmail.com".to_string(),
            phone: "0999 29 54 85 / 0999 17 89 16".to_string(),
            address: "Malawi".to_string(),
        },
        social: SocialLinks {
            facebook: "https://facebook.com".to_string(),
            twitter: "https://twitter.com".to_string(),
            instagram: "https://instagram.com".to_string(),
            youtube: "https://youtube.com".to_string(),
            whatsapp: "https://wa.me/265999295485".to_string(),
        },
        content: SiteContent {
            hero_title: "Clean Water & Good Health for All".to_string(),
            hero_subtitle: "Founded in 2004 to alleviate suffering in rural communities through \
                 safe water access, HIV/AIDS support, and healthcare."
                .to_string(),
            hero_button_text: "Support Our Cause".to_string(),
            hero_image: "https://images.unsplash.com/photo-1541913299752-59f5b69f6609?auto=format&fit=crop&q=80&w=1600"
                .to_string(),
            about_title: "About Our Mission".to_string(),
            about_text: "Safe Water Organisation was founded by Larry Siegel in 2004 and handed \
                 over to Patrick Chimphamba in 2022. Rooted in humanitarian principles, we strive \
                 to alleviate suffering in rural communities through safe water access and health \
                 support."
                .to_string(),
            about_image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            mission_title: "Our Core Aims".to_string(),
            mission_text: "We aim to provide safe water in rural areas, offer relief aid to \
                 people living with HIV/AIDS, provide healthcare and counseling, and fight \
                 poverty by empowering the community."
                .to_string(),
            footer_text: "© 2024 Safe Water Organisation. Founded 2004. Based in Malawi."
                .to_string(),
            newsletter_title: "Stay Connected".to_string(),
            newsletter_text: "Subscribe to receive updates on our projects, plans, and impact \
                 stories."
                .to_string(),
        },
    }
}

pub fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Bringing Clean Water to Rural Villages".to_string(),
            excerpt: "Our latest initiative in rural Malawi has successfully provided clean \
                 water access to over 500 families."
                .to_string(),
            content: "Water is the essence of life. Yet, for millions around the world, access \
                 to clean, safe drinking water is a daily struggle. Last month, our team embarked \
                 on a journey to remote districts where groundwater is scarce. By installing \
                 solar-powered pumps, we have ensured a sustainable supply for the next decade. \
                 The smiles on the children's faces when they saw clean water flowing for the \
                 first time were priceless."
                .to_string(),
            date: "2023-10-15".to_string(),
            image_url: "https://images.unsplash.com/photo-1584824486509-112e4181ff6b?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            author: "Patrick Chimphamba".to_string(),
        },
        BlogPost {
            id: "2".to_string(),
            title: "The Impact of Sanitation Education".to_string(),
            excerpt: "Why building wells is only half the battle. Education on hygiene is key \
                 to long-term health."
                .to_string(),
            content: "While infrastructure is critical, knowledge is power. We held workshops \
                 in 12 communities this month, teaching proper handwashing techniques and water \
                 storage safety. This holistic approach reduces waterborne diseases significantly."
                .to_string(),
            date: "2023-11-02".to_string(),
            image_url: "https://images.unsplash.com/photo-1584634731339-252c581abfc5?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            author: "Dr. Amani".to_string(),
        },
    ]
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            title: "Water Wheels Project".to_string(),
            description: "Distributing rolling water drums (Water Wheels) to women and \
                 children. This simple innovation allows them to transport 50 liters of water at \
                 once with minimal physical strain, replacing the heavy burden of carrying \
                 buckets on their heads."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1574482620266-b6b473187c32?auto=format&fit=crop&q=80&w=600"
                .to_string(),
            goal: 8000.0,
            raised: 2450.0,
        },
        Project {
            id: "p2".to_string(),
            title: "Food Sharing Program".to_string(),
            description: "Providing essential food parcels including maize, beans, and oil to \
                 the poorest families in our community. We aim to fight hunger and malnutrition, \
                 ensuring no child goes to sleep on an empty stomach."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1593113598332-cd288d649433?auto=format&fit=crop&q=80&w=600"
                .to_string(),
            goal: 12000.0,
            raised: 5600.0,
        },
        Project {
            id: "p3".to_string(),
            title: "HIV/AIDS Support".to_string(),
            description: "Offering relief aid, nutritional support, and counseling services to \
                 individuals and families affected by HIV/AIDS. We work to improve their quality \
                 of life and reduce the stigma surrounding the disease."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1576765608535-5f04d1e3f289?auto=format&fit=crop&q=80&w=600"
                .to_string(),
            goal: 15000.0,
            raised: 8900.0,
        },
        Project {
            id: "p4".to_string(),
            title: "Community Clinic Construction".to_string(),
            description: "Building and equipping a rural community clinic to provide immediate \
                 medical care, maternity services, and disease treatment to villagers who \
                 currently travel miles for basic health needs."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1516574187841-693018950317?auto=format&fit=crop&q=80&w=600"
                .to_string(),
            goal: 45000.0,
            raised: 12500.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_get_set_round_trip() {
        let mut content = SiteContent::default();
        for field in ContentField::ALL {
            content.set(field, field.as_key().to_string());
        }
        for field in ContentField::ALL {
            assert_eq!(content.get(field), field.as_key());
        }
    }

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&seed_config()).unwrap();
        assert!(json.contains("\"heroTitle\""));
        assert!(json.contains("\"logoUrl\""));
        assert!(json.contains("\"metaDescription\""));
    }

    #[test]
    fn config_deserializes_missing_fields_to_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"branding":{"name":"Test Org"}}"#).unwrap();
        assert_eq!(config.branding.name, "Test Org");
        assert_eq!(config.branding.tagline, "");
        assert_eq!(config.content.hero_title, "");
    }

    #[test]
    fn project_deserializes_missing_numbers_to_zero() {
        let project: Project = serde_json::from_str(r#"{"id":"p9","title":"New"}"#).unwrap();
        assert_eq!(project.goal, 0.0);
        assert_eq!(project.raised, 0.0);
    }

    #[test]
    fn branding_update_merges_only_named_fields() {
        let mut config = seed_config();
        let before_tagline = config.branding.tagline.clone();
        ConfigUpdate::Branding(BrandingUpdate {
            name: Some("New Name".to_string()),
            ..Default::default()
        })
        .apply_to(&mut config);
        assert_eq!(config.branding.name, "New Name");
        assert_eq!(config.branding.tagline, before_tagline);
    }

    #[test]
    fn content_update_leaves_other_sections_untouched() {
        let mut config = seed_config();
        let theme_before = config.theme.clone();
        ConfigUpdate::Content(ContentUpdate {
            hero_title: Some("Hello".to_string()),
            ..Default::default()
        })
        .apply_to(&mut config);
        assert_eq!(config.content.hero_title, "Hello");
        assert_eq!(config.theme, theme_before);
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso().unwrap();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}
