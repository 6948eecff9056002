//! The presentation boundary as plain data: the fixed route table and the
//! text rendering used by headless mode. Pages read store fields verbatim;
//! the only derived display values are the funding percentage and currency
//! formatting.

use std::fmt::Write;

use crate::core::store::SiteStore;
use crate::models::Project;
use crate::services::donation::{PRESET_AMOUNTS, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects,
    Blog,
    Donate,
    Contact,
    Admin,
}

/// Routes shown in the navigation bar; donate gets its own call-to-action.
pub const NAV_ITEMS: [Route; 5] = [
    Route::Home,
    Route::About,
    Route::Projects,
    Route::Blog,
    Route::Contact,
];

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Blog,
        Route::Donate,
        Route::Contact,
        Route::Admin,
    ];

    /// Resolve a path or name to a route; anything unknown lands on home.
    pub fn parse(path: &str) -> Route {
        match path.trim().trim_matches('/') {
            "" | "home" => Route::Home,
            "about" => Route::About,
            "projects" => Route::Projects,
            "blog" => Route::Blog,
            "donate" => Route::Donate,
            "contact" => Route::Contact,
            "admin" => Route::Admin,
            _ => Route::Home,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Blog => "/blog",
            Route::Donate => "/donate",
            Route::Contact => "/contact",
            Route::Admin => "/admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Blog => "Blog",
            Route::Donate => "Donate",
            Route::Contact => "Contact",
            Route::Admin => "Admin",
        }
    }
}

/// Percentage funded for display, rounded then clamped to `[0, 100]`.
/// Stored values are never altered; a project may be raised past its goal.
pub fn percent_funded(project: &Project) -> u32 {
    if project.goal <= 0.0 {
        return if project.raised > 0.0 { 100 } else { 0 };
    }
    let percent = (project.raised / project.goal * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

/// Render one page as plain text (headless mode).
pub fn render_text(store: &SiteStore, route: Route) -> String {
    let config = store.config();
    let mut out = String::new();
    let w = &mut out;

    let _ = writeln!(w, "== {} · {} ==", config.branding.name, route.label());
    match route {
        Route::Home => {
            let _ = writeln!(w, "{}", config.content.hero_title);
            let _ = writeln!(w, "{}", config.content.hero_subtitle);
            let _ = writeln!(w, "[{}]", config.content.hero_button_text);
            let _ = writeln!(w);
            let _ = writeln!(w, "{}", config.content.mission_title);
            let _ = writeln!(w, "{}", config.content.mission_text);
            let _ = writeln!(w);
            for project in store.projects() {
                let _ = writeln!(
                    w,
                    "- {}: {} of {} ({}% funded)",
                    project.title,
                    format_usd(project.raised),
                    format_usd(project.goal),
                    percent_funded(&project)
                );
            }
        }
        Route::About => {
            let _ = writeln!(w, "{}", config.content.about_title);
            let _ = writeln!(w, "{}", config.content.about_text);
            let _ = writeln!(w);
            let _ = writeln!(w, "{}", config.content.mission_title);
            let _ = writeln!(w, "{}", config.content.mission_text);
        }
        Route::Projects => {
            for project in store.projects() {
                let _ = writeln!(w, "{}", project.title);
                let _ = writeln!(w, "{}", project.description);
                let _ = writeln!(
                    w,
                    "{} raised · Goal: {} · {}% funded",
                    format_usd(project.raised),
                    format_usd(project.goal),
                    percent_funded(&project)
                );
                let _ = writeln!(w);
            }
        }
        Route::Blog => {
            let admin = store.is_admin();
            for post in store.posts() {
                let _ = writeln!(w, "{} ({} · {})", post.title, post.date, post.author);
                let _ = writeln!(w, "{}", post.excerpt);
                if admin {
                    let _ = writeln!(w, "[edit] [delete]");
                }
                let _ = writeln!(w);
            }
        }
        Route::Donate => {
            let _ = writeln!(w, "Support Our Mission");
            let _ = writeln!(
                w,
                "Your contribution directly helps families in rural Malawi."
            );
            let presets: Vec<String> = PRESET_AMOUNTS.iter().map(|a| format_usd(*a)).collect();
            let _ = writeln!(w, "Choose an amount: {} or enter your own.", presets.join(" "));
        }
        Route::Contact => {
            let _ = writeln!(w, "Email: {}", config.contact.email);
            let _ = writeln!(w, "Phone: {}", config.contact.phone);
            let _ = writeln!(w, "Address: {}", config.contact.address);
        }
        Route::Admin => {
            if store.is_admin() {
                let _ = writeln!(
                    w,
                    "Dashboard: {} posts, {} projects.",
                    store.posts().len(),
                    store.projects().len()
                );
                let _ = writeln!(w, "[new post] [edit projects] [site settings] [logout]");
            } else {
                let _ = writeln!(w, "Admin Login · Secure Area for Safe Water Management");
            }
        }
    }
    let _ = writeln!(w);
    let _ = writeln!(w, "{}", config.content.footer_text);
    out
}
