use iced::widget::{button, column, progress_bar, row, text, text_input};
use iced::{Element, Length, Task};

use crate::core::store::SiteStore;
use crate::gui::message::{
    AdminMessage, AdminTab, FundingField, Message, PostField, SettingsInput,
};
use crate::gui::state::{AdminScreen, AppState, PostForm};
use crate::models::{
    BlogPost, BrandingUpdate, ConfigUpdate, ContactUpdate, ContentField, DEFAULT_POST_IMAGE,
    NewBlogPost, SeoUpdate, today_iso,
};
use crate::pages::{Route, percent_funded};
use crate::services::auth;

pub fn update(state: &mut AppState, message: AdminMessage) -> Task<Message> {
    match message {
        AdminMessage::UsernameChanged(value) => {
            state.admin.username = value;
            Task::none()
        }
        AdminMessage::PasswordChanged(value) => {
            state.admin.password = value;
            Task::none()
        }
        AdminMessage::LoginSubmitted => {
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            if auth::verify_credentials(&state.admin.username, &state.admin.password) {
                state.admin.login_error = None;
                state.admin.password.clear();
                state.admin.sync_from(&store);
                if !store.is_admin() {
                    return Task::perform(
                        async move {
                            store
                                .toggle_admin()
                                .await
                                .map(|_| ())
                                .map_err(|e| format!("{e:#}"))
                        },
                        Message::Saved,
                    );
                }
            } else {
                state.admin.login_error = Some("Invalid credentials".to_string());
            }
            Task::none()
        }
        AdminMessage::LogoutPressed => {
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            if store.is_admin() {
                return Task::perform(
                    async move {
                        store
                            .toggle_admin()
                            .await
                            .map(|_| ())
                            .map_err(|e| format!("{e:#}"))
                    },
                    Message::Saved,
                );
            }
            Task::none()
        }
        AdminMessage::TabSelected(tab) => {
            state.admin.tab = tab;
            Task::none()
        }
        AdminMessage::NewPostPressed => {
            state.admin.editing = Some(PostForm {
                date: today_iso().unwrap_or_default(),
                ..Default::default()
            });
            Task::none()
        }
        AdminMessage::EditPostPressed(id) => {
            // also reachable from the blog page's edit affordance
            state.route = Route::Admin;
            state.admin.tab = AdminTab::Posts;
            if let Some(store) = state.store.as_deref() {
                if let Some(post) = store.post(&id) {
                    state.admin.editing = Some(PostForm::from_post(post));
                }
            }
            Task::none()
        }
        AdminMessage::DeletePostPressed(id) => {
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            Task::perform(
                async move { store.delete_post(&id).await.map_err(|e| format!("{e:#}")) },
                Message::Saved,
            )
        }
        AdminMessage::PostFieldChanged(field, value) => {
            if let Some(form) = state.admin.editing.as_mut() {
                match field {
                    PostField::Title => form.title = value,
                    PostField::Author => form.author = value,
                    PostField::Date => form.date = value,
                    PostField::ImageUrl => form.image_url = value,
                    PostField::Excerpt => form.excerpt = value,
                    PostField::Content => form.content = value,
                }
            }
            Task::none()
        }
        AdminMessage::SavePostPressed => {
            let Some(form) = state.admin.editing.clone() else {
                return Task::none();
            };
            if !form.is_valid() {
                state.status = Some("Every post field except the image is required".to_string());
                return Task::none();
            }
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            state.admin.editing = None;
            state.status = None;
            let image_url = if form.image_url.trim().is_empty() {
                DEFAULT_POST_IMAGE.to_string()
            } else {
                form.image_url
            };
            match form.id {
                Some(id) => {
                    let post = BlogPost {
                        id,
                        title: form.title,
                        excerpt: form.excerpt,
                        content: form.content,
                        date: form.date,
                        image_url,
                        author: form.author,
                    };
                    Task::perform(
                        async move { store.update_post(post).await.map_err(|e| format!("{e:#}")) },
                        Message::Saved,
                    )
                }
                None => {
                    let new_post = NewBlogPost {
                        title: form.title,
                        excerpt: form.excerpt,
                        content: form.content,
                        date: form.date,
                        image_url,
                        author: form.author,
                    };
                    Task::perform(
                        async move {
                            store
                                .add_post(new_post)
                                .await
                                .map(|_| ())
                                .map_err(|e| format!("{e:#}"))
                        },
                        Message::Saved,
                    )
                }
            }
        }
        AdminMessage::CancelEditPressed => {
            state.admin.editing = None;
            Task::none()
        }
        AdminMessage::FundingChanged { id, field, value } => {
            let Some(form) = state.admin.funding.iter_mut().find(|f| f.id == id) else {
                return Task::none();
            };
            match field {
                FundingField::Raised => form.raised = value,
                FundingField::Goal => form.goal = value,
            }
            // live commit once both numbers parse, like the funding editor
            // has always behaved
            let (Ok(raised), Ok(goal)) = (
                form.raised.trim().parse::<f64>(),
                form.goal.trim().parse::<f64>(),
            ) else {
                return Task::none();
            };
            if raised < 0.0 || goal < 0.0 {
                return Task::none();
            }
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            let Some(mut project) = store.project(&id) else {
                return Task::none();
            };
            project.raised = raised;
            project.goal = goal;
            Task::perform(
                async move {
                    store
                        .update_project(project)
                        .await
                        .map_err(|e| format!("{e:#}"))
                },
                Message::Saved,
            )
        }
        AdminMessage::SettingChanged(input, value) => {
            let settings = &mut state.admin.settings;
            match input {
                SettingsInput::OrgName => settings.org_name = value,
                SettingsInput::Tagline => settings.tagline = value,
                SettingsInput::LogoUrl => settings.logo_url = value,
                SettingsInput::MetaTitle => settings.meta_title = value,
                SettingsInput::MetaDescription => settings.meta_description = value,
                SettingsInput::Email => settings.email = value,
                SettingsInput::Phone => settings.phone = value,
                SettingsInput::Address => settings.address = value,
            }
            Task::none()
        }
        AdminMessage::ContentChanged(field, value) => {
            state.admin.settings.content.set(field, value);
            Task::none()
        }
        AdminMessage::SaveSettingsPressed => {
            let Some(store) = state.store.clone() else {
                return Task::none();
            };
            let form = state.admin.settings.clone();
            Task::perform(
                async move {
                    store
                        .update_config(ConfigUpdate::Branding(BrandingUpdate {
                            name: Some(form.org_name),
                            logo_url: Some(form.logo_url),
                            tagline: Some(form.tagline),
                        }))
                        .await
                        .map_err(|e| format!("{e:#}"))?;
                    store
                        .update_config(ConfigUpdate::Seo(SeoUpdate {
                            meta_title: Some(form.meta_title),
                            meta_description: Some(form.meta_description),
                        }))
                        .await
                        .map_err(|e| format!("{e:#}"))?;
                    store
                        .update_config(ConfigUpdate::Contact(ContactUpdate {
                            email: Some(form.email),
                            phone: Some(form.phone),
                            address: Some(form.address),
                        }))
                        .await
                        .map_err(|e| format!("{e:#}"))?;
                    let current = store.config().content;
                    for field in ContentField::ALL {
                        let value = form.content.get(field);
                        if value != current.get(field) {
                            store
                                .update_content(field, value.to_string())
                                .await
                                .map_err(|e| format!("{e:#}"))?;
                        }
                    }
                    Ok(())
                },
                Message::Saved,
            )
        }
    }
}

pub fn view<'a>(state: &'a AppState, store: &'a SiteStore) -> Element<'a, Message> {
    if !store.is_admin() {
        return login_view(state);
    }
    let admin = &state.admin;
    let tabs = row![
        button(text("Blog Posts"))
            .on_press(Message::Admin(AdminMessage::TabSelected(AdminTab::Posts))),
        button(text("Projects"))
            .on_press(Message::Admin(AdminMessage::TabSelected(AdminTab::Projects))),
        button(text("Site Settings"))
            .on_press(Message::Admin(AdminMessage::TabSelected(AdminTab::Settings))),
        button(text("Logout")).on_press(Message::Admin(AdminMessage::LogoutPressed)),
    ]
    .spacing(8);
    let body = match admin.tab {
        AdminTab::Posts => posts_tab(admin, store),
        AdminTab::Projects => projects_tab(admin, store),
        AdminTab::Settings => settings_tab(admin),
    };
    column![text("Admin Dashboard").size(28), tabs, body]
        .spacing(16)
        .padding(24)
        .into()
}

fn login_view(state: &AppState) -> Element<'_, Message> {
    let admin = &state.admin;
    let mut col = column![
        text("Admin Login").size(28),
        text("Secure Area for Safe Water Management").size(14),
    ]
    .spacing(12)
    .padding(24);
    if let Some(error) = &admin.login_error {
        col = col.push(text(error.as_str()));
    }
    col = col.push(
        text_input("admin", &admin.username)
            .on_input(|value| Message::Admin(AdminMessage::UsernameChanged(value))),
    );
    col = col.push(
        text_input("••••••", &admin.password)
            .secure(true)
            .on_input(|value| Message::Admin(AdminMessage::PasswordChanged(value)))
            .on_submit(Message::Admin(AdminMessage::LoginSubmitted)),
    );
    col = col.push(
        button(text("Access Dashboard")).on_press(Message::Admin(AdminMessage::LoginSubmitted)),
    );
    col.into()
}

fn posts_tab<'a>(admin: &'a AdminScreen, store: &'a SiteStore) -> Element<'a, Message> {
    if let Some(form) = &admin.editing {
        return post_editor(form);
    }
    let mut col = column![
        row![
            text("Blog Manager").size(22),
            button(text("Create New Post")).on_press(Message::Admin(AdminMessage::NewPostPressed)),
        ]
        .spacing(12),
        text("Create, edit, and manage your news articles.").size(14),
    ]
    .spacing(12);

    let posts = store.posts();
    if posts.is_empty() {
        col = col.push(text("No posts found. Create one to get started!"));
    }
    for post in posts {
        col = col.push(
            row![
                column![
                    text(post.title),
                    text(format!("{} · {}", post.date, post.author)).size(13),
                ]
                .spacing(2),
                button(text("Edit"))
                    .on_press(Message::Admin(AdminMessage::EditPostPressed(post.id.clone()))),
                button(text("Delete"))
                    .on_press(Message::Admin(AdminMessage::DeletePostPressed(post.id))),
            ]
            .spacing(12),
        );
    }
    col.into()
}

fn post_editor(form: &PostForm) -> Element<'_, Message> {
    fn edited(field: PostField) -> impl Fn(String) -> Message {
        move |value| Message::Admin(AdminMessage::PostFieldChanged(field, value))
    }

    let heading = if form.id.is_some() {
        "Edit Post"
    } else {
        "New Post"
    };
    column![
        text(heading).size(22),
        text_input("Enter an engaging title...", &form.title).on_input(edited(PostField::Title)),
        row![
            text_input("Author name", &form.author).on_input(edited(PostField::Author)),
            text_input("YYYY-MM-DD", &form.date).on_input(edited(PostField::Date)),
        ]
        .spacing(8),
        text_input("Cover image URL (https://...)", &form.image_url)
            .on_input(edited(PostField::ImageUrl)),
        text_input("Short excerpt shown on cards", &form.excerpt)
            .on_input(edited(PostField::Excerpt)),
        text_input("Write your story here...", &form.content).on_input(edited(PostField::Content)),
        row![
            button(text("Cancel")).on_press(Message::Admin(AdminMessage::CancelEditPressed)),
            button(text("Save Post")).on_press(Message::Admin(AdminMessage::SavePostPressed)),
        ]
        .spacing(8),
    ]
    .spacing(12)
    .into()
}

fn projects_tab<'a>(admin: &'a AdminScreen, store: &'a SiteStore) -> Element<'a, Message> {
    let mut col = column![
        text("Project Funding").size(22),
        text("Update the progress of your charitable initiatives.").size(14),
    ]
    .spacing(12);

    for form in &admin.funding {
        let percent = store
            .project(&form.id)
            .map(|p| percent_funded(&p))
            .unwrap_or(0);
        let raised_id = form.id.clone();
        let goal_id = form.id.clone();
        col = col.push(
            column![
                text(form.title.as_str()).size(16),
                row![
                    text("Raised ($)").size(13),
                    text_input("0", &form.raised).on_input(move |value| {
                        Message::Admin(AdminMessage::FundingChanged {
                            id: raised_id.clone(),
                            field: FundingField::Raised,
                            value,
                        })
                    }),
                    text("Goal ($)").size(13),
                    text_input("0", &form.goal).on_input(move |value| {
                        Message::Admin(AdminMessage::FundingChanged {
                            id: goal_id.clone(),
                            field: FundingField::Goal,
                            value,
                        })
                    }),
                ]
                .spacing(8),
                progress_bar(0.0..=100.0, percent as f32),
                text(format!("{percent}% Funded")).size(13),
            ]
            .spacing(4),
        );
    }
    col.into()
}

fn settings_tab(admin: &AdminScreen) -> Element<'_, Message> {
    fn setting<'b>(label: &'static str, value: &'b str, input: SettingsInput) -> Element<'b, Message> {
        row![
            text(label).size(13).width(Length::Fixed(170.0)),
            text_input(label, value)
                .on_input(move |value| Message::Admin(AdminMessage::SettingChanged(input, value))),
        ]
        .spacing(8)
        .into()
    }

    let form = &admin.settings;
    let mut col = column![
        text("Global Settings").size(22),
        text("Configure your website's appearance and details.").size(14),
    ]
    .spacing(10);

    col = col.push(text("Branding").size(16));
    col = col.push(setting("Organization Name", &form.org_name, SettingsInput::OrgName));
    col = col.push(setting("Tagline", &form.tagline, SettingsInput::Tagline));
    col = col.push(setting("Logo URL", &form.logo_url, SettingsInput::LogoUrl));

    col = col.push(text("SEO").size(16));
    col = col.push(setting("Meta Title", &form.meta_title, SettingsInput::MetaTitle));
    col = col.push(setting(
        "Meta Description",
        &form.meta_description,
        SettingsInput::MetaDescription,
    ));

    col = col.push(text("Contact").size(16));
    col = col.push(setting("Email", &form.email, SettingsInput::Email));
    col = col.push(setting("Phone", &form.phone, SettingsInput::Phone));
    col = col.push(setting("Address", &form.address, SettingsInput::Address));

    col = col.push(text("Page Content").size(16));
    for field in ContentField::ALL {
        col = col.push(
            row![
                text(field.as_key()).size(13).width(Length::Fixed(170.0)),
                text_input("", form.content.get(field)).on_input(move |value| {
                    Message::Admin(AdminMessage::ContentChanged(field, value))
                }),
            ]
            .spacing(8),
        );
    }

    col = col.push(
        button(text("Save Settings")).on_press(Message::Admin(AdminMessage::SaveSettingsPressed)),
    );
    col.into()
}
