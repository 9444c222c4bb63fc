//! Blog manager page

use std::sync::Arc;

use admin_api::{split_tags, BlogPost, BlogUpdate, NewBlog, RecordId, Upload};
use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{LoadingSpinner, PreviewDialog};
use crate::format::{display_date, excerpt};
use crate::state::use_toast;

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_AUTHOR: &str = "Admin";

/// Editable fields of a post. Content is raw HTML.
#[derive(Debug, Clone, PartialEq)]
struct BlogForm {
    title: String,
    content: String,
    author: String,
    /// Comma-separated
    tags: String,
    category: String,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: String::new(),
            category: String::new(),
        }
    }
}

impl BlogForm {
    fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            tags: post.tags.join(","),
            category: post.category.clone(),
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err("Title and Content are required");
        }
        Ok(())
    }

    fn category(&self) -> String {
        match self.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            category => category.to_string(),
        }
    }

    fn to_new_blog(&self, image: Option<Upload>) -> NewBlog {
        NewBlog {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
            category: self.category(),
            image,
        }
    }

    /// Edits keep the post's existing thumbnail.
    fn to_update(&self, existing: &BlogPost) -> BlogUpdate {
        BlogUpdate {
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: existing.thumbnail.clone().unwrap_or_default(),
            internal_urls: Vec::new(),
            author: self.author.clone(),
            tags_list: split_tags(&self.tags),
            category: self.category(),
        }
    }

    fn append_image(&mut self, url: &str) {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        self.content.push_str(&format!("<img src=\"{}\" alt=\"\" />", url));
    }
}

/// First file of a file input, read into memory.
async fn read_picked_file(engine: Option<Arc<dyn FileEngine>>) -> Option<Upload> {
    let engine = engine?;
    let file_name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&file_name).await?;
    Some(Upload { file_name, bytes })
}

/// List, create, edit and delete blog posts
#[component]
pub fn BlogManager() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut form = use_signal(BlogForm::default);
    let mut editing = use_signal(|| None::<BlogPost>);
    let mut is_editor_open = use_signal(|| false);
    let mut show_preview = use_signal(|| false);
    let mut row_preview = use_signal(|| None::<String>);
    let mut thumbnail = use_signal(|| None::<Upload>);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let list_auth = auth.clone();
    let mut blogs = use_resource(move || {
        let api = list_auth.api();
        async move { api.list_blogs().await }
    });

    let mut reset_editor = move || {
        form.set(BlogForm::default());
        editing.set(None);
        thumbnail.set(None);
        show_preview.set(false);
    };

    let handle_edit = use_callback(move |post: BlogPost| {
        form.set(BlogForm::from_post(&post));
        editing.set(Some(post));
        thumbnail.set(None);
        is_editor_open.set(true);
    });

    let save_auth = auth.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();

        let current = form();
        if let Err(message) = current.validate() {
            toast.error(message);
            return;
        }

        let api = save_auth.api();
        let existing = editing();
        let image = thumbnail();
        spawn(async move {
            saving.set(true);
            let result = match &existing {
                Some(post) => api.update_blog(&post.id, &current.to_update(post)).await,
                None => api.create_blog(current.to_new_blog(image)).await,
            };
            match result {
                Ok(()) => {
                    if existing.is_some() {
                        toast.success("Blog updated successfully");
                    } else {
                        toast.success("Blog created successfully");
                    }
                    reset_editor();
                    is_editor_open.set(false);
                    blogs.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Saving blog failed");
                    toast.error(format!("Operation failed: {}", e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let upload_auth = auth.clone();
    let handle_inline_image = move |evt: FormEvent| {
        let engine = evt.files();
        let api = upload_auth.api();
        spawn(async move {
            let Some(upload) = read_picked_file(engine).await else {
                return;
            };
            uploading.set(true);
            match api.upload_image(upload).await {
                Ok(url) => form.write().append_image(&url),
                Err(e) => toast.error(format!("Image upload failed: {}", e.user_message())),
            }
            uploading.set(false);
        });
    };

    let handle_thumbnail = move |evt: FormEvent| {
        let engine = evt.files();
        spawn(async move {
            thumbnail.set(read_picked_file(engine).await);
        });
    };

    let handle_preview = use_callback(move |post: BlogPost| {
        row_preview.set(Some(post.content));
    });

    let handle_delete = use_callback(move |id: RecordId| {
        let api = auth.api();
        spawn(async move {
            match api.delete_blog(&id).await {
                Ok(()) => {
                    toast.success("Blog deleted");
                    blogs.restart();
                }
                Err(e) => toast.error(format!("Delete failed: {}", e.user_message())),
            }
        });
    });

    let editor_title = if editing.read().is_some() { "Edit Blog" } else { "New Blog" };
    let thumbnail_name = thumbnail.read().as_ref().map(|t| t.file_name.clone());
    let preview_html = form.read().content.clone();

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Blog Manager" }
                    p { class: "text-gray-500 text-sm", "Create and manage blog posts." }
                }
                button {
                    class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900",
                    onclick: move |_| {
                        if is_editor_open() {
                            is_editor_open.set(false);
                        } else {
                            reset_editor();
                            is_editor_open.set(true);
                        }
                    },
                    if is_editor_open() { "Close Editor" } else { "New Blog" }
                }
            }

            if is_editor_open() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                    onsubmit: handle_save,

                    h2 { class: "text-lg font-semibold text-gray-900", "{editor_title}" }

                    div {
                        class: "grid gap-4 md:grid-cols-2",
                        FormField {
                            label: "Title",
                            value: form.read().title.clone(),
                            on_input: move |v| form.write().title = v
                        }
                        FormField {
                            label: "Author",
                            value: form.read().author.clone(),
                            on_input: move |v| form.write().author = v
                        }
                        FormField {
                            label: "Category",
                            placeholder: DEFAULT_CATEGORY,
                            value: form.read().category.clone(),
                            on_input: move |v| form.write().category = v
                        }
                        FormField {
                            label: "Tags",
                            placeholder: "news, product, hiring",
                            value: form.read().tags.clone(),
                            on_input: move |v| form.write().tags = v
                        }
                    }

                    if editing.read().is_none() {
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Thumbnail" }
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_thumbnail
                            }
                            if let Some(name) = thumbnail_name {
                                p { class: "text-xs text-gray-500 mt-1", "Selected: {name}" }
                            }
                        }
                    }

                    div {
                        div {
                            class: "flex items-center justify-between mb-1",
                            label { class: "text-sm font-medium text-gray-700", "Content (HTML)" }
                            div {
                                class: "flex items-center gap-3 text-sm",
                                label {
                                    class: "cursor-pointer text-sky-700 hover:underline",
                                    if uploading() { "Uploading..." } else { "Insert image" }
                                    input {
                                        r#type: "file",
                                        accept: "image/*",
                                        class: "hidden",
                                        disabled: uploading(),
                                        onchange: handle_inline_image
                                    }
                                }
                                button {
                                    r#type: "button",
                                    class: "text-sky-700 hover:underline",
                                    onclick: move |_| show_preview.set(!show_preview()),
                                    if show_preview() { "Edit" } else { "Preview" }
                                }
                            }
                        }
                        if show_preview() {
                            div {
                                class: "prose max-w-none border border-gray-200 rounded-md p-4 min-h-[16rem]",
                                dangerous_inner_html: "{preview_html}"
                            }
                        } else {
                            textarea {
                                class: "w-full h-64 px-3 py-2 border border-gray-300 rounded-md font-mono text-sm focus:outline-none focus:ring-2 focus:ring-sky-500",
                                value: "{preview_html}",
                                oninput: move |e| form.write().content = e.value()
                            }
                        }
                    }

                    div {
                        class: "flex justify-end gap-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-gray-100 text-gray-700 text-sm rounded-md hover:bg-gray-200",
                            onclick: move |_| {
                                reset_editor();
                                is_editor_open.set(false);
                            },
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900 disabled:opacity-50",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }

            match &*blogs.read_unchecked() {
                Some(Ok(posts)) if !posts.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for post in posts.iter() {
                            BlogRow {
                                key: "{post.id}",
                                post: post.clone(),
                                on_preview: handle_preview,
                                on_edit: handle_edit,
                                on_delete: handle_delete
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No blog posts yet." }
                    }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Failed to load blogs: {message}"
                        }
                    }
                }
                None => rsx! {
                    div { class: "py-12", LoadingSpinner { message: "Loading blogs..." } }
                }
            }

            if let Some(html) = row_preview() {
                PreviewDialog { html: html, on_close: move |_| row_preview.set(None) }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BlogRowProps {
    post: BlogPost,
    on_preview: EventHandler<BlogPost>,
    on_edit: EventHandler<BlogPost>,
    on_delete: EventHandler<RecordId>,
}

#[component]
fn BlogRow(props: BlogRowProps) -> Element {
    let post = &props.post;
    let mut confirming = use_signal(|| false);

    let summary = excerpt(&post.content, 160);
    let published = display_date(post.created_at.as_deref());
    let tags = post.tags.join(", ");
    let byline = if post.author.is_empty() {
        published
    } else {
        format!("{} \u{00B7} {}", post.author, published)
    };

    rsx! {
        div {
            class: "p-4 flex items-start gap-4 hover:bg-gray-50",
            if let Some(src) = &post.thumbnail {
                img { class: "w-20 h-14 object-cover rounded", src: "{src}", alt: "" }
            }
            div {
                class: "flex-1 min-w-0",
                h3 { class: "text-sm font-medium text-gray-900 truncate", "{post.title}" }
                p { class: "text-xs text-gray-500", "{byline}" }
                p { class: "text-sm text-gray-600 mt-1 line-clamp-2", "{summary}" }
                if !tags.is_empty() {
                    p { class: "text-xs text-sky-700 mt-1", "{tags}" }
                }
            }
            div {
                class: "flex items-center gap-2 ml-4",
                if confirming() {
                    button {
                        class: "px-3 py-1.5 bg-red-600 text-white text-sm rounded hover:bg-red-700",
                        onclick: {
                            let id = post.id.clone();
                            move |_| {
                                confirming.set(false);
                                props.on_delete.call(id.clone());
                            }
                        },
                        "Confirm"
                    }
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                        onclick: {
                            let post = post.clone();
                            move |_| props.on_preview.call(post.clone())
                        },
                        "Preview"
                    }
                    button {
                        class: "px-3 py-1.5 bg-sky-100 text-sky-700 text-sm rounded hover:bg-sky-200",
                        onclick: {
                            let post = post.clone();
                            move |_| props.on_edit.call(post.clone())
                        },
                        "Edit"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| confirming.set(true),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "")] placeholder: &'static str,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                placeholder: placeholder,
                oninput: move |e| on_input.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> BlogPost {
        BlogPost {
            id: RecordId::Int(7),
            title: "Launch".to_string(),
            content: "<p>Hello</p>".to_string(),
            author: "Ada".to_string(),
            tags: vec!["news".to_string(), "product".to_string()],
            category: "Updates".to_string(),
            thumbnail: Some("https://cdn.example.com/t.png".to_string()),
            created_at: None,
            created_by: None,
        }
    }

    #[test]
    fn test_title_and_content_required() {
        let mut form = BlogForm {
            title: "Launch".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err("Title and Content are required"));

        form.content = "<p>Body</p>".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_new_post_is_authored_by_admin() {
        let form = BlogForm {
            title: "t".to_string(),
            content: "c".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_new_blog(None).author, "Admin");

        let edited = BlogForm::from_post(&post());
        assert_eq!(edited.author, "Ada");
    }

    #[test]
    fn test_blank_category_defaults_to_general() {
        let form = BlogForm {
            title: "t".to_string(),
            content: "c".to_string(),
            category: "  ".to_string(),
            ..Default::default()
        };
        let blog = form.to_new_blog(None);
        assert_eq!(blog.category, "General");
        assert!(blog.image.is_none());
    }

    #[test]
    fn test_edit_round_trips_form_fields() {
        let form = BlogForm::from_post(&post());
        assert_eq!(form.tags, "news,product");

        let update = form.to_update(&post());
        assert_eq!(update.tags_list, vec!["news", "product"]);
        assert_eq!(update.image_url, "https://cdn.example.com/t.png");
        assert_eq!(update.category, "Updates");
        assert!(update.internal_urls.is_empty());
    }

    #[test]
    fn test_update_without_thumbnail_sends_empty_url() {
        let existing = BlogPost {
            thumbnail: None,
            ..post()
        };
        let update = BlogForm::from_post(&existing).to_update(&existing);
        assert_eq!(update.image_url, "");
    }

    #[test]
    fn test_append_image_starts_new_line() {
        let mut form = BlogForm {
            content: "<p>Intro</p>".to_string(),
            ..Default::default()
        };
        form.append_image("https://cdn.example.com/a.png");
        assert_eq!(
            form.content,
            "<p>Intro</p>\n<img src=\"https://cdn.example.com/a.png\" alt=\"\" />"
        );

        let mut empty = BlogForm::default();
        empty.append_image("u");
        assert_eq!(empty.content, "<img src=\"u\" alt=\"\" />");
    }
}
