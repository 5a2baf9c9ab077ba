//! Blog post commands: list/facet views and editor workflows.

use std::sync::Arc;

use serde::Serialize;

use crate::application::editor::{ConfirmationGate, DetailEditor, EditorOutcome};
use crate::application::list::ListController;
use crate::application::tag_index::TagIndexLoader;
use crate::application::transport::ResourceClient;
use crate::config::BlogsAction;
use crate::domain::resource::{BlogPost, BlogPostSummary};
use crate::domain::tags;
use crate::infra::api::ApiClient;

use super::io::{read_opt_value, read_value};
use super::print::print_json;
use super::{AssumeYes, CliError, StdinGate, save_failure};

#[derive(Serialize)]
struct ListView<'a> {
    items: &'a [BlogPostSummary],
    page: u32,
    total_pages: u32,
    has_previous: bool,
    has_next: bool,
    tags: &'a [String],
}

pub async fn handle(api: &Arc<ApiClient>, action: BlogsAction) -> Result<(), CliError> {
    let client: Arc<dyn ResourceClient<BlogPost>> = api.clone();
    match action {
        BlogsAction::List { page, search, tag } => list(client, page, search, tag).await,
        BlogsAction::Tags => facet(client).await,
        BlogsAction::Get { id } => get(client, &id).await,
        BlogsAction::Create {
            title,
            excerpt,
            content,
            content_file,
            tags,
        } => {
            let content = read_value(content, content_file)?;
            create(client, title, excerpt, content, tags).await
        }
        BlogsAction::Update {
            id,
            title,
            excerpt,
            content,
            content_file,
            tags,
        } => {
            let content = read_opt_value(content, content_file)?;
            update(client, &id, title, excerpt, content, tags).await
        }
        BlogsAction::Delete { id, yes } => delete(client, &id, yes).await,
    }
}

async fn list(
    client: Arc<dyn ResourceClient<BlogPost>>,
    page: u32,
    search: String,
    tag: String,
) -> Result<(), CliError> {
    let mut controller = ListController::<BlogPost>::new(client.clone());
    controller.set_search(search);
    controller.set_tag(tag);
    controller.set_page(page);

    let loader = TagIndexLoader::<BlogPost>::new(client);
    let ((), facet) = tokio::join!(controller.refresh(), loader.load());

    if let Some(err) = controller.error() {
        return Err(err.clone().into());
    }
    let snapshot = controller.snapshot();
    print_json(&ListView {
        items: snapshot.items,
        page: snapshot.page,
        total_pages: snapshot.total_pages,
        has_previous: snapshot.can_prev,
        has_next: snapshot.can_next,
        tags: &facet,
    })
}

async fn facet(client: Arc<dyn ResourceClient<BlogPost>>) -> Result<(), CliError> {
    let facet = TagIndexLoader::<BlogPost>::new(client).load().await;
    print_json(&facet)
}

async fn get(client: Arc<dyn ResourceClient<BlogPost>>, id: &str) -> Result<(), CliError> {
    let mut editor = DetailEditor::<BlogPost>::new(client);
    editor.load(id).await;
    if let Some(err) = editor.error() {
        return Err(err.clone().into());
    }
    print_json(editor.resource())
}

async fn create(
    client: Arc<dyn ResourceClient<BlogPost>>,
    title: String,
    excerpt: String,
    content: String,
    tag_input: String,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<BlogPost>::new(client);
    editor.edit(|post| {
        post.title = title;
        post.excerpt = excerpt;
        post.content = content;
        post.tags = tags::parse(&tag_input);
    });
    match editor.submit().await {
        EditorOutcome::Done => print_json(editor.resource()),
        EditorOutcome::Stayed => Err(save_failure(&editor)),
    }
}

async fn update(
    client: Arc<dyn ResourceClient<BlogPost>>,
    id: &str,
    title: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    tag_input: Option<String>,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<BlogPost>::new(client);
    editor.load(id).await;
    if let Some(err) = editor.error() {
        return Err(err.clone().into());
    }

    editor.edit(|post| {
        if let Some(title) = title {
            post.title = title;
        }
        if let Some(excerpt) = excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = content {
            post.content = content;
        }
        if let Some(input) = tag_input {
            post.tags = tags::parse(&input);
        }
    });
    match editor.submit().await {
        EditorOutcome::Done => print_json(editor.resource()),
        EditorOutcome::Stayed => Err(save_failure(&editor)),
    }
}

async fn delete(
    client: Arc<dyn ResourceClient<BlogPost>>,
    id: &str,
    yes: bool,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<BlogPost>::new(client);
    editor.load(id).await;
    if let Some(err) = editor.error() {
        return Err(err.clone().into());
    }

    let gate: &dyn ConfirmationGate = if yes { &AssumeYes } else { &StdinGate };
    match editor.delete(gate).await {
        EditorOutcome::Done => {
            println!("deleted");
            Ok(())
        }
        EditorOutcome::Stayed => match editor.error() {
            Some(err) => Err(err.clone().into()),
            None => {
                println!("aborted");
                Ok(())
            }
        },
    }
}
