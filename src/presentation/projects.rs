//! Portfolio project commands: list/facet views and editor workflows.

use std::sync::Arc;

use serde::Serialize;

use crate::application::editor::{ConfirmationGate, DetailEditor, EditorOutcome};
use crate::application::list::ListController;
use crate::application::tag_index::TagIndexLoader;
use crate::application::transport::ResourceClient;
use crate::config::ProjectsAction;
use crate::domain::resource::{Project, ProjectSummary, Shape};
use crate::infra::api::ApiClient;

use super::io::{read_opt_value, read_value};
use super::print::print_json;
use super::{AssumeYes, CliError, StdinGate, save_failure};

#[derive(Serialize)]
struct ListView<'a> {
    items: &'a [ProjectSummary],
    page: u32,
    total_pages: u32,
    has_previous: bool,
    has_next: bool,
    tags: &'a [String],
}

struct ProjectDraft {
    title: String,
    description: String,
    github_link: String,
    live_url: String,
    shape: Shape,
    image: String,
}

pub async fn handle(api: &Arc<ApiClient>, action: ProjectsAction) -> Result<(), CliError> {
    let client: Arc<dyn ResourceClient<Project>> = api.clone();
    match action {
        ProjectsAction::List { page, search, tag } => list(client, page, search, tag).await,
        ProjectsAction::Tags => facet(client).await,
        ProjectsAction::Get { id } => get(client, &id).await,
        ProjectsAction::Create {
            title,
            description,
            description_file,
            github_link,
            live_url,
            shape,
            image,
        } => {
            let draft = ProjectDraft {
                title,
                description: read_value(description, description_file)?,
                github_link,
                live_url,
                shape,
                image,
            };
            create(client, draft).await
        }
        ProjectsAction::Update {
            id,
            title,
            description,
            description_file,
            github_link,
            live_url,
            shape,
            image,
        } => {
            let description = read_opt_value(description, description_file)?;
            update(
                client, &id, title, description, github_link, live_url, shape, image,
            )
            .await
        }
        ProjectsAction::Delete { id, yes } => delete(client, &id, yes).await,
    }
}

async fn list(
    client: Arc<dyn ResourceClient<Project>>,
    page: u32,
    search: String,
    tag: String,
) -> Result<(), CliError> {
    let mut controller = ListController::<Project>::new(client.clone());
    controller.set_search(search);
    controller.set_tag(tag);
    controller.set_page(page);

    let loader = TagIndexLoader::<Project>::new(client);
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

async fn facet(client: Arc<dyn ResourceClient<Project>>) -> Result<(), CliError> {
    let facet = TagIndexLoader::<Project>::new(client).load().await;
    print_json(&facet)
}

async fn get(client: Arc<dyn ResourceClient<Project>>, id: &str) -> Result<(), CliError> {
    let mut editor = DetailEditor::<Project>::new(client);
    editor.load(id).await;
    if let Some(err) = editor.error() {
        return Err(err.clone().into());
    }
    print_json(editor.resource())
}

async fn create(
    client: Arc<dyn ResourceClient<Project>>,
    draft: ProjectDraft,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<Project>::new(client);
    editor.edit(|project| {
        project.title = draft.title;
        project.description = draft.description;
        project.github_link = draft.github_link;
        project.live_url = draft.live_url;
        project.shape = draft.shape;
        project.image = draft.image;
    });
    match editor.submit().await {
        EditorOutcome::Done => print_json(editor.resource()),
        EditorOutcome::Stayed => Err(save_failure(&editor)),
    }
}

#[allow(clippy::too_many_arguments)]
async fn update(
    client: Arc<dyn ResourceClient<Project>>,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    github_link: Option<String>,
    live_url: Option<String>,
    shape: Option<Shape>,
    image: Option<String>,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<Project>::new(client);
    editor.load(id).await;
    if let Some(err) = editor.error() {
        return Err(err.clone().into());
    }

    editor.edit(|project| {
        if let Some(title) = title {
            project.title = title;
        }
        if let Some(description) = description {
            project.description = description;
        }
        if let Some(github_link) = github_link {
            project.github_link = github_link;
        }
        if let Some(live_url) = live_url {
            project.live_url = live_url;
        }
        if let Some(shape) = shape {
            project.shape = shape;
        }
        if let Some(image) = image {
            project.image = image;
        }
    });
    match editor.submit().await {
        EditorOutcome::Done => print_json(editor.resource()),
        EditorOutcome::Stayed => Err(save_failure(&editor)),
    }
}

async fn delete(
    client: Arc<dyn ResourceClient<Project>>,
    id: &str,
    yes: bool,
) -> Result<(), CliError> {
    let mut editor = DetailEditor::<Project>::new(client);
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
