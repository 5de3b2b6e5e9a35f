use store::{Action, Article, LoadingScope};
use tokio_util::sync::CancellationToken;

use super::report;
use crate::client::ApiClient;
use crate::messages::Message;
use crate::schema::ArticleDraft;

/// Fetch all articles. The list lives in the calling view.
pub async fn load_articles(
    client: &ApiClient,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> Option<Vec<Article>> {
    dispatch(Action::ShowLoading(LoadingScope::Articles));
    let result = client.list_articles(Some(cancel)).await;
    dispatch(Action::HideLoading(LoadingScope::Articles));

    match result {
        Ok(articles) => Some(articles),
        Err(e) => {
            report(dispatch, "Load articles", &e, Message::SystemError);
            None
        }
    }
}

pub async fn load_article(
    client: &ApiClient,
    slug: &str,
    cancel: &CancellationToken,
    dispatch: &mut impl FnMut(Action),
) -> Option<Article> {
    dispatch(Action::ShowLoading(LoadingScope::Page));
    let result = client.get_article(slug, Some(cancel)).await;
    dispatch(Action::HideLoading(LoadingScope::Page));

    match result {
        Ok(article) => Some(article),
        Err(e) => {
            report(dispatch, "Load article", &e, Message::SystemError);
            None
        }
    }
}

pub async fn create_article(
    client: &ApiClient,
    draft: &ArticleDraft,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    match client.create_article(draft).await {
        Ok(()) => {
            tracing::info!("Created article {:?}", draft.title);
            dispatch(Action::success(Message::ProcessSuccess.text()));
            true
        }
        Err(e) => {
            report(dispatch, "Create article", &e, Message::SystemError);
            false
        }
    }
}

pub async fn update_article(
    client: &ApiClient,
    slug: &str,
    draft: &ArticleDraft,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    match client.update_article(slug, draft).await {
        Ok(()) => {
            tracing::info!("Updated article {}", slug);
            dispatch(Action::success(Message::UpdateSuccess.text()));
            true
        }
        Err(e) => {
            report(dispatch, "Update article", &e, Message::SystemError);
            false
        }
    }
}

pub async fn delete_article(client: &ApiClient, slug: &str, dispatch: &mut impl FnMut(Action)) -> bool {
    if slug.is_empty() {
        return false;
    }
    match client.delete_article(slug).await {
        Ok(()) => {
            tracing::info!("Deleted article {}", slug);
            dispatch(Action::success(Message::DeleteSuccess.text()));
            true
        }
        Err(e) => {
            report(dispatch, "Delete article", &e, Message::DeleteFailed);
            false
        }
    }
}

/// Post a comment. Blank comments are not sent.
pub async fn add_comment(
    client: &ApiClient,
    slug: &str,
    body: &str,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    if body.trim().is_empty() {
        return false;
    }
    match client.add_comment(slug, body).await {
        Ok(()) => {
            dispatch(Action::success(Message::CommentCreateSuccess.text()));
            true
        }
        Err(e) => {
            report(dispatch, "Add comment", &e, Message::CreateFailed);
            false
        }
    }
}

pub async fn delete_comment(
    client: &ApiClient,
    slug: &str,
    id: i64,
    dispatch: &mut impl FnMut(Action),
) -> bool {
    match client.delete_comment(slug, id).await {
        Ok(()) => {
            dispatch(Action::success(Message::DeleteSuccess.text()));
            true
        }
        Err(e) => {
            report(dispatch, "Delete comment", &e, Message::DeleteFailed);
            false
        }
    }
}
