use reqwest::Method;
use store::Article;
use tokio_util::sync::CancellationToken;

use super::ARTICLES_URL;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::schema::{ArticleDraft, ArticleEnvelope, ArticlesEnvelope, NewComment};

fn article_path(slug: &str) -> [&str; 3] {
    [ARTICLES_URL[0], ARTICLES_URL[1], slug]
}

impl ApiClient {
    /// `GET api/articles`.
    pub async fn list_articles(
        &self,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<Article>, ApiError> {
        let envelope: ArticlesEnvelope = self.get_json(ARTICLES_URL, cancel).await?;
        Ok(envelope.articles)
    }

    /// `GET api/articles/{slug}`.
    pub async fn get_article(
        &self,
        slug: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Article, ApiError> {
        let envelope: ArticleEnvelope = self.get_json(&article_path(slug), cancel).await?;
        Ok(envelope.article)
    }

    /// `POST api/articles`.
    pub async fn create_article(&self, draft: &ArticleDraft) -> Result<(), ApiError> {
        self.send_json(Method::POST, ARTICLES_URL, draft, None).await?;
        Ok(())
    }

    /// `PUT api/articles/{slug}`.
    pub async fn update_article(&self, slug: &str, draft: &ArticleDraft) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &article_path(slug), draft, None)
            .await?;
        Ok(())
    }

    /// `DELETE api/articles/{slug}`.
    pub async fn delete_article(&self, slug: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &article_path(slug), None)
            .await?;
        Ok(())
    }

    /// `POST api/articles/{slug}/comments`.
    pub async fn add_comment(&self, slug: &str, body: &str) -> Result<(), ApiError> {
        let [api, articles, slug] = article_path(slug);
        let comment = NewComment {
            body: body.to_string(),
        };
        self.send_json(Method::POST, &[api, articles, slug, "comments"], &comment, None)
            .await?;
        Ok(())
    }

    /// `DELETE api/articles/{slug}/comments/{id}`.
    pub async fn delete_comment(&self, slug: &str, id: i64) -> Result<(), ApiError> {
        let [api, articles, slug] = article_path(slug);
        let id = id.to_string();
        self.send_empty(Method::DELETE, &[api, articles, slug, "comments", &id], None)
            .await?;
        Ok(())
    }
}
