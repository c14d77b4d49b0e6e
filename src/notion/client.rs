use anyhow::{Result, anyhow};
use reqwest::blocking::{Client, Response};
use serde_json::Value;

use crate::auth::token_store;
use crate::config::Config;
use crate::domain::application::{JobApplication, NewApplication};
use crate::notion::ApplicationStore;
use crate::notion::schema::{self, QueryResponse};

const NOTION_VERSION: &str = "2022-06-28";
const USER_AGENT: &str = "job_tracker/0.1";

pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
            database_id: database_id.into(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let token = token_store::resolve_notion_token()?;
        Self::new(cfg.notion_api_url(), token, cfg.database_id.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn send(&self, req: reqwest::blocking::RequestBuilder) -> Result<Value> {
        let resp = req
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()?;
        into_json(resp)
    }
}

fn into_json(resp: Response) -> Result<Value> {
    let status = resp.status();
    let body: Value = resp.json().unwrap_or(Value::Null);
    if status.is_success() {
        return Ok(body);
    }
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no error message");
    Err(anyhow!("Notion API returned {status}: {message}"))
}

/// Follow `next_cursor` until Notion reports no more pages. A page that
/// claims more results but carries no cursor ends the walk.
fn collect_pages(
    mut fetch: impl FnMut(Option<&str>) -> Result<QueryResponse>,
) -> Result<Vec<JobApplication>> {
    let mut applications = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch(cursor.as_deref())?;
        log::debug!(
            "query page: {} results, has_more={}",
            page.results.len(),
            page.has_more
        );
        applications.extend(page.results.into_iter().filter_map(schema::to_application));

        match (page.has_more, page.next_cursor) {
            (true, Some(next)) => cursor = Some(next),
            _ => break,
        }
    }

    Ok(applications)
}

impl ApplicationStore for NotionClient {
    fn query_open_applications(&self) -> Result<Vec<JobApplication>> {
        let url = self.url(&format!("databases/{}/query", self.database_id));
        collect_pages(|cursor| {
            let body = schema::open_applications_query(cursor);
            let value = self.send(self.http.post(&url).json(&body))?;
            Ok(serde_json::from_value(value)?)
        })
    }

    fn update_status(&self, application_id: &str, status: &str) -> Result<()> {
        let url = self.url(&format!("pages/{application_id}"));
        self.send(self.http.patch(url).json(&schema::status_update(status)))?;
        Ok(())
    }

    fn create_application(&self, app: &NewApplication) -> Result<()> {
        let body = schema::create_page(&self.database_id, app);
        self.send(self.http.post(self.url("pages")).json(&body))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let client = NotionClient::new("https://api.notion.com/v1", "t", "db").unwrap();
        assert_eq!(client.url("pages"), "https://api.notion.com/v1/pages");
    }

    fn response(companies: &[&str], next_cursor: Option<&str>) -> QueryResponse {
        let results: Vec<Value> = companies
            .iter()
            .map(|c| {
                json!({
                    "id": format!("id-{c}"),
                    "properties": {
                        "Company": { "type": "title", "title": [{ "plain_text": c }] },
                        "Status": { "type": "select", "select": { "name": "Applied" } }
                    }
                })
            })
            .collect();
        serde_json::from_value(json!({
            "results": results,
            "has_more": next_cursor.is_some(),
            "next_cursor": next_cursor,
        }))
        .unwrap()
    }

    #[test]
    fn pages_are_followed_until_has_more_is_false() {
        let mut cursors: Vec<Option<String>> = Vec::new();
        let apps = collect_pages(|cursor| {
            cursors.push(cursor.map(str::to_string));
            Ok(match cursor {
                None => response(&["Acme", "Hooli"], Some("cur-2")),
                Some("cur-2") => response(&["Initech"], None),
                Some(other) => panic!("unexpected cursor {other}"),
            })
        })
        .unwrap();

        assert_eq!(cursors, vec![None, Some("cur-2".to_string())]);
        let companies: Vec<&str> = apps.iter().map(|a| a.company.as_str()).collect();
        assert_eq!(companies, vec!["Acme", "Hooli", "Initech"]);
        assert_eq!(apps[2].id, "id-Initech");
    }

    #[test]
    fn has_more_without_cursor_stops() {
        let mut calls = 0;
        let apps = collect_pages(|_| {
            calls += 1;
            Ok(serde_json::from_value(json!({
                "results": [{ "id": "partial" }],
                "has_more": true,
                "next_cursor": null,
            }))?)
        })
        .unwrap();

        assert_eq!(calls, 1);
        assert!(apps.is_empty());
    }

    #[test]
    fn fetch_error_is_propagated() {
        let err = collect_pages(|_| Err(anyhow!("Notion API returned 500: boom"))).unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
