#![cfg(test)]

use crate::error::FetchError;
use crate::github::transport::{RawResponse, Transport};
use crate::github::types::{Profile, Repository};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn make_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{login}"),
        html_url: format!("https://github.com/{login}"),
        bio: Some(format!("{login} writes code")),
        followers: 42,
        following: 7,
        location: None,
    }
}

pub fn make_repo(id: u64, language: Option<&str>) -> Repository {
    Repository {
        id,
        name: format!("repo-{id}"),
        html_url: format!("https://github.com/test/repo-{id}"),
        description: None,
        stars: id * 2,
        forks: id,
        language: language.map(String::from),
    }
}

pub fn make_repos(languages: &[Option<&str>]) -> Vec<Repository> {
    languages
        .iter()
        .enumerate()
        .map(|(i, lang)| make_repo(i as u64 + 1, *lang))
        .collect()
}

/// Answers from a fixed path table and records every request. Unknown paths
/// behave like a dropped connection.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, RawResponse>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::TransportFailure(format!("connection refused: {path}")))
    }
}
