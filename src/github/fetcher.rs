use crate::error::FetchError;
use crate::github::transport::{RawResponse, Transport};
use crate::github::types::{Profile, Repository};
use serde::de::DeserializeOwned;
use url::Url;

// Only the path of this URL is used; the host comes from the client.
const PATH_ROOT: &str = "http://api.invalid/";

/// Builds `/users/{username}/...` with the username percent-encoded as one
/// segment, so `?`, `/` or spaces cannot change which endpoint is hit.
fn user_path(username: &str, rest: &[&str]) -> Result<String, FetchError> {
    let mut url = Url::parse(PATH_ROOT).map_err(|e| FetchError::TransportFailure(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::TransportFailure(format!("cannot build path for {username}")))?
        .pop_if_empty()
        .push("users")
        .push(username)
        .extend(rest);
    Ok(url.path().to_string())
}

pub fn profile_path(username: &str) -> Result<String, FetchError> {
    user_path(username, &[])
}

pub fn repos_path(username: &str) -> Result<String, FetchError> {
    user_path(username, &["repos"])
}

/// Fetches a profile and then its repositories.
///
/// The repository list is only requested once the profile read succeeded, and
/// a failed repository read discards the profile: callers get both or neither.
pub async fn fetch_profile<T: Transport + Sync>(
    transport: &T,
    username: &str,
) -> Result<(Profile, Vec<Repository>), FetchError> {
    let path = profile_path(username)?;
    tracing::debug!(username, path = %path, "requesting profile");
    let response = transport.get(&path).await?;
    if !response.is_success() {
        tracing::info!(username, status = response.status, "profile lookup failed");
        return Err(FetchError::ProfileNotFound);
    }
    let profile: Profile = decode(&response)?;

    let path = repos_path(username)?;
    tracing::debug!(username, path = %path, "requesting repositories");
    let response = transport.get(&path).await?;
    if !response.is_success() {
        tracing::info!(username, status = response.status, "repository lookup failed");
        return Err(FetchError::RepositoriesNotFound);
    }
    let repos: Vec<Repository> = decode(&response)?;

    tracing::info!(username, repos = repos.len(), "lookup complete");
    Ok((profile, repos))
}

fn decode<D: DeserializeOwned>(response: &RawResponse) -> Result<D, FetchError> {
    serde_json::from_str(&response.body).map_err(|e| FetchError::MalformedResponse(e.to_string()))
}
