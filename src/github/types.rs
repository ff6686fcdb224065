use serde::Deserialize;

/// Account metadata from `GET /users/{username}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    #[serde(default)]
    pub location: Option<String>,
}

impl Profile {
    /// Single uppercase letter shown in place of the avatar image.
    pub fn initial(&self) -> String {
        self.login
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    #[serde(default)]
    pub language: Option<String>,
}

impl Repository {
    /// The language label, or `None` when GitHub left it null or empty.
    pub fn classified_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_ignores_extra_fields_and_nulls() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "bio": null,
            "public_repos": 8,
            "followers": 20000,
            "following": 9,
            "location": "San Francisco"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.followers, 20000);
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
    }

    #[test]
    fn profile_without_location_key() {
        let json = r#"{
            "login": "ghost",
            "avatar_url": "a",
            "html_url": "h",
            "followers": 0,
            "following": 0
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.location, None);
        assert_eq!(profile.initial(), "G");
    }

    #[test]
    fn repository_renames_counts() {
        let json = r#"[{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": null,
            "stargazers_count": 80,
            "forks_count": 9,
            "language": ""
        }]"#;
        let repos: Vec<Repository> = serde_json::from_str(json).unwrap();
        assert_eq!(repos[0].stars, 80);
        assert_eq!(repos[0].forks, 9);
        assert_eq!(repos[0].language.as_deref(), Some(""));
        assert_eq!(repos[0].classified_language(), None);
    }
}
