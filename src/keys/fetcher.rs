/// Key collection: resolve the member list, then gather each member's keys.
use crate::github::{GithubClient, Member, PublicKey, Team};

use super::errors::FetchError;

/// Collects public SSH keys for an organization or one of its teams.
pub struct KeyFetcher {
    client: GithubClient,
}

impl KeyFetcher {
    /// Wrap an API client.
    #[must_use]
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Collect the public SSH keys of every member, in API order.
    ///
    /// With a team, only that team's members are considered; otherwise the
    /// organization's public members are. Keys are appended member by member
    /// in the order the API lists them, without deduplication. Requests run
    /// one at a time.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::TeamNotFound` if `team` matches no team in the
    /// organization, or `FetchError::Api` if any request fails.
    pub async fn collect_keys(
        &self,
        org: &str,
        team: Option<&str>,
    ) -> Result<Vec<String>, FetchError> {
        let members = self.resolve_members(org, team).await?;
        tracing::debug!("collecting keys from {} members", members.len());

        let mut keys = Vec::new();
        for member in &members {
            let fetched = self.fetch_keys(member).await?;
            keys.extend(fetched.into_iter().map(|record| record.key));
        }
        Ok(keys)
    }

    /// Fetch one member's public keys. A member with none yields an empty
    /// list, not an error.
    async fn fetch_keys(&self, member: &Member) -> Result<Vec<PublicKey>, FetchError> {
        tracing::info!("fetching keys for {}", member.login);
        Ok(self.client.user_keys(&member.login).await?)
    }

    /// Resolve the member list: the whole organization, or one team's slice
    /// of it.
    async fn resolve_members(
        &self,
        org: &str,
        team: Option<&str>,
    ) -> Result<Vec<Member>, FetchError> {
        let Some(wanted) = team else {
            return Ok(self.client.org_members(org).await?);
        };

        let teams = self.client.org_teams(org).await?;
        let Some(team) = find_team(&teams, wanted) else {
            return Err(FetchError::TeamNotFound {
                org: org.to_owned(),
                team: wanted.to_owned(),
            });
        };
        Ok(self.client.team_members(team.id).await?)
    }
}

/// Find the first team whose slug or name equals `wanted`.
///
/// Comparison is exact and case-sensitive; with duplicate names the team the
/// API lists first wins.
fn find_team<'a>(teams: &'a [Team], wanted: &str) -> Option<&'a Team> {
    teams
        .iter()
        .find(|team| team.slug == wanted || team.name == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team(id: u64, name: &str, slug: &str) -> Team {
        Team {
            id,
            name: name.to_owned(),
            slug: slug.to_owned(),
        }
    }

    fn fetcher(server: &MockServer) -> KeyFetcher {
        KeyFetcher::new(GithubClient::with_base_url(None, server.uri()).unwrap())
    }

    async fn mock_get(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_find_team_matches_slug_or_name() {
        let teams = vec![team(1, "Platform Team", "platform"), team(2, "Ops", "ops")];
        assert_eq!(find_team(&teams, "platform").map(|t| t.id), Some(1));
        assert_eq!(find_team(&teams, "Platform Team").map(|t| t.id), Some(1));
        assert_eq!(find_team(&teams, "Ops").map(|t| t.id), Some(2));
    }

    #[test]
    fn test_find_team_is_case_sensitive() {
        let teams = vec![team(1, "Platform", "platform")];
        assert!(find_team(&teams, "PLATFORM").is_none());
        assert!(find_team(&teams, "platForm").is_none());
    }

    #[test]
    fn test_find_team_first_match_wins() {
        let teams = vec![team(1, "dup", "one"), team(2, "dup", "two")];
        assert_eq!(find_team(&teams, "dup").map(|t| t.id), Some(1));
    }

    #[tokio::test]
    async fn test_collects_keys_in_member_then_key_order() {
        let server = MockServer::start().await;
        mock_get(
            &server,
            "/orgs/octo/members",
            json!([{"login": "alice"}, {"login": "bob"}]),
        )
        .await;
        mock_get(
            &server,
            "/users/alice/keys",
            json!([{"id": 1, "key": "ssh-rsa AAAA-alice"}]),
        )
        .await;
        mock_get(
            &server,
            "/users/bob/keys",
            json!([
                {"id": 2, "key": "ssh-rsa BBBB-bob-1"},
                {"id": 3, "key": "ssh-ed25519 CCCC-bob-2"}
            ]),
        )
        .await;

        let keys = fetcher(&server).collect_keys("octo", None).await.unwrap();
        assert_eq!(
            keys,
            vec![
                "ssh-rsa AAAA-alice",
                "ssh-rsa BBBB-bob-1",
                "ssh-ed25519 CCCC-bob-2"
            ]
        );
    }

    #[tokio::test]
    async fn test_member_without_keys_contributes_nothing() {
        let server = MockServer::start().await;
        mock_get(
            &server,
            "/orgs/octo/members",
            json!([{"login": "alice"}, {"login": "bob"}]),
        )
        .await;
        mock_get(&server, "/users/alice/keys", json!([])).await;
        mock_get(
            &server,
            "/users/bob/keys",
            json!([{"id": 2, "key": "ssh-rsa BBBB-bob"}]),
        )
        .await;

        let keys = fetcher(&server).collect_keys("octo", None).await.unwrap();
        assert_eq!(keys, vec!["ssh-rsa BBBB-bob"]);
    }

    #[tokio::test]
    async fn test_team_scopes_members_and_skips_org_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/octo/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"login": "mallory"}])))
            .expect(0)
            .mount(&server)
            .await;
        mock_get(
            &server,
            "/orgs/octo/teams",
            json!([{"id": 7, "name": "Platform Team", "slug": "platform"}]),
        )
        .await;
        mock_get(&server, "/teams/7/members", json!([{"login": "carol"}])).await;
        mock_get(
            &server,
            "/users/carol/keys",
            json!([{"id": 9, "key": "ssh-ed25519 DDDD-carol"}]),
        )
        .await;

        let keys = fetcher(&server)
            .collect_keys("octo", Some("platform"))
            .await
            .unwrap();
        assert_eq!(keys, vec!["ssh-ed25519 DDDD-carol"]);
    }

    #[tokio::test]
    async fn test_team_resolves_by_display_name() {
        let server = MockServer::start().await;
        mock_get(
            &server,
            "/orgs/octo/teams",
            json!([{"id": 7, "name": "Platform Team", "slug": "platform"}]),
        )
        .await;
        mock_get(&server, "/teams/7/members", json!([{"login": "carol"}])).await;
        mock_get(
            &server,
            "/users/carol/keys",
            json!([{"id": 9, "key": "ssh-ed25519 DDDD-carol"}]),
        )
        .await;

        let keys = fetcher(&server)
            .collect_keys("octo", Some("Platform Team"))
            .await
            .unwrap();
        assert_eq!(keys, vec!["ssh-ed25519 DDDD-carol"]);
    }

    #[tokio::test]
    async fn test_unknown_team_stops_before_member_requests() {
        let server = MockServer::start().await;
        mock_get(
            &server,
            "/orgs/octo/teams",
            json!([{"id": 7, "name": "Platform", "slug": "platform"}]),
        )
        .await;

        let err = fetcher(&server)
            .collect_keys("octo", Some("PLATFORM"))
            .await
            .unwrap_err();
        assert!(matches!(
            &err,
            FetchError::TeamNotFound { org, team } if org == "octo" && team == "PLATFORM"
        ));
        assert_eq!(err.exit_code(), 1);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_api_failure_surfaces_as_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/octo/members"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "API rate limit exceeded",
                "documentation_url": "https://docs.github.com/rest/overview"
            })))
            .mount(&server)
            .await;

        let err = fetcher(&server).collect_keys("octo", None).await.unwrap_err();
        assert!(matches!(err, FetchError::Api(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("API rate limit exceeded"));
    }
}
