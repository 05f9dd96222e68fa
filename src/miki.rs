use crate::{
    client::{build_http, send_json, trim_base},
    error::Error,
    models::leaderboards::{LeaderboardsObject, LeaderboardsOptions, UserInventory},
    result::Result,
};
use reqwest::{header::AUTHORIZATION, Client as ReqwestClient};

const BASE_URL: &str = "https://api.miki.ai";
const WEBSITE_URL: &str = "https://miki.ai";

/// Authorized client for the Miki leaderboards API.
#[derive(Debug)]
pub struct MikiApiClient {
    http: ReqwestClient,
    base_url: String,
}

impl MikiApiClient {
    /// Creates a client authorized with the bearer `token`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidArgument`] if the token is empty or cannot
    /// be sent as a header.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Same as [`MikiApiClient::new`] but against another API host.
    ///
    /// # Errors
    ///
    /// See [`MikiApiClient::new`].
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::InvalidArgument("token must not be empty".to_string()));
        }
        let bearer = format!("Bearer {token}");
        let http = build_http([(AUTHORIZATION, bearer.as_str())])?;
        Ok(Self {
            http,
            base_url: trim_base(base_url.into()),
        })
    }

    /// Returns the API host requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the link to the leaderboards page on the Miki website.
    pub fn leaderboards_url(&self, options: &LeaderboardsOptions) -> String {
        format!("{WEBSITE_URL}{}", options.route())
    }

    /// Fetches one page of a leaderboard.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Response`] on a non-success status, or if the
    /// request or body decoding fails.
    pub async fn paged_leaderboards(
        &self,
        options: &LeaderboardsOptions,
    ) -> Result<LeaderboardsObject> {
        let url = format!("{}{}", self.base_url, options.route());
        log::info!("request for {} dispatched", url);
        send_json(self.http.get(&url)).await
    }

    /// Fetches the inventory of the user with the given ID.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Response`] on a non-success status, or if the
    /// request or body decoding fails.
    pub async fn user_inventory(&self, id: u64) -> Result<UserInventory> {
        let url = format!("{}/users/{id}/inventory", self.base_url);
        log::info!("request for {} dispatched", url);
        send_json(self.http.get(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::MikiApiClient;
    use crate::{
        error::Error,
        models::leaderboards::{LeaderboardsOptions, LeaderboardsType},
    };

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(MikiApiClient::new(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(MikiApiClient::new("   "), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let client = MikiApiClient::new("supersecrettoken").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("supersecrettoken"));
        assert!(debug.contains("api.miki.ai"));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = MikiApiClient::with_base_url("t", "https://api.miki.ai/").unwrap();
        assert_eq!(client.base_url(), "https://api.miki.ai");
    }

    #[test]
    fn website_url() {
        let client = MikiApiClient::new("t").unwrap();
        let options = LeaderboardsOptions::new(LeaderboardsType::Reputation).guild(42);
        assert_eq!(
            client.leaderboards_url(&options),
            "https://miki.ai/leaderboards/42/reputation?amount=12&offset=0"
        );
    }
}
