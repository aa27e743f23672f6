//! `TvdbClient` - TVDB v4 catalog client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::{Url, form_urlencoded};

use crate::api::{ApiResult, LocalTvdbApi};
use crate::error::ApiError;
use crate::normalize;
use crate::params::{QueryParams, SearchParams, UpdatesParams};
use crate::schema::{
    ArtworkBaseRecord, ArtworkExtendedRecord, ArtworkStatus, ArtworkType, AwardBaseRecord,
    AwardCategoryBaseRecord, AwardCategoryExtendedRecord, AwardExtendedRecord, Character, Company,
    CompanyType, ContentRating, Country, EntityType, EntityUpdate, EpisodeBaseRecord,
    EpisodeExtendedRecord, Gender, GenreBaseRecord, Language, ListBaseRecord, ListExtendedRecord,
    MovieBaseRecord, MovieExtendedRecord, PeopleBaseRecord, PeopleType, PersonExtendedRecord,
    SearchResult, SeasonBaseRecord, SeasonExtendedRecord, SeasonType, SeriesBaseRecord,
    SeriesEpisodes, SeriesExtendedRecord, SourceType, Status, Translation, raw,
};
use crate::session::{Session, SessionBuilder};

/// Season type used by `series_episodes` when none is given.
pub const DEFAULT_SEASON_TYPE: &str = "default";

/// Percent-encodes `value` as a single path segment.
///
/// Reserved characters such as `/` and `?` are escaped so the value cannot
/// change the resolved endpoint. Empty, `.` and `..` are rejected.
fn path_segment(value: &str) -> ApiResult<String> {
    if matches!(value, "" | "." | "..") {
        return Err(ApiError::PathSegment(String::from(value)));
    }
    // byte_serialize escapes a literal '+', so every '+' left is a space.
    Ok(form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

/// TVDB v4 catalog client.
///
/// Owns the API key and one [`Session`]. `auto_relogin` records whether the
/// caller wants to log in again after a 401; the client itself never retries.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClient {
    /// API key sent on login.
    api_key: String,
    /// Whether callers should log in again on a 401.
    auto_relogin: bool,
    /// Token holder and request executor.
    session: Session,
}

/// Builder for `TvdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClientBuilder {
    api_key: Option<String>,
    auto_relogin: bool,
    session: SessionBuilder,
}

impl TvdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            auto_relogin: true,
            session: Session::builder(),
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.session = self.session.base_url(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.session = self.session.user_agent(ua);
        self
    }

    /// Sets whether callers should log in again on a 401 (default: true).
    #[must_use]
    pub const fn auto_relogin(mut self, enabled: bool) -> Self {
        self.auto_relogin = enabled;
        self
    }

    /// Sets the whole-request timeout (default: 30s).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.session = self.session.timeout(timeout);
        self
    }

    /// Sets the connect timeout (default: 10s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.session = self.session.connect_timeout(timeout);
        self
    }

    /// Refuses plain-HTTP URLs when set.
    #[must_use]
    pub fn https_only(mut self, enabled: bool) -> Self {
        self.session = self.session.https_only(enabled);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let session = self.session.build()?;

        Ok(TvdbClient {
            api_key,
            auto_relogin: self.auto_relogin,
            session,
        })
    }
}

impl TvdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvdbClientBuilder {
        TvdbClientBuilder::new()
    }

    /// Whether callers should log in again after a 401.
    #[must_use]
    pub const fn auto_relogin(&self) -> bool {
        self.auto_relogin
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a GET request without query parameters.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.session.get(path, &QueryParams::new()).await
    }

    /// Sends a GET request with `page` set.
    async fn get_page<T: DeserializeOwned>(&self, path: &str, page: u32) -> ApiResult<T> {
        let query = QueryParams::new().set("page", page);
        self.session.get(path, &query).await
    }

    /// Sends a GET request for an extended record, with `meta` when non-empty.
    async fn get_extended<T: DeserializeOwned>(
        &self,
        path: &str,
        meta: Option<&str>,
    ) -> ApiResult<T> {
        let query = QueryParams::new().set_opt("meta", meta.filter(|m| !m.is_empty()));
        self.session.get(path, &query).await
    }
}

impl LocalTvdbApi for TvdbClient {
    #[instrument(skip_all)]
    async fn login(&self, pin: Option<&str>) -> ApiResult<()> {
        self.session
            .login(&self.api_key, pin.filter(|p| !p.is_empty()))
            .await
    }

    #[instrument(skip_all)]
    async fn artwork_statuses(&self) -> ApiResult<Vec<ArtworkStatus>> {
        self.get("artwork/statuses").await
    }

    #[instrument(skip_all)]
    async fn artwork_types(&self) -> ApiResult<Vec<ArtworkType>> {
        self.get("artwork/types").await
    }

    #[instrument(skip_all)]
    async fn artwork(&self, id: u64) -> ApiResult<ArtworkBaseRecord> {
        self.get(&format!("artwork/{id}")).await
    }

    #[instrument(skip_all)]
    async fn artwork_extended(&self, id: u64) -> ApiResult<ArtworkExtendedRecord> {
        let res: raw::ArtworkExtendedRecord = self.get(&format!("artwork/{id}/extended")).await?;
        Ok(normalize::artwork_extended(res))
    }

    #[instrument(skip_all)]
    async fn artwork_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("artwork/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn award_category(&self, id: u64) -> ApiResult<AwardCategoryBaseRecord> {
        self.get(&format!("awards/categories/{id}")).await
    }

    #[instrument(skip_all)]
    async fn award_category_extended(&self, id: u64) -> ApiResult<AwardCategoryExtendedRecord> {
        let res: raw::AwardCategoryExtendedRecord = self
            .get(&format!("awards/categories/{id}/extended"))
            .await?;
        Ok(normalize::award_category(res))
    }

    #[instrument(skip_all)]
    async fn all_awards(&self) -> ApiResult<Vec<AwardBaseRecord>> {
        self.get("awards").await
    }

    #[instrument(skip_all)]
    async fn award(&self, id: u64) -> ApiResult<AwardBaseRecord> {
        self.get(&format!("awards/{id}")).await
    }

    #[instrument(skip_all)]
    async fn award_extended(&self, id: u64) -> ApiResult<AwardExtendedRecord> {
        self.get(&format!("awards/{id}/extended")).await
    }

    #[instrument(skip_all)]
    async fn character(&self, id: u64) -> ApiResult<Character> {
        let res: raw::Character = self.get(&format!("characters/{id}")).await?;
        Ok(normalize::character(res))
    }

    #[instrument(skip_all)]
    async fn all_companies(&self, page: u32) -> ApiResult<Vec<Company>> {
        let res: Vec<raw::Company> = self.get_page("companies", page).await?;
        Ok(res.into_iter().map(normalize::company).collect())
    }

    #[instrument(skip_all)]
    async fn company_types(&self) -> ApiResult<Vec<CompanyType>> {
        self.get("companies/types").await
    }

    #[instrument(skip_all)]
    async fn company(&self, id: u64) -> ApiResult<Company> {
        let res: raw::Company = self.get(&format!("companies/{id}")).await?;
        Ok(normalize::company(res))
    }

    #[instrument(skip_all)]
    async fn content_ratings(&self) -> ApiResult<Vec<ContentRating>> {
        self.get("content/ratings").await
    }

    #[instrument(skip_all)]
    async fn countries(&self) -> ApiResult<Vec<Country>> {
        self.get("countries").await
    }

    #[instrument(skip_all)]
    async fn entity_types(&self) -> ApiResult<Vec<EntityType>> {
        self.get("entities/types").await
    }

    #[instrument(skip_all)]
    async fn genders(&self) -> ApiResult<Vec<Gender>> {
        self.get("genders").await
    }

    #[instrument(skip_all)]
    async fn languages(&self) -> ApiResult<Vec<Language>> {
        self.get("languages").await
    }

    #[instrument(skip_all)]
    async fn source_types(&self) -> ApiResult<Vec<SourceType>> {
        self.get("sources/types").await
    }

    #[instrument(skip_all)]
    async fn episode(&self, id: u64) -> ApiResult<EpisodeBaseRecord> {
        let res: raw::EpisodeBaseRecord = self.get(&format!("episodes/{id}")).await?;
        Ok(normalize::episode_base(res))
    }

    #[instrument(skip_all)]
    async fn episode_extended(
        &self,
        id: u64,
        meta: Option<&str>,
    ) -> ApiResult<EpisodeExtendedRecord> {
        let res: raw::EpisodeExtendedRecord = self
            .get_extended(&format!("episodes/{id}/extended"), meta)
            .await?;
        Ok(normalize::episode_extended(res))
    }

    #[instrument(skip_all)]
    async fn episode_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("episodes/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn all_genres(&self) -> ApiResult<Vec<GenreBaseRecord>> {
        self.get("genres").await
    }

    #[instrument(skip_all)]
    async fn genre(&self, id: u64) -> ApiResult<GenreBaseRecord> {
        self.get(&format!("genres/{id}")).await
    }

    #[instrument(skip_all)]
    async fn all_lists(&self, page: u32) -> ApiResult<Vec<ListBaseRecord>> {
        let res: Vec<raw::ListBaseRecord> = self.get_page("lists", page).await?;
        Ok(res.into_iter().map(normalize::list_record).collect())
    }

    #[instrument(skip_all)]
    async fn list(&self, id: u64) -> ApiResult<ListBaseRecord> {
        let res: raw::ListBaseRecord = self.get(&format!("lists/{id}")).await?;
        Ok(normalize::list_record(res))
    }

    #[instrument(skip_all)]
    async fn list_extended(&self, id: u64) -> ApiResult<ListExtendedRecord> {
        let res: raw::ListExtendedRecord = self.get(&format!("lists/{id}/extended")).await?;
        Ok(normalize::list_extended(res))
    }

    #[instrument(skip_all)]
    async fn all_movies(&self, page: u32) -> ApiResult<Vec<MovieBaseRecord>> {
        let res: Vec<raw::MovieBaseRecord> = self.get_page("movies", page).await?;
        Ok(res.into_iter().map(normalize::movie_base).collect())
    }

    #[instrument(skip_all)]
    async fn movie(&self, id: u64) -> ApiResult<MovieBaseRecord> {
        let res: raw::MovieBaseRecord = self.get(&format!("movies/{id}")).await?;
        Ok(normalize::movie_base(res))
    }

    #[instrument(skip_all)]
    async fn movie_extended(&self, id: u64, meta: Option<&str>) -> ApiResult<MovieExtendedRecord> {
        let res: raw::MovieExtendedRecord = self
            .get_extended(&format!("movies/{id}/extended"), meta)
            .await?;
        Ok(normalize::movie_extended(res))
    }

    #[instrument(skip_all)]
    async fn movie_statuses(&self) -> ApiResult<Vec<Status>> {
        self.get("movies/statuses").await
    }

    #[instrument(skip_all)]
    async fn movie_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("movies/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn person_types(&self) -> ApiResult<Vec<PeopleType>> {
        self.get("people/types").await
    }

    #[instrument(skip_all)]
    async fn person(&self, id: u64) -> ApiResult<PeopleBaseRecord> {
        self.get(&format!("people/{id}")).await
    }

    #[instrument(skip_all)]
    async fn person_extended(&self, id: u64) -> ApiResult<PersonExtendedRecord> {
        let res: raw::PersonExtendedRecord = self.get(&format!("people/{id}/extended")).await?;
        Ok(normalize::person_extended(res))
    }

    #[instrument(skip_all)]
    async fn person_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("people/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn search(&self, params: &SearchParams) -> ApiResult<Vec<SearchResult>> {
        let res: Vec<raw::SearchResult> = self.session.get("search", &params.to_query()).await?;
        Ok(res.into_iter().map(normalize::search_result).collect())
    }

    #[instrument(skip_all)]
    async fn season(&self, id: u64) -> ApiResult<SeasonBaseRecord> {
        let res: raw::SeasonBaseRecord = self.get(&format!("seasons/{id}")).await?;
        Ok(normalize::season_base(res))
    }

    #[instrument(skip_all)]
    async fn season_extended(&self, id: u64) -> ApiResult<SeasonExtendedRecord> {
        let res: raw::SeasonExtendedRecord = self.get(&format!("seasons/{id}/extended")).await?;
        Ok(normalize::season_extended(res))
    }

    #[instrument(skip_all)]
    async fn season_types(&self) -> ApiResult<Vec<SeasonType>> {
        self.get("seasons/types").await
    }

    #[instrument(skip_all)]
    async fn season_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("seasons/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn all_series(&self, page: u32) -> ApiResult<Vec<SeriesBaseRecord>> {
        let res: Vec<raw::SeriesBaseRecord> = self.get_page("series", page).await?;
        Ok(res.into_iter().map(normalize::series_base).collect())
    }

    #[instrument(skip_all)]
    async fn series(&self, id: u64) -> ApiResult<SeriesBaseRecord> {
        let res: raw::SeriesBaseRecord = self.get(&format!("series/{id}")).await?;
        Ok(normalize::series_base(res))
    }

    #[instrument(skip_all)]
    async fn series_extended(
        &self,
        id: u64,
        meta: Option<&str>,
    ) -> ApiResult<SeriesExtendedRecord> {
        let res: raw::SeriesExtendedRecord = self
            .get_extended(&format!("series/{id}/extended"), meta)
            .await?;
        Ok(normalize::series_extended(res))
    }

    #[instrument(skip_all)]
    async fn series_episodes(
        &self,
        id: u64,
        season_type: &str,
        page: u32,
    ) -> ApiResult<SeriesEpisodes> {
        let query = QueryParams::new()
            .set("page", page)
            .set("season-type", season_type);
        let segment = path_segment(season_type)?;
        let res: raw::SeriesEpisodes = self
            .session
            .get(&format!("series/{id}/episodes/{segment}"), &query)
            .await?;
        Ok(normalize::series_episodes(res))
    }

    #[instrument(skip_all)]
    async fn series_translations(&self, id: u64, language: &str) -> ApiResult<Translation> {
        let language = path_segment(language)?;
        self.get(&format!("series/{id}/translations/{language}"))
            .await
    }

    #[instrument(skip_all)]
    async fn series_statuses(&self) -> ApiResult<Vec<Status>> {
        self.get("series/statuses").await
    }

    #[instrument(skip_all)]
    async fn updates(&self, params: &UpdatesParams) -> ApiResult<Vec<EntityUpdate>> {
        let res: Vec<raw::EntityUpdate> = self.session.get("updates", &params.to_query()).await?;
        Ok(res.into_iter().map(normalize::entity_update).collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::schema::CompanyGroup;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn client(server: &MockServer) -> TvdbClient {
        TvdbClient::builder()
            .base_url(format!("{}/v4/", server.uri()).parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    async fn mount_fixture(server: &MockServer, p: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_builder_requires_api_key() {
        // Arrange & Act
        let result = TvdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("api_key is required")
        );
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = TvdbClient::builder().api_key("test-key").build();

        // Assert
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_auto_relogin_defaults_to_true() {
        // Arrange & Act
        let default = TvdbClient::builder()
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let disabled = TvdbClient::builder()
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .auto_relogin(false)
            .build()
            .unwrap();

        // Assert
        assert!(default.auto_relogin());
        assert!(!disabled.auto_relogin());
    }

    #[tokio::test]
    async fn test_login_then_request_sends_bearer_token() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/login"))
            .and(body_json(json!({"apikey": "test-key"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(include_str!("../../../fixtures/tvdb/login.json")),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v4/genres/6"))
            .and(header(
                "Authorization",
                "Bearer eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.test-token",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"status": "success", "data": {"id": 6, "name": "Crime", "slug": "crime"}}),
            ))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        client.login(Some("")).await.unwrap();
        let genre = client.genre(6).await.unwrap();

        // Assert
        assert_eq!(genre.name, "Crime");
    }

    #[tokio::test]
    async fn test_unauthorized_is_reported() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/series/81189"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"status": "failure", "message": "Unauthorized"})),
            )
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let err = client.series(81_189).await.unwrap_err();

        // Assert
        assert!(err.is_unauthorized());
        assert!(client.auto_relogin());
    }

    #[tokio::test]
    async fn test_series_extended_is_normalized() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/series/81189/extended",
            include_str!("../../../fixtures/tvdb/series_extended_81189.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let series = client.series_extended(81_189, None).await.unwrap();

        // Assert
        assert_eq!(series.base.name, "Breaking Bad");
        assert_eq!(series.base.first_aired, Some(ymd(2008, 1, 20)));
        assert_eq!(series.base.next_aired, None);
        assert_eq!(
            series.base.last_updated,
            Some(Utc.with_ymd_and_hms(2024, 2, 17, 8, 23, 36).unwrap())
        );
        assert_eq!(series.characters[0].movie_id, None);
        assert_eq!(series.characters[1].image, None);
        assert_eq!(series.characters[1].episode_id, None);
        assert_eq!(
            series.companies.studio[0].active_date,
            Some(ymd(1991, 7, 21))
        );
        assert_eq!(series.companies.studio[0].inactive_date, None);
        assert!(series.companies.production.is_empty());
        assert_eq!(series.companies.special_effects[0].name, "Stargate Studios");
        assert!(series.seasons[0].companies.special_effects.is_empty());
        assert_eq!(series.remote_ids[0].id, "tt0903747");
    }

    #[tokio::test]
    async fn test_extended_meta_is_sent_only_when_non_empty() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../fixtures/tvdb/movie_extended_106.json");
        Mock::given(method("GET"))
            .and(path("/v4/movies/106/extended"))
            .and(query_param("meta", "translations"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v4/movies/106/extended"))
            .and(query_param_is_missing("meta"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(2)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let with_meta = client
            .movie_extended(106, Some("translations"))
            .await
            .unwrap();
        client.movie_extended(106, Some("")).await.unwrap();
        client.movie_extended(106, None).await.unwrap();

        // Assert
        assert_eq!(with_meta.base.name, "Inception");
    }

    #[tokio::test]
    async fn test_movie_extended_is_normalized() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/movies/106/extended",
            include_str!("../../../fixtures/tvdb/movie_extended_106.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let movie = client.movie_extended(106, None).await.unwrap();

        // Assert
        assert_eq!(movie.budget, 160_000_000.0);
        assert_eq!(movie.box_office, 836_836_967.0);
        assert_eq!(
            movie.first_release.as_ref().unwrap().date,
            Some(ymd(2010, 7, 8))
        );
        assert_eq!(movie.releases[0].date, Some(ymd(2010, 7, 16)));
        assert_eq!(movie.releases[1].date, None);
        assert_eq!(movie.companies.special_effects[0].name, "Double Negative");
        assert!(movie.companies.network.is_empty());
        assert_eq!(movie.lists[0].url, None);
        assert_eq!(movie.characters[0].series_id, None);
    }

    #[tokio::test]
    async fn test_episode_extended_is_normalized() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/episodes/349232/extended",
            include_str!("../../../fixtures/tvdb/episode_extended_349232.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let episode = client.episode_extended(349_232, None).await.unwrap();

        // Assert
        assert_eq!(episode.base.aired, Some(ymd(2008, 1, 20)));
        assert_eq!(episode.base.seasons[0].kind.as_ref().unwrap().kind, "official");
        assert!(episode.base.seasons[0].companies.studio.is_empty());
        let network = episode.networks.unwrap();
        assert_eq!(network.active_date, Some(ymd(1984, 10, 1)));
        assert_eq!(network.inactive_date, None);
        assert_eq!(episode.studios, None);
        assert_eq!(episode.characters[0].movie_id, None);
        assert_eq!(episode.characters[0].episode_id, Some(349_232));
    }

    #[tokio::test]
    async fn test_episode_extended_tolerates_empty_and_null_shapes() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/episodes/4386014/extended",
            include_str!("../../../fixtures/tvdb/episode_extended_4386014.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let episode = client.episode_extended(4_386_014, None).await.unwrap();

        // Assert
        assert_eq!(episode.base.name, None);
        assert_eq!(episode.base.aired, None);
        assert_eq!(episode.base.is_movie, 0);
        assert_eq!(episode.networks, None);
        assert_eq!(episode.studios, None);
        assert_eq!(episode.network, None);
        assert_eq!(episode.translations, None);
        let season = &episode.base.seasons[0];
        assert_eq!(season.kind, None);
        assert_eq!(season.number, 0);
        assert_eq!(season.companies, CompanyGroup::default());
        let character = &episode.characters[0];
        assert!(!character.is_featured);
        assert_eq!(character.sort, 0);
        assert_eq!(character.series_id, None);
        assert_eq!(character.image, None);
        assert!(episode.remote_ids.is_empty());
    }

    #[tokio::test]
    async fn test_path_parameters_are_escaped() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/series/1/translations/eng%2F..%2F..%2Fx%3Fa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"language": "eng", "name": "n", "isAlias": false, "isPrimary": true}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v4/series/1/episodes/dvd%20order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {"series": {"id": 1, "name": "s"}, "episodes": []}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let translation = client
            .series_translations(1, "eng/../../x?a")
            .await
            .unwrap();
        let page = client.series_episodes(1, "dvd order", 0).await.unwrap();

        // Assert
        assert_eq!(translation.language, "eng");
        assert_eq!(page.series.id, 1);
    }

    #[tokio::test]
    async fn test_dot_path_parameters_are_rejected() {
        // Arrange
        let server = MockServer::start().await;
        let client = client(&server);

        // Act
        let dots = client.movie_translations(1, "..").await.unwrap_err();
        let empty = client.series_episodes(1, "", 0).await.unwrap_err();

        // Assert
        assert!(matches!(dots, ApiError::PathSegment(ref v) if v == ".."));
        assert!(matches!(empty, ApiError::PathSegment(ref v) if v.is_empty()));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_series_episodes_sends_page_and_season_type() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/series/81189/episodes/default"))
            .and(query_param("page", "0"))
            .and(query_param("season-type", "default"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../fixtures/tvdb/series_episodes_81189.json"
            )))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let page = client
            .series_episodes(81_189, DEFAULT_SEASON_TYPE, 0)
            .await
            .unwrap();

        // Assert
        assert_eq!(page.series.first_aired, Some(ymd(2008, 1, 20)));
        assert_eq!(page.episodes.len(), 2);
        assert_eq!(page.episodes[1].aired, Some(ymd(2008, 1, 27)));
        assert_eq!(page.episodes[1].last_updated, None);
    }

    #[tokio::test]
    async fn test_search_sends_params_and_normalizes_results() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/search"))
            .and(query_param("query", "breaking bad"))
            .and(query_param("type", "series"))
            .and(query_param("limit", "5"))
            .and(query_param_is_missing("year"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
                "../../../fixtures/tvdb/search_breaking_bad.json"
            )))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);
        let params = SearchParams::new("breaking bad").kind("series").limit(5);

        // Act
        let results = client.search(&params).await.unwrap();

        // Assert
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].tvdb_id, Some(81_189));
        assert_eq!(results[0].year, Some(2008));
        assert_eq!(results[1].tvdb_id, Some(2813));
        assert_eq!(results[1].year, None);
        assert_eq!(results[1].image_url, None);
        assert_eq!(results[1].network, None);
    }

    #[tokio::test]
    async fn test_updates_sends_since_and_normalizes_timestamps() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/updates"))
            .and(query_param("since", "1700000000"))
            .and(query_param("action", "update"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(include_str!("../../../fixtures/tvdb/updates.json")),
            )
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);
        let params = UpdatesParams::new(1_700_000_000).action("update");

        // Act
        let updates = client.updates(&params).await.unwrap();

        // Assert
        assert_eq!(updates[0].record_id, 81_189);
        assert_eq!(
            updates[0].time_stamp,
            Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        );
        assert_eq!(updates[1].method, "create");
    }

    #[tokio::test]
    async fn test_person_extended_is_normalized() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/people/255001/extended",
            include_str!("../../../fixtures/tvdb/person_extended_255001.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let person = client.person_extended(255_001).await.unwrap();

        // Assert
        assert_eq!(person.base.name, "Bryan Cranston");
        assert_eq!(person.birth, Some(ymd(1956, 3, 7)));
        assert_eq!(person.death, None);
        assert_eq!(person.characters[0].movie_id, None);
    }

    #[tokio::test]
    async fn test_award_category_extended_is_normalized() {
        // Arrange
        let server = MockServer::start().await;
        mount_fixture(
            &server,
            "/v4/awards/categories/1/extended",
            include_str!("../../../fixtures/tvdb/award_category_extended_1.json"),
        )
        .await;
        let client = client(&server);

        // Act
        let category = client.award_category_extended(1).await.unwrap();

        // Assert
        assert_eq!(category.base.award.name, "Primetime Emmy Awards");
        let winner = &category.nominees[0];
        assert_eq!(winner.year, Some(2013));
        assert_eq!(
            winner.series.as_ref().unwrap().last_aired,
            Some(ymd(2013, 9, 29))
        );
        assert_eq!(winner.movie, None);
        let nominee = &category.nominees[1];
        assert_eq!(nominee.year, None);
        assert_eq!(
            nominee.episode.as_ref().unwrap().aired,
            Some(ymd(2008, 1, 20))
        );
        assert_eq!(nominee.character.as_ref().unwrap().movie_id, None);
    }

    #[tokio::test]
    async fn test_paged_listing_sends_page() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/companies"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": [{"id": 139, "name": "AMC", "activeDate": "1984-10-01", "inactiveDate": ""}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let companies = client.all_companies(3).await.unwrap();

        // Assert
        assert_eq!(companies[0].active_date, Some(ymd(1984, 10, 1)));
        assert_eq!(companies[0].inactive_date, None);
    }
}
