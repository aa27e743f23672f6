//! `TvdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::ApiError;
use crate::params::{SearchParams, UpdatesParams};
use crate::schema::{
    ArtworkBaseRecord, ArtworkExtendedRecord, ArtworkStatus, ArtworkType, AwardBaseRecord,
    AwardCategoryBaseRecord, AwardCategoryExtendedRecord, AwardExtendedRecord, Character, Company,
    CompanyType, ContentRating, Country, EntityType, EntityUpdate, EpisodeBaseRecord,
    EpisodeExtendedRecord, Gender, GenreBaseRecord, Language, ListBaseRecord, ListExtendedRecord,
    MovieBaseRecord, MovieExtendedRecord, PeopleBaseRecord, PeopleType, PersonExtendedRecord,
    SearchResult, SeasonBaseRecord, SeasonExtendedRecord, SeasonType, SeriesBaseRecord,
    SeriesEpisodes, SeriesExtendedRecord, SourceType, Status, Translation,
};

/// Result type of every catalog operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// TVDB v4 catalog API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every operation performs one request. Operations returning records with
/// dates, money or optional relations return the normalized canonical form.
///
/// # Errors
///
/// Every operation returns [`ApiError`] when the request fails, the server
/// answers with a non-200 status, or the payload does not have the expected
/// shape.
#[allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#[trait_variant::make(TvdbApi: Send)]
pub trait LocalTvdbApi {
    /// Logs in with the configured API key and an optional subscriber pin.
    async fn login(&self, pin: Option<&str>) -> ApiResult<()>;

    // Artwork

    /// Retrieves all artwork statuses.
    async fn artwork_statuses(&self) -> ApiResult<Vec<ArtworkStatus>>;

    /// Retrieves all artwork types.
    async fn artwork_types(&self) -> ApiResult<Vec<ArtworkType>>;

    /// Retrieves an artwork record.
    async fn artwork(&self, id: u64) -> ApiResult<ArtworkBaseRecord>;

    /// Retrieves an extended artwork record.
    async fn artwork_extended(&self, id: u64) -> ApiResult<ArtworkExtendedRecord>;

    /// Retrieves the translation of an artwork record.
    async fn artwork_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    // Awards

    /// Retrieves an award category.
    async fn award_category(&self, id: u64) -> ApiResult<AwardCategoryBaseRecord>;

    /// Retrieves an extended award category with its nominees.
    async fn award_category_extended(&self, id: u64) -> ApiResult<AwardCategoryExtendedRecord>;

    /// Retrieves all awards.
    async fn all_awards(&self) -> ApiResult<Vec<AwardBaseRecord>>;

    /// Retrieves an award.
    async fn award(&self, id: u64) -> ApiResult<AwardBaseRecord>;

    /// Retrieves an extended award.
    async fn award_extended(&self, id: u64) -> ApiResult<AwardExtendedRecord>;

    // Characters

    /// Retrieves a character.
    async fn character(&self, id: u64) -> ApiResult<Character>;

    // Companies

    /// Retrieves one page of companies.
    async fn all_companies(&self, page: u32) -> ApiResult<Vec<Company>>;

    /// Retrieves all company types.
    async fn company_types(&self) -> ApiResult<Vec<CompanyType>>;

    /// Retrieves a company.
    async fn company(&self, id: u64) -> ApiResult<Company>;

    // General

    /// Retrieves all content ratings.
    async fn content_ratings(&self) -> ApiResult<Vec<ContentRating>>;

    /// Retrieves all countries.
    async fn countries(&self) -> ApiResult<Vec<Country>>;

    /// Retrieves all entity types.
    async fn entity_types(&self) -> ApiResult<Vec<EntityType>>;

    /// Retrieves all genders.
    async fn genders(&self) -> ApiResult<Vec<Gender>>;

    /// Retrieves all languages.
    async fn languages(&self) -> ApiResult<Vec<Language>>;

    /// Retrieves all remote-ID source types.
    async fn source_types(&self) -> ApiResult<Vec<SourceType>>;

    // Episodes

    /// Retrieves an episode.
    async fn episode(&self, id: u64) -> ApiResult<EpisodeBaseRecord>;

    /// Retrieves an extended episode; `meta` is sent only when non-empty.
    async fn episode_extended(&self, id: u64, meta: Option<&str>)
    -> ApiResult<EpisodeExtendedRecord>;

    /// Retrieves the translation of an episode.
    async fn episode_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    // Genres

    /// Retrieves all genres.
    async fn all_genres(&self) -> ApiResult<Vec<GenreBaseRecord>>;

    /// Retrieves a genre.
    async fn genre(&self, id: u64) -> ApiResult<GenreBaseRecord>;

    // Lists

    /// Retrieves one page of lists.
    async fn all_lists(&self, page: u32) -> ApiResult<Vec<ListBaseRecord>>;

    /// Retrieves a list.
    async fn list(&self, id: u64) -> ApiResult<ListBaseRecord>;

    /// Retrieves an extended list with its entities.
    async fn list_extended(&self, id: u64) -> ApiResult<ListExtendedRecord>;

    // Movies

    /// Retrieves one page of movies.
    async fn all_movies(&self, page: u32) -> ApiResult<Vec<MovieBaseRecord>>;

    /// Retrieves a movie.
    async fn movie(&self, id: u64) -> ApiResult<MovieBaseRecord>;

    /// Retrieves an extended movie; `meta` is sent only when non-empty.
    async fn movie_extended(&self, id: u64, meta: Option<&str>) -> ApiResult<MovieExtendedRecord>;

    /// Retrieves all movie statuses.
    async fn movie_statuses(&self) -> ApiResult<Vec<Status>>;

    /// Retrieves the translation of a movie.
    async fn movie_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    // People

    /// Retrieves all people types.
    async fn person_types(&self) -> ApiResult<Vec<PeopleType>>;

    /// Retrieves a person.
    async fn person(&self, id: u64) -> ApiResult<PeopleBaseRecord>;

    /// Retrieves an extended person.
    async fn person_extended(&self, id: u64) -> ApiResult<PersonExtendedRecord>;

    /// Retrieves the translation of a person.
    async fn person_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    // Search

    /// Searches series, movies, people and companies.
    async fn search(&self, params: &SearchParams) -> ApiResult<Vec<SearchResult>>;

    // Seasons

    /// Retrieves a season.
    async fn season(&self, id: u64) -> ApiResult<SeasonBaseRecord>;

    /// Retrieves an extended season with its episodes.
    async fn season_extended(&self, id: u64) -> ApiResult<SeasonExtendedRecord>;

    /// Retrieves all season types.
    async fn season_types(&self) -> ApiResult<Vec<SeasonType>>;

    /// Retrieves the translation of a season.
    async fn season_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    // Series

    /// Retrieves one page of series.
    async fn all_series(&self, page: u32) -> ApiResult<Vec<SeriesBaseRecord>>;

    /// Retrieves a series.
    async fn series(&self, id: u64) -> ApiResult<SeriesBaseRecord>;

    /// Retrieves an extended series; `meta` is sent only when non-empty.
    async fn series_extended(&self, id: u64, meta: Option<&str>)
    -> ApiResult<SeriesExtendedRecord>;

    /// Retrieves one page of a series' episodes ordered by `season_type`
    /// (e.g. "default", "official", "dvd").
    async fn series_episodes(
        &self,
        id: u64,
        season_type: &str,
        page: u32,
    ) -> ApiResult<SeriesEpisodes>;

    /// Retrieves the translation of a series.
    async fn series_translations(&self, id: u64, language: &str) -> ApiResult<Translation>;

    /// Retrieves all series statuses.
    async fn series_statuses(&self) -> ApiResult<Vec<Status>>;

    // Updates

    /// Retrieves records changed since a point in time.
    async fn updates(&self, params: &UpdatesParams) -> ApiResult<Vec<EntityUpdate>>;
}
