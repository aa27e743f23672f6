//! Canonical record types returned by the catalog client.
//!
//! Dates are `DateTime<Utc>` or `None`, money is `f64` (`NaN` when the
//! service sent something unparsable), optional relations are `None` and
//! collections are never absent. Canonical records serialize to camelCase
//! JSON with RFC 3339 dates; that output decodes back through [`raw`] and
//! normalizes to the same values.

mod common;
mod de;
pub mod raw;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use self::common::{
    Alias, ArtworkBaseRecord, ArtworkStatus, ArtworkType, AwardBaseRecord,
    AwardCategoryBaseRecord, AwardExtendedRecord, Biography, CompanyType, ContentRating, Country,
    Entity, EntityType, Gender, GenreBaseRecord, Inspiration, Language, NetworkBaseRecord,
    PeopleBaseRecord, PeopleType, ProductionCountry, Race, RemoteId, SeasonType, SeriesAirsDays,
    SourceType, Status, StudioBaseRecord, TagOption, Trailer, Translation, TranslationMeta,
};

/// Company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Date the company became active.
    pub active_date: Option<DateTime<Utc>>,
    /// Aliases.
    pub aliases: Vec<Alias>,
    /// Country code.
    pub country: Option<String>,
    /// Company ID.
    pub id: u64,
    /// Date the company became inactive.
    pub inactive_date: Option<DateTime<Utc>>,
    /// Name.
    pub name: String,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Primary company type ID.
    pub primary_company_type: Option<u64>,
    /// Slug.
    pub slug: Option<String>,
    /// Company type.
    pub company_type: Option<CompanyType>,
}

/// Companies grouped by role. Every role is present, empty when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyGroup {
    /// Studios.
    pub studio: Vec<Company>,
    /// Networks.
    pub network: Vec<Company>,
    /// Production companies.
    pub production: Vec<Company>,
    /// Distributors.
    pub distributor: Vec<Company>,
    /// Special effects companies.
    pub special_effects: Vec<Company>,
}

/// Character played by a person in a series, episode or movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Aliases.
    pub aliases: Vec<Alias>,
    /// Episode ID.
    pub episode_id: Option<u64>,
    /// Character ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Whether the character is featured.
    pub is_featured: bool,
    /// Movie ID.
    pub movie_id: Option<u64>,
    /// Character name.
    pub name: Option<String>,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Person ID.
    pub people_id: Option<u64>,
    /// People type (e.g. "Actor").
    pub people_type: Option<String>,
    /// Person name.
    pub person_name: Option<String>,
    /// Series ID.
    pub series_id: Option<u64>,
    /// Sort order.
    pub sort: i64,
    /// People type ID.
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    /// URL.
    pub url: Option<String>,
}

/// Base season record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonBaseRecord {
    /// Abbreviation.
    pub abbreviation: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// Season ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Image type ID.
    pub image_type: Option<i64>,
    /// Name.
    pub name: Option<String>,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Season number.
    pub number: i64,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Series ID.
    pub series_id: u64,
    /// Slug.
    pub slug: Option<String>,
    /// Season type.
    #[serde(rename = "type")]
    pub kind: Option<SeasonType>,
    /// Companies involved in the season.
    pub companies: CompanyGroup,
    /// Tag options.
    pub tag_options: Vec<TagOption>,
}

/// Extended season record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: SeasonBaseRecord,
    /// Artwork.
    pub artwork: Vec<ArtworkBaseRecord>,
    /// Episodes.
    pub episodes: Vec<EpisodeBaseRecord>,
    /// Trailers.
    pub trailers: Vec<Trailer>,
    /// Network.
    pub network: Option<NetworkBaseRecord>,
}

/// Base episode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeBaseRecord {
    /// First air date.
    pub aired: Option<DateTime<Utc>>,
    /// Episode ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Image type ID.
    pub image_type: Option<i64>,
    /// Non-zero when the episode is a movie.
    pub is_movie: i64,
    /// Name.
    pub name: Option<String>,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Episode number.
    pub number: i64,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Season number.
    pub season_number: i64,
    /// Seasons the episode belongs to.
    pub seasons: Vec<SeasonBaseRecord>,
    /// Series ID.
    pub series_id: u64,
    /// Finale type (e.g. "season", "series").
    pub finale_type: Option<String>,
    /// Last modification date.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Extended episode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: EpisodeBaseRecord,
    /// Season the episode airs after.
    pub airs_after_season: Option<i64>,
    /// Episode the episode airs before.
    pub airs_before_episode: Option<i64>,
    /// Season the episode airs before.
    pub airs_before_season: Option<i64>,
    /// Awards.
    pub awards: Vec<AwardBaseRecord>,
    /// Characters.
    pub characters: Vec<Character>,
    /// Content ratings.
    pub content_ratings: Vec<ContentRating>,
    /// Network.
    pub network: Option<NetworkBaseRecord>,
    /// Production code.
    pub production_code: Option<String>,
    /// Remote IDs.
    pub remote_ids: Vec<RemoteId>,
    /// Tag options.
    pub tag_options: Vec<TagOption>,
    /// Trailers.
    pub trailers: Vec<Trailer>,
    /// Network company.
    pub networks: Option<Company>,
    /// Studio company.
    pub studios: Option<Company>,
    /// Translations.
    pub translations: Option<TranslationMeta>,
}

/// Base series record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBaseRecord {
    /// Abbreviation.
    pub abbreviation: Option<String>,
    /// Aliases.
    pub aliases: Vec<Alias>,
    /// Country code.
    pub country: Option<String>,
    /// Default season type ID.
    pub default_season_type: Option<i64>,
    /// First air date.
    pub first_aired: Option<DateTime<Utc>>,
    /// Series ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Whether episode order is randomized.
    pub is_order_randomized: bool,
    /// Last air date.
    pub last_aired: Option<DateTime<Utc>>,
    /// Name.
    pub name: String,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Next air date.
    pub next_aired: Option<DateTime<Utc>>,
    /// Original country code.
    pub original_country: Option<String>,
    /// Original language code.
    pub original_language: Option<String>,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Score.
    pub score: f64,
    /// Slug.
    pub slug: Option<String>,
    /// Status.
    pub status: Option<Status>,
    /// Last modification date.
    pub last_updated: Option<DateTime<Utc>>,
    /// Average runtime in minutes.
    pub average_runtime: Option<u32>,
}

/// Extended series record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: SeriesBaseRecord,
    /// Days the series airs on.
    pub airs_days: Option<SeriesAirsDays>,
    /// Local air time.
    pub airs_time: Option<String>,
    /// Air time in UTC.
    #[serde(rename = "airsTimeUTC")]
    pub airs_time_utc: Option<i64>,
    /// Artwork.
    pub artworks: Vec<ArtworkBaseRecord>,
    /// Companies involved in the series.
    pub companies: CompanyGroup,
    /// Characters.
    pub characters: Vec<Character>,
    /// Genres.
    pub genres: Vec<GenreBaseRecord>,
    /// Networks.
    pub networks: Vec<NetworkBaseRecord>,
    /// Remote IDs.
    pub remote_ids: Vec<RemoteId>,
    /// Seasons.
    pub seasons: Vec<SeasonBaseRecord>,
    /// Trailers.
    pub trailers: Vec<Trailer>,
    /// Translations.
    pub translations: Option<TranslationMeta>,
}

/// A page of episodes together with their series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEpisodes {
    /// The series.
    pub series: SeriesBaseRecord,
    /// Episodes on this page.
    pub episodes: Vec<EpisodeBaseRecord>,
}

/// Base movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieBaseRecord {
    /// Aliases.
    pub aliases: Vec<Alias>,
    /// Movie ID.
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Name.
    pub name: String,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// Score.
    pub score: f64,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Slug.
    pub slug: Option<String>,
    /// Status.
    pub status: Option<Status>,
    /// Last modification date.
    pub last_updated: Option<DateTime<Utc>>,
}

/// Extended movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: MovieBaseRecord,
    /// Artwork.
    pub artworks: Vec<ArtworkBaseRecord>,
    /// Audio languages.
    pub audio_languages: Vec<String>,
    /// Awards.
    pub awards: Vec<AwardBaseRecord>,
    /// Box office takings; `NaN` when unknown.
    pub box_office: f64,
    /// Budget; `NaN` when unknown.
    pub budget: f64,
    /// Characters.
    pub characters: Vec<Character>,
    /// Lists containing the movie.
    pub lists: Vec<ListBaseRecord>,
    /// Genres.
    pub genres: Vec<GenreBaseRecord>,
    /// Original country code.
    pub original_country: Option<String>,
    /// Original language code.
    pub original_language: Option<String>,
    /// Releases.
    pub releases: Vec<Release>,
    /// Remote IDs.
    pub remote_ids: Vec<RemoteId>,
    /// Content ratings.
    pub content_ratings: Vec<ContentRating>,
    /// Studios.
    pub studios: Vec<StudioBaseRecord>,
    /// Subtitle languages.
    pub subtitle_languages: Vec<String>,
    /// Tag options.
    pub tag_options: Vec<TagOption>,
    /// Trailers.
    pub trailers: Vec<Trailer>,
    /// Inspirations.
    pub inspirations: Vec<Inspiration>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<String>,
    /// First release.
    pub first_release: Option<Release>,
    /// Translations.
    pub translations: Option<TranslationMeta>,
    /// Companies involved in the movie.
    pub companies: CompanyGroup,
}

/// Release of a movie in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Country code.
    pub country: Option<String>,
    /// Release date.
    pub date: Option<DateTime<Utc>>,
    /// Release detail (e.g. "Premiere").
    pub detail: Option<String>,
}

/// Extended award category record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCategoryExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: AwardCategoryBaseRecord,
    /// Nominees.
    pub nominees: Vec<AwardNominee>,
}

/// Nominee of an award category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardNominee {
    /// Nominated character.
    pub character: Option<Character>,
    /// Details.
    pub details: Option<String>,
    /// Nominated episode.
    pub episode: Option<EpisodeBaseRecord>,
    /// Nominee ID.
    pub id: u64,
    /// Whether the nominee won.
    pub is_winner: bool,
    /// Nominated movie.
    pub movie: Option<MovieBaseRecord>,
    /// Nominated series.
    pub series: Option<SeriesBaseRecord>,
    /// Award year.
    pub year: Option<i32>,
    /// Category name.
    pub category: Option<String>,
    /// Nominee name.
    pub name: Option<String>,
}

/// Extended person record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: PeopleBaseRecord,
    /// Awards.
    pub awards: Vec<AwardBaseRecord>,
    /// Biographies.
    pub biographies: Vec<Biography>,
    /// Date of birth.
    pub birth: Option<DateTime<Utc>>,
    /// Place of birth.
    pub birth_place: Option<String>,
    /// Characters played.
    pub characters: Vec<Character>,
    /// Date of death.
    pub death: Option<DateTime<Utc>>,
    /// Gender ID.
    pub gender: Option<i64>,
    /// Races.
    pub races: Vec<Race>,
    /// Remote IDs.
    pub remote_ids: Vec<RemoteId>,
    /// Tag options.
    pub tag_options: Vec<TagOption>,
}

/// Search result. Serialized with snake case keys, as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Aliases.
    pub aliases: Vec<String>,
    /// Companies.
    pub companies: Vec<String>,
    /// Company type.
    pub company_type: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// Director.
    pub director: Option<String>,
    /// Extended title.
    pub extended_title: Option<String>,
    /// Genres.
    pub genres: Vec<String>,
    /// Result ID (e.g. "series-81189").
    pub id: String,
    /// Image URL.
    pub image_url: Option<String>,
    /// Name.
    pub name: String,
    /// Translated name.
    pub name_translated: Option<String>,
    /// Network.
    pub network: Option<String>,
    /// Official list.
    pub official_list: Option<String>,
    /// Overview.
    pub overview: Option<String>,
    /// Languages with a translated overview.
    pub overview_translated: Vec<String>,
    /// Poster URLs.
    pub posters: Vec<String>,
    /// Primary language code.
    pub primary_language: Option<String>,
    /// Primary type.
    pub primary_type: Option<String>,
    /// Status.
    pub status: Option<String>,
    /// Numeric TVDB ID.
    pub tvdb_id: Option<u64>,
    /// Entity type (e.g. "series", "movie").
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Year.
    pub year: Option<i32>,
}

/// Change to one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityUpdate {
    /// Entity type (e.g. "series").
    pub entity_type: String,
    /// Change method (e.g. "create", "update").
    pub method: String,
    /// Changed record ID.
    pub record_id: u64,
    /// Time of the change.
    pub time_stamp: Option<DateTime<Utc>>,
}

/// Extended artwork record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: ArtworkBaseRecord,
    /// Episode ID.
    pub episode_id: Option<u64>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Movie ID.
    pub movie_id: Option<u64>,
    /// Network ID.
    pub network_id: Option<u64>,
    /// Person ID.
    pub people_id: Option<u64>,
    /// Season ID.
    pub season_id: Option<u64>,
    /// Series ID.
    pub series_id: Option<u64>,
    /// Series-people ID.
    pub series_people_id: Option<u64>,
    /// Thumbnail height in pixels.
    pub thumbnail_height: Option<u32>,
    /// Thumbnail width in pixels.
    pub thumbnail_width: Option<u32>,
    /// Last modification time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Width in pixels.
    pub width: Option<u32>,
    /// Status.
    pub status: Option<ArtworkStatus>,
}

/// Base list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBaseRecord {
    /// Aliases.
    pub aliases: Vec<Alias>,
    /// List ID.
    pub id: u64,
    /// Whether the list is official.
    pub is_official: bool,
    /// Name.
    pub name: String,
    /// Languages with a translated name.
    pub name_translations: Vec<String>,
    /// Overview.
    pub overview: Option<String>,
    /// Languages with a translated overview.
    pub overview_translations: Vec<String>,
    /// URL.
    pub url: Option<String>,
}

/// Extended list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExtendedRecord {
    /// Base fields.
    #[serde(flatten)]
    pub base: ListBaseRecord,
    /// Series and movies in the list.
    pub entities: Vec<Entity>,
}
