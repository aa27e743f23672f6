//! Records as the service sends them.
//!
//! Dates are strings (possibly empty), timestamps are epoch seconds, money is a
//! numeric string, and optional relations may be `null`, absent or empty. Every
//! optional field is an `Option` so absent and `null` decode the same way.
//! Singular relations also read `[]` and `{}` as absent, a company group that
//! is not an object is treated as empty, and `null` on a required scalar
//! decodes as its default. The functions in [`crate::normalize`] turn these
//! into the canonical records.
//! Field meanings match the canonical records in [`crate::schema`].
#![allow(missing_docs)]

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use super::common::{
    Alias, ArtworkBaseRecord, ArtworkStatus, AwardBaseRecord, AwardCategoryBaseRecord, Biography,
    CompanyType, ContentRating, Entity, GenreBaseRecord, Inspiration, NetworkBaseRecord,
    PeopleBaseRecord, ProductionCountry, Race, RemoteId, SeasonType, SeriesAirsDays, Status,
    StudioBaseRecord, TagOption, Trailer, TranslationMeta,
};
use super::de;

/// A number the service may send either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericString {
    /// A JSON number.
    Number(Number),
    /// A JSON string expected to hold a number.
    Text(String),
}

/// Company.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub active_date: Option<String>,
    pub aliases: Option<Vec<Alias>>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub inactive_date: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    pub name_translations: Option<Vec<String>>,
    pub overview_translations: Option<Vec<String>>,
    pub primary_company_type: Option<u64>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de::relation")]
    pub company_type: Option<CompanyType>,
}

/// Companies grouped by role.
///
/// Keys outside the fixed roles land in `versioned`, where migrated field
/// names such as `specialEffects` / `special_effects` are resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyGroup {
    pub studio: Option<Vec<Company>>,
    pub network: Option<Vec<Company>>,
    pub production: Option<Vec<Company>>,
    pub distributor: Option<Vec<Company>>,
    #[serde(flatten)]
    pub versioned: Map<String, Value>,
}

/// Character.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub aliases: Option<Vec<Alias>>,
    pub episode_id: Option<u64>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_featured: bool,
    pub movie_id: Option<u64>,
    pub name: Option<String>,
    pub name_translations: Option<Vec<String>>,
    pub overview_translations: Option<Vec<String>>,
    pub people_id: Option<u64>,
    pub people_type: Option<String>,
    pub person_name: Option<String>,
    pub series_id: Option<u64>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub sort: i64,
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub url: Option<String>,
}

/// Base season record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonBaseRecord {
    pub abbreviation: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub image: Option<String>,
    pub image_type: Option<i64>,
    pub name: Option<String>,
    pub name_translations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub number: i64,
    pub overview_translations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub series_id: u64,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de::relation")]
    pub kind: Option<SeasonType>,
    #[serde(default, deserialize_with = "de::company_group")]
    pub companies: Option<CompanyGroup>,
    pub tag_options: Option<Vec<TagOption>>,
}

/// Extended season record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonExtendedRecord {
    #[serde(flatten)]
    pub base: SeasonBaseRecord,
    pub artwork: Option<Vec<ArtworkBaseRecord>>,
    pub episodes: Option<Vec<EpisodeBaseRecord>>,
    pub trailers: Option<Vec<Trailer>>,
    #[serde(default, deserialize_with = "de::relation")]
    pub network: Option<NetworkBaseRecord>,
}

/// Base episode record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeBaseRecord {
    pub aired: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub image: Option<String>,
    pub image_type: Option<i64>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_movie: i64,
    pub name: Option<String>,
    pub name_translations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub number: i64,
    pub overview_translations: Option<Vec<String>>,
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub season_number: i64,
    pub seasons: Option<Vec<SeasonBaseRecord>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub series_id: u64,
    pub finale_type: Option<String>,
    pub last_updated: Option<String>,
}

/// Extended episode record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeExtendedRecord {
    #[serde(flatten)]
    pub base: EpisodeBaseRecord,
    pub airs_after_season: Option<i64>,
    pub airs_before_episode: Option<i64>,
    pub airs_before_season: Option<i64>,
    pub awards: Option<Vec<AwardBaseRecord>>,
    pub characters: Option<Vec<Character>>,
    pub content_ratings: Option<Vec<ContentRating>>,
    #[serde(default, deserialize_with = "de::relation")]
    pub network: Option<NetworkBaseRecord>,
    pub production_code: Option<String>,
    pub remote_ids: Option<Vec<RemoteId>>,
    pub tag_options: Option<Vec<TagOption>>,
    pub trailers: Option<Vec<Trailer>>,
    #[serde(default, deserialize_with = "de::relation")]
    pub networks: Option<Company>,
    #[serde(default, deserialize_with = "de::relation")]
    pub studios: Option<Company>,
    #[serde(default, deserialize_with = "de::relation")]
    pub translations: Option<TranslationMeta>,
}

/// Base series record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeriesBaseRecord {
    pub abbreviation: Option<String>,
    pub aliases: Option<Vec<Alias>>,
    pub country: Option<String>,
    pub default_season_type: Option<i64>,
    pub first_aired: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_order_randomized: bool,
    pub last_aired: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    pub name_translations: Option<Vec<String>>,
    pub next_aired: Option<String>,
    pub original_country: Option<String>,
    pub original_language: Option<String>,
    pub overview_translations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub score: f64,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de::relation")]
    pub status: Option<Status>,
    pub last_updated: Option<String>,
    pub average_runtime: Option<u32>,
}

/// Extended series record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesExtendedRecord {
    #[serde(flatten)]
    pub base: SeriesBaseRecord,
    #[serde(default, deserialize_with = "de::relation")]
    pub airs_days: Option<SeriesAirsDays>,
    pub airs_time: Option<String>,
    #[serde(rename = "airsTimeUTC")]
    pub airs_time_utc: Option<i64>,
    pub artworks: Option<Vec<ArtworkBaseRecord>>,
    #[serde(default, deserialize_with = "de::company_group")]
    pub companies: Option<CompanyGroup>,
    pub characters: Option<Vec<Character>>,
    pub genres: Option<Vec<GenreBaseRecord>>,
    pub networks: Option<Vec<NetworkBaseRecord>>,
    pub remote_ids: Option<Vec<RemoteId>>,
    pub seasons: Option<Vec<SeasonBaseRecord>>,
    pub trailers: Option<Vec<Trailer>>,
    #[serde(default, deserialize_with = "de::relation")]
    pub translations: Option<TranslationMeta>,
}

/// Episodes of a series together with the series itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeriesEpisodes {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub series: SeriesBaseRecord,
    pub episodes: Option<Vec<EpisodeBaseRecord>>,
}

/// Base movie record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieBaseRecord {
    pub aliases: Option<Vec<Alias>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    pub name_translations: Option<Vec<String>>,
    pub overview_translations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub score: f64,
    pub runtime: Option<u32>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de::relation")]
    pub status: Option<Status>,
    pub last_updated: Option<String>,
}

/// Extended movie record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieExtendedRecord {
    #[serde(flatten)]
    pub base: MovieBaseRecord,
    pub artworks: Option<Vec<ArtworkBaseRecord>>,
    pub audio_languages: Option<Vec<String>>,
    pub awards: Option<Vec<AwardBaseRecord>>,
    pub box_office: Option<NumericString>,
    pub budget: Option<NumericString>,
    pub characters: Option<Vec<Character>>,
    pub lists: Option<Vec<ListBaseRecord>>,
    pub genres: Option<Vec<GenreBaseRecord>>,
    pub original_country: Option<String>,
    pub original_language: Option<String>,
    pub releases: Option<Vec<Release>>,
    pub remote_ids: Option<Vec<RemoteId>>,
    pub content_ratings: Option<Vec<ContentRating>>,
    pub studios: Option<Vec<StudioBaseRecord>>,
    pub subtitle_languages: Option<Vec<String>>,
    pub tag_options: Option<Vec<TagOption>>,
    pub trailers: Option<Vec<Trailer>>,
    pub inspirations: Option<Vec<Inspiration>>,
    pub production_countries: Option<Vec<ProductionCountry>>,
    pub spoken_languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::relation")]
    pub first_release: Option<Release>,
    #[serde(default, deserialize_with = "de::relation")]
    pub translations: Option<TranslationMeta>,
    #[serde(default, deserialize_with = "de::company_group")]
    pub companies: Option<CompanyGroup>,
}

/// Release of a movie in one country.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Release {
    pub country: Option<String>,
    pub date: Option<String>,
    pub detail: Option<String>,
}

/// Extended award category record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCategoryExtendedRecord {
    #[serde(flatten)]
    pub base: AwardCategoryBaseRecord,
    pub nominees: Option<Vec<AwardNominee>>,
}

/// Nominee of an award category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardNominee {
    #[serde(default, deserialize_with = "de::relation")]
    pub character: Option<Character>,
    pub details: Option<String>,
    #[serde(default, deserialize_with = "de::relation")]
    pub episode: Option<EpisodeBaseRecord>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_winner: bool,
    #[serde(default, deserialize_with = "de::relation")]
    pub movie: Option<MovieBaseRecord>,
    #[serde(default, deserialize_with = "de::relation")]
    pub series: Option<SeriesBaseRecord>,
    pub year: Option<NumericString>,
    pub category: Option<String>,
    pub name: Option<String>,
}

/// Extended person record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonExtendedRecord {
    #[serde(flatten)]
    pub base: PeopleBaseRecord,
    pub awards: Option<Vec<AwardBaseRecord>>,
    pub biographies: Option<Vec<Biography>>,
    pub birth: Option<String>,
    pub birth_place: Option<String>,
    pub characters: Option<Vec<Character>>,
    pub death: Option<String>,
    pub gender: Option<i64>,
    pub races: Option<Vec<Race>>,
    pub remote_ids: Option<Vec<RemoteId>>,
    pub tag_options: Option<Vec<TagOption>>,
}

/// Search result. Keys are snake case on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub aliases: Option<Vec<String>>,
    pub companies: Option<Vec<String>>,
    pub company_type: Option<String>,
    pub country: Option<String>,
    pub director: Option<String>,
    pub extended_title: Option<String>,
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: String,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    pub name_translated: Option<String>,
    pub network: Option<String>,
    pub official_list: Option<String>,
    pub overview: Option<String>,
    pub overview_translated: Option<Vec<String>>,
    pub posters: Option<Vec<String>>,
    pub primary_language: Option<String>,
    pub primary_type: Option<String>,
    pub status: Option<String>,
    pub tvdb_id: Option<NumericString>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub year: Option<NumericString>,
}

/// Change to one record since a point in time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityUpdate {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub record_id: u64,
    pub time_stamp: Option<i64>,
}

/// Extended artwork record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkExtendedRecord {
    #[serde(flatten)]
    pub base: ArtworkBaseRecord,
    pub episode_id: Option<u64>,
    pub height: Option<u32>,
    pub movie_id: Option<u64>,
    pub network_id: Option<u64>,
    pub people_id: Option<u64>,
    pub season_id: Option<u64>,
    pub series_id: Option<u64>,
    pub series_people_id: Option<u64>,
    pub thumbnail_height: Option<u32>,
    pub thumbnail_width: Option<u32>,
    pub updated_at: Option<i64>,
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "de::relation")]
    pub status: Option<ArtworkStatus>,
}

/// Base list record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBaseRecord {
    pub aliases: Option<Vec<Alias>>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_official: bool,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    pub name_translations: Option<Vec<String>>,
    pub overview: Option<String>,
    pub overview_translations: Option<Vec<String>>,
    pub url: Option<String>,
}

/// Extended list record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExtendedRecord {
    #[serde(flatten)]
    pub base: ListBaseRecord,
    pub entities: Option<Vec<Entity>>,
}
