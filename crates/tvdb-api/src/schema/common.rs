//! Records that have the same shape on the wire and in the canonical model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;

/// An alternative name in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alias {
    /// Language code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub language: String,
    /// Alias text.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Base artwork record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtworkBaseRecord {
    /// Artwork ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Score.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub score: f64,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
    /// Artwork type ID.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub kind: i64,
}

/// Artwork status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtworkStatus {
    /// Status ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Status name.
    pub name: Option<String>,
}

/// Artwork type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtworkType {
    /// Height in pixels.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub height: u32,
    /// Type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Image format (e.g. "JPG").
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub image_format: String,
    /// Type name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Record type this artwork applies to.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub record_type: String,
    /// Slug.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub slug: String,
    /// Thumbnail height in pixels.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub thumb_height: u32,
    /// Thumbnail width in pixels.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub thumb_width: u32,
    /// Width in pixels.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub width: u32,
}

/// Base award record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardBaseRecord {
    /// Award ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Award name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Extended award record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardExtendedRecord {
    /// Award ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Award name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Categories of this award.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub categories: Vec<AwardCategoryBaseRecord>,
    /// Score.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub score: f64,
}

/// Base award category record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwardCategoryBaseRecord {
    /// Whether co-nominees are allowed.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub allow_co_nominees: bool,
    /// Parent award.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub award: AwardBaseRecord,
    /// Category applies to movies.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub for_movies: bool,
    /// Category applies to series.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub for_series: bool,
    /// Category ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Category name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Biography in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Biography {
    /// Biography text.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub biography: String,
    /// Language code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub language: String,
}

/// Company type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyType {
    /// Type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub company_type_id: u64,
    /// Type name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub company_type_name: String,
}

/// Content rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRating {
    /// Rating ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Rating name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Country code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub country: String,
    /// Content type.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub content_type: String,
    /// Description.
    pub description: Option<String>,
    /// Sort order.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub order: i64,
    /// Full name.
    pub fullname: Option<String>,
}

/// Country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    /// Country ID (ISO 3166-1 alpha-3).
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: String,
    /// Country name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Short code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub short_code: String,
}

/// Entity within a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entity {
    /// Movie ID, when the entity is a movie.
    pub movie_id: Option<u64>,
    /// Position in the list.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub order: i64,
    /// Series ID, when the entity is a series.
    pub series_id: Option<u64>,
}

/// Entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityType {
    /// Type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Type name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Gender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gender {
    /// Gender ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Gender name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Base genre record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenreBaseRecord {
    /// Genre ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Genre name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Slug.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub slug: String,
}

/// Inspiration source of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inspiration {
    /// Inspiration ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Inspiration type.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub kind: String,
    /// Human readable type name.
    pub type_name: Option<String>,
    /// Reference URL.
    pub url: Option<String>,
}

/// Language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    /// Language ID (ISO 639-2).
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: String,
    /// English name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Native name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub native_name: String,
    /// Short code.
    pub short_code: Option<String>,
}

/// Base network record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkBaseRecord {
    /// Abbreviation.
    pub abbreviation: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// Network ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Network name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Slug.
    pub slug: Option<String>,
}

/// Base people record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeopleBaseRecord {
    /// Aliases.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub aliases: Vec<Alias>,
    /// Person ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Image URL.
    pub image: Option<String>,
    /// Name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Score.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub score: f64,
    /// Languages with a translated name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name_translations: Vec<String>,
    /// Languages with a translated overview.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub overview_translations: Vec<String>,
}

/// People type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PeopleType {
    /// Type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Type name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Production country of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductionCountry {
    /// Record ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Country code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub country: String,
    /// Country name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
}

/// Identifier of the same entity on another site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteId {
    /// Remote identifier.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: String,
    /// Source type ID.
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub kind: i64,
    /// Source name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub source_name: String,
}

/// Season type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonType {
    /// Season type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Season type name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Season type key (e.g. "official", "dvd").
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub kind: String,
}

/// Days a series airs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct SeriesAirsDays {
    /// Friday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub friday: bool,
    /// Monday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub monday: bool,
    /// Saturday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub saturday: bool,
    /// Sunday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub sunday: bool,
    /// Thursday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub thursday: bool,
    /// Tuesday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tuesday: bool,
    /// Wednesday.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub wednesday: bool,
}

/// Source type for remote IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceType {
    /// Source type ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// URL postfix.
    pub postfix: Option<String>,
    /// URL prefix.
    pub prefix: Option<String>,
    /// Slug.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub slug: String,
    /// Sort order.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub sort: i64,
}

/// Record status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// Status ID.
    pub id: Option<u64>,
    /// Whether records with this status keep receiving updates.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub keep_updated: bool,
    /// Status name.
    pub name: Option<String>,
    /// Record type.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub record_type: String,
}

/// Base studio record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioBaseRecord {
    /// Studio ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Studio name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Parent studio ID.
    pub parent_studio: Option<u64>,
}

/// Tag option attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagOption {
    /// Help text.
    pub help_text: Option<String>,
    /// Option ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Option name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Tag ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tag: u64,
    /// Tag name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tag_name: String,
}

/// Trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trailer {
    /// Trailer ID.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub id: u64,
    /// Language code.
    pub language: Option<String>,
    /// Trailer name.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    /// Trailer URL.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub url: String,
}

/// Translation of a record's name and overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Translation {
    /// Translated aliases.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub aliases: Vec<String>,
    /// Whether this translation is an alias.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_alias: bool,
    /// Whether this is the primary translation.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub is_primary: bool,
    /// Language code.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub language: String,
    /// Translated name.
    pub name: Option<String>,
    /// Translated overview.
    pub overview: Option<String>,
}

/// All translations of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslationMeta {
    /// Name translations.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name_translations: Vec<Translation>,
    /// Overview translations.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub overview_translations: Vec<Translation>,
}

/// Race record. The service publishes no fields for it yet.
pub type Race = Value;
