//! One transform per raw record shape.
//!
//! Extended transforms run the base transform first and then add their own
//! fields.

use serde_json::Value;

use super::{
    SPECIAL_EFFECTS, VersionedField, from_epoch_seconds, lenient_float, lenient_int, non_empty,
    non_zero, parse_date, resolve_versioned,
};
use crate::schema::{
    ArtworkExtendedRecord, AwardCategoryExtendedRecord, AwardNominee, Character, Company,
    CompanyGroup, EntityUpdate, EpisodeBaseRecord, EpisodeExtendedRecord, ListBaseRecord,
    ListExtendedRecord, MovieBaseRecord, MovieExtendedRecord, PersonExtendedRecord, Release,
    SearchResult, SeasonBaseRecord, SeasonExtendedRecord, SeriesBaseRecord, SeriesEpisodes,
    SeriesExtendedRecord, raw,
};

fn each<R, C>(items: Option<Vec<R>>, f: fn(R) -> C) -> Vec<C> {
    items.unwrap_or_default().into_iter().map(f).collect()
}

/// Normalizes a company: `activeDate` and `inactiveDate` become dates.
#[must_use]
pub fn company(raw: raw::Company) -> Company {
    Company {
        active_date: parse_date(raw.active_date.as_deref()),
        aliases: raw.aliases.unwrap_or_default(),
        country: raw.country,
        id: raw.id,
        inactive_date: parse_date(raw.inactive_date.as_deref()),
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        overview_translations: raw.overview_translations.unwrap_or_default(),
        primary_company_type: raw.primary_company_type,
        slug: raw.slug,
        company_type: raw.company_type,
    }
}

/// Normalizes a company group.
///
/// Missing roles become empty. Special effects companies are read from
/// `specialEffects`, falling back to `special_effects`.
#[must_use]
pub fn company_group(mut raw: raw::CompanyGroup) -> CompanyGroup {
    let special_effects = resolve_versioned(&mut raw.versioned, &SPECIAL_EFFECTS)
        .map_or_else(Vec::new, |value| versioned_companies(value, &SPECIAL_EFFECTS));

    CompanyGroup {
        studio: each(raw.studio, company),
        network: each(raw.network, company),
        production: each(raw.production, company),
        distributor: each(raw.distributor, company),
        special_effects,
    }
}

fn versioned_companies(value: Value, field: &VersionedField) -> Vec<Company> {
    match serde_json::from_value::<Vec<raw::Company>>(value) {
        Ok(companies) => companies.into_iter().map(company).collect(),
        Err(e) => {
            tracing::warn!(
                field = field.canonical,
                error = %e,
                "Malformed company list, using empty list"
            );
            Vec::new()
        }
    }
}

/// Normalizes a character. Zero ids and empty image/url become `None`.
#[must_use]
pub fn character(raw: raw::Character) -> Character {
    Character {
        aliases: raw.aliases.unwrap_or_default(),
        episode_id: non_zero(raw.episode_id),
        id: raw.id,
        image: non_empty(raw.image),
        is_featured: raw.is_featured,
        movie_id: non_zero(raw.movie_id),
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        overview_translations: raw.overview_translations.unwrap_or_default(),
        people_id: raw.people_id,
        people_type: raw.people_type,
        person_name: raw.person_name,
        series_id: non_zero(raw.series_id),
        sort: raw.sort,
        kind: raw.kind,
        url: non_empty(raw.url),
    }
}

/// Normalizes a base season record and its company group.
#[must_use]
pub fn season_base(raw: raw::SeasonBaseRecord) -> SeasonBaseRecord {
    SeasonBaseRecord {
        abbreviation: raw.abbreviation,
        country: raw.country,
        id: raw.id,
        image: raw.image,
        image_type: raw.image_type,
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        number: raw.number,
        overview_translations: raw.overview_translations.unwrap_or_default(),
        series_id: raw.series_id,
        slug: raw.slug,
        kind: raw.kind,
        companies: company_group(raw.companies.unwrap_or_default()),
        tag_options: raw.tag_options.unwrap_or_default(),
    }
}

/// Normalizes an extended season record.
#[must_use]
pub fn season_extended(raw: raw::SeasonExtendedRecord) -> SeasonExtendedRecord {
    SeasonExtendedRecord {
        base: season_base(raw.base),
        artwork: raw.artwork.unwrap_or_default(),
        episodes: each(raw.episodes, episode_base),
        trailers: raw.trailers.unwrap_or_default(),
        network: raw.network,
    }
}

/// Normalizes a base episode record: `aired` and `lastUpdated` become dates.
#[must_use]
pub fn episode_base(raw: raw::EpisodeBaseRecord) -> EpisodeBaseRecord {
    EpisodeBaseRecord {
        aired: parse_date(raw.aired.as_deref()),
        id: raw.id,
        image: raw.image,
        image_type: raw.image_type,
        is_movie: raw.is_movie,
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        number: raw.number,
        overview_translations: raw.overview_translations.unwrap_or_default(),
        runtime: raw.runtime,
        season_number: raw.season_number,
        seasons: each(raw.seasons, season_base),
        series_id: raw.series_id,
        finale_type: raw.finale_type,
        last_updated: parse_date(raw.last_updated.as_deref()),
    }
}

/// Normalizes an extended episode record.
#[must_use]
pub fn episode_extended(raw: raw::EpisodeExtendedRecord) -> EpisodeExtendedRecord {
    EpisodeExtendedRecord {
        base: episode_base(raw.base),
        airs_after_season: raw.airs_after_season,
        airs_before_episode: raw.airs_before_episode,
        airs_before_season: raw.airs_before_season,
        awards: raw.awards.unwrap_or_default(),
        characters: each(raw.characters, character),
        content_ratings: raw.content_ratings.unwrap_or_default(),
        network: raw.network,
        production_code: raw.production_code,
        remote_ids: raw.remote_ids.unwrap_or_default(),
        tag_options: raw.tag_options.unwrap_or_default(),
        trailers: raw.trailers.unwrap_or_default(),
        networks: raw.networks.map(company),
        studios: raw.studios.map(company),
        translations: raw.translations,
    }
}

/// Normalizes a base series record: air dates and `lastUpdated` become dates.
#[must_use]
pub fn series_base(raw: raw::SeriesBaseRecord) -> SeriesBaseRecord {
    SeriesBaseRecord {
        abbreviation: raw.abbreviation,
        aliases: raw.aliases.unwrap_or_default(),
        country: raw.country,
        default_season_type: raw.default_season_type,
        first_aired: parse_date(raw.first_aired.as_deref()),
        id: raw.id,
        image: raw.image,
        is_order_randomized: raw.is_order_randomized,
        last_aired: parse_date(raw.last_aired.as_deref()),
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        next_aired: parse_date(raw.next_aired.as_deref()),
        original_country: raw.original_country,
        original_language: raw.original_language,
        overview_translations: raw.overview_translations.unwrap_or_default(),
        score: raw.score,
        slug: raw.slug,
        status: raw.status,
        last_updated: parse_date(raw.last_updated.as_deref()),
        average_runtime: raw.average_runtime,
    }
}

/// Normalizes an extended series record.
#[must_use]
pub fn series_extended(raw: raw::SeriesExtendedRecord) -> SeriesExtendedRecord {
    SeriesExtendedRecord {
        base: series_base(raw.base),
        airs_days: raw.airs_days,
        airs_time: raw.airs_time,
        airs_time_utc: raw.airs_time_utc,
        artworks: raw.artworks.unwrap_or_default(),
        companies: company_group(raw.companies.unwrap_or_default()),
        characters: each(raw.characters, character),
        genres: raw.genres.unwrap_or_default(),
        networks: raw.networks.unwrap_or_default(),
        remote_ids: raw.remote_ids.unwrap_or_default(),
        seasons: each(raw.seasons, season_base),
        trailers: raw.trailers.unwrap_or_default(),
        translations: raw.translations,
    }
}

/// Normalizes a page of series episodes.
#[must_use]
pub fn series_episodes(raw: raw::SeriesEpisodes) -> SeriesEpisodes {
    SeriesEpisodes {
        series: series_base(raw.series),
        episodes: each(raw.episodes, episode_base),
    }
}

/// Normalizes a base movie record: `lastUpdated` becomes a date.
#[must_use]
pub fn movie_base(raw: raw::MovieBaseRecord) -> MovieBaseRecord {
    MovieBaseRecord {
        aliases: raw.aliases.unwrap_or_default(),
        id: raw.id,
        image: raw.image,
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        overview_translations: raw.overview_translations.unwrap_or_default(),
        score: raw.score,
        runtime: raw.runtime,
        slug: raw.slug,
        status: raw.status,
        last_updated: parse_date(raw.last_updated.as_deref()),
    }
}

/// Normalizes an extended movie record.
///
/// `budget` and `boxOffice` are parsed from numeric strings; anything
/// unparsable becomes `NaN` and the rest of the record is still returned.
#[must_use]
pub fn movie_extended(raw: raw::MovieExtendedRecord) -> MovieExtendedRecord {
    MovieExtendedRecord {
        base: movie_base(raw.base),
        artworks: raw.artworks.unwrap_or_default(),
        audio_languages: raw.audio_languages.unwrap_or_default(),
        awards: raw.awards.unwrap_or_default(),
        box_office: lenient_float(raw.box_office.as_ref()),
        budget: lenient_float(raw.budget.as_ref()),
        characters: each(raw.characters, character),
        lists: each(raw.lists, list_record),
        genres: raw.genres.unwrap_or_default(),
        original_country: raw.original_country,
        original_language: raw.original_language,
        releases: each(raw.releases, release),
        remote_ids: raw.remote_ids.unwrap_or_default(),
        content_ratings: raw.content_ratings.unwrap_or_default(),
        studios: raw.studios.unwrap_or_default(),
        subtitle_languages: raw.subtitle_languages.unwrap_or_default(),
        tag_options: raw.tag_options.unwrap_or_default(),
        trailers: raw.trailers.unwrap_or_default(),
        inspirations: raw.inspirations.unwrap_or_default(),
        production_countries: raw.production_countries.unwrap_or_default(),
        spoken_languages: raw.spoken_languages.unwrap_or_default(),
        first_release: raw.first_release.map(release),
        translations: raw.translations,
        companies: company_group(raw.companies.unwrap_or_default()),
    }
}

/// Normalizes a release: `date` becomes a date.
#[must_use]
pub fn release(raw: raw::Release) -> Release {
    Release {
        country: raw.country,
        date: parse_date(raw.date.as_deref()),
        detail: raw.detail,
    }
}

/// Normalizes an extended award category and its nominees.
#[must_use]
pub fn award_category(raw: raw::AwardCategoryExtendedRecord) -> AwardCategoryExtendedRecord {
    AwardCategoryExtendedRecord {
        base: raw.base,
        nominees: each(raw.nominees, award_nominee),
    }
}

/// Normalizes an award nominee.
///
/// Each nominated entity is normalized or `None`. `year` is parsed from a
/// string; empty or unparsable becomes `None`.
#[must_use]
pub fn award_nominee(raw: raw::AwardNominee) -> AwardNominee {
    AwardNominee {
        character: raw.character.map(character),
        details: raw.details,
        episode: raw.episode.map(episode_base),
        id: raw.id,
        is_winner: raw.is_winner,
        movie: raw.movie.map(movie_base),
        series: raw.series.map(series_base),
        year: truthy_year(raw.year.as_ref()),
        category: raw.category,
        name: raw.name,
    }
}

fn truthy_year(year: Option<&raw::NumericString>) -> Option<i32> {
    match year? {
        raw::NumericString::Text(s) if s.is_empty() => None,
        raw::NumericString::Number(n) if n.as_u64() == Some(0) => None,
        value => lenient_int(Some(value)).and_then(|y| i32::try_from(y).ok()),
    }
}

/// Normalizes an extended person record: `birth` and `death` become dates.
#[must_use]
pub fn person_extended(raw: raw::PersonExtendedRecord) -> PersonExtendedRecord {
    PersonExtendedRecord {
        base: raw.base,
        awards: raw.awards.unwrap_or_default(),
        biographies: raw.biographies.unwrap_or_default(),
        birth: parse_date(raw.birth.as_deref()),
        birth_place: raw.birth_place,
        characters: each(raw.characters, character),
        death: parse_date(raw.death.as_deref()),
        gender: raw.gender,
        races: raw.races.unwrap_or_default(),
        remote_ids: raw.remote_ids.unwrap_or_default(),
        tag_options: raw.tag_options.unwrap_or_default(),
    }
}

/// Normalizes a search result.
///
/// Empty optional strings become `None`; `tvdb_id` and `year` are parsed as
/// integers.
#[must_use]
pub fn search_result(raw: raw::SearchResult) -> SearchResult {
    SearchResult {
        aliases: raw.aliases.unwrap_or_default(),
        companies: raw.companies.unwrap_or_default(),
        company_type: raw.company_type,
        country: non_empty(raw.country),
        director: raw.director,
        extended_title: raw.extended_title,
        genres: raw.genres.unwrap_or_default(),
        id: raw.id,
        image_url: non_empty(raw.image_url),
        name: raw.name,
        name_translated: non_empty(raw.name_translated),
        network: non_empty(raw.network),
        official_list: raw.official_list,
        overview: non_empty(raw.overview),
        overview_translated: raw.overview_translated.unwrap_or_default(),
        posters: raw.posters.unwrap_or_default(),
        primary_language: non_empty(raw.primary_language),
        primary_type: non_empty(raw.primary_type),
        status: non_empty(raw.status),
        tvdb_id: lenient_int(raw.tvdb_id.as_ref()).and_then(|id| u64::try_from(id).ok()),
        kind: raw.kind,
        year: truthy_year(raw.year.as_ref()),
    }
}

/// Normalizes an entity update: `timeStamp` epoch seconds become a date-time.
#[must_use]
pub fn entity_update(raw: raw::EntityUpdate) -> EntityUpdate {
    EntityUpdate {
        entity_type: raw.entity_type,
        method: raw.method,
        record_id: raw.record_id,
        time_stamp: from_epoch_seconds(raw.time_stamp),
    }
}

/// Normalizes an extended artwork record: `updatedAt` epoch seconds become a date-time.
#[must_use]
pub fn artwork_extended(raw: raw::ArtworkExtendedRecord) -> ArtworkExtendedRecord {
    ArtworkExtendedRecord {
        base: raw.base,
        episode_id: raw.episode_id,
        height: raw.height,
        movie_id: raw.movie_id,
        network_id: raw.network_id,
        people_id: raw.people_id,
        season_id: raw.season_id,
        series_id: raw.series_id,
        series_people_id: raw.series_people_id,
        thumbnail_height: raw.thumbnail_height,
        thumbnail_width: raw.thumbnail_width,
        updated_at: from_epoch_seconds(raw.updated_at),
        width: raw.width,
        status: raw.status,
    }
}

/// Normalizes a list record: an empty `url` becomes `None`.
#[must_use]
pub fn list_record(raw: raw::ListBaseRecord) -> ListBaseRecord {
    ListBaseRecord {
        aliases: raw.aliases.unwrap_or_default(),
        id: raw.id,
        is_official: raw.is_official,
        name: raw.name,
        name_translations: raw.name_translations.unwrap_or_default(),
        overview: raw.overview,
        overview_translations: raw.overview_translations.unwrap_or_default(),
        url: non_empty(raw.url),
    }
}

/// Normalizes an extended list record.
#[must_use]
pub fn list_extended(raw: raw::ListExtendedRecord) -> ListExtendedRecord {
    ListExtendedRecord {
        base: list_record(raw.base),
        entities: raw.entities.unwrap_or_default(),
    }
}
