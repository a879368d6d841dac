//! [`Config`]-related definitions.

use std::time;

use common::Bounds;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use discovery::domain::{
    listing::{
        Amenity, ConstructionStatus, Developer, District, Proximity,
        RoomClass,
    },
    swipe, FilterState, Role, Sentinels, SortKey,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration.
    pub catalog: Catalog,

    /// Role of the consumer browsing the catalog.
    pub role: Role,

    /// Initial browsing configuration.
    pub browse: Browse,

    /// Swipe configuration.
    pub swipe: Swipe,

    /// Sentinel bounds of the ranged filters.
    pub sentinels: Sentinels,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

impl From<&Config> for discovery::Config {
    fn from(value: &Config) -> Self {
        Self {
            swipe: value.swipe.into(),
            sentinels: value.sentinels,
        }
    }
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Path to the JSON file with the catalog listings.
    #[default("catalog.json".to_owned())]
    pub path: String,
}

/// Initial browsing configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Browse {
    /// Initially applied filter.
    pub filter: Filter,

    /// Initially applied sort key.
    pub sort: SortKey,
}

/// Filter preset.
///
/// Omitted fields stay unconstrained.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Price range in millions.
    pub price: Range<Decimal>,

    /// Area range in square meters.
    pub area: Range<Decimal>,

    /// Floor range.
    pub floor: Range<u16>,

    /// Room class.
    pub rooms: Option<RoomClass>,

    /// Construction status.
    pub status: Option<ConstructionStatus>,

    /// District.
    pub district: Option<District>,

    /// Developer.
    pub developer: Option<Developer>,

    /// Required amenities.
    pub amenities: Vec<Amenity>,

    /// Require public transport nearby.
    pub near_transport: bool,

    /// Require a school nearby.
    pub near_school: bool,

    /// Require shops nearby.
    pub near_shops: bool,

    /// Hide first floor listings.
    pub exclude_first_floor: bool,

    /// Hide top floor listings.
    pub exclude_top_floor: bool,
}

impl Filter {
    /// Converts this [`Filter`] preset into a [`FilterState`] with the
    /// provided [`Sentinels`].
    #[must_use]
    pub fn to_state(&self, sentinels: Sentinels) -> FilterState {
        let mut filter = FilterState::new(sentinels);
        let price = self.price.within(sentinels.price);
        let area = self.area.within(sentinels.area);
        let floor = self.floor.within(sentinels.floor);

        _ = filter
            .set_price(price.min(), price.max())
            .set_area(area.min(), area.max())
            .set_floor(floor.min(), floor.max())
            .set_rooms(self.rooms)
            .set_status(self.status)
            .set_district(self.district.clone())
            .set_developer(self.developer.clone())
            .set_proximity(Proximity {
                transport: self.near_transport,
                school: self.near_school,
                shops: self.near_shops,
            })
            .exclude_first_floor(self.exclude_first_floor)
            .exclude_top_floor(self.exclude_top_floor);
        for amenity in &self.amenities {
            _ = filter.require_amenity(amenity.clone());
        }

        filter
    }
}

/// Range with optional ends.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Range<T> {
    /// Lower end, if constrained.
    pub min: Option<T>,

    /// Upper end, if constrained.
    pub max: Option<T>,
}

impl<T: Copy + PartialOrd> Range<T> {
    /// Fills the unconstrained ends of this [`Range`] from the provided
    /// `sentinel` [`Bounds`].
    fn within(&self, sentinel: Bounds<T>) -> Bounds<T> {
        Bounds::new(
            self.min.unwrap_or(sentinel.min()),
            self.max.unwrap_or(sentinel.max()),
        )
    }
}

/// Swipe configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Swipe {
    /// Horizontal distance in pixels a card must be dragged beyond to be
    /// decided.
    #[default(100.0)]
    pub threshold: f64,

    /// Rotation in degrees of a card dragged by the threshold.
    #[default(10.0)]
    pub rotation: f64,

    /// Maximum rotation in degrees.
    #[default(15.0)]
    pub max_rotation: f64,

    /// Maximum vertical tilt in degrees.
    #[default(5.0)]
    pub max_tilt: f64,

    /// Scale range of the next card.
    #[default((0.9, 1.0))]
    pub next_card_scale: (f64, f64),

    /// Opacity range of the next card.
    #[default((0.6, 1.0))]
    pub next_card_opacity: (f64, f64),

    /// Duration of returning a card to rest.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub snap_back: time::Duration,

    /// Duration of throwing a decided card away.
    #[default(time::Duration::from_millis(250))]
    #[serde(with = "humantime_serde")]
    pub fly_out: time::Duration,
}

impl From<Swipe> for swipe::Config {
    fn from(value: Swipe) -> Self {
        let Swipe {
            threshold,
            rotation,
            max_rotation,
            max_tilt,
            next_card_scale,
            next_card_opacity,
            snap_back,
            fly_out,
        } = value;

        Self {
            threshold,
            rotation,
            max_rotation,
            max_tilt,
            next_card_scale: next_card_scale.into(),
            next_card_opacity: next_card_opacity.into(),
            animation: swipe::Animation {
                snap_back,
                fly_out,
            },
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use discovery::domain::{listing::RoomClass, swipe, Sentinels};
    use rust_decimal::Decimal;

    use super::{Filter, Range, Swipe};

    #[test]
    fn swipe_defaults_match_engine() {
        assert_eq!(
            swipe::Config::from(Swipe::default()),
            swipe::Config::default(),
        );
    }

    #[test]
    fn parses_humantime_durations() {
        let swipe: Swipe =
            serde_json::from_str(r#"{"snap_back": "1s 200ms"}"#).unwrap();

        assert_eq!(swipe.snap_back, Duration::from_millis(1200));
        assert_eq!(swipe.fly_out, Duration::from_millis(250));
    }

    #[test]
    fn empty_filter_is_unconstrained() {
        let filter = Filter::default().to_state(Sentinels::default());

        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn filter_preset() {
        let filter = Filter {
            price: Range {
                min: None,
                max: Some(Decimal::from(10)),
            },
            rooms: Some(RoomClass::Two),
            near_school: true,
            ..Filter::default()
        }
        .to_state(Sentinels::default());

        assert_eq!(filter.active_count(), 3);
        assert_eq!(filter.price().min(), Decimal::ZERO);
        assert_eq!(filter.price().max(), Decimal::from(10));
    }
}
