//! Urgency scoring from weather snapshots.
//!
//! A zone's need score is `max_temp / 100 + avg_wind_speed * 0.5 -
//! lagged_precipitation * 2`. Heat and wind raise urgency, recent rain lowers
//! it. Scores are unbounded; a negative score just means low urgency.

use std::collections::BTreeMap;

use firegrid_types::{FireZone, WeatherSnapshot, ZoneId};
use tracing::debug;

/// Divisor applied to the maximum temperature (degrees Fahrenheit).
pub const TEMPERATURE_DIVISOR: f64 = 100.0;

/// Weight applied to average wind speed (mph).
pub const WIND_WEIGHT: f64 = 0.5;

/// Weight subtracted per inch of lagged precipitation.
pub const PRECIPITATION_WEIGHT: f64 = 2.0;

/// Resource-need score for a single weather snapshot.
pub fn need_score(weather: &WeatherSnapshot) -> f64 {
    let heat_and_wind = weather
        .avg_wind_speed
        .mul_add(WIND_WEIGHT, weather.max_temp / TEMPERATURE_DIVISOR);
    weather
        .lagged_precipitation
        .mul_add(-PRECIPITATION_WEIGHT, heat_and_wind)
}

/// Priority scores for every zone that has a weather snapshot.
///
/// Zones without weather are left out of the map. The optimizer then treats
/// them as lowest priority and gives them no resources.
pub fn priority_scores(zones: &[FireZone]) -> BTreeMap<ZoneId, f64> {
    zones
        .iter()
        .filter_map(|zone| {
            let Some(weather) = &zone.current_weather else {
                debug!(zone = %zone.id, "No weather snapshot, zone left unscored");
                return None;
            };
            Some((zone.id.clone(), need_score(weather)))
        })
        .collect()
}

/// Copy of `zone` with `resource_need_score` recomputed from its weather.
///
/// The score is cleared when the zone has no weather, since any stored value
/// would be stale.
pub fn with_need_score(zone: &FireZone) -> FireZone {
    FireZone {
        resource_need_score: zone.current_weather.as_ref().map(need_score),
        ..zone.clone()
    }
}
