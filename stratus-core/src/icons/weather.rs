//! Weather icon resources

/// Icon resources a watch face can show
///
/// These identify artwork, not wire codes. Which code selects which icon is
/// decided by an [`IconLayout`](super::IconLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    /// Waiting for the first update
    Refresh,
    /// Sync failed
    Error,
    ClearDay,
    ClearNight,
    Fog,
    Wind,
    Cold,
    PartlyCloudyDay,
    PartlyCloudyNight,
    FogAlt,
    Cloudy,
    Storm,
    LightRain,
    Rain,
    Snow,
    LightSnow,
    HeavySnow,
    HailSleet,
    MostlyCloudy,
    HeavyStorm,
    Hot,
    /// No forecast available
    NotAvailable,
}

impl WeatherIcon {
    /// Every icon, in artwork order
    pub const ALL: [WeatherIcon; 22] = [
        WeatherIcon::Refresh,
        WeatherIcon::Error,
        WeatherIcon::ClearDay,
        WeatherIcon::ClearNight,
        WeatherIcon::Fog,
        WeatherIcon::Wind,
        WeatherIcon::Cold,
        WeatherIcon::PartlyCloudyDay,
        WeatherIcon::PartlyCloudyNight,
        WeatherIcon::FogAlt,
        WeatherIcon::Cloudy,
        WeatherIcon::Storm,
        WeatherIcon::LightRain,
        WeatherIcon::Rain,
        WeatherIcon::Snow,
        WeatherIcon::LightSnow,
        WeatherIcon::HeavySnow,
        WeatherIcon::HailSleet,
        WeatherIcon::MostlyCloudy,
        WeatherIcon::HeavyStorm,
        WeatherIcon::Hot,
        WeatherIcon::NotAvailable,
    ];

    /// Configuration name
    pub const fn name(self) -> &'static str {
        match self {
            WeatherIcon::Refresh => "refresh",
            WeatherIcon::Error => "error",
            WeatherIcon::ClearDay => "clear_day",
            WeatherIcon::ClearNight => "clear_night",
            WeatherIcon::Fog => "fog",
            WeatherIcon::Wind => "wind",
            WeatherIcon::Cold => "cold",
            WeatherIcon::PartlyCloudyDay => "partly_cloudy_day",
            WeatherIcon::PartlyCloudyNight => "partly_cloudy_night",
            WeatherIcon::FogAlt => "fog_alt",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Storm => "storm",
            WeatherIcon::LightRain => "light_rain",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::LightSnow => "light_snow",
            WeatherIcon::HeavySnow => "heavy_snow",
            WeatherIcon::HailSleet => "hail_sleet",
            WeatherIcon::MostlyCloudy => "mostly_cloudy",
            WeatherIcon::HeavyStorm => "heavy_storm",
            WeatherIcon::Hot => "hot",
            WeatherIcon::NotAvailable => "not_available",
        }
    }

    /// Look up an icon by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }
}
