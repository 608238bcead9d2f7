//! Message catalogue for user-facing text.
//!
//! English is the fallback. French is selected from the `language` config
//! key, or from the locale (`LC_ALL`, `LC_MESSAGES`, `LANG`) when the key
//! is `auto`.

use crate::errors::{AppError, AppResult};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

/// Every translated piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    EnterDistance,
    EnterDuration,
    CommentPrompt,
    UrlPrompt,
    RideAdded,
    StatisticsFor,
    NoRidesFor,
    Rides,
    Distance,
    Duration,
    AverageSpeed,
    AverageRide,
    LongestRide,
    ColDate,
    ColDistance,
    ColDuration,
    ColSpeed,
    ColComment,
    Yes,
    AllRides,
    RangeTo,
}

impl Lang {
    /// Value of the `language` config key: `auto`, `en` or `fr`.
    pub fn from_setting(setting: &str) -> AppResult<Self> {
        match setting.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::detect()),
            "en" => Ok(Lang::En),
            "fr" => Ok(Lang::Fr),
            other => Err(AppError::Config(format!(
                "unsupported language '{other}' (expected auto, en or fr)"
            ))),
        }
    }

    /// First non-empty locale variable, POSIX precedence.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|v| !v.is_empty())
            .map(|v| Self::from_locale(&v))
            .unwrap_or_default()
    }

    /// `fr_CA.UTF-8` → French, anything else → English.
    pub fn from_locale(locale: &str) -> Self {
        let code = locale.get(..2).unwrap_or_default().to_ascii_lowercase();
        if code == "fr" { Lang::Fr } else { Lang::En }
    }

    pub fn tr(self, msg: Msg) -> &'static str {
        match self {
            Lang::En => english(msg),
            Lang::Fr => french(msg),
        }
    }

    pub fn month_name(self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        const FR: [&str; 12] = [
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
            "septembre", "octobre", "novembre", "décembre",
        ];

        let names = match self {
            Lang::En => &EN,
            Lang::Fr => &FR,
        };
        month
            .checked_sub(1)
            .and_then(|idx| names.get(idx as usize))
            .copied()
            .unwrap_or("?")
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::EnterDistance => "Enter distance (km): ",
        Msg::EnterDuration => "Enter duration (h or HH:MM): ",
        Msg::CommentPrompt => "Comment (optional): ",
        Msg::UrlPrompt => "Ride URL (optional): ",
        Msg::RideAdded => "Ride added",
        Msg::StatisticsFor => "Statistics for",
        Msg::NoRidesFor => "No rides for",
        Msg::Rides => "Rides:",
        Msg::Distance => "Distance:",
        Msg::Duration => "Duration:",
        Msg::AverageSpeed => "Average speed:",
        Msg::AverageRide => "Average ride:",
        Msg::LongestRide => "Longest ride:",
        Msg::ColDate => "Date",
        Msg::ColDistance => "Distance (km)",
        Msg::ColDuration => "Duration (h)",
        Msg::ColSpeed => "Speed (km/h)",
        Msg::ColComment => "Comment",
        Msg::Yes => "yes",
        Msg::AllRides => "all rides",
        Msg::RangeTo => "to",
    }
}

fn french(msg: Msg) -> &'static str {
    match msg {
        Msg::EnterDistance => "Entrer la distance (km) : ",
        Msg::EnterDuration => "Entrer la durée (h ou HH:MM) : ",
        Msg::CommentPrompt => "Commentaire (optionnel) : ",
        Msg::UrlPrompt => "URL de l'itinéraire (optionnel) : ",
        Msg::RideAdded => "Randonnée ajoutée",
        Msg::StatisticsFor => "Statistiques pour",
        Msg::NoRidesFor => "Aucune randonnée pour",
        Msg::Rides => "Randonnées :",
        Msg::Distance => "Distance :",
        Msg::Duration => "Durée :",
        Msg::AverageSpeed => "Vitesse moyenne :",
        Msg::AverageRide => "Randonnée moyenne :",
        Msg::LongestRide => "Plus longue :",
        Msg::ColDate => "Date",
        Msg::ColDistance => "Distance (km)",
        Msg::ColDuration => "Durée (h)",
        Msg::ColSpeed => "Vitesse (km/h)",
        Msg::ColComment => "Commentaire",
        Msg::Yes => "oui",
        Msg::AllRides => "toutes les randonnées",
        Msg::RangeTo => "au",
    }
}

