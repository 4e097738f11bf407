//! Fériés nationaux : trait d'accès + calendriers concrets.
//!
//! Le calendrier est une dépendance injectée, construite une fois par
//! l'appelant. En dehors de sa plage de données un fournisseur échoue
//! explicitement au lieu de répondre « jour ouvré ».

use crate::model::Country;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("no holiday data for country: {0}")]
    UnknownCountry(String),
    #[error("no holiday data for year {year} in {country}")]
    YearUnavailable { country: String, year: i32 },
}

/// Source de données « est-ce un férié national ? », clé (pays, date).
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    fn is_holiday(&self, date: NaiveDate, country: &Country) -> Result<bool, HolidayError>;
}

/// Samedi ou dimanche.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Jours fériés sud-coréens, table fixe 2024–2027, rattrapages inclus
/// (à mettre à jour chaque année ; scrutins et fériés exceptionnels exclus).
#[derive(Debug, Clone)]
pub struct KoreaHolidays {
    dates: BTreeSet<NaiveDate>,
    years: RangeInclusive<i32>,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid table date")
}

impl KoreaHolidays {
    pub fn new() -> Self {
        let mut days = BTreeSet::new();

        // 2024
        days.insert(day(2024, 1, 1)); // Jour de l'an
        days.insert(day(2024, 2, 9)); // Seollal (veille)
        days.insert(day(2024, 2, 10)); // Seollal
        days.insert(day(2024, 2, 11)); // Seollal (lendemain)
        days.insert(day(2024, 2, 12)); // Seollal, rattrapage
        days.insert(day(2024, 3, 1)); // Mouvement du 1er mars
        days.insert(day(2024, 5, 5)); // Jour des enfants
        days.insert(day(2024, 5, 6)); // Jour des enfants, rattrapage
        days.insert(day(2024, 5, 15)); // Anniversaire de Bouddha
        days.insert(day(2024, 6, 6)); // Jour du Souvenir
        days.insert(day(2024, 8, 15)); // Libération
        days.insert(day(2024, 9, 16)); // Chuseok (veille)
        days.insert(day(2024, 9, 17)); // Chuseok
        days.insert(day(2024, 9, 18)); // Chuseok (lendemain)
        days.insert(day(2024, 10, 3)); // Fondation nationale
        days.insert(day(2024, 10, 9)); // Hangeul
        days.insert(day(2024, 12, 25)); // Noël

        // 2025
        days.insert(day(2025, 1, 1)); // Jour de l'an
        days.insert(day(2025, 1, 28)); // Seollal (veille)
        days.insert(day(2025, 1, 29)); // Seollal
        days.insert(day(2025, 1, 30)); // Seollal (lendemain)
        days.insert(day(2025, 3, 1)); // Mouvement du 1er mars
        days.insert(day(2025, 3, 3)); // Mouvement du 1er mars, rattrapage
        days.insert(day(2025, 5, 5)); // Jour des enfants + anniversaire de Bouddha
        days.insert(day(2025, 5, 6)); // Rattrapage du cumul du 5 mai
        days.insert(day(2025, 6, 6)); // Jour du Souvenir
        days.insert(day(2025, 8, 15)); // Libération
        days.insert(day(2025, 10, 3)); // Fondation nationale
        days.insert(day(2025, 10, 5)); // Chuseok (veille)
        days.insert(day(2025, 10, 6)); // Chuseok
        days.insert(day(2025, 10, 7)); // Chuseok (lendemain)
        days.insert(day(2025, 10, 8)); // Chuseok, rattrapage
        days.insert(day(2025, 10, 9)); // Hangeul
        days.insert(day(2025, 12, 25)); // Noël

        // 2026
        days.insert(day(2026, 1, 1)); // Jour de l'an
        days.insert(day(2026, 2, 16)); // Seollal (veille)
        days.insert(day(2026, 2, 17)); // Seollal
        days.insert(day(2026, 2, 18)); // Seollal (lendemain)
        days.insert(day(2026, 3, 1)); // Mouvement du 1er mars
        days.insert(day(2026, 3, 2)); // Mouvement du 1er mars, rattrapage
        days.insert(day(2026, 5, 5)); // Jour des enfants
        days.insert(day(2026, 5, 24)); // Anniversaire de Bouddha
        days.insert(day(2026, 5, 25)); // Anniversaire de Bouddha, rattrapage
        days.insert(day(2026, 6, 6)); // Jour du Souvenir
        days.insert(day(2026, 8, 15)); // Libération
        days.insert(day(2026, 8, 17)); // Libération, rattrapage
        days.insert(day(2026, 9, 24)); // Chuseok (veille)
        days.insert(day(2026, 9, 25)); // Chuseok
        days.insert(day(2026, 9, 26)); // Chuseok (lendemain)
        days.insert(day(2026, 9, 28)); // Chuseok, rattrapage
        days.insert(day(2026, 10, 3)); // Fondation nationale
        days.insert(day(2026, 10, 5)); // Fondation nationale, rattrapage
        days.insert(day(2026, 10, 9)); // Hangeul
        days.insert(day(2026, 12, 25)); // Noël

        // 2027
        days.insert(day(2027, 1, 1)); // Jour de l'an
        days.insert(day(2027, 2, 6)); // Seollal (veille)
        days.insert(day(2027, 2, 7)); // Seollal
        days.insert(day(2027, 2, 8)); // Seollal (lendemain)
        days.insert(day(2027, 2, 9)); // Seollal, rattrapage
        days.insert(day(2027, 3, 1)); // Mouvement du 1er mars
        days.insert(day(2027, 5, 5)); // Jour des enfants
        days.insert(day(2027, 5, 13)); // Anniversaire de Bouddha
        days.insert(day(2027, 6, 6)); // Jour du Souvenir
        days.insert(day(2027, 8, 15)); // Libération
        days.insert(day(2027, 8, 16)); // Libération, rattrapage
        days.insert(day(2027, 9, 14)); // Chuseok (veille)
        days.insert(day(2027, 9, 15)); // Chuseok
        days.insert(day(2027, 9, 16)); // Chuseok (lendemain)
        days.insert(day(2027, 10, 3)); // Fondation nationale
        days.insert(day(2027, 10, 4)); // Fondation nationale, rattrapage
        days.insert(day(2027, 10, 9)); // Hangeul
        days.insert(day(2027, 10, 11)); // Hangeul, rattrapage
        days.insert(day(2027, 12, 25)); // Noël
        days.insert(day(2027, 12, 27)); // Noël, rattrapage

        Self {
            dates: days,
            years: 2024..=2027,
        }
    }

    /// Années couvertes par la table.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }
}

impl Default for KoreaHolidays {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayProvider for KoreaHolidays {
    fn is_holiday(&self, date: NaiveDate, country: &Country) -> Result<bool, HolidayError> {
        if country.as_str() != "KR" {
            return Err(HolidayError::UnknownCountry(country.as_str().to_string()));
        }
        if !self.years.contains(&date.year()) {
            return Err(HolidayError::YearUnavailable {
                country: country.as_str().to_string(),
                year: date.year(),
            });
        }
        Ok(self.dates.contains(&date))
    }
}

/// Calendrier sur mesure : un ensemble de dates fourni par l'appelant,
/// valable pour toutes les années. Sert de faux en test et de calendrier
/// d'unité spécifique.
#[derive(Debug, Clone)]
pub struct FixedHolidays {
    country: Country,
    dates: BTreeSet<NaiveDate>,
}

impl FixedHolidays {
    pub fn new(country: Country, dates: BTreeSet<NaiveDate>) -> Self {
        Self { country, dates }
    }
}

impl HolidayProvider for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate, country: &Country) -> Result<bool, HolidayError> {
        if country != &self.country {
            return Err(HolidayError::UnknownCountry(country.as_str().to_string()));
        }
        Ok(self.dates.contains(&date))
    }
}
