#![forbid(unsafe_code)]
//! Conge — bibliothèque de placement de congés autour des jours chômés (sans BD).
//!
//! - Fériés nationaux derrière un trait [`HolidayProvider`] (table fixe fournie
//!   pour la Corée du Sud).
//! - Extension d'une fenêtre de congé en période de repos contiguë maximale.
//! - Balayage exhaustif d'une plage de départs, classement par repos total.
//! - Dates calendaires uniquement ; parsing ISO `YYYY-MM-DD` ; affichage en
//!   dehors de la lib.

pub mod holiday;
pub mod io;
pub mod model;
pub mod planner;
pub mod render;

pub use holiday::{FixedHolidays, HolidayError, HolidayProvider, KoreaHolidays};
pub use io::{export_results_csv, export_results_json, import_extra_holidays, parse_extra_holidays};
pub use model::{Country, ExtraHolidays, LeaveRequest, RestPeriod, SearchRange};
pub use planner::{PlanError, PlanOptions, Planner};
pub use render::{ResultRenderer, TextRenderer};
