use crate::model::RestPeriod;

/// Permet de customiser le rendu d'une recommandation (console, mail, etc.).
pub trait ResultRenderer {
    fn render(&self, rank: usize, period: &RestPeriod) -> String;
}

/// Gabarit texte compact pour la sortie console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ResultRenderer for TextRenderer {
    fn render(&self, rank: usize, period: &RestPeriod) -> String {
        format!(
            "#{rank} congé {leave_start} → {leave_end} | repos {rest_start} → {rest_end} | {total} jour(s) de repos pour {days} posé(s)",
            leave_start = period.leave_start,
            leave_end = period.leave_end,
            rest_start = period.rest_start,
            rest_end = period.rest_end,
            total = period.total_rest_days,
            days = period.leave_days
        )
    }
}
