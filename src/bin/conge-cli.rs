#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use conge::{
    io,
    model::{Country, ExtraHolidays, LeaveRequest, SearchRange},
    planner::{PlanOptions, Planner},
    render::{ResultRenderer, TextRenderer},
    KoreaHolidays,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de placement de congés (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Code pays pour les jours fériés
    #[arg(long, global = true, default_value = "KR")]
    country: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommander les meilleures fenêtres de congé dans une plage
    Recommend {
        /// Début de plage (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Fin de plage (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Jours de congé à poser
        #[arg(long)]
        days: u32,
        /// Nombre de recommandations affichées
        #[arg(long, default_value_t = 3)]
        top: usize,
        /// Fichier texte de jours chômés supplémentaires (une date par ligne)
        #[arg(long)]
        extra_file: Option<String>,
        #[arg(long, default_value_t = 60)]
        max_expansion_days: u32,
        #[arg(long, default_value_t = 730)]
        max_range_days: u32,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Calculer la période de repos autour d'un départ donné
    RestPeriod {
        /// Premier jour de congé (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Jours de congé à poser
        #[arg(long)]
        days: u32,
        /// Fichier texte de jours chômés supplémentaires (une date par ligne)
        #[arg(long)]
        extra_file: Option<String>,
        #[arg(long, default_value_t = 60)]
        max_expansion_days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let calendar = KoreaHolidays::new();
    let planner = Planner::new(&calendar, Country::new(&cli.country));

    let code = match cli.cmd {
        Commands::Recommend {
            start,
            end,
            days,
            top,
            extra_file,
            max_expansion_days,
            max_range_days,
            out_json,
            out_csv,
        } => {
            let extra = load_extra(extra_file.as_deref())?;
            let opts = PlanOptions {
                top_k: top,
                max_expansion_days,
                max_range_days,
            };
            let results = planner.recommend(SearchRange::new(start, end), days, &extra, opts)?;

            if let Some(path) = out_json {
                io::export_results_json(path, &results)?;
            }
            if let Some(path) = out_csv {
                io::export_results_csv(path, &results)?;
            }

            if results.is_empty() {
                eprintln!("Aucune fenêtre de {days} jour(s) ne tient dans la plage.");
                // Code 2 = WARNING/EMPTY
                2
            } else {
                let renderer = TextRenderer;
                for (idx, r) in results.iter().enumerate() {
                    println!("{}", renderer.render(idx + 1, r));
                }
                0
            }
        }
        Commands::RestPeriod {
            start,
            days,
            extra_file,
            max_expansion_days,
        } => {
            let extra = load_extra(extra_file.as_deref())?;
            let request = LeaveRequest::new(start, days).map_err(anyhow::Error::msg)?;
            let opts = PlanOptions {
                max_expansion_days,
                ..PlanOptions::default()
            };
            let period = planner.rest_period(&request, &extra, opts)?;
            println!("{}", TextRenderer.render(1, &period));
            0
        }
    };

    std::process::exit(code);
}

fn load_extra(path: Option<&str>) -> Result<ExtraHolidays> {
    match path {
        Some(p) => io::import_extra_holidays(p),
        None => Ok(ExtraHolidays::new()),
    }
}
