// src/main.rs
//
// Calculatrice fractions — point d’entrée (terminal)
// ---------------------------------------------------
// But:
// - sans argument      : boucle interactive ("> "), "exit" pour sortir
// - avec une expression : une seule évaluation, code de sortie 1 si erreur
// - journal sur stderr  : -v (info), -vv (debug), -vvv (trace)

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

mod app;
mod noyau;

use app::{Action, AppCalc};
use noyau::eval::{DECIMALES_DEFAUT, MAX_DENOMINATEUR_DEFAUT};
use noyau::Reglages;

/// Calculatrice en ligne de commande : fractions (3/4 + 1/2), décimaux,
/// et “what percent of 25 is 5?”.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Chiffres après la virgule pour l'arrondi du résultat.
    #[arg(long, default_value_t = DECIMALES_DEFAUT,
          value_parser = clap::value_parser!(u32).range(0..=10))]
    decimals: u32,

    /// Plus grand dénominateur essayé pour la forme fractionnaire.
    #[arg(long, default_value_t = MAX_DENOMINATEUR_DEFAUT,
          value_parser = clap::value_parser!(i64).range(1..=1_000_000))]
    max_denominator: i64,

    /// Affiche aussi les jetons et la RPN de chaque calcul.
    #[arg(long)]
    rpn: bool,

    /// Verbosité du journal (répétable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression à évaluer une seule fois (sinon : mode interactif).
    expression: Option<String>,
}

fn init_logging(verbose: u8) {
    let niveau = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(niveau)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let reglages = Reglages {
        decimales: args.decimals,
        max_denominateur: args.max_denominator,
    };
    let mut app = AppCalc::new(reglages, args.rpn);

    // Mode “une ligne”
    if let Some(expr) = args.expression {
        return Ok(match app.traiter_ligne(&expr) {
            Action::Quitter => ExitCode::SUCCESS,
            Action::Resultat(lignes) => {
                for l in lignes {
                    println!("{l}");
                }
                ExitCode::SUCCESS
            }
            Action::Erreur(msg) => {
                println!("{msg}");
                ExitCode::FAILURE
            }
        });
    }

    app.boucle().context("lecture du terminal impossible")?;
    Ok(ExitCode::SUCCESS)
}
