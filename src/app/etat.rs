//! src/app/etat.rs
//!
//! État de la session (sans terminal).
//!
//! Rôle : transformer UNE ligne saisie en action (quitter / lignes à afficher)
//! en passant par le noyau, et garder deux compteurs pour le bilan de fin.
//!
//! Contrats :
//! - Aucune lecture/écriture terminal ici (c'est vue.rs).
//! - Une erreur d'évaluation devient une ligne "Error: …", jamais une sortie.
//! - Aucun état du noyau ne passe d'une ligne à l'autre.

use tracing::{info, warn};

use crate::noyau::format::format_decimal;
use crate::noyau::{eval_expression, DemarcheNoyau, Reglages, Resultat};

/// Commande de sortie (insensible à la casse).
const COMMANDE_SORTIE: &str = "exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quitter,
    Resultat(Vec<String>),
    Erreur(String),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- paramètres (fixes pour la session) ---
    pub reglages: Reglages,
    pub montrer_rpn: bool,

    // --- bilan ---
    pub evaluations: usize,
    pub erreurs: usize,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default(), false)
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages, montrer_rpn: bool) -> Self {
        Self {
            reglages,
            montrer_rpn,
            evaluations: 0,
            erreurs: 0,
        }
    }

    /// Une ligne -> une action.
    pub fn traiter_ligne(&mut self, ligne: &str) -> Action {
        if ligne.trim().eq_ignore_ascii_case(COMMANDE_SORTIE) {
            return Action::Quitter;
        }

        self.evaluations += 1;
        match eval_expression(ligne, &self.reglages) {
            Ok((r, d)) => Action::Resultat(self.lignes_resultat(&r, &d)),
            Err(e) => {
                self.erreurs += 1;
                warn!(entree = ligne, erreur = %e, "évaluation refusée");
                Action::Erreur(format!("Error: {e}"))
            }
        }
    }

    fn lignes_resultat(&self, r: &Resultat, d: &DemarcheNoyau) -> Vec<String> {
        let mut out = vec![format_resultat(r)];

        // phrase pourcentage : démarche vide, rien à montrer
        if self.montrer_rpn && !d.rpn.is_empty() {
            out.push(format!("  jetons: {}", d.jetons));
            out.push(format!("  rpn: {}", d.rpn));
        }
        out
    }

    /// Trace de fin de session.
    pub fn bilan(&self) {
        info!(
            evaluations = self.evaluations,
            erreurs = self.erreurs,
            "fin de session"
        );
    }
}

/// "= 20%" (phrase) ou "= 3/4 (≈ 0.75)".
pub fn format_resultat(r: &Resultat) -> String {
    if r.pourcentage {
        format!("= {}%", format_decimal(r.valeur))
    } else {
        format!("= {} (≈ {})", r.texte, format_decimal(r.valeur))
    }
}
