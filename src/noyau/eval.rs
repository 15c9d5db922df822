//! Noyau — évaluation (pipeline réel)
//!
//! phrase “what percent of … is …” ? -> pourcentage arrondi
//! sinon : tokenize -> RPN -> valeur -> arrondi -> fraction (si '/' dans l'entrée) ou décimal
//!
//! Chaque appel est indépendant : aucune pile ni état ne survit à l'appel.

use tracing::debug;

use super::erreur::ErreurCalc;
use super::format::{approx_rationnelle, arrondi, format_decimal, format_fraction};
use super::jetons::{format_tokens, tokenize};
use super::pourcentage;
use super::rpn::{eval_rpn, to_rpn};

/// Précision d'arrondi par défaut (chiffres après la virgule).
pub const DECIMALES_DEFAUT: u32 = 2;

/// Borne du balayage des dénominateurs par défaut.
pub const MAX_DENOMINATEUR_DEFAUT: i64 = 5000;

/// Réglages immuables, construits une fois au démarrage (ligne de commande).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub decimales: u32,
    pub max_denominateur: i64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            max_denominateur: MAX_DENOMINATEUR_DEFAUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    /// Valeur arrondie.
    pub valeur: f64,
    /// Fraction "n/d", décimal, ou (phrase pourcentage) la valeur en texte.
    pub texte: String,
    /// Vrai pour la phrase “what percent of …”.
    pub pourcentage: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une ligne et retourne le résultat + la démarche
/// (jetons, RPN ; vide pour la phrase pourcentage).
pub fn eval_expression(
    entree: &str,
    reglages: &Reglages,
) -> Result<(Resultat, DemarcheNoyau), ErreurCalc> {
    // 0) Phrase pourcentage (prioritaire)
    if let Some((entier, partie)) = pourcentage::detecter(entree) {
        let pct = fini(arrondi((partie / entier) * 100.0, reglages.decimales))?;
        debug!(entier, partie, pct, "phrase pourcentage");
        let r = Resultat {
            valeur: pct,
            texte: format_decimal(pct),
            pourcentage: true,
        };
        return Ok((r, DemarcheNoyau::default()));
    }

    // 1) Jetons
    let jetons = tokenize(entree);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!(jetons = %d.jetons, rpn = %d.rpn, "conversion");

    // 3) Valeur
    let brut = eval_rpn(&rpn)?;
    let valeur = fini(arrondi(brut, reglages.decimales))?;

    // 4) Texte : fraction dès qu'un '/' apparaît dans l'entrée d'origine
    let texte = if entree.contains('/') {
        let r = approx_rationnelle(valeur, reglages.max_denominateur)
            .ok_or(ErreurCalc::NonFini)?;
        format_fraction(&r)
    } else {
        format_decimal(valeur)
    };
    debug!(brut, valeur, texte = %texte, "résultat");

    let r = Resultat {
        valeur,
        texte,
        pourcentage: false,
    };
    Ok((r, d))
}

/// ±∞ / NaN -> erreur (division par zéro quelque part).
fn fini(x: f64) -> Result<f64, ErreurCalc> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurCalc::NonFini)
    }
}
