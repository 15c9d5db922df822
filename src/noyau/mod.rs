//! Noyau calcul (fractions + pourcentages)
//!
//! Organisation interne :
//! - erreur.rs       : ErreurCalc (message affiché après "Error:")
//! - operateurs.rs   : table fixe + - * / % (précédence, associativité, fonction)
//! - jetons.rs       : tokenisation + lecture des littéraux (3/4, 2.5)
//! - rpn.rs          : shunting-yard + évaluation RPN
//! - format.rs       : arrondi + fraction approchée (n/d, d <= 5000)
//! - pourcentage.rs  : phrase “what percent of X is Y”
//! - eval.rs         : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod pourcentage;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::{eval_expression, DemarcheNoyau, Reglages, Resultat};
