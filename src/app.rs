// src/app.rs
//
// Calculatrice fractions — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc + Action (pour main.rs)
//
// etat.rs ne touche jamais au terminal ; vue.rs ne touche jamais au noyau.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{Action, AppCalc};
