// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau (une évaluation = au plus une erreur).
///
/// Le message (`Display`) est celui affiché après `Error:` par la boucle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Littéral illisible (`1..2`, `3//4`, `(` resté sur la pile…).
    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    /// Dépilement sur une pile vide (opérande manquante, `)` orpheline, entrée vide).
    #[error("expression invalide: {0}")]
    PileVide(&'static str),

    /// Il reste plus d'une valeur après la RPN (ex: `3 4`).
    #[error("expression invalide: {0} valeurs sans opérateur")]
    OperandesEnTrop(usize),

    /// Résultat infini ou NaN (division par zéro).
    #[error("division par zéro (résultat non fini)")]
    NonFini,
}
