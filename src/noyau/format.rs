// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, Zero};

/* ------------------------ Arrondi ------------------------ */

/// Arrondi à `decimales` chiffres, demi-valeur loin de zéro (`f64::round`).
/// Normalise -0 en 0 (sinon "-0" à l'affichage).
///
/// Si `x * 10^decimales` déborde (|x| > ~1e306), `x` est rendu tel quel :
/// à cette taille un f64 n'a plus de partie décimale.
pub fn arrondi(x: f64, decimales: u32) -> f64 {
    let echelle = 10f64.powi(decimales as i32);
    let mis_a_echelle = x * echelle;
    if !mis_a_echelle.is_finite() {
        return x;
    }

    let r = mis_a_echelle.round() / echelle;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/* ------------------------ Décimal ------------------------ */

/// Texte décimal court : 50, 0.75, -2.5 (jamais de ".0" final).
pub fn format_decimal(x: f64) -> String {
    format!("{x}")
}

/* ------------------------ Fraction approchée ------------------------ */

/// Meilleure approximation n/d de `x` pour d ∈ [1, max_denominateur].
///
/// Balayage linéaire : d croissant, amélioration STRICTE seulement,
/// donc à erreur égale le plus petit d gagne. Le signe de `x` est porté
/// par le numérateur. Non réduite (déjà irréductible par construction).
///
/// Numérateur en BigInt : exact même au-delà de i64::MAX.
/// None si `x` n'est pas fini.
pub fn approx_rationnelle(x: f64, max_denominateur: i64) -> Option<BigRational> {
    if !x.is_finite() {
        return None;
    }
    let v = x.abs();

    let mut meilleur: (f64, i64) = (1.0, 1);
    let mut erreur_min = (v - 1.0).abs();

    for d in 1..=max_denominateur {
        let n = (v * d as f64).round();
        let erreur = (v - n / d as f64).abs();
        // n infini (v * d déborde) => erreur infinie ou NaN, jamais retenue
        if erreur < erreur_min {
            erreur_min = erreur;
            meilleur = (n, d);
        }
    }

    let (n, d) = meilleur;
    let n = BigInt::from_f64(n)?;
    let d = BigInt::from(d);
    if x < 0.0 && !n.is_zero() {
        Some(BigRational::new_raw(-n, d))
    } else {
        Some(BigRational::new_raw(n, d))
    }
}

/// "n/d" toujours (même si d = 1 : "2/1"), contrairement au Display de Ratio.
pub fn format_fraction(r: &BigRational) -> String {
    format!("{}/{}", r.numer(), r.denom())
}
