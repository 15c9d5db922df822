//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés du pipeline sur des grilles, pas des cas isolés.
//! - budget temps global
//! - tailles bornées
//!
//! Notes :
//! - La fraction est calculée sur la valeur ARRONDIE (2 décimales), donc
//!   toute grille en k/100 doit se reproduire exactement (forme réduite).
//! - Le balayage des dénominateurs est strictement croissant : à erreur égale,
//!   le plus petit dénominateur gagne.

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{FromPrimitive, ToPrimitive};

use super::erreur::ErreurCalc;
use super::format::approx_rationnelle;
use super::{eval_expression, Reglages, Resultat};

fn eval_ok(expr: &str) -> Resultat {
    eval_expression(expr, &Reglages::default())
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .0
}

fn assert_valeur(expr: &str, attendu: f64) {
    let r = eval_ok(expr);
    assert!(
        (r.valeur - attendu).abs() < 1e-9,
        "expr={expr:?} valeur={} attendu={attendu}",
        r.valeur
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Exactitude (arrondie à 2 décimales) ------------------------ */

#[test]
fn sci_valeurs_connues() {
    assert_valeur("1 + 2 * 3", 7.0);
    assert_valeur("(1 + 2) * 3", 9.0);
    assert_valeur("10 - 4 - 3", 3.0);
    assert_valeur("100 / 10 / 5", 2.0);
    assert_valeur("2 * (3 + 4) - 5 / 2", 11.5);
    assert_valeur("((2))", 2.0);
    assert_valeur("1/3 + 1/3 + 1/3", 1.0);
    assert_valeur("7 / 3", 2.33);
    assert_valeur("2 / 3", 0.67);
    assert_valeur("0.1 + 0.2", 0.3);
    assert_valeur("3/4 * 2/3", 0.5);
}

/* ------------------------ Idempotence des fractions ------------------------ */

#[test]
fn sci_grille_centiemes_reproduite() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for k in -300i64..=300 {
        budget(t0, max);

        // pas de moins unaire : les négatifs passent par "0 - …"
        let expr = if k < 0 {
            format!("0 - {}/100", -k)
        } else {
            format!("{k}/100")
        };

        let attendu = Ratio::new(k, 100);
        let r = eval_ok(&expr);
        assert_eq!(
            r.texte,
            format!("{}/{}", attendu.numer(), attendu.denom()),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_demi_et_quarts() {
    assert_eq!(eval_ok("1/2").texte, "1/2");
    assert_eq!(eval_ok("2/4").texte, "1/2");
    assert_eq!(eval_ok("50/100").texte, "1/2");
    assert_eq!(eval_ok("3/4 + 0").texte, "3/4");
}

/* ------------------------ Départage : plus petit dénominateur ------------------------ */

#[test]
fn sci_plus_petit_denominateur() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for k in 0..=200 {
        budget(t0, max);

        let v = k as f64 / 100.0;
        let r = approx_rationnelle(v, 5000).unwrap();
        let n_choisi = r.numer().to_f64().unwrap();
        let d_choisi = r.denom().to_i64().unwrap();
        let err_choisie = (v - n_choisi / d_choisi as f64).abs();

        // aucun dénominateur plus petit n'atteint une erreur <= à celle retenue
        for d in 1..d_choisi {
            let n = (v * d as f64).round();
            let e = (v - n / d as f64).abs();
            assert!(e > err_choisie, "v={v} d={d} bat d_choisi={d_choisi}");
        }
    }
}

/* ------------------------ Robustesse : pas d'état résiduel ------------------------ */

#[test]
fn sci_erreurs_sans_fuite_entre_appels() {
    let mauvaises = ["3 + + 4", ")4(", "", "(", "1 2", "*", "3//4", "5 / 0"];

    for m in mauvaises {
        assert!(
            eval_expression(m, &Reglages::default()).is_err(),
            "devait échouer: {m:?}"
        );
        // l'appel suivant repart de zéro
        assert_valeur("1/2 + 1/4", 0.75);
    }
}

#[test]
fn sci_division_par_zero_reproductible() {
    for _ in 0..3 {
        let e = eval_expression("5 / 0", &Reglages::default()).map(|(r, _)| r);
        assert_eq!(e, Err(ErreurCalc::NonFini));
    }
    // ∞ absorbé avant la fin : le résultat final est fini, donc accepté
    assert_valeur("1 / (1 / 0)", 0.0);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..800 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
    }
    budget(t0, max);

    // 800*(1/2)=400
    let r = eval_ok(&expr);
    assert_eq!(r.texte, "400/1");
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let prof = 500;
    let expr = format!("{}1/2{}", "(".repeat(prof), ")".repeat(prof));
    assert_eq!(eval_ok(&expr).texte, "1/2");
}

#[test]
fn sci_stress_grand_numerateur() {
    // au-delà de i64::MAX : le numérateur suit exactement la valeur
    let big = "9".repeat(20);
    let r = eval_ok(&format!("{big}/7 + 1/7"));
    let exact = BigInt::from_f64(r.valeur).unwrap();
    assert_eq!(r.texte, format!("{exact}/1"));

    let r = eval_ok("20000000000000000000/1");
    assert_eq!(r.valeur, 2e19);
    assert_eq!(r.texte, "20000000000000000000/1");
}

#[test]
fn sci_stress_limite_des_f64() {
    // 2e306 * 100 dépasse f64::MAX : l'arrondi ne doit pas produire ∞
    let big = format!("2{}", "0".repeat(306));

    let r = eval_ok(&big);
    assert_eq!(r.valeur, 2e306);
    assert_eq!(r.texte, format!("{}", 2e306));

    let r = eval_ok(&format!("{big}/1"));
    assert_eq!(r.valeur, 2e306);
    let exact = BigInt::from_f64(2e306).unwrap();
    assert_eq!(r.texte, format!("{exact}/1"));

    // vrai débordement : erreur, jamais "inf"
    let e = eval_expression(&format!("{big} * {big}"), &Reglages::default()).map(|(r, _)| r);
    assert_eq!(e, Err(ErreurCalc::NonFini));
}
