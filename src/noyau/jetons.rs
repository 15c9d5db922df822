// src/noyau/jetons.rs

use tracing::trace;

use super::erreur::ErreurCalc;
use super::operateurs::Op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral brut : "12", "2.5", "3/4" (lu seulement à l'évaluation)
    Num(String),

    Op(Op),

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons (ordre infixe).
/// Supporte:
/// - nombres: suite maximale de [0-9./] commençant par un chiffre
///   (ex: 12, 2.5, 3/4 -> UN seul jeton)
/// - opérateurs + - * / %
/// - parenthèses ( )
///
/// Tout autre caractère est ignoré (pas d'erreur).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Littéral : "3/4" sans espaces reste collé (fraction), "3 / 4" non.
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len()
                && (chars[i].is_ascii_digit() || chars[i] == '.' || chars[i] == '/')
            {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => match Op::depuis_char(c) {
                Some(op) => out.push(Tok::Op(op)),
                None => trace!(caractere = %c, position = i, "caractère ignoré"),
            },
        }
        i += 1;
    }

    out
}

/// Valeur numérique d'un littéral.
/// - "a"   -> a
/// - "a/b" -> a / b (b = 0 donne ±∞ ou NaN, signalé plus haut)
///
/// Refuse: plus d'un '/', côté vide, plus d'un '.' par côté.
pub fn valeur_litterale(lit: &str) -> Result<f64, ErreurCalc> {
    let invalide = || ErreurCalc::NombreInvalide(lit.to_string());

    let mut cotes = lit.split('/');
    let num = cotes.next().ok_or_else(invalide)?;
    let den = cotes.next();
    if cotes.next().is_some() {
        return Err(invalide());
    }

    let n = decimal(num).ok_or_else(invalide)?;
    match den {
        None => Ok(n),
        Some(d) => Ok(n / decimal(d).ok_or_else(invalide)?),
    }
}

/// Décimal invariant : chiffres, au plus un '.', au moins un chiffre.
fn decimal(s: &str) -> Option<f64> {
    let (ent, frac) = s.split_once('.').unwrap_or((s, ""));
    let chiffres_ok = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !chiffres_ok(ent) || !chiffres_ok(frac) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(lit) => lit.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
