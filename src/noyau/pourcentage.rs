// src/noyau/pourcentage.rs
//
// Phrase “what percent of <entier> is <partie>” (insensible à la casse).
// - <nombre> : chiffres + au plus un '.', au moins un chiffre
// - espaces multiples tolérés entre les mots
// - texte avant la phrase et après le second nombre ignoré ("?", etc.)

const PREFIXE: &str = "what percent of";

/// Cherche la phrase dans `s`. Retourne (entier, partie) si trouvée.
pub fn detecter(s: &str) -> Option<(f64, f64)> {
    // ASCII seulement : les index restent valides entre `s` et `bas`
    let bas = s.to_ascii_lowercase();

    bas.match_indices(PREFIXE)
        .find_map(|(i, _)| lire_suite(&bas[i + PREFIXE.len()..]))
}

/// Après le préfixe : `<ws+> nombre <ws+> is <ws+> nombre`.
fn lire_suite(reste: &str) -> Option<(f64, f64)> {
    let reste = espaces(reste)?;
    let (entier, reste) = nombre(reste)?;
    let reste = espaces(reste)?;
    let reste = reste.strip_prefix("is")?;
    let reste = espaces(reste)?;
    let (partie, _) = nombre(reste)?;
    Some((entier, partie))
}

/// Consomme au moins un blanc.
fn espaces(s: &str) -> Option<&str> {
    let t = s.trim_start();
    (t.len() < s.len()).then_some(t)
}

fn nombre(s: &str) -> Option<(f64, &str)> {
    let mut points = 0;
    let fin = s
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                points += 1;
                points > 1
            } else {
                !c.is_ascii_digit()
            }
        })
        .map_or(s.len(), |(i, _)| i);

    let lit = &s[..fin];
    if !lit.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    lit.parse::<f64>().ok().map(|v| (v, &s[fin..]))
}
