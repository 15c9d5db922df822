// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile de f64
//
// Règles:
// - '(' toujours empilée ; ')' dépile jusqu'à '(' (jetée, jamais émise)
// - ')' sans '(' sur la pile : erreur (pile vide)
// - fin d'entrée : tout ce qui reste sur la pile part en sortie, '(' compris
//   (l'évaluation la refusera ensuite comme nombre invalide)

use super::erreur::ErreurCalc;
use super::jetons::{valeur_litterale, Tok};
use super::operateurs::{Assoc, Op};

/// Vrai si `top` doit sortir avant d'empiler `op`.
fn doit_depiler(top: Op, op: Op) -> bool {
    match op.assoc() {
        Assoc::Gauche => op.precedence() <= top.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("1/2"), Op(+), Num("3"), Op(*), Num("4")]
///   rpn:    [Num("1/2"), Num("3"), Num("4"), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if !doit_depiler(*top, op) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(Tok::Op(op));
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(t) => out.push(t),
                    None => return Err(ErreurCalc::PileVide("parenthèse fermante sans ouvrante")),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// - Op : dépile b (droite) puis a (gauche), empile a `op` b
/// - Num : littéral lu (fraction "a/b" divisée)
/// - à la fin, exactement une valeur doit rester
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurCalc::PileVide("opérande manquante"))?;
                let a = st.pop().ok_or(ErreurCalc::PileVide("opérande manquante"))?;
                st.push(op.appliquer(a, b));
            }
            Tok::Num(lit) => st.push(valeur_litterale(lit)?),
            Tok::LPar => return Err(ErreurCalc::NombreInvalide("(".into())),
            Tok::RPar => return Err(ErreurCalc::NombreInvalide(")".into())),
        }
    }

    match st.len() {
        0 => Err(ErreurCalc::PileVide("expression vide")),
        1 => st.pop().ok_or(ErreurCalc::PileVide("expression vide")),
        n => Err(ErreurCalc::OperandesEnTrop(n)),
    }
}
