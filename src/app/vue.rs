// src/app/vue.rs
//
// Vue (terminal) — boucle interactive
// -----------------------------------
// - une ligne lue -> AppCalc::traiter_ligne -> affichage
// - "exit", Ctrl-D (fin d'entrée) ou Ctrl-C : sortie propre
// - toute autre erreur de lecture remonte à main

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use super::etat::{Action, AppCalc};

/// Invite affichée avant chaque saisie.
const INVITE: &str = "> ";

impl AppCalc {
    /// Boucle principale : à appeler depuis main.
    pub fn boucle(&mut self) -> Result<(), ReadlineError> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let ligne = match rl.readline(INVITE) {
                Ok(ligne) => ligne,
                Err(ReadlineError::Eof) => {
                    debug!("fin d'entrée");
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("interrompu");
                    break;
                }
                Err(e) => return Err(e),
            };

            if !ligne.trim().is_empty() {
                noter_historique(rl.add_history_entry(ligne.as_str()));
            }

            match self.traiter_ligne(&ligne) {
                Action::Quitter => break,
                Action::Resultat(lignes) => {
                    for l in lignes {
                        println!("{l}");
                    }
                }
                Action::Erreur(msg) => println!("{msg}"),
            }
        }

        self.bilan();
        Ok(())
    }
}

/// Un échec d'historique est journalisé, jamais propagé :
/// seule une erreur de lecture termine la session.
fn noter_historique(res: Result<bool, ReadlineError>) -> bool {
    match res {
        Ok(ajoute) => ajoute,
        Err(e) => {
            debug!(erreur = %e, "historique non mis à jour");
            false
        }
    }
}
