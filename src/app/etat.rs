//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique machine de calcul et lui transmettre les entrées,
//! qu’elles viennent d’un bouton (Action directe) ou du clavier (touche brute).
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par le noyau).
//! - Une touche inconnue est ignorée, sans effet sur l’état.

use tracing::trace;

use crate::noyau::{action_pour_touche, Action, Calculatrice};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    /// Bouton du pavé.
    pub fn appliquer(&mut self, action: Action) {
        self.calc.appliquer(action);
    }

    /// Touche clavier (texte d’un caractère ou nom : "Enter", "Backspace").
    /// Renvoie true si la touche a été reconnue.
    pub fn touche(&mut self, touche: &str) -> bool {
        match action_pour_touche(touche) {
            Some(action) => {
                self.appliquer(action);
                true
            }
            None => {
                trace!(touche, "touche ignorée");
                false
            }
        }
    }

    pub fn display(&self) -> &str {
        self.calc.display()
    }

    pub fn previous_expression(&self) -> String {
        self.calc.previous_expression()
    }
}
