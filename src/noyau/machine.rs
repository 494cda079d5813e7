//! src/noyau/machine.rs
//!
//! Machine à états de la calculatrice.
//!
//! Rôle : interpréter une suite d’actions (boutons ou clavier) et maintenir
//! `display` + `previous_expression`, seules sources de vérité pour la vue.
//!
//! Contrats :
//! - Aucune action ne panique ni ne renvoie d’erreur : hors contexte => sans effet.
//! - `display` n’est jamais vide : numéral valide (un seul point, `-` en tête optionnel)
//!   ou le marqueur "Erro".
//! - Le calcul en cours est un enum explicite : pas d’opérateur sans premier opérande.

use tracing::{debug, trace};

use super::clavier::Action;
use super::format::{format_result, lire_nombre, MARQUEUR_ERREUR};
use super::operateur::{compute, Operateur};

/// Calcul en cours (premier opérande + opérateur en attente).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Calcul {
    /// Rien en attente.
    #[default]
    Inactif,
    /// Opérateur choisi, le second opérande n’a pas commencé :
    /// la prochaine saisie remplace l’affichage.
    EnAttente { premier: f64, op: Operateur },
    /// Second opérande en cours de saisie dans l’affichage.
    Saisie { premier: f64, op: Operateur },
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    display: String,
    calcul: Calcul,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            calcul: Calcul::Inactif,
        }
    }
}

impl Calculatrice {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    pub fn display(&self) -> &str {
        &self.display
    }

    /// "<premier opérande> <symbole>" tant qu’un opérateur est en attente, sinon vide.
    pub fn previous_expression(&self) -> String {
        match self.calcul {
            Calcul::Inactif => String::new(),
            Calcul::EnAttente { premier, op } | Calcul::Saisie { premier, op } => {
                format!("{} {}", format_result(premier), op.symbole())
            }
        }
    }

    #[cfg(test)]
    pub fn calcul(&self) -> Calcul {
        self.calcul
    }

    pub fn attend_second_operande(&self) -> bool {
        matches!(self.calcul, Calcul::EnAttente { .. })
    }

    fn en_erreur(&self) -> bool {
        self.display == MARQUEUR_ERREUR
    }

    /// Valeur de l’affichage ; NaN si illisible (le calcul dégradera en "Erro").
    fn valeur_affichee(&self) -> f64 {
        lire_nombre(&self.display).unwrap_or(f64::NAN)
    }

    /// Quitte `EnAttente` : la saisie du second opérande commence.
    fn commence_second_operande(&mut self) -> bool {
        if let Calcul::EnAttente { premier, op } = self.calcul {
            self.calcul = Calcul::Saisie { premier, op };
            true
        } else {
            false
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Chiffre '0'..='9'. Tout autre caractère est ignoré.
    pub fn press_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            debug!(touche = ?d, "chiffre ignoré");
            return;
        }

        if self.commence_second_operande() || self.display == "0" || self.en_erreur() {
            self.display.clear();
        }
        self.display.push(d);
    }

    /// Point décimal : au plus un dans l’affichage.
    pub fn press_dot(&mut self) {
        if self.commence_second_operande() || self.en_erreur() {
            self.display = "0.".to_string();
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn press_operator(&mut self, op: Operateur) {
        let premier = match self.calcul {
            // Surcharge : on remplace l’opérateur, aucun calcul.
            Calcul::EnAttente { premier, .. } => premier,
            Calcul::Inactif => self.valeur_affichee(),
            // Calcul enchaîné : le résultat devient le nouveau premier opérande.
            Calcul::Saisie { premier, op: precedent } => {
                let resultat = compute(premier, self.valeur_affichee(), precedent);
                self.display = format_result(resultat);
                debug!(resultat, "calcul enchaîné");
                resultat
            }
        };

        self.calcul = Calcul::EnAttente { premier, op };
    }

    /// "=" : sans effet si aucun opérateur n’est en attente.
    pub fn calculate(&mut self) {
        let (premier, op) = match self.calcul {
            Calcul::Inactif => return,
            Calcul::EnAttente { premier, op } | Calcul::Saisie { premier, op } => (premier, op),
        };

        let second = self.valeur_affichee();
        let resultat = compute(premier, second, op);
        self.display = format_result(resultat);
        self.calcul = Calcul::Inactif;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Efface le dernier caractère. Sans effet tant que le second opérande n’a pas commencé.
    pub fn backspace(&mut self) {
        if self.attend_second_operande() {
            return;
        }
        if self.en_erreur() {
            self.display = "0".to_string();
            return;
        }

        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
        }
    }

    /// Ajoute/retire le `-` de tête, sans reformater.
    pub fn toggle_sign(&mut self) {
        if self.display == "0" || self.en_erreur() {
            return;
        }
        match self.display.strip_prefix('-') {
            Some(reste) => self.display = reste.to_string(),
            None => self.display.insert(0, '-'),
        }
    }

    /// Affichage / 100. Sans effet si l’affichage n’est pas un nombre.
    pub fn percent(&mut self) {
        if let Some(v) = lire_nombre(&self.display) {
            self.display = format_result(v / 100.0);
        }
    }

    /// Point d’entrée unique pour la vue (boutons + clavier).
    pub fn appliquer(&mut self, action: Action) {
        debug!(?action, "action");
        match action {
            Action::Chiffre(d) => self.press_digit(d),
            Action::Point => self.press_dot(),
            Action::Operateur(op) => self.press_operator(op),
            Action::Egal => self.calculate(),
            Action::Effacer => self.clear_all(),
            Action::Retour => self.backspace(),
            Action::Signe => self.toggle_sign(),
            Action::Pourcentage => self.percent(),
        }
        trace!(display = %self.display, calcul = ?self.calcul, "état");
    }
}
