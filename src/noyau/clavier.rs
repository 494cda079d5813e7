// src/noyau/clavier.rs
//
// Routage des entrées : touche brute -> action de la machine.
// La vue envoie soit le texte tapé (un caractère), soit le nom de la touche ("Enter", "Backspace").

use super::operateur::Operateur;

/// Une action = une opération publique de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
    Signe,
    Pourcentage,
}

/// Table clavier :
/// - '0'..='9'         => Chiffre
/// - '.' ou ','        => Point
/// - + - * /           => Operateur
/// - "Enter" ou '='    => Egal
/// - "Backspace"       => Retour
/// - 'c' / 'C'         => Effacer
///
/// Toute autre touche => None (ignorée).
pub fn action_pour_touche(touche: &str) -> Option<Action> {
    match touche {
        "Enter" | "=" => return Some(Action::Egal),
        "Backspace" => return Some(Action::Retour),
        _ => {}
    }

    let mut chars = touche.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match c {
        '0'..='9' => Some(Action::Chiffre(c)),
        '.' | ',' => Some(Action::Point),
        'c' | 'C' => Some(Action::Effacer),
        _ => Operateur::try_from(c).ok().map(Action::Operateur),
    }
}
