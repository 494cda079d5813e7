//! Tests scénarios : séquences de touches complètes, comme un utilisateur les tape.
//!
//! Chaque scénario passe par la table clavier (sauf % et ±, boutons seulement),
//! donc couvre routage + machine ensemble.

use super::clavier::{action_pour_touche, Action};
use super::format::MARQUEUR_ERREUR;
use super::machine::Calculatrice;
use super::operateur::Operateur;

fn tape(touches: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::new();
    for t in touches {
        let action = action_pour_touche(t).unwrap_or_else(|| panic!("touche inconnue {t:?}"));
        c.appliquer(action);
    }
    c
}

#[test]
fn scenario_addition_simple() {
    let c = tape(&["2", "+", "3", "="]);
    assert_eq!(c.display(), "5");
    assert_eq!(c.previous_expression(), "");
}

#[test]
fn scenario_division_par_zero() {
    let c = tape(&["5", "/", "0", "="]);
    assert_eq!(c.display(), MARQUEUR_ERREUR);
}

#[test]
fn scenario_calcul_enchaine() {
    let mut c = tape(&["1", "+", "2", "+"]);
    assert_eq!(c.display(), "3");
    assert_eq!(c.previous_expression(), "3 +");

    c.appliquer(Action::Chiffre('3'));
    c.appliquer(Action::Egal);
    assert_eq!(c.display(), "6");
}

#[test]
fn scenario_retour_jusqu_a_zero() {
    let c = tape(&["7", "Backspace", "Backspace"]);
    assert_eq!(c.display(), "0");
}

#[test]
fn scenario_pourcentage() {
    let mut c = tape(&["5"]);
    c.appliquer(Action::Pourcentage);
    assert_eq!(c.display(), "0.05");
}

#[test]
fn scenario_surcharge_operateur() {
    let mut c = tape(&["9", "+", "-"]);
    assert_eq!(c.display(), "9");
    assert_eq!(c.previous_expression(), "9 -");

    c.appliquer(Action::Chiffre('1'));
    c.appliquer(Action::Egal);
    assert_eq!(c.display(), "8");
}

#[test]
fn scenario_virgule_comme_point() {
    let c = tape(&["1", ",", "5", "*", "2", "Enter"]);
    assert_eq!(c.display(), "3");
}

#[test]
fn scenario_bruit_binaire() {
    let c = tape(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(c.display(), "0.3");
}

#[test]
fn scenario_effacer_au_clavier() {
    let c = tape(&["4", "*", "C"]);
    assert_eq!(c.display(), "0");
    assert_eq!(c.previous_expression(), "");
}

#[test]
fn scenario_signe_puis_calcul() {
    let mut c = tape(&["6"]);
    c.appliquer(Action::Signe);
    c.appliquer(Action::Operateur(Operateur::Fois));
    c.appliquer(Action::Chiffre('2'));
    c.appliquer(Action::Egal);
    assert_eq!(c.display(), "-12");
}

#[test]
fn scenario_resultat_reutilise() {
    // Après "=", une nouvelle saisie s’ajoute au résultat (pas d’attente).
    let c = tape(&["2", "+", "3", "=", "1"]);
    assert_eq!(c.display(), "51");
}

#[test]
fn scenario_grande_partie_entiere_sans_bruit() {
    let c = tape(&["1", "2", "3", "4", "5", "6", ".", "7", "+", "0", "="]);
    assert_eq!(c.display(), "123456.7");

    let c = tape(&["9", "8", "7", "6", "5", ".", "4", "3", "*", "1", "="]);
    assert_eq!(c.display(), "98765.43");

    let c = tape(&["1", "2", "3", "4", "5", "6", "7", ".", "1", "-", "0", "Enter"]);
    assert_eq!(c.display(), "1234567.1");
}
