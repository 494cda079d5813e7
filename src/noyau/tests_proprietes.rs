//! Tests propriétés : séquences d’actions aléatoires (proptest).
//!
//! Invariants vérifiés après CHAQUE action :
//! - affichage jamais vide
//! - au plus un point décimal
//! - affichage = numéral lisible OU marqueur "Erro"
//! - expression précédente vide <=> aucun calcul en attente

use proptest::prelude::*;

use super::clavier::Action;
use super::format::{format_result, lire_nombre, MARQUEUR_ERREUR};
use super::machine::{Calcul, Calculatrice};
use super::operateur::{compute, Operateur};

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0u8..10).prop_map(|d| Action::Chiffre(char::from(b'0' + d))),
        2 => Just(Action::Point),
        2 => operateur().prop_map(Action::Operateur),
        1 => Just(Action::Egal),
        1 => Just(Action::Effacer),
        1 => Just(Action::Retour),
        1 => Just(Action::Signe),
        1 => Just(Action::Pourcentage),
    ]
}

fn chiffres_et_points() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0u8..10).prop_map(|d| Action::Chiffre(char::from(b'0' + d))),
            Just(Action::Point),
        ],
        0..40,
    )
}

fn verifie_invariants(c: &Calculatrice) -> Result<(), TestCaseError> {
    let d = c.display();
    prop_assert!(!d.is_empty());
    prop_assert!(d.matches('.').count() <= 1, "display={d:?}");
    prop_assert!(
        d == MARQUEUR_ERREUR || lire_nombre(d).is_some(),
        "display={d:?}"
    );
    prop_assert_eq!(
        c.previous_expression().is_empty(),
        c.calcul() == Calcul::Inactif
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_sur_toute_sequence(actions in prop::collection::vec(action(), 0..60)) {
        let mut c = Calculatrice::new();
        for a in actions {
            c.appliquer(a);
            verifie_invariants(&c)?;
        }
    }

    #[test]
    fn prop_un_seul_point_depuis_repos(actions in chiffres_et_points()) {
        let mut c = Calculatrice::new();
        for a in actions {
            c.appliquer(a);
            prop_assert!(c.display().matches('.').count() <= 1);
        }
    }

    #[test]
    fn prop_chiffre_apres_operateur_remplace(
        premier in chiffres_et_points(),
        op in operateur(),
        d in 0u8..10,
    ) {
        let mut c = Calculatrice::new();
        for a in premier {
            c.appliquer(a);
        }
        c.press_operator(op);
        prop_assert!(c.attend_second_operande());

        let chiffre = char::from(b'0' + d);
        c.press_digit(chiffre);
        prop_assert_eq!(c.display(), chiffre.to_string());
        prop_assert!(!c.attend_second_operande());
    }

    #[test]
    fn prop_division_par_zero_erreur(a in any::<f64>()) {
        let r = compute(a, 0.0, Operateur::Divise);
        prop_assert!(!r.is_finite());
        prop_assert_eq!(format_result(r), MARQUEUR_ERREUR);
    }

    #[test]
    fn prop_format_idempotent_sur_entiers(n in -1_000_000_000i64..1_000_000_000) {
        let une = format_result(n as f64);
        let relu = lire_nombre(&une);
        prop_assert_eq!(relu, Some(n as f64));
        prop_assert_eq!(format_result(n as f64), une);
    }
}
