// src/noyau/operateur.rs

use thiserror::Error;

/// Erreur de saisie (conversion d’une touche brute vers le noyau).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(char),
}

/// Les quatre opérations du pavé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché dans l’expression précédente (× et ÷ plutôt que * et /).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurSaisie;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            autre => Err(ErreurSaisie::OperateurInconnu(autre)),
        }
    }
}

/// a op b en flottant.
///
/// Division par zéro : NaN (pas de panique), `format_result` l’affichera "Erro".
pub fn compute(a: f64, b: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
    }
}
