//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - operateur.rs : + - × ÷ (type fermé) + compute
//! - format.rs    : affichage des résultats ("Erro", 12 décimales) + lecture de l’affichage
//! - machine.rs   : machine à états (opérande, opérateur, attente)
//! - clavier.rs   : routage touche -> action

pub mod clavier;
pub mod format;
pub mod machine;
pub mod operateur;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use clavier::{action_pour_touche, Action};
pub use machine::Calculatrice;
pub use operateur::Operateur;
