// src/noyau/format.rs
//
// Affichage des résultats + lecture du texte affiché.

/// Marqueur affiché pour tout résultat non fini (division par zéro, dépassement).
pub const MARQUEUR_ERREUR: &str = "Erro";

/// Nombre de décimales conservées (efface le bruit binaire: 0.1+0.2).
pub const PRECISION_DECIMALES: usize = 12;

/// Résultat numérique -> texte d’affichage.
///
/// - non fini => "Erro"
/// - arrondi à 12 décimales, puis forme la plus courte ("123456.7", pas "123456.699999999997")
/// - entier => sans point ("5", pas "5.0")
pub fn format_result(valeur: f64) -> String {
    if !valeur.is_finite() {
        return MARQUEUR_ERREUR.to_string();
    }

    // Arrondi décimal correct, relu en f64 : le flottant le plus proche de la valeur arrondie.
    let arrondi = format!("{:.*}", PRECISION_DECIMALES, valeur)
        .parse::<f64>()
        .unwrap_or(valeur);

    // -0.0000000000001 arrondi => -0
    let arrondi = if arrondi == 0.0 { 0.0 } else { arrondi };

    let texte = format!("{arrondi}");
    retire_zeros_decimaux(&texte).to_string()
}

/// "12.000" -> "12" ; "1.500" -> "1.5".
fn retire_zeros_decimaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Texte affiché -> nombre (None si illisible, ex: "Erro" ou "-").
///
/// Accepte "5.", ".5", "-0." comme la saisie les produit.
pub fn lire_nombre(s: &str) -> Option<f64> {
    let s = s.trim();
    let chiffres = s.strip_prefix('-').unwrap_or(s);

    // Refuse "inf", "NaN", "1e5"... : l’affichage ne contient que chiffres + un point.
    let compte_points = chiffres.bytes().filter(|b| *b == b'.').count();
    let valide = compte_points <= 1
        && chiffres.bytes().any(|b| b.is_ascii_digit())
        && chiffres.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if !valide {
        return None;
    }

    s.parse::<f64>().ok()
}
