// src/noyau/format.rs
//
// Affichage EXACT canonique d’une somme de racines :
//   -1 + 3Sqrt[2] - Sqrt[10] + 2Sqrt[17]
// - ordre croissant des radicandes (celui des seaux)
// - radicande 1 : entier nu
// - coefficient ±1 omis devant Sqrt[...]
// - à partir du 2e terme, le signe est porté par le séparateur

use num_bigint::BigInt;
use num_traits::{One, Signed};

use super::canon::Termes;

/* ------------------------ Helpers ------------------------ */

fn format_sqrt_of_int(n: &BigInt) -> String {
    format!("Sqrt[{n}]")
}

/// c·√a -> "c" si a=1 ; "Sqrt[a]" si c=1 ; "-Sqrt[a]" si c=-1 ; "cSqrt[a]" sinon
pub fn format_terme(a: &BigInt, c: &BigInt) -> String {
    if a.is_one() {
        return format!("{c}");
    }

    if c.is_one() {
        return format_sqrt_of_int(a);
    }

    if c.is_negative() && c.magnitude().is_one() {
        return format!("-{}", format_sqrt_of_int(a));
    }

    format!("{c}{}", format_sqrt_of_int(a))
}

/* ------------------------ EXACT final ------------------------ */

/// Forme texte des seaux canoniques ; "0" si vide.
pub fn format_termes(termes: &Termes) -> String {
    let mut it = termes.iter();
    let Some((a0, c0)) = it.next() else {
        return "0".to_string();
    };

    let mut s = format_terme(a0, c0);
    for (a, c) in it {
        s.push_str(if c.is_negative() { " - " } else { " + " });
        s.push_str(&format_terme(a, &c.abs()));
    }
    s
}

/// Trace de décomposition pour la démarche : "Sqrt[12] = 2Sqrt[3]".
pub fn format_decomposition(racine: &BigInt, sp: &BigInt, a: &BigInt) -> String {
    format!("{} = {}", format_sqrt_of_int(racine), format_terme(a, sp))
}
