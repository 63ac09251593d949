// src/noyau/distance.rs
//
// Valeur exacte Σ c·√a (somme de racines à coefficients entiers).
// - forme canonique construite une fois (canon.rs), jamais modifiée ensuite
// - égalité = égalité des seaux canoniques = égalité algébrique
// - opérations (+, -, ×, négation) : nouvelles valeurs, re-canonisées

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::debug;

use super::canon::{canon_termes, fusionne, verse, Termes};
use super::erreur::ErreurNoyau;
use super::format::format_termes;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Distance {
    termes: Termes,
}

impl Distance {
    /// Construit depuis des termes (radicande, coefficient).
    ///
    /// Les radicandes sont décomposés, les collisions fusionnées, les zéros retirés.
    /// Un radicande ≤ 0 fait échouer toute la construction.
    pub fn depuis_termes<I, R, C>(termes: I) -> Result<Self, ErreurNoyau>
    where
        I: IntoIterator<Item = (R, C)>,
        R: Into<BigInt>,
        C: Into<BigInt>,
    {
        let mut nb_bruts = 0usize;
        let bruts = termes.into_iter().map(|(r, c)| -> (BigInt, BigInt) {
            nb_bruts += 1;
            (r.into(), c.into())
        });

        let termes = canon_termes(bruts)?;
        debug!(bruts = nb_bruts, canon = termes.len(), "distance construite");
        Ok(Self { termes })
    }

    /// `entier · √base`, vu comme le terme unique `{base: entier}`.
    pub fn nouvelle(
        entier: impl Into<BigInt>,
        base: impl Into<BigInt>,
    ) -> Result<Self, ErreurNoyau> {
        Self::depuis_termes([(base.into(), entier.into())])
    }

    /// Depuis des seaux déjà versés (clés sans carré) ; les zéros sont retirés.
    pub(crate) fn depuis_seaux(mut termes: Termes) -> Self {
        termes.retain(|_, c| !c.is_zero());
        Self { termes }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn est_zero(&self) -> bool {
        self.termes.is_empty()
    }

    /// Vrai si la valeur est un entier (aucune racine non triviale).
    pub fn est_entier(&self) -> bool {
        self.termes.keys().all(|a| a.is_one())
    }

    /// Coefficient du seau `a` ; 0 si `a` n’est pas une clé canonique.
    pub fn coefficient(&self, a: &BigInt) -> BigInt {
        self.termes.get(a).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Partie entière au sens "seau 1" (pas une troncature de la valeur).
    pub fn partie_entiere(&self) -> BigInt {
        self.coefficient(&BigInt::one())
    }

    /// Seaux canoniques par radicande croissant.
    pub fn termes(&self) -> impl Iterator<Item = (&BigInt, &BigInt)> + '_ {
        self.termes.iter()
    }

    pub fn nb_termes(&self) -> usize {
        self.termes.len()
    }

    pub(crate) fn seaux(&self) -> &Termes {
        &self.termes
    }

    pub fn fois_entier(&self, k: &BigInt) -> Distance {
        if k.is_zero() {
            return Distance::zero();
        }
        let termes = self
            .termes
            .iter()
            .map(|(a, c)| (a.clone(), c * k))
            .collect();
        Distance { termes }
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<BigInt> for Distance {
    fn from(n: BigInt) -> Self {
        let mut termes = Termes::new();
        if !n.is_zero() {
            termes.insert(BigInt::one(), n);
        }
        Distance { termes }
    }
}

impl From<i64> for Distance {
    fn from(n: i64) -> Self {
        Distance::from(BigInt::from(n))
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_termes(&self.termes))
    }
}

/* ------------------------ Opérations ------------------------ */

impl Neg for &Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        let termes = self.termes.iter().map(|(a, c)| (a.clone(), -c)).collect();
        Distance { termes }
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        -&self
    }
}

impl Add for &Distance {
    type Output = Distance;

    fn add(self, rhs: &Distance) -> Distance {
        Distance {
            termes: fusionne(&self.termes, &rhs.termes),
        }
    }
}

impl Sub for &Distance {
    type Output = Distance;

    fn sub(self, rhs: &Distance) -> Distance {
        self + &(-rhs)
    }
}

/// √a·√b = g·√((a/g)(b/g)) avec g = pgcd(a, b) ; a, b sans carré => produit sans carré.
impl Mul for &Distance {
    type Output = Distance;

    fn mul(self, rhs: &Distance) -> Distance {
        let mut seaux = Termes::new();
        for (a, c) in &self.termes {
            for (b, d) in &rhs.termes {
                let g = a.gcd(b);
                let racine = (a / &g) * (b / &g);
                verse(&mut seaux, racine, c * d * g);
            }
        }
        seaux.retain(|_, c| !c.is_zero());
        Distance { termes: seaux }
    }
}

macro_rules! op_par_valeur {
    ($tr:ident, $m:ident) => {
        impl $tr for Distance {
            type Output = Distance;

            fn $m(self, rhs: Distance) -> Distance {
                (&self).$m(&rhs)
            }
        }
    };
}

op_par_valeur!(Add, add);
op_par_valeur!(Sub, sub);
op_par_valeur!(Mul, mul);
