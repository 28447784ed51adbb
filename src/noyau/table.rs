// src/noyau/table.rs
//
// Table des symboles : nom -> entier exact.
// - Clés uniques, réaffectation = écrasement (la position d’origine est gardée)
// - Ordre d’insertion conservé seulement pour l’affichage (/print)

use std::collections::HashMap;
use std::fmt;

use num_bigint::BigInt;

#[derive(Clone, Debug, Default)]
pub struct TableSymboles {
    valeurs: HashMap<String, BigInt>,
    ordre: Vec<String>,
}

impl TableSymboles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, nom: &str) -> Option<&BigInt> {
        self.valeurs.get(nom)
    }

    /// Lie `nom` à `valeur` (écrase une liaison existante).
    pub fn affecter(&mut self, nom: &str, valeur: BigInt) {
        if self.valeurs.insert(nom.to_string(), valeur).is_none() {
            self.ordre.push(nom.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.ordre.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordre.is_empty()
    }

    /// Liaisons dans l’ordre de première affectation.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> + '_ {
        self.ordre
            .iter()
            .filter_map(|nom| self.valeurs.get(nom).map(|v| (nom.as_str(), v)))
    }
}

/// Format du dump : `{a=5, b=-3}`.
impl fmt::Display for TableSymboles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (nom, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{nom}={v}")?;
        }
        f.write_str("}")
    }
}
