use serde::{Deserialize, Serialize};

/// Supplier categories as defined by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategorieFournisseur {
    Ordinaire,
    Conventionne,
}

impl CategorieFournisseur {
    /// Wire code, as it appears in the JSON contract.
    pub fn code(&self) -> &'static str {
        match self {
            CategorieFournisseur::Ordinaire => "ORDINAIRE",
            CategorieFournisseur::Conventionne => "CONVENTIONNE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategorieFournisseur::Ordinaire => "Ordinaire",
            CategorieFournisseur::Conventionne => "Conventionné",
        }
    }

    pub fn all() -> Vec<CategorieFournisseur> {
        vec![
            CategorieFournisseur::Ordinaire,
            CategorieFournisseur::Conventionne,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ORDINAIRE" => Some(CategorieFournisseur::Ordinaire),
            "CONVENTIONNE" => Some(CategorieFournisseur::Conventionne),
            _ => None,
        }
    }
}

impl Default for CategorieFournisseur {
    fn default() -> Self {
        CategorieFournisseur::Ordinaire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_round_trip() {
        for cat in CategorieFournisseur::all() {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.code()));
            let back: CategorieFournisseur = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }
}
