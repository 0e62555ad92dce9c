//! Flat record types, one module per backend resource.

pub mod common;

pub mod categorie_produit;
pub mod facture;
pub mod fournisseur;
pub mod operateur;
pub mod produit;
pub mod reglement;
pub mod secteur_activite;
pub mod stock;
