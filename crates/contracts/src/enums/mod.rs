pub mod categorie_fournisseur;
