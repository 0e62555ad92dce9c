use leptos::prelude::*;

use crate::layout::Shell;

/// The eight resource views of the application.
///
/// Navigation is explicit routing state owned by the root component and
/// passed down, not a shared mutable "current view" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Produits,
    Stocks,
    Fournisseurs,
    Factures,
    Operateurs,
    Reglements,
    Categories,
    Secteurs,
}

impl ActiveView {
    pub fn all() -> [ActiveView; 8] {
        [
            ActiveView::Produits,
            ActiveView::Stocks,
            ActiveView::Fournisseurs,
            ActiveView::Factures,
            ActiveView::Operateurs,
            ActiveView::Reglements,
            ActiveView::Categories,
            ActiveView::Secteurs,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Produits => "Produits",
            ActiveView::Stocks => "Stocks",
            ActiveView::Fournisseurs => "Fournisseurs",
            ActiveView::Factures => "Factures",
            ActiveView::Operateurs => "Opérateurs",
            ActiveView::Reglements => "Règlements",
            ActiveView::Categories => "Catégories",
            ActiveView::Secteurs => "Secteurs d'activité",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActiveView::Produits => "products",
            ActiveView::Stocks => "inventory",
            ActiveView::Fournisseurs => "suppliers",
            ActiveView::Factures => "invoices",
            ActiveView::Operateurs => "operators",
            ActiveView::Reglements => "payments",
            ActiveView::Categories => "categories",
            ActiveView::Secteurs => "sectors",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(ActiveView::Produits);

    view! {
        <Shell active=active />
    }
}
