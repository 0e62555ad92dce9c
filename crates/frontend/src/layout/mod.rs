pub mod sidebar;

use leptos::prelude::*;

use crate::app::ActiveView;
use crate::domain::categorie_produit::CategoriesView;
use crate::domain::facture::FacturesView;
use crate::domain::fournisseur::FournisseursView;
use crate::domain::operateur::OperateursView;
use crate::domain::produit::ProduitsView;
use crate::domain::reglement::ReglementsView;
use crate::domain::secteur_activite::SecteursView;
use crate::domain::stock::StocksView;
use sidebar::Sidebar;

#[component]
pub fn Shell(active: RwSignal<ActiveView>) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{"🏪 Achat Application"}</h1>
                <p>{"Gestion des Achats"}</p>
            </header>
            <div class="app-body">
                <Sidebar active=active />
                <main class="app-content">
                    {move || match active.get() {
                        ActiveView::Produits => view! { <ProduitsView /> }.into_any(),
                        ActiveView::Stocks => view! { <StocksView /> }.into_any(),
                        ActiveView::Fournisseurs => view! { <FournisseursView /> }.into_any(),
                        ActiveView::Factures => view! { <FacturesView /> }.into_any(),
                        ActiveView::Operateurs => view! { <OperateursView /> }.into_any(),
                        ActiveView::Reglements => view! { <ReglementsView /> }.into_any(),
                        ActiveView::Categories => view! { <CategoriesView /> }.into_any(),
                        ActiveView::Secteurs => view! { <SecteursView /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
