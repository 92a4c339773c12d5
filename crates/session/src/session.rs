//! Session controller: intents in, view-models out.

use std::sync::Arc;

use chrono::Utc;
use storefront_cart::{AddItem, Cart, CartCommand, CartEvent, Checkout, Receipt};
use storefront_catalog::{Catalog, CategoryName, Product, SearchQuery};
use storefront_core::{AggregateRoot, CartId, DomainError, DomainResult, SessionId};
use storefront_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::config::SessionConfig;
use crate::intent::Intent;
use crate::navigation::{NavigationState, Transition};
use crate::view_model::ViewModel;

/// Cart event as published on a session's bus.
pub type CartEnvelope = EventEnvelope<CartEvent>;

const CART_AGGREGATE: &str = "cart";

/// One user's storefront session.
///
/// Owns the cart and the navigation state; shares the catalog read-only.
/// Not internally synchronized: callers serialize all calls onto one thread.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: SessionConfig,
    catalog: Option<Arc<Catalog>>,
    cart: Cart,
    navigation: NavigationState,
    last_receipt: Option<Receipt>,
    bus: InMemoryEventBus<CartEnvelope>,
}

impl Session {
    /// Create a session whose catalog is not loaded yet.
    ///
    /// Every intent fails with [`DomainError::NotInitialized`] until
    /// [`Session::initialize`] is called.
    pub fn new(config: SessionConfig) -> Self {
        let session = Self {
            id: SessionId::new(),
            config,
            catalog: None,
            cart: Cart::new(CartId::new()),
            navigation: NavigationState::Home,
            last_receipt: None,
            bus: InMemoryEventBus::new(),
        };
        tracing::info!(session_id = %session.id, "session created");
        session
    }

    /// Create a session over an already loaded (possibly shared) catalog.
    pub fn with_catalog(config: SessionConfig, catalog: Arc<Catalog>) -> Self {
        let mut session = Self::new(config);
        session.catalog = Some(catalog);
        session
    }

    /// Load the catalog and return to Home. The cart is kept.
    pub fn initialize(&mut self) -> Arc<Catalog> {
        let catalog = Arc::new(Catalog::load());
        self.catalog = Some(Arc::clone(&catalog));
        self.navigation = NavigationState::Home;
        self.last_receipt = None;
        tracing::info!(
            session_id = %self.id,
            categories = catalog.category_count(),
            products = catalog.product_count(),
            "session initialized"
        );
        catalog
    }

    pub fn is_initialized(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        self.catalog.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Receive every cart event published from now on.
    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.bus.subscribe()
    }

    /// Subscriptions still alive on this session's bus.
    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    /// Apply one intent and return the view to render next.
    ///
    /// On error the session is left exactly as it was.
    pub fn handle_intent(&mut self, intent: Intent) -> DomainResult<ViewModel> {
        let span = tracing::debug_span!("intent", session_id = %self.id, intent = intent.name());
        let _guard = span.enter();

        let Some(catalog) = self.catalog.clone() else {
            tracing::warn!(intent = intent.name(), "intent rejected: catalog not loaded");
            return Err(DomainError::NotInitialized);
        };

        let mut receipt = None;
        let transition = match intent {
            Intent::SelectCategory { category } => Transition::SelectCategory(category),
            Intent::RunSearch { query } => {
                let query = SearchQuery::parse(&query).inspect_err(|_| {
                    tracing::warn!("intent rejected: empty search query");
                })?;
                let results = query.run(&catalog);
                tracing::debug!(query = %query, matches = results.len(), "search completed");
                Transition::ShowSearchResults {
                    query: query.as_str().to_string(),
                    results,
                }
            }
            Intent::AddToCart { product } => {
                self.dispatch_cart(CartCommand::AddItem(AddItem {
                    product,
                    occurred_at: Utc::now(),
                }));
                Transition::Stay
            }
            Intent::ViewCart => Transition::ViewCart,
            Intent::BackToHome => Transition::BackToHome,
            Intent::Checkout => {
                let events = self.dispatch_cart(CartCommand::Checkout(Checkout {
                    occurred_at: Utc::now(),
                }));
                receipt = events.iter().find_map(CartEvent::receipt);
                if let Some(r) = &receipt {
                    tracing::info!(session_id = %self.id, items = r.item_count, "order placed");
                }
                Transition::BackToHome
            }
        };

        let from = self.navigation.kind();
        self.navigation = core::mem::take(&mut self.navigation).next(transition);
        self.last_receipt = receipt;
        tracing::debug!(%from, to = %self.navigation.kind(), "navigated");

        Ok(self.view_model())
    }

    /// View-model of the current state, without changing anything.
    pub fn view_model(&self) -> ViewModel {
        match &self.navigation {
            NavigationState::Home => ViewModel::Home {
                store_name: self.config.store_name.clone(),
                categories: self.config.home_categories.clone(),
                receipt: self.last_receipt.clone(),
            },
            NavigationState::CategoryView { category } => ViewModel::Category {
                category: category.clone(),
                products: self
                    .catalog
                    .as_deref()
                    .map(|c| c.products_for(category.as_str()).to_vec())
                    .unwrap_or_default(),
            },
            NavigationState::SearchResultsView { query, results } => ViewModel::SearchResults {
                query: query.clone(),
                results: results.clone(),
            },
            NavigationState::CartView => ViewModel::Cart {
                items: self.cart.items().to_vec(),
            },
        }
    }

    pub fn select_category(
        &mut self,
        category: impl Into<CategoryName>,
    ) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::select_category(category))
    }

    pub fn run_search(&mut self, query: &str) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::run_search(query))
    }

    pub fn add_to_cart(&mut self, product: Product) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::add_to_cart(product))
    }

    pub fn view_cart(&mut self) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::ViewCart)
    }

    pub fn back_to_home(&mut self) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::BackToHome)
    }

    /// "Back to Shopping" from the cart; lands on Home like every other back.
    pub fn back_to_shopping(&mut self) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::BackToHome)
    }

    pub fn checkout(&mut self) -> DomainResult<ViewModel> {
        self.handle_intent(Intent::Checkout)
    }

    fn dispatch_cart(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let events = self.cart.execute_command(command);
        if self.config.publish_events {
            self.publish(&events);
        }
        events
    }

    fn publish(&self, events: &[CartEvent]) {
        // Version already includes these events; number them from the first.
        let first = self.cart.version() + 1 - events.len() as u64;
        for (offset, event) in events.iter().enumerate() {
            let envelope = EventEnvelope::new(
                self.id,
                self.cart.id_typed(),
                CART_AGGREGATE,
                first + offset as u64,
                event.clone(),
            );
            if let Err(e) = self.bus.publish(envelope) {
                tracing::warn!(error = %e, "failed to publish cart event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ViewKind;

    fn session() -> Session {
        let mut session = Session::new(SessionConfig::default());
        session.initialize();
        session
    }

    fn t_shirt() -> Product {
        Product::new("T-Shirt", "₹499")
    }

    #[test]
    fn starts_at_home_with_category_buttons() {
        let session = session();
        match session.view_model() {
            ViewModel::Home {
                store_name,
                categories,
                receipt,
            } => {
                assert_eq!(store_name, "Marketplace");
                assert_eq!(categories.len(), 8);
                assert!(receipt.is_none());
            }
            other => panic!("expected home, got {other:?}"),
        }
    }

    #[test]
    fn every_intent_requires_initialization() {
        let mut session = Session::new(SessionConfig::default());
        let intents = [
            Intent::select_category("Sports"),
            Intent::run_search("shirt"),
            Intent::add_to_cart(t_shirt()),
            Intent::ViewCart,
            Intent::BackToHome,
            Intent::Checkout,
        ];

        for intent in intents {
            assert_eq!(session.handle_intent(intent), Err(DomainError::NotInitialized));
        }
        assert!(session.cart().is_empty());
        assert!(session.navigation().is_home());
    }

    #[test]
    fn initialize_recovers_from_not_initialized() {
        let mut session = Session::new(SessionConfig::default());
        assert!(session.select_category("Sports").is_err());

        session.initialize();
        assert!(session.is_initialized());
        assert_eq!(session.select_category("Sports").unwrap().kind(), ViewKind::Category);
    }

    #[test]
    fn sports_category_lists_seeded_products() {
        let mut session = session();
        let vm = session.select_category("Sports").unwrap();

        assert_eq!(
            vm,
            ViewModel::Category {
                category: "Sports".into(),
                products: vec![
                    Product::new("Football", "₹999"),
                    Product::new("Tennis Racket", "₹1599"),
                ],
            }
        );
    }

    #[test]
    fn unknown_category_is_an_empty_listing() {
        let mut session = session();
        let vm = session.select_category("Toys").unwrap();

        assert_eq!(vm.kind(), ViewKind::Category);
        assert!(vm.products().is_empty());
    }

    #[test]
    fn empty_search_leaves_state_untouched() {
        let mut session = session();
        session.select_category("Clothing").unwrap();
        let before = session.navigation().clone();

        assert_eq!(session.run_search("   "), Err(DomainError::EmptyQuery));
        assert_eq!(session.navigation(), &before);
    }

    #[test]
    fn search_with_no_matches_still_navigates() {
        let mut session = session();
        let vm = session.run_search("bicycle").unwrap();

        assert_eq!(vm.kind(), ViewKind::SearchResults);
        assert!(vm.products().is_empty());
        assert!(vm.empty_message().is_some());
    }

    #[test]
    fn search_view_uses_normalized_query() {
        let mut session = session();
        let vm = session.run_search("  SHIRT ").unwrap();

        assert_eq!(
            vm,
            ViewModel::SearchResults {
                query: "shirt".to_string(),
                results: vec![t_shirt()],
            }
        );
    }

    #[test]
    fn add_to_cart_keeps_current_view() {
        let mut session = session();
        let results = session.run_search("shirt").unwrap();

        let after = session.add_to_cart(t_shirt()).unwrap();

        assert_eq!(after, results);
        assert_eq!(session.cart().items(), &[t_shirt()]);
    }

    #[test]
    fn back_to_shopping_skips_category() {
        let mut session = session();
        session.select_category("Sports").unwrap();
        assert_eq!(session.view_cart().unwrap().kind(), ViewKind::Cart);

        let vm = session.back_to_shopping().unwrap();
        assert_eq!(vm.kind(), ViewKind::Home);
        assert!(session.navigation().is_home());
    }

    #[test]
    fn checkout_returns_home_with_receipt_once() {
        let mut session = session();
        session.add_to_cart(t_shirt()).unwrap();
        session.add_to_cart(t_shirt()).unwrap();
        session.view_cart().unwrap();

        let vm = session.checkout().unwrap();

        assert_eq!(vm.kind(), ViewKind::Home);
        assert_eq!(vm.receipt().map(|r| r.item_count), Some(2));
        assert!(session.cart().is_empty());

        // The confirmation is shown once.
        let next = session.back_to_home().unwrap();
        assert!(next.receipt().is_none());
    }

    #[test]
    fn cart_events_are_published_in_sequence() {
        let mut session = session();
        let subscription = session.subscribe();

        session.add_to_cart(t_shirt()).unwrap();
        session.checkout().unwrap();

        let envelopes = subscription.drain();
        assert_eq!(envelopes.len(), 2);
        assert_eq!(envelopes[0].sequence_number(), 1);
        assert_eq!(envelopes[1].sequence_number(), 2);
        assert_eq!(envelopes[0].session_id(), session.id());
        assert_eq!(envelopes[0].aggregate_type(), "cart");
        assert!(
            matches!(envelopes[0].payload(), CartEvent::ItemAdded(e) if e.product == t_shirt())
        );
        assert!(matches!(envelopes[1].payload(), CartEvent::CheckedOut(e) if e.item_count == 1));
    }

    #[test]
    fn publishing_can_be_disabled() {
        let config = SessionConfig {
            publish_events: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);
        session.initialize();
        let subscription = session.subscribe();

        session.add_to_cart(t_shirt()).unwrap();

        assert!(subscription.drain().is_empty());
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn dropped_subscriptions_do_not_accumulate() {
        let config = SessionConfig {
            publish_events: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);
        session.initialize();

        for _ in 0..10_000 {
            drop(session.subscribe());
        }
        session.add_to_cart(t_shirt()).unwrap();

        assert!(session.subscriber_count() <= 1);
    }

    #[test]
    fn reinitialize_keeps_cart_and_returns_home() {
        let mut session = session();
        session.add_to_cart(t_shirt()).unwrap();
        session.view_cart().unwrap();

        session.initialize();

        assert!(session.navigation().is_home());
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn sessions_sharing_a_catalog_are_independent() {
        let catalog = Arc::new(Catalog::load());
        let mut a = Session::with_catalog(SessionConfig::default(), Arc::clone(&catalog));
        let mut b = Session::with_catalog(SessionConfig::default(), Arc::clone(&catalog));

        a.add_to_cart(t_shirt()).unwrap();
        b.select_category("Sports").unwrap();

        assert_eq!(a.cart().len(), 1);
        assert!(b.cart().is_empty());
        assert!(a.navigation().is_home());
        assert_ne!(a.id(), b.id());
        assert_ne!(a.cart().id_typed(), b.cart().id_typed());
    }
}
