use core::convert::Infallible;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Aggregate, AggregateRoot, CartId};
use storefront_events::{Event, execute};

use crate::receipt::Receipt;

/// Aggregate root: Cart.
///
/// Lines are kept in insertion order and duplicates are separate lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    items: Vec<Product>,
    version: u64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    /// Snapshot of the cart lines in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Handle a command and apply the resulting events.
    pub fn execute_command(&mut self, command: CartCommand) -> Vec<CartEvent> {
        match execute(self, &command) {
            Ok(events) => events,
            Err(never) => match never {},
        }
    }

    /// Append `product` to the end of the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        self.execute_command(CartCommand::AddItem(AddItem {
            product,
            occurred_at: Utc::now(),
        }));
    }

    /// Confirm the order and empty the cart.
    pub fn checkout(&mut self) -> Receipt {
        let event = self.checked_out(Utc::now());
        let receipt = Receipt::from(&event);
        self.apply(&CartEvent::CheckedOut(event));
        receipt
    }

    pub fn clear(&mut self) {
        self.execute_command(CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        }));
    }

    fn checked_out(&self, occurred_at: DateTime<Utc>) -> CheckedOut {
        CheckedOut {
            cart_id: self.id,
            item_count: self.items.len(),
            occurred_at,
        }
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    Checkout(Checkout),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CheckedOut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedOut {
    pub cart_id: CartId,
    pub item_count: usize,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    CheckedOut(CheckedOut),
    CartCleared(CartCleared),
}

impl CartEvent {
    /// The receipt carried by a checkout event.
    pub fn receipt(&self) -> Option<Receipt> {
        match self {
            CartEvent::CheckedOut(e) => Some(Receipt::from(e)),
            _ => None,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::CheckedOut(_) => "cart.checked_out",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::CheckedOut(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => self.items.push(e.product.clone()),
            CartEvent::CheckedOut(_) | CartEvent::CartCleared(_) => self.items.clear(),
        }

        // +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            CartCommand::AddItem(cmd) => {
                tracing::debug!(cart_id = %self.id, product = %cmd.product, "adding item to cart");
                CartEvent::ItemAdded(ItemAdded {
                    cart_id: self.id,
                    product: cmd.product.clone(),
                    occurred_at: cmd.occurred_at,
                })
            }
            CartCommand::Checkout(cmd) => CartEvent::CheckedOut(self.checked_out(cmd.occurred_at)),
            CartCommand::ClearCart(cmd) => CartEvent::CartCleared(CartCleared {
                cart_id: self.id,
                occurred_at: cmd.occurred_at,
            }),
        };
        Ok(vec![event])
    }
}
