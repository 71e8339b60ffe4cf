//! Data model types for service pricing, combos and drafts.

mod combo;
mod draft;
mod json;
mod menu_item;
mod service;

pub use combo::{
    BreakdownItem, CategoryBreakdown, CategorySelection, ComboRequest, ComboTotal,
    SelectedItem, SelectionBehavior,
};
pub use draft::DraftInput;
pub use menu_item::{ComboOffer, MenuItem, PriceValue};
pub use service::{Service, ServiceDetails, ServiceKind};
