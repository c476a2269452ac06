//! Börsdata API model types.

pub(crate) mod dates;
mod instrument;
mod reference;
mod report;
mod stock_price;
mod stock_split;

pub use instrument::*;
pub use reference::*;
pub use report::*;
pub use stock_price::*;
pub use stock_split::*;
