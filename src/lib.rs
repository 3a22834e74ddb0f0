pub mod cli;
pub mod customers;
pub mod error;
pub mod export;
pub mod form;
pub mod order;

pub use customers::CustomerDirectory;
pub use error::{PedidosError, Result};
pub use form::OrderForm;
