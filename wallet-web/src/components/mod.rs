//! UI Components

pub mod auth_gate;
pub mod balance_card;
pub mod flow_chart;
pub mod footer;
pub mod fund_wallet_form;
pub mod loader;
pub mod navbar;
pub mod route_error;
pub mod toast;
pub mod transaction_list;

pub use auth_gate::AuthGate;
pub use balance_card::BalanceCard;
pub use flow_chart::FlowChart;
pub use footer::Footer;
pub use fund_wallet_form::FundWalletForm;
pub use loader::Loader;
pub use navbar::Navbar;
pub use route_error::RouteErrorView;
pub use toast::{Toast, ToastMessage};
pub use transaction_list::TransactionList;
