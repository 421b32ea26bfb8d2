//! Page modules

pub mod about;
pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod privacy;
pub mod signin;
pub mod signup;
pub mod transaction_detail;

pub use about::AboutPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use privacy::PrivacyPage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
pub use transaction_detail::TransactionDetailPage;
