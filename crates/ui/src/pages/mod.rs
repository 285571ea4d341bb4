//! Page Components for Parts Admin
//!
//! ## Available Pages
//!
//! - **LoginPage**: credential gate shown before the shell
//! - **DashboardPage**: record totals
//! - **UsersPage**: user list with search, role filter and pagination
//! - **ConnectorsPage**: connector list with search, supplier filter and pagination
//!

pub mod connectors;
pub mod dashboard;
pub mod login;
pub mod users;

pub use connectors::ConnectorsPage;
pub use dashboard::{DashboardPage, DashboardStats};
pub use login::LoginPage;
pub use users::UsersPage;
