pub mod accounts;
pub mod admin;
pub mod announcements;
pub mod favorites;
pub mod reports;
pub mod session;

pub use accounts::{Accounts, Registration};
pub use admin::{Admin, Overview};
pub use announcements::Announcements;
pub use favorites::Favorites;
pub use reports::{split_open_closed, Reports};
pub use session::Session;
