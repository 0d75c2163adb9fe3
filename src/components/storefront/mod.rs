mod boot;
mod card;
mod cart;
mod home;
mod modal;
mod navbar;
mod products;
mod shell;
mod toast;
mod trending;

pub use shell::Storefront;
