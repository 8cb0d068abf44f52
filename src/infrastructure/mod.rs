pub mod charting;
pub mod dom;
pub mod events;
pub mod input;
pub mod layout;
pub mod observer;
pub mod services;
