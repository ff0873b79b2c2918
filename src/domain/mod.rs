pub mod blog;
pub mod category;
pub mod contact;
pub mod pages;
