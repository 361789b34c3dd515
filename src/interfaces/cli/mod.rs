pub mod cart_item;
pub mod output;
