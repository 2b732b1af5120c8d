pub mod client;
mod seed;
