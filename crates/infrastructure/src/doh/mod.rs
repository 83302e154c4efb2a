mod client;

pub use client::DohClient;
