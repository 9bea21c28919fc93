pub mod compare;
pub mod config;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod normalize;
pub mod persist;
pub mod rankings;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
mod test_support;
