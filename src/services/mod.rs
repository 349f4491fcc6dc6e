pub mod export;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod retry;

#[cfg(test)]
mod test_support;
