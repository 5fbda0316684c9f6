pub mod gate;
pub mod identity;
pub mod merger;
pub mod message_processor;
pub mod normalizer;
pub mod registrar;
pub mod store;

#[cfg(test)]
pub mod testing;
