//! Request middleware.

pub mod auth;

#[cfg(test)]
mod test;
