pub mod helpers;
pub mod reference;
pub mod report;

#[cfg(test)]
mod integration_tests;
