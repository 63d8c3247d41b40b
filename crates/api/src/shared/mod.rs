#[cfg(test)]
pub mod test_helpers;
pub mod usecase;
