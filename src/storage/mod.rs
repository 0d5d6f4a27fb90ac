pub mod interface;
pub mod rounds;
#[cfg(test)]
pub mod tests;
