pub mod expr;

#[cfg(test)]
mod laws;
