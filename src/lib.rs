//! Dec Num \
//! This crate provides:
//! - [`DecInt`]: arbitrary-precision non-negative integers stored as decimal digits, with the full schoolbook arithmetic suite.
//! - Special functions over [`DecInt`]: [`sqrt`], [`factorial`], [`nth_fibonacci`], [`nth_catalan`].

mod dec_int;
mod dec_num_cache;
mod dec_num_constants;
mod error;
mod special;

#[cfg(test)]
mod proptests;

pub use dec_int::DecInt;
pub use error::{ArithmeticError, Result};
pub use special::{factorial, nth_catalan, nth_fibonacci, sqrt};

#[cfg(test)]
mod tests {
    use crate::DecInt;

    #[test]
    fn it_works() {
        let a: DecInt = "10000000000000".into();
        let b: DecInt = "900000000000".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
    }
}
