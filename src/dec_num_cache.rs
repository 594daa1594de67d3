use lazy_static::*;

use crate::dec_num_constants::*;
use crate::DecInt;

lazy_static! {
    pub static ref SMALL_CACHE: [DecInt; MAX_CONSTANT + 1] = [
        DecInt::from_raw(vec![0]),
        DecInt::from_raw(vec![1]),
        DecInt::from_raw(vec![2]),
        DecInt::from_raw(vec![3]),
        DecInt::from_raw(vec![4]),
        DecInt::from_raw(vec![5]),
        DecInt::from_raw(vec![6]),
        DecInt::from_raw(vec![7]),
        DecInt::from_raw(vec![8]),
        DecInt::from_raw(vec![9]),
        DecInt::from_raw(vec![0, 1]),
        DecInt::from_raw(vec![1, 1]),
        DecInt::from_raw(vec![2, 1]),
        DecInt::from_raw(vec![3, 1]),
        DecInt::from_raw(vec![4, 1]),
        DecInt::from_raw(vec![5, 1]),
        DecInt::from_raw(vec![6, 1]),
    ];
}
