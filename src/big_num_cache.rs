use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_limbs(vec![n as u32], false));
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_limbs(vec![n as u32], true));
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE[0], BigInt::ZERO);
    assert_eq!(NEG_CACHE[0], BigInt::ZERO);
    assert!(!NEG_CACHE[0].is_negative());
    assert_eq!(POS_CACHE[MAX_CONSTANT].to_string(), "16");
    assert_eq!(NEG_CACHE[7].to_string(), "-7");
}
