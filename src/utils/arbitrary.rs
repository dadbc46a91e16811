//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// Any coordinate a user could plausibly type, including negative ones
#[must_use]
pub fn coordinate(gen: &mut quickcheck::Gen) -> i64 {
    i64::from(i32::arbitrary(gen))
}

/// Image dimension in the range `image` can actually decode: at least 1px
#[must_use]
pub fn dimension(gen: &mut quickcheck::Gen) -> u32 {
    u32::from(u16::arbitrary(gen)).max(1)
}
