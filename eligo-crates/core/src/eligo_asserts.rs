#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ELIGO_ASSERT_LEVEL_DEFINITION: u8 = ELIGO_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const ELIGO_ASSERT_LEVEL_DEFINITION: u8 = ELIGO_ASSERT_ADVANCED;

pub const ELIGO_ASSERT_SIMPLE: u8 = 1;
pub const ELIGO_ASSERT_MODERATE: u8 = 2;
pub const ELIGO_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! eligo_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ELIGO_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ELIGO_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! eligo_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::ELIGO_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ELIGO_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! eligo_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::ELIGO_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ELIGO_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
