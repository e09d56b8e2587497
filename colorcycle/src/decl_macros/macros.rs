// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use colorcycle::{CommonResult, throws};
///
/// fn print_it() -> CommonResult<()> {
///     throws!({
///         println!("hello");
///     })
/// }
/// # print_it().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Similar to [`assert_eq!`] but automatically prints the left and right hand side
/// variables if the assertion fails. Useful for debugging tests, since cargo would just
/// print out the left and right values w/out providing information on what variables
/// were being compared.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Assert that two `f64` values are within `1e-9` of each other, printing both
/// expressions on failure.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() < 1e-9,
            "\nleft : `{}` = {}\nright: `{}` = {}",
            stringify!($left),
            left,
            stringify!($right),
            right,
        );
    }};
}
