//! Small number helpers used by the storefront's onboarding exercises.

/// Returns the larger of two values; ties return `a`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// "FizzBuzz" for multiples of 15, "Fizz" for 3, "Buzz" for 5, otherwise
/// the number itself.
pub fn fizz_buzz(n: u32) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}
