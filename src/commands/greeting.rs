//! The greeting commands described by the command table.

/// The hello world greeting.
pub fn hello() -> String {
    "Hello, world!".to_string()
}

/// The goodbye world message.
pub fn goodbye() -> String {
    "Goodbye, world!".to_string()
}

/// A personalized greeting for `name`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        assert_eq!(hello(), "Hello, world!");
    }

    #[test]
    fn test_goodbye() {
        assert_eq!(goodbye(), "Goodbye, world!");
    }

    #[test]
    fn test_greet_by_name() {
        assert_eq!(greet("Alice"), "Hello, Alice!");
        assert_eq!(greet("world"), "Hello, world!");
    }
}
