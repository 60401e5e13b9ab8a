use crate::core::Greeter;

pub const GREETING: &str = "Hello, World!";

/// Returns the fixed greeting, without a trailing newline.
pub fn greet() -> &'static str {
    GREETING
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HelloWorld;

impl Greeter for HelloWorld {
    fn greet(&self) -> &str {
        greet()
    }
}
