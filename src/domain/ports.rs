/// Source of the greeting text the harness checks.
pub trait Greeter {
    fn greet(&self) -> &str;
}

impl<G: Greeter + ?Sized> Greeter for &G {
    fn greet(&self) -> &str {
        (**self).greet()
    }
}
